//! Countdown to automatic removal.
//!
//! Killed enemies get a [`Ttl`] so their death clip can play out before the
//! corpse leaves the level. See [`crate::systems::ttl::ttl_system`].

use bevy_ecs::prelude::Component;

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Ttl {
    /// Seconds left before the entity is removed.
    pub remaining: f32,
}

impl Ttl {
    pub fn new(seconds: f32) -> Self {
        Ttl { remaining: seconds }
    }

    /// Run the countdown by `dt` and report whether it has expired.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        self.remaining <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_at_zero() {
        let mut ttl = Ttl::new(0.5);
        assert!(!ttl.tick(0.25));
        assert!(ttl.tick(0.25));
    }
}
