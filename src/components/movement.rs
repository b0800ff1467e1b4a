//! Movement capabilities.
//!
//! Each movable entity carries exactly one of these. They hold only the
//! per-entity movement state; the integration itself happens in
//! [`crate::systems::movement`].

use bevy_ecs::prelude::Component;
use glam::Vec2;

use super::facing::Facing;

/// Player-driven movement.
///
/// `intent` is written by the input router for the current tick and zeroed by
/// the movement system after it is integrated.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct PlayerMove {
    pub intent: Vec2,
    pub last_facing: Facing,
}

/// Enemy chase state.
///
/// `attacking` latches the first time the player comes inside the sense
/// radius and never resets for the lifetime of the component.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct EnemyMove {
    pub attacking: bool,
}

/// Straight-line projectile flight.
#[derive(Component, Debug, Clone, Copy)]
pub struct ProjectileMove {
    direction: Vec2,
}

impl ProjectileMove {
    /// The direction is normalized once here and never again.
    pub fn new(direction: Vec2) -> Self {
        ProjectileMove {
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn direction(&self) -> Vec2 {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projectile_direction_is_unit_length() {
        let p = ProjectileMove::new(Vec2::new(3.0, 4.0));
        assert!((p.direction().length() - 1.0).abs() < 1e-6);
        assert!((p.direction().x - 0.6).abs() < 1e-6);
    }

    #[test]
    fn zero_direction_projectile_stays_put() {
        assert_eq!(ProjectileMove::new(Vec2::ZERO).direction(), Vec2::ZERO);
    }
}
