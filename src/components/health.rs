use bevy_ecs::prelude::Component;

/// Remaining hit points of an enemy. Dead at `<= 0`.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct EnemyHealth(pub f32);

impl EnemyHealth {
    pub fn is_dead(&self) -> bool {
        self.0 <= 0.0
    }
}

/// Red damage flash on the player.
///
/// The flash fades red to white over [`HurtFlash::FLASH_SECONDS`]. The damage
/// shader stays on until `since_hurt` passes the configured cooldown.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct HurtFlash {
    /// Progress through the current flash, `None` when no flash is running.
    pub flash_elapsed: Option<f32>,
    /// Seconds since the player last took damage.
    pub since_hurt: f32,
    pub shader_active: bool,
}

impl HurtFlash {
    pub const FLASH_SECONDS: f32 = 1.0;

    pub fn hit(&mut self) {
        self.flash_elapsed = Some(0.0);
        self.since_hurt = 0.0;
        self.shader_active = true;
    }

    /// Blend factor towards red, 1.0 at the start of a flash and 0.0 when idle.
    pub fn redness(&self) -> f32 {
        match self.flash_elapsed {
            Some(t) => {
                let half = Self::FLASH_SECONDS * 0.5;
                if t < half { t / half } else { 1.0 - (t - half) / half }
            }
            None => 0.0,
        }
    }
}

impl Default for HurtFlash {
    fn default() -> Self {
        HurtFlash {
            flash_elapsed: None,
            since_hurt: 5.0,
            shader_active: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_flash_is_idle_and_long_since_hurt() {
        let flash = HurtFlash::default();
        assert_eq!(flash.redness(), 0.0);
        assert!(flash.since_hurt > 1.2);
        assert!(!flash.shader_active);
    }

    #[test]
    fn hit_restarts_the_flash() {
        let mut flash = HurtFlash::default();
        flash.hit();
        assert_eq!(flash.since_hurt, 0.0);
        assert!(flash.shader_active);
        flash.flash_elapsed = Some(0.5);
        assert!((flash.redness() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn enemy_death_threshold_is_inclusive() {
        assert!(EnemyHealth(0.0).is_dead());
        assert!(!EnemyHealth(0.1).is_dead());
    }
}
