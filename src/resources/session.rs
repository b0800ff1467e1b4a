//! Per-level session state and cross-level progress.
//!
//! [`GameSession`] replaces what would otherwise be loose globals on the
//! scene: player health, the frozen flag, the input routing mode and the
//! gameplay cooldown accumulators. It is recreated whenever a level is torn
//! down. [`Progress`] holds the only state that survives from one level to
//! the next.

use bevy_ecs::prelude::Resource;

/// How controller input is interpreted in the current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputMode {
    /// Any confirm starts the level.
    #[default]
    StartGame,
    /// Movement, aiming and pause.
    Attack,
    /// Any confirm resumes play.
    DismissPause,
    /// Any confirm moves on to a fresh level.
    NextLevel,
    /// Input is ignored.
    DoNothing,
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameSession {
    pub health: i32,
    /// While frozen, every gameplay system is skipped.
    pub frozen: bool,
    pub input_mode: InputMode,
    /// Time accumulated towards the next periodic health drop.
    pub health_drop_elapsed: f32,
    /// Time since the last projectile was thrown.
    pub since_throw: f32,
    /// Time spent in the victory delay, `None` outside Limbo.
    pub victory_elapsed: Option<f32>,
}

impl GameSession {
    pub fn new(throw_cooldown: f32) -> Self {
        GameSession {
            health: 0,
            frozen: true,
            input_mode: InputMode::StartGame,
            health_drop_elapsed: 0.0,
            since_throw: throw_cooldown,
            victory_elapsed: None,
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Cross-level progress. Difficulty starts at 1 and goes up with every win.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub difficulty: u32,
}

impl Default for Progress {
    fn default() -> Self {
        Progress { difficulty: 1 }
    }
}

/// Health tiers by difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthTiers {
    pub base: i32,
    pub step: i32,
    pub floor: i32,
}

impl Default for HealthTiers {
    fn default() -> Self {
        HealthTiers {
            base: 1000,
            step: 100,
            floor: 200,
        }
    }
}

impl HealthTiers {
    /// Starting health for a level at `difficulty`.
    ///
    /// Difficulty 0 and 1 start at `base`, 2 through 7 lose `step` per level
    /// and 8 or more bottom out at `floor`.
    pub fn starting_health(&self, difficulty: u32) -> i32 {
        match difficulty {
            0 | 1 => self.base,
            2..=7 => self.base - self.step * difficulty as i32,
            _ => self.floor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_health_tiers() {
        let tiers = HealthTiers::default();
        assert_eq!(tiers.starting_health(0), 1000);
        assert_eq!(tiers.starting_health(1), 1000);
        assert_eq!(tiers.starting_health(2), 800);
        assert_eq!(tiers.starting_health(7), 300);
        assert_eq!(tiers.starting_health(8), 200);
        assert_eq!(tiers.starting_health(40), 200);
    }

    #[test]
    fn new_session_is_frozen_and_ready_to_throw() {
        let session = GameSession::new(0.3);
        assert!(session.frozen);
        assert_eq!(session.input_mode, InputMode::StartGame);
        assert!(session.since_throw >= 0.3);
        assert_eq!(session.victory_elapsed, None);
    }

    #[test]
    fn progress_starts_at_one() {
        assert_eq!(Progress::default().difficulty, 1);
    }
}
