//! Game mode state machine.
//!
//! The machine itself is pure: [`GameMode::transition`] maps the current mode
//! and a [`ModeEvent`] to a [`Transition`] that lists, as plain data, every
//! side effect the change requires (exit effects of the old mode first, then
//! enter effects of the new one). Systems never switch modes directly. They
//! push events onto [`NextGameState`], and
//! [`apply_pending_transitions`](crate::systems::gamestate::apply_pending_transitions)
//! runs them through the machine and interprets the effects against the world.
//!
//! Legal edges:
//!
//! | from           | event                 | to      |
//! |----------------|-----------------------|---------|
//! | Initial        | `Start`               | Active  |
//! | Active         | `Pause`               | Paused  |
//! | Paused         | `Dismiss`             | Active  |
//! | Active         | `HealthDepleted`      | Lose    |
//! | Active         | `LevelExitReached`    | Limbo   |
//! | Limbo          | `VictoryDelayElapsed` | Win     |
//! | Win, Lose      | `NextLevel`           | Initial (fresh scene) |
//!
//! Anything else is ignored.

use bevy_ecs::prelude::Resource;
use smallvec::SmallVec;

use crate::components::banner::BannerKind;
use crate::events::audio::Cue;
use crate::resources::session::InputMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    #[default]
    Initial,
    Active,
    Paused,
    Limbo,
    Win,
    Lose,
}

/// Requests that may move the machine along an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeEvent {
    Start,
    Pause,
    Dismiss,
    HealthDepleted,
    LevelExitReached,
    VictoryDelayElapsed,
    NextLevel,
}

/// Side effects of entering or leaving a mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModeEffect {
    /// Tear down every non-persistent entity and reset per-level state.
    ResetScene,
    StartMusic,
    PauseMusic,
    ResumeMusic,
    PlayCue(Cue),
    BuildLevel,
    ResetHealth,
    GrantHealth(i32),
    SetFrozen(bool),
    SetInputMode(InputMode),
    /// Zero the stored movement and attack vectors.
    ClearMovement,
    /// Drop chase and collision from every enemy and play its death clip.
    StripEnemies,
    ShowBanner(BannerKind),
    ClearBanners,
    IncrementDifficulty,
}

pub type Effects = SmallVec<[ModeEffect; 8]>;

/// A legal mode change and the effects to apply, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub from: GameMode,
    pub to: GameMode,
    pub effects: Effects,
}

impl GameMode {
    /// Destination of `event` from this mode, if the edge exists.
    pub fn next(self, event: ModeEvent) -> Option<GameMode> {
        use GameMode::*;
        use ModeEvent::*;
        match (self, event) {
            (Initial, Start) => Some(Active),
            (Active, Pause) => Some(Paused),
            (Paused, Dismiss) => Some(Active),
            (Active, HealthDepleted) => Some(Lose),
            (Active, LevelExitReached) => Some(Limbo),
            (Limbo, VictoryDelayElapsed) => Some(Win),
            (Win | Lose, NextLevel) => Some(Initial),
            _ => None,
        }
    }

    pub fn transition(self, event: ModeEvent) -> Option<Transition> {
        let to = self.next(event)?;
        let mut effects = self.exit_effects();
        if event == ModeEvent::NextLevel {
            effects.push(ModeEffect::ResetScene);
        }
        effects.extend(to.enter_effects());
        Some(Transition {
            from: self,
            to,
            effects,
        })
    }

    pub fn enter_effects(self) -> Effects {
        use ModeEffect::*;
        let effects: &[ModeEffect] = match self {
            GameMode::Initial => &[
                StartMusic,
                BuildLevel,
                ResetHealth,
                SetFrozen(true),
                SetInputMode(InputMode::StartGame),
                ShowBanner(BannerKind::TapToStart),
                ShowBanner(BannerKind::LevelNumber),
            ],
            GameMode::Active => &[SetFrozen(false), SetInputMode(InputMode::Attack)],
            GameMode::Paused => &[SetFrozen(true), SetInputMode(InputMode::DismissPause)],
            GameMode::Limbo => &[
                SetInputMode(InputMode::DoNothing),
                ClearMovement,
                StripEnemies,
                GrantHealth(LIMBO_HEALTH_BONUS),
                PauseMusic,
                PlayCue(Cue::Win),
            ],
            GameMode::Win => &[
                SetFrozen(true),
                SetInputMode(InputMode::NextLevel),
                ShowBanner(BannerKind::YouWon),
            ],
            GameMode::Lose => &[
                SetFrozen(true),
                SetInputMode(InputMode::NextLevel),
                ShowBanner(BannerKind::YouDied),
            ],
        };
        effects.iter().copied().collect()
    }

    pub fn exit_effects(self) -> Effects {
        let mut effects = Effects::new();
        effects.push(ModeEffect::ClearBanners);
        match self {
            GameMode::Limbo => effects.push(ModeEffect::ResumeMusic),
            GameMode::Win => effects.push(ModeEffect::IncrementDifficulty),
            _ => {}
        }
        effects
    }
}

/// Health granted when the player reaches the level exit.
pub const LIMBO_HEALTH_BONUS: i32 = 30;

/// Authoritative current mode.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Default)]
pub struct GameState {
    current: GameMode,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> GameMode {
        self.current
    }

    /// Update the current mode immediately.
    ///
    /// Prefer requesting transitions via [`NextGameState`] so effects run.
    pub fn set(&mut self, mode: GameMode) {
        self.current = mode;
    }
}

/// Mode events requested during the current tick, applied in order.
#[derive(Resource, Debug, Clone, Default)]
pub struct NextGameState {
    pending: SmallVec<[ModeEvent; 4]>,
}

impl NextGameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `event`. The transition is applied at the end of the tick.
    pub fn request(&mut self, event: ModeEvent) {
        self.pending.push(event);
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn take(&mut self) -> SmallVec<[ModeEvent; 4]> {
        std::mem::take(&mut self.pending)
    }

    pub fn reset(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODES: [GameMode; 6] = [
        GameMode::Initial,
        GameMode::Active,
        GameMode::Paused,
        GameMode::Limbo,
        GameMode::Win,
        GameMode::Lose,
    ];
    const EVENTS: [ModeEvent; 7] = [
        ModeEvent::Start,
        ModeEvent::Pause,
        ModeEvent::Dismiss,
        ModeEvent::HealthDepleted,
        ModeEvent::LevelExitReached,
        ModeEvent::VictoryDelayElapsed,
        ModeEvent::NextLevel,
    ];

    #[test]
    fn only_listed_edges_exist() {
        let mut legal = 0;
        for mode in MODES {
            for event in EVENTS {
                if mode.next(event).is_some() {
                    legal += 1;
                }
            }
        }
        assert_eq!(legal, 8);
        assert_eq!(GameMode::Paused.next(ModeEvent::HealthDepleted), None);
        assert_eq!(GameMode::Limbo.next(ModeEvent::LevelExitReached), None);
        assert_eq!(GameMode::Initial.next(ModeEvent::Pause), None);
    }

    #[test]
    fn lose_freezes_and_waits_for_next_level() {
        let t = GameMode::Active
            .transition(ModeEvent::HealthDepleted)
            .unwrap();
        assert_eq!(t.to, GameMode::Lose);
        assert_eq!(t.effects[0], ModeEffect::ClearBanners);
        assert!(t.effects.contains(&ModeEffect::SetFrozen(true)));
        assert!(
            t.effects
                .contains(&ModeEffect::SetInputMode(InputMode::NextLevel))
        );
        assert!(t.effects.contains(&ModeEffect::ShowBanner(BannerKind::YouDied)));
    }

    #[test]
    fn limbo_strips_enemies_and_rewards() {
        let t = GameMode::Active
            .transition(ModeEvent::LevelExitReached)
            .unwrap();
        assert_eq!(t.to, GameMode::Limbo);
        assert!(t.effects.contains(&ModeEffect::StripEnemies));
        assert!(t.effects.contains(&ModeEffect::GrantHealth(30)));
        assert!(t.effects.contains(&ModeEffect::PlayCue(Cue::Win)));
        assert!(!t.effects.contains(&ModeEffect::SetFrozen(true)));
    }

    #[test]
    fn leaving_limbo_resumes_music_before_win_effects() {
        let t = GameMode::Limbo
            .transition(ModeEvent::VictoryDelayElapsed)
            .unwrap();
        let resume = t
            .effects
            .iter()
            .position(|e| *e == ModeEffect::ResumeMusic)
            .unwrap();
        let banner = t
            .effects
            .iter()
            .position(|e| *e == ModeEffect::ShowBanner(BannerKind::YouWon))
            .unwrap();
        assert!(resume < banner);
    }

    #[test]
    fn next_level_after_win_bumps_difficulty_and_rebuilds() {
        let t = GameMode::Win.transition(ModeEvent::NextLevel).unwrap();
        assert_eq!(t.to, GameMode::Initial);
        let inc = t
            .effects
            .iter()
            .position(|e| *e == ModeEffect::IncrementDifficulty)
            .unwrap();
        let reset = t
            .effects
            .iter()
            .position(|e| *e == ModeEffect::ResetScene)
            .unwrap();
        let build = t
            .effects
            .iter()
            .position(|e| *e == ModeEffect::BuildLevel)
            .unwrap();
        assert!(inc < reset && reset < build);
    }

    #[test]
    fn next_level_after_lose_keeps_difficulty() {
        let t = GameMode::Lose.transition(ModeEvent::NextLevel).unwrap();
        assert!(!t.effects.contains(&ModeEffect::IncrementDifficulty));
        assert!(t.effects.contains(&ModeEffect::ResetScene));
    }

    #[test]
    fn pending_events_drain_in_order() {
        let mut next = NextGameState::new();
        next.request(ModeEvent::LevelExitReached);
        next.request(ModeEvent::HealthDepleted);
        let drained = next.take();
        assert_eq!(
            drained.as_slice(),
            &[ModeEvent::LevelExitReached, ModeEvent::HealthDepleted]
        );
        assert!(next.is_empty());
    }
}
