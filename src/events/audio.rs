//! Audio commands emitted by the simulation.
//!
//! Gameplay systems write [`AudioCmd`] messages; they are forwarded
//! fire-and-forget to the host's audio thread through the
//! [`AudioBridge`](crate::resources::audio::AudioBridge). Nothing in the
//! simulation waits on playback.

use bevy_ecs::message::Message;

pub const BACKGROUND_MUSIC: &str = "delve_bg";
pub const BACKGROUND_VOLUME: f32 = 0.4;

/// One-shot sound effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Player took contact damage.
    Damage,
    /// Player picked up food.
    Pickup,
    /// Projectile killed an enemy.
    Kill,
    /// Projectile hit an enemy that survived.
    Hit,
    /// Player threw a projectile.
    Shoot,
    /// Level completed.
    Win,
}

impl Cue {
    pub fn id(self) -> &'static str {
        match self {
            Cue::Damage => "delve_take_damage",
            Cue::Pickup => "delve_energy",
            Cue::Kill => "delve_kill",
            Cue::Hit => "delve_hit",
            Cue::Shoot => "delve_shoot",
            Cue::Win => "delve_win",
        }
    }
}

/// Commands sent *to* the audio thread.
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioCmd {
    PlayFx(Cue),
    PlayMusic { id: String, looped: bool, volume: f32 },
    PauseMusic { id: String },
    ResumeMusic { id: String },
    Shutdown,
}
