//! Projectile throwing.
use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::mapposition::MapPosition;
use crate::components::movement::PlayerMove;
use crate::entities::projectile_bundle;
use crate::events::audio::{AudioCmd, Cue};
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::session::GameSession;
use crate::resources::worldtime::WorldTime;

/// Throw a projectile from the player along the attack vector.
///
/// The attack vector is held like a stick: as long as it is non-zero the
/// player keeps throwing, at most once per cooldown.
pub fn fire_projectile(
    time: Res<WorldTime>,
    config: Res<GameConfig>,
    input: Res<InputState>,
    mut session: ResMut<GameSession>,
    players: Query<&MapPosition, With<PlayerMove>>,
    mut commands: Commands,
    mut audio: MessageWriter<AudioCmd>,
) {
    session.since_throw += time.delta;
    if input.attack == Vec2::ZERO || session.since_throw < config.projectile.cooldown {
        return;
    }
    let Some(player) = players.iter().next() else {
        return;
    };
    commands.spawn(projectile_bundle(player.pos, input.attack));
    session.since_throw = 0.0;
    audio.write(AudioCmd::PlayFx(Cue::Shoot));
}
