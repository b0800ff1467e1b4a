//! Player health over time.
//!
//! - [`health_decay`] drains a fixed amount of health at a fixed interval
//!   while the level is running.
//! - [`hurt_flash_system`] plays the red damage flash and clears the damage
//!   shader once the player has gone long enough without being hit.
//! - [`health_check`] requests `HealthDepleted` when health drops below one.

use bevy_ecs::prelude::*;

use crate::components::health::HurtFlash;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameMode, GameState, ModeEvent, NextGameState};
use crate::resources::session::GameSession;
use crate::resources::worldtime::WorldTime;

pub fn health_decay(time: Res<WorldTime>, config: Res<GameConfig>, mut session: ResMut<GameSession>) {
    let interval = config.health.decay_interval;
    if interval <= 0.0 {
        return;
    }
    session.health_drop_elapsed += time.delta;
    while session.health_drop_elapsed >= interval {
        session.health_drop_elapsed -= interval;
        session.health -= config.health.decay_amount;
    }
}

pub fn hurt_flash_system(
    time: Res<WorldTime>,
    config: Res<GameConfig>,
    mut query: Query<&mut HurtFlash>,
) {
    let dt = time.delta;
    for mut flash in query.iter_mut() {
        if let Some(t) = flash.flash_elapsed {
            let t = t + dt;
            flash.flash_elapsed = (t < HurtFlash::FLASH_SECONDS).then_some(t);
        }
        if flash.since_hurt > config.player.hurt_shader_seconds {
            flash.shader_active = false;
        } else {
            flash.since_hurt += dt;
        }
    }
}

pub fn health_check(
    session: Res<GameSession>,
    state: Res<GameState>,
    mut next_state: ResMut<NextGameState>,
) {
    if state.get() == GameMode::Active && session.health < 1 {
        next_state.request(ModeEvent::HealthDepleted);
    }
}
