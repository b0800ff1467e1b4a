//! Game mode systems.
//!
//! [`apply_pending_transitions`] is the only place the current
//! [`GameMode`] changes. It runs as an exclusive system at the end of every
//! tick (and right after externally delivered contacts), feeds each queued
//! [`ModeEvent`] through the machine in request order, and interprets the
//! resulting [`ModeEffect`]s against the world. Events that have no edge
//! from the mode current at that moment are dropped, so when the player
//! reaches the exit and runs out of health in the same tick, whichever was
//! requested first wins.

use bevy_ecs::prelude::*;
use log::{debug, error, info};

use crate::components::animation::{AnimationState, Animated};
use crate::components::banner::Banner;
use crate::components::collision::CollisionBody;
use crate::components::mapposition::MapPosition;
use crate::components::movement::{EnemyMove, PlayerMove};
use crate::components::persistent::Persistent;
use crate::entities::banner_bundle;
use crate::events::audio::{AudioCmd, BACKGROUND_MUSIC, BACKGROUND_VOLUME};
use crate::events::gamestate::GameStateChangedEvent;
use crate::game::build_level;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::contacts::ActiveContacts;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameMode, GameState, ModeEffect, ModeEvent, NextGameState};
use crate::resources::input::InputState;
use crate::resources::session::{GameSession, Progress};
use crate::resources::tilemap::TileMap;
use crate::resources::worldtime::WorldTime;

/// Run condition: gameplay systems only run while the session is not frozen.
pub fn simulation_running(session: Res<GameSession>) -> bool {
    !session.frozen
}

/// Count down the pause between reaching the exit and the win screen.
pub fn victory_delay(
    time: Res<WorldTime>,
    config: Res<GameConfig>,
    state: Res<GameState>,
    mut session: ResMut<GameSession>,
    mut next_state: ResMut<NextGameState>,
) {
    if state.get() != GameMode::Limbo {
        session.victory_elapsed = None;
        return;
    }
    let elapsed = session.victory_elapsed.unwrap_or(0.0) + time.delta;
    session.victory_elapsed = Some(elapsed);
    if elapsed >= config.level.victory_delay {
        next_state.request(ModeEvent::VictoryDelayElapsed);
    }
}

/// Apply every queued mode event, in order.
pub fn apply_pending_transitions(world: &mut World) {
    loop {
        let events = world.resource_mut::<NextGameState>().take();
        if events.is_empty() {
            break;
        }
        for event in events {
            let current = world.resource::<GameState>().get();
            let Some(transition) = current.transition(event) else {
                debug!("No transition from {:?} on {:?}, ignored", current, event);
                continue;
            };
            info!(
                "Transitioning from {:?} to {:?} on {:?}",
                transition.from, transition.to, event
            );
            world.resource_mut::<GameState>().set(transition.to);
            for effect in transition.effects.iter().copied() {
                apply_effect(world, effect);
            }
            world.trigger(GameStateChangedEvent {
                from: transition.from,
                to: transition.to,
            });
            world.flush();
        }
    }
}

/// Enter `Initial` for the first level of a session.
pub fn enter_initial(world: &mut World) {
    world.resource_mut::<GameState>().set(GameMode::Initial);
    for effect in GameMode::Initial.enter_effects().iter().copied() {
        apply_effect(world, effect);
    }
}

fn write_audio(world: &mut World, cmd: AudioCmd) {
    world.resource_mut::<Messages<AudioCmd>>().write(cmd);
}

/// Interpret one transition effect.
pub fn apply_effect(world: &mut World, effect: ModeEffect) {
    debug!("Applying {:?}", effect);
    match effect {
        ModeEffect::ResetScene => reset_scene(world),
        ModeEffect::StartMusic => write_audio(
            world,
            AudioCmd::PlayMusic {
                id: BACKGROUND_MUSIC.to_string(),
                looped: true,
                volume: BACKGROUND_VOLUME,
            },
        ),
        ModeEffect::PauseMusic => write_audio(
            world,
            AudioCmd::PauseMusic {
                id: BACKGROUND_MUSIC.to_string(),
            },
        ),
        ModeEffect::ResumeMusic => write_audio(
            world,
            AudioCmd::ResumeMusic {
                id: BACKGROUND_MUSIC.to_string(),
            },
        ),
        ModeEffect::PlayCue(cue) => write_audio(world, AudioCmd::PlayFx(cue)),
        ModeEffect::BuildLevel => {
            if let Err(e) = build_level(world) {
                error!("Level construction failed: {}", e);
            }
        }
        ModeEffect::ResetHealth => {
            let difficulty = world.resource::<Progress>().difficulty;
            let health = world
                .resource::<GameConfig>()
                .health
                .tiers
                .starting_health(difficulty);
            world.resource_mut::<GameSession>().health = health;
        }
        ModeEffect::GrantHealth(amount) => world.resource_mut::<GameSession>().health += amount,
        ModeEffect::SetFrozen(frozen) => world.resource_mut::<GameSession>().frozen = frozen,
        ModeEffect::SetInputMode(mode) => world.resource_mut::<GameSession>().input_mode = mode,
        ModeEffect::ClearMovement => {
            world.resource_mut::<InputState>().clear_vectors();
            let mut players = world.query::<&mut PlayerMove>();
            for mut player in players.iter_mut(world) {
                player.intent = glam::Vec2::ZERO;
            }
        }
        ModeEffect::StripEnemies => strip_enemies(world),
        ModeEffect::ShowBanner(kind) => {
            let level = world.resource::<Progress>().difficulty;
            world.spawn(banner_bundle(kind, level));
        }
        ModeEffect::ClearBanners => {
            let banners: Vec<Entity> = world
                .query_filtered::<Entity, With<Banner>>()
                .iter(world)
                .collect();
            for banner in banners {
                world.despawn(banner);
            }
        }
        ModeEffect::IncrementDifficulty => {
            let mut progress = world.resource_mut::<Progress>();
            progress.difficulty += 1;
            info!("Difficulty is now {}", progress.difficulty);
        }
    }
}

fn strip_enemies(world: &mut World) {
    let enemies: Vec<Entity> = world
        .query_filtered::<Entity, With<EnemyMove>>()
        .iter(world)
        .collect();
    for enemy in enemies {
        let mut entity = world.entity_mut(enemy);
        entity.remove::<(EnemyMove, CollisionBody)>();
        if let Some(mut animated) = entity.get_mut::<Animated>() {
            animated.request(AnimationState::DieDown);
        }
    }
    debug!("Stripped chase and collision from enemies");
}

/// Tear down the level: every scene entity goes, per-level state is reset.
fn reset_scene(world: &mut World) {
    let doomed: Vec<Entity> = world
        .query_filtered::<Entity, (Or<(With<MapPosition>, With<Banner>)>, Without<Persistent>)>()
        .iter(world)
        .collect();
    let count = doomed.len();
    for entity in doomed {
        world.despawn(entity);
    }

    let cooldown = world.resource::<GameConfig>().projectile.cooldown;
    world.insert_resource(GameSession::new(cooldown));
    world.insert_resource(InputState::default());
    world.resource_mut::<ActiveContacts>().clear();
    world.resource_mut::<Camera2DRes>().target = glam::Vec2::ZERO;
    world.remove_resource::<TileMap>();
    info!("Scene reset, {} entities removed", count);
}
