//! Controller input routing.
//!
//! [`route_controller_input`] drains the queued
//! [`ControllerEvent`](crate::events::input::ControllerEvent)s once per tick
//! and interprets them according to the session's
//! [`InputMode`](crate::resources::session::InputMode):
//!
//! | mode           | confirm (button A / tap) | movement, aim, pause |
//! |----------------|--------------------------|----------------------|
//! | `StartGame`    | request `Start`          | ignored |
//! | `DismissPause` | request `Dismiss`        | ignored |
//! | `NextLevel`    | request `NextLevel`      | ignored |
//! | `Attack`       | tap aims at the location | updates vectors, pause requests `Pause` |
//! | `DoNothing`    | ignored                  | ignored |
//!
//! It runs even while the session is frozen; that is how a frozen mode is
//! left. [`apply_player_intent`] then copies the movement vector onto the
//! player for the movement system to consume.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::debug;

use crate::components::mapposition::MapPosition;
use crate::components::movement::PlayerMove;
use crate::events::input::{ControllerButton, ControllerEvent, ControllerKind, ControllerStick};
use crate::resources::gamestate::{ModeEvent, NextGameState};
use crate::resources::input::InputState;
use crate::resources::session::{GameSession, InputMode};

/// Accelerometer readings smaller than this are treated as noise.
const TILT_DEAD_ZONE: f32 = 0.02;
/// Left-stick input is normalized and then scaled down to this length.
const STICK_MOVE_SCALE: f32 = 0.5;

pub fn route_controller_input(
    mut input: ResMut<InputState>,
    session: Res<GameSession>,
    mut next_state: ResMut<NextGameState>,
    players: Query<&MapPosition, With<PlayerMove>>,
) {
    if !input.has_pending() {
        return;
    }
    let mode = session.input_mode;
    let player_pos = players.iter().next().map(|p| p.pos);
    let events: Vec<ControllerEvent> = input.drain().collect();

    for event in events {
        match mode {
            InputMode::StartGame | InputMode::DismissPause | InputMode::NextLevel => {
                if is_confirm(&event) {
                    let request = match mode {
                        InputMode::StartGame => ModeEvent::Start,
                        InputMode::DismissPause => ModeEvent::Dismiss,
                        _ => ModeEvent::NextLevel,
                    };
                    next_state.request(request);
                }
            }
            InputMode::Attack => route_attack(&mut input, &mut next_state, player_pos, event),
            InputMode::DoNothing => debug!("input ignored: {:?}", event),
        }
    }
}

fn is_confirm(event: &ControllerEvent) -> bool {
    matches!(
        event,
        ControllerEvent::Button {
            button: ControllerButton::A,
            pressed: true,
            ..
        } | ControllerEvent::Tap { .. }
    )
}

fn route_attack(
    input: &mut InputState,
    next_state: &mut NextGameState,
    player_pos: Option<Vec2>,
    event: ControllerEvent,
) {
    match event {
        ControllerEvent::Button { button, value, .. } => match button {
            ControllerButton::DpadUp => input.movement.y = value,
            ControllerButton::DpadDown => input.movement.y = -value,
            ControllerButton::DpadLeft => input.movement.x = -value,
            ControllerButton::DpadRight => input.movement.x = value,
            ControllerButton::Pause => next_state.request(ModeEvent::Pause),
            ControllerButton::A => {}
        },
        ControllerEvent::Stick {
            stick: ControllerStick::Left,
            point,
        } => input.movement = point.normalize_or_zero() * STICK_MOVE_SCALE,
        ControllerEvent::Stick {
            stick: ControllerStick::Right,
            point,
        } => input.attack = point,
        ControllerEvent::Tap { location } => {
            if let Some(player_pos) = player_pos {
                input.attack = location - player_pos;
            }
        }
        ControllerEvent::Tilt {
            acceleration,
            controller,
        } => {
            let mut motion = Vec2::ZERO;
            if acceleration.x.abs() > TILT_DEAD_ZONE {
                motion.y = acceleration.x;
            }
            if acceleration.y.abs() > TILT_DEAD_ZONE {
                motion.x = -acceleration.y;
            }
            match controller {
                None => input.movement = motion,
                Some(ControllerKind::Standard) => input.attack = motion,
                Some(ControllerKind::Other) => {
                    debug!("tilt ignored with a reduced controller attached")
                }
            }
        }
    }
}

/// Hand the current movement vector to the player for this tick.
pub fn apply_player_intent(input: Res<InputState>, mut players: Query<&mut PlayerMove>) {
    for mut player in players.iter_mut() {
        player.intent = input.movement;
    }
}
