//! Game mode change notification.
//!
//! Triggered by
//! [`apply_pending_transitions`](crate::systems::gamestate::apply_pending_transitions)
//! after a transition and all its effects have been applied, so observers see
//! the world already in the new mode.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::gamestate::GameMode;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameStateChangedEvent {
    pub from: GameMode,
    pub to: GameMode,
}

/// Logs every mode change.
pub fn observe_gamestate_change_event(trigger: On<GameStateChangedEvent>) {
    let event = trigger.event();
    info!("Game mode {:?} -> {:?}", event.from, event.to);
}
