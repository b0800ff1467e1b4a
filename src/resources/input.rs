//! Controller input state.
//!
//! Holds the queue of raw [`ControllerEvent`]s received since the last tick
//! and the movement and attack vectors they produce. The vectors persist
//! between ticks, like a held stick, until new input overwrites them.

use std::collections::VecDeque;

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::events::input::ControllerEvent;

#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    pending: VecDeque<ControllerEvent>,
    /// Desired movement direction, roughly unit-scaled.
    pub movement: Vec2,
    /// Aim vector. Non-zero means the player wants to throw.
    pub attack: Vec2,
}

impl InputState {
    pub fn push(&mut self, event: ControllerEvent) {
        self.pending.push_back(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = ControllerEvent> + '_ {
        self.pending.drain(..)
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn clear_vectors(&mut self) {
        self.movement = Vec2::ZERO;
        self.attack = Vec2::ZERO;
    }
}
