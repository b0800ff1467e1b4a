//! Contact notifications.
//!
//! The physics collaborator (or the built-in
//! [`collision_detector`](crate::systems::collision::collision_detector))
//! triggers a [`ContactEvent`] when two bodies begin touching. The
//! [`resolve_contact`](crate::systems::combat::resolve_contact) observer turns
//! it into gameplay consequences. Events are consumed once and not stored.

use bevy_ecs::prelude::*;

/// Two entities began touching. The order of `a` and `b` carries no meaning.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactEvent {
    pub a: Entity,
    pub b: Entity,
}
