//! Built-in contact detector.
//!
//! A stand-in for the host physics engine's contact listener, used by the
//! headless binary and by hosts without a physics step. It finds pairs whose
//! bodies overlap and where at least one side has the other's category in
//! its contact mask, and triggers a
//! [`ContactEvent`](crate::events::contact::ContactEvent) when a pair starts
//! touching. Pairs that stay in contact do not fire again.
//!
//! Only bodies with a non-zero contact mask can start a contact, so the many
//! static walls and floor tiles never get tested against each other.

use bevy_ecs::prelude::*;
use rustc_hash::FxHashSet;

use crate::components::collision::CollisionBody;
use crate::components::mapposition::MapPosition;
use crate::events::contact::ContactEvent;
use crate::resources::contacts::ActiveContacts;

pub fn collision_detector(
    bodies: Query<(Entity, &MapPosition, &CollisionBody)>,
    mut active: ResMut<ActiveContacts>,
    mut commands: Commands,
) {
    let mut touching: FxHashSet<(Entity, Entity)> = FxHashSet::default();
    let mut began: Vec<(Entity, Entity)> = Vec::new();

    for (probe, probe_pos, probe_body) in bodies.iter() {
        if probe_body.contact_mask == 0 {
            continue;
        }
        for (other, other_pos, other_body) in bodies.iter() {
            if other == probe || !probe_body.wants_contact_with(other_body) {
                continue;
            }
            if !probe_body.overlaps(probe_pos.pos, other_body, other_pos.pos) {
                continue;
            }
            let key = ActiveContacts::key(probe, other);
            if touching.insert(key) && active.begin(probe, other) {
                began.push((probe, other));
            }
        }
    }

    active.retain(&touching);
    for (a, b) in began {
        commands.trigger(ContactEvent { a, b });
    }
}
