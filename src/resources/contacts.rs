use bevy_ecs::prelude::*;
use rustc_hash::FxHashSet;

/// Pairs the built-in detector currently sees touching.
///
/// A contact event fires only when a pair enters this set, which gives
/// begin-contact semantics like a physics engine's contact listener.
#[derive(Resource, Debug, Default)]
pub struct ActiveContacts {
    pairs: FxHashSet<(Entity, Entity)>,
}

impl ActiveContacts {
    /// Order-independent key for a pair.
    pub fn key(a: Entity, b: Entity) -> (Entity, Entity) {
        if a <= b { (a, b) } else { (b, a) }
    }

    /// Record the pair as touching. Returns `true` if it was not before.
    pub fn begin(&mut self, a: Entity, b: Entity) -> bool {
        self.pairs.insert(Self::key(a, b))
    }

    /// Keep only the pairs in `touching`.
    pub fn retain(&mut self, touching: &FxHashSet<(Entity, Entity)>) {
        self.pairs.retain(|pair| touching.contains(pair));
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }
}
