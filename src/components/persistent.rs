//! Persistent entity marker component.
//!
//! Entities with the [`Persistent`] component are not despawned when a level
//! is torn down (`Win`/`Lose` → next level). Everything else in the world
//! belongs to the current scene.

use bevy_ecs::prelude::Component;

/// Tag component used to mark entities that should survive scene resets.
#[derive(Component, Clone, Debug)]
pub struct Persistent;
