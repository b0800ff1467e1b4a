//! Z-index component for render ordering.
//!
//! The [`ZIndex`] component provides a simple way to control the drawing
//! order of entities. Entities with higher z-index values are drawn on top
//! of those with lower values.

use bevy_ecs::prelude::Component;

/// Rendering order hint for 2D drawing.
///
/// Higher values are drawn later (on top). The host renderer sorts by
/// `ZIndex` to achieve a painter's algorithm.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);

/// Z-orders used by the level factories.
pub const Z_TILE: i32 = 1;
pub const Z_FOOD: i32 = 5;
pub const Z_PLAYER: i32 = 50;
pub const Z_ENEMY: i32 = 55;
pub const Z_PROJECTILE: i32 = 65;
pub const Z_BANNER: i32 = 100;
