//! Collision bodies and collider categories.
//!
//! A [`CollisionBody`] is the physics-facing half of an entity's spatial
//! capability: its category bit, the categories it is physically blocked by,
//! and the categories it wants contact notifications for. The rigid-body
//! simulation itself lives in the host; the crate only reads these values in
//! the built-in overlap detector
//! ([`collision_detector`](crate::systems::collision::collision_detector)) and
//! removes the body when an enemy dies.
//!
//! Category values mirror the level content: the player is category `0`, so
//! contacts that involve the player are always reported from the other side's
//! contact mask or from the player's own mask.

use bevy_ecs::prelude::Component;
use glam::Vec2;

pub const CATEGORY_PLAYER: u32 = 0;
pub const CATEGORY_ENEMY: u32 = 0b1;
pub const CATEGORY_WALL: u32 = 0b10;
pub const CATEGORY_PROJECTILE: u32 = 0b100;
pub const CATEGORY_FOOD: u32 = 0b1000;
pub const CATEGORY_END_LEVEL: u32 = 0b10000;
pub const CATEGORY_NONE: u32 = 0b100000;

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct CollisionBody {
    pub category: u32,
    /// Categories this body is physically blocked by.
    pub collision_mask: u32,
    /// Categories this body wants contact notifications for.
    pub contact_mask: u32,
    pub size: Vec2,
    /// Offset of the box's minimum corner from the entity position.
    pub offset: Vec2,
}

impl CollisionBody {
    /// Box of `size` centred on the entity position.
    pub fn centered(category: u32, size: Vec2) -> Self {
        CollisionBody {
            category,
            collision_mask: 0,
            contact_mask: 0,
            size,
            offset: -size * 0.5,
        }
    }

    pub fn with_collision_mask(mut self, mask: u32) -> Self {
        self.collision_mask = mask;
        self
    }

    pub fn with_contact_mask(mut self, mask: u32) -> Self {
        self.contact_mask = mask;
        self
    }

    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Returns (min, max) of the body AABB for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vec2) -> (Vec2, Vec2) {
        let p0 = position + self.offset;
        let p1 = p0 + self.size;
        (p0.min(p1), p0.max(p1))
    }

    /// AABB vs AABB overlap test against another body at a different position.
    pub fn overlaps(&self, position: Vec2, other: &Self, other_position: Vec2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }

    /// Whether either side asked to be told about touching the other.
    pub fn wants_contact_with(&self, other: &Self) -> bool {
        (self.category & other.contact_mask) != 0 || (other.category & self.contact_mask) != 0
    }
}
