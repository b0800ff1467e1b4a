//! Shared 2D camera resource.
//!
//! The host renderer reads this to build its view transform. The
//! [`camera_follow`](crate::systems::camera::camera_follow) system keeps the
//! target on the player.

use bevy_ecs::prelude::Resource;
use glam::Vec2;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Camera2DRes {
    pub target: Vec2,
    pub zoom: f32,
}

impl Camera2DRes {
    pub fn new(zoom: f32) -> Self {
        Camera2DRes {
            target: Vec2::ZERO,
            zoom,
        }
    }
}
