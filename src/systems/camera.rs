//! Camera follow system.
use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::movement::PlayerMove;
use crate::resources::camera2d::Camera2DRes;

/// Keep the camera centred on the player.
pub fn camera_follow(
    mut camera: ResMut<Camera2DRes>,
    players: Query<&MapPosition, With<PlayerMove>>,
) {
    if let Some(player) = players.iter().next() {
        camera.target = player.pos;
    }
}
