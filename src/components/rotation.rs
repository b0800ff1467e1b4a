use bevy_ecs::prelude::Component;

/// Rotation around the pivot, in radians.
#[derive(Component, Clone, Debug, Copy, Default)]
pub struct Rotation {
    pub radians: f32,
}
