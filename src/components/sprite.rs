use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Static texture assignment read by the host renderer.
///
/// Animated entities also carry a [`Sprite`]; while an animation clip is
/// active the renderer should prefer
/// [`Animated::current_frame`](crate::components::animation::Animated::current_frame).
/// The anchor is normalized (0..1) relative to the texture's bottom-left.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub size: Vec2,
    pub anchor: Vec2,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Sprite {
            tex_key: tex_key.into(),
            size: Vec2::new(width, height),
            anchor: Vec2::splat(0.5),
        }
    }

    pub fn with_anchor(mut self, x: f32, y: f32) -> Self {
        self.anchor = Vec2::new(x, y);
        self
    }
}
