use bevy_ecs::prelude::Component;

/// Layer the host renderer attaches an entity's node to.
///
/// Enemies are kept on their own layer so they can be dimmed or culled
/// together; banners sit on the GUI layer that ignores the camera.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RenderLayer {
    World,
    Enemies,
    Gui,
}
