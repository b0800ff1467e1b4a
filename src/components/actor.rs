use bevy_ecs::prelude::Component;

/// Role tag an entity plays in contact resolution.
///
/// The combat resolver dispatches on the unordered pair of tags, so every
/// entity that can take part in a contact carries one.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Actor {
    Player,
    Enemy,
    Wall,
    Projectile,
    Food,
    LevelExit,
}
