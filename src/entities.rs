//! Entity factories.
//!
//! Each function returns the complete component bundle for one kind of
//! entity, so every capability an entity needs is attached in a single spawn
//! and the systems can rely on sibling components being present. Bundles are
//! spawned through `World::spawn` while building a level and through
//! `Commands::spawn` from systems (projectiles).
//!
//! Positions are tile origins in world units; the map generator hands them
//! out as `(col * tile, -row * tile)`.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::actor::Actor;
use crate::components::animation::AnimationState;
use crate::components::banner::{Banner, BannerKind};
use crate::components::collision::{
    CATEGORY_END_LEVEL, CATEGORY_ENEMY, CATEGORY_FOOD, CATEGORY_NONE, CATEGORY_PLAYER,
    CATEGORY_PROJECTILE, CATEGORY_WALL, CollisionBody,
};
use crate::components::health::{EnemyHealth, HurtFlash};
use crate::components::mapposition::MapPosition;
use crate::components::movement::{EnemyMove, PlayerMove, ProjectileMove};
use crate::components::renderlayer::RenderLayer;
use crate::components::rotation::Rotation;
use crate::components::sprite::Sprite;
use crate::components::zindex::{
    Z_BANNER, Z_ENEMY, Z_FOOD, Z_PLAYER, Z_PROJECTILE, Z_TILE, ZIndex,
};
use crate::resources::animationstore::{AnimationStore, ENEMY_ATLAS, PLAYER_ATLAS};

pub const TILE_TEXTURE_SIZE: f32 = 32.0;
pub const FLOOR_TEXTURES: [&str; 8] = [
    "Floor1", "Floor2", "Floor3", "Floor4", "Floor5", "Floor6", "Floor7", "Floor8",
];

const PLAYER_BODY_RADIUS: f32 = 15.0;

fn tile_sprite(texture: &str) -> Sprite {
    Sprite::new(texture, TILE_TEXTURE_SIZE, TILE_TEXTURE_SIZE)
}

pub fn player_bundle(pos: Vec2, store: &AnimationStore) -> impl Bundle + use<> {
    let mut states = Vec::with_capacity(8);
    states.extend(AnimationState::walks().into_iter().map(|s| (s, true)));
    states.extend(AnimationState::idles().into_iter().map(|s| (s, true)));
    let mut animated = store.animated(PLAYER_ATLAS, &states);
    animated.request(AnimationState::WalkDown);

    (
        Actor::Player,
        PlayerMove::default(),
        MapPosition::from(pos),
        Rotation::default(),
        ZIndex(Z_PLAYER),
        RenderLayer::World,
        Sprite::new(PLAYER_ATLAS, 32.0, 32.0).with_anchor(0.5, 0.2),
        animated,
        CollisionBody::centered(CATEGORY_PLAYER, Vec2::splat(PLAYER_BODY_RADIUS * 2.0))
            .with_collision_mask(CATEGORY_WALL)
            .with_contact_mask(CATEGORY_ENEMY | CATEGORY_FOOD | CATEGORY_END_LEVEL),
        HurtFlash::default(),
    )
}

pub fn enemy_bundle(
    pos: Vec2,
    store: &AnimationStore,
    max_health: f32,
) -> impl Bundle + use<> {
    let mut states: Vec<(AnimationState, bool)> = AnimationState::walks()
        .into_iter()
        .map(|s| (s, true))
        .collect();
    states.push((AnimationState::DieDown, false));
    let mut animated = store.animated(ENEMY_ATLAS, &states);
    animated.request(AnimationState::WalkDown);

    (
        Actor::Enemy,
        EnemyMove::default(),
        EnemyHealth(max_health),
        MapPosition::from(pos),
        Rotation::default(),
        ZIndex(Z_ENEMY),
        RenderLayer::Enemies,
        Sprite::new(ENEMY_ATLAS, 32.0, 32.0),
        animated,
        CollisionBody::centered(CATEGORY_ENEMY, Vec2::splat(32.0))
            .with_collision_mask(CATEGORY_WALL)
            .with_contact_mask(CATEGORY_PLAYER),
    )
}

pub fn projectile_bundle(origin: Vec2, direction: Vec2) -> impl Bundle + use<> {
    (
        Actor::Projectile,
        ProjectileMove::new(direction),
        MapPosition::from(origin),
        Rotation::default(),
        ZIndex(Z_PROJECTILE),
        RenderLayer::World,
        Sprite::new("Projectile", 18.0, 24.0),
        CollisionBody::centered(CATEGORY_PROJECTILE, Vec2::new(10.0, 20.0))
            .with_collision_mask(CATEGORY_NONE)
            .with_contact_mask(CATEGORY_WALL | CATEGORY_ENEMY),
    )
}

pub fn food_bundle(pos: Vec2) -> impl Bundle + use<> {
    (
        Actor::Food,
        MapPosition::from(pos),
        ZIndex(Z_FOOD),
        RenderLayer::World,
        Sprite::new("Health", 25.0, 25.0),
        CollisionBody::centered(CATEGORY_FOOD, Vec2::splat(25.0))
            .with_collision_mask(CATEGORY_NONE)
            .with_contact_mask(CATEGORY_PLAYER),
    )
}

pub fn level_exit_bundle(pos: Vec2) -> impl Bundle + use<> {
    (
        Actor::LevelExit,
        MapPosition::from(pos),
        ZIndex(Z_TILE),
        RenderLayer::World,
        tile_sprite("Exit"),
        CollisionBody::centered(CATEGORY_END_LEVEL, Vec2::splat(8.0))
            .with_offset(Vec2::new(-16.0, -16.0)),
    )
}

pub fn wall_bundle(pos: Vec2, lit: bool) -> impl Bundle + use<> {
    (
        Actor::Wall,
        MapPosition::from(pos),
        ZIndex(Z_TILE),
        RenderLayer::World,
        tile_sprite(if lit { "Wall2" } else { "Wall1" }),
        CollisionBody::centered(CATEGORY_WALL, Vec2::splat(TILE_TEXTURE_SIZE)),
    )
}

pub fn floor_bundle(pos: Vec2, texture: &str) -> impl Bundle + use<> {
    (
        MapPosition::from(pos),
        ZIndex(Z_TILE),
        RenderLayer::World,
        tile_sprite(texture),
    )
}

pub fn banner_bundle(kind: BannerKind, level: u32) -> impl Bundle + use<> {
    (
        Banner::new(kind, level),
        ZIndex(Z_BANNER),
        RenderLayer::Gui,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::animation::Animated;

    #[test]
    fn player_spawns_with_every_capability() {
        let mut world = World::new();
        let store = AnimationStore::default();
        let player = world.spawn(player_bundle(Vec2::new(64.0, -64.0), &store)).id();

        assert_eq!(world.get::<Actor>(player), Some(&Actor::Player));
        assert!(world.get::<PlayerMove>(player).is_some());
        assert!(world.get::<CollisionBody>(player).is_some());
        let animated = world.get::<Animated>(player).unwrap();
        assert_eq!(animated.pending(), Some(AnimationState::WalkDown));
        assert!(animated.has_clip(AnimationState::IdleLeft));
    }

    #[test]
    fn enemy_has_health_and_death_clip() {
        let mut world = World::new();
        let store = AnimationStore::default();
        let enemy = world.spawn(enemy_bundle(Vec2::ZERO, &store, 1.0)).id();

        assert_eq!(world.get::<EnemyHealth>(enemy), Some(&EnemyHealth(1.0)));
        assert_eq!(world.get::<RenderLayer>(enemy), Some(&RenderLayer::Enemies));
        assert!(
            world
                .get::<Animated>(enemy)
                .unwrap()
                .has_clip(AnimationState::DieDown)
        );
    }

    #[test]
    fn level_exit_box_sits_below_left_of_the_tile_origin() {
        let mut world = World::new();
        let exit = world.spawn(level_exit_bundle(Vec2::new(100.0, 100.0))).id();
        let body = world.get::<CollisionBody>(exit).unwrap();
        let (min, max) = body.aabb(Vec2::new(100.0, 100.0));
        assert_eq!(min, Vec2::new(84.0, 84.0));
        assert_eq!(max, Vec2::new(92.0, 92.0));
    }
}
