//! Level construction.
//!
//! [`build_level`] generates a fresh [`TileMap`] from the session's random
//! source and section catalogs, then presents it tile by tile to
//! [`create_node_of`], which spawns the entities each tile stands for.
//! The generated map is kept as a resource for hosts that want to draw a
//! minimap or inspect the layout.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::info;

use crate::components::movement::PlayerMove;
use crate::entities::{
    FLOOR_TEXTURES, enemy_bundle, floor_bundle, food_bundle, level_exit_bundle, player_bundle,
    wall_bundle,
};
use crate::error::Result;
use crate::resources::animationstore::AnimationStore;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::gameconfig::GameConfig;
use crate::resources::levelrng::LevelRng;
use crate::resources::sectioncatalog::SectionCatalogs;
use crate::resources::tilemap::{TileMap, TileType};

/// Generate and spawn a new level.
///
/// Nothing is spawned if generation fails; the error leaves the world as it
/// was.
pub fn build_level(world: &mut World) -> Result<()> {
    let (layout, tile_size) = {
        let config = world.resource::<GameConfig>();
        (config.level.layout, config.level.tile_size)
    };

    let mut map = TileMap::new(layout, tile_size);
    world.resource_scope(|world, mut rng: Mut<LevelRng>| {
        let catalogs = world.resource::<SectionCatalogs>();
        map.generate(&mut rng.0, catalogs)
    })?;

    let mut tiles = Vec::new();
    map.present(|tile, pos| tiles.push((tile, pos)))?;
    for (tile, pos) in tiles {
        create_node_of(world, tile, pos);
    }

    let (w, h) = map.dimensions();
    info!("Built {}x{} level", w, h);
    world.insert_resource(map);
    Ok(())
}

/// Spawn whatever `tile` stands for at `pos`.
///
/// Start, enemy and food tiles also get a floor underneath so the level has
/// no holes where actors were placed.
pub fn create_node_of(world: &mut World, tile: TileType, pos: Vec2) {
    match tile {
        TileType::Air => {}
        TileType::Ground => spawn_floor(world, pos),
        TileType::Wall => {
            world.spawn(wall_bundle(pos, false));
        }
        TileType::WallLit => {
            world.spawn(wall_bundle(pos, true));
        }
        TileType::End => {
            world.spawn(level_exit_bundle(pos));
        }
        TileType::Start => {
            spawn_floor(world, pos);
            spawn_player(world, pos);
        }
        TileType::Enemy => {
            spawn_floor(world, pos);
            let max_health = world.resource::<GameConfig>().enemy.max_health;
            let bundle = enemy_bundle(pos, world.resource::<AnimationStore>(), max_health);
            world.spawn(bundle);
        }
        TileType::Food => {
            spawn_floor(world, pos);
            world.spawn(food_bundle(pos));
        }
    }
}

fn spawn_floor(world: &mut World, pos: Vec2) {
    let texture = {
        let mut rng = world.resource_mut::<LevelRng>();
        FLOOR_TEXTURES[rng.0.usize(..FLOOR_TEXTURES.len())]
    };
    world.spawn(floor_bundle(pos, texture));
}

fn spawn_player(world: &mut World, pos: Vec2) {
    let existing = world
        .query_filtered::<Entity, With<PlayerMove>>()
        .iter(world)
        .count();
    if existing > 0 {
        log::warn!("Level has more than one start tile, extra player at {:?}", pos);
    }
    let bundle = player_bundle(pos, world.resource::<AnimationStore>());
    world.spawn(bundle);
    world.resource_mut::<Camera2DRes>().target = pos;
}
