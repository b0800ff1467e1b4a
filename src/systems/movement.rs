//! Movement systems for the three movable capabilities.
//!
//! - [`player_movement`] integrates the player's intent and picks a walk or
//!   idle clip from the facing of the intent.
//! - [`enemy_movement`] latches enemies onto the player once it comes within
//!   the sense radius and chases it from then on.
//! - [`projectile_movement`] flies projectiles in a straight line and spins
//!   them.
//!
//! Each system resolves the sibling capabilities it needs on the same entity.
//! A movable entity without a position or animation capability is a wiring
//! bug and is reported through [`invariant_violated`].

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::animation::Animated;
use crate::components::facing::Facing;
use crate::components::mapposition::MapPosition;
use crate::components::movement::{EnemyMove, PlayerMove, ProjectileMove};
use crate::components::rotation::Rotation;
use crate::error::{DelveError, invariant_violated};
use crate::resources::gameconfig::GameConfig;
use crate::resources::worldtime::WorldTime;

fn missing(entity: Entity, capability: &'static str, required_by: &'static str) {
    invariant_violated(DelveError::MissingCapability {
        entity,
        capability,
        required_by,
    });
}

/// Integrate the player's intent.
///
/// Displacement is `intent * speed * dt`. A non-zero intent requests the walk
/// clip for its facing; a zero displacement requests the idle clip for the
/// last facing. The intent is consumed.
pub fn player_movement(
    time: Res<WorldTime>,
    config: Res<GameConfig>,
    mut query: Query<(
        Entity,
        &mut PlayerMove,
        Option<&mut MapPosition>,
        Option<&mut Animated>,
    )>,
) {
    let dt = time.delta;
    for (entity, mut movement, position, animated) in query.iter_mut() {
        let Some(mut position) = position else {
            missing(entity, "Spatial", "PlayerMove");
            continue;
        };
        let Some(mut animated) = animated else {
            missing(entity, "Animated", "PlayerMove");
            continue;
        };

        let intent = movement.intent;
        let displacement = intent * config.player.speed * dt;
        position.pos += displacement;

        if let Some(facing) = Facing::from_vector(intent) {
            movement.last_facing = facing;
            animated.request(facing.walk());
        }
        if displacement == Vec2::ZERO {
            animated.request(movement.last_facing.idle());
        }
        movement.intent = Vec2::ZERO;
    }
}

/// Chase the player.
///
/// Reads the player's position after [`player_movement`] has run. The
/// attacking latch is set the first tick the player is strictly inside the
/// sense radius and is never cleared.
pub fn enemy_movement(
    time: Res<WorldTime>,
    config: Res<GameConfig>,
    players: Query<&MapPosition, With<PlayerMove>>,
    mut enemies: Query<
        (
            Entity,
            &mut EnemyMove,
            Option<&mut MapPosition>,
            Option<&mut Animated>,
        ),
        Without<PlayerMove>,
    >,
) {
    let Some(player_pos) = players.iter().next().map(|p| p.pos) else {
        return;
    };
    let dt = time.delta;
    for (entity, mut enemy, position, animated) in enemies.iter_mut() {
        let Some(mut position) = position else {
            missing(entity, "Spatial", "EnemyMove");
            continue;
        };
        let Some(mut animated) = animated else {
            missing(entity, "Animated", "EnemyMove");
            continue;
        };

        if !enemy.attacking && position.pos.distance(player_pos) < config.enemy.sense_radius {
            enemy.attacking = true;
        }
        if !enemy.attacking {
            continue;
        }

        let direction = (player_pos - position.pos).normalize_or_zero();
        position.pos += direction * config.enemy.speed * dt;
        let facing = Facing::from_vector(direction).unwrap_or(Facing::Right);
        animated.request(facing.walk());
    }
}

/// Fly projectiles along their fixed direction and spin them.
pub fn projectile_movement(
    time: Res<WorldTime>,
    config: Res<GameConfig>,
    mut query: Query<(
        Entity,
        &ProjectileMove,
        Option<&mut MapPosition>,
        Option<&mut Rotation>,
    )>,
) {
    let dt = time.delta;
    for (entity, projectile, position, rotation) in query.iter_mut() {
        let (Some(mut position), Some(mut rotation)) = (position, rotation) else {
            missing(entity, "Spatial", "ProjectileMove");
            continue;
        };
        position.pos += projectile.direction() * config.projectile.speed * dt;
        rotation.radians += config.projectile.spin * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::animation::AnimationState;

    const EPSILON: f32 = 1e-4;

    fn world_with(delta: f32) -> World {
        let mut world = World::new();
        world.insert_resource(GameConfig::new());
        world.insert_resource(WorldTime {
            delta,
            ..WorldTime::default()
        });
        world
    }

    fn tick_player(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(player_movement);
        schedule.run(world);
    }

    fn tick_enemies(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(enemy_movement);
        schedule.run(world);
    }

    fn tick_projectiles(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(projectile_movement);
        schedule.run(world);
    }

    fn spawn_player(world: &mut World, pos: Vec2) -> Entity {
        world
            .spawn((PlayerMove::default(), MapPosition::from(pos), Animated::new()))
            .id()
    }

    #[test]
    fn player_moves_by_intent_times_speed() {
        let mut world = world_with(0.5);
        let player = spawn_player(&mut world, Vec2::new(10.0, 10.0));
        world.get_mut::<PlayerMove>(player).unwrap().intent = Vec2::new(-1.0, 0.0);

        tick_player(&mut world);

        let pos = world.get::<MapPosition>(player).unwrap().pos;
        assert!((pos - Vec2::new(10.0 - 320.0 * 0.5, 10.0)).length() < EPSILON);
        let movement = world.get::<PlayerMove>(player).unwrap();
        assert_eq!(movement.intent, Vec2::ZERO);
        assert_eq!(movement.last_facing, Facing::Left);
        let animated = world.get::<Animated>(player).unwrap();
        assert_eq!(animated.pending(), Some(AnimationState::WalkLeft));
    }

    #[test]
    fn standing_still_idles_in_the_last_facing() {
        let mut world = world_with(1.0 / 60.0);
        let player = spawn_player(&mut world, Vec2::ZERO);
        world.get_mut::<PlayerMove>(player).unwrap().intent = Vec2::new(-0.5, 0.0);
        tick_player(&mut world);
        let moved = world.get::<MapPosition>(player).unwrap().pos;

        tick_player(&mut world);
        tick_player(&mut world);

        assert_eq!(world.get::<MapPosition>(player).unwrap().pos, moved);
        let animated = world.get::<Animated>(player).unwrap();
        assert_eq!(animated.pending(), Some(AnimationState::IdleLeft));
    }

    #[test]
    fn projectile_flies_along_its_normalized_direction_and_spins() {
        let dt = 1.0 / 60.0;
        let mut world = world_with(dt);
        let projectile = world
            .spawn((
                ProjectileMove::new(Vec2::new(3.0, 4.0)),
                MapPosition::new(0.0, 0.0),
                Rotation::default(),
            ))
            .id();

        tick_projectiles(&mut world);

        let pos = world.get::<MapPosition>(projectile).unwrap().pos;
        let expected = Vec2::new(0.6, 0.8) * 235.5 * dt;
        assert!((pos - expected).length() < EPSILON);
        let rotation = world.get::<Rotation>(projectile).unwrap();
        assert!((rotation.radians - 15.5 * dt).abs() < EPSILON);
    }

    #[test]
    fn chasing_enemy_walks_toward_the_player() {
        let dt = 1.0 / 60.0;
        let mut world = world_with(dt);
        spawn_player(&mut world, Vec2::new(0.0, 100.0));
        let enemy = world
            .spawn((EnemyMove::default(), MapPosition::new(0.0, 0.0), Animated::new()))
            .id();

        tick_enemies(&mut world);

        assert!(world.get::<EnemyMove>(enemy).unwrap().attacking);
        let pos = world.get::<MapPosition>(enemy).unwrap().pos;
        assert!((pos - Vec2::new(0.0, 70.0 * dt)).length() < EPSILON);
        let animated = world.get::<Animated>(enemy).unwrap();
        assert_eq!(animated.pending(), Some(AnimationState::WalkUp));
    }

    #[test]
    fn enemy_outside_sense_radius_stays_put() {
        let mut world = world_with(1.0 / 60.0);
        spawn_player(&mut world, Vec2::new(300.0, 0.0));
        let enemy = world
            .spawn((EnemyMove::default(), MapPosition::new(0.0, 0.0), Animated::new()))
            .id();

        tick_enemies(&mut world);

        assert!(!world.get::<EnemyMove>(enemy).unwrap().attacking);
        assert_eq!(world.get::<MapPosition>(enemy).unwrap().pos, Vec2::ZERO);
        assert_eq!(world.get::<Animated>(enemy).unwrap().pending(), None);
    }
}
