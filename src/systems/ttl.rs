//! Corpse removal.
//!
//! `ttl_system` runs every [`Ttl`] down by the tick's delta and removes the
//! entity once it expires. Runs only while the simulation is not frozen, so a
//! corpse on screen when the player dies stays there.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::ttl::Ttl;
use crate::resources::worldtime::WorldTime;

pub fn ttl_system(
    time: Res<WorldTime>,
    mut timers: Query<(Entity, &mut Ttl)>,
    mut commands: Commands,
) {
    for (entity, mut ttl) in timers.iter_mut() {
        if ttl.tick(time.delta) {
            debug!("ttl expired for {:?}", entity);
            commands.entity(entity).try_despawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expired_entities_are_removed() {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            delta: 0.5,
            ..WorldTime::default()
        });
        let short = world.spawn(Ttl::new(0.4)).id();
        let long = world.spawn(Ttl::new(2.0)).id();

        let mut schedule = Schedule::default();
        schedule.add_systems(ttl_system);
        schedule.run(&mut world);

        assert!(world.get_entity(short).is_err());
        assert!((world.get::<Ttl>(long).unwrap().remaining - 1.5).abs() < 1e-6);
    }
}
