//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame, clamping the host's frame delta to the
//! configured maximum step and applying `time_scale`.
use bevy_ecs::prelude::*;

use crate::resources::gameconfig::GameConfig;
use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is the unscaled frame delta in seconds. Negative deltas count as
/// zero; anything longer than `GameConfig::max_step` is clamped to it so a
/// stalled frame cannot tunnel entities through each other.
pub fn update_world_time(world: &mut World, dt: f32) {
    let max_step = world
        .get_resource::<GameConfig>()
        .map_or(f32::INFINITY, |c| c.max_step);
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt.clamp(0.0, max_step) * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.frame_count += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_frames_are_clamped() {
        let mut world = World::new();
        world.insert_resource(GameConfig::new());
        world.insert_resource(WorldTime::default());
        update_world_time(&mut world, 0.5);
        let wt = world.resource::<WorldTime>();
        assert!((wt.delta - 1.0 / 60.0).abs() < 1e-6);
        assert_eq!(wt.frame_count, 1);
    }

    #[test]
    fn time_scale_applies_after_clamp() {
        let mut world = World::new();
        world.insert_resource(GameConfig::new());
        world.insert_resource(WorldTime::default().with_time_scale(0.5));
        update_world_time(&mut world, 0.01);
        update_world_time(&mut world, -1.0);
        let wt = world.resource::<WorldTime>();
        assert_eq!(wt.delta, 0.0);
        assert!((wt.elapsed - 0.005).abs() < 1e-6);
    }
}
