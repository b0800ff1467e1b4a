//! Animation systems.
//!
//! [`apply_animation_requests`] commits each entity's pending request exactly
//! once per frame, after movement has had its say, and
//! [`animation_playback`] steps the active clip forward.

use bevy_ecs::prelude::*;

use crate::components::animation::Animated;
use crate::resources::worldtime::WorldTime;

pub fn apply_animation_requests(mut query: Query<&mut Animated>) {
    for mut animated in query.iter_mut() {
        if animated.pending().is_some() {
            animated.apply_request();
        }
    }
}

pub fn animation_playback(time: Res<WorldTime>, mut query: Query<&mut Animated>) {
    let dt = time.delta;
    for mut animated in query.iter_mut() {
        animated.advance(dt);
    }
}
