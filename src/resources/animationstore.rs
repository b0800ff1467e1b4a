//! Atlas frame-name registry.
//!
//! Texture atlases are loaded by the host; the simulation only needs the
//! frame names each atlas contains to build [`AnimationClip`]s. The default
//! store lists the frames shipped with the game's `player` and `enemy`
//! atlases.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

use crate::components::animation::{AnimationClip, AnimationState, Animated};

pub const PLAYER_ATLAS: &str = "player";
pub const ENEMY_ATLAS: &str = "enemy";

/// Frame names per atlas, keyed by atlas name.
#[derive(Resource, Debug, Clone)]
pub struct AnimationStore {
    pub atlases: FxHashMap<String, Vec<String>>,
}

impl AnimationStore {
    pub fn empty() -> Self {
        AnimationStore {
            atlases: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, atlas: impl Into<String>, frames: Vec<String>) {
        self.atlases.insert(atlas.into(), frames);
    }

    pub fn frames(&self, atlas: &str) -> &[String] {
        self.atlases.get(atlas).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Build an [`Animated`] with a clip for every state the atlas has frames
    /// for. Missing states are simply not registered; requesting them later
    /// logs a warning and keeps the current clip.
    pub fn animated(&self, atlas: &str, states: &[(AnimationState, bool)]) -> Animated {
        let names = self.frames(atlas);
        let mut animated = Animated::new();
        for &(state, looped) in states {
            if let Some(clip) = AnimationClip::from_atlas(names, state, looped) {
                animated.add_clip(clip);
            }
        }
        animated
    }
}

impl Default for AnimationStore {
    fn default() -> Self {
        let mut store = AnimationStore::empty();
        store.insert(
            PLAYER_ATLAS,
            frame_names("Player", &["Walk", "Idle"], &[0, 4, 8, 12], 8),
        );
        let mut enemy = frame_names("Enemy", &["Walk"], &[0, 4, 8, 12], 8);
        enemy.extend(frame_names("Enemy", &["Die"], &[0], 10));
        store.insert(ENEMY_ATLAS, enemy);
        store
    }
}

fn frame_names(prefix: &str, actions: &[&str], angles: &[u32], count: usize) -> Vec<String> {
    let mut names = Vec::new();
    for action in actions {
        for angle in angles {
            for i in 0..count {
                names.push(format!("{prefix}{action}_{angle}_{i:02}"));
            }
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_player_atlas_covers_walk_and_idle() {
        let store = AnimationStore::default();
        let mut states: Vec<(AnimationState, bool)> = AnimationState::walks()
            .into_iter()
            .map(|s| (s, true))
            .collect();
        states.extend(AnimationState::idles().into_iter().map(|s| (s, true)));
        let anim = store.animated(PLAYER_ATLAS, &states);
        for (state, _) in states {
            assert!(anim.has_clip(state), "missing {:?}", state);
        }
        assert!(!anim.has_clip(AnimationState::DieDown));
    }

    #[test]
    fn enemy_atlas_has_a_death_clip() {
        let store = AnimationStore::default();
        let anim = store.animated(ENEMY_ATLAS, &[(AnimationState::DieDown, false)]);
        assert!(anim.has_clip(AnimationState::DieDown));
    }

    #[test]
    fn unknown_atlas_yields_no_clips() {
        let store = AnimationStore::default();
        let anim = store.animated("boss", &[(AnimationState::WalkDown, true)]);
        assert!(!anim.has_clip(AnimationState::WalkDown));
    }
}
