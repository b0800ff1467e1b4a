//! Animation states, clips and the per-entity request queue.
//!
//! Gameplay code never switches clips directly. It calls
//! [`Animated::request`] during the tick and the
//! [`apply_animation_requests`](crate::systems::animation::apply_animation_requests)
//! system commits the last request once per frame:
//!
//! - no pending request: nothing happens;
//! - the requested state is already playing: the request is dropped and
//!   playback continues where it was;
//! - the state has no registered clip: a warning is logged, the request is
//!   dropped and the previous clip keeps playing;
//! - otherwise the clip is swapped in and playback restarts at frame 0.
//!
//! Requesting every frame is therefore cheap and never restarts a clip.

use std::sync::Arc;

use bevy_ecs::prelude::Component;
use log::warn;
use rustc_hash::FxHashMap;

/// Seconds each animation frame stays on screen.
pub const FRAME_DURATION: f32 = 1.0 / 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationState {
    IdleDown,
    IdleUp,
    IdleLeft,
    IdleRight,
    WalkDown,
    WalkUp,
    WalkLeft,
    WalkRight,
    DieDown,
}

impl AnimationState {
    /// Frame-name identifier used to pick this state's frames out of an atlas.
    pub fn identifier(self) -> &'static str {
        match self {
            AnimationState::IdleDown => "Idle_12",
            AnimationState::IdleUp => "Idle_4",
            AnimationState::IdleLeft => "Idle_8",
            AnimationState::IdleRight => "Idle_0",
            AnimationState::WalkDown => "Walk_12",
            AnimationState::WalkUp => "Walk_4",
            AnimationState::WalkLeft => "Walk_8",
            AnimationState::WalkRight => "Walk_0",
            AnimationState::DieDown => "Die_0",
        }
    }

    pub fn walks() -> [AnimationState; 4] {
        [
            AnimationState::WalkDown,
            AnimationState::WalkUp,
            AnimationState::WalkLeft,
            AnimationState::WalkRight,
        ]
    }

    pub fn idles() -> [AnimationState; 4] {
        [
            AnimationState::IdleDown,
            AnimationState::IdleUp,
            AnimationState::IdleLeft,
            AnimationState::IdleRight,
        ]
    }
}

/// Ordered texture frames for one animation state.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    pub state: AnimationState,
    pub frames: Vec<Arc<str>>,
    pub looped: bool,
}

impl AnimationClip {
    /// Build a clip from the frame names of an atlas.
    ///
    /// Keeps every name containing `"{identifier}_"` and sorts them so
    /// `Walk_0_00, Walk_0_01, ...` play in order. Returns `None` when the
    /// atlas has no frame for the state.
    pub fn from_atlas<S: AsRef<str>>(
        names: &[S],
        state: AnimationState,
        looped: bool,
    ) -> Option<Self> {
        let needle = format!("{}_", state.identifier());
        let mut frames: Vec<Arc<str>> = names
            .iter()
            .map(|name| AsRef::<str>::as_ref(name))
            .filter(|name| name.contains(&needle))
            .map(Arc::from)
            .collect();
        if frames.is_empty() {
            return None;
        }
        frames.sort();
        Some(AnimationClip {
            state,
            frames,
            looped,
        })
    }
}

/// Animation capability: registered clips, the active one, and at most one
/// pending request.
#[derive(Component, Debug, Clone, Default)]
pub struct Animated {
    clips: FxHashMap<AnimationState, Arc<AnimationClip>>,
    current: Option<AnimationState>,
    pending: Option<AnimationState>,
    pub frame_index: usize,
    pub elapsed: f32,
    pub finished: bool,
}

impl Animated {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clip(mut self, clip: AnimationClip) -> Self {
        self.add_clip(clip);
        self
    }

    pub fn add_clip(&mut self, clip: AnimationClip) {
        self.clips.insert(clip.state, Arc::new(clip));
    }

    pub fn has_clip(&self, state: AnimationState) -> bool {
        self.clips.contains_key(&state)
    }

    /// Ask for `state` to play. Later requests in the same frame win.
    pub fn request(&mut self, state: AnimationState) {
        self.pending = Some(state);
    }

    pub fn pending(&self) -> Option<AnimationState> {
        self.pending
    }

    pub fn current(&self) -> Option<AnimationState> {
        self.current
    }

    /// Commit the pending request, if any. Returns `true` when the active clip
    /// changed.
    pub fn apply_request(&mut self) -> bool {
        let Some(state) = self.pending.take() else {
            return false;
        };
        if self.current == Some(state) {
            return false;
        }
        if !self.clips.contains_key(&state) {
            warn!("no animation clip registered for {:?}", state);
            return false;
        }
        self.current = Some(state);
        self.frame_index = 0;
        self.elapsed = 0.0;
        self.finished = false;
        true
    }

    /// Advance playback of the active clip by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        let Some(clip) = self.current.and_then(|s| self.clips.get(&s)) else {
            return;
        };
        if self.finished {
            return;
        }
        let len = clip.frames.len();
        let looped = clip.looped;
        self.elapsed += dt;
        while self.elapsed >= FRAME_DURATION {
            self.elapsed -= FRAME_DURATION;
            if self.frame_index + 1 < len {
                self.frame_index += 1;
            } else if looped {
                self.frame_index = 0;
            } else {
                self.finished = true;
                self.elapsed = 0.0;
                break;
            }
        }
    }

    /// Texture name of the frame currently on screen.
    pub fn current_frame(&self) -> Option<&str> {
        let clip = self.clips.get(&self.current?)?;
        clip.frames.get(self.frame_index).map(|f| f.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk_names() -> Vec<String> {
        let mut names = Vec::new();
        for dir in ["0", "4", "8", "12"] {
            for i in (0..4).rev() {
                names.push(format!("PlayerWalk_{dir}_{i:02}"));
            }
        }
        names
    }

    fn walker() -> Animated {
        let names = walk_names();
        let mut anim = Animated::new();
        for state in AnimationState::walks() {
            anim.add_clip(AnimationClip::from_atlas(&names, state, true).unwrap());
        }
        anim
    }

    #[test]
    fn clip_frames_are_filtered_and_sorted() {
        let clip =
            AnimationClip::from_atlas(&walk_names(), AnimationState::WalkRight, true).unwrap();
        let frames: Vec<&str> = clip.frames.iter().map(|f| f.as_ref()).collect();
        assert_eq!(
            frames,
            vec![
                "PlayerWalk_0_00",
                "PlayerWalk_0_01",
                "PlayerWalk_0_02",
                "PlayerWalk_0_03"
            ]
        );
    }

    #[test]
    fn clip_without_frames_is_none() {
        assert!(AnimationClip::from_atlas(&walk_names(), AnimationState::DieDown, false).is_none());
    }

    #[test]
    fn last_request_wins() {
        let mut anim = walker();
        anim.request(AnimationState::WalkUp);
        anim.request(AnimationState::WalkLeft);
        assert!(anim.apply_request());
        assert_eq!(anim.current(), Some(AnimationState::WalkLeft));
        assert_eq!(anim.pending(), None);
    }

    #[test]
    fn repeating_current_state_keeps_progress() {
        let mut anim = walker();
        anim.request(AnimationState::WalkDown);
        anim.apply_request();
        anim.advance(FRAME_DURATION * 2.5);
        assert_eq!(anim.frame_index, 2);

        anim.request(AnimationState::WalkDown);
        assert!(!anim.apply_request());
        assert_eq!(anim.frame_index, 2);
        assert_eq!(anim.pending(), None);
    }

    #[test]
    fn unknown_clip_keeps_previous_clip() {
        let mut anim = walker();
        anim.request(AnimationState::WalkDown);
        anim.apply_request();
        anim.advance(FRAME_DURATION * 1.5);

        anim.request(AnimationState::DieDown);
        assert!(!anim.apply_request());
        assert_eq!(anim.current(), Some(AnimationState::WalkDown));
        assert_eq!(anim.frame_index, 1);
        assert_eq!(anim.pending(), None);
    }

    #[test]
    fn no_request_is_a_no_op() {
        let mut anim = walker();
        assert!(!anim.apply_request());
        assert_eq!(anim.current(), None);
        assert_eq!(anim.current_frame(), None);
    }

    #[test]
    fn looping_clip_wraps_and_one_shot_stops() {
        let mut anim = walker();
        anim.request(AnimationState::WalkUp);
        anim.apply_request();
        anim.advance(FRAME_DURATION * 4.5);
        assert_eq!(anim.frame_index, 0);
        assert_eq!(anim.current_frame(), Some("PlayerWalk_4_00"));

        let names: Vec<String> = (0..3).map(|i| format!("EnemyDie_0_{i:02}")).collect();
        let mut dying = Animated::new()
            .with_clip(AnimationClip::from_atlas(&names, AnimationState::DieDown, false).unwrap());
        dying.request(AnimationState::DieDown);
        dying.apply_request();
        dying.advance(1.0);
        assert!(dying.finished);
        assert_eq!(dying.current_frame(), Some("EnemyDie_0_02"));
    }
}
