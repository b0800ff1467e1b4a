//! Four-way facing derived from a direction vector.
//!
//! Buckets are half-open ranges of the vector's angle:
//!
//! | facing | angle |
//! |--------|-------|
//! | Up     | [45°, 135°) |
//! | Left   | [135°, 180°] ∪ (−180°, −135°) |
//! | Down   | [−135°, −45°) |
//! | Right  | [−45°, 45°) |
//!
//! The comparisons are done on the components rather than through `atan2`
//! so vectors sitting exactly on a diagonal always land in the same bucket.

use glam::Vec2;

use super::animation::AnimationState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    #[default]
    Down,
    Up,
    Left,
    Right,
}

impl Facing {
    /// Bucket for `v`, or `None` for the zero vector.
    pub fn from_vector(v: Vec2) -> Option<Facing> {
        let (x, y) = (v.x, v.y);
        if x == 0.0 && y == 0.0 {
            return None;
        }
        let facing = if y > 0.0 && (y > x.abs() || y == x) {
            Facing::Up
        } else if y < 0.0 && (-y > x.abs() || y == x) {
            Facing::Down
        } else if x > 0.0 && (x > y.abs() || y == -x) {
            Facing::Right
        } else {
            Facing::Left
        };
        Some(facing)
    }

    pub fn walk(self) -> AnimationState {
        match self {
            Facing::Down => AnimationState::WalkDown,
            Facing::Up => AnimationState::WalkUp,
            Facing::Left => AnimationState::WalkLeft,
            Facing::Right => AnimationState::WalkRight,
        }
    }

    pub fn idle(self) -> AnimationState {
        match self {
            Facing::Down => AnimationState::IdleDown,
            Facing::Up => AnimationState::IdleUp,
            Facing::Left => AnimationState::IdleLeft,
            Facing::Right => AnimationState::IdleRight,
        }
    }
}
