//! Delve simulation core.
//!
//! The gameplay of a small top-down dungeon crawler: procedural levels built
//! from section templates, a player that walks and throws projectiles,
//! chasing enemies, food, a level exit, and a six-mode game flow. Rendering,
//! physics and audio playback belong to the host, which drives a
//! [`scene::Scene`] and reads its ECS world.

pub mod components;
pub mod entities;
pub mod error;
pub mod events;
pub mod game;
pub mod resources;
pub mod scene;
pub mod systems;
