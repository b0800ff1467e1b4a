//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world. An entity's capabilities are simply the components it
//! carries: a spatial set (position, rotation, z-order, layer, collision body),
//! an animation request queue, and one movement kind.
//!
//! Submodules overview:
//! - [`actor`] – role tag used to dispatch contacts
//! - [`animation`] – animation states, clips and the request queue
//! - [`banner`] – text overlays put up by game modes
//! - [`collision`] – collision body and collider category bits
//! - [`facing`] – four-way facing buckets for direction vectors
//! - [`health`] – enemy hit points and the player's hurt flash
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`movement`] – player, enemy and projectile movement state
//! - [`persistent`] – marker for entities that survive scene resets
//! - [`renderlayer`] – which layer the host renderer attaches a node to
//! - [`rotation`] – rotation angle in radians
//! - [`sprite`] – static texture assignment
//! - [`ttl`] – countdown to automatic despawn
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod actor;
pub mod animation;
pub mod banner;
pub mod collision;
pub mod facing;
pub mod health;
pub mod mapposition;
pub mod movement;
pub mod persistent;
pub mod renderlayer;
pub mod rotation;
pub mod sprite;
pub mod ttl;
pub mod zindex;
