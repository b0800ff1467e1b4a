//! Gameplay systems.
//!
//! Each submodule holds the systems for one concern. [`crate::scene::Scene`]
//! puts them in a single chained schedule; gameplay systems only run while
//! the session is not frozen.
//!
//! Submodules overview
//! - [`animation`] – apply queued animation requests and advance playback
//! - [`attack`] – spawn projectiles from the aim vector on a cooldown
//! - [`audio`] – forward audio commands to the host audio thread
//! - [`camera`] – keep the camera on the player
//! - [`collision`] – built-in overlap detector that emits contact events
//! - [`combat`] – resolve contact events between gameplay roles
//! - [`gamestate`] – apply queued mode transitions and their effects
//! - [`health`] – health decay, hurt flash and the health check
//! - [`input`] – route controller events according to the input mode
//! - [`movement`] – player, enemy and projectile movement
//! - [`time`] – update simulation time and delta
//! - [`ttl`] – remove entities whose time to live ran out

pub mod animation;
pub mod attack;
pub mod audio;
pub mod camera;
pub mod collision;
pub mod combat;
pub mod gamestate;
pub mod health;
pub mod input;
pub mod movement;
pub mod time;
pub mod ttl;
