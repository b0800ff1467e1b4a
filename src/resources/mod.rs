//! Global resources shared across systems.
//!
//! Resources hold world-wide state rather than per-entity data: the clock,
//! configuration, the current game mode and session, input, the camera, the
//! level map and its content catalogs, and the bridge to the audio thread.
//!
//! Submodules overview:
//! - [`animationstore`] – atlas frame names used to build animation clips
//! - [`audio`] – channel bridge to the host audio thread
//! - [`camera2d`] – camera target and zoom read by the host renderer
//! - [`contacts`] – pairs currently touching, for begin-contact detection
//! - [`gameconfig`] – tuning values loaded from an INI file
//! - [`gamestate`] – game mode machine, pending requests and effects
//! - [`input`] – queued controller events and derived movement/attack vectors
//! - [`levelrng`] – seeded random source for level generation
//! - [`sectioncatalog`] – section templates for the map generator
//! - [`session`] – per-level session state and cross-level progress
//! - [`tilemap`] – tile grid of the current level and its generator
//! - [`worldtime`] – simulation time and delta

pub mod animationstore;
pub mod audio;
pub mod camera2d;
pub mod contacts;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod levelrng;
pub mod sectioncatalog;
pub mod session;
pub mod tilemap;
pub mod worldtime;
