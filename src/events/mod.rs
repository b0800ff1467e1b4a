//! Event types and observers used by the simulation.
//!
//! This module groups the domain events exchanged across systems and the
//! collaborators around the simulation. Events provide a decoupled way for
//! systems to communicate without direct dependencies.
//!
//! Submodules:
//! - [`audio`] – sound cues and music commands for the host audio thread
//! - [`contact`] – begin-contact notifications from the physics collaborator
//! - [`gamestate`] – game mode change notifications
//! - [`input`] – controller, touch and tilt input events
pub mod audio;
pub mod contact;
pub mod gamestate;
pub mod input;
