//! Error type shared by the fallible parts of the simulation.
//!
//! Construction-time problems (bad configuration, malformed section
//! catalogs, impossible map layouts) are returned as [`DelveError`] values.
//! Broken entity wiring discovered while the simulation is running is a
//! programmer error: it goes through [`invariant_violated`], which stops a
//! debug build on the spot and logs in release builds so the offending entity
//! is skipped instead of taking the whole session down.

use bevy_ecs::entity::Entity;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DelveError {
    /// An entity is missing a sibling capability another one depends on.
    #[error("entity {entity:?} has no {capability} capability (required by {required_by})")]
    MissingCapability {
        entity: Entity,
        capability: &'static str,
        required_by: &'static str,
    },

    #[error("unknown tile code {0}")]
    UnknownTileCode(i32),

    #[error("section catalog '{0}' is empty")]
    EmptyCatalog(&'static str),

    #[error(
        "section in catalog '{catalog}' is {found_w}x{found_h}, expected {expected_w}x{expected_h}"
    )]
    SectionSize {
        catalog: &'static str,
        expected_w: usize,
        expected_h: usize,
        found_w: usize,
        found_h: usize,
    },

    #[error("invalid map layout: {0}")]
    Layout(String),

    #[error("failed to parse section catalog: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DelveError>;

/// Report a broken invariant.
///
/// Panics in debug builds. Release builds log the error and return so the
/// caller can skip the entity.
#[track_caller]
pub fn invariant_violated(err: DelveError) {
    if cfg!(debug_assertions) {
        panic!("{err}");
    }
    log::error!("{err}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_capability_names_both_sides() {
        let err = DelveError::MissingCapability {
            entity: Entity::PLACEHOLDER,
            capability: "Animated",
            required_by: "PlayerMove",
        };
        let msg = err.to_string();
        assert!(msg.contains("Animated"));
        assert!(msg.contains("PlayerMove"));
    }

    #[test]
    fn catalog_errors_convert_from_serde() {
        let parse: std::result::Result<Vec<i32>, _> = serde_json::from_str("[1, 2");
        let err: DelveError = parse.unwrap_err().into();
        assert!(matches!(err, DelveError::Catalog(_)));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "no Spatial capability")]
    fn invariant_violation_panics_in_debug() {
        invariant_violated(DelveError::MissingCapability {
            entity: Entity::PLACEHOLDER,
            capability: "Spatial",
            required_by: "EnemyMove",
        });
    }
}
