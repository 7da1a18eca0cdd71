//! Error types
//!
//! Geometric singularities are never errors (they fall back to a random
//! heading). Errors are reserved for rejected construction inputs and for
//! configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// A sprite was asked to take on a shape it cannot have
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpriteError {
    #[error("radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("area must be positive and finite, got {0}")]
    InvalidArea(f64),

    #[error("a star needs at least {min} points, got {got}")]
    TooFewPoints { got: u32, min: u32 },

    #[error("a star takes at most {max} points, got {got}")]
    TooManyPoints { got: u32, max: u32 },
}

/// Loading or validating game tuning failed
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid setting `{name}`: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// A game could not be set up
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Sprite(#[from] SpriteError),
}
