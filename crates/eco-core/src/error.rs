//! Framework error type.
//!
//! Routine deaths (old age, starvation, predation, overcrowding) are state
//! transitions and never surface here.  These variants signal caller misuse.

use thiserror::Error;

use crate::Location;

/// The top-level error type for `eco-core` and a common base for sub-crates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EcoError {
    #[error("location {location} is outside the {depth}x{width} field")]
    OutOfBounds {
        location: Location,
        width:    usize,
        depth:    usize,
    },

    #[error("location {0} is already occupied")]
    Occupied(Location),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Shorthand result type for all `eco-*` crates.
pub type EcoResult<T> = Result<T, EcoError>;
