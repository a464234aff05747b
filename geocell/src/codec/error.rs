//! Error types for the codec module.

use thiserror::Error;

use crate::coord::{CoordError, Coordinate};
use crate::hash::HashError;

/// Errors that can occur while encoding or decoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    /// The coordinate could not be built.
    #[error(transparent)]
    Coordinate(#[from] CoordError),

    /// The geohash string is invalid.
    #[error(transparent)]
    Hash(#[from] HashError),

    /// An explicit precision outside 1..=12.
    #[error("Invalid precision: {0} (must be between 1 and 12)")]
    InvalidPrecision(usize),

    /// No hash of 1 to 12 characters reproduces the coordinate.
    #[error("No geohash of 1 to 12 characters reproduces {coordinate} at its decimal precision")]
    PrecisionUnattainable { coordinate: Coordinate },
}
