//! Coordinate type definitions

use thiserror::Error;

/// Valid latitude range
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Separators accepted between latitude and longitude, in priority order.
pub const SEPARATORS: [&str; 3] = [", ", ",", " "];

/// A validated geographic position in decimal degrees.
///
/// Construction is the only validation point: a `Coordinate` value always
/// satisfies `MIN_LAT <= latitude <= MAX_LAT` and
/// `MIN_LON <= longitude <= MAX_LON`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub(super) latitude: f64,
    pub(super) longitude: f64,
}

/// Errors that can occur when building a coordinate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordError {
    /// Text does not split into exactly two numeric parts
    #[error("Invalid coordinate text '{text}': {reason}")]
    InvalidCoordinateText { text: String, reason: &'static str },

    /// Latitude outside [-90, 90] or longitude outside [-180, 180]
    #[error(
        "Coordinate out of range: {latitude}, {longitude} \
         (latitude must be between -90 and 90, longitude between -180 and 180)"
    )]
    OutOfRange { latitude: f64, longitude: f64 },
}
