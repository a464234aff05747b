//! Coordinate model
//!
//! Provides the validated latitude/longitude pair consumed and produced by
//! the geohash codec, together with its textual form.
//!
//! Text is accepted as `"lat, lon"`, `"lat,lon"` or `"lat lon"` and rendered
//! back as `"lat, lon"` using the shortest decimal form of each value.

mod types;

pub use types::{Coordinate, CoordError, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON, SEPARATORS};

use std::fmt;
use std::str::FromStr;

impl Coordinate {
    /// Creates a coordinate, validating both axes.
    ///
    /// NaN is never within range and is rejected like any other
    /// out-of-range value.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordError> {
        if !(MIN_LAT..=MAX_LAT).contains(&latitude) || !(MIN_LON..=MAX_LON).contains(&longitude) {
            return Err(CoordError::OutOfRange {
                latitude,
                longitude,
            });
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Builds a coordinate from values the caller has already proven in range.
    pub(crate) fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        debug_assert!((MIN_LAT..=MAX_LAT).contains(&latitude));
        debug_assert!((MIN_LON..=MAX_LON).contains(&longitude));
        Self {
            latitude,
            longitude,
        }
    }

    /// Parses `"lat, lon"`, `"lat,lon"` or `"lat lon"`.
    ///
    /// The first separator from [`SEPARATORS`] found in the text wins and
    /// splits it into at most two parts. Each part must be a complete float in
    /// Rust syntax, so `1e1` is accepted; `inf` and `NaN` fail the range check.
    pub fn parse(text: &str) -> Result<Self, CoordError> {
        let invalid = |reason| CoordError::InvalidCoordinateText {
            text: text.to_string(),
            reason,
        };

        let (lat, lon) = SEPARATORS
            .iter()
            .find_map(|sep| text.split_once(sep))
            .ok_or_else(|| invalid("expected two values separated by ', ', ',' or ' '"))?;

        let latitude: f64 = lat
            .parse()
            .map_err(|_| invalid("latitude is not a number"))?;
        let longitude: f64 = lon
            .parse()
            .map_err(|_| invalid("longitude is not a number"))?;

        Self::new(latitude, longitude)
    }

    /// Latitude in decimal degrees.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Number of digits after the decimal point in the rendered latitude and
    /// longitude, e.g. `(5, 5)` for `57.64911, 10.40744`.
    pub fn decimal_places(&self) -> (u32, u32) {
        (decimal_places(self.latitude), decimal_places(self.longitude))
    }
}

/// Counts fractional digits in the `Display` form of a float.
///
/// `f64`'s `Display` never switches to exponent notation, so the shortest
/// round-trip digits are all visible.
fn decimal_places(value: f64) -> u32 {
    value
        .to_string()
        .split_once('.')
        .map(|(_, fraction)| fraction.len() as u32)
        .unwrap_or(0)
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

impl FromStr for Coordinate {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<(f64, f64)> for Coordinate {
    type Error = CoordError;

    fn try_from((latitude, longitude): (f64, f64)) -> Result<Self, Self::Error> {
        Self::new(latitude, longitude)
    }
}

#[cfg(test)]
mod tests;
