//! The rectangle a geohash denotes.

use super::interval::{axis_bits, Interval};
use crate::coord::Coordinate;

/// The latitude/longitude rectangle selected by a geohash.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    /// Latitude range after replaying the hash's latitude bits
    pub latitude: Interval,
    /// Longitude range after replaying the hash's longitude bits
    pub longitude: Interval,
    /// Length of the hash that produced this cell
    pub precision: usize,
}

impl Cell {
    /// Southern edge in degrees.
    pub fn south(&self) -> f64 {
        self.latitude.min
    }

    /// Northern edge in degrees.
    pub fn north(&self) -> f64 {
        self.latitude.max
    }

    /// Western edge in degrees.
    pub fn west(&self) -> f64 {
        self.longitude.min
    }

    /// Eastern edge in degrees.
    pub fn east(&self) -> f64 {
        self.longitude.max
    }

    /// Unrounded centre as `(latitude, longitude)`.
    pub fn center(&self) -> (f64, f64) {
        (self.latitude.mid, self.longitude.mid)
    }

    /// Whether the coordinate lies inside the cell, edges included.
    pub fn contains(&self, coord: &Coordinate) -> bool {
        self.latitude.contains(coord.latitude()) && self.longitude.contains(coord.longitude())
    }

    /// Decimal places reported for each axis as `(latitude, longitude)`.
    ///
    /// Each bit of subdivision is worth about `log10(2)` ≈ 0.3 decimal
    /// digits, so an axis with `b` bits is reported to `floor(3b / 10)` places.
    pub fn decimal_places(&self) -> (u32, u32) {
        let (lat_bits, lon_bits) = axis_bits(self.precision);
        (digits_for_bits(lat_bits), digits_for_bits(lon_bits))
    }

    /// The centre rounded to [`Cell::decimal_places`].
    pub fn representative(&self) -> Coordinate {
        let (lat_places, lon_places) = self.decimal_places();
        // The rounding step is always smaller than the half-width, so the
        // rounded centre stays inside the cell and therefore in range.
        Coordinate::new_unchecked(
            round_to(self.latitude.mid, lat_places),
            round_to(self.longitude.mid, lon_places),
        )
    }

    /// Whether the representative point rounds to `coord` at the given
    /// decimal places.
    pub(crate) fn centre_rounds_to(&self, coord: &Coordinate, lat_places: u32, lon_places: u32) -> bool {
        let representative = self.representative();
        round_to(representative.latitude(), lat_places) == coord.latitude()
            && round_to(representative.longitude(), lon_places) == coord.longitude()
    }

    /// Whether the whole cell, and its representative point, round to
    /// `coord` at the given decimal places.
    pub(crate) fn rounds_to(&self, coord: &Coordinate, lat_places: u32, lon_places: u32) -> bool {
        let lat_ok = [self.latitude.min, self.latitude.max]
            .iter()
            .all(|v| round_to(*v, lat_places) == coord.latitude());
        let lon_ok = [self.longitude.min, self.longitude.max]
            .iter()
            .all(|v| round_to(*v, lon_places) == coord.longitude());

        lat_ok && lon_ok && self.centre_rounds_to(coord, lat_places, lon_places)
    }
}

fn digits_for_bits(bits: usize) -> u32 {
    (bits * 3 / 10) as u32
}

/// Rounds half away from zero to `places` decimal places.
pub(crate) fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    // Adding zero turns -0.0 into 0.0
    (value * factor).round() / factor + 0.0
}
