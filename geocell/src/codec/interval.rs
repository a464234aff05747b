//! Binary subdivision of a single coordinate axis.

use crate::coord::{MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
use crate::hash::BITS_PER_SYMBOL;

/// A `[min, mid, max]` range that is halved once per bit.
///
/// Bit `0` keeps the lower half `[min, mid]`, bit `1` the upper half
/// `[mid, max]`. A value equal to `mid` belongs to the lower half.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub mid: f64,
    pub max: f64,
}

impl Interval {
    /// Full latitude range before any subdivision.
    pub const LATITUDE: Interval = Interval {
        min: MIN_LAT,
        mid: 0.0,
        max: MAX_LAT,
    };

    /// Full longitude range before any subdivision.
    pub const LONGITUDE: Interval = Interval {
        min: MIN_LON,
        mid: 0.0,
        max: MAX_LON,
    };

    /// The half `[min, mid]`.
    #[inline]
    pub fn lower(self) -> Self {
        Self {
            min: self.min,
            mid: (self.min + self.mid) / 2.0,
            max: self.mid,
        }
    }

    /// The half `[mid, max]`.
    #[inline]
    pub fn upper(self) -> Self {
        Self {
            min: self.mid,
            mid: (self.mid + self.max) / 2.0,
            max: self.max,
        }
    }

    /// Narrows to the half selected by `bit`.
    #[inline]
    pub fn narrow(self, bit: bool) -> Self {
        if bit {
            self.upper()
        } else {
            self.lower()
        }
    }

    /// The bit that selects the half containing `value`.
    #[inline]
    pub fn bit_for(&self, value: f64) -> bool {
        value > self.mid
    }

    /// Distance from `mid` to either edge.
    #[inline]
    pub fn half_width(&self) -> f64 {
        (self.max - self.min) / 2.0
    }

    /// Whether `value` lies within the closed range.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Subdivides `range` around `value` `count` times.
///
/// Returns the emitted bits packed most-significant-first into the low
/// `count` bits of the result.
pub fn subdivide(value: f64, range: Interval, count: usize) -> u32 {
    let (_, bits) = (0..count).fold((range, 0u32), |(interval, bits), _| {
        let bit = interval.bit_for(value);
        (interval.narrow(bit), (bits << 1) | bit as u32)
    });
    bits
}

/// Splits a hash's bits between the axes as `(latitude, longitude)`.
///
/// Longitude leads the interleave, so it takes the extra bit when the total
/// is odd.
#[inline]
pub fn axis_bits(precision: usize) -> (usize, usize) {
    let total = precision * BITS_PER_SYMBOL;
    let latitude = total / 2;
    (latitude, total - latitude)
}
