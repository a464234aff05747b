//! Geohash codec
//!
//! Converts between [`Coordinate`] and [`GeoHash`] by binary subdivision of
//! the latitude and longitude ranges.
//!
//! # Bit layout
//!
//! A hash of `n` characters carries `5n` bits. Latitude receives
//! `floor(5n / 2)` of them and longitude the rest. The bits are interleaved
//! with longitude leading (`lon0, lat0, lon1, lat1, ...`) and read five at a
//! time as indices into the geohash alphabet.
//!
//! # Example
//!
//! ```
//! use geocell::codec::{decode, encode};
//! use geocell::coord::Coordinate;
//!
//! let coord = Coordinate::new(57.64911, 10.40744).unwrap();
//! let hash = encode(&coord, 11).unwrap();
//! assert_eq!(hash.as_str(), "u4pruydqqvj");
//!
//! let decoded = decode(&hash);
//! assert_eq!(decoded.latitude(), 57.64911063);
//! assert_eq!(decoded.longitude(), 10.40743969);
//! ```

mod cell;
mod error;
mod interval;

pub use cell::Cell;
pub use error::CodecError;
pub use interval::{axis_bits, subdivide, Interval};

use tracing::{debug, trace};

use crate::coord::Coordinate;
use crate::hash::{GeoHash, BITS_PER_SYMBOL, MAX_PRECISION, MIN_PRECISION};

/// Encodes a coordinate as a geohash of `precision` characters.
///
/// # Errors
///
/// Returns [`CodecError::InvalidPrecision`] unless `precision` is within
/// 1..=12. Any valid coordinate encodes at any valid precision.
pub fn encode(coord: &Coordinate, precision: usize) -> Result<GeoHash, CodecError> {
    if !(MIN_PRECISION..=MAX_PRECISION).contains(&precision) {
        return Err(CodecError::InvalidPrecision(precision));
    }
    Ok(encode_unchecked(coord, precision))
}

/// Encodes a coordinate with the shortest hash that preserves its decimal
/// precision.
///
/// The number of decimal places is taken from the coordinate's rendered
/// form. Precisions 1 to 12 are tried in order and the first hash whose
/// whole decoded cell rounds back to the coordinate wins. When no cell is
/// that tight, the first hash whose decoded point alone rounds back is
/// used instead.
///
/// # Errors
///
/// Returns [`CodecError::PrecisionUnattainable`] when even a 12-character
/// hash does not decode back to the coordinate's decimal places.
pub fn encode_auto(coord: &Coordinate) -> Result<GeoHash, CodecError> {
    let (lat_places, lon_places) = coord.decimal_places();

    let search = |accept: fn(&Cell, &Coordinate, u32, u32) -> bool| {
        (MIN_PRECISION..=MAX_PRECISION)
            .map(|precision| encode_unchecked(coord, precision))
            .find(|hash| {
                let accepted = accept(&decode_cell(hash), coord, lat_places, lon_places);
                trace!(hash = %hash, accepted, "auto-precision candidate");
                accepted
            })
    };

    let found = search(Cell::rounds_to).or_else(|| {
        debug!(coordinate = %coord, "no cell rounds whole, falling back to decoded point");
        search(Cell::centre_rounds_to)
    });

    match found {
        Some(hash) => {
            debug!(
                coordinate = %coord,
                lat_places,
                lon_places,
                hash = %hash,
                "auto-precision selected {} characters",
                hash.precision()
            );
            Ok(hash)
        }
        None => Err(CodecError::PrecisionUnattainable { coordinate: *coord }),
    }
}

/// Decodes a geohash to the rounded centre of its cell.
///
/// Each axis is rounded to `floor(3b / 10)` decimal places, where `b` is
/// the number of bits the hash spends on that axis. Decoding is lossy: the
/// result is the cell's representative point, not the encoded input.
pub fn decode(hash: &GeoHash) -> Coordinate {
    decode_cell(hash).representative()
}

/// Decodes a geohash to the full cell it denotes.
pub fn decode_cell(hash: &GeoHash) -> Cell {
    let bits = hash.values().flat_map(|value| {
        (0..BITS_PER_SYMBOL)
            .rev()
            .map(move |shift| (value >> shift) & 1 == 1)
    });

    // Even positions belong to longitude, odd positions to latitude
    let (latitude, longitude) = bits.enumerate().fold(
        (Interval::LATITUDE, Interval::LONGITUDE),
        |(lat, lon), (position, bit)| {
            if position % 2 == 0 {
                (lat, lon.narrow(bit))
            } else {
                (lat.narrow(bit), lon)
            }
        },
    );

    Cell {
        latitude,
        longitude,
        precision: hash.precision(),
    }
}

/// Encodes with a precision already known to be within 1..=12.
fn encode_unchecked(coord: &Coordinate, precision: usize) -> GeoHash {
    let (lat_bits, lon_bits) = axis_bits(precision);
    let lat = subdivide(coord.latitude(), Interval::LATITUDE, lat_bits);
    let lon = subdivide(coord.longitude(), Interval::LONGITUDE, lon_bits);

    let combined = interleave(lon, lon_bits, lat, lat_bits);
    let total = lat_bits + lon_bits;

    GeoHash::from_values((1..=precision).map(|symbol| {
        let shift = total - symbol * BITS_PER_SYMBOL;
        ((combined >> shift) & 0x1f) as u8
    }))
}

/// Interleaves two most-significant-first bit sequences, longitude first.
///
/// `lon_bits` is either equal to `lat_bits` or one more, so the sequence
/// alternates cleanly and may end on a trailing longitude bit.
fn interleave(lon: u32, lon_bits: usize, lat: u32, lat_bits: usize) -> u64 {
    (0..lon_bits + lat_bits).fold(0u64, |combined, position| {
        let index = position / 2;
        let bit = if position % 2 == 0 {
            (lon >> (lon_bits - 1 - index)) & 1
        } else {
            (lat >> (lat_bits - 1 - index)) & 1
        };
        (combined << 1) | u64::from(bit)
    })
}
