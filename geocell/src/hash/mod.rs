//! GeoHash model
//!
//! A [`GeoHash`] is a validated string of 1 to 12 lowercase symbols from the
//! geohash base-32 alphabet. Each symbol carries 5 bits of interleaved
//! longitude/latitude subdivision.

mod alphabet;

pub use alphabet::{symbol, value_of, ALPHABET};

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Shortest hash accepted.
pub const MIN_PRECISION: usize = 1;

/// Longest hash accepted.
pub const MAX_PRECISION: usize = 12;

/// Bits carried by one hash symbol.
pub const BITS_PER_SYMBOL: usize = 5;

/// Errors that can occur when validating a geohash string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// The string is empty
    #[error("Geohash is empty")]
    Empty,

    /// The string has more than [`MAX_PRECISION`] symbols
    #[error("Geohash '{hash}' is {length} characters long (maximum is 12)")]
    TooLong { hash: String, length: usize },

    /// A character outside the 32-symbol alphabet
    #[error("Invalid geohash character '{character}' at position {position} in '{hash}'")]
    InvalidHashCharacter {
        hash: String,
        character: char,
        position: usize,
    },
}

/// A validated geohash string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeoHash {
    value: String,
}

impl GeoHash {
    /// Validates `text` as a geohash.
    ///
    /// Uppercase symbols are rejected; the alphabet is lowercase only.
    pub fn new(text: impl Into<String>) -> Result<Self, HashError> {
        let value = text.into();

        let length = value.chars().count();
        if length < MIN_PRECISION {
            return Err(HashError::Empty);
        }
        if length > MAX_PRECISION {
            return Err(HashError::TooLong {
                hash: value,
                length,
            });
        }

        if let Some((position, character)) = value
            .chars()
            .enumerate()
            .find(|(_, c)| value_of(*c).is_none())
        {
            return Err(HashError::InvalidHashCharacter {
                hash: value,
                character,
                position,
            });
        }

        Ok(Self { value })
    }

    /// Builds a hash from 5-bit symbol values.
    ///
    /// Callers must supply between [`MIN_PRECISION`] and [`MAX_PRECISION`]
    /// values; every value maps to a valid symbol.
    pub(crate) fn from_values(values: impl Iterator<Item = u8>) -> Self {
        let value: String = values.map(symbol).collect();
        debug_assert!((MIN_PRECISION..=MAX_PRECISION).contains(&value.len()));
        Self { value }
    }

    /// The hash text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Number of symbols in the hash.
    #[inline]
    pub fn precision(&self) -> usize {
        // Validated hashes are ASCII, so bytes == chars
        self.value.len()
    }

    /// The 5-bit value of each symbol, in hash order.
    pub fn values(&self) -> impl Iterator<Item = u8> + '_ {
        // Every byte was checked against the alphabet on construction
        self.value.chars().filter_map(value_of)
    }

    /// Consumes the hash, returning its text.
    pub fn into_string(self) -> String {
        self.value
    }
}

impl fmt::Display for GeoHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for GeoHash {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl FromStr for GeoHash {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for GeoHash {
    type Error = HashError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for GeoHash {
    type Error = HashError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
