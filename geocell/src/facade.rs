//! Text-level encode/decode.
//!
//! Wraps the codec for callers holding strings or raw `(lat, lon)` pairs,
//! such as the CLI.
//!
//! ```
//! use geocell::facade::{decode, encode};
//!
//! assert_eq!(encode("57.64911, 10.40744", Some(11)).unwrap(), "u4pruydqqvj");
//! assert_eq!(encode((57.64911, 10.40744), None).unwrap(), "u4pruydqqvj");
//! assert_eq!(decode("u4pruydqqvj").unwrap(), "57.64911063, 10.40743969");
//! ```

use crate::codec::{self, CodecError};
use crate::coord::{CoordError, Coordinate};
use crate::hash::GeoHash;

/// A coordinate in any of the accepted input forms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoordinateInput<'a> {
    /// An already validated coordinate
    Coordinate(Coordinate),
    /// A raw `(latitude, longitude)` pair
    Pair(f64, f64),
    /// Text in `"lat, lon"`, `"lat,lon"` or `"lat lon"` form
    Text(&'a str),
}

impl CoordinateInput<'_> {
    /// Validates the input into a [`Coordinate`].
    pub fn resolve(self) -> Result<Coordinate, CoordError> {
        match self {
            CoordinateInput::Coordinate(coord) => Ok(coord),
            CoordinateInput::Pair(latitude, longitude) => Coordinate::new(latitude, longitude),
            CoordinateInput::Text(text) => Coordinate::parse(text),
        }
    }
}

impl From<Coordinate> for CoordinateInput<'_> {
    fn from(coord: Coordinate) -> Self {
        CoordinateInput::Coordinate(coord)
    }
}

impl From<(f64, f64)> for CoordinateInput<'_> {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        CoordinateInput::Pair(latitude, longitude)
    }
}

impl<'a> From<&'a str> for CoordinateInput<'a> {
    fn from(text: &'a str) -> Self {
        CoordinateInput::Text(text)
    }
}

impl<'a> From<&'a String> for CoordinateInput<'a> {
    fn from(text: &'a String) -> Self {
        CoordinateInput::Text(text.as_str())
    }
}

/// Encodes a coordinate to hash text.
///
/// With `precision` set, produces exactly that many characters; otherwise
/// the shortest hash preserving the coordinate's decimal precision.
pub fn encode<'a>(
    input: impl Into<CoordinateInput<'a>>,
    precision: Option<usize>,
) -> Result<String, CodecError> {
    let coord = input.into().resolve()?;
    let hash = match precision {
        Some(precision) => codec::encode(&coord, precision)?,
        None => codec::encode_auto(&coord)?,
    };
    Ok(hash.into_string())
}

/// Decodes hash text to rendered coordinate text (`"lat, lon"`).
pub fn decode(text: &str) -> Result<String, CodecError> {
    let hash = GeoHash::new(text)?;
    Ok(codec::decode(&hash).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::HashError;

    #[test]
    fn test_encode_text_with_precision() {
        assert_eq!(
            encode("57.64911, 10.40744", Some(11)).unwrap(),
            "u4pruydqqvj"
        );
        assert_eq!(encode("57.64911 10.40744", Some(5)).unwrap(), "u4pru");
    }

    #[test]
    fn test_encode_pair_auto_precision() {
        assert_eq!(encode((57.64911, 10.40744), None).unwrap(), "u4pruydqqvj");
    }

    #[test]
    fn test_encode_owned_string() {
        let text = String::from("57.64911,10.40744");
        assert_eq!(encode(&text, None).unwrap(), "u4pruydqqvj");
    }

    #[test]
    fn test_encode_coordinate() {
        let coord = Coordinate::new(-90.0, -180.0).unwrap();
        assert_eq!(encode(coord, Some(1)).unwrap(), "0");
    }

    #[test]
    fn test_encode_out_of_range_text() {
        let result = encode("91.0, 10.0", None);
        assert!(matches!(
            result,
            Err(CodecError::Coordinate(CoordError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn test_encode_malformed_text() {
        let result = encode("not,a,location,string", None);
        assert!(matches!(
            result,
            Err(CodecError::Coordinate(
                CoordError::InvalidCoordinateText { .. }
            ))
        ));
    }

    #[test]
    fn test_encode_invalid_precision() {
        let result = encode((1.0, 1.0), Some(20));
        assert_eq!(result, Err(CodecError::InvalidPrecision(20)));
    }

    #[test]
    fn test_decode_text() {
        assert_eq!(decode("u4pruydqqvj").unwrap(), "57.64911063, 10.40743969");
        assert_eq!(decode("ezs42").unwrap(), "42.605, -5.603");
    }

    #[test]
    fn test_decode_uppercase_fails() {
        let result = decode("u4pruydqqvA");
        assert!(matches!(
            result,
            Err(CodecError::Hash(HashError::InvalidHashCharacter {
                character: 'A',
                ..
            }))
        ));
    }

    #[test]
    fn test_decode_empty_fails() {
        assert_eq!(decode(""), Err(CodecError::Hash(HashError::Empty)));
    }
}
