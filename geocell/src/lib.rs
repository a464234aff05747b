//! geocell - Geohash encoding and decoding
//!
//! Maps latitude/longitude coordinates to short base-32 strings that name a
//! rectangular cell, and back again.
//!
//! # Quick Start
//!
//! ```
//! use geocell::codec;
//! use geocell::coord::Coordinate;
//!
//! let coord: Coordinate = "57.64911, 10.40744".parse().unwrap();
//!
//! // Fixed precision
//! let hash = codec::encode(&coord, 11).unwrap();
//! assert_eq!(hash.as_str(), "u4pruydqqvj");
//!
//! // Shortest hash that keeps the input's decimal places
//! assert_eq!(codec::encode_auto(&coord).unwrap(), hash);
//!
//! // Back to a coordinate
//! assert_eq!(codec::decode(&hash).to_string(), "57.64911063, 10.40743969");
//! ```
//!
//! For string-in/string-out use, see [`facade`].

pub mod codec;
pub mod config;
pub mod coord;
pub mod facade;
pub mod hash;
pub mod logging;

pub use codec::{decode, decode_cell, encode, encode_auto, Cell, CodecError};
pub use coord::{CoordError, Coordinate};
pub use hash::{GeoHash, HashError};

/// Version of the geocell library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
