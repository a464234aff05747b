//! Integration tests for the public codec API.
//!
//! Exercises the crate the way a downstream user would: parse text,
//! encode, decode, and persist codec settings through the config file.

use geocell::config::{ConfigFile, ConfigKey, PrecisionSetting};
use geocell::{decode, encode, encode_auto, facade, CodecError, Coordinate, GeoHash};
use tempfile::TempDir;

#[test]
fn test_text_to_hash_and_back() {
    let coord: Coordinate = "57.64911, 10.40744".parse().expect("valid coordinate");
    let hash = encode(&coord, 11).expect("valid precision");
    assert_eq!(hash.as_str(), "u4pruydqqvj");

    let decoded = decode(&hash);
    assert_eq!(decoded.to_string(), "57.64911063, 10.40743969");
}

#[test]
fn test_auto_precision_vectors() {
    let cases = [
        ((57.64911, 10.40744), "u4pruydqqvj"),
        ((-33.8688, 151.2093), "r3gx2f77b"),
        ((51.5, -0.1), "gcpuv"),
        ((0.0, 0.0), "7zzz"),
    ];

    for ((lat, lon), expected) in cases {
        let coord = Coordinate::new(lat, lon).expect("in range");
        let hash = encode_auto(&coord).expect("attainable");
        assert_eq!(hash.as_str(), expected, "auto precision for {}", coord);
    }
}

#[test]
fn test_auto_precision_unattainable() {
    let coord = Coordinate::new(12.3456789, 1.2345678).expect("in range");
    assert!(matches!(
        encode_auto(&coord),
        Err(CodecError::PrecisionUnattainable { .. })
    ));
}

#[test]
fn test_facade_string_surface() {
    assert_eq!(facade::encode("57.64911 10.40744", Some(5)).unwrap(), "u4pru");
    assert_eq!(facade::decode("ezs42").unwrap(), "42.605, -5.603");
    assert!(facade::decode("EZS42").is_err());
    assert!(facade::encode("91,0", None).is_err());
}

#[test]
fn test_hash_validation_before_decode() {
    assert!("".parse::<GeoHash>().is_err());
    assert!("0123456789bcd".parse::<GeoHash>().is_err());
    assert!("ezs4a".parse::<GeoHash>().is_err());
}

#[test]
fn test_configured_precision_round_trips_through_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.ini");

    let mut config = ConfigFile::default();
    ConfigKey::CodecPrecision.set(&mut config, "7").unwrap();
    config.save_to(&path).unwrap();

    let loaded = ConfigFile::load_from(&path).unwrap();
    assert_eq!(loaded.codec.precision, PrecisionSetting::Fixed(7));

    let coord = Coordinate::new(57.64911, 10.40744).unwrap();
    let precision = loaded.codec.precision.fixed().unwrap();
    assert_eq!(encode(&coord, precision).unwrap().as_str(), "u4pruyd");
}
