//! Tests for the coordinate model

use super::*;

#[test]
fn test_new_accepts_valid_range() {
    let coord = Coordinate::new(57.64911, 10.40744).unwrap();
    assert_eq!(coord.latitude(), 57.64911);
    assert_eq!(coord.longitude(), 10.40744);
}

#[test]
fn test_new_accepts_inclusive_bounds() {
    assert!(Coordinate::new(90.0, 180.0).is_ok());
    assert!(Coordinate::new(-90.0, -180.0).is_ok());
}

#[test]
fn test_latitude_out_of_range() {
    let result = Coordinate::new(90.000001, 0.0);
    assert!(matches!(result, Err(CoordError::OutOfRange { .. })));

    let result = Coordinate::new(-91.0, 0.0);
    assert!(matches!(result, Err(CoordError::OutOfRange { .. })));
}

#[test]
fn test_longitude_out_of_range() {
    let result = Coordinate::new(0.0, 180.5);
    assert!(matches!(result, Err(CoordError::OutOfRange { .. })));

    let result = Coordinate::new(0.0, -181.0);
    assert!(matches!(result, Err(CoordError::OutOfRange { .. })));
}

#[test]
fn test_nan_is_out_of_range() {
    assert!(Coordinate::new(f64::NAN, 0.0).is_err());
    assert!(Coordinate::new(0.0, f64::NAN).is_err());
}

#[test]
fn test_parse_all_separators() {
    let expected = Coordinate::new(57.64911, 10.40744).unwrap();

    assert_eq!(Coordinate::parse("57.64911, 10.40744").unwrap(), expected);
    assert_eq!(Coordinate::parse("57.64911,10.40744").unwrap(), expected);
    assert_eq!(Coordinate::parse("57.64911 10.40744").unwrap(), expected);
}

#[test]
fn test_parse_negative_values() {
    let coord: Coordinate = "-33.8688, 151.2093".parse().unwrap();
    assert_eq!(coord.latitude(), -33.8688);
    assert_eq!(coord.longitude(), 151.2093);
}

#[test]
fn test_parse_rejects_single_value() {
    let result = Coordinate::parse("57.64911");
    assert!(matches!(
        result,
        Err(CoordError::InvalidCoordinateText { .. })
    ));
}

#[test]
fn test_parse_rejects_extra_parts() {
    // Splits into "not" and "a,location,string", neither of which is a number
    let result = Coordinate::parse("not,a,location,string");
    assert!(matches!(
        result,
        Err(CoordError::InvalidCoordinateText { .. })
    ));

    let result = Coordinate::parse("1.0,2.0,3.0");
    assert!(matches!(
        result,
        Err(CoordError::InvalidCoordinateText { .. })
    ));
}

#[test]
fn test_parse_rejects_trailing_garbage() {
    let result = Coordinate::parse("57.64911, 10.40744abc");
    assert!(matches!(
        result,
        Err(CoordError::InvalidCoordinateText { .. })
    ));

    let result = Coordinate::parse("57.6x, 10.4");
    assert!(result.is_err());
}

#[test]
fn test_parse_out_of_range() {
    let result = Coordinate::parse("91.0, 10.0");
    assert_eq!(
        result,
        Err(CoordError::OutOfRange {
            latitude: 91.0,
            longitude: 10.0
        })
    );
}

#[test]
fn test_parse_non_finite_is_out_of_range() {
    for text in ["inf, 0", "-inf, 0", "0, infinity", "NaN, 0", "0, NaN"] {
        let result = Coordinate::parse(text);
        assert!(
            matches!(result, Err(CoordError::OutOfRange { .. })),
            "{} should be out of range, got {:?}",
            text,
            result
        );
    }
}

#[test]
fn test_parse_accepts_exponent_form() {
    let coord = Coordinate::parse("1e1, 2").unwrap();
    assert_eq!(coord.latitude(), 10.0);
    assert_eq!(coord.longitude(), 2.0);
    assert_eq!(coord.to_string(), "10, 2");

    assert!(matches!(
        Coordinate::parse("1e3, 0"),
        Err(CoordError::OutOfRange { .. })
    ));
}

#[test]
fn test_render_uses_shortest_decimal_form() {
    let coord = Coordinate::new(57.64911063, 10.40743969).unwrap();
    assert_eq!(coord.to_string(), "57.64911063, 10.40743969");

    let coord = Coordinate::new(-12.5, 0.0).unwrap();
    assert_eq!(coord.to_string(), "-12.5, 0");
}

#[test]
fn test_render_parses_back() {
    let coord = Coordinate::new(-0.000123, 179.999999).unwrap();
    let reparsed = Coordinate::parse(&coord.to_string()).unwrap();
    assert_eq!(coord, reparsed);
}

#[test]
fn test_decimal_places() {
    let coord = Coordinate::new(57.64911, 10.40744).unwrap();
    assert_eq!(coord.decimal_places(), (5, 5));

    let coord = Coordinate::new(51.5, -0.1278).unwrap();
    assert_eq!(coord.decimal_places(), (1, 4));

    let coord = Coordinate::new(90.0, -180.0).unwrap();
    assert_eq!(coord.decimal_places(), (0, 0));
}

#[test]
fn test_try_from_pair() {
    let coord = Coordinate::try_from((40.7128, -74.006)).unwrap();
    assert_eq!(coord.latitude(), 40.7128);
    assert!(Coordinate::try_from((100.0, 0.0)).is_err());
}

#[test]
fn test_construction_is_idempotent() {
    let a = Coordinate::parse("40.7128, -74.006").unwrap();
    let b = Coordinate::parse("40.7128, -74.006").unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_error_messages() {
    let err = Coordinate::parse("91.0, 10.0").unwrap_err();
    assert!(err.to_string().contains("out of range"));

    let err = Coordinate::parse("hello").unwrap_err();
    assert!(err.to_string().contains("'hello'"));
}
