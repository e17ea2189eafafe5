//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::value_objects::GeoPoint;
use proptest::prelude::*;

mod geo_point_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_create_point(
            lon in -180.0f64..=180.0f64,
            lat in -90.0f64..=90.0f64
        ) {
            let result = GeoPoint::new(lon, lat);
            prop_assert!(result.is_ok());

            let point = result.unwrap();
            prop_assert!((point.longitude() - lon).abs() < f64::EPSILON);
            prop_assert!((point.latitude() - lat).abs() < f64::EPSILON);
        }

        #[test]
        fn invalid_longitude_rejected(
            lon in prop_oneof![
                (-1000.0f64..-180.1f64),
                (180.1f64..1000.0f64)
            ],
            lat in -90.0f64..=90.0f64
        ) {
            prop_assert!(GeoPoint::new(lon, lat).is_err());
        }

        #[test]
        fn invalid_latitude_rejected(
            lon in -180.0f64..=180.0f64,
            lat in prop_oneof![
                (-1000.0f64..-90.1f64),
                (90.1f64..1000.0f64)
            ]
        ) {
            prop_assert!(GeoPoint::new(lon, lat).is_err());
        }

        #[test]
        fn distance_to_self_is_zero(
            lon in -180.0f64..=180.0f64,
            lat in -90.0f64..=90.0f64
        ) {
            if let Ok(point) = GeoPoint::new(lon, lat) {
                prop_assert!(point.distance_km(&point).abs() < 0.001);
            }
        }

        #[test]
        fn distance_is_symmetric(
            lon1 in -180.0f64..=180.0f64,
            lat1 in -90.0f64..=90.0f64,
            lon2 in -180.0f64..=180.0f64,
            lat2 in -90.0f64..=90.0f64
        ) {
            let a = GeoPoint::new(lon1, lat1).unwrap();
            let b = GeoPoint::new(lon2, lat2).unwrap();
            prop_assert!((a.distance_km(&b) - b.distance_km(&a)).abs() < 1e-6);
        }

        #[test]
        fn serialization_roundtrip(
            lon in -180.0f64..=180.0f64,
            lat in -90.0f64..=90.0f64
        ) {
            let point = GeoPoint::new(lon, lat).unwrap();
            let json = serde_json::to_string(&point).unwrap();
            let back: GeoPoint = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(point, back);
        }
    }
}
