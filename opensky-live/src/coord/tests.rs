use super::*;
use proptest::prelude::*;

#[test]
fn test_valid_box() {
    let bbox = BoundingBox::new(55.2, 36.9, 56.1, 38.3).unwrap();
    assert_eq!(bbox.lat_min(), 55.2);
    assert_eq!(bbox.lon_min(), 36.9);
    assert_eq!(bbox.lat_max(), 56.1);
    assert_eq!(bbox.lon_max(), 38.3);
}

#[test]
fn test_degenerate_box_is_accepted() {
    assert!(BoundingBox::new(10.0, 20.0, 10.0, 20.0).is_ok());
}

#[test]
fn test_world_box_is_accepted() {
    assert!(BoundingBox::new(MIN_LAT, MIN_LON, MAX_LAT, MAX_LON).is_ok());
}

#[test]
fn test_inverted_latitude() {
    let result = BoundingBox::new(56.0, 36.0, 55.0, 38.0);
    assert_eq!(
        result,
        Err(CoordError::InvertedLatitude {
            lat_min: 56.0,
            lat_max: 55.0
        })
    );
}

#[test]
fn test_inverted_longitude() {
    let result = BoundingBox::new(55.0, 38.0, 56.0, 36.0);
    assert!(matches!(result, Err(CoordError::InvertedLongitude { .. })));
}

#[test]
fn test_out_of_range() {
    assert_eq!(
        BoundingBox::new(-91.0, 0.0, 10.0, 10.0),
        Err(CoordError::InvalidLatitude(-91.0))
    );
    assert_eq!(
        BoundingBox::new(0.0, 0.0, 10.0, 180.5),
        Err(CoordError::InvalidLongitude(180.5))
    );
}

#[test]
fn test_nan_rejected() {
    assert!(matches!(
        BoundingBox::new(f64::NAN, 0.0, 10.0, 10.0),
        Err(CoordError::NotFinite(_))
    ));
}

#[test]
fn test_query_uses_provider_names_in_order() {
    let bbox = BoundingBox::new(55.2, 36.9, 56.1, 38.3).unwrap();
    let query = bbox.to_query();
    let keys: Vec<&str> = query.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["lamin", "lomin", "lamax", "lomax"]);
    assert_eq!(query.get("lamin"), Some("55.2"));
    assert_eq!(query.get("lomax"), Some("38.3"));
}

#[test]
fn test_serializes_with_provider_names() {
    let bbox = BoundingBox::new(1.0, 2.0, 3.0, 4.0).unwrap();
    let json = serde_json::to_value(bbox).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"lamin": 1.0, "lomin": 2.0, "lamax": 3.0, "lomax": 4.0})
    );
}

proptest! {
    #[test]
    fn prop_inverted_boxes_rejected(
        a in -90.0f64..=90.0,
        b in -90.0f64..=90.0,
        lon_min in -180.0f64..=0.0,
        lon_max in 0.0f64..=180.0,
    ) {
        prop_assume!(a != b);
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        prop_assert!(BoundingBox::new(hi, lon_min, lo, lon_max).is_err());
        prop_assert!(BoundingBox::new(lo, lon_max, hi, lon_min).is_err() || lon_min == lon_max);
    }

    #[test]
    fn prop_ordered_boxes_accepted(
        a in -90.0f64..=90.0,
        b in -90.0f64..=90.0,
        c in -180.0f64..=180.0,
        d in -180.0f64..=180.0,
    ) {
        let bbox = BoundingBox::new(a.min(b), c.min(d), a.max(b), c.max(d));
        prop_assert!(bbox.is_ok());
    }
}
