use spatio_geohash::prelude::*;

fn point(lat: f64, lon: f64) -> GeoPoint {
    GeoPoint::new(lat, lon).expect("valid coordinates")
}

/// Test 1: Extreme coordinate values
#[test]
fn test_extreme_coordinates() {
    let corners = [
        (90.0, 180.0),
        (90.0, -180.0),
        (-90.0, 180.0),
        (-90.0, -180.0),
        (0.0, 0.0),
    ];

    for (lat, lon) in corners {
        let p = point(lat, lon);
        for bits in [0, 1, 2, 5, 31, 32, 63, 64] {
            let hash = GeoHash::with_bit_precision(&p, bits).expect("Failed to encode");
            assert!(hash.contains(&p), "({}, {}) escapes its {}-bit cell", lat, lon, bits);
        }
    }

    // The maximal corner lands in the all-ones cell
    let top = GeoHash::with_bit_precision(&point(90.0, 180.0), 64).expect("Failed to encode");
    assert_eq!(top.long_value(), u64::MAX);
    let bottom = GeoHash::with_bit_precision(&point(-90.0, -180.0), 64).expect("Failed to encode");
    assert_eq!(bottom.long_value(), 0);
}

/// Test 2: Invalid coordinates are rejected
#[test]
fn test_invalid_coordinates() {
    assert!(GeoPoint::new(90.0001, 0.0).is_err());
    assert!(GeoPoint::new(-91.0, 0.0).is_err());
    assert!(GeoPoint::new(0.0, 180.5).is_err());
    assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
    assert!(GeoPoint::new(0.0, f64::INFINITY).is_err());
    assert!(BoundingBox::new(0.0, 95.0, 0.0, 1.0).is_err());

    let err = GeoPoint::new(100.0, 0.0).unwrap_err();
    assert!(matches!(err, GeoHashError::InvalidCoordinate(_)));
}

/// Test 3: Precision limits
#[test]
fn test_precision_limits() {
    let p = point(10.0, 10.0);

    let world = GeoHash::with_bit_precision(&p, 0).expect("zero bits is the world cell");
    assert_eq!(world, GeoHash::WORLD);
    assert_eq!(world.bounding_box(), BoundingBox::world());

    assert!(matches!(
        GeoHash::with_bit_precision(&p, 65),
        Err(GeoHashError::InvalidPrecision { bits: 65 })
    ));
    assert!(matches!(
        GeoHash::with_character_precision(&p, 13),
        Err(GeoHashError::InvalidCharacterPrecision { chars: 13 })
    ));
    assert_eq!(
        GeoHash::with_character_precision(&p, 12)
            .expect("Failed to encode")
            .significant_bits(),
        60
    );
}

/// Test 4: Malformed base32 input
#[test]
fn test_malformed_base32() {
    for (input, bad, position) in [("ezs4a", 'a', 4), ("ilo", 'i', 0), ("u4p ru", ' ', 3)] {
        match GeoHash::from_base32(input) {
            Err(GeoHashError::InvalidCharacter {
                character,
                position: at,
            }) => {
                assert_eq!(character, bad);
                assert_eq!(at, position);
            }
            other => panic!("expected InvalidCharacter for {:?}, got {:?}", input, other),
        }
    }

    assert!("EZS42".parse::<GeoHash>().is_err());
    assert!("u4pruydqqvjx0".parse::<GeoHash>().is_err());
    assert_eq!("".parse::<GeoHash>().expect("empty is the world"), GeoHash::WORLD);
}

/// Test 5: Hashes that are not whole characters
#[test]
fn test_unaligned_hash() {
    let hash = GeoHash::from_binary_string("1011001").expect("Failed to parse");
    assert_eq!(hash.significant_bits(), 7);
    assert!(matches!(
        hash.to_base32(),
        Err(GeoHashError::NotBase32Aligned { bits: 7 })
    ));
    assert!(hash.character_precision().is_err());
    assert_eq!(hash.to_string(), "0b1011001");

    assert!(GeoHash::from_binary_string("10201").is_err());
    assert!(GeoHash::from_binary_string(&"1".repeat(65)).is_err());
}

/// Test 6: Neighbors at the antimeridian wrap
#[test]
fn test_antimeridian_neighbors() {
    let east_edge = GeoHash::with_character_precision(&point(0.1, 179.99), 4)
        .expect("Failed to encode");
    let wrapped = east_edge.eastern_neighbor();
    let cell = wrapped.bounding_box();
    assert_eq!(cell.min_lon(), -180.0);
    assert_eq!(wrapped.western_neighbor(), east_edge);
}

/// Test 7: Neighbors at the poles clamp
#[test]
fn test_pole_neighbors() {
    let top = GeoHash::with_character_precision(&point(89.99, 45.0), 4).expect("Failed to encode");
    assert_eq!(top.northern_neighbor(), top);
    assert_ne!(top.southern_neighbor(), top);
    assert_eq!(
        top.neighbor(Direction::NorthEast),
        top.eastern_neighbor()
    );

    let bottom =
        GeoHash::with_character_precision(&point(-89.99, 45.0), 4).expect("Failed to encode");
    assert_eq!(bottom.southern_neighbor(), bottom);
    assert_eq!(
        bottom.neighbor(Direction::SouthWest),
        bottom.western_neighbor()
    );
}

/// Test 8: Z-order stepping stops at the ends of the curve
#[test]
fn test_ordinal_bounds() {
    let first = GeoHash::from_ord(0, 10).expect("Failed to build");
    let last = GeoHash::from_ord(1023, 10).expect("Failed to build");

    assert!(first.prev().is_err());
    assert!(last.next().is_err());
    assert!(GeoHash::from_ord(1024, 10).is_err());
    assert_eq!(GeoHash::steps_between(&first, &last).expect("same precision"), 1023);
    assert_eq!(first.step(1023).expect("in range"), last);

    let other = GeoHash::from_ord(0, 11).expect("Failed to build");
    assert!(matches!(
        GeoHash::steps_between(&first, &other),
        Err(GeoHashError::PrecisionMismatch { left: 10, right: 11 })
    ));
}

/// Test 9: Degenerate query boxes still produce a covering
#[test]
fn test_degenerate_query_boxes() {
    let p = point(37.7749, -122.4194);

    let point_box = BoundingBox::from_corners(&p, &p);
    let query = BoundingBoxQuery::new(point_box);
    assert_eq!(query.search_hashes().len(), 1);
    assert_eq!(query.precision(), 64);
    assert!(query.search_hashes()[0].contains(&p));

    let line = BoundingBox::new(37.0, 37.0, -123.0, -121.0).expect("valid box");
    let query = BoundingBoxQuery::new(line);
    assert!(!query.search_hashes().is_empty());
    assert!(query.search_hashes().len() <= 32);
    assert!(query.covered_area().contains(&point(37.0, -122.0)));
}

/// Test 10: Query boxes touching the antimeridian and the poles
#[test]
fn test_query_at_world_edges() {
    let bbox = BoundingBox::new(80.0, 90.0, 170.0, 180.0).expect("valid box");
    let query = BoundingBoxQuery::new(bbox);

    assert_eq!(query.covered_area().max_lat(), 90.0);
    assert_eq!(query.covered_area().max_lon(), 180.0);
    assert!(query.contains_point(&point(90.0, 180.0)));
    assert!(
        query
            .search_hashes()
            .iter()
            .any(|h| h.contains(&point(90.0, 180.0)))
    );

    let world = BoundingBoxQuery::new(BoundingBox::world());
    assert_eq!(world.search_hashes(), &[GeoHash::WORLD]);
    assert_eq!(world.wkt_box(), "BOX(-180 -90,180 90)");
}

/// Test 11: Circles across the antimeridian and over a pole
#[test]
fn test_circle_at_world_edges() {
    let dateline = CircleQuery::new(point(-17.0, -179.99), 5_000.0).expect("Failed to build");
    let bbox = dateline.bounding_box_query().bounding_box();
    assert_eq!(bbox.min_lon(), -180.0);
    assert_eq!(bbox.max_lon(), 180.0);
    assert!(dateline.contains_point(&point(-17.0, -179.995)));

    // About 2 km west of the center, on the other side of the seam
    let across = point(-17.0, 179.99);
    assert!(
        spatio_geohash::distance_between(&point(-17.0, -179.99), &across, DistanceMetric::Geodesic)
            < 5_000.0
    );
    assert!(dateline.contains_point(&across));
    assert!(dateline.search_hashes().iter().any(|h| h.contains(&across)));

    let pole = CircleQuery::new(point(-89.98, 0.0), 10_000.0).expect("Failed to build");
    let bbox = pole.bounding_box_query().bounding_box();
    assert_eq!(bbox.min_lat(), -90.0);
    assert_eq!(bbox.longitude_size(), 360.0);
    assert!(pole.contains_point(&point(-89.99, 179.0)));
}

/// Test 12: Radius validation
#[test]
fn test_circle_radius_validation() {
    let center = point(0.0, 0.0);
    assert!(matches!(
        CircleQuery::new(center, f64::NAN),
        Err(GeoHashError::InvalidRadius(_))
    ));
    assert!(CircleQuery::new(center, f64::NEG_INFINITY).is_err());

    let clamped = CircleQuery::new(center, -1.0).expect("negative radius is clamped");
    assert_eq!(clamped.radius_meters(), 0.0);
    assert_eq!(clamped.search_hashes().len(), 1);
}
