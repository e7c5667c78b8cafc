//! Great-circle helpers leveraging the geo crate.
//!
//! The circle query only needs one primitive from here: moving a point by a
//! bearing and a distance. `distance_between` is provided so callers can
//! apply the exact post-filter a square approximation requires.

use crate::error::Result;
use crate::types::GeoPoint;
use geo::{Destination, Distance, Geodesic, Haversine, Rhumb};
use serde::{Deserialize, Serialize};

/// Earth model used for distance and destination calculations.
///
/// - **Geodesic**: ellipsoidal WGS84 model (Karney 2013), the most accurate
/// - **Haversine**: spherical earth, faster and close enough for most queries
/// - **Rhumb**: constant-bearing lines (loxodromes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    #[default]
    Geodesic,
    Haversine,
    Rhumb,
}

/// Bearing in degrees pointing due north.
pub const NORTH: f64 = 0.0;
/// Bearing in degrees pointing due east.
pub const EAST: f64 = 90.0;
/// Bearing in degrees pointing due south.
pub const SOUTH: f64 = 180.0;
/// Bearing in degrees pointing due west.
pub const WEST: f64 = 270.0;

/// Calculate the distance between two points in meters.
///
/// # Examples
///
/// ```rust
/// use spatio_geohash::GeoPoint;
/// use spatio_geohash::compute::geodesy::{distance_between, DistanceMetric};
///
/// let nyc = GeoPoint::new(40.7128, -74.0060)?;
/// let la = GeoPoint::new(34.0522, -118.2437)?;
///
/// let dist = distance_between(&nyc, &la, DistanceMetric::Geodesic);
/// assert!(dist > 3_900_000.0); // ~3,944 km
/// # Ok::<(), spatio_geohash::GeoHashError>(())
/// ```
pub fn distance_between(a: &GeoPoint, b: &GeoPoint, metric: DistanceMetric) -> f64 {
    let (a, b) = (a.to_geo(), b.to_geo());
    match metric {
        DistanceMetric::Geodesic => Geodesic.distance(a, b),
        DistanceMetric::Haversine => Haversine.distance(a, b),
        DistanceMetric::Rhumb => Rhumb.distance(a, b),
    }
}

/// Move `point` by `distance_meters` along `bearing_degrees`.
///
/// Bearings follow the compass: 0 = north, 90 = east, 180 = south, 270 = west.
/// The destination longitude is wrapped into [-180, 180] and the latitude
/// clamped into [-90, 90].
///
/// # Examples
///
/// ```rust
/// use spatio_geohash::GeoPoint;
/// use spatio_geohash::compute::geodesy::{move_in_direction, DistanceMetric, NORTH};
///
/// let start = GeoPoint::new(45.0, 7.0)?;
/// let moved = move_in_direction(&start, NORTH, 10_000.0, DistanceMetric::Geodesic)?;
/// assert!(moved.latitude() > start.latitude());
/// assert!((moved.longitude() - start.longitude()).abs() < 1e-7);
/// # Ok::<(), spatio_geohash::GeoHashError>(())
/// ```
pub fn move_in_direction(
    point: &GeoPoint,
    bearing_degrees: f64,
    distance_meters: f64,
    metric: DistanceMetric,
) -> Result<GeoPoint> {
    let origin = point.to_geo();
    let destination = match metric {
        DistanceMetric::Geodesic => Geodesic.destination(origin, bearing_degrees, distance_meters),
        DistanceMetric::Haversine => {
            Haversine.destination(origin, bearing_degrees, distance_meters)
        }
        DistanceMetric::Rhumb => Rhumb.destination(origin, bearing_degrees, distance_meters),
    };

    GeoPoint::new(
        destination.y().clamp(-90.0, 90.0),
        normalize_longitude(destination.x()),
    )
}

/// Wrap a longitude into [-180, 180].
pub fn normalize_longitude(longitude: f64) -> f64 {
    if (-180.0..=180.0).contains(&longitude) {
        return longitude;
    }
    let wrapped = (longitude + 180.0).rem_euclid(360.0) - 180.0;
    // rem_euclid maps +180 onto -180; keep the sign of the input at the seam
    if wrapped == -180.0 && longitude > 0.0 {
        180.0
    } else {
        wrapped
    }
}
