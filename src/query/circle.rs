//! Circle query: a square approximation delegating to [`BoundingBoxQuery`].

use super::GeoHashQuery;
use super::bbox::BoundingBoxQuery;
use crate::compute::geodesy::{EAST, NORTH, SOUTH, WEST, move_in_direction};
use crate::compute::validation::validate_radius;
use crate::config::QueryConfig;
use crate::error::Result;
use crate::geohash::GeoHash;
use crate::types::{BoundingBox, GeoPoint};
use std::fmt;

/// Covers a circle (center + radius in meters) with geohash cells.
///
/// The circle is replaced once, at construction, by a box reaching one
/// radius north, south, east and west of the center. Every point within the
/// radius lies inside that box, but the corners of the box lie outside the
/// circle; use
/// [`distance_between`](crate::compute::geodesy::distance_between) for an
/// exact post-filter.
///
/// # Examples
///
/// ```rust
/// use spatio_geohash::{CircleQuery, GeoHashQuery, GeoPoint};
///
/// let center = GeoPoint::new(40.7128, -74.0060)?;
/// let query = CircleQuery::new(center, 1_000.0)?;
///
/// assert!(query.contains_point(&center));
/// assert!(!query.search_hashes().is_empty());
/// assert_eq!(query.to_string(), "Circle Query [center=(40.7128,-74.006), radius=1000m]");
/// # Ok::<(), spatio_geohash::GeoHashError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CircleQuery {
    center: GeoPoint,
    radius_meters: f64,
    query: BoundingBoxQuery,
}

impl CircleQuery {
    /// Build the covering with the default configuration.
    ///
    /// Fails for a non-finite radius. A negative radius is treated as zero.
    pub fn new(center: GeoPoint, radius_meters: f64) -> Result<Self> {
        Self::with_config(center, radius_meters, &QueryConfig::default())
    }

    /// Build the covering with an explicit configuration.
    pub fn with_config(center: GeoPoint, radius_meters: f64, config: &QueryConfig) -> Result<Self> {
        validate_radius(radius_meters)?;
        let radius_meters = if radius_meters < 0.0 {
            log::warn!(
                "negative circle radius {} treated as zero around {}",
                radius_meters,
                center
            );
            0.0
        } else {
            radius_meters
        };

        let bbox = approximate_circle(&center, radius_meters, config)?;
        let query = BoundingBoxQuery::with_config(bbox, config)?;

        Ok(Self {
            center,
            radius_meters,
            query,
        })
    }

    pub fn center(&self) -> &GeoPoint {
        &self.center
    }

    pub fn radius_meters(&self) -> f64 {
        self.radius_meters
    }

    /// The bounding-box query the circle was turned into.
    pub fn bounding_box_query(&self) -> &BoundingBoxQuery {
        &self.query
    }

    fn radius_label(&self) -> String {
        if self.radius_meters > 1000.0 {
            format!("{}km", self.radius_meters / 1000.0)
        } else {
            format!("{}m", self.radius_meters)
        }
    }
}

/// Box around the circle: the due-north and due-south points bound latitude,
/// and moving east and west by the radius from the north point, the south
/// point and the center bounds longitude.
///
/// The poleward of the north and south points gives the widest east-west
/// reach, which is what keeps the whole circle inside the box in either
/// hemisphere. A circle reaching past the antimeridian has parts on both
/// sides of the map, so the box opens to every longitude. A move over a pole
/// does the same and also extends the box to that pole.
fn approximate_circle(
    center: &GeoPoint,
    radius_meters: f64,
    config: &QueryConfig,
) -> Result<BoundingBox> {
    let metric = config.distance_metric;
    if radius_meters == 0.0 {
        return Ok(BoundingBox::from_corners(center, center));
    }

    let north = move_in_direction(center, NORTH, radius_meters, metric)?;
    let south = move_in_direction(center, SOUTH, radius_meters, metric)?;

    let over_north_pole = crossed_pole(center, &north);
    let over_south_pole = crossed_pole(center, &south);
    let max_lat = if over_north_pole { 90.0 } else { north.latitude() };
    let min_lat = if over_south_pole { -90.0 } else { south.latitude() };

    if over_north_pole || over_south_pole {
        return BoundingBox::new(min_lat, max_lat, -180.0, 180.0);
    }

    let mut east_reach = 0.0_f64;
    let mut west_reach = 0.0_f64;
    for origin in [&north, center, &south] {
        let east = move_in_direction(origin, EAST, radius_meters, metric)?;
        let west = move_in_direction(origin, WEST, radius_meters, metric)?;
        east_reach = east_reach.max((east.longitude() - center.longitude()).rem_euclid(360.0));
        west_reach = west_reach.max((center.longitude() - west.longitude()).rem_euclid(360.0));
    }

    let max_lon = center.longitude() + east_reach;
    let min_lon = center.longitude() - west_reach;
    if max_lon > 180.0 || min_lon < -180.0 {
        log::debug!(
            "circle around {} crosses the antimeridian, covering all longitudes",
            center
        );
        return BoundingBox::new(min_lat, max_lat, -180.0, 180.0);
    }

    BoundingBox::new(min_lat, max_lat, min_lon, max_lon)
}

/// A due north or south move that comes out on the opposite meridian went over a pole.
fn crossed_pole(from: &GeoPoint, to: &GeoPoint) -> bool {
    let delta = (to.longitude() - from.longitude()).abs();
    delta > 90.0 && delta < 270.0
}

impl GeoHashQuery for CircleQuery {
    fn contains_point(&self, point: &GeoPoint) -> bool {
        self.query.contains_point(point)
    }

    fn contains_hash(&self, hash: &GeoHash) -> bool {
        self.query.contains_hash(hash)
    }

    fn search_hashes(&self) -> &[GeoHash] {
        self.query.search_hashes()
    }

    fn wkt_box(&self) -> String {
        self.query.wkt_box()
    }
}

impl fmt::Display for CircleQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Circle Query [center={}, radius={}]",
            self.center,
            self.radius_label()
        )
    }
}
