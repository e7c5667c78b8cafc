use crate::compute::validation::validate_geographic_point;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated WGS84 geographic point.
///
/// Wraps a `geo::Point` where `x` is the longitude and `y` the latitude.
/// Construction fails for coordinates outside latitude [-90, 90] or
/// longitude [-180, 180]; every other operation in the crate assumes points
/// have passed through this check.
///
/// # Examples
///
/// ```
/// use spatio_geohash::GeoPoint;
///
/// let aalborg = GeoPoint::new(57.64911, 10.40744)?;
/// assert_eq!(aalborg.latitude(), 57.64911);
/// assert_eq!(aalborg.longitude(), 10.40744);
///
/// assert!(GeoPoint::new(91.0, 0.0).is_err());
/// # Ok::<(), spatio_geohash::GeoHashError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "geo::Point<f64>", into = "geo::Point<f64>")]
pub struct GeoPoint {
    inner: geo::Point<f64>,
}

impl GeoPoint {
    /// Create a point from latitude and longitude in degrees.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        let inner = geo::Point::new(longitude, latitude);
        validate_geographic_point(&inner)?;
        Ok(Self { inner })
    }

    /// Caller guarantees the coordinates are in range.
    #[inline]
    pub(crate) fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        debug_assert!((-90.0..=90.0).contains(&latitude));
        debug_assert!((-180.0..=180.0).contains(&longitude));
        Self {
            inner: geo::Point::new(longitude, latitude),
        }
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.inner.y()
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.inner.x()
    }

    /// Get the underlying `geo::Point` (x = longitude, y = latitude).
    #[inline]
    pub fn to_geo(&self) -> geo::Point<f64> {
        self.inner
    }
}

impl TryFrom<geo::Point<f64>> for GeoPoint {
    type Error = crate::error::GeoHashError;

    fn try_from(point: geo::Point<f64>) -> Result<Self> {
        Self::new(point.y(), point.x())
    }
}

impl From<GeoPoint> for geo::Point<f64> {
    fn from(point: GeoPoint) -> Self {
        point.inner
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.latitude(), self.longitude())
    }
}
