use super::point::GeoPoint;
use crate::compute::validation::validate_geographic_point;
use crate::error::Result;
use geo::{Intersects, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An axis-aligned latitude/longitude rectangle.
///
/// Represents a rectangular area defined by minimum and maximum coordinates.
/// This is a wrapper around `geo::Rect` (x = longitude, y = latitude); the
/// supplied corners are normalized so that min <= max on both axes.
///
/// Boxes are values. The one mutating operation is [`expand_to_include`],
/// which callers sharing a box across threads must serialize themselves.
///
/// [`expand_to_include`]: BoundingBox::expand_to_include
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Rect<f64>", into = "Rect<f64>")]
pub struct BoundingBox {
    /// The underlying geometric rectangle
    rect: Rect,
}

impl BoundingBox {
    /// Create a bounding box from two latitudes and two longitudes, in any order.
    ///
    /// # Examples
    ///
    /// ```
    /// use spatio_geohash::BoundingBox;
    ///
    /// let bbox = BoundingBox::new(40.8, 40.7, -73.9, -74.0)?;
    /// assert_eq!(bbox.min_lat(), 40.7);
    /// assert_eq!(bbox.max_lon(), -73.9);
    /// # Ok::<(), spatio_geohash::GeoHashError>(())
    /// ```
    pub fn new(lat1: f64, lat2: f64, lon1: f64, lon2: f64) -> Result<Self> {
        let first = geo::Point::new(lon1, lat1);
        let second = geo::Point::new(lon2, lat2);
        validate_geographic_point(&first)?;
        validate_geographic_point(&second)?;
        Ok(Self {
            rect: Rect::new(first.0, second.0),
        })
    }

    /// Create a bounding box spanning two corner points.
    pub fn from_corners(p1: &GeoPoint, p2: &GeoPoint) -> Self {
        Self {
            rect: Rect::new(p1.to_geo().0, p2.to_geo().0),
        }
    }

    /// Caller guarantees all bounds are valid coordinates.
    pub(crate) fn from_bounds_unchecked(
        min_lat: f64,
        max_lat: f64,
        min_lon: f64,
        max_lon: f64,
    ) -> Self {
        Self {
            rect: Rect::new(
                geo::coord! { x: min_lon, y: min_lat },
                geo::coord! { x: max_lon, y: max_lat },
            ),
        }
    }

    /// The whole latitude/longitude domain.
    pub fn world() -> Self {
        Self::from_bounds_unchecked(-90.0, 90.0, -180.0, 180.0)
    }

    pub fn min_lat(&self) -> f64 {
        self.rect.min().y
    }

    pub fn max_lat(&self) -> f64 {
        self.rect.max().y
    }

    pub fn min_lon(&self) -> f64 {
        self.rect.min().x
    }

    pub fn max_lon(&self) -> f64 {
        self.rect.max().x
    }

    /// North-west corner.
    pub fn upper_left(&self) -> GeoPoint {
        GeoPoint::new_unchecked(self.max_lat(), self.min_lon())
    }

    /// South-east corner.
    pub fn lower_right(&self) -> GeoPoint {
        GeoPoint::new_unchecked(self.min_lat(), self.max_lon())
    }

    /// Height of the box in degrees of latitude.
    pub fn latitude_size(&self) -> f64 {
        self.max_lat() - self.min_lat()
    }

    /// Width of the box in degrees of longitude.
    pub fn longitude_size(&self) -> f64 {
        self.max_lon() - self.min_lon()
    }

    pub fn center_point(&self) -> GeoPoint {
        GeoPoint::new_unchecked(
            (self.min_lat() + self.max_lat()) / 2.0,
            (self.min_lon() + self.max_lon()) / 2.0,
        )
    }

    /// Check if a point lies inside this box. Edges are inclusive.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        point.latitude() >= self.min_lat()
            && point.longitude() >= self.min_lon()
            && point.latitude() <= self.max_lat()
            && point.longitude() <= self.max_lon()
    }

    /// Check if this box intersects another. Touching edges count.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.rect.intersects(&other.rect)
    }

    /// Grow this box in place so that it also covers `other`.
    pub fn expand_to_include(&mut self, other: &BoundingBox) {
        self.rect = Rect::new(
            geo::coord! {
                x: self.min_lon().min(other.min_lon()),
                y: self.min_lat().min(other.min_lat()),
            },
            geo::coord! {
                x: self.max_lon().max(other.max_lon()),
                y: self.max_lat().max(other.max_lat()),
            },
        );
    }

    /// Get the underlying `geo::Rect`.
    pub fn to_rect(&self) -> Rect {
        self.rect
    }
}

impl TryFrom<Rect<f64>> for BoundingBox {
    type Error = crate::error::GeoHashError;

    fn try_from(rect: Rect<f64>) -> Result<Self> {
        Self::new(rect.min().y, rect.max().y, rect.min().x, rect.max().x)
    }
}

impl From<BoundingBox> for Rect<f64> {
    fn from(bbox: BoundingBox) -> Self {
        bbox.rect
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.upper_left(), self.lower_right())
    }
}
