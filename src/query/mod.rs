//! Covering queries over geohash cells.
//!
//! A query turns a region into a small set of equal-precision geohash cells
//! (the search hashes) whose union covers the region. Callers look each
//! search hash up as a key prefix in a sorted store and then filter the
//! candidates exactly with [`GeoHashQuery::contains_point`].
//!
//! ```rust
//! use spatio_geohash::{BoundingBox, BoundingBoxQuery, GeoHashQuery, GeoPoint};
//!
//! let bbox = BoundingBox::new(40.70, 40.80, -74.02, -73.93)?;
//! let query = BoundingBoxQuery::new(bbox);
//!
//! for hash in query.search_hashes() {
//!     assert!(query.contains_hash(hash));
//! }
//! assert!(query.contains_point(&GeoPoint::new(40.75, -73.98)?));
//! # Ok::<(), spatio_geohash::GeoHashError>(())
//! ```

pub mod bbox;
pub mod circle;

pub use bbox::BoundingBoxQuery;
pub use circle::CircleQuery;

use crate::geohash::GeoHash;
use crate::types::GeoPoint;

/// Capabilities shared by every covering query.
pub trait GeoHashQuery {
    /// Whether the query region contains `point`. Exact, no geohash involved.
    fn contains_point(&self, point: &GeoPoint) -> bool;

    /// Whether the cell of `hash` overlaps the query region and may hold matches.
    fn contains_hash(&self, hash: &GeoHash) -> bool;

    /// Covering cells, all of one precision, in row-major order from the south-west.
    fn search_hashes(&self) -> &[GeoHash];

    /// The covered area as a WKT-style `BOX(minLon minLat,maxLon maxLat)` string.
    fn wkt_box(&self) -> String;
}
