//! Geohash encoding with neighbor lookup and bounding-box / circle covering queries.
//!
//! ```rust
//! use spatio_geohash::{CircleQuery, GeoHash, GeoHashQuery, GeoPoint};
//!
//! let point = GeoPoint::new(57.64911, 10.40744)?;
//! let hash = GeoHash::with_character_precision(&point, 11)?;
//! assert_eq!(hash.to_base32()?, "u4pruydqqvj");
//!
//! let query = CircleQuery::new(point, 500.0)?;
//! for cell in query.search_hashes() {
//!     assert!(query.contains_hash(cell));
//! }
//! # Ok::<(), spatio_geohash::GeoHashError>(())
//! ```

pub mod compute;
pub mod config;
pub mod error;
pub mod geohash;
pub mod query;
pub mod types;

pub use crate::compute::{DistanceMetric, distance_between, move_in_direction};
pub use crate::config::QueryConfig;
pub use crate::error::{GeoHashError, Result};
pub use crate::geohash::adjacency::Direction;
pub use crate::geohash::{GeoHash, decode, encode};
pub use crate::query::{BoundingBoxQuery, CircleQuery, GeoHashQuery};
pub use crate::types::{BoundingBox, GeoPoint};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{GeoHashError, Result};

    pub use crate::{BoundingBox, GeoPoint};

    pub use crate::{Direction, GeoHash};

    pub use crate::{BoundingBoxQuery, CircleQuery, GeoHashQuery, QueryConfig};

    pub use crate::DistanceMetric;
}
