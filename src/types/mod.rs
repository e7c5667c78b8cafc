//! Geometric value types: validated points and normalized bounding boxes.
//!
//! Both are thin wrappers over `geo` primitives (`geo::Point`, `geo::Rect`)
//! using the latitude/longitude vocabulary of geohash code.

pub mod bbox;
pub mod point;

pub use bbox::BoundingBox;
pub use point::GeoPoint;
