//! Compute layer: validation rules and geodesic helpers.
//!
//! This module separates the coordinate math the queries lean on from the
//! geohash bit arithmetic itself.

pub mod geodesy;
pub mod validation;

pub use geodesy::{DistanceMetric, distance_between, move_in_direction};
