//! Validation for geographic coordinates, precisions and radii.

use crate::error::{GeoHashError, Result};
use geo::Point;

/// Maximum number of significant bits a geohash can carry.
pub const MAX_BITS: u8 = 64;

/// Maximum number of base32 characters that fit into [`MAX_BITS`].
pub const MAX_CHARACTERS: usize = 12;

/// Validates a 2D point has valid longitude and latitude.
///
/// Longitude: [-180.0, 180.0], Latitude: [-90.0, 90.0]
///
/// # Examples
///
/// ```
/// use spatio_geohash::compute::validation::validate_geographic_point;
/// use geo::Point;
///
/// // Valid point
/// let nyc = Point::new(-74.0060, 40.7128);
/// assert!(validate_geographic_point(&nyc).is_ok());
///
/// // Invalid longitude
/// let invalid = Point::new(200.0, 40.0);
/// assert!(validate_geographic_point(&invalid).is_err());
///
/// // Invalid latitude
/// let invalid = Point::new(-74.0, 95.0);
/// assert!(validate_geographic_point(&invalid).is_err());
/// ```
pub fn validate_geographic_point(point: &Point) -> Result<()> {
    let (x, y) = (point.x(), point.y());

    if !x.is_finite() {
        return Err(GeoHashError::InvalidCoordinate(format!(
            "Longitude must be finite, got: {}",
            x
        )));
    }

    if !y.is_finite() {
        return Err(GeoHashError::InvalidCoordinate(format!(
            "Latitude must be finite, got: {}",
            y
        )));
    }

    if !(-180.0..=180.0).contains(&x) {
        return Err(GeoHashError::InvalidCoordinate(format!(
            "Longitude out of range [-180.0, 180.0]: {}",
            x
        )));
    }

    if !(-90.0..=90.0).contains(&y) {
        return Err(GeoHashError::InvalidCoordinate(format!(
            "Latitude out of range [-90.0, 90.0]: {}",
            y
        )));
    }

    Ok(())
}

/// Validates a requested bit precision.
///
/// Zero is accepted and denotes the whole-world cell. Anything above
/// [`MAX_BITS`] is rejected rather than clamped.
pub fn validate_bit_precision(bits: u32) -> Result<u8> {
    if bits > MAX_BITS as u32 {
        return Err(GeoHashError::InvalidPrecision { bits });
    }
    Ok(bits as u8)
}

/// Validates a requested character precision and returns the matching bit count.
pub fn validate_character_precision(chars: usize) -> Result<u8> {
    if chars > MAX_CHARACTERS {
        return Err(GeoHashError::InvalidCharacterPrecision { chars });
    }
    Ok((chars * 5) as u8)
}

/// Validates a circle radius in meters.
///
/// Non-finite radii are rejected. Negative radii are valid input here; the
/// circle query decides how to treat them.
pub fn validate_radius(radius_meters: f64) -> Result<()> {
    if !radius_meters.is_finite() {
        return Err(GeoHashError::InvalidRadius(radius_meters));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_geographic_point() {
        let nyc = Point::new(-74.0060, 40.7128);
        assert!(validate_geographic_point(&nyc).is_ok());

        let tokyo = Point::new(139.6917, 35.6895);
        assert!(validate_geographic_point(&tokyo).is_ok());

        // Edge cases
        assert!(validate_geographic_point(&Point::new(180.0, 0.0)).is_ok());
        assert!(validate_geographic_point(&Point::new(-180.0, 0.0)).is_ok());
        assert!(validate_geographic_point(&Point::new(0.0, 90.0)).is_ok());
        assert!(validate_geographic_point(&Point::new(0.0, -90.0)).is_ok());
    }

    #[test]
    fn test_invalid_coordinates() {
        assert!(validate_geographic_point(&Point::new(180.1, 40.0)).is_err());
        assert!(validate_geographic_point(&Point::new(-200.0, 40.0)).is_err());
        assert!(validate_geographic_point(&Point::new(-74.0, 90.1)).is_err());
        assert!(validate_geographic_point(&Point::new(-74.0, -95.0)).is_err());
    }

    #[test]
    fn test_non_finite_coordinates() {
        assert!(validate_geographic_point(&Point::new(f64::NAN, 40.0)).is_err());
        assert!(validate_geographic_point(&Point::new(-74.0, f64::NAN)).is_err());
        assert!(validate_geographic_point(&Point::new(f64::INFINITY, 40.0)).is_err());
        assert!(validate_geographic_point(&Point::new(-74.0, f64::NEG_INFINITY)).is_err());
    }

    #[test]
    fn test_bit_precision() {
        assert_eq!(validate_bit_precision(0).unwrap(), 0);
        assert_eq!(validate_bit_precision(64).unwrap(), 64);
        assert_eq!(
            validate_bit_precision(65),
            Err(GeoHashError::InvalidPrecision { bits: 65 })
        );
    }

    #[test]
    fn test_character_precision() {
        assert_eq!(validate_character_precision(12).unwrap(), 60);
        assert_eq!(validate_character_precision(0).unwrap(), 0);
        assert!(validate_character_precision(13).is_err());
    }

    #[test]
    fn test_radius() {
        assert!(validate_radius(1000.0).is_ok());
        assert!(validate_radius(0.0).is_ok());
        assert!(validate_radius(-5.0).is_ok());
        assert!(validate_radius(f64::NAN).is_err());
        assert!(validate_radius(f64::INFINITY).is_err());
    }
}
