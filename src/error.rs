//! Error types for geohash encoding and covering queries.

use thiserror::Error;

/// Errors produced by geohash construction, conversion and queries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoHashError {
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Bit precision '{bits}' is out of range (valid: 0..=64)")]
    InvalidPrecision { bits: u32 },

    #[error("Character precision '{chars}' is out of range (valid: 0..=12)")]
    InvalidCharacterPrecision { chars: usize },

    #[error("Geohash with {bits} significant bits has no base32 form (must be a multiple of 5)")]
    NotBase32Aligned { bits: u8 },

    #[error("Invalid base32 character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("Invalid binary string: {0}")]
    InvalidBinaryString(String),

    #[error("Precision mismatch: {left} bits vs {right} bits")]
    PrecisionMismatch { left: u8, right: u8 },

    #[error("Ordinal {ord} is out of range for {bits} significant bits")]
    OrdinalOutOfRange { ord: i128, bits: u8 },

    #[error("Invalid radius: {0}")]
    InvalidRadius(f64),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, GeoHashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GeoHashError::NotBase32Aligned { bits: 7 };
        assert!(err.to_string().contains("multiple of 5"));

        let err = GeoHashError::InvalidCharacter {
            character: 'a',
            position: 3,
        };
        assert_eq!(err.to_string(), "Invalid base32 character 'a' at position 3");
    }
}
