//! Query configuration
//!
//! Serializable settings for covering queries, loadable from JSON or (with
//! the `toml` feature) TOML.
use crate::compute::geodesy::DistanceMetric;
use crate::compute::validation::MAX_BITS;
use crate::error::{GeoHashError, Result};
use serde::{Deserialize, Serialize};

/// Settings shared by bounding-box and circle queries.
///
/// # Example
///
/// ```rust
/// use spatio_geohash::{DistanceMetric, QueryConfig};
///
/// // Create default config
/// let config = QueryConfig::default();
/// assert_eq!(config.max_precision_bits, 64);
///
/// // Load from JSON
/// let json = r#"{
///     "distance_metric": "haversine",
///     "max_precision_bits": 40
/// }"#;
/// let config = QueryConfig::from_json(json).unwrap();
/// assert_eq!(config.distance_metric, DistanceMetric::Haversine);
/// assert_eq!(config.max_search_hashes, 32);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Earth model the circle query uses to turn a radius into a box
    #[serde(default)]
    pub distance_metric: DistanceMetric,

    /// Finest precision a search hash may have (0-64, default: 64).
    /// Set this to the precision of the keys stored in the backing index.
    #[serde(default = "QueryConfig::default_max_precision_bits")]
    pub max_precision_bits: u8,

    /// Largest covering set to produce before coarsening the precision (default: 32)
    #[serde(default = "QueryConfig::default_max_search_hashes")]
    pub max_search_hashes: usize,
}

impl QueryConfig {
    const fn default_max_precision_bits() -> u8 {
        MAX_BITS
    }

    const fn default_max_search_hashes() -> usize {
        32
    }

    pub fn with_distance_metric(mut self, metric: DistanceMetric) -> Self {
        self.distance_metric = metric;
        self
    }

    pub fn with_max_precision_bits(mut self, bits: u8) -> Self {
        self.max_precision_bits = bits;
        self
    }

    pub fn with_max_search_hashes(mut self, count: usize) -> Self {
        self.max_search_hashes = count;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.max_precision_bits > MAX_BITS {
            return Err(GeoHashError::InvalidConfig(format!(
                "max_precision_bits must be at most {}, got {}",
                MAX_BITS, self.max_precision_bits
            )));
        }

        if self.max_search_hashes == 0 {
            return Err(GeoHashError::InvalidConfig(
                "max_search_hashes must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Load configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: QueryConfig = serde_json::from_str(json)
            .map_err(|e| GeoHashError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration as JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| GeoHashError::InvalidConfig(e.to_string()))
    }

    /// Load configuration from TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: QueryConfig =
            toml::from_str(toml_str).map_err(|e| GeoHashError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration as TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| GeoHashError::InvalidConfig(e.to_string()))
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            distance_metric: DistanceMetric::default(),
            max_precision_bits: Self::default_max_precision_bits(),
            max_search_hashes: Self::default_max_search_hashes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = QueryConfig::default();
        assert_eq!(config.distance_metric, DistanceMetric::Geodesic);
        assert_eq!(config.max_precision_bits, 64);
        assert_eq!(config.max_search_hashes, 32);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_json_round_trip() {
        let config = QueryConfig::default()
            .with_distance_metric(DistanceMetric::Rhumb)
            .with_max_precision_bits(35)
            .with_max_search_hashes(9);
        let json = config.to_json().unwrap();
        assert!(json.contains("\"rhumb\""));
        assert_eq!(QueryConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        assert_eq!(QueryConfig::from_json("{}").unwrap(), QueryConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(QueryConfig::from_json(r#"{"max_precision_bits": 65}"#).is_err());
        assert!(QueryConfig::from_json(r#"{"max_search_hashes": 0}"#).is_err());
        assert!(QueryConfig::from_json(r#"{"distance_metric": "euclidean"}"#).is_err());
        assert!(QueryConfig::from_json("not json").is_err());
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_toml_round_trip() {
        let config = QueryConfig::default().with_max_precision_bits(40);
        let toml_str = config.to_toml().unwrap();
        assert_eq!(QueryConfig::from_toml(&toml_str).unwrap(), config);

        assert!(QueryConfig::from_toml("max_search_hashes = 0").is_err());
    }
}
