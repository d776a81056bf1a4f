//! Configuration for tick generation
//!
//! Every generation call takes a [`GenerationConfig`] explicitly; there is no
//! process-wide default algorithm.

use serde::{Deserialize, Serialize};

use crate::error::{ScaleError, ScaleResult};

/// Default dedup threshold, in normalized position units
pub const DEFAULT_MIN_SEPARATION: f64 = 0.001;

/// Default cap on decimal digits inferred for a tick interval
pub const DEFAULT_MAX_DECIMAL_DIGITS: u32 = 9;

/// Default relative tolerance for the transform round-trip check
pub const DEFAULT_ROUND_TRIP_TOLERANCE: f64 = 1e-6;

/// Tick generation algorithm
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Floating-point interval sweep, one pass per hierarchy level
    Sweep,
    /// Fixed-point integer walk with divisibility-based leveling
    #[default]
    Modulo,
}

/// Tick generation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Which generator to run
    pub mode: GenerationMode,
    /// Ticks closer than this (normalized units) are merged
    pub min_separation: f64,
    /// Decimal digits beyond which an interval uses the rational fallback
    pub max_decimal_digits: u32,
    /// Relative round-trip error tolerated by validation
    pub round_trip_tolerance: f64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            mode: GenerationMode::default(),
            min_separation: DEFAULT_MIN_SEPARATION,
            max_decimal_digits: DEFAULT_MAX_DECIMAL_DIGITS,
            round_trip_tolerance: DEFAULT_ROUND_TRIP_TOLERANCE,
        }
    }
}

impl GenerationConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given generation mode
    pub fn with_mode(mut self, mode: GenerationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Use the given dedup threshold
    pub fn with_min_separation(mut self, min_separation: f64) -> Self {
        self.min_separation = min_separation;
        self
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> ScaleResult<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> ScaleResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> ScaleResult<Self> {
        let config: Self = serde_json::from_str(json_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> ScaleResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate configuration values
    pub fn validate(&self) -> ScaleResult<()> {
        if !(self.min_separation.is_finite() && self.min_separation > 0.0) {
            return Err(ScaleError::Config(format!(
                "min_separation must be positive, got {}",
                self.min_separation
            )));
        }

        if !(self.round_trip_tolerance.is_finite() && self.round_trip_tolerance > 0.0) {
            return Err(ScaleError::Config(format!(
                "round_trip_tolerance must be positive, got {}",
                self.round_trip_tolerance
            )));
        }

        // 10^16 still fits an i64 with room for domain values
        if !(1..=15).contains(&self.max_decimal_digits) {
            return Err(ScaleError::Config(format!(
                "max_decimal_digits must be between 1 and 15, got {}",
                self.max_decimal_digits
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GenerationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.mode, GenerationMode::Modulo);
        assert_eq!(config.min_separation, 0.001);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = GenerationConfig::new().with_mode(GenerationMode::Sweep);
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("mode = \"sweep\""));
        let parsed = GenerationConfig::from_toml(&toml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = GenerationConfig::from_toml("min_separation = 0.002\n").unwrap();
        assert_eq!(config.min_separation, 0.002);
        assert_eq!(config.mode, GenerationMode::Modulo);
        assert_eq!(config.max_decimal_digits, DEFAULT_MAX_DECIMAL_DIGITS);
    }

    #[test]
    fn test_json_serialization() {
        let config = GenerationConfig::default();
        let json = config.to_json().unwrap();
        let parsed = GenerationConfig::from_json(&json).unwrap();
        assert_eq!(config.min_separation, parsed.min_separation);
    }

    #[test]
    fn test_invalid_separation() {
        let config = GenerationConfig::new().with_min_separation(0.0);
        assert!(config.validate().is_err());
        assert!(GenerationConfig::from_toml("min_separation = -1.0\n").is_err());
    }

    #[test]
    fn test_invalid_digits() {
        let config = GenerationConfig {
            max_decimal_digits: 20,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ScaleError::Config(_))));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            GenerationConfig::from_toml("mode = 3"),
            Err(ScaleError::Toml(_))
        ));
    }
}
