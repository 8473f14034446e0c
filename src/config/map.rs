//! Construction-time configuration for [`LinearProbeMap`](crate::hash_map::LinearProbeMap).

use super::{parse_env_var, Config};
use crate::error::{ProbeMapError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default number of slots allocated by a new map
pub const DEFAULT_CAPACITY: usize = 16;

/// Default resize threshold for `(size + tombstones) / capacity`
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.75;

/// Configuration for a linear probing map
///
/// `initial_capacity` is a hint: the map floors it at
/// [`MIN_CAPACITY`](crate::hash_map::MIN_CAPACITY) and rounds it up to a
/// power of two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Requested number of slots at construction
    pub initial_capacity: usize,
    /// Load factor at which an insert grows the slot array first
    pub max_load_factor: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
        }
    }
}

impl MapConfig {
    /// Config with the given capacity hint and the default load factor
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            ..Self::default()
        }
    }

    /// Denser table: fewer resizes, longer probe sequences
    pub fn compact() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            max_load_factor: 0.9,
        }
    }

    /// Sparser table: more memory, shorter probe sequences
    pub fn sparse() -> Self {
        Self {
            initial_capacity: 64,
            max_load_factor: 0.5,
        }
    }
}

impl Config for MapConfig {
    fn validate(&self) -> Result<()> {
        if !self.max_load_factor.is_finite()
            || self.max_load_factor <= 0.0
            || self.max_load_factor >= 1.0
        {
            return Err(ProbeMapError::configuration(format!(
                "max_load_factor must be in (0.0, 1.0), got {}",
                self.max_load_factor
            )));
        }
        Ok(())
    }

    fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let mut config = Self::default();
        config.initial_capacity = parse_env_var(
            &format!("{}MAP_INITIAL_CAPACITY", prefix),
            config.initial_capacity,
        );
        config.max_load_factor = parse_env_var(
            &format!("{}MAP_MAX_LOAD_FACTOR", prefix),
            config.max_load_factor,
        );
        config.validate()?;
        Ok(config)
    }

    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self).map_err(|e| {
            ProbeMapError::configuration(format!("Failed to serialize map config: {}", e))
        })?;
        std::fs::write(path, serialized).map_err(|e| {
            ProbeMapError::configuration(format!("Failed to write map config file: {}", e))
        })?;
        Ok(())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ProbeMapError::configuration(format!("Failed to read map config file: {}", e))
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            ProbeMapError::configuration(format!("Failed to parse map config file: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = MapConfig::default();
        assert_eq!(config.initial_capacity, 16);
        assert_eq!(config.max_load_factor, 0.75);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets_valid() {
        assert!(MapConfig::compact().validate().is_ok());
        assert!(MapConfig::sparse().validate().is_ok());
        assert!(MapConfig::compact().max_load_factor > MapConfig::default().max_load_factor);
        assert!(MapConfig::sparse().max_load_factor < MapConfig::default().max_load_factor);
    }

    #[test]
    fn test_invalid_load_factors() {
        for lf in [0.0, 1.0, 1.5, -0.25, f64::NAN, f64::INFINITY] {
            let config = MapConfig {
                max_load_factor: lf,
                ..MapConfig::default()
            };
            let err = config.validate().unwrap_err();
            assert_eq!(err.category(), "config", "load factor {} accepted", lf);
        }
    }

    #[test]
    fn test_any_capacity_hint_accepted() {
        for hint in [0, 1, 15, 16, 1000] {
            assert!(MapConfig::with_capacity(hint).validate().is_ok(), "hint {}", hint);
        }
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: MapConfig = serde_json::from_str(r#"{"max_load_factor": 0.6}"#).unwrap();
        assert_eq!(config.initial_capacity, DEFAULT_CAPACITY);
        assert_eq!(config.max_load_factor, 0.6);
    }
}
