//! Configuration APIs for probemap
//!
//! Every tunable of the map is explicit construction-time configuration with
//! documented defaults; there is no process-wide state. Configurations can be
//! built in code, read from environment variables, or loaded from JSON files.
//!
//! ```rust
//! use probemap::config::{Config, MapConfig};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MapConfig {
//!     initial_capacity: 1024,
//!     max_load_factor: 0.6,
//! };
//! config.validate()?;
//!
//! // PROBEMAP_MAP_INITIAL_CAPACITY / PROBEMAP_MAP_MAX_LOAD_FACTOR
//! let from_env = MapConfig::from_env()?;
//! # let _ = from_env;
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use std::env;
use std::fmt;
use std::path::Path;

pub mod map;


pub use map::{MapConfig, DEFAULT_CAPACITY, DEFAULT_MAX_LOAD_FACTOR};

/// Prefix used by [`Config::from_env`]
pub const ENV_PREFIX: &str = "PROBEMAP_";

/// Common configuration trait providing validation, environment
/// initialization and file persistence.
pub trait Config: Clone + fmt::Debug {
    /// Validate the configuration for correctness and consistency.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the configuration is valid, `Err` with details if invalid.
    fn validate(&self) -> Result<()>;

    /// Initialize configuration from environment variables.
    ///
    /// Environment variables use the format `PROBEMAP_{COMPONENT}_{FIELD}`,
    /// e.g. `PROBEMAP_MAP_MAX_LOAD_FACTOR=0.5`. Unset or unparsable variables
    /// fall back to the default value.
    fn from_env() -> Result<Self>
    where
        Self: Default,
    {
        Self::from_env_with_prefix(ENV_PREFIX)
    }

    /// Initialize configuration from environment variables with a custom prefix.
    fn from_env_with_prefix(prefix: &str) -> Result<Self>
    where
        Self: Default;

    /// Save configuration to a JSON file.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()>;

    /// Load and validate configuration from a JSON file.
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

/// Parse an environment variable, falling back to `default` when it is unset
/// or does not parse.
pub fn parse_env_var<T>(var_name: &str, default: T) -> T
where
    T: std::str::FromStr + Clone,
{
    env::var(var_name)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}
