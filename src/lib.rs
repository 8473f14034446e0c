//! # probemap: open-addressing string hash map
//!
//! A reference hash map from `String` keys to `String` values built on open
//! addressing with linear probing, tombstone-based deletion and automatic
//! doubling when the load factor reaches its threshold.
//!
//! ## Key Features
//!
//! - **Single slot array**: no auxiliary chains; every entry lives in the table
//! - **Tombstone deletion**: removal never shifts neighbours, so probe
//!   sequences stay valid, and the first tombstone on a path is reused
//! - **Predictable growth**: capacity starts at 16 (or a power-of-two hint)
//!   and doubles before an insert once `(len + tombstones) / capacity`
//!   reaches the configured maximum (0.75 by default)
//! - **Explicit absence**: `get`/`remove` return `Option`, strict accessors
//!   return [`ProbeMapError::KeyNotFound`]
//! - **Workload replay**: JSON operation traces can be replayed against a map
//!
//! ## Quick Start
//!
//! ```rust
//! use probemap::{LinearProbeMap, MapConfig};
//! # fn main() -> probemap::Result<()> {
//! let mut map = LinearProbeMap::new();
//! assert_eq!(map.insert("alpha", "1")?, None);
//! assert_eq!(map.insert("alpha", "2")?, Some("1".to_string()));
//! assert_eq!(map.get("alpha"), Some("2"));
//! assert!(map.require("beta").is_err());
//!
//! let sparse = LinearProbeMap::with_config(MapConfig::sparse())?;
//! assert_eq!(sparse.capacity(), 64);
//! # Ok(())
//! # }
//! ```
//!
//! The map is not synchronized. Wrap it in a lock to share it between threads.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod hash_map;
pub mod workload;

pub use config::{Config, MapConfig};
pub use error::{ProbeMapError, Result};
pub use hash_map::{Iter, Keys, LinearProbeMap, MapStats, Values, MIN_CAPACITY};
pub use workload::{Distribution, OpKind, Operation, ReplayReport, Workload};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library (logs the version; no other global state)
pub fn init() {
    log::debug!("Initializing probemap v{}", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_functionality() {
        init();
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_version_info() {
        assert!(VERSION.contains('.'));
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2);
    }

    #[test]
    fn test_reexports() {
        let mut map = LinearProbeMap::with_config(MapConfig::default()).unwrap();
        let workload = Workload::new("reexport", vec![Operation::insert("k", "v")]);
        let report: ReplayReport = workload.replay(&mut map).unwrap();
        assert_eq!(report.inserts, 1);
        assert_eq!(map.len(), 1);
    }
}
