//! Error handling for the probemap library
//!
//! Absence of a key is never an error: `get`, `remove` and `contains_key`
//! report it through `Option`/`bool`. The variants below cover the strict
//! accessors, resource exhaustion while growing the slot array, and the
//! configuration and workload layers around the engine.

use thiserror::Error;

/// Main error type for the probemap library
#[derive(Error, Debug)]
pub enum ProbeMapError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A strict accessor was asked for a key that is not present
    #[error("Key not found: {key:?}")]
    KeyNotFound {
        /// The missing key
        key: String,
    },

    /// Allocation of the slot array failed
    #[error("Memory allocation failed: requested {slots} slots")]
    OutOfMemory {
        /// Number of slots requested
        slots: usize,
    },

    /// Doubling the capacity would overflow `usize`
    #[error("Capacity overflow: cannot grow beyond {capacity} slots")]
    CapacityOverflow {
        /// Capacity at the time growth was attempted
        capacity: usize,
    },

    /// Malformed input data (workload documents)
    #[error("Invalid data: {message}")]
    InvalidData {
        /// Error message describing the issue
        message: String,
    },

    /// Configuration or parameter errors
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },
}

impl ProbeMapError {
    /// Create a key not found error
    pub fn key_not_found<S: Into<String>>(key: S) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    /// Create an out of memory error
    pub fn out_of_memory(slots: usize) -> Self {
        Self::OutOfMemory { slots }
    }

    /// Create a capacity overflow error
    pub fn capacity_overflow(capacity: usize) -> Self {
        Self::CapacityOverflow { capacity }
    }

    /// Create an invalid data error
    pub fn invalid_data<S: Into<String>>(message: S) -> Self {
        Self::InvalidData {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// A missing key leaves the map untouched and the caller can carry on.
    /// Exhaustion during growth means the map cannot accept more entries.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io(_) => true,
            Self::KeyNotFound { .. } => true,
            Self::OutOfMemory { .. } => false,
            Self::CapacityOverflow { .. } => false,
            Self::InvalidData { .. } => false,
            Self::Configuration { .. } => false,
        }
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::KeyNotFound { .. } => "key",
            Self::OutOfMemory { .. } => "memory",
            Self::CapacityOverflow { .. } => "capacity",
            Self::InvalidData { .. } => "data",
            Self::Configuration { .. } => "config",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ProbeMapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = ProbeMapError::key_not_found("missing");
        assert_eq!(err.category(), "key");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_error_categories() {
        let io_err = ProbeMapError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "test"));
        assert_eq!(io_err.category(), "io");
        assert!(io_err.is_recoverable());

        let memory_err = ProbeMapError::out_of_memory(1 << 40);
        assert_eq!(memory_err.category(), "memory");
        assert!(!memory_err.is_recoverable());

        let overflow_err = ProbeMapError::capacity_overflow(usize::MAX);
        assert_eq!(overflow_err.category(), "capacity");
        assert!(!overflow_err.is_recoverable());

        let data_err = ProbeMapError::invalid_data("bad json");
        assert_eq!(data_err.category(), "data");
        assert!(!data_err.is_recoverable());

        let config_err = ProbeMapError::configuration("load factor out of range");
        assert_eq!(config_err.category(), "config");
        assert!(!config_err.is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let err = ProbeMapError::key_not_found("alpha");
        let display = format!("{}", err);
        assert!(display.contains("Key not found"));
        assert!(display.contains("\"alpha\""));

        let memory_err = ProbeMapError::out_of_memory(4096);
        let memory_display = format!("{}", memory_err);
        assert!(memory_display.contains("Memory allocation failed"));
        assert!(memory_display.contains("4096"));

        let overflow_err = ProbeMapError::capacity_overflow(64);
        assert!(format!("{}", overflow_err).contains("64"));
    }

    #[test]
    fn test_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: ProbeMapError = io_error.into();

        assert_eq!(err.category(), "io");
        assert!(format!("{}", err).contains("I/O error"));
    }

    #[test]
    fn test_empty_key_is_reported() {
        // The empty string is a legitimate key and must still be named in the message
        let err = ProbeMapError::key_not_found("");
        assert!(format!("{}", err).contains("\"\""));
    }
}
