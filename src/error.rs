//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache and its replay driver.
///
/// A cache miss is not an error: lookups return `Option`.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Construction argument out of range (e.g. zero capacity)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Replay line that does not parse as a command
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Replay input or output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
