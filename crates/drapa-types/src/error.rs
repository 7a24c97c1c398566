//! Error types for the drapa engine.
//!
//! All crates return `DrapaResult<T>` from fallible operations.
//! The simulation core itself is infallible once constructed: degenerate
//! springs and triangles are guarded numerically, and out-of-range
//! interaction indices are silent no-ops rather than errors.

use thiserror::Error;

/// Unified error type for the drapa engine.
#[derive(Debug, Error)]
pub enum DrapaError {
    /// Grid construction parameters are out of range.
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A scenario file is malformed or internally inconsistent.
    #[error("Invalid scenario: {0}")]
    InvalidScenario(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, DrapaError>`.
pub type DrapaResult<T> = Result<T, DrapaError>;
