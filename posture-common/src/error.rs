//! Common error types for posture analysis

use thiserror::Error;

/// Common result type for posture operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types shared by the posture core and services
#[derive(Error, Debug)]
pub enum Error {
    /// Angle requested where the vertex coincides with one of the ray points
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// Posture context outside the supported set
    #[error("Invalid posture context: {0}")]
    InvalidContext(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
