//! Error types for the particle album library.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Photo list or other JSON payload could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Gesture trace or other YAML document could not be decoded
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Invalid input parameters provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Camera could not be acquired or started
    #[error("Camera error: {0}")]
    Camera(String),

    /// Landmark detector failed to deliver frames
    #[error("Landmark source error: {0}")]
    LandmarkSource(String),

    /// Smoothing filter initialization error
    #[error("Smoothing error: {0}")]
    SmoothingError(String),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
