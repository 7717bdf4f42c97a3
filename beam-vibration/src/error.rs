//! Error types for the beam vibration engine

use thiserror::Error;

/// Main error type for beam vibration operations
#[derive(Error, Debug)]
pub enum VibrationError {
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid material: {0}")]
    InvalidMaterial(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown beam type '{0}'")]
    UnknownBeamType(String),

    #[error("Root search for mode {mode} did not converge (|f| = {residual:e})")]
    ConvergenceFailed { mode: usize, residual: f64 },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for beam vibration operations
pub type VibrationResult<T> = Result<T, VibrationError>;
