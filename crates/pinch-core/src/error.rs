//! Error types for the gesture engine

use thiserror::Error;

/// Core PINCH errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PinchError {
    // Input errors
    #[error("Insufficient landmarks: expected {expected}, got {actual}")]
    InsufficientLandmarks { expected: usize, actual: usize },

    #[error("Invalid frame size: {width}x{height}")]
    InvalidFrameSize { width: u32, height: u32 },

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Wire errors
    #[error("Unknown gesture token: {0}")]
    UnknownGesture(String),
}

/// Result type for PINCH operations
pub type PinchResult<T> = Result<T, PinchError>;
