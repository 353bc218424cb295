//! Provides the error type shared by the orientation engine and scene loading.
//!
//! # Examples
//! ```
//! use gimbal::GimbalError;
//!
//! let err = GimbalError::InvalidEulerMode("XXY".to_string());
//! assert_eq!(format!("{}", err), "Invalid Euler mode: XXY");
//! ```

use std::io;
use thiserror::Error;

/// Errors that can occur while configuring or driving a gimbal.
#[derive(Error, Debug)]
pub enum GimbalError {
    /// A name or index that is not one of the six Euler modes.
    #[error("Invalid Euler mode: {0}")]
    InvalidEulerMode(String),

    /// A character that does not name the X, Y or Z axis.
    #[error("Invalid axis: {0:?}")]
    InvalidAxis(char),

    /// An animation rate that is negative, non-finite or above 360 deg/s.
    #[error("Invalid rate: {0} deg/s (expected 0..=360)")]
    InvalidRate(f32),

    /// A scene configuration value that is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Malformed scene JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error reading a scene file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type using [`GimbalError`].
pub type Result<T> = std::result::Result<T, GimbalError>;
