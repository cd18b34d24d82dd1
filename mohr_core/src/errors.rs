//! # Error Types
//!
//! Structured error types for mohr_core. The GUI recovers from all of them
//! locally; they exist so callers (and tests) can tell what was rejected.
//!
//! ## Example
//!
//! ```rust
//! use mohr_core::errors::{MohrError, MohrResult};
//!
//! fn parse_stress(text: &str) -> MohrResult<f64> {
//!     text.trim()
//!         .parse::<f64>()
//!         .map_err(|_| MohrError::invalid_numeric_input("sigma_x", text))
//! }
//!
//! assert!(parse_stress("abc").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for mohr_core operations
pub type MohrResult<T> = Result<T, MohrError>;

/// Structured error type for stress-state operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum MohrError {
    /// Text box content is not a finite real number
    #[error("Invalid numeric input for '{field}': '{text}'")]
    InvalidNumericInput { field: String, text: String },

    /// A settings value is out of range or inconsistent
    #[error("Invalid setting '{setting}': {value} - {reason}")]
    InvalidSetting {
        setting: String,
        value: String,
        reason: String,
    },
}

impl MohrError {
    /// Create an InvalidNumericInput error
    pub fn invalid_numeric_input(field: impl Into<String>, text: impl Into<String>) -> Self {
        MohrError::InvalidNumericInput {
            field: field.into(),
            text: text.into(),
        }
    }

    /// Create an InvalidSetting error
    pub fn invalid_setting(setting: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        MohrError::InvalidSetting {
            setting: setting.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            MohrError::InvalidNumericInput { .. } => "INVALID_NUMERIC_INPUT",
            MohrError::InvalidSetting { .. } => "INVALID_SETTING",
        }
    }
}
