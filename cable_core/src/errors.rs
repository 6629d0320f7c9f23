//! # Error Types
//!
//! Structured error type for cable_core. The engine raises exactly one kind
//! of error - a malformed numeric input - and never recovers from it
//! internally. Everything else (unrecognized material text, catalogue
//! exhaustion, no size fully qualifying) is a data outcome carried in the
//! result, not an error.
//!
//! ## Example
//!
//! ```rust
//! use cable_core::errors::{SizingError, SizingResult};
//!
//! fn validate_voltage(voltage_v: f64) -> SizingResult<()> {
//!     if voltage_v <= 0.0 {
//!         return Err(SizingError::invalid_parameter(
//!             "voltage_v",
//!             voltage_v.to_string(),
//!             "Voltage must be > 0",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for cable_core operations
pub type SizingResult<T> = Result<T, SizingError>;

/// Structured error type for sizing operations.
///
/// A single variant by contract: the engine fails only on malformed numeric
/// inputs, always synchronously, and always with enough context for the
/// caller to surface a useful client error.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum SizingError {
    /// An input value is invalid (non-positive divisor, missing load, etc.)
    #[error("Invalid parameter '{field}': {value} - {reason}")]
    InvalidParameter {
        field: String,
        value: String,
        reason: String,
    },
}

impl SizingError {
    /// Create an InvalidParameter error
    pub fn invalid_parameter(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        SizingError::InvalidParameter {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            SizingError::InvalidParameter { .. } => "INVALID_PARAMETER",
        }
    }
}
