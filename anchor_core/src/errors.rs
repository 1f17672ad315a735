//! # Error Types
//!
//! Structured error types for anchor_core. Shells report these to the user
//! directly, so each variant carries enough context to say what input was
//! wrong and why.
//!
//! ## Example
//!
//! ```rust
//! use anchor_core::errors::{CalcError, CalcResult};
//!
//! fn validate_depth(depth_m: f64) -> CalcResult<()> {
//!     if depth_m <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "anchor_depth_m".to_string(),
//!             value: depth_m.to_string(),
//!             reason: "Anchor depth must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for anchor_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-numeric, out of range, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A formula would divide by zero (zero anchor depth or outer diameter)
    #[error("Division by zero in {operation}: {operand} is zero")]
    DivisionByZero { operation: String, operand: String },

    /// A physical constant failed validation
    #[error("Invalid constant '{field}': {reason}")]
    InvalidConstants { field: String, reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// The interactive panel could not drive the terminal
    #[error("Terminal error: {operation} - {reason}")]
    TerminalError { operation: String, reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a DivisionByZero error
    pub fn division_by_zero(operation: impl Into<String>, operand: impl Into<String>) -> Self {
        CalcError::DivisionByZero {
            operation: operation.into(),
            operand: operand.into(),
        }
    }

    /// Create an InvalidConstants error
    pub fn invalid_constants(field: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidConstants {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a TerminalError
    pub fn terminal_error(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::TerminalError {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// True when the failure comes from a bad anchor depth, which shells
    /// report as "invalid anchor depth".
    pub fn is_invalid_depth(&self) -> bool {
        match self {
            CalcError::DivisionByZero { operand, .. } => operand == "anchor_depth_ft",
            CalcError::InvalidInput { field, .. } => field == "anchor_depth_m",
            _ => false,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            CalcError::InvalidConstants { .. } => "INVALID_CONSTANTS",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::TerminalError { .. } => "TERMINAL_ERROR",
        }
    }
}
