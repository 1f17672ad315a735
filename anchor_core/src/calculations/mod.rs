//! # Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input, constants) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! The building blocks (`compute_f1`, `compute_stretch`, ...) are public too,
//! for callers that want a single term with their own arguments.
//!
//! ## Available Calculations
//!
//! - [`anchor`] - Tubing anchor setting tension and string stretch

pub mod anchor;

// Re-export commonly used types
pub use anchor::{calculate, AnchorInput, AnchorResult};
