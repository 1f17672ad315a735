//! # anchor_core - Tubing Anchor Tension Engine
//!
//! `anchor_core` computes the tension needed to set a tubing anchor and the
//! resulting stretch of the string, from the anchor depth, the tubing size and
//! a fixed set of well constants. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use anchor_core::{calculate, AnchorInput, PhysicalConstants};
//!
//! let constants = PhysicalConstants::default();
//! let result = calculate(&AnchorInput::default(), &constants).unwrap();
//! println!("{}", result.summary);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The anchor tension formulas
//! - [`constants`] - Read-only physical constants
//! - [`tubing`] - Tubing size table (OD to ID and wall section)
//! - [`units`] - Type-safe unit wrappers
//! - [`form`] - Form parsing and fixed-precision display fields
//! - [`panel`] - Reactive recomputation state for interactive shells
//! - [`errors`] - Structured error types
//! - [`file_io`] - Constants file load/save with atomic writes

pub mod calculations;
pub mod constants;
pub mod errors;
pub mod file_io;
pub mod form;
pub mod panel;
pub mod tubing;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, AnchorInput, AnchorResult};
pub use constants::PhysicalConstants;
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_constants, save_constants};
pub use tubing::{lookup_pipe_section, PipeSection, SectionSource, TubingSize};
