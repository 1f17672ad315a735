//! # Unit Types
//!
//! Type-safe wrappers for the handful of units the anchor calculation mixes.
//! They are plain f64 newtypes, so JSON stays clean (just numbers).
//!
//! ## Units in Play
//!
//! Well data arrives in mixed units and the formulas are US customary:
//! - Length: meters (m) from the field, feet (ft) in the formulas
//! - Temperature: degrees Celsius (°C), with Fahrenheit (°F) for display
//!
//! ## Example
//!
//! ```rust
//! use anchor_core::units::{Celsius, Fahrenheit, Meters, FEET_PER_METER};
//!
//! let depth = Meters(1000.0).to_feet_with(FEET_PER_METER);
//! assert!((depth.0 - 3280.84).abs() < 1e-9);
//!
//! let surface: Fahrenheit = Celsius(30.0).into();
//! assert_eq!(surface.0, 86.0);
//! ```

use serde::{Deserialize, Serialize};

/// Standard meters-to-feet factor (ft per m)
pub const FEET_PER_METER: f64 = 3.28084;

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

impl Meters {
    /// Convert to feet with an explicit factor (ft per m).
    ///
    /// No validation: negative lengths convert arithmetically.
    pub fn to_feet_with(self, feet_per_meter: f64) -> Feet {
        Feet(self.0 * feet_per_meter)
    }
}

// ============================================================================
// Temperature Units
// ============================================================================

/// Temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Celsius(pub f64);

/// Temperature in degrees Fahrenheit
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fahrenheit(pub f64);

impl From<Celsius> for Fahrenheit {
    fn from(c: Celsius) -> Self {
        Fahrenheit(c.0 * 9.0 / 5.0 + 32.0)
    }
}
