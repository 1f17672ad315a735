//! # Physical Constants
//!
//! The fixed environment of the calculation: material properties of the
//! tubing, fluid levels, and well temperatures. A `PhysicalConstants` value is
//! built once at startup (defaults or a JSON file, see [`crate::file_io`]) and
//! then passed by reference into every engine call. Nothing mutates it
//! afterwards.
//!
//! ## JSON Example
//!
//! Missing keys fall back to the defaults, so a file may override only what
//! differs for a given well:
//!
//! ```json
//! {
//!   "dynamic_level_m": 1750.0,
//!   "surface_temp_c": 35.0
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{Celsius, Fahrenheit, Meters, FEET_PER_METER};

/// Read-only configuration for the anchor calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalConstants {
    /// Poisson's ratio of the tubing steel
    pub poisson_ratio: f64,

    /// Young's modulus (psi)
    pub youngs_modulus_psi: f64,

    /// Thermal expansion coefficient (per °F)
    pub thermal_expansion: f64,

    /// Fluid gradient (psi/ft)
    pub fluid_gradient: f64,

    /// Meters-to-feet conversion factor
    pub meters_to_feet: f64,

    /// Dynamic fluid level (m)
    pub dynamic_level_m: f64,

    /// Static fluid level (ft)
    pub static_level_ft: f64,

    /// Surface temperature (°C)
    pub surface_temp_c: f64,

    /// Mean well temperature (°C)
    pub mean_temp_c: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        PhysicalConstants {
            poisson_ratio: 0.3,
            youngs_modulus_psi: 30_000_000.0,
            thermal_expansion: 0.0000069,
            fluid_gradient: 0.5,
            meters_to_feet: FEET_PER_METER,
            dynamic_level_m: 1900.0,
            static_level_ft: 700.0,
            surface_temp_c: 30.0,
            mean_temp_c: 15.0,
        }
    }
}

impl PhysicalConstants {
    /// Validate every field.
    ///
    /// All values must be finite, Poisson's ratio must lie in [0, 0.5), and
    /// the modulus, conversion factor and fluid gradient must be positive.
    pub fn validate(&self) -> CalcResult<()> {
        let fields = [
            ("poisson_ratio", self.poisson_ratio),
            ("youngs_modulus_psi", self.youngs_modulus_psi),
            ("thermal_expansion", self.thermal_expansion),
            ("fluid_gradient", self.fluid_gradient),
            ("meters_to_feet", self.meters_to_feet),
            ("dynamic_level_m", self.dynamic_level_m),
            ("static_level_ft", self.static_level_ft),
            ("surface_temp_c", self.surface_temp_c),
            ("mean_temp_c", self.mean_temp_c),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(CalcError::invalid_constants(field, format!("{} is not a finite number", value)));
            }
        }

        if !(0.0..0.5).contains(&self.poisson_ratio) {
            return Err(CalcError::invalid_constants(
                "poisson_ratio",
                format!("{} is outside [0, 0.5)", self.poisson_ratio),
            ));
        }
        for (field, value) in [
            ("youngs_modulus_psi", self.youngs_modulus_psi),
            ("meters_to_feet", self.meters_to_feet),
            ("fluid_gradient", self.fluid_gradient),
        ] {
            if value <= 0.0 {
                return Err(CalcError::invalid_constants(field, format!("{} must be positive", value)));
            }
        }
        Ok(())
    }

    /// Dynamic fluid level converted to feet
    pub fn dynamic_level_ft(&self) -> f64 {
        Meters(self.dynamic_level_m).to_feet_with(self.meters_to_feet).0
    }

    /// Surface temperature in °F
    pub fn surface_temp_f(&self) -> f64 {
        Fahrenheit::from(Celsius(self.surface_temp_c)).0
    }

    /// Mean well temperature in °F
    pub fn mean_temp_f(&self) -> f64 {
        Fahrenheit::from(Celsius(self.mean_temp_c)).0
    }
}
