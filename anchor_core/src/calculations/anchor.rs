//! # Anchor Tension Calculation
//!
//! Computes the tension needed to set a tubing anchor and the resulting
//! stretch of the string.
//!
//! ## Force Components
//!
//! - **F1**: dynamic fluid level acting through the Poisson effect
//! - **F2**: thermal expansion of the pipe wall between surface and mean
//!   well temperature
//! - **F3**: static fluid level acting on the annulus
//!
//! Total tension is `F1 + F2 - F3`. Stretch is the empirical
//! `0.22 × (depth_ft / 1000) × (tension / 1000)`.
//!
//! ## Units
//!
//! Anchor depth is entered in meters and converted to feet; diameters are
//! inches, areas in², forces lb, stretch inches.
//!
//! ## Example
//!
//! ```rust
//! use anchor_core::calculations::anchor::{calculate, AnchorInput};
//! use anchor_core::constants::PhysicalConstants;
//!
//! let input = AnchorInput {
//!     anchor_depth_m: 1000.0,
//!     outer_diameter_in: 2.875,
//! };
//! let result = calculate(&input, &PhysicalConstants::default()).unwrap();
//! assert!(result.total_tension_lb > 0.0);
//! println!("{}", result.summary);
//! ```

use std::f64::consts::PI;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::PhysicalConstants;
use crate::errors::{CalcError, CalcResult};
use crate::tubing::{lookup_pipe_section, PipeSection, TubingSize};
use crate::units::Meters;

/// Empirical stretch coefficient (in per kft per klb)
pub const STRETCH_COEFFICIENT: f64 = 0.22;

/// Default anchor depth offered by the shells (m)
pub const DEFAULT_ANCHOR_DEPTH_M: f64 = 1000.0;

/// Input parameters for an anchor calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "anchor_depth_m": 1000.0,
///   "outer_diameter_in": 2.875
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorInput {
    /// Anchor setting depth in meters (must be positive)
    pub anchor_depth_m: f64,

    /// Tubing outer diameter in inches. Sizes outside the table are accepted
    /// and take the approximate-section path.
    pub outer_diameter_in: f64,
}

impl Default for AnchorInput {
    fn default() -> Self {
        AnchorInput {
            anchor_depth_m: DEFAULT_ANCHOR_DEPTH_M,
            outer_diameter_in: TubingSize::default().outer_diameter_in(),
        }
    }
}

impl AnchorInput {
    /// Input for one of the standard tubing sizes
    pub fn for_tubing(anchor_depth_m: f64, size: TubingSize) -> Self {
        AnchorInput {
            anchor_depth_m,
            outer_diameter_in: size.outer_diameter_in(),
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.anchor_depth_m.is_finite() {
            return Err(CalcError::invalid_input(
                "anchor_depth_m",
                self.anchor_depth_m.to_string(),
                "Anchor depth must be a finite number",
            ));
        }
        if self.anchor_depth_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "anchor_depth_m",
                self.anchor_depth_m.to_string(),
                "Anchor depth must be positive",
            ));
        }
        if !self.outer_diameter_in.is_finite() {
            return Err(CalcError::invalid_input(
                "outer_diameter_in",
                self.outer_diameter_in.to_string(),
                "Outer diameter must be a finite number",
            ));
        }
        Ok(())
    }
}

/// Results from an anchor calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "dynamic_level_ft": 6233.596,
///   "anchor_depth_ft": 3280.84,
///   "section": {
///     "outer_diameter_in": 2.875,
///     "inner_diameter_in": 2.441,
///     "wall_section_in2": 1.812,
///     "source": "Table"
///   },
///   "area_in2": 6.49,
///   "f1_lb": 19626.64,
///   "f2_lb": 2813.13,
///   "f3_lb": 294.28,
///   "total_tension_lb": 22145.49,
///   "stretch_in": 15.9843,
///   "summary": "Fijar ancla en 1000.00 m con 22145.49 lbs y 15.9843 in de estiramiento."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorResult {
    /// Dynamic fluid level converted to feet
    pub dynamic_level_ft: f64,

    /// Anchor depth converted to feet
    pub anchor_depth_ft: f64,

    /// Inner diameter and wall section used
    pub section: PipeSection,

    /// Circular area from the outer diameter (in²)
    pub area_in2: f64,

    /// Dynamic level force component (lb)
    pub f1_lb: f64,

    /// Thermal expansion force component (lb)
    pub f2_lb: f64,

    /// Static level force component (lb)
    pub f3_lb: f64,

    /// Net tension F1 + F2 - F3 (lb); may be negative
    pub total_tension_lb: f64,

    /// Elastic stretch of the string (in)
    pub stretch_in: f64,

    /// Human-readable instruction sentence
    pub summary: String,
}

impl AnchorResult {
    /// True when the wall section was not in the table (F2 is then zero)
    pub fn section_is_approximate(&self) -> bool {
        self.section.is_approximate()
    }
}

/// Convert meters to feet using the configured factor.
pub fn convert_meters_to_feet(meters: f64, constants: &PhysicalConstants) -> f64 {
    Meters(meters).to_feet_with(constants.meters_to_feet).0
}

/// Circular area (π/4)·d² in in².
pub fn compute_area(outer_diameter_in: f64) -> f64 {
    (PI / 4.0) * outer_diameter_in.powi(2)
}

/// Poisson bracket shared by F1 and F3: (ν·level/depth) + (1 − 2ν).
fn poisson_factor(
    operation: &str,
    level_ft: f64,
    anchor_depth_ft: f64,
    constants: &PhysicalConstants,
) -> CalcResult<f64> {
    if anchor_depth_ft == 0.0 {
        return Err(CalcError::division_by_zero(operation, "anchor_depth_ft"));
    }
    let nu = constants.poisson_ratio;
    Ok((nu * level_ft / anchor_depth_ft) + (1.0 - 2.0 * nu))
}

/// Dynamic fluid level force component F1 (lb).
///
/// `F1 = area × dyn_ft × gradient × ((ν × dyn_ft / depth_ft) + (1 − 2ν))`
///
/// Fails with [`CalcError::DivisionByZero`] when `anchor_depth_ft` is zero.
pub fn compute_f1(
    area_in2: f64,
    dynamic_level_ft: f64,
    anchor_depth_ft: f64,
    constants: &PhysicalConstants,
) -> CalcResult<f64> {
    let factor = poisson_factor("F1", dynamic_level_ft, anchor_depth_ft, constants)?;
    Ok(area_in2 * dynamic_level_ft * constants.fluid_gradient * factor)
}

/// Thermal expansion force component F2 (lb).
///
/// `F2 = E × α × ((T_surface − T_mean) / 2) × wall_section`
///
/// A zero (unknown) wall section gives exactly zero.
pub fn compute_f2(wall_section_in2: f64, constants: &PhysicalConstants) -> f64 {
    let delta_t = (constants.surface_temp_c - constants.mean_temp_c) / 2.0;
    constants.youngs_modulus_psi * constants.thermal_expansion * delta_t * wall_section_in2
}

/// Static fluid level force component F3 (lb).
///
/// `F3 = area × gradient × ((od² − id²) / od²) × static_ft × ((ν × static_ft / depth_ft) + (1 − 2ν))`
///
/// An inner diameter larger than the outer one makes the annulus ratio
/// negative; that value is returned as is.
pub fn compute_f3(
    area_in2: f64,
    outer_diameter_in: f64,
    inner_diameter_in: f64,
    static_level_ft: f64,
    anchor_depth_ft: f64,
    constants: &PhysicalConstants,
) -> CalcResult<f64> {
    let od2 = outer_diameter_in.powi(2);
    if od2 == 0.0 {
        return Err(CalcError::division_by_zero("F3", "outer_diameter_in"));
    }
    let annulus_ratio = (od2 - inner_diameter_in.powi(2)) / od2;
    let factor = poisson_factor("F3", static_level_ft, anchor_depth_ft, constants)?;
    Ok(area_in2 * constants.fluid_gradient * annulus_ratio * static_level_ft * factor)
}

/// Net tension F1 + F2 − F3 (lb). Not bounded; negative means no net pull.
pub fn compute_total_tension(f1_lb: f64, f2_lb: f64, f3_lb: f64) -> f64 {
    f1_lb + f2_lb - f3_lb
}

/// Elastic stretch (in) for a given depth and tension.
pub fn compute_stretch(anchor_depth_ft: f64, total_tension_lb: f64) -> f64 {
    STRETCH_COEFFICIENT * (anchor_depth_ft / 1000.0) * (total_tension_lb / 1000.0)
}

/// The instruction sentence shown under the results.
///
/// Depth and tension get 2 decimals, stretch 4, always with '.' as separator.
pub fn format_summary(anchor_depth_m: f64, total_tension_lb: f64, stretch_in: f64) -> String {
    format!(
        "Fijar ancla en {:.2} m con {:.2} lbs y {:.4} in de estiramiento.",
        anchor_depth_m, total_tension_lb, stretch_in
    )
}

/// Run the full anchor calculation.
///
/// # Returns
///
/// * `Ok(AnchorResult)` - Every derived value, recomputed from scratch
/// * `Err(CalcError)` - Invalid input or constants, or a zero divisor
pub fn calculate(input: &AnchorInput, constants: &PhysicalConstants) -> CalcResult<AnchorResult> {
    input.validate()?;
    constants.validate()?;

    let dynamic_level_ft = convert_meters_to_feet(constants.dynamic_level_m, constants);
    let anchor_depth_ft = convert_meters_to_feet(input.anchor_depth_m, constants);

    let od = input.outer_diameter_in;
    let section = lookup_pipe_section(od);
    let area_in2 = compute_area(od);

    let f1_lb = compute_f1(area_in2, dynamic_level_ft, anchor_depth_ft, constants)?;
    let f2_lb = compute_f2(section.wall_section_in2, constants);
    let f3_lb = compute_f3(
        area_in2,
        od,
        section.inner_diameter_in,
        constants.static_level_ft,
        anchor_depth_ft,
        constants,
    )?;

    let total_tension_lb = compute_total_tension(f1_lb, f2_lb, f3_lb);
    let stretch_in = compute_stretch(anchor_depth_ft, total_tension_lb);

    debug!(
        "anchor at {} m, OD {} in: F1={:.2} F2={:.2} F3={:.2} TT={:.2} E={:.4}",
        input.anchor_depth_m, od, f1_lb, f2_lb, f3_lb, total_tension_lb, stretch_in
    );

    Ok(AnchorResult {
        dynamic_level_ft,
        anchor_depth_ft,
        section,
        area_in2,
        f1_lb,
        f2_lb,
        f3_lb,
        total_tension_lb,
        stretch_in,
        summary: format_summary(input.anchor_depth_m, total_tension_lb, stretch_in),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constants() -> PhysicalConstants {
        PhysicalConstants::default()
    }

    fn rel_close(actual: f64, expected: f64) -> bool {
        ((actual - expected) / expected).abs() < 1e-6
    }

    #[test]
    fn test_meters_to_feet_inverse() {
        let c = constants();
        for m in [0.0, 1.0, 700.0, 1000.0, 1900.0, 12345.678] {
            let ft = convert_meters_to_feet(m, &c);
            assert!((ft / 3.28084 - m).abs() <= 1e-9 * m.abs().max(1.0));
        }
        assert!((convert_meters_to_feet(-5.0, &c) + 16.4042).abs() < 1e-9);
    }

    #[test]
    fn test_area() {
        assert_eq!(compute_area(0.0), 0.0);
        assert!((compute_area(2.0) - PI).abs() < 1e-12);
        // (π/4) × 2.875² = 6.4918...
        assert!((compute_area(2.875) - 6.491806694332033).abs() < 1e-12);
    }

    #[test]
    fn test_total_tension_exact() {
        assert_eq!(compute_total_tension(100.0, 25.5, 30.25), 100.0 + 25.5 - 30.25);
        assert_eq!(compute_total_tension(-1.0, 0.0, 4.0), -5.0);
    }

    #[test]
    fn test_zero_depth_is_division_by_zero() {
        let c = constants();
        let err = compute_f1(6.49, 6233.596, 0.0, &c).unwrap_err();
        assert_eq!(err, CalcError::division_by_zero("F1", "anchor_depth_ft"));

        let err = compute_f3(6.49, 2.875, 2.441, 700.0, 0.0, &c).unwrap_err();
        assert_eq!(err.error_code(), "DIVISION_BY_ZERO");
        assert!(err.is_invalid_depth());
    }

    #[test]
    fn test_zero_outer_diameter_in_f3() {
        let err = compute_f3(0.0, 0.0, 0.0, 700.0, 3280.84, &constants()).unwrap_err();
        assert_eq!(err, CalcError::division_by_zero("F3", "outer_diameter_in"));
    }

    #[test]
    fn test_f3_negative_annulus_is_reproduced() {
        let c = constants();
        let area = compute_area(2.0);
        let f3 = compute_f3(area, 2.0, 3.0, 700.0, 3280.84, &c).unwrap();
        assert!(f3 < 0.0);
    }

    #[test]
    fn test_f2_zero_section() {
        let hot = PhysicalConstants {
            surface_temp_c: 90.0,
            ..constants()
        };
        assert_eq!(compute_f2(0.0, &hot), 0.0);
        // 3e7 × 6.9e-6 × 7.5 × 1.812
        assert!((compute_f2(1.812, &constants()) - 2813.13).abs() < 1e-6);
    }

    #[test]
    fn test_stretch_negative_tension() {
        let e = compute_stretch(3280.84, -1000.0);
        assert!((e + 0.22 * 3.28084).abs() < 1e-12);
    }

    #[test]
    fn test_scenario_small_tubing() {
        let input = AnchorInput::default();
        let result = calculate(&input, &constants()).unwrap();

        assert!((result.dynamic_level_ft - 6233.596).abs() < 1e-9);
        assert!((result.anchor_depth_ft - 3280.84).abs() < 1e-9);
        assert_eq!(result.section.inner_diameter_in, 2.441);
        assert_eq!(result.section.wall_section_in2, 1.812);
        assert!(rel_close(result.area_in2, 6.491806694332033));
        assert!(rel_close(result.f1_lb, 19626.640617642268));
        assert!(rel_close(result.f2_lb, 2813.13));
        assert!(rel_close(result.f3_lb, 294.278202007281));
        assert!(rel_close(result.total_tension_lb, 22145.492415634988));
        assert!(rel_close(result.stretch_in, 15.984279814120615));
        assert!(!result.section_is_approximate());
        assert_eq!(
            result.summary,
            "Fijar ancla en 1000.00 m con 22145.49 lbs y 15.9843 in de estiramiento."
        );
    }

    #[test]
    fn test_scenario_large_tubing() {
        let c = constants();
        let small = calculate(&AnchorInput::for_tubing(1000.0, TubingSize::Od2_875), &c).unwrap();
        let large = calculate(&AnchorInput::for_tubing(1000.0, TubingSize::Od3_5), &c).unwrap();

        assert_eq!(large.section.inner_diameter_in, 2.992);
        assert_eq!(large.section.wall_section_in2, 2.59);
        assert!(rel_close(large.f1_lb, 29087.497626146574));
        assert!(rel_close(large.f2_lb, 4020.975));
        assert!(rel_close(large.f3_lb, 420.6545739733123));
        assert!(rel_close(large.total_tension_lb, 32687.818052173265));

        // F1 scales with area alone when depth is held fixed
        let f1_ratio = large.f1_lb / small.f1_lb;
        let area_ratio = large.area_in2 / small.area_in2;
        assert!((f1_ratio - area_ratio).abs() < 1e-12);
        assert_ne!(large.f2_lb, small.f2_lb);
        assert_ne!(large.f3_lb, small.f3_lb);
    }

    #[test]
    fn test_scenario_unknown_tubing() {
        let hot = PhysicalConstants {
            surface_temp_c: 80.0,
            mean_temp_c: 10.0,
            ..constants()
        };
        let input = AnchorInput {
            anchor_depth_m: 1000.0,
            outer_diameter_in: 5.0,
        };
        for c in [constants(), hot] {
            let result = calculate(&input, &c).unwrap();
            assert!((result.section.inner_diameter_in - 4.25).abs() < 1e-12);
            assert_eq!(result.section.wall_section_in2, 0.0);
            assert_eq!(result.f2_lb, 0.0);
            assert!(result.section_is_approximate());
        }
        let result = calculate(&input, &constants()).unwrap();
        assert!(rel_close(result.total_tension_lb, 58477.35596011542));
    }

    #[test]
    fn test_summary_precision() {
        let summary = format_summary(1000.0, 12345.67, 0.1234);
        assert_eq!(summary, "Fijar ancla en 1000.00 m con 12345.67 lbs y 0.1234 in de estiramiento.");

        let summary = format_summary(12.5, 3.14159, 2.0);
        assert!(summary.contains("12.50 m"));
        assert!(summary.contains("3.14 lbs"));
        assert!(summary.contains("2.0000 in"));
    }

    #[test]
    fn test_invalid_depth_rejected() {
        let c = constants();
        for depth in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            let input = AnchorInput {
                anchor_depth_m: depth,
                outer_diameter_in: 2.875,
            };
            let err = calculate(&input, &c).unwrap_err();
            assert!(err.is_invalid_depth(), "depth {} gave {:?}", depth, err);
        }
    }

    #[test]
    fn test_invalid_constants_rejected() {
        let bad = PhysicalConstants {
            meters_to_feet: 0.0,
            ..constants()
        };
        let err = calculate(&AnchorInput::default(), &bad).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONSTANTS");
    }

    #[test]
    fn test_recalculation_is_deterministic() {
        let c = constants();
        let input = AnchorInput::for_tubing(1523.7, TubingSize::Od3_5);
        assert_eq!(calculate(&input, &c).unwrap(), calculate(&input, &c).unwrap());
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate(&AnchorInput::default(), &constants()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("\"source\": \"Table\""));
        let roundtrip: AnchorResult = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.summary, result.summary);
    }
}
