//! # Form Boundary
//!
//! The "fill in a form, press Calculate" shell. Raw field text is parsed into
//! an [`AnchorInput`] here, so the engine never sees malformed numbers, and the
//! page's display fields are rendered with their fixed precisions:
//!
//! - levels, depths and temperatures: 2 decimals
//! - inner diameter and wall section: 3 decimals
//! - area and forces: 2 decimals
//! - stretch: 4 decimals
//!
//! ## Example
//!
//! ```rust
//! use anchor_core::calculations::anchor::calculate;
//! use anchor_core::constants::PhysicalConstants;
//! use anchor_core::form::{FormInput, FormView};
//!
//! let constants = PhysicalConstants::default();
//! let form = FormInput::new("1000", "3.5");
//! let input = form.parse().unwrap();
//! let result = calculate(&input, &constants).unwrap();
//!
//! let view = FormView::render(&input, &constants, Some(&result));
//! assert_eq!(view.inner_diameter_in, "2.992");
//! assert!(view.results.is_some());
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::anchor::{convert_meters_to_feet, AnchorInput, AnchorResult};
use crate::constants::PhysicalConstants;
use crate::errors::{CalcError, CalcResult};
use crate::tubing::{lookup_pipe_section, PipeSection};

/// Raw text as typed into the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    pub depth_m: String,
    pub outer_diameter_in: String,
}

impl Default for FormInput {
    fn default() -> Self {
        let defaults = AnchorInput::default();
        FormInput {
            depth_m: defaults.anchor_depth_m.to_string(),
            outer_diameter_in: defaults.outer_diameter_in.to_string(),
        }
    }
}

impl FormInput {
    pub fn new(depth_m: impl Into<String>, outer_diameter_in: impl Into<String>) -> Self {
        FormInput {
            depth_m: depth_m.into(),
            outer_diameter_in: outer_diameter_in.into(),
        }
    }

    /// Parse both fields into an engine input.
    ///
    /// Non-numeric text and non-positive depths are rejected with an
    /// [`CalcError::InvalidInput`] naming the offending field.
    pub fn parse(&self) -> CalcResult<AnchorInput> {
        let input = AnchorInput {
            anchor_depth_m: parse_field("anchor_depth_m", &self.depth_m)?,
            outer_diameter_in: parse_field("outer_diameter_in", &self.outer_diameter_in)?,
        };
        input.validate()?;
        Ok(input)
    }
}

/// Parse one numeric field, trimming whitespace.
pub fn parse_field(field: &str, raw: &str) -> CalcResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CalcError::invalid_input(field, raw, "Value is required"));
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| CalcError::invalid_input(field, raw, "Not a number"))
}

/// Formatted result rows, present after a successful calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormResults {
    pub area_in2: String,
    pub f1_lb: String,
    pub f2_lb: String,
    pub f3_lb: String,
    pub total_tension_lb: String,
    pub stretch_in: String,
    pub summary: String,
    /// Set when the wall section is unknown and F2 was taken as zero
    pub advisory: Option<String>,
}

/// Every field the form page shows, already formatted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormView {
    pub dynamic_level_m: String,
    pub dynamic_level_ft: String,
    pub anchor_depth_m: String,
    pub anchor_depth_ft: String,
    pub surface_temp_c: String,
    pub surface_temp_f: String,
    pub mean_temp_c: String,
    pub mean_temp_f: String,
    pub static_level_ft: String,
    pub outer_diameter_in: f64,
    pub inner_diameter_in: String,
    pub wall_section_in2: String,
    pub results: Option<FormResults>,
}

impl FormView {
    /// Render the page for an input, with or without a calculated result.
    ///
    /// Without a result (first visit) the derived and fixed fields are still
    /// filled in.
    pub fn render(
        input: &AnchorInput,
        constants: &PhysicalConstants,
        result: Option<&AnchorResult>,
    ) -> Self {
        let section: PipeSection = match result {
            Some(r) => r.section,
            None => lookup_pipe_section(input.outer_diameter_in),
        };

        let results = result.map(|r| FormResults {
            area_in2: format!("{:.2}", r.area_in2),
            f1_lb: format!("{:.2}", r.f1_lb),
            f2_lb: format!("{:.2}", r.f2_lb),
            f3_lb: format!("{:.2}", r.f3_lb),
            total_tension_lb: format!("{:.2}", r.total_tension_lb),
            stretch_in: format!("{:.4}", r.stretch_in),
            summary: r.summary.clone(),
            advisory: section_advisory(&r.section),
        });

        FormView {
            dynamic_level_m: format!("{:.2}", constants.dynamic_level_m),
            dynamic_level_ft: format!("{:.2}", constants.dynamic_level_ft()),
            anchor_depth_m: format!("{:.2}", input.anchor_depth_m),
            anchor_depth_ft: format!("{:.2}", convert_meters_to_feet(input.anchor_depth_m, constants)),
            surface_temp_c: format!("{:.2}", constants.surface_temp_c),
            surface_temp_f: format!("{:.2}", constants.surface_temp_f()),
            mean_temp_c: format!("{:.2}", constants.mean_temp_c),
            mean_temp_f: format!("{:.2}", constants.mean_temp_f()),
            static_level_ft: format!("{:.2}", constants.static_level_ft),
            outer_diameter_in: input.outer_diameter_in,
            inner_diameter_in: format!("{:.3}", section.inner_diameter_in),
            wall_section_in2: format!("{:.3}", section.wall_section_in2),
            results,
        }
    }

    /// Label/value rows in page order, for text output
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = vec![
            ("Dynamic level (m)", self.dynamic_level_m.clone()),
            ("Dynamic level (ft)", self.dynamic_level_ft.clone()),
            ("Anchor depth (m)", self.anchor_depth_m.clone()),
            ("Anchor depth (ft)", self.anchor_depth_ft.clone()),
            ("Surface temp (°C)", self.surface_temp_c.clone()),
            ("Surface temp (°F)", self.surface_temp_f.clone()),
            ("Mean temp (°C)", self.mean_temp_c.clone()),
            ("Mean temp (°F)", self.mean_temp_f.clone()),
            ("Outer diameter (in)", self.outer_diameter_in.to_string()),
            ("Static level (ft)", self.static_level_ft.clone()),
            ("Inner diameter (in)", self.inner_diameter_in.clone()),
            ("Wall section (in²)", self.wall_section_in2.clone()),
        ];
        if let Some(ref r) = self.results {
            rows.extend([
                ("Area (in²)", r.area_in2.clone()),
                ("F1 (lbs)", r.f1_lb.clone()),
                ("F2 (lbs)", r.f2_lb.clone()),
                ("F3 (lbs)", r.f3_lb.clone()),
                ("Total tension (lbs)", r.total_tension_lb.clone()),
                ("Stretch E (in)", r.stretch_in.clone()),
            ]);
        }
        rows
    }
}

/// Warning text for an approximate section, `None` for table sizes.
pub fn section_advisory(section: &PipeSection) -> Option<String> {
    section.is_approximate().then(|| {
        format!(
            "Wall section unknown for OD {} in; using default ID {:.3} in and F2 = 0.",
            section.outer_diameter_in, section.inner_diameter_in
        )
    })
}
