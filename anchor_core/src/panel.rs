//! # Reactive Panel State
//!
//! State behind the interactive panel. Anchor depth and outer diameter are the
//! only sources; every derived value (section, area, F1..F3, tension, stretch)
//! is recomputed in one pass whenever either source changes. Nothing derived
//! is ever patched in place, so the panel can't show a stale mix of old and
//! new values.

use crate::calculations::anchor::{calculate, AnchorInput, AnchorResult};
use crate::constants::PhysicalConstants;
use crate::errors::{CalcError, CalcResult};
use crate::tubing::TubingSize;

/// Sources plus the outcome of the last recomputation.
#[derive(Debug, Clone)]
pub struct AnchorPanel {
    constants: PhysicalConstants,
    input: AnchorInput,
    outcome: CalcResult<AnchorResult>,
}

impl AnchorPanel {
    /// New panel at the default depth and tubing size, already computed.
    pub fn new(constants: PhysicalConstants) -> Self {
        let input = AnchorInput::default();
        let outcome = calculate(&input, &constants);
        AnchorPanel {
            constants,
            input,
            outcome,
        }
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    pub fn input(&self) -> &AnchorInput {
        &self.input
    }

    /// Change the anchor depth (m) and recompute
    pub fn set_anchor_depth_m(&mut self, anchor_depth_m: f64) -> &CalcResult<AnchorResult> {
        self.input.anchor_depth_m = anchor_depth_m;
        self.recompute()
    }

    /// Change the outer diameter (in) and recompute
    pub fn set_outer_diameter_in(&mut self, outer_diameter_in: f64) -> &CalcResult<AnchorResult> {
        self.input.outer_diameter_in = outer_diameter_in;
        self.recompute()
    }

    /// Select one of the standard sizes and recompute
    pub fn select_tubing(&mut self, size: TubingSize) -> &CalcResult<AnchorResult> {
        self.set_outer_diameter_in(size.outer_diameter_in())
    }

    /// Standard size matching the current diameter, if any
    pub fn selected_tubing(&self) -> Option<TubingSize> {
        TubingSize::from_outer_diameter(self.input.outer_diameter_in)
    }

    /// Result for the current input, `None` when it fails
    pub fn result(&self) -> Option<&AnchorResult> {
        self.outcome.as_ref().ok()
    }

    /// Error from the current input, if any
    pub fn error(&self) -> Option<&CalcError> {
        self.outcome.as_ref().err()
    }

    fn recompute(&mut self) -> &CalcResult<AnchorResult> {
        self.outcome = calculate(&self.input, &self.constants);
        &self.outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_panel_is_computed() {
        let panel = AnchorPanel::new(PhysicalConstants::default());
        let result = panel.result().unwrap();
        assert_eq!(result.section.inner_diameter_in, 2.441);
        assert_eq!(panel.selected_tubing(), Some(TubingSize::Od2_875));
        assert!(panel.error().is_none());
    }

    #[test]
    fn test_depth_change_recomputes() {
        let mut panel = AnchorPanel::new(PhysicalConstants::default());
        let before = panel.result().unwrap().total_tension_lb;
        panel.set_anchor_depth_m(1500.0);
        let after = panel.result().unwrap();
        assert_ne!(after.total_tension_lb, before);
        assert!(after.summary.starts_with("Fijar ancla en 1500.00 m"));
    }

    #[test]
    fn test_diameter_change_recomputes() {
        let mut panel = AnchorPanel::new(PhysicalConstants::default());
        let small_area = panel.result().unwrap().area_in2;

        panel.select_tubing(TubingSize::Od3_5);
        let large = panel.result().unwrap();
        assert!(large.area_in2 > small_area);
        assert_eq!(large.section.wall_section_in2, 2.59);

        let expected = calculate(
            &AnchorInput::for_tubing(1000.0, TubingSize::Od3_5),
            &PhysicalConstants::default(),
        )
        .unwrap();
        assert_eq!(panel.result(), Some(&expected));
    }

    #[test]
    fn test_bad_depth_then_recovery() {
        let mut panel = AnchorPanel::new(PhysicalConstants::default());
        assert!(panel.set_anchor_depth_m(0.0).is_err());
        assert!(panel.result().is_none());
        assert!(panel.error().unwrap().is_invalid_depth());

        panel.select_tubing(TubingSize::Od3_5);
        assert!(panel.error().is_some());

        assert!(panel.set_anchor_depth_m(900.0).is_ok());
        assert_eq!(panel.result().unwrap().section.inner_diameter_in, 2.992);
    }

    #[test]
    fn test_custom_diameter() {
        let mut panel = AnchorPanel::new(PhysicalConstants::default());
        panel.set_outer_diameter_in(4.0);
        assert_eq!(panel.selected_tubing(), None);
        assert!(panel.result().unwrap().section_is_approximate());
    }
}
