//! Standard Tubing Sizes
//!
//! Maps a nominal tubing outer diameter to its inner diameter and the
//! cross-sectional area of the pipe wall.
//!
//! ## Known Sizes
//!
//! | OD (in) | ID (in) | Wall section (in²) |
//! |---------|---------|--------------------|
//! | 2.875   | 2.441   | 1.812              |
//! | 3.5     | 2.992   | 2.59               |
//!
//! ## Unknown Sizes
//!
//! Any other OD is not an error. The lookup falls back to an approximate
//! inner diameter of `OD × 0.85` and a wall section of zero, and marks the
//! section as [`SectionSource::Approximate`] so shells can warn the user.

use log::warn;
use serde::{Deserialize, Serialize};

/// Tolerance for matching a user-supplied OD against a table entry
pub const OD_MATCH_TOLERANCE: f64 = 1e-6;

/// Inner diameter ratio applied to unknown outer diameters
pub const FALLBACK_ID_RATIO: f64 = 0.85;

/// Standard tubing size offered by the shells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TubingSize {
    /// 2 7/8" OD (2.441" ID)
    #[default]
    Od2_875,
    /// 3 1/2" OD (2.992" ID)
    Od3_5,
}

impl TubingSize {
    /// All tubing sizes for UI selection (default first)
    pub const ALL: [TubingSize; 2] = [TubingSize::Od2_875, TubingSize::Od3_5];

    /// Nominal outer diameter in inches
    pub fn outer_diameter_in(&self) -> f64 {
        match self {
            TubingSize::Od2_875 => 2.875,
            TubingSize::Od3_5 => 3.5,
        }
    }

    /// Get the tabulated (inner diameter, wall section) pair
    ///
    /// Returns (inner_diameter_in, wall_section_in2)
    pub fn section(&self) -> (f64, f64) {
        match self {
            TubingSize::Od2_875 => (2.441, 1.812),
            TubingSize::Od3_5 => (2.992, 2.59),
        }
    }

    /// Get display name (e.g., "2.875")
    pub fn display_name(&self) -> &'static str {
        match self {
            TubingSize::Od2_875 => "2.875",
            TubingSize::Od3_5 => "3.5",
        }
    }

    /// Match an outer diameter against the table within [`OD_MATCH_TOLERANCE`]
    pub fn from_outer_diameter(outer_diameter_in: f64) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|size| (size.outer_diameter_in() - outer_diameter_in).abs() < OD_MATCH_TOLERANCE)
    }

    /// Next size in [`TubingSize::ALL`], wrapping around
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|s| s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous size in [`TubingSize::ALL`], wrapping around
    pub fn previous(&self) -> Self {
        let idx = Self::ALL.iter().position(|s| s == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for TubingSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Where a [`PipeSection`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionSource {
    /// Exact table entry
    Table,
    /// OD not in the table; inner diameter estimated, wall section unknown (0.0)
    Approximate,
}

/// Inner diameter and wall section for a given outer diameter.
///
/// ## JSON Example
///
/// ```json
/// {
///   "outer_diameter_in": 2.875,
///   "inner_diameter_in": 2.441,
///   "wall_section_in2": 1.812,
///   "source": "Table"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipeSection {
    pub outer_diameter_in: f64,
    pub inner_diameter_in: f64,
    /// Wall cross-section area (in²); exactly 0.0 when unknown
    pub wall_section_in2: f64,
    pub source: SectionSource,
}

impl PipeSection {
    /// True when the section is a fallback estimate
    pub fn is_approximate(&self) -> bool {
        self.source == SectionSource::Approximate
    }
}

/// Look up the inner diameter and wall section for an outer diameter.
///
/// Table entries match within [`OD_MATCH_TOLERANCE`] to absorb representation
/// noise from parsed user input. Anything else takes the fallback path.
///
/// ```rust
/// use anchor_core::tubing::lookup_pipe_section;
///
/// let section = lookup_pipe_section(3.5);
/// assert_eq!(section.inner_diameter_in, 2.992);
/// assert_eq!(section.wall_section_in2, 2.59);
/// ```
pub fn lookup_pipe_section(outer_diameter_in: f64) -> PipeSection {
    match TubingSize::from_outer_diameter(outer_diameter_in) {
        Some(size) => {
            let (inner_diameter_in, wall_section_in2) = size.section();
            PipeSection {
                outer_diameter_in,
                inner_diameter_in,
                wall_section_in2,
                source: SectionSource::Table,
            }
        }
        None => {
            warn!(
                "wall section unknown for OD {} in, using default ID {:.3} in and zero section",
                outer_diameter_in,
                outer_diameter_in * FALLBACK_ID_RATIO
            );
            PipeSection {
                outer_diameter_in,
                inner_diameter_in: outer_diameter_in * FALLBACK_ID_RATIO,
                wall_section_in2: 0.0,
                source: SectionSource::Approximate,
            }
        }
    }
}
