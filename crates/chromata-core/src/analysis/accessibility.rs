//! Pairwise WCAG 2.1 contrast compliance.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::color::conversion::contrast_ratio;
use crate::error::{ChromataError, Result};

/// Minimum ratio for normal text at level AA.
pub const AA_NORMAL: f64 = 4.5;
/// Minimum ratio for large text at level AA.
pub const AA_LARGE: f64 = 3.0;
/// Minimum ratio for normal text at level AAA.
pub const AAA_NORMAL: f64 = 7.0;
/// Minimum ratio for large text at level AAA.
pub const AAA_LARGE: f64 = 4.5;

/// Contrast of one ordered (foreground, background) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityResult {
    pub foreground: Color,
    pub background: Color,
    /// Unrounded ratio; the flags are computed from this value.
    pub ratio: f64,
    pub aa_normal: bool,
    pub aa_large: bool,
    pub aaa_normal: bool,
    pub aaa_large: bool,
}

impl AccessibilityResult {
    /// Ratio rounded to two decimals for display.
    pub fn ratio_rounded(&self) -> f64 {
        (self.ratio * 100.0).round() / 100.0
    }

    /// `true` when every threshold passes.
    pub fn passes_all(&self) -> bool {
        self.aa_normal && self.aa_large && self.aaa_normal && self.aaa_large
    }
}

/// WCAG contrast ratio and AA/AAA verdicts for one ordered pair.
pub fn check_pair(foreground: Color, background: Color) -> AccessibilityResult {
    let ratio = contrast_ratio(foreground, background);
    AccessibilityResult {
        foreground,
        background,
        ratio,
        aa_normal: ratio >= AA_NORMAL,
        aa_large: ratio >= AA_LARGE,
        aaa_normal: ratio >= AAA_NORMAL,
        aaa_large: ratio >= AAA_LARGE,
    }
}

/// Every ordered pair `(i, j)` with `i != j`, `i` outer and ascending.
///
/// Both orderings of a pair are reported; `n` colors give `n × (n − 1)` results.
pub fn check_all(colors: &[Color]) -> Result<Vec<AccessibilityResult>> {
    if colors.len() < 2 {
        return Err(ChromataError::invalid_input(format!(
            "accessibility check needs at least 2 colors, got {}",
            colors.len()
        )));
    }

    let results = colors
        .iter()
        .enumerate()
        .flat_map(move |(i, &fg)| {
            colors
                .iter()
                .enumerate()
                .filter(move |&(j, _)| j != i)
                .map(move |(_, &bg)| check_pair(fg, bg))
        })
        .collect();
    Ok(results)
}
