//! Color-vision-deficiency simulation with fixed 3×3 linear transforms.
//!
//! The matrix is applied to normalized `[0, 1]` RGB; each output channel is
//! scaled back to `[0, 255]`, clamped and rounded. Every row sums to 1, so
//! white and black map to themselves.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{ChromataError, Result};

/// A 3×3 matrix for linear RGB transforms. Rows produce output R, G, B.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrix(pub [[f64; 3]; 3]);

impl ColorMatrix {
    pub const IDENTITY: Self = Self([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    /// Multiply a normalized RGB triple by the matrix.
    pub fn apply(&self, rgb: [f64; 3]) -> [f64; 3] {
        self.0.map(|row| row[0] * rgb[0] + row[1] * rgb[1] + row[2] * rgb[2])
    }

    /// Apply to an 8-bit color, clamping and rounding the result.
    pub fn apply_to(&self, color: Color) -> Color {
        let unit = color.to_array().map(|c| f64::from(c) / 255.0);
        let [r, g, b] = self
            .apply(unit)
            .map(|c| (c * 255.0).clamp(0.0, 255.0).round() as u8);
        Color::new(r, g, b)
    }
}

const PROTANOPIA: ColorMatrix = ColorMatrix([
    [0.567, 0.433, 0.0],
    [0.558, 0.442, 0.0],
    [0.0, 0.242, 0.758],
]);

const DEUTERANOPIA: ColorMatrix = ColorMatrix([
    [0.625, 0.375, 0.0],
    [0.7, 0.3, 0.0],
    [0.0, 0.3, 0.7],
]);

const TRITANOPIA: ColorMatrix = ColorMatrix([
    [0.95, 0.05, 0.0],
    [0.0, 0.433, 0.567],
    [0.0, 0.475, 0.525],
]);

/// Identical rows: every output channel is the same luma.
const ACHROMATOPSIA: ColorMatrix = ColorMatrix([
    [0.299, 0.587, 0.114],
    [0.299, 0.587, 0.114],
    [0.299, 0.587, 0.114],
]);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Deficiency {
    /// No L cones (red-blind).
    Protanopia,
    /// No M cones (green-blind).
    Deuteranopia,
    /// No S cones (blue-blind).
    Tritanopia,
    /// No cone function; grayscale vision.
    Achromatopsia,
}

impl Deficiency {
    /// Lower-case deficiency name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Protanopia => "protanopia",
            Self::Deuteranopia => "deuteranopia",
            Self::Tritanopia => "tritanopia",
            Self::Achromatopsia => "achromatopsia",
        }
    }

    /// Every deficiency in declaration order.
    pub fn all() -> &'static [Self] {
        const ALL: [Deficiency; 4] = [
            Deficiency::Protanopia,
            Deficiency::Deuteranopia,
            Deficiency::Tritanopia,
            Deficiency::Achromatopsia,
        ];
        &ALL
    }

    /// Simulation matrix for this deficiency.
    pub const fn matrix(&self) -> &'static ColorMatrix {
        match self {
            Self::Protanopia => &PROTANOPIA,
            Self::Deuteranopia => &DEUTERANOPIA,
            Self::Tritanopia => &TRITANOPIA,
            Self::Achromatopsia => &ACHROMATOPSIA,
        }
    }
}

impl fmt::Display for Deficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Deficiency {
    type Err = ChromataError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|d| d.name() == wanted)
            .ok_or_else(|| ChromataError::invalid_input(format!("unknown deficiency {s:?}")))
    }
}

/// How `color` appears under `deficiency`.
pub fn simulate(color: Color, deficiency: Deficiency) -> Color {
    deficiency.matrix().apply_to(color)
}

/// Like [`simulate`], but unknown names leave the color unchanged.
pub fn simulate_named(color: Color, name: &str) -> Color {
    match name.parse::<Deficiency>() {
        Ok(deficiency) => simulate(color, deficiency),
        Err(_) => ColorMatrix::IDENTITY.apply_to(color),
    }
}

/// One color under all four deficiencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisionSimulations {
    pub protanopia: Color,
    pub deuteranopia: Color,
    pub tritanopia: Color,
    pub achromatopsia: Color,
}

/// Simulate `color` under every deficiency at once.
pub fn simulate_all(color: Color) -> VisionSimulations {
    VisionSimulations {
        protanopia: simulate(color, Deficiency::Protanopia),
        deuteranopia: simulate(color, Deficiency::Deuteranopia),
        tritanopia: simulate(color, Deficiency::Tritanopia),
        achromatopsia: simulate(color, Deficiency::Achromatopsia),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_sum_to_one() {
        for d in Deficiency::all() {
            for row in d.matrix().0 {
                let sum: f64 = row.iter().sum();
                assert!((sum - 1.0).abs() < 1e-9, "{d}: {row:?}");
            }
        }
    }

    #[test]
    fn test_white_and_black_are_fixed_points() {
        for &d in Deficiency::all() {
            assert_eq!(simulate(Color::WHITE, d), Color::WHITE, "{d}");
            assert_eq!(simulate(Color::BLACK, d), Color::BLACK, "{d}");
        }
    }

    #[test]
    fn test_achromatopsia_is_gray() {
        for color in [Color::new(255, 0, 0), Color::new(12, 200, 99), Color::new(7, 7, 250)] {
            let gray = simulate(color, Deficiency::Achromatopsia);
            assert_eq!(gray.r, gray.g, "{color} -> {gray}");
            assert_eq!(gray.g, gray.b, "{color} -> {gray}");
        }
        assert_eq!(simulate(Color::new(255, 0, 0), Deficiency::Achromatopsia), Color::new(76, 76, 76));
    }

    #[test]
    fn test_protanopia_red() {
        // 0.567 × 255 = 144.6, 0.558 × 255 = 142.3
        assert_eq!(simulate(Color::new(255, 0, 0), Deficiency::Protanopia), Color::new(145, 142, 0));
    }

    #[test]
    fn test_deuteranopia_known_values() {
        // green 200: 0.375 × 200 = 75, 0.3 × 200 = 60
        assert_eq!(simulate(Color::new(0, 200, 0), Deficiency::Deuteranopia), Color::new(75, 60, 60));
        // red 200: 0.625 × 200 = 125, 0.7 × 200 = 140
        assert_eq!(simulate(Color::new(200, 0, 0), Deficiency::Deuteranopia), Color::new(125, 140, 0));
        assert_eq!(simulate(Color::new(0, 0, 200), Deficiency::Deuteranopia), Color::new(0, 0, 140));
    }

    #[test]
    fn test_tritanopia_known_values() {
        // 0.95 × 255 = 242.25
        assert_eq!(simulate(Color::new(255, 0, 0), Deficiency::Tritanopia), Color::new(242, 0, 0));
        // 0.567 × 255 = 144.6, 0.525 × 255 = 133.9
        assert_eq!(simulate(Color::new(0, 0, 255), Deficiency::Tritanopia), Color::new(0, 145, 134));
        // 0.05 × 200 = 10, 0.433 × 200 = 86.6, 0.475 × 200 = 95
        assert_eq!(simulate(Color::new(0, 200, 0), Deficiency::Tritanopia), Color::new(10, 87, 95));
    }

    #[test]
    fn test_matrix_rows_in_order() {
        assert_eq!(
            Deficiency::Protanopia.matrix().0,
            [[0.567, 0.433, 0.0], [0.558, 0.442, 0.0], [0.0, 0.242, 0.758]]
        );
        assert_eq!(
            Deficiency::Deuteranopia.matrix().0,
            [[0.625, 0.375, 0.0], [0.7, 0.3, 0.0], [0.0, 0.3, 0.7]]
        );
        assert_eq!(
            Deficiency::Tritanopia.matrix().0,
            [[0.95, 0.05, 0.0], [0.0, 0.433, 0.567], [0.0, 0.475, 0.525]]
        );
    }

    #[test]
    fn test_unknown_name_is_identity() {
        let color = Color::new(12, 34, 56);
        assert_eq!(simulate_named(color, "tetrachromacy"), color);
        assert_eq!(
            simulate_named(color, "Deuteranopia"),
            simulate(color, Deficiency::Deuteranopia)
        );
        assert!("tetrachromacy".parse::<Deficiency>().is_err());
    }

    #[test]
    fn test_simulate_all_matches_individual_calls() {
        let color = Color::new(255, 128, 0);
        let all = simulate_all(color);
        assert_eq!(all.tritanopia, simulate(color, Deficiency::Tritanopia));
        assert_eq!(all.protanopia, simulate(color, Deficiency::Protanopia));
    }
}
