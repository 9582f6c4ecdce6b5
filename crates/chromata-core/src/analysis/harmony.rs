//! Five-color harmony palettes generated by hue rotation from one seed.
//!
//! The seed is converted to HSL, each slot applies a fixed
//! `(hue offset°, saturation Δ, lightness Δ)` triple with saturation and
//! lightness clamped to `[0, 100]`, and the result is converted back to RGB.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::color::conversion::{Hsl, hsl_to_rgb};
use crate::error::{ChromataError, Result};

/// Number of colors in every generated palette.
pub const HARMONY_SIZE: usize = 5;

/// `(hue offset°, saturation Δ, lightness Δ)` for one palette slot.
type Slot = (f64, f64, f64);

/// Muted, lighter companion used by several schemes.
const SOFT: (f64, f64) = (-20.0, 15.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HarmonyScheme {
    Monochromatic,
    Analogous,
    Complementary,
    Triadic,
    Tetradic,
    SplitComplementary,
}

impl HarmonyScheme {
    /// Snake-case scheme name, as serialized.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Monochromatic => "monochromatic",
            Self::Analogous => "analogous",
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
            Self::SplitComplementary => "split_complementary",
        }
    }

    /// Every scheme in declaration order.
    pub fn all() -> &'static [Self] {
        const ALL: [HarmonyScheme; 6] = [
            HarmonyScheme::Monochromatic,
            HarmonyScheme::Analogous,
            HarmonyScheme::Complementary,
            HarmonyScheme::Triadic,
            HarmonyScheme::Tetradic,
            HarmonyScheme::SplitComplementary,
        ];
        &ALL
    }

    /// Parse a scheme name, treating anything unrecognized as complementary.
    ///
    /// Kept for callers that relied on the permissive lookup; new code should
    /// use [`FromStr`], which rejects unknown names.
    pub fn from_name_lenient(name: &str) -> Self {
        name.parse().unwrap_or(Self::Complementary)
    }

    const fn slots(&self) -> [Slot; HARMONY_SIZE] {
        match self {
            Self::Monochromatic => [
                (0.0, 0.0, 0.0),
                (0.0, 0.0, -30.0),
                (0.0, 0.0, -15.0),
                (0.0, 0.0, 15.0),
                (0.0, 0.0, 30.0),
            ],
            Self::Analogous => [
                (0.0, 0.0, 0.0),
                (30.0, 0.0, 0.0),
                (-30.0, 0.0, 0.0),
                (60.0, 0.0, 0.0),
                (-60.0, 0.0, 0.0),
            ],
            Self::Complementary => [
                (0.0, 0.0, 0.0),
                (180.0, 0.0, 0.0),
                (0.0, SOFT.0, SOFT.1),
                (180.0, SOFT.0, SOFT.1),
                (0.0, 0.0, -20.0),
            ],
            Self::Triadic => [
                (0.0, 0.0, 0.0),
                (120.0, 0.0, 0.0),
                (240.0, 0.0, 0.0),
                (0.0, SOFT.0, SOFT.1),
                (120.0, SOFT.0, SOFT.1),
            ],
            Self::Tetradic => [
                (0.0, 0.0, 0.0),
                (90.0, 0.0, 0.0),
                (180.0, 0.0, 0.0),
                (270.0, 0.0, 0.0),
                (0.0, SOFT.0, SOFT.1),
            ],
            Self::SplitComplementary => [
                (0.0, 0.0, 0.0),
                (150.0, 0.0, 0.0),
                (210.0, 0.0, 0.0),
                (150.0, SOFT.0, SOFT.1),
                (210.0, SOFT.0, SOFT.1),
            ],
        }
    }
}

impl fmt::Display for HarmonyScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HarmonyScheme {
    type Err = ChromataError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::all()
            .iter()
            .copied()
            .find(|scheme| scheme.name() == wanted)
            .ok_or_else(|| ChromataError::invalid_input(format!("unknown harmony scheme {s:?}")))
    }
}

/// A generated harmony palette. `colors[0]` is always the seed itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarmonyPalette {
    pub scheme: HarmonyScheme,
    pub seed: Color,
    pub colors: [Color; HARMONY_SIZE],
}

/// Build the five-color palette for `scheme` around `seed`.
pub fn generate(seed: Color, scheme: HarmonyScheme) -> HarmonyPalette {
    let base = seed.to_hsl();
    let colors = scheme.slots().map(|(dh, ds, dl)| {
        hsl_to_rgb(Hsl {
            h: (base.h + dh).rem_euclid(360.0),
            s: (base.s + ds).clamp(0.0, 100.0),
            l: (base.l + dl).clamp(0.0, 100.0),
        })
    });

    HarmonyPalette { scheme, seed, colors }
}

/// Every scheme for one seed, in [`HarmonyScheme::all`] order.
pub fn generate_all(seed: Color) -> Vec<HarmonyPalette> {
    HarmonyScheme::all()
        .iter()
        .map(|&scheme| generate(seed, scheme))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hue_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    #[test]
    fn test_every_scheme_yields_five_colors_starting_with_seed() {
        let seed = Color::new(30, 144, 255);
        for palette in generate_all(seed) {
            assert_eq!(palette.colors.len(), HARMONY_SIZE);
            assert_eq!(palette.colors[0], seed, "{}", palette.scheme);
        }
    }

    /// Seed at hsl(0°, ~50%, 50%), far enough from the bounds that no slot clamps.
    const TABLE_SEED: Color = Color::new(191, 64, 64);

    fn assert_slots(scheme: HarmonyScheme, expected: [Slot; HARMONY_SIZE]) {
        let base = TABLE_SEED.to_hsl();
        let palette = generate(TABLE_SEED, scheme);
        for (i, (color, (dh, ds, dl))) in palette.colors.iter().zip(expected).enumerate() {
            let want = Hsl {
                h: (base.h + dh).rem_euclid(360.0),
                s: base.s + ds,
                l: base.l + dl,
            };
            assert_eq!(*color, hsl_to_rgb(want), "{scheme} slot {i}");

            let got = color.to_hsl();
            assert!(hue_distance(got.h, want.h) <= 1.5, "{scheme} slot {i} hue: {got:?} vs {want:?}");
            assert!((got.s - want.s).abs() <= 1.5, "{scheme} slot {i} saturation: {got:?} vs {want:?}");
            assert!((got.l - want.l).abs() <= 0.5, "{scheme} slot {i} lightness: {got:?} vs {want:?}");
        }
    }

    #[test]
    fn test_monochromatic_slots() {
        assert_slots(
            HarmonyScheme::Monochromatic,
            [(0.0, 0.0, 0.0), (0.0, 0.0, -30.0), (0.0, 0.0, -15.0), (0.0, 0.0, 15.0), (0.0, 0.0, 30.0)],
        );
    }

    #[test]
    fn test_analogous_slots() {
        assert_slots(
            HarmonyScheme::Analogous,
            [(0.0, 0.0, 0.0), (30.0, 0.0, 0.0), (-30.0, 0.0, 0.0), (60.0, 0.0, 0.0), (-60.0, 0.0, 0.0)],
        );
    }

    #[test]
    fn test_complementary_slots() {
        assert_slots(
            HarmonyScheme::Complementary,
            [(0.0, 0.0, 0.0), (180.0, 0.0, 0.0), (0.0, -20.0, 15.0), (180.0, -20.0, 15.0), (0.0, 0.0, -20.0)],
        );
    }

    #[test]
    fn test_triadic_slots() {
        assert_slots(
            HarmonyScheme::Triadic,
            [(0.0, 0.0, 0.0), (120.0, 0.0, 0.0), (240.0, 0.0, 0.0), (0.0, -20.0, 15.0), (120.0, -20.0, 15.0)],
        );
    }

    #[test]
    fn test_tetradic_slots() {
        assert_slots(
            HarmonyScheme::Tetradic,
            [(0.0, 0.0, 0.0), (90.0, 0.0, 0.0), (180.0, 0.0, 0.0), (270.0, 0.0, 0.0), (0.0, -20.0, 15.0)],
        );
    }

    #[test]
    fn test_split_complementary_slots() {
        assert_slots(
            HarmonyScheme::SplitComplementary,
            [(0.0, 0.0, 0.0), (150.0, 0.0, 0.0), (210.0, 0.0, 0.0), (150.0, -20.0, 15.0), (210.0, -20.0, 15.0)],
        );
    }

    #[test]
    fn test_complementary_second_color_is_opposite() {
        for seed in [Color::new(30, 144, 255), Color::new(200, 50, 50), Color::new(120, 200, 40)] {
            let palette = generate(seed, HarmonyScheme::Complementary);
            let seed_hue = seed.to_hsl().h;
            let second_hue = palette.colors[1].to_hsl().h;
            let off = hue_distance(second_hue, seed_hue + 180.0);
            assert!(off <= 1.0, "{seed}: {seed_hue} vs {second_hue}");
        }
    }

    #[test]
    fn test_triadic_hues_are_120_apart() {
        let seed = Color::new(200, 50, 50);
        let palette = generate(seed, HarmonyScheme::Triadic);
        let h0 = palette.colors[0].to_hsl().h;
        assert!(hue_distance(palette.colors[1].to_hsl().h, h0 + 120.0) <= 1.0);
        assert!(hue_distance(palette.colors[2].to_hsl().h, h0 + 240.0) <= 1.0);
    }

    #[test]
    fn test_monochromatic_clamps_lightness() {
        let palette = generate(Color::WHITE, HarmonyScheme::Monochromatic);
        assert_eq!(palette.colors[4], Color::WHITE);
        assert_eq!(palette.colors[3], Color::WHITE);
        assert!(palette.colors[1].r < palette.colors[2].r);
    }

    #[test]
    fn test_scheme_parsing() {
        assert_eq!("triadic".parse::<HarmonyScheme>().unwrap(), HarmonyScheme::Triadic);
        assert_eq!(
            "Split-Complementary".parse::<HarmonyScheme>().unwrap(),
            HarmonyScheme::SplitComplementary
        );
        assert!("rainbow".parse::<HarmonyScheme>().unwrap_err().is_invalid_input());
        assert_eq!(HarmonyScheme::from_name_lenient("rainbow"), HarmonyScheme::Complementary);
        assert_eq!(HarmonyScheme::from_name_lenient("tetradic"), HarmonyScheme::Tetradic);
    }

    #[test]
    fn test_scheme_serializes_snake_case() {
        let json = serde_json::to_string(&HarmonyScheme::SplitComplementary).unwrap();
        assert_eq!(json, "\"split_complementary\"");
    }
}
