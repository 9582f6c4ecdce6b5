//! Per-color enrichment: every derived metric for one palette color, and the
//! `analyze` wrapper that runs extraction followed by enrichment.

use serde::{Deserialize, Serialize};

use super::psychology::{self, Psychology};
use super::vision::{self, VisionSimulations};
use crate::color::Color;
use crate::color::conversion::{Hsl, contrast_text_color};
use crate::color::naming::name_of;
use crate::error::Result;
use crate::extraction::{self, ExtractionParams, PaletteEntry};
use crate::image::PixelBuffer;

/// Below this HSL saturation a color reads as neither warm nor cool.
const NEUTRAL_SATURATION: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Temperature {
    Warm,
    Cool,
    Neutral,
}

impl Temperature {
    /// Temperature of an 8-bit color.
    pub fn of(color: Color) -> Self {
        Self::from_hsl(color.to_hsl())
    }

    /// Warm covers reds through yellows (`h < 90` or `h ≥ 330`).
    pub fn from_hsl(hsl: Hsl) -> Self {
        if hsl.s < NEUTRAL_SATURATION {
            Self::Neutral
        } else if hsl.h < 90.0 || hsl.h >= 330.0 {
            Self::Warm
        } else {
            Self::Cool
        }
    }
}

/// A color plus everything derived from it. A pure function of `color`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRecord {
    pub color: Color,
    pub hex: String,
    pub rgb: [u8; 3],
    /// Integer percentages `[c, m, y, k]`.
    pub cmyk: [u8; 4],
    /// `[hue°, saturation %, lightness %]`.
    pub hsl: [u16; 3],
    /// `[hue°, saturation %, value %]`.
    pub hsv: [u16; 3],
    pub name: String,
    /// WCAG relative luminance, unrounded.
    pub luminance: f64,
    /// Readable text color on top of this one (black or white).
    pub contrast_color: Color,
    pub temperature: Temperature,
    pub psychology: Psychology,
    pub vision: VisionSimulations,
}

impl ColorRecord {
    /// Every derived attribute of one color.
    pub fn describe(color: Color) -> Self {
        let Color { r, g, b } = color;
        Self {
            color,
            hex: color.hex(),
            rgb: color.to_array(),
            cmyk: color.to_cmyk().to_rounded(),
            hsl: color.to_hsl().to_rounded(),
            hsv: color.to_hsv().to_rounded(),
            name: name_of(r, g, b).to_string(),
            luminance: color.luminance(),
            contrast_color: contrast_text_color(r, g, b),
            temperature: Temperature::of(color),
            psychology: psychology::classify(r, g, b),
            vision: vision::simulate_all(color),
        }
    }
}

/// A ranked palette entry with its enrichment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedColor {
    pub rank: usize,
    pub pixel_count: u64,
    pub percentage: f64,
    #[serde(flatten)]
    pub record: ColorRecord,
}

impl From<PaletteEntry> for AnalyzedColor {
    fn from(entry: PaletteEntry) -> Self {
        Self {
            rank: entry.rank,
            pixel_count: entry.pixel_count,
            percentage: entry.percentage,
            record: ColorRecord::describe(entry.color),
        }
    }
}

/// Extract a `k`-color palette and enrich every entry.
pub fn analyze(buffer: &PixelBuffer, k: usize) -> Result<Vec<AnalyzedColor>> {
    analyze_with(buffer, &ExtractionParams::with_color_count(k))
}

/// Like [`analyze`], with explicit extraction parameters.
pub fn analyze_with(buffer: &PixelBuffer, params: &ExtractionParams) -> Result<Vec<AnalyzedColor>> {
    let palette = extraction::extract_with(buffer, params)?;
    Ok(palette.into_iter().map(AnalyzedColor::from).collect())
}
