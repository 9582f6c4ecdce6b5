//! Chromata Core: the color-analysis engine.
//!
//! Quantizes a decoded pixel buffer into a ranked dominant-color palette and
//! derives color-science metrics per color: space conversions, naming,
//! WCAG contrast, harmony palettes, vision-deficiency simulation and
//! psychology traits. Everything is synchronous and pure; decoding and
//! presentation belong to the caller.

pub mod analysis;
pub mod color;
pub mod error;
pub mod extraction;
pub mod image;

// Re-exports for convenience.
pub use analysis::accessibility::{AccessibilityResult, check_all, check_pair};
pub use analysis::harmony::{HarmonyPalette, HarmonyScheme, generate};
pub use analysis::record::{AnalyzedColor, ColorRecord, analyze, analyze_with};
pub use analysis::vision::{Deficiency, simulate};
pub use color::Color;
pub use error::{ChromataError, Result};
pub use extraction::{ExtractionParams, PaletteEntry, extract, extract_with};
pub use crate::image::{Pixel, PixelBuffer};
