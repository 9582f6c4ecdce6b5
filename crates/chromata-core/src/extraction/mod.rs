//! Dominant-color extraction: quantize a pixel buffer into a ranked palette.
//!
//! Clustering lives in [`kmeans`]; this module owns the parameters, input
//! validation, and the ranking of clusters into [`PaletteEntry`] values.

pub mod kmeans;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{ChromataError, Result};
use crate::image::PixelBuffer;

/// Smallest palette the extractor will produce.
pub const MIN_COLORS: usize = 2;
/// Largest palette the extractor will produce.
pub const MAX_COLORS: usize = 10;

/// Tunables for palette extraction. Missing JSON fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionParams {
    /// Number of clusters `k`, in `[2, 10]`. Default: 5.
    pub color_count: usize,
    /// Lloyd iteration cap per restart. Default: 300.
    pub max_iterations: usize,
    /// Independent k-means runs; the lowest-inertia run wins. Default: 10.
    pub restarts: usize,
    /// Base RNG seed; restart `i` uses `seed + i`. Default: 0.
    pub seed: u64,
    /// Centroid-shift threshold that ends a run early. Default: 1e-4.
    pub tolerance: f32,
    /// Pixels above this count are strided down before clustering. Default: 800×800.
    pub max_samples: usize,
}

impl Default for ExtractionParams {
    fn default() -> Self {
        Self {
            color_count: 5,
            max_iterations: 300,
            restarts: 10,
            seed: 0,
            tolerance: 1e-4,
            max_samples: 800 * 800,
        }
    }
}

impl ExtractionParams {
    /// Defaults with a specific palette size.
    pub fn with_color_count(color_count: usize) -> Self {
        Self {
            color_count,
            ..Self::default()
        }
    }

    /// Parse from JSON, then validate.
    pub fn from_json(text: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(text)?;
        params.validate()?;
        Ok(params)
    }

    /// Check the palette size range and that every limit is usable.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_COLORS..=MAX_COLORS).contains(&self.color_count) {
            return Err(ChromataError::invalid_input(format!(
                "color count {} outside [{MIN_COLORS}, {MAX_COLORS}]",
                self.color_count
            )));
        }
        if self.max_iterations == 0 {
            return Err(ChromataError::invalid_input("max_iterations must be positive"));
        }
        if self.restarts == 0 {
            return Err(ChromataError::invalid_input("restarts must be positive"));
        }
        if self.max_samples == 0 {
            return Err(ChromataError::invalid_input("max_samples must be positive"));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ChromataError::invalid_input(format!(
                "tolerance {} must be finite and non-negative",
                self.tolerance
            )));
        }
        Ok(())
    }
}

/// One ranked palette color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// 1-based position after sorting by pixel count.
    pub rank: usize,
    pub color: Color,
    pub pixel_count: u64,
    /// Share of the buffer in percent, one decimal.
    pub percentage: f64,
}

/// Extract a `k`-color palette with default parameters.
pub fn extract(buffer: &PixelBuffer, k: usize) -> Result<Vec<PaletteEntry>> {
    extract_with(buffer, &ExtractionParams::with_color_count(k))
}

/// Extract a palette, ranked by descending pixel count.
///
/// Equal counts keep ascending cluster order, so the ranking is fully
/// deterministic for a given buffer and parameter set. Pixel counts always
/// sum to the buffer size. Fewer than `k` entries come back only when the
/// buffer holds fewer than `k` distinct colors (each distinct color then
/// becomes its own entry) or when two centroids round to the same color.
pub fn extract_with(buffer: &PixelBuffer, params: &ExtractionParams) -> Result<Vec<PaletteEntry>> {
    if buffer.is_empty() {
        return Err(ChromataError::invalid_input("pixel buffer is empty"));
    }
    params.validate()?;

    tracing::debug!(
        "extracting {} colors from {buffer} ({} pixels)",
        params.color_count,
        buffer.len()
    );

    let clustering = kmeans::cluster(buffer.pixels(), params)?;
    Ok(rank(&clustering, buffer.len()))
}

/// Rank-1 color of the default extraction.
pub fn dominant_color(buffer: &PixelBuffer) -> Result<Color> {
    extract_with(buffer, &ExtractionParams::default())?
        .first()
        .map(|entry| entry.color)
        .ok_or_else(|| ChromataError::computation("extraction produced no palette entries"))
}

fn rank(clustering: &kmeans::Clustering, total: usize) -> Vec<PaletteEntry> {
    let mut order: Vec<usize> = (0..clustering.centroids.len())
        .filter(|&i| clustering.counts[i] > 0)
        .collect();
    // Stable sort keeps ascending cluster index among equal counts.
    order.sort_by(|&a, &b| clustering.counts[b].cmp(&clustering.counts[a]));

    order
        .into_iter()
        .enumerate()
        .map(|(position, cluster)| {
            let count = clustering.counts[cluster];
            PaletteEntry {
                rank: position + 1,
                color: clustering.centroids[cluster],
                pixel_count: count,
                percentage: percentage(count, total),
            }
        })
        .collect()
}

fn percentage(count: u64, total: usize) -> f64 {
    (count as f64 / total as f64 * 1000.0).round() / 10.0
}
