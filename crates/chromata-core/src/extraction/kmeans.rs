//! Lloyd's k-means over RGB pixels with seeded restarts.
//!
//! Each restart runs `kmeans_colors` (k-means++ seeding, Lloyd iterations
//! until the centroid shift drops under the tolerance or the iteration cap
//! is hit) on sRGB floats in `[0, 1]`. Non-convergence is not an error: the
//! run simply stops at the cap. The run with the lowest inertia wins.
//!
//! ```text
//! inertia = Σ_pixels min_c ‖pixel − centroid_c‖²
//! ```
//!
//! Final counts always come from assigning every pixel of the full buffer
//! to its nearest rounded centroid, so they sum to the buffer size even when
//! clustering ran on a strided sample.

use std::collections::HashSet;

use kmeans_colors::get_kmeans;
use palette::Srgb;

use super::ExtractionParams;
use crate::color::Color;
use crate::error::{ChromataError, Result};
use crate::image::Pixel;

/// Cluster centroids indexed by cluster, with the full-buffer pixel count of each.
#[derive(Debug, Clone, PartialEq)]
pub struct Clustering {
    pub centroids: Vec<Color>,
    pub counts: Vec<u64>,
}

/// Quantize `pixels` into at most `params.color_count` clusters.
pub fn cluster(pixels: &[Pixel], params: &ExtractionParams) -> Result<Clustering> {
    let k = params.color_count;
    let sample = stride_sample(pixels, params.max_samples);
    if sample.len() < pixels.len() {
        tracing::warn!(
            "downsampling {} pixels to {} for clustering",
            pixels.len(),
            sample.len()
        );
    }

    let centroids = match distinct_colors(&sample, k) {
        Some(distinct) => {
            tracing::debug!("{} distinct colors <= k = {k}, skipping k-means", distinct.len());
            distinct
        }
        None => best_of_restarts(&sample, params)?,
    };

    let counts = assign(pixels, &centroids);
    Ok(Clustering { centroids, counts })
}

/// Every `n`-th pixel so that at most `limit` remain.
fn stride_sample(pixels: &[Pixel], limit: usize) -> Vec<Pixel> {
    if pixels.len() <= limit {
        return pixels.to_vec();
    }
    let step = pixels.len().div_ceil(limit);
    pixels.iter().step_by(step).copied().collect()
}

/// The distinct colors in first-appearance order, or `None` once there are more than `k`.
fn distinct_colors(pixels: &[Pixel], k: usize) -> Option<Vec<Color>> {
    let mut seen = HashSet::with_capacity(k + 1);
    let mut ordered = Vec::with_capacity(k);
    for &px in pixels {
        if seen.insert(px) {
            if ordered.len() == k {
                return None;
            }
            ordered.push(Color::from(px));
        }
    }
    Some(ordered)
}

fn best_of_restarts(sample: &[Pixel], params: &ExtractionParams) -> Result<Vec<Color>> {
    let points: Vec<Srgb> = sample.iter().map(|&px| to_unit(px)).collect();

    let mut best: Option<(f64, Vec<Srgb>)> = None;
    for restart in 0..params.restarts {
        let seed = params.seed.wrapping_add(restart as u64);
        let run = get_kmeans(
            params.color_count,
            params.max_iterations,
            params.tolerance,
            false,
            &points,
            seed,
        );
        let score = inertia(&points, &run.centroids);
        tracing::trace!("restart {restart} (seed {seed}): inertia {score:.6}");

        // Strict comparison: the earliest run wins ties.
        if best.as_ref().is_none_or(|(best_score, _)| score < *best_score) {
            best = Some((score, run.centroids));
        }
    }

    let (score, centroids) =
        best.ok_or_else(|| ChromataError::computation("k-means produced no runs"))?;
    if !score.is_finite() {
        return Err(ChromataError::computation(format!("non-finite inertia {score}")));
    }
    tracing::debug!("best of {} restarts: inertia {score:.6}", params.restarts);

    centroids.into_iter().map(from_unit).collect()
}

fn to_unit(px: Pixel) -> Srgb {
    let [r, g, b] = px.map(|c| f32::from(c) / 255.0);
    Srgb::new(r, g, b)
}

fn from_unit(centroid: Srgb) -> Result<Color> {
    let channels = [centroid.red, centroid.green, centroid.blue];
    if channels.iter().any(|c| !c.is_finite()) {
        return Err(ChromataError::computation(format!(
            "non-finite centroid {channels:?}"
        )));
    }
    let [r, g, b] = channels.map(|c| (f64::from(c) * 255.0).round().clamp(0.0, 255.0) as u8);
    Ok(Color::new(r, g, b))
}

fn unit_distance(a: &Srgb, b: &Srgb) -> f64 {
    let dr = f64::from(a.red - b.red);
    let dg = f64::from(a.green - b.green);
    let db = f64::from(a.blue - b.blue);
    dr * dr + dg * dg + db * db
}

fn inertia(points: &[Srgb], centroids: &[Srgb]) -> f64 {
    points
        .iter()
        .map(|p| {
            centroids
                .iter()
                .map(|c| unit_distance(p, c))
                .fold(f64::INFINITY, f64::min)
        })
        .sum()
}

/// Count pixels per centroid. Equidistant pixels go to the lowest index.
fn assign(pixels: &[Pixel], centroids: &[Color]) -> Vec<u64> {
    let mut counts = vec![0u64; centroids.len()];
    for &px in pixels {
        let mut best_idx = 0;
        let mut best_dist = u32::MAX;
        for (idx, c) in centroids.iter().enumerate() {
            let dist = squared_distance(px, c.to_array());
            if dist < best_dist {
                best_dist = dist;
                best_idx = idx;
            }
        }
        if let Some(count) = counts.get_mut(best_idx) {
            *count += 1;
        }
    }
    counts
}

fn squared_distance(a: Pixel, b: Pixel) -> u32 {
    a.iter()
        .zip(b)
        .map(|(&x, y)| u32::from(x.abs_diff(y)).pow(2))
        .sum()
}
