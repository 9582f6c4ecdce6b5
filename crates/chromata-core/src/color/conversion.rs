//! Pure numeric conversions between RGB, CMYK, HSL and HSV, plus WCAG
//! luminance and contrast.
//!
//! Every conversion keeps full `f64` precision. Integer presentation values
//! come from the `to_rounded` methods, which all use the same rule: round
//! half away from zero, applied once at the output boundary. Rounding only
//! there is what keeps `hsl_to_rgb(rgb_to_hsl(c))` within one step of `c`.

use serde::{Deserialize, Serialize};

use super::Color;

/// WCAG / Rec. 709 luminance weights.
const LUMA_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Text on backgrounds brighter than this reads better in black.
const TEXT_LUMINANCE_THRESHOLD: f64 = 0.5;

/// CMYK in percent, each component in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

impl Cmyk {
    /// Integer percentages `[c, m, y, k]`.
    pub fn to_rounded(self) -> [u8; 4] {
        [self.c, self.m, self.y, self.k].map(round_percent)
    }
}

/// Hue in degrees `[0, 360)`, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Integer `[hue, saturation, lightness]`; a hue that rounds to 360 wraps to 0.
    pub fn to_rounded(self) -> [u16; 3] {
        [round_hue(self.h), u16::from(round_percent(self.s)), u16::from(round_percent(self.l))]
    }
}

/// Hue in degrees `[0, 360)`, saturation and value in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    /// Integer `[hue, saturation, value]`; a hue that rounds to 360 wraps to 0.
    pub fn to_rounded(self) -> [u16; 3] {
        [round_hue(self.h), u16::from(round_percent(self.s)), u16::from(round_percent(self.v))]
    }
}

/// Convert RGB to CMYK.
///
/// ```text
/// k = 1 − max(r', g', b')
/// c = (1 − r' − k) / (1 − k)      (likewise m, y)
/// ```
///
/// Pure black has no chromatic component and maps to `(0, 0, 0, 100)`.
pub fn rgb_to_cmyk(r: u8, g: u8, b: u8) -> Cmyk {
    if r == 0 && g == 0 && b == 0 {
        return Cmyk { c: 0.0, m: 0.0, y: 0.0, k: 100.0 };
    }

    let [rn, gn, bn] = normalize(r, g, b);
    let k = 1.0 - rn.max(gn).max(bn);
    let chroma = |v: f64| (1.0 - v - k) / (1.0 - k) * 100.0;

    Cmyk {
        c: chroma(rn),
        m: chroma(gn),
        y: chroma(bn),
        k: k * 100.0,
    }
}

/// Inverse of [`rgb_to_cmyk`]: `channel = 255 × (1 − c) × (1 − k)`.
pub fn cmyk_to_rgb(cmyk: Cmyk) -> Color {
    let k = clamp_percent(cmyk.k) / 100.0;
    let channel = |v: f64| to_channel((1.0 - clamp_percent(v) / 100.0) * (1.0 - k));
    Color::new(channel(cmyk.c), channel(cmyk.m), channel(cmyk.y))
}

/// Convert RGB to HSL. Achromatic colors get hue 0 and saturation 0.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let [rn, gn, bn] = normalize(r, g, b);
    let max = rn.max(gn).max(bn);
    let min = rn.min(gn).min(bn);
    let delta = max - min;
    let l = (max + min) / 2.0;

    if delta <= 0.0 {
        return Hsl { h: 0.0, s: 0.0, l: l * 100.0 };
    }

    let s = delta / (1.0 - (2.0 * l - 1.0).abs());
    Hsl {
        h: hue(rn, gn, bn, max, delta),
        s: s * 100.0,
        l: l * 100.0,
    }
}

/// Inverse of [`rgb_to_hsl`]. Hue is wrapped into `[0, 360)`; saturation and
/// lightness are clamped to `[0, 100]`.
pub fn hsl_to_rgb(hsl: Hsl) -> Color {
    let s = clamp_percent(hsl.s) / 100.0;
    let l = clamp_percent(hsl.l) / 100.0;
    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    from_chroma(hsl.h, chroma, l - chroma / 2.0)
}

/// Convert RGB to HSV. Achromatic colors get hue 0 and saturation 0.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let [rn, gn, bn] = normalize(r, g, b);
    let max = rn.max(gn).max(bn);
    let min = rn.min(gn).min(bn);
    let delta = max - min;

    if delta <= 0.0 {
        return Hsv { h: 0.0, s: 0.0, v: max * 100.0 };
    }

    Hsv {
        h: hue(rn, gn, bn, max, delta),
        s: delta / max * 100.0,
        v: max * 100.0,
    }
}

/// Inverse of [`rgb_to_hsv`].
pub fn hsv_to_rgb(hsv: Hsv) -> Color {
    let s = clamp_percent(hsv.s) / 100.0;
    let v = clamp_percent(hsv.v) / 100.0;
    let chroma = v * s;
    from_chroma(hsv.h, chroma, v - chroma)
}

/// WCAG 2.1 relative luminance in `[0, 1]`.
///
/// ```text
/// c' ≤ 0.03928 → c' / 12.92
/// c' > 0.03928 → ((c' + 0.055) / 1.055) ^ 2.4
/// L = 0.2126 R + 0.7152 G + 0.0722 B
/// ```
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    let linear = normalize(r, g, b).map(|c| {
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    });
    linear
        .iter()
        .zip(LUMA_WEIGHTS)
        .map(|(c, w)| c * w)
        .sum()
}

/// WCAG contrast ratio `(L_lighter + 0.05) / (L_darker + 0.05)`, in `[1, 21]`.
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = a.luminance();
    let lb = b.luminance();
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Black for bright backgrounds, white otherwise. A hard threshold, no blending.
pub fn contrast_text_color(r: u8, g: u8, b: u8) -> Color {
    if relative_luminance(r, g, b) > TEXT_LUMINANCE_THRESHOLD {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

fn normalize(r: u8, g: u8, b: u8) -> [f64; 3] {
    [r, g, b].map(|c| f64::from(c) / 255.0)
}

fn hue(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    let sector = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    (sector * 60.0).rem_euclid(360.0)
}

/// Shared tail of the HSL/HSV inverses: place `chroma` on the hue sextant,
/// then lift every channel by `offset`.
fn from_chroma(hue: f64, chroma: f64, offset: f64) -> Color {
    let sector = hue.rem_euclid(360.0) / 60.0;
    let x = chroma * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());

    let (r, g, b) = match sector as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    Color::new(
        to_channel(r + offset),
        to_channel(g + offset),
        to_channel(b + offset),
    )
}

fn to_channel(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

fn clamp_percent(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 100.0) }
}

fn round_percent(v: f64) -> u8 {
    clamp_percent(v).round() as u8
}

fn round_hue(h: f64) -> u16 {
    (h.rem_euclid(360.0).round() as u16) % 360
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn max_channel_diff(a: Color, b: Color) -> u8 {
        a.to_array()
            .iter()
            .zip(b.to_array())
            .map(|(x, y)| x.abs_diff(y))
            .max()
            .unwrap_or(0)
    }

    /// Coarse sweep of the RGB cube, including both ends of every axis.
    fn sample_cube() -> impl Iterator<Item = Color> {
        let steps: Vec<u8> = (0..=255u16).step_by(15).map(|v| v as u8).collect();
        let s2 = steps.clone();
        let s3 = steps.clone();
        steps.into_iter().flat_map(move |r| {
            let s3 = s3.clone();
            s2.clone()
                .into_iter()
                .flat_map(move |g| s3.clone().into_iter().map(move |b| Color::new(r, g, b)))
        })
    }

    #[test]
    fn test_cmyk_black_is_exact() {
        let cmyk = rgb_to_cmyk(0, 0, 0);
        assert_eq!(cmyk.to_rounded(), [0, 0, 0, 100]);
        assert_eq!(cmyk_to_rgb(cmyk), Color::BLACK);
    }

    #[test]
    fn test_cmyk_primaries() {
        assert_eq!(rgb_to_cmyk(255, 0, 0).to_rounded(), [0, 100, 100, 0]);
        assert_eq!(rgb_to_cmyk(255, 255, 255).to_rounded(), [0, 0, 0, 0]);
        assert_eq!(rgb_to_cmyk(0, 128, 255).to_rounded(), [100, 50, 0, 0]);
    }

    #[test]
    fn test_cmyk_roundtrip_within_one() {
        for color in sample_cube() {
            let back = cmyk_to_rgb(color.to_cmyk());
            assert!(max_channel_diff(color, back) <= 1, "{color} -> {back}");
        }
    }

    #[test]
    fn test_hsl_known_values() {
        assert_eq!(rgb_to_hsl(255, 0, 0).to_rounded(), [0, 100, 50]);
        assert_eq!(rgb_to_hsl(0, 255, 0).to_rounded(), [120, 100, 50]);
        assert_eq!(rgb_to_hsl(0, 0, 255).to_rounded(), [240, 100, 50]);
        assert_eq!(rgb_to_hsl(128, 128, 128).to_rounded(), [0, 0, 50]);
        assert_eq!(rgb_to_hsl(255, 0, 255).to_rounded(), [300, 100, 50]);
    }

    #[test]
    fn test_hue_rounding_wraps_to_zero() {
        let hsl = Hsl { h: 359.7, s: 50.0, l: 50.0 };
        assert_eq!(hsl.to_rounded()[0], 0);
    }

    #[test]
    fn test_hsl_roundtrip_within_one() {
        for color in sample_cube() {
            let back = hsl_to_rgb(color.to_hsl());
            assert!(max_channel_diff(color, back) <= 1, "{color} -> {back}");
        }
    }

    #[test]
    fn test_hsv_roundtrip_within_one() {
        for color in sample_cube() {
            let back = hsv_to_rgb(color.to_hsv());
            assert!(max_channel_diff(color, back) <= 1, "{color} -> {back}");
        }
    }

    #[test]
    fn test_hsv_known_values() {
        assert_eq!(rgb_to_hsv(255, 0, 0).to_rounded(), [0, 100, 100]);
        assert_eq!(rgb_to_hsv(0, 0, 0).to_rounded(), [0, 0, 0]);
        assert_eq!(rgb_to_hsv(0, 128, 0).to_rounded(), [120, 100, 50]);
    }

    #[test]
    fn test_hsl_to_rgb_wraps_and_clamps() {
        let wrapped = hsl_to_rgb(Hsl { h: 480.0, s: 100.0, l: 50.0 });
        assert_eq!(wrapped, hsl_to_rgb(Hsl { h: 120.0, s: 100.0, l: 50.0 }));
        let negative = hsl_to_rgb(Hsl { h: -120.0, s: 100.0, l: 50.0 });
        assert_eq!(negative, Color::new(0, 0, 255));
        let clamped = hsl_to_rgb(Hsl { h: 0.0, s: 150.0, l: 120.0 });
        assert_eq!(clamped, Color::WHITE);
    }

    #[test]
    fn test_luminance_bounds() {
        assert!(relative_luminance(0, 0, 0).abs() < EPSILON);
        assert!((relative_luminance(255, 255, 255) - 1.0).abs() < EPSILON);
        for color in sample_cube() {
            let l = color.luminance();
            assert!((0.0..=1.0 + EPSILON).contains(&l), "{color}: {l}");
        }
    }

    #[test]
    fn test_contrast_white_black_is_max() {
        let ratio = contrast_ratio(Color::WHITE, Color::BLACK);
        assert!((ratio - 21.0).abs() < 1e-6, "ratio = {ratio}");
    }

    #[test]
    fn test_contrast_is_symmetric_and_reflexive() {
        let a = Color::new(12, 200, 99);
        let b = Color::new(240, 17, 64);
        assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
        assert!((contrast_ratio(a, a) - 1.0).abs() < EPSILON);
        assert!(contrast_ratio(a, b) >= 1.0);
    }

    #[test]
    fn test_contrast_text_color_is_binary() {
        assert_eq!(contrast_text_color(255, 255, 255), Color::BLACK);
        assert_eq!(contrast_text_color(255, 255, 0), Color::BLACK);
        assert_eq!(contrast_text_color(0, 0, 0), Color::WHITE);
        assert_eq!(contrast_text_color(0, 0, 255), Color::WHITE);
        // Mid gray has luminance ~0.216, well under the threshold.
        assert_eq!(contrast_text_color(128, 128, 128), Color::WHITE);
    }
}
