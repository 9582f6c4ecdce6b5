//! Pixel buffer handed to the engine by an external decoder.

use std::fmt;

use crate::error::{ChromataError, Result};

/// One 8-bit RGB pixel, no alpha.
pub type Pixel = [u8; 3];

/// Read-only rectangular pixel buffer. `width × height == pixels.len()` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl PixelBuffer {
    /// Wrap decoded pixels, checking the declared dimensions against the data.
    pub fn new(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if expected != pixels.len() {
            return Err(ChromataError::invalid_input(format!(
                "buffer declares {width}x{height} ({expected} pixels) but holds {}",
                pixels.len()
            )));
        }
        Ok(Self { width, height, pixels })
    }

    /// Single-row buffer, handy when the caller only has a flat pixel list.
    pub fn from_pixels(pixels: Vec<Pixel>) -> Result<Self> {
        let width = u32::try_from(pixels.len())
            .map_err(|_| ChromataError::invalid_input("pixel list too long for one row"))?;
        let height = u32::from(width > 0);
        Self::new(width, height, pixels)
    }

    /// Adapt an already-decoded `image` crate buffer.
    pub fn from_rgb_image(img: &::image::RgbImage) -> Self {
        let pixels = img.pixels().map(|p| p.0).collect();
        Self {
            width: img.width(),
            height: img.height(),
            pixels,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major pixel data.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Total pixel count.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// `true` when the buffer holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

impl fmt::Display for PixelBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} RGB8", self.width, self.height)
    }
}
