//! Raster image types shared by every pipeline stage.
//!
//! A [`RasterImage`] is the immutable input/output of the engine. Stages work
//! on a [`PixelBuffer`], a mutable working copy they own exclusively and hand
//! back as a new `RasterImage` when they are done.

use std::sync::Arc;

use crate::error::{AugmentError, Result};

/// Number of interleaved channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// An RGBA8 raster with shared, read-only pixel storage.
///
/// Cloning is cheap: clones share the same pixel allocation, so one source
/// image can be handed to many concurrent `augment` calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Arc<[u8]>,
}

impl RasterImage {
    /// Create an image from RGBA pixel data in row-major order.
    ///
    /// # Errors
    ///
    /// Returns `AugmentError::DimensionMismatch` when `pixels.len()` is not
    /// `width * height * 4`.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        check_dimensions(width, height, pixels.len())?;
        Ok(Self {
            width,
            height,
            pixels: pixels.into(),
        })
    }

    /// Create an image filled with a single RGBA color.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let pixels: Vec<u8> = rgba
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * CHANNELS)
            .collect();
        Self {
            width,
            height,
            pixels: pixels.into(),
        }
    }

    /// Create a RasterImage from an image::RgbaImage.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw().into(),
        }
    }

    /// Convert to an image::RgbaImage for encoding.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.to_vec())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGBA samples, 4 bytes per pixel.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Copy the pixel data out into an owned vector.
    pub fn to_vec(&self) -> Vec<u8> {
        self.pixels.to_vec()
    }

    /// Get the RGBA value at (x, y), or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * CHANNELS;
        let px = &self.pixels[idx..idx + CHANNELS];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check if this image has no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Start a mutable working copy of this image.
    pub fn to_buffer(&self) -> PixelBuffer {
        PixelBuffer {
            width: self.width,
            height: self.height,
            data: self.pixels.to_vec(),
        }
    }
}

/// Mutable working copy of a [`RasterImage`] owned by a single stage.
#[derive(Debug)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a fully transparent buffer.
    pub fn transparent(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width as usize * height as usize * CHANNELS],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Write one RGBA value at (x, y). Coordinates must be in bounds.
    #[inline]
    pub fn put(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let idx = (y as usize * self.width as usize + x as usize) * CHANNELS;
        self.data[idx..idx + CHANNELS].copy_from_slice(&rgba);
    }

    /// Freeze the buffer into an immutable image.
    pub fn into_image(self) -> RasterImage {
        RasterImage {
            width: self.width,
            height: self.height,
            pixels: self.data.into(),
        }
    }
}

/// Verify that a buffer of `len` bytes holds exactly `width * height` RGBA pixels.
pub fn check_dimensions(width: u32, height: u32, len: usize) -> Result<()> {
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(CHANNELS));
    match expected {
        Some(expected) if expected == len => Ok(()),
        expected => Err(AugmentError::DimensionMismatch {
            width,
            height,
            expected: expected.unwrap_or(usize::MAX),
            actual: len,
        }),
    }
}
