//! WASM-compatible wrapper types for image data.
//!
//! This module provides a JavaScript-friendly image type that wraps the core
//! `RasterImage`, handling the conversion between Rust and JavaScript data
//! representations.

use augmentor_core::{RasterImage, Result};
use wasm_bindgen::prelude::*;

/// An RGBA image wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is made
/// to JavaScript memory as a `Uint8Array`, matching the layout of a canvas
/// `ImageData.data` buffer.
///
/// The `free()` method can be called to explicitly release WASM memory, but this is
/// optional as wasm-bindgen's finalizer will handle cleanup automatically.
#[wasm_bindgen]
pub struct JsRasterImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsRasterImage {
    /// Create a new JsRasterImage from dimensions and pixel data.
    ///
    /// The buffer length is checked when the image is augmented or encoded,
    /// not here.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsRasterImage {
        JsRasterImage {
            width,
            height,
            pixels,
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGBA pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsRasterImage {
    /// Wrap a core image for return to JavaScript.
    pub(crate) fn from_raster(img: RasterImage) -> Self {
        Self {
            width: img.width(),
            height: img.height(),
            pixels: img.to_vec(),
        }
    }

    /// Convert to a core image, validating the buffer length.
    ///
    /// Note: This clones the pixel data.
    pub(crate) fn to_raster(&self) -> Result<RasterImage> {
        RasterImage::new(self.width, self.height, self.pixels.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use augmentor_core::AugmentError;

    #[test]
    fn test_js_raster_image_creation() {
        let pixels = vec![255u8; 100 * 100 * 4];
        let img = JsRasterImage::new(100, 100, pixels);

        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 100);
        assert_eq!(img.byte_length(), 40000);
    }

    #[test]
    fn test_js_raster_image_pixels() {
        let pixels = vec![1, 2, 3, 4, 5, 6, 7, 8];
        let img = JsRasterImage::new(2, 1, pixels.clone());
        assert_eq!(img.pixels(), pixels);
    }

    #[test]
    fn test_raster_round_trip() {
        let core = RasterImage::filled(3, 2, [9, 8, 7, 6]);
        let js = JsRasterImage::from_raster(core.clone());
        assert_eq!(js.to_raster().unwrap(), core);
    }

    #[test]
    fn test_to_raster_checks_length() {
        let img = JsRasterImage::new(2, 2, vec![0; 15]);
        assert!(matches!(
            img.to_raster(),
            Err(AugmentError::DimensionMismatch {
                expected: 16,
                actual: 15,
                ..
            })
        ));
    }
}
