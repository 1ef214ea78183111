//! Centered crop, stretched back to the full canvas.
//!
//! A crop of `p` percent keeps the central `(100 - p)` percent of each axis
//! and scales it up to the canvas size. Because the scale factor is the same
//! on both axes, the crop commutes with center-pivot rotation and flips.
//!
//! # Coordinate System
//!
//! - Window coordinates are in canvas pixels, origin top-left
//! - `crop_percent = 0` means no crop at all (the window is the whole canvas)
//!
//! # Example
//!
//! ```ignore
//! // Keep the center half of a 4x4 image and stretch it to 4x4
//! let cropped = apply_crop(&image, 50.0, InterpolationFilter::Nearest);
//! ```

use super::affine::Affine;
use super::{resample, InterpolationFilter};
use crate::raster::RasterImage;

/// Source rectangle selected by a centered crop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropWindow {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CropWindow {
    /// Compute the window for `crop_percent` on a `width` x `height` canvas.
    ///
    /// ```text
    /// amount = crop_percent / 100
    /// window = (W·amount/2, H·amount/2, W·(1 - amount), H·(1 - amount))
    /// ```
    pub fn from_percent(width: u32, height: u32, crop_percent: f64) -> Self {
        let amount = crop_percent / 100.0;
        let (w, h) = (width as f64, height as f64);
        Self {
            x: w * amount / 2.0,
            y: h * amount / 2.0,
            width: w * (1.0 - amount),
            height: h * (1.0 - amount),
        }
    }

    /// Matrix mapping canvas coordinates into this window.
    ///
    /// The window is stretched to fill a `canvas_width` x `canvas_height`
    /// canvas, so canvas `(0, 0)` maps to the window's top-left corner and
    /// the canvas' bottom-right corner to the window's bottom-right.
    pub fn to_matrix(&self, canvas_width: u32, canvas_height: u32) -> Affine {
        if canvas_width == 0 || canvas_height == 0 {
            return Affine::IDENTITY;
        }
        Affine::translate(self.x, self.y).then(&Affine::scale(
            self.width / canvas_width as f64,
            self.height / canvas_height as f64,
        ))
    }
}

/// Crop the center of an image and stretch it to the original size.
///
/// # Arguments
///
/// * `image` - Source image
/// * `crop_percent` - Percentage trimmed from the image, split evenly
///   between opposite edges (0 keeps the image untouched)
/// * `filter` - Sampling method used for the stretch
///
/// # Returns
///
/// New `RasterImage` with the same dimensions as the source.
pub fn apply_crop(
    image: &RasterImage,
    crop_percent: f64,
    filter: InterpolationFilter,
) -> RasterImage {
    // Fast path: no crop returns a clone
    if crop_percent <= 0.0 {
        return image.clone();
    }
    let window = CropWindow::from_percent(image.width(), image.height(), crop_percent);
    resample(image, &window.to_matrix(image.width(), image.height()), filter)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
