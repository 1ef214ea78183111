//! Geometric transforms: rotation, flips and centered crop.
//!
//! Every transform here keeps the canvas at the source dimensions. Content
//! moved past an edge is clipped; uncovered canvas is fully transparent.
//!
//! # Transform Order
//!
//! Geometry is composed in a fixed order, independent of which control the
//! user touched last:
//! 1. Rotation about the canvas center
//! 2. Horizontal flip, then vertical flip
//! 3. Crop (centered window stretched to the canvas)
//!
//! All three are folded into one destination-to-source [`Affine`] matrix and
//! the source is sampled once.
//!
//! # Coordinate System
//!
//! - Rotation angles are in degrees, positive = clockwise on screen
//! - Pixel `(x, y)` is sampled at its center `(x + 0.5, y + 0.5)`
//! - Origin is top-left corner

mod affine;
mod crop;
mod rotation;

pub use affine::Affine;
pub use crop::{apply_crop, CropWindow};
pub use rotation::{apply_rotation, rotation_flip_matrix};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::raster::{PixelBuffer, RasterImage};
use rotation::{sample_bilinear, sample_nearest};

/// Interpolation filter for resampling operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InterpolationFilter {
    /// Nearest neighbour - exact pixel copies, hard edges.
    #[default]
    Nearest,
    /// Bilinear interpolation - smoother rotations and stretches.
    Bilinear,
}

/// Build the full destination-to-source matrix for one geometry request.
///
/// The crop window is applied last in destination space, so it selects a
/// region of the already rotated and flipped canvas.
pub fn geometry_matrix(
    width: u32,
    height: u32,
    flip_horizontal: bool,
    flip_vertical: bool,
    rotation_degrees: f64,
    crop_percent: f64,
) -> Affine {
    let rotate_flip =
        rotation_flip_matrix(width, height, rotation_degrees, flip_horizontal, flip_vertical);
    if crop_percent <= 0.0 {
        return rotate_flip;
    }
    let window = CropWindow::from_percent(width, height, crop_percent);
    rotate_flip.then(&window.to_matrix(width, height))
}

/// Apply flips, rotation and crop to an image in a single resampling pass.
///
/// # Arguments
///
/// * `image` - Source image (never modified)
/// * `flip_horizontal` / `flip_vertical` - Mirror about the canvas center
/// * `rotation_degrees` - Clockwise rotation about the canvas center
/// * `crop_percent` - Centered crop, 0 disables cropping
/// * `filter` - Sampling method
///
/// # Returns
///
/// New `RasterImage` with the source dimensions.
pub fn apply_transform(
    image: &RasterImage,
    flip_horizontal: bool,
    flip_vertical: bool,
    rotation_degrees: f64,
    crop_percent: f64,
    filter: InterpolationFilter,
) -> RasterImage {
    let matrix = geometry_matrix(
        image.width(),
        image.height(),
        flip_horizontal,
        flip_vertical,
        rotation_degrees,
        crop_percent,
    );
    // Fast path: nothing moves
    if matrix.is_identity() {
        trace!("geometry is identity, skipping resample");
        return image.clone();
    }
    resample(image, &matrix, filter)
}

/// Fill a new canvas by sampling `image` through a destination-to-source matrix.
pub(crate) fn resample(
    image: &RasterImage,
    matrix: &Affine,
    filter: InterpolationFilter,
) -> RasterImage {
    let (width, height) = (image.width(), image.height());
    let mut output = PixelBuffer::transparent(width, height);

    for dst_y in 0..height {
        for dst_x in 0..width {
            let (src_x, src_y) = matrix.apply(dst_x as f64 + 0.5, dst_y as f64 + 0.5);
            let pixel = match filter {
                InterpolationFilter::Nearest => sample_nearest(image, src_x, src_y),
                InterpolationFilter::Bilinear => sample_bilinear(image, src_x, src_y),
            };
            output.put(dst_x, dst_y, pixel);
        }
    }

    output.into_image()
}


// ============================================================================
// Property-Based Tests
// ============================================================================
