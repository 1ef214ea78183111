//! Center-pivot rotation and flips on a fixed-size canvas.
//!
//! The forward canvas transform is built the way a drawing context would:
//! ```text
//! translate(cx, cy) -> rotate(θ) -> scale(-1, 1) if flip_h
//!                   -> scale(1, -1) if flip_v -> translate(-cx, -cy)
//! ```
//! The engine needs the reverse direction (destination pixel to source
//! sample), which is the inverse of that chain:
//! ```text
//! src = T(c) · Sy · Sx · R(-θ) · T(-c) · dst
//! ```
//! The canvas keeps the source dimensions. Content rotated past the edges is
//! clipped and uncovered corners become transparent.

use super::affine::Affine;
use super::{resample, InterpolationFilter};
use crate::raster::RasterImage;

/// Build the destination-to-source matrix for a rotation and flips about the
/// canvas center.
///
/// # Arguments
///
/// * `width`, `height` - Canvas dimensions (same as the source image)
/// * `angle_degrees` - Clockwise rotation in degrees
/// * `flip_horizontal` - Mirror left-right
/// * `flip_vertical` - Mirror top-bottom
pub fn rotation_flip_matrix(
    width: u32,
    height: u32,
    angle_degrees: f64,
    flip_horizontal: bool,
    flip_vertical: bool,
) -> Affine {
    let cx = width as f64 / 2.0;
    let cy = height as f64 / 2.0;
    let sx = if flip_horizontal { -1.0 } else { 1.0 };
    let sy = if flip_vertical { -1.0 } else { 1.0 };

    // Flips are their own inverse and commute with each other.
    Affine::translate(cx, cy)
        .then(&Affine::scale(sx, sy))
        .then(&Affine::rotate_degrees(-angle_degrees))
        .then(&Affine::translate(-cx, -cy))
}

/// Rotate an image about its center, keeping the canvas size.
///
/// # Arguments
///
/// * `image` - Source image to rotate
/// * `angle_degrees` - Rotation angle in degrees (positive = clockwise)
/// * `filter` - Sampling method
///
/// # Returns
///
/// New `RasterImage` with the same dimensions as the source.
pub fn apply_rotation(
    image: &RasterImage,
    angle_degrees: f64,
    filter: InterpolationFilter,
) -> RasterImage {
    if angle_degrees.rem_euclid(360.0) == 0.0 {
        return image.clone();
    }
    let matrix = rotation_flip_matrix(image.width(), image.height(), angle_degrees, false, false);
    resample(image, &matrix, filter)
}

/// Get a pixel as [f64; 4] from an image at the given coordinates.
#[inline]
fn get_pixel_f64(image: &RasterImage, px: usize, py: usize) -> [f64; 4] {
    let idx = (py * image.width() as usize + px) * 4;
    let p = image.pixels();
    [
        p[idx] as f64,
        p[idx + 1] as f64,
        p[idx + 2] as f64,
        p[idx + 3] as f64,
    ]
}

/// Sample the pixel whose area contains `(x, y)`.
///
/// Coordinates are continuous: pixel `i` covers `[i, i + 1)`. Outside the
/// image the result is fully transparent.
pub(crate) fn sample_nearest(image: &RasterImage, x: f64, y: f64) -> [u8; 4] {
    let (w, h) = (image.width() as f64, image.height() as f64);
    if !(x >= 0.0 && x < w && y >= 0.0 && y < h) {
        return [0, 0, 0, 0];
    }
    image
        .pixel(x.floor() as u32, y.floor() as u32)
        .unwrap_or([0, 0, 0, 0])
}

/// Sample a pixel using bilinear interpolation.
///
/// Bilinear interpolation weights the 4 pixel centers nearest to `(x, y)`.
/// Neighbours past the border repeat the edge pixel; points outside the
/// image itself are fully transparent.
pub(crate) fn sample_bilinear(image: &RasterImage, x: f64, y: f64) -> [u8; 4] {
    let (w, h) = (image.width() as f64, image.height() as f64);
    if !(x >= 0.0 && x < w && y >= 0.0 && y < h) {
        return [0, 0, 0, 0];
    }

    // Continuous coordinates relative to pixel centers
    let u = (x - 0.5).max(0.0);
    let v = (y - 0.5).max(0.0);
    let max_x = image.width() as usize - 1;
    let max_y = image.height() as usize - 1;

    let x0 = (u.floor() as usize).min(max_x);
    let y0 = (v.floor() as usize).min(max_y);
    let x1 = (x0 + 1).min(max_x);
    let y1 = (y0 + 1).min(max_y);

    // Fractional distances
    let fx = u - x0 as f64;
    let fy = v - y0 as f64;

    let p00 = get_pixel_f64(image, x0, y0);
    let p10 = get_pixel_f64(image, x1, y0);
    let p01 = get_pixel_f64(image, x0, y1);
    let p11 = get_pixel_f64(image, x1, y1);

    let mut result = [0u8; 4];
    for i in 0..4 {
        let v = p00[i] * (1.0 - fx) * (1.0 - fy)
            + p10[i] * fx * (1.0 - fy)
            + p01[i] * (1.0 - fx) * fy
            + p11[i] * fx * fy;
        result[i] = v.clamp(0.0, 255.0).round() as u8;
    }

    result
}
