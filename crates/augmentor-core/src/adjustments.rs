//! Color adjustment algorithms
//!
//! Applies brightness, contrast and saturation to RGBA pixel data. Alpha is
//! never touched.
//!
//! ## Adjustment Order
//! 1. Brightness: `c * brightness / 100`
//! 2. Contrast: `(c - 128) * contrast / 100 + 128`
//! 3. Saturation: `L + (c - L) * saturation / 100`, with `L` the BT.601 luma
//!
//! Every step clamps to 0-255. A step at its neutral value (100) is skipped
//! entirely, and the channel is rounded once after the last step, so
//! repeated application with neutral settings never drifts.

use crate::luminance::calculate_luma;
use crate::params::{ParameterSet, NEUTRAL_PERCENT};
use crate::raster::RasterImage;

/// Mid-gray pivot for contrast.
const CONTRAST_PIVOT: f32 = 128.0;

/// The photometric subset of a [`ParameterSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorAdjustments {
    /// Brightness in percent (100 = unchanged)
    pub brightness: i32,
    /// Contrast in percent (100 = unchanged)
    pub contrast: i32,
    /// Saturation in percent (100 = unchanged)
    pub saturation: i32,
}

impl Default for ColorAdjustments {
    fn default() -> Self {
        Self {
            brightness: NEUTRAL_PERCENT,
            contrast: NEUTRAL_PERCENT,
            saturation: NEUTRAL_PERCENT,
        }
    }
}

impl ColorAdjustments {
    pub fn new(brightness: i32, contrast: i32, saturation: i32) -> Self {
        Self {
            brightness,
            contrast,
            saturation,
        }
    }

    pub fn from_params(params: &ParameterSet) -> Self {
        Self::new(params.brightness, params.contrast, params.saturation)
    }

    /// Check if every adjustment is at its neutral value
    pub fn is_neutral(&self) -> bool {
        *self == Self::default()
    }
}

/// Apply color adjustments to an image, returning a new image.
///
/// # Example
/// ```
/// use augmentor_core::adjustments::{adjust, ColorAdjustments};
/// use augmentor_core::RasterImage;
///
/// let gray = RasterImage::filled(2, 2, [128, 128, 128, 255]);
/// let brighter = adjust(&gray, &ColorAdjustments::new(150, 100, 100));
/// assert_eq!(brighter.pixel(0, 0), Some([192, 192, 192, 255]));
/// ```
pub fn adjust(image: &RasterImage, adjustments: &ColorAdjustments) -> RasterImage {
    if adjustments.is_neutral() {
        return image.clone();
    }
    let mut buffer = image.to_buffer();
    apply_color_adjustments(buffer.data_mut(), adjustments);
    buffer.into_image()
}

/// Apply color adjustments to RGBA pixel data in place.
///
/// # Arguments
/// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
/// * `adjustments` - The adjustment values to apply
pub fn apply_color_adjustments(pixels: &mut [u8], adjustments: &ColorAdjustments) {
    // Early exit if no adjustments
    if adjustments.is_neutral() {
        return;
    }

    for chunk in pixels.chunks_exact_mut(4) {
        let mut r = chunk[0] as f32;
        let mut g = chunk[1] as f32;
        let mut b = chunk[2] as f32;

        // Apply adjustments in order
        (r, g, b) = apply_brightness(r, g, b, adjustments.brightness);
        (r, g, b) = apply_contrast(r, g, b, adjustments.contrast);
        (r, g, b) = apply_saturation(r, g, b, adjustments.saturation);

        chunk[0] = to_channel(r);
        chunk[1] = to_channel(g);
        chunk[2] = to_channel(b);
    }
}

#[inline]
fn to_channel(v: f32) -> u8 {
    v.clamp(0.0, 255.0).round() as u8
}

#[inline]
fn clamp_channel(v: f32) -> f32 {
    v.clamp(0.0, 255.0)
}

/// Apply brightness adjustment.
///
/// Formula: `output = input * brightness / 100`
#[inline]
fn apply_brightness(r: f32, g: f32, b: f32, brightness: i32) -> (f32, f32, f32) {
    if brightness == NEUTRAL_PERCENT {
        return (r, g, b);
    }
    let factor = brightness as f32 / 100.0;
    (
        clamp_channel(r * factor),
        clamp_channel(g * factor),
        clamp_channel(b * factor),
    )
}

/// Apply contrast adjustment.
///
/// Formula: `output = (input - 128) * contrast / 100 + 128`
#[inline]
fn apply_contrast(r: f32, g: f32, b: f32, contrast: i32) -> (f32, f32, f32) {
    if contrast == NEUTRAL_PERCENT {
        return (r, g, b);
    }
    let factor = contrast as f32 / 100.0;
    (
        clamp_channel((r - CONTRAST_PIVOT) * factor + CONTRAST_PIVOT),
        clamp_channel((g - CONTRAST_PIVOT) * factor + CONTRAST_PIVOT),
        clamp_channel((b - CONTRAST_PIVOT) * factor + CONTRAST_PIVOT),
    )
}

/// Apply saturation adjustment.
///
/// - Below 100 = move toward grayscale (0 = fully gray)
/// - Above 100 = push channels away from luma
#[inline]
fn apply_saturation(r: f32, g: f32, b: f32, saturation: i32) -> (f32, f32, f32) {
    if saturation == NEUTRAL_PERCENT {
        return (r, g, b);
    }
    let luma = calculate_luma(r, g, b);
    let factor = saturation as f32 / 100.0;
    (
        clamp_channel(luma + (r - luma) * factor),
        clamp_channel(luma + (g - luma) * factor),
        clamp_channel(luma + (b - luma) * factor),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to create a pixel from RGBA values
    fn pixel(r: u8, g: u8, b: u8, a: u8) -> Vec<u8> {
        vec![r, g, b, a]
    }

    /// Helper to apply adjustments and return resulting pixel
    fn apply(pixels: &[u8], brightness: i32, contrast: i32, saturation: i32) -> Vec<u8> {
        let mut result = pixels.to_vec();
        apply_color_adjustments(
            &mut result,
            &ColorAdjustments::new(brightness, contrast, saturation),
        );
        result
    }

    // ===== Identity Tests =====

    #[test]
    fn test_identity_no_adjustments() {
        let pixels = pixel(128, 64, 192, 200);
        assert_eq!(apply(&pixels, 100, 100, 100), pixels);
        assert!(ColorAdjustments::default().is_neutral());
    }

    #[test]
    fn test_identity_extremes() {
        for p in [pixel(0, 0, 0, 0), pixel(255, 255, 255, 255)] {
            assert_eq!(apply(&p, 100, 100, 100), p);
        }
    }

    #[test]
    fn test_neutral_steps_do_not_drift() {
        // Contrast alone must not round-trip through brightness/saturation
        let pixels = pixel(37, 101, 219, 255);
        let once = apply(&pixels, 100, 150, 100);
        let expected: Vec<u8> = [37.0f32, 101.0, 219.0]
            .iter()
            .map(|&c| to_channel((c - 128.0) * 1.5 + 128.0))
            .chain(std::iter::once(255))
            .collect();
        assert_eq!(once, expected);
    }

    // ===== Brightness Tests =====

    #[test]
    fn test_brightness_gray_150() {
        assert_eq!(apply(&pixel(128, 128, 128, 255), 150, 100, 100), pixel(192, 192, 192, 255));
    }

    #[test]
    fn test_brightness_clips_at_white() {
        assert_eq!(apply(&pixel(200, 130, 10, 255), 200, 100, 100), pixel(255, 255, 20, 255));
    }

    #[test]
    fn test_brightness_zero_is_black() {
        assert_eq!(apply(&pixel(200, 130, 10, 77), 0, 100, 100), pixel(0, 0, 0, 77));
    }

    #[test]
    fn test_brightness_half() {
        assert_eq!(apply(&pixel(100, 51, 2, 255), 50, 100, 100), pixel(50, 26, 1, 255));
    }

    // ===== Contrast Tests =====

    #[test]
    fn test_contrast_double() {
        let result = apply(&pixel(64, 128, 192, 255), 100, 200, 100);
        assert_eq!(result, pixel(0, 128, 255, 255));
    }

    #[test]
    fn test_contrast_zero_is_mid_gray() {
        let result = apply(&pixel(0, 77, 255, 255), 100, 0, 100);
        assert_eq!(result, pixel(128, 128, 128, 255));
    }

    #[test]
    fn test_contrast_reduce_moves_toward_pivot() {
        let result = apply(&pixel(0, 128, 255, 255), 100, 50, 100);
        assert_eq!(result, pixel(64, 128, 192, 255));
    }

    // ===== Saturation Tests =====

    #[test]
    fn test_saturation_zero_is_grayscale() {
        let result = apply(&pixel(255, 0, 0, 255), 100, 100, 0);
        // 0.299 * 255 = 76.245
        assert_eq!(result, pixel(76, 76, 76, 255));
    }

    #[test]
    fn test_saturation_double() {
        let result = apply(&pixel(100, 150, 200, 255), 100, 100, 200);
        // luma = 140.75
        assert_eq!(result, pixel(59, 159, 255, 255));
    }

    #[test]
    fn test_saturation_leaves_gray_alone() {
        let gray = pixel(90, 90, 90, 255);
        assert_eq!(apply(&gray, 100, 100, 0), gray);
        assert_eq!(apply(&gray, 100, 100, 200), gray);
    }

    // ===== Ordering & Alpha =====

    #[test]
    fn test_brightness_before_contrast() {
        // 100 * 2 = 200, then (200 - 128) * 0.5 + 128 = 164
        assert_eq!(apply(&pixel(100, 100, 100, 255), 200, 50, 100), pixel(164, 164, 164, 255));
    }

    #[test]
    fn test_alpha_untouched() {
        let result = apply(&pixel(10, 20, 30, 42), 180, 20, 150);
        assert_eq!(result[3], 42);
    }

    #[test]
    fn test_multiple_pixels() {
        let mut pixels = vec![100, 100, 100, 255, 20, 40, 60, 128];
        apply_color_adjustments(&mut pixels, &ColorAdjustments::new(150, 100, 100));
        assert_eq!(pixels, vec![150, 150, 150, 255, 30, 60, 90, 128]);
    }

    #[test]
    fn test_empty_pixels() {
        let mut pixels: Vec<u8> = vec![];
        apply_color_adjustments(&mut pixels, &ColorAdjustments::new(150, 50, 0));
        assert!(pixels.is_empty());
    }

    #[test]
    fn test_adjust_returns_new_image() {
        let img = RasterImage::filled(2, 2, [128, 128, 128, 255]);
        let result = adjust(&img, &ColorAdjustments::new(150, 100, 100));
        assert_eq!(img.pixel(0, 0), Some([128, 128, 128, 255]));
        assert!(result.pixels().chunks_exact(4).all(|p| p == [192, 192, 192, 255]));
    }

    #[test]
    fn test_from_params() {
        let params = ParameterSet::new().with_contrast(80).with_saturation(120);
        assert_eq!(
            ColorAdjustments::from_params(&params),
            ColorAdjustments::new(100, 80, 120)
        );
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Alpha survives any in-range adjustment.
        #[test]
        fn prop_alpha_preserved(
            rgba in any::<[u8; 4]>(),
            brightness in 0i32..=200,
            contrast in 0i32..=200,
            saturation in 0i32..=200,
        ) {
            let mut pixels = rgba.to_vec();
            apply_color_adjustments(&mut pixels, &ColorAdjustments::new(brightness, contrast, saturation));
            prop_assert_eq!(pixels[3], rgba[3]);
        }

        /// Property: Brightness is monotonic in its parameter.
        #[test]
        fn prop_brightness_monotonic(
            c in any::<u8>(),
            lo in 0i32..=200,
            hi in 0i32..=200,
        ) {
            let (lo, hi) = (lo.min(hi), lo.max(hi));
            let mut a = vec![c, c, c, 255];
            let mut b = vec![c, c, c, 255];
            apply_color_adjustments(&mut a, &ColorAdjustments::new(lo, 100, 100));
            apply_color_adjustments(&mut b, &ColorAdjustments::new(hi, 100, 100));
            prop_assert!(a[0] <= b[0]);
        }

        /// Property: Re-applying the same adjustment to the same input is stable.
        #[test]
        fn prop_deterministic(
            rgba in any::<[u8; 4]>(),
            brightness in 0i32..=200,
            contrast in 0i32..=200,
            saturation in 0i32..=200,
        ) {
            let adj = ColorAdjustments::new(brightness, contrast, saturation);
            let mut a = rgba.to_vec();
            let mut b = rgba.to_vec();
            apply_color_adjustments(&mut a, &adj);
            apply_color_adjustments(&mut b, &adj);
            prop_assert_eq!(a, b);
        }
    }
}
