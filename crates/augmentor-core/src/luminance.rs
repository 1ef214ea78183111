//! Luma calculation using ITU-R BT.601 coefficients.
//!
//! The saturation adjustment pulls each channel toward (or pushes it away
//! from) this luma value.

/// ITU-R BT.601 coefficient for red channel in luma calculation.
pub const LUMA_R: f32 = 0.299;

/// ITU-R BT.601 coefficient for green channel in luma calculation.
pub const LUMA_G: f32 = 0.587;

/// ITU-R BT.601 coefficient for blue channel in luma calculation.
pub const LUMA_B: f32 = 0.114;

/// Calculate luma from channel values on the 0-255 scale.
///
/// Inputs may be fractional (intermediate values inside the color
/// adjuster); the result is on the same scale and not rounded.
#[inline]
pub fn calculate_luma(r: f32, g: f32, b: f32) -> f32 {
    LUMA_R * r + LUMA_G * g + LUMA_B * b
}
