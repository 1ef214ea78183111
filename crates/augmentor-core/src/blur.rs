//! Separable Gaussian blur.
//!
//! The standard deviation equals the requested radius in pixels, the same
//! reading a CSS `blur(<radius>px)` filter uses. The kernel extends to
//! `ceil(3σ)` taps on each side and is applied as a horizontal pass followed
//! by a vertical pass. Samples past the border repeat the edge pixel.
//!
//! A pass never needs more than `length - 1` taps per side: any offset that
//! far out lands on the edge pixel from every position. Longer kernels are
//! cut there and the cut-off weight is added to the outermost taps, which
//! gives the same result as the full kernel. Radii below [`MIN_SIGMA`] spread
//! no measurable weight to the neighbours and leave the image unchanged.
//!
//! Color channels are blurred premultiplied by alpha so that transparent
//! pixels (e.g. corners uncovered by a rotation) do not bleed black into
//! their neighbours. A pixel whose blurred alpha is 0 has no color left to
//! recover and comes out as `[0, 0, 0, 0]`, even if the source stored RGB
//! values under zero alpha.

use tracing::trace;

use crate::error::{AugmentError, Result};
use crate::raster::{RasterImage, CHANNELS};

/// Smallest standard deviation that still moves weight off the center tap.
///
/// At this sigma the first neighbour weight is `exp(-500000)`, far below `f32`
/// resolution.
pub const MIN_SIGMA: f32 = 1e-3;

/// Tail lengths up to this many taps are summed exactly.
const EXACT_TAIL_TAPS: f64 = 4096.0;

/// Simpson intervals used to integrate longer tails.
const TAIL_INTERVALS: usize = 512;

/// Check that a blur radius is usable.
///
/// Zero is valid (no blur); negative and non-finite radii are rejected.
pub fn check_radius(radius_px: f32) -> Result<()> {
    if radius_px.is_finite() && radius_px >= 0.0 {
        Ok(())
    } else {
        Err(AugmentError::UnsupportedRadius(radius_px))
    }
}

/// Normalized 1-D Gaussian kernel.
#[derive(Debug, Clone)]
pub struct GaussianKernel {
    /// Weights from `-half` to `+half`, summing to 1.
    pub weights: Vec<f32>,
    /// Taps on each side of the center.
    pub half: usize,
}

impl GaussianKernel {
    /// Build the kernel for standard deviation `sigma`, with at most
    /// `max_half` taps on each side.
    ///
    /// Weight beyond `max_half` is folded into the two outermost taps.
    /// Sigmas below [`MIN_SIGMA`] give a unit impulse.
    ///
    /// # Errors
    ///
    /// `AugmentError::UnsupportedRadius` when the tap count does not fit in
    /// `usize`.
    pub fn new(sigma: f32, max_half: usize) -> Result<Self> {
        let wanted = (3.0 * sigma as f64).ceil().max(1.0);
        let half = if wanted >= max_half as f64 {
            max_half
        } else {
            wanted as usize
        };
        let taps = half
            .checked_mul(2)
            .and_then(|n| n.checked_add(1))
            .ok_or(AugmentError::UnsupportedRadius(sigma))?;

        let sigma = sigma as f64;
        let sigma2 = 2.0 * sigma * sigma;
        if sigma < MIN_SIGMA as f64 || !sigma2.is_normal() {
            let mut weights = vec![0.0f32; taps];
            weights[half] = 1.0;
            return Ok(Self { weights, half });
        }

        let mut weights: Vec<f64> = (0..taps)
            .map(|i| {
                let d = i as f64 - half as f64;
                (-(d * d) / sigma2).exp()
            })
            .collect();

        if half > 0 && (half as f64) < wanted {
            let tail = tail_mass(half as f64, wanted, sigma2);
            weights[0] += tail;
            weights[taps - 1] += tail;
        }

        // Normalize
        let sum: f64 = weights.iter().sum();
        Ok(Self {
            weights: weights.into_iter().map(|w| (w / sum) as f32).collect(),
            half,
        })
    }
}

/// Sum of `exp(-k² / sigma2)` for integer `k` in `(from, to]`.
fn tail_mass(from: f64, to: f64, sigma2: f64) -> f64 {
    let weight = |k: f64| (-(k * k) / sigma2).exp();
    if to - from <= EXACT_TAIL_TAPS {
        let mut sum = 0.0;
        let mut k = from + 1.0;
        while k <= to {
            sum += weight(k);
            k += 1.0;
        }
        return sum;
    }

    // Long tails only occur for sigma in the thousands, where unit steps are
    // tiny against the curve and the sum matches the integral over
    // [from + 0.5, to + 0.5].
    let (a, b) = (from + 0.5, to + 0.5);
    let h = (b - a) / TAIL_INTERVALS as f64;
    let mut sum = weight(a) + weight(b);
    for i in 1..TAIL_INTERVALS {
        let factor = if i % 2 == 1 { 4.0 } else { 2.0 };
        sum += factor * weight(a + i as f64 * h);
    }
    sum * h / 3.0
}

/// Blur an image with a Gaussian of standard deviation `radius_px`.
///
/// # Errors
///
/// `AugmentError::UnsupportedRadius` for a negative or non-finite radius.
pub fn blur(image: &RasterImage, radius_px: f32) -> Result<RasterImage> {
    check_radius(radius_px)?;
    if radius_px < MIN_SIGMA || image.is_empty() {
        return Ok(image.clone());
    }

    let width = image.width() as usize;
    let height = image.height() as usize;

    let row_kernel = GaussianKernel::new(radius_px, width - 1)?;
    let column_kernel = GaussianKernel::new(radius_px, height - 1)?;
    trace!(
        radius_px,
        row_taps = row_kernel.weights.len(),
        column_taps = column_kernel.weights.len(),
        "gaussian kernels"
    );

    let premultiplied = premultiply(image.pixels());
    let horizontal = convolve_rows(&premultiplied, width, height, &row_kernel);
    let vertical = convolve_columns(&horizontal, width, height, &column_kernel);

    let mut buffer = image.to_buffer();
    unpremultiply(&vertical, buffer.data_mut());
    Ok(buffer.into_image())
}

fn premultiply(pixels: &[u8]) -> Vec<f32> {
    let mut out = Vec::with_capacity(pixels.len());
    for px in pixels.chunks_exact(CHANNELS) {
        let alpha = px[3] as f32 / 255.0;
        out.push(px[0] as f32 * alpha);
        out.push(px[1] as f32 * alpha);
        out.push(px[2] as f32 * alpha);
        out.push(px[3] as f32);
    }
    out
}

fn unpremultiply(src: &[f32], dst: &mut [u8]) {
    for (px, out) in src.chunks_exact(CHANNELS).zip(dst.chunks_exact_mut(CHANNELS)) {
        let alpha = px[3].clamp(0.0, 255.0);
        let scale = if alpha > 0.0 { 255.0 / alpha } else { 0.0 };
        out[0] = (px[0] * scale).clamp(0.0, 255.0).round() as u8;
        out[1] = (px[1] * scale).clamp(0.0, 255.0).round() as u8;
        out[2] = (px[2] * scale).clamp(0.0, 255.0).round() as u8;
        out[3] = alpha.round() as u8;
    }
}

fn convolve_rows(src: &[f32], width: usize, height: usize, kernel: &GaussianKernel) -> Vec<f32> {
    let mut dst = vec![0.0f32; src.len()];
    let max_x = width as isize - 1;
    for y in 0..height {
        let row = y * width;
        for x in 0..width {
            let mut acc = [0.0f32; CHANNELS];
            for (k, w) in kernel.weights.iter().enumerate() {
                let sx = (x as isize + k as isize - kernel.half as isize).clamp(0, max_x) as usize;
                let idx = (row + sx) * CHANNELS;
                for c in 0..CHANNELS {
                    acc[c] += src[idx + c] * w;
                }
            }
            let idx = (row + x) * CHANNELS;
            dst[idx..idx + CHANNELS].copy_from_slice(&acc);
        }
    }
    dst
}

fn convolve_columns(src: &[f32], width: usize, height: usize, kernel: &GaussianKernel) -> Vec<f32> {
    let mut dst = vec![0.0f32; src.len()];
    let max_y = height as isize - 1;
    for y in 0..height {
        for x in 0..width {
            let mut acc = [0.0f32; CHANNELS];
            for (k, w) in kernel.weights.iter().enumerate() {
                let sy = (y as isize + k as isize - kernel.half as isize).clamp(0, max_y) as usize;
                let idx = (sy * width + x) * CHANNELS;
                for c in 0..CHANNELS {
                    acc[c] += src[idx + c] * w;
                }
            }
            let idx = (y * width + x) * CHANNELS;
            dst[idx..idx + CHANNELS].copy_from_slice(&acc);
        }
    }
    dst
}
