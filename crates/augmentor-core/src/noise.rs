//! Additive uniform noise.
//!
//! For every pixel, each of R, G and B draws its own sample
//! ```text
//! n = (U - 0.5) * (noise_percent / 100) * 255,   U ~ uniform [0, 1)
//! c' = clamp(c + n, 0, 255)
//! ```
//! Alpha is left alone. Samples are drawn in row-major pixel order, R then G
//! then B, so a seeded generator reproduces the output byte for byte.
//!
//! The random source is always passed in by the caller; nothing here reaches
//! for a global generator.

use rand::{Rng, RngCore, SeedableRng};
use rand_pcg::Pcg32;

use crate::raster::{RasterImage, CHANNELS};

/// Seedable PCG32 generator used by the engine for noise.
#[derive(Debug, Clone)]
pub struct NoiseRng {
    inner: Pcg32,
}

impl NoiseRng {
    /// Create a generator from a 64-bit seed.
    pub fn new(seed: u64) -> Self {
        Self {
            inner: Pcg32::seed_from_u64(seed),
        }
    }
}

impl RngCore for NoiseRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

/// Add noise to an image, returning a new image.
///
/// `noise_percent = 0` returns the image unchanged without drawing any
/// random numbers.
pub fn inject<R: Rng + ?Sized>(image: &RasterImage, noise_percent: i32, rng: &mut R) -> RasterImage {
    if noise_percent == 0 || image.is_empty() {
        return image.clone();
    }
    let mut buffer = image.to_buffer();
    apply_noise(buffer.data_mut(), noise_percent, rng);
    buffer.into_image()
}

/// Add noise to RGBA pixel data in place.
pub fn apply_noise<R: Rng + ?Sized>(pixels: &mut [u8], noise_percent: i32, rng: &mut R) {
    if noise_percent == 0 {
        return;
    }
    let amplitude = noise_percent as f64 / 100.0 * 255.0;

    for chunk in pixels.chunks_exact_mut(CHANNELS) {
        for channel in chunk.iter_mut().take(3) {
            let n = (rng.gen::<f64>() - 0.5) * amplitude;
            *channel = (*channel as f64 + n).clamp(0.0, 255.0).round() as u8;
        }
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
