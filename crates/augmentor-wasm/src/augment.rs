//! WASM binding for the augmentation pipeline.
//!
//! Noise needs a seed. JavaScript callers may pass one for reproducible
//! output; otherwise one is drawn from `Math.random()` on each call.

use augmentor_core::{AugmentationEngine, Result};
use wasm_bindgen::prelude::*;

use crate::js_error;
use crate::params::JsParameterSet;
use crate::types::JsRasterImage;

/// Augment an image.
///
/// Runs geometry, color, blur and noise in that order and returns a new
/// image with the source dimensions. The source is left untouched.
///
/// # Arguments
///
/// * `image` - Source RGBA image
/// * `params` - Augmentation parameters
/// * `seed` - Optional noise seed; omit for a fresh random seed
///
/// # Errors
///
/// Throws if a parameter is out of range, the blur radius is negative, or
/// the pixel buffer does not match the dimensions.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const params = new JsParameterSet();
/// params.flipHorizontal = true;
/// params.noisePercent = 20;
///
/// const preview = augment(sourceImage, params, 7);
/// ```
#[wasm_bindgen]
pub fn augment(
    image: &JsRasterImage,
    params: &JsParameterSet,
    seed: Option<u32>,
) -> std::result::Result<JsRasterImage, JsValue> {
    let seed = seed.map(u64::from).unwrap_or_else(random_seed);
    augment_seeded(image, params, seed).map_err(|err| {
        web_sys::console::warn_1(&JsValue::from_str(&format!("augment failed: {}", err)));
        js_error(err)
    })
}

/// Run the core engine with an explicit noise seed.
pub(crate) fn augment_seeded(
    image: &JsRasterImage,
    params: &JsParameterSet,
    seed: u64,
) -> Result<JsRasterImage> {
    let params = params.inner();
    params.validate()?;
    let source = image.to_raster()?;
    let output = AugmentationEngine::new()
        .with_seed(seed)
        .augment(&source, params)?;
    Ok(JsRasterImage::from_raster(output))
}

fn random_seed() -> u64 {
    let high = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let low = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (high << 32) | low
}

#[cfg(test)]
mod tests {
    use super::*;
    use augmentor_core::AugmentError;

    fn gray_image(width: u32, height: u32, value: u8) -> JsRasterImage {
        let pixels = (0..width * height)
            .flat_map(|_| [value, value, value, 255])
            .collect();
        JsRasterImage::new(width, height, pixels)
    }

    #[test]
    fn test_augment_identity() {
        let image = gray_image(3, 2, 77);
        let params = JsParameterSet::new();
        let output = augment_seeded(&image, &params, 0).unwrap();
        assert_eq!(output.width(), 3);
        assert_eq!(output.height(), 2);
        assert_eq!(output.pixels(), image.pixels());
    }

    #[test]
    fn test_augment_brightness() {
        let image = gray_image(2, 2, 128);
        let mut params = JsParameterSet::new();
        params.set_brightness(150);
        let output = augment_seeded(&image, &params, 0).unwrap();
        assert!(output
            .pixels()
            .chunks_exact(4)
            .all(|p| p == [192, 192, 192, 255]));
    }

    #[test]
    fn test_augment_seed_reproducible() {
        let image = gray_image(8, 8, 100);
        let mut params = JsParameterSet::new();
        params.set_noise_percent(50);

        let a = augment_seeded(&image, &params, 11).unwrap();
        let b = augment_seeded(&image, &params, 11).unwrap();
        assert_eq!(a.pixels(), b.pixels());
        assert_ne!(a.pixels(), image.pixels());
    }

    #[test]
    fn test_augment_rejects_bad_buffer() {
        let image = JsRasterImage::new(2, 2, vec![0; 10]);
        let err = augment_seeded(&image, &JsParameterSet::new(), 0).err();
        assert!(matches!(err, Some(AugmentError::DimensionMismatch { .. })));
    }

    #[test]
    fn test_augment_rejects_bad_params() {
        let image = gray_image(1, 1, 0);
        let mut params = JsParameterSet::new();
        params.set_rotation_degrees(270);
        let err = augment_seeded(&image, &params, 0).err();
        assert!(matches!(err, Some(AugmentError::InvalidParameter { .. })));
    }
}
