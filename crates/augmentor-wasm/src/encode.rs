//! Image encoding WASM bindings.
//!
//! Exposes PNG encoding so augmented images can be saved or shown through a
//! `data:` URL without losing their transparent corners.

use crate::js_error;
use crate::types::JsRasterImage;
use augmentor_core::encode;
use wasm_bindgen::prelude::*;

/// Encode an RGBA image to PNG bytes.
///
/// # Errors
///
/// Returns an error if the pixel buffer does not match the dimensions or
/// the image is empty.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const png = encode_png(output);
/// const blob = new Blob([png], { type: 'image/png' });
/// ```
#[wasm_bindgen]
pub fn encode_png(image: &JsRasterImage) -> Result<Vec<u8>, JsValue> {
    let raster = image.to_raster().map_err(js_error)?;
    encode::encode_png(&raster).map_err(js_error)
}
