//! Image decoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image } from '@augmentor/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! console.log(`Decoded ${image.width}x${image.height}`);
//! ```

use crate::js_error;
use crate::types::JsRasterImage;
use augmentor_core::decode;
use wasm_bindgen::prelude::*;

/// Decode a PNG or JPEG image from bytes to RGBA.
///
/// # Arguments
///
/// * `bytes` - The encoded file bytes as a `Uint8Array`
///
/// # Errors
///
/// Returns an error if the format is not recognized or the data is corrupted.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsRasterImage, JsValue> {
    decode::decode_image(bytes)
        .map(JsRasterImage::from_raster)
        .map_err(js_error)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_decode_invalid_bytes() {
        assert!(decode_image(&[0, 1, 2, 3]).is_err());
    }
}
