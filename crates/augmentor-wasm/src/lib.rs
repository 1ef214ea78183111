//! Augmentor WASM - WebAssembly bindings for Augmentor
//!
//! This crate exposes the augmentor-core engine to JavaScript/TypeScript
//! applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper for RGBA image data
//! - `params` - Augmentation parameters with property accessors
//! - `augment` - The augmentation pipeline binding
//! - `decode` / `encode` - PNG/JPEG decoding and PNG encoding
//!
//! # Usage
//!
//! ```typescript
//! import init, { augment, decode_image, encode_png, JsParameterSet } from '@augmentor/wasm';
//!
//! await init();
//!
//! const image = decode_image(new Uint8Array(await file.arrayBuffer()));
//! const params = new JsParameterSet();
//! params.rotationDegrees = 30;
//! params.noisePercent = 15;
//!
//! const output = augment(image, params, 42);
//! const png = encode_png(output);
//! ```

use wasm_bindgen::prelude::*;

mod augment;
mod decode;
mod encode;
mod params;
mod types;

// Re-export public types
pub use augment::augment;
pub use decode::decode_image;
pub use encode::encode_png;
pub use params::JsParameterSet;
pub use types::JsRasterImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Convert any displayable error into a JavaScript error value.
pub(crate) fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
