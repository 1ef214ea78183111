//! Augmentation parameter WASM bindings.
//!
//! This module provides JavaScript bindings for the core `ParameterSet`,
//! allowing augmentation controls to be read and written from TypeScript.
//! Property names match the camelCase JSON form.

use augmentor_core::ParameterSet;
use wasm_bindgen::prelude::*;

use crate::js_error;

/// Augmentation parameters wrapper for JavaScript
#[wasm_bindgen]
pub struct JsParameterSet {
    inner: ParameterSet,
}

#[wasm_bindgen]
impl JsParameterSet {
    /// Create new parameters with neutral values
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: ParameterSet::new(),
        }
    }

    #[wasm_bindgen(getter = flipHorizontal)]
    pub fn flip_horizontal(&self) -> bool {
        self.inner.flip_horizontal
    }

    #[wasm_bindgen(setter = flipHorizontal)]
    pub fn set_flip_horizontal(&mut self, value: bool) {
        self.inner.flip_horizontal = value;
    }

    #[wasm_bindgen(getter = flipVertical)]
    pub fn flip_vertical(&self) -> bool {
        self.inner.flip_vertical
    }

    #[wasm_bindgen(setter = flipVertical)]
    pub fn set_flip_vertical(&mut self, value: bool) {
        self.inner.flip_vertical = value;
    }

    /// Get rotation in degrees (-180 to 180, clockwise)
    #[wasm_bindgen(getter = rotationDegrees)]
    pub fn rotation_degrees(&self) -> i32 {
        self.inner.rotation_degrees
    }

    /// Set rotation in degrees
    #[wasm_bindgen(setter = rotationDegrees)]
    pub fn set_rotation_degrees(&mut self, value: i32) {
        self.inner.rotation_degrees = value;
    }

    /// Get crop percent (0 to 99)
    #[wasm_bindgen(getter = cropPercent)]
    pub fn crop_percent(&self) -> i32 {
        self.inner.crop_percent
    }

    /// Set crop percent
    #[wasm_bindgen(setter = cropPercent)]
    pub fn set_crop_percent(&mut self, value: i32) {
        self.inner.crop_percent = value;
    }

    /// Get brightness percent (0 to 200)
    #[wasm_bindgen(getter)]
    pub fn brightness(&self) -> i32 {
        self.inner.brightness
    }

    /// Set brightness percent
    #[wasm_bindgen(setter)]
    pub fn set_brightness(&mut self, value: i32) {
        self.inner.brightness = value;
    }

    /// Get contrast percent (0 to 200)
    #[wasm_bindgen(getter)]
    pub fn contrast(&self) -> i32 {
        self.inner.contrast
    }

    /// Set contrast percent
    #[wasm_bindgen(setter)]
    pub fn set_contrast(&mut self, value: i32) {
        self.inner.contrast = value;
    }

    /// Get saturation percent (0 to 200)
    #[wasm_bindgen(getter)]
    pub fn saturation(&self) -> i32 {
        self.inner.saturation
    }

    /// Set saturation percent
    #[wasm_bindgen(setter)]
    pub fn set_saturation(&mut self, value: i32) {
        self.inner.saturation = value;
    }

    /// Get noise percent (0 to 100)
    #[wasm_bindgen(getter = noisePercent)]
    pub fn noise_percent(&self) -> i32 {
        self.inner.noise_percent
    }

    /// Set noise percent
    #[wasm_bindgen(setter = noisePercent)]
    pub fn set_noise_percent(&mut self, value: i32) {
        self.inner.noise_percent = value;
    }

    /// Get blur radius in pixels
    #[wasm_bindgen(getter = blurRadiusPx)]
    pub fn blur_radius_px(&self) -> f32 {
        self.inner.blur_radius_px
    }

    /// Set blur radius in pixels
    #[wasm_bindgen(setter = blurRadiusPx)]
    pub fn set_blur_radius_px(&mut self, value: f32) {
        self.inner.blur_radius_px = value;
    }

    /// Flip the horizontal mirror state
    pub fn toggle_flip_horizontal(&mut self) {
        self.inner.toggle_flip_horizontal();
    }

    /// Flip the vertical mirror state
    pub fn toggle_flip_vertical(&mut self) {
        self.inner.toggle_flip_vertical();
    }

    /// Restore every control to its neutral value
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Check if all parameters are at neutral values
    pub fn is_default(&self) -> bool {
        self.inner.is_default()
    }

    /// Check every field against its domain, throwing on the first violation
    pub fn validate(&self) -> Result<(), JsValue> {
        self.inner.validate().map_err(js_error)
    }

    /// Serialize to JSON for storage
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(js_error)
    }

    /// Deserialize from JSON. Missing fields take their neutral values.
    pub fn from_json(value: JsValue) -> Result<JsParameterSet, JsValue> {
        let inner: ParameterSet = serde_wasm_bindgen::from_value(value).map_err(js_error)?;
        Ok(Self { inner })
    }
}

impl Default for JsParameterSet {
    fn default() -> Self {
        Self::new()
    }
}

impl JsParameterSet {
    /// Get a reference to the inner ParameterSet for use in augment
    pub(crate) fn inner(&self) -> &ParameterSet {
        &self.inner
    }
}
