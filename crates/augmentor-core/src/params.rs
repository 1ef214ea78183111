//! Augmentation parameters.
//!
//! A [`ParameterSet`] is a plain value describing one augmentation request.
//! Every field has a neutral default, so a partial configuration such as
//! `{ "brightness": 150 }` deserializes to a complete set.
//!
//! ## Domains
//! | field | domain | neutral |
//! |---|---|---|
//! | `flip_horizontal` / `flip_vertical` | bool | false |
//! | `rotation_degrees` | -180..=180 | 0 |
//! | `crop_percent` | 0..100 | 0 |
//! | `brightness` / `contrast` / `saturation` | 0..=200 | 100 |
//! | `noise_percent` | 0..=100 | 0 |
//! | `blur_radius_px` | finite, >= 0 | 0 |

use serde::{Deserialize, Serialize};

use crate::error::{AugmentError, Result};

/// Neutral value for brightness, contrast and saturation.
pub const NEUTRAL_PERCENT: i32 = 100;

/// One augmentation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParameterSet {
    /// Mirror left-right around the canvas center
    pub flip_horizontal: bool,
    /// Mirror top-bottom around the canvas center
    pub flip_vertical: bool,
    /// Clockwise rotation around the canvas center (-180 to 180)
    #[serde(alias = "rotation")]
    pub rotation_degrees: i32,
    /// Centered crop, stretched back to the canvas (0 to 99)
    #[serde(alias = "crop")]
    pub crop_percent: i32,
    /// Brightness multiplier in percent (0 to 200)
    pub brightness: i32,
    /// Contrast around mid-gray in percent (0 to 200)
    pub contrast: i32,
    /// Saturation around luma in percent (0 to 200)
    pub saturation: i32,
    /// Additive noise amplitude in percent of full scale (0 to 100)
    #[serde(alias = "noise")]
    pub noise_percent: i32,
    /// Gaussian blur standard deviation in pixels
    #[serde(alias = "blur")]
    pub blur_radius_px: f32,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            flip_horizontal: false,
            flip_vertical: false,
            rotation_degrees: 0,
            crop_percent: 0,
            brightness: NEUTRAL_PERCENT,
            contrast: NEUTRAL_PERCENT,
            saturation: NEUTRAL_PERCENT,
            noise_percent: 0,
            blur_radius_px: 0.0,
        }
    }
}

impl ParameterSet {
    /// Create a new ParameterSet with neutral values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all values are at their defaults
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Restore every field to its neutral value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn toggle_flip_horizontal(&mut self) {
        self.flip_horizontal = !self.flip_horizontal;
    }

    pub fn toggle_flip_vertical(&mut self) {
        self.flip_vertical = !self.flip_vertical;
    }

    pub fn with_flip_horizontal(mut self, flip: bool) -> Self {
        self.flip_horizontal = flip;
        self
    }

    pub fn with_flip_vertical(mut self, flip: bool) -> Self {
        self.flip_vertical = flip;
        self
    }

    pub fn with_rotation(mut self, degrees: i32) -> Self {
        self.rotation_degrees = degrees;
        self
    }

    pub fn with_crop(mut self, percent: i32) -> Self {
        self.crop_percent = percent;
        self
    }

    pub fn with_brightness(mut self, percent: i32) -> Self {
        self.brightness = percent;
        self
    }

    pub fn with_contrast(mut self, percent: i32) -> Self {
        self.contrast = percent;
        self
    }

    pub fn with_saturation(mut self, percent: i32) -> Self {
        self.saturation = percent;
        self
    }

    pub fn with_noise(mut self, percent: i32) -> Self {
        self.noise_percent = percent;
        self
    }

    pub fn with_blur(mut self, radius_px: f32) -> Self {
        self.blur_radius_px = radius_px;
        self
    }

    /// True when any of flip, rotation or crop would move pixels.
    pub fn has_geometry(&self) -> bool {
        self.flip_horizontal
            || self.flip_vertical
            || self.rotation_degrees != 0
            || self.crop_percent != 0
    }

    /// True when any color adjustment is away from neutral.
    pub fn has_color(&self) -> bool {
        self.brightness != NEUTRAL_PERCENT
            || self.contrast != NEUTRAL_PERCENT
            || self.saturation != NEUTRAL_PERCENT
    }

    /// Check every field against its domain.
    ///
    /// Out-of-range values are reported, never clamped.
    ///
    /// # Errors
    ///
    /// `AugmentError::InvalidParameter` for the first integer field out of
    /// range, `AugmentError::UnsupportedRadius` for a negative or non-finite
    /// blur radius.
    pub fn validate(&self) -> Result<()> {
        check_range("rotationDegrees", self.rotation_degrees, -180, 180, "-180..=180")?;
        check_range("cropPercent", self.crop_percent, 0, 99, "0..100")?;
        check_range("brightness", self.brightness, 0, 200, "0..=200")?;
        check_range("contrast", self.contrast, 0, 200, "0..=200")?;
        check_range("saturation", self.saturation, 0, 200, "0..=200")?;
        check_range("noisePercent", self.noise_percent, 0, 100, "0..=100")?;
        crate::blur::check_radius(self.blur_radius_px)
    }
}

fn check_range(
    field: &'static str,
    value: i32,
    min: i32,
    max: i32,
    expected: &'static str,
) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(AugmentError::InvalidParameter {
            field,
            value: value.to_string(),
            expected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_neutral() {
        let params = ParameterSet::new();
        assert!(params.is_default());
        assert!(!params.has_geometry());
        assert!(!params.has_color());
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_not_default() {
        let params = ParameterSet::new().with_brightness(150);
        assert!(!params.is_default());
        assert!(params.has_color());
        assert!(!params.has_geometry());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut params = ParameterSet::new()
            .with_rotation(45)
            .with_crop(20)
            .with_noise(30)
            .with_blur(2.5);
        params.toggle_flip_horizontal();
        assert!(!params.is_default());

        params.reset();
        assert!(params.is_default());
    }

    #[test]
    fn test_flip_toggles() {
        let mut params = ParameterSet::new();
        params.toggle_flip_horizontal();
        params.toggle_flip_vertical();
        assert!(params.flip_horizontal);
        assert!(params.flip_vertical);
        assert!(params.has_geometry());

        params.toggle_flip_horizontal();
        params.toggle_flip_vertical();
        assert!(params.is_default());
    }

    #[test]
    fn test_domain_boundaries_are_valid() {
        let params = ParameterSet::new()
            .with_rotation(-180)
            .with_crop(99)
            .with_brightness(0)
            .with_contrast(200)
            .with_saturation(0)
            .with_noise(100)
            .with_blur(0.0);
        assert!(params.validate().is_ok());

        assert!(ParameterSet::new().with_rotation(180).validate().is_ok());
    }

    #[test]
    fn test_rotation_out_of_range() {
        let err = ParameterSet::new().with_rotation(181).validate().unwrap_err();
        assert_eq!(
            err,
            AugmentError::InvalidParameter {
                field: "rotationDegrees",
                value: "181".to_string(),
                expected: "-180..=180",
            }
        );
    }

    #[test]
    fn test_crop_hundred_is_invalid() {
        let err = ParameterSet::new().with_crop(100).validate().unwrap_err();
        assert!(matches!(
            err,
            AugmentError::InvalidParameter {
                field: "cropPercent",
                ..
            }
        ));
        assert!(ParameterSet::new().with_crop(-1).validate().is_err());
    }

    #[test]
    fn test_color_out_of_range() {
        for params in [
            ParameterSet::new().with_brightness(201),
            ParameterSet::new().with_contrast(-1),
            ParameterSet::new().with_saturation(300),
        ] {
            assert!(matches!(
                params.validate(),
                Err(AugmentError::InvalidParameter { .. })
            ));
        }
    }

    #[test]
    fn test_noise_out_of_range() {
        assert!(ParameterSet::new().with_noise(101).validate().is_err());
        assert!(ParameterSet::new().with_noise(-5).validate().is_err());
    }

    #[test]
    fn test_negative_blur_is_unsupported_radius() {
        let err = ParameterSet::new().with_blur(-0.5).validate().unwrap_err();
        assert_eq!(err, AugmentError::UnsupportedRadius(-0.5));

        let err = ParameterSet::new().with_blur(f32::NAN).validate().unwrap_err();
        assert!(matches!(err, AugmentError::UnsupportedRadius(_)));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let params: ParameterSet = serde_json::from_str(r#"{ "brightness": 150 }"#).unwrap();
        assert_eq!(params.brightness, 150);
        assert_eq!(params.contrast, 100);
        assert_eq!(params.saturation, 100);
        assert!(!params.flip_horizontal);
        assert_eq!(params.blur_radius_px, 0.0);
    }

    #[test]
    fn test_json_field_names_and_aliases() {
        let params: ParameterSet = serde_json::from_str(
            r#"{ "flipHorizontal": true, "rotation": -90, "crop": 25, "noise": 10, "blur": 1.5 }"#,
        )
        .unwrap();
        assert!(params.flip_horizontal);
        assert_eq!(params.rotation_degrees, -90);
        assert_eq!(params.crop_percent, 25);
        assert_eq!(params.noise_percent, 10);
        assert_eq!(params.blur_radius_px, 1.5);

        let json = serde_json::to_value(ParameterSet::default()).unwrap();
        assert_eq!(json["rotationDegrees"], 0);
        assert_eq!(json["cropPercent"], 0);
        assert_eq!(json["blurRadiusPx"], 0.0);
    }

    #[test]
    fn test_json_roundtrip() {
        let params = ParameterSet::new()
            .with_flip_vertical(true)
            .with_rotation(30)
            .with_saturation(40);
        let json = serde_json::to_string(&params).unwrap();
        let back: ParameterSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}
