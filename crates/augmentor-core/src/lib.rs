//! Augmentor Core - Image augmentation library
//!
//! This crate turns one source image plus a [`ParameterSet`] into a new image
//! of the same size: flipped, rotated and cropped on a fixed canvas, color
//! adjusted, blurred and sprinkled with noise.
//!
//! ```ignore
//! use augmentor_core::{augment, ParameterSet, RasterImage};
//!
//! let source = RasterImage::filled(64, 64, [128, 128, 128, 255]);
//! let params = ParameterSet::new().with_rotation(15).with_brightness(120);
//! let output = augment(&source, &params)?;
//! assert_eq!(output.width(), 64);
//! ```

pub mod adjustments;
pub mod blur;
pub mod decode;
pub mod encode;
pub mod engine;
pub mod error;
pub mod luminance;
pub mod noise;
pub mod params;
pub mod raster;
pub mod transform;

pub use adjustments::ColorAdjustments;
pub use decode::{decode_image, DecodeError};
pub use encode::{encode_png, EncodeError};
pub use engine::{augment, augment_with_rng, AugmentationEngine, EngineConfig};
pub use error::{AugmentError, Result};
pub use noise::NoiseRng;
pub use params::ParameterSet;
pub use raster::{PixelBuffer, RasterImage};
pub use transform::{Affine, InterpolationFilter};
