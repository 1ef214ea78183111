//! PNG encoding for presenting augmented images.
//!
//! PNG keeps the alpha channel, which matters for canvases with corners
//! uncovered by a rotation.

use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use thiserror::Error;

use crate::raster::RasterImage;

/// Errors that can occur during PNG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode an RGBA image to PNG bytes.
///
/// # Errors
///
/// Returns `EncodeError::InvalidDimensions` for an image with no pixels.
pub fn encode_png(image: &RasterImage) -> Result<Vec<u8>, EncodeError> {
    if image.is_empty() {
        return Err(EncodeError::InvalidDimensions {
            width: image.width(),
            height: image.height(),
        });
    }

    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(
            image.pixels(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode_image;

    #[test]
    fn test_png_magic_bytes() {
        let img = RasterImage::filled(3, 2, [1, 2, 3, 4]);
        let png = encode_png(&img).unwrap();
        assert_eq!(&png[0..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_png_is_lossless_with_alpha() {
        let pixels: Vec<u8> = (0..5 * 4 * 4).map(|i| (i * 3) as u8).collect();
        let img = RasterImage::new(5, 4, pixels).unwrap();
        let decoded = decode_image(&encode_png(&img).unwrap()).unwrap();
        assert_eq!(decoded, img);
    }

    #[test]
    fn test_empty_image_rejected() {
        let img = RasterImage::new(0, 7, vec![]).unwrap();
        let err = encode_png(&img).unwrap_err();
        assert!(matches!(
            err,
            EncodeError::InvalidDimensions {
                width: 0,
                height: 7
            }
        ));
    }
}
