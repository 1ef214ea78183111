//! Image decoding for callers that start from encoded files.
//!
//! The engine itself only ever sees decoded [`RasterImage`]s. These helpers
//! turn PNG or JPEG bytes into one.

use std::io::Cursor;

use image::ImageReader;
use thiserror::Error;
use tracing::debug;

use crate::raster::RasterImage;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file format is not recognized or supported.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),
}

/// Decode PNG or JPEG bytes into an RGBA image.
///
/// The format is sniffed from the leading bytes. Images without alpha come
/// back fully opaque.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes match no known format.
/// Returns `DecodeError::CorruptedFile` if decoding fails part way.
pub fn decode_image(bytes: &[u8]) -> Result<RasterImage, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let format = reader.format().ok_or(DecodeError::InvalidFormat)?;

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    debug!(?format, width = img.width(), height = img.height(), "decoded image");
    Ok(RasterImage::from_rgba_image(img.into_rgba8()))
}
