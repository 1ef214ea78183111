//! Error types for the augmentation engine.

use thiserror::Error;

/// Errors detected at pipeline entry, before any pixel is touched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AugmentError {
    /// A parameter is outside its declared domain.
    #[error("Invalid parameter {field}: {value} (expected {expected})")]
    InvalidParameter {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    /// Pixel buffer length doesn't match width * height * 4.
    #[error("Dimension mismatch: {width}x{height} RGBA needs {expected} bytes, got {actual}")]
    DimensionMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Blur radius is negative or not a finite number.
    #[error("Unsupported blur radius: {0}")]
    UnsupportedRadius(f32),
}

/// Result type for augmentation operations.
pub type Result<T> = std::result::Result<T, AugmentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AugmentError::InvalidParameter {
            field: "brightness",
            value: "250".to_string(),
            expected: "0..=200",
        };
        assert_eq!(
            err.to_string(),
            "Invalid parameter brightness: 250 (expected 0..=200)"
        );

        let err = AugmentError::DimensionMismatch {
            width: 2,
            height: 2,
            expected: 16,
            actual: 12,
        };
        assert_eq!(
            err.to_string(),
            "Dimension mismatch: 2x2 RGBA needs 16 bytes, got 12"
        );

        let err = AugmentError::UnsupportedRadius(-1.5);
        assert_eq!(err.to_string(), "Unsupported blur radius: -1.5");
    }
}
