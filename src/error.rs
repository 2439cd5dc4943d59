//! Error types for height field rasterization.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building, drawing on, or saving a height field.
#[derive(Error, Debug)]
pub enum Error {
    /// Normalized height outside `[0.0, 1.0]` (NaN included).
    #[error("Invalid height {0}: value must be between 0.0 and 1.0")]
    InvalidHeight(f64),

    /// Direct write to a coordinate outside the field.
    #[error("Coordinate ({x}, {y}) is outside the {width}x{height} field")]
    OutOfBounds {
        /// X coordinate of the rejected write.
        x: i32,
        /// Y coordinate of the rejected write.
        y: i32,
        /// Field width.
        width: u32,
        /// Field height.
        height: u32,
    },

    /// Zero-sized field.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// I/O error (file creation, writing).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Scene file could not be read.
    #[error("Scene file not found: {0}")]
    SceneNotFound(String),

    /// Scene file could not be parsed.
    #[error("Scene parse error at line {line}: {message}")]
    SceneParse {
        /// 1-based line of the failure, 0 when unknown.
        line: usize,
        /// Parser message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 100,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
    }

    #[test]
    fn test_invalid_height_display() {
        let err = Error::InvalidHeight(1.1);
        assert!(err.to_string().contains("1.1"));
    }

    #[test]
    fn test_out_of_bounds_display() {
        let err = Error::OutOfBounds {
            x: -1,
            y: 20,
            width: 10,
            height: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("(-1, 20)"));
        assert!(msg.contains("10x10"));
    }

    #[test]
    fn test_io_from() {
        let err: Error = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, Error::Io(_)));
    }
}
