//! Error types for rasterkit operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rasterkit operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// BMP encoding error.
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    /// Invalid dimensions for a framebuffer or canvas.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Algorithm tag that no rasterizer or clipper understands.
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Script line whose command name is not known.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Script line with missing or malformed arguments.
    #[error("Line {line}: {message}")]
    InvalidCommand {
        /// 1-based line number in the script.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// Reference to an item id that was never drawn.
    #[error("Unknown item: {0}")]
    UnknownItem(String),

    /// Operation that does not apply to the given primitive.
    #[error("Invalid primitive: {0}")]
    InvalidPrimitive(String),
}
