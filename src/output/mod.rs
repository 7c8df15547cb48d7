//! Output encoders (BMP, PNG).

mod bmp_encoder;
mod png_encoder;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;

pub use bmp_encoder::BmpEncoder;
pub use png_encoder::PngEncoder;

/// Image format used when saving a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// 24-bit uncompressed bitmap.
    #[default]
    Bmp,
    /// 8-bit RGBA PNG.
    Png,
}

impl OutputFormat {
    /// File extension without the leading dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Bmp => "bmp",
            Self::Png => "png",
        }
    }

    /// Encode `fb` into a file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(self, fb: &Framebuffer, path: P) -> Result<()> {
        match self {
            Self::Bmp => BmpEncoder::write_to_file(fb, path),
            Self::Png => PngEncoder::write_to_file(fb, path),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "bmp" => Ok(Self::Bmp),
            "png" => Ok(Self::Png),
            _ => Err(Error::UnsupportedAlgorithm(format!("output format {s}"))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
