//! BMP output encoder.
//!
//! Writes 24-bit RGB bitmaps through the `image` crate.

use crate::error::Result;
use crate::framebuffer::Framebuffer;
use image::codecs::bmp::BmpEncoder as ImageBmpEncoder;
use image::ExtendedColorType;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// BMP encoder for framebuffer output.
pub struct BmpEncoder;

impl BmpEncoder {
    /// Write a framebuffer to a BMP file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or BMP encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(fb: &Framebuffer, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::encode(fb, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Encode a framebuffer to BMP bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if BMP encoding fails.
    pub fn to_bytes(fb: &Framebuffer) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        Self::encode(fb, &mut buffer)?;
        Ok(buffer)
    }

    fn encode<W: Write>(fb: &Framebuffer, writer: &mut W) -> Result<()> {
        let mut encoder = ImageBmpEncoder::new(writer);
        encoder.encode(
            &fb.to_rgb_pixels(),
            fb.width(),
            fb.height(),
            ExtendedColorType::Rgb8,
        )?;
        Ok(())
    }
}
