//! PNG output encoder.
//!
//! Pure Rust PNG encoding using the `png` crate. Fields are written as
//! single-channel 16-bit grayscale.

use crate::error::Result;
use crate::heightfield::HeightField;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// PNG encoder for height field output.
pub struct PngEncoder;

impl PngEncoder {
    /// Write a height field to a PNG file, creating or truncating it.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(field: &HeightField, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        Self::encode(field, &mut writer)?;
        writer.flush()?;

        info!(
            "wrote {}x{} height field to {}",
            field.width(),
            field.height(),
            path.display()
        );
        Ok(())
    }

    /// Encode a height field to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_bytes(field: &HeightField) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        Self::encode(field, &mut buffer)?;
        Ok(buffer)
    }

    fn encode<W: Write>(field: &HeightField, out: W) -> Result<()> {
        let mut encoder = png::Encoder::new(out, field.width(), field.height());
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::Sixteen);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&field.to_be_bytes())?;
        writer.finish()?;

        Ok(())
    }
}
