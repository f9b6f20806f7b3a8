//! PNG encoding

use crate::{ExportError, ExportResult};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use tracing::debug;

/// PNG encoder for flattened captures
pub struct PngExporter;

impl PngExporter {
    /// Encode an RGBA image to PNG bytes
    pub fn encode(image: &RgbaImage) -> ExportResult<Vec<u8>> {
        if image.width() == 0 || image.height() == 0 {
            return Err(ExportError::EmptyImage);
        }

        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes).write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )?;

        debug!(
            width = image.width(),
            height = image.height(),
            bytes = bytes.len(),
            "encoded png"
        );
        Ok(bytes)
    }
}
