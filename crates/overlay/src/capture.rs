//! Flattened capture of the framed region
//!
//! The platform supplies the pixels beneath the frame and a clipboard; the
//! overlay tints them with its backdrop, draws the ink on top and encodes the
//! result.

use crate::flatten::{self, Placement};
use crate::frame::{FrameConfig, Rect};
use crate::{OverlayError, OverlayResult};
use export::{ExportFormat, PngExporter};
use image::RgbaImage;
use ink::{Point, Stroke};
use tracing::info;

/// Screen grabbing and clipboard access provided by the platform
pub trait CaptureBackend {
    /// Screen content below the overlay inside `region`, at any pixel density
    fn grab_region(&mut self, region: Rect) -> OverlayResult<RgbaImage>;

    /// Replace the clipboard contents with an encoded image
    fn write_clipboard(&mut self, format: ExportFormat, bytes: &[u8]) -> OverlayResult<()>;
}

/// A finished capture
#[derive(Debug, Clone)]
pub struct Capture {
    /// Screen region that was captured (frame minus border)
    pub region: Rect,
    /// Background with backdrop tint and ink applied
    pub image: RgbaImage,
}

/// Capture the interior of `frame`, flatten `strokes` onto it and copy it to
/// the clipboard as PNG
pub fn capture_frame<B: CaptureBackend + ?Sized>(
    backend: &mut B,
    frame: Rect,
    config: &FrameConfig,
    strokes: &[Stroke],
) -> OverlayResult<Capture> {
    let inset = config.border_inset();
    let region = frame.inset(inset).ok_or(OverlayError::EmptyRegion)?;

    let mut image = backend.grab_region(region)?;
    if image.width() == 0 || image.height() == 0 {
        return Err(OverlayError::Capture(format!(
            "backend returned an empty image for {}x{} region",
            region.width, region.height
        )));
    }

    let placement = Placement {
        origin: Point::new(inset as f64, inset as f64),
        scale: image.width() as f64 / region.width as f64,
    };
    flatten::fill(&mut image, config.background());
    flatten::flatten(&mut image, strokes, &placement);

    let png = PngExporter::encode(&image)?;
    backend.write_clipboard(ExportFormat::Png, &png)?;

    info!(
        x = region.x,
        y = region.y,
        width = image.width(),
        height = image.height(),
        strokes = strokes.len(),
        "capture copied to clipboard"
    );

    Ok(Capture { region, image })
}
