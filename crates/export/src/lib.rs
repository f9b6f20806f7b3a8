//! Export module for InkFrame
//!
//! Encodes flattened captures for the clipboard.

mod png;

pub use png::PngExporter;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Nothing to export: image has no pixels")]
    EmptyImage,
}

pub type ExportResult<T> = Result<T, ExportError>;

/// Clipboard image format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
}
