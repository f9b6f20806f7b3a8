//! Pen and line-detection settings

use crate::geom::Rgba;

/// Default stroke width of the drawing pen
pub const DEFAULT_PEN_WIDTH: f64 = 5.0;

/// Default straight-line tolerance, in device-independent units
pub const DEFAULT_STRAIGHTEN_THRESHOLD: f64 = 10.0;

/// Width and color copied into each new stroke
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenConfig {
    pub width: f64,
    pub color: Rgba,
}

impl Default for PenConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_PEN_WIDTH,
            color: Rgba::BLACK,
        }
    }
}

/// Named pen templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PenPreset {
    Pen,
    Highlighter,
}

impl PenPreset {
    /// Pen settings for this template
    pub fn config(&self) -> PenConfig {
        match self {
            PenPreset::Pen => PenConfig::default(),
            PenPreset::Highlighter => PenConfig {
                width: 20.0,
                color: Rgba::new(1.0, 0.9, 0.0, 0.4),
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PenPreset::Pen => "Pen",
            PenPreset::Highlighter => "Highlighter",
        }
    }
}

/// Auto-straighten settings applied when a stroke ends
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StraightenConfig {
    pub enabled: bool,
    pub threshold: f64,
}

impl Default for StraightenConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold: DEFAULT_STRAIGHTEN_THRESHOLD,
        }
    }
}
