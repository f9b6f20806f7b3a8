//! Ink module for InkFrame
//!
//! Records pointer input as strokes and straightens near-straight strokes
//! into perfect lines when they end.

pub mod engine;
pub mod geom;
pub mod pen;
pub mod straighten;
pub mod stroke;

pub use engine::{StrokeEnd, StrokeEngine, StrokeId};
pub use geom::{Point, Rgba};
pub use pen::{PenConfig, PenPreset, StraightenConfig};
pub use straighten::{fit_line, straighten, Fit};
pub use stroke::Stroke;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InkError {
    #[error("Stroke index {index} out of range (session has {len} strokes)")]
    InvalidIndex { index: usize, len: usize },
}

pub type InkResult<T> = Result<T, InkError>;
