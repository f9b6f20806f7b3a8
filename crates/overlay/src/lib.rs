//! Overlay module for InkFrame
//!
//! Drives the translucent capture frame: settings and pointer events in,
//! render plans and flattened captures out.

pub mod capture;
pub mod controller;
pub mod event;
pub mod flatten;
pub mod frame;
pub mod render;

pub use capture::{Capture, CaptureBackend};
pub use controller::{Overlay, OverlayState, SharedOverlay};
pub use event::{ControlEvent, EventBus, EventSender};
pub use frame::{FrameConfig, Rect, MIN_BACKGROUND_OPACITY};
pub use render::{Border, Content, RenderPlan, StrokePath};

use export::ExportError;
use ink::InkError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OverlayError {
    #[error("Ink error: {0}")]
    Ink(#[from] InkError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Capture failed: {0}")]
    Capture(String),

    #[error("A capture is already shown; clear it first")]
    AlreadyCaptured,

    #[error("Frame border leaves no region to capture")]
    EmptyRegion,

    #[error("Event bus disconnected")]
    Disconnected,
}

pub type OverlayResult<T> = Result<T, OverlayError>;
