//! Overlay controller
//!
//! Sits between the UI and the stroke engine. Holds the live pen, frame and
//! straightening settings, routes pointer input to the engine when inking is
//! allowed, and runs the capture/clear cycle.

use crate::capture::{capture_frame, Capture, CaptureBackend};
use crate::event::{ControlEvent, EventBus};
use crate::frame::{FrameConfig, Rect};
use crate::render::RenderPlan;
use crate::{OverlayError, OverlayResult};
use image::RgbaImage;
use ink::{PenConfig, Point, StraightenConfig, StrokeEnd, StrokeEngine, StrokeId};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, info, trace};

/// Handle shared between the UI thread and event sources
pub type SharedOverlay<B> = Arc<Mutex<Overlay<B>>>;

/// Drawing or showing a capture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    /// Ink can be added, frame can be resized
    Drawing,
    /// A capture is shown; drawing and resizing wait for a clear
    Captured,
}

/// Capture frame controller
pub struct Overlay<B> {
    engine: StrokeEngine,
    pen: PenConfig,
    straighten: StraightenConfig,
    frame: FrameConfig,
    frame_rect: Rect,
    captured: Option<Capture>,
    backend: B,
}

impl<B: CaptureBackend> Overlay<B> {
    /// Create a controller with default settings for a frame at `frame_rect`
    pub fn new(backend: B, frame_rect: Rect) -> Self {
        Self {
            engine: StrokeEngine::new(),
            pen: PenConfig::default(),
            straighten: StraightenConfig::default(),
            frame: FrameConfig::default(),
            frame_rect,
            captured: None,
            backend,
        }
    }

    /// Wrap in a shared handle
    pub fn shared(self) -> SharedOverlay<B> {
        Arc::new(Mutex::new(self))
    }

    /// Apply one event. Returns true when the frame needs repainting.
    pub fn handle(&mut self, event: ControlEvent) -> OverlayResult<bool> {
        trace!(?event, "control event");

        let redraw = match event {
            ControlEvent::PointerDown(point) => self.pointer_down(point),
            ControlEvent::PointerMove(point) => {
                self.accepts_ink() && self.engine.continue_stroke(point)
            }
            ControlEvent::PointerUp(point) => {
                self.accepts_ink() && self.engine.end_stroke(point, self.straighten).changed()
            }
            ControlEvent::SetBackgroundOpacity(opacity) => {
                self.frame.set_background_opacity(opacity);
                true
            }
            ControlEvent::SetPenWidth(width) => {
                if width > 0.0 {
                    self.pen.width = width;
                } else {
                    debug!(width, "ignoring non-positive pen width");
                }
                false
            }
            ControlEvent::SetPenColor(color) => {
                self.pen.color = color;
                false
            }
            ControlEvent::SetBorderThickness(thickness) => {
                self.frame.set_border_thickness(thickness);
                true
            }
            ControlEvent::SetStraighten(enabled) => {
                self.straighten.enabled = enabled;
                false
            }
            ControlEvent::SetStraightenThreshold(threshold) => {
                if threshold >= 0.0 {
                    self.straighten.threshold = threshold;
                }
                false
            }
            ControlEvent::SetDraggable(draggable) => {
                self.frame.draggable = draggable;
                if draggable {
                    self.suspend_ink();
                }
                false
            }
            ControlEvent::ApplyPreset(preset) => {
                debug!(preset = preset.label(), "pen preset applied");
                self.pen = preset.config();
                false
            }
            ControlEvent::SetFrameRect(rect) => {
                self.frame_rect = rect;
                true
            }
            ControlEvent::Capture => {
                self.capture()?;
                true
            }
            ControlEvent::Clear => {
                self.clear();
                true
            }
        };

        Ok(redraw)
    }

    /// Apply every queued event. Stops at the first failure, leaving later
    /// events queued.
    pub fn pump(&mut self, bus: &EventBus) -> OverlayResult<bool> {
        let mut redraw = false;
        for event in bus.pending() {
            redraw |= self.handle(event)?;
        }
        Ok(redraw)
    }

    /// Flatten the framed region with its ink and copy it to the clipboard.
    ///
    /// Drawing and resizing stay suspended until [`Overlay::clear`].
    pub fn capture(&mut self) -> OverlayResult<&RgbaImage> {
        if self.captured.is_some() {
            return Err(OverlayError::AlreadyCaptured);
        }

        let capture = capture_frame(
            &mut self.backend,
            self.frame_rect,
            &self.frame,
            self.engine.snapshot(),
        )?;

        // Dragging is back on while the capture is shown
        self.frame.draggable = true;
        self.suspend_ink();
        Ok(&self.captured.insert(capture).image)
    }

    /// Discard the capture and all ink, then resume drawing
    pub fn clear(&mut self) {
        let had_capture = self.captured.take().is_some();
        self.engine.clear_session();
        info!(had_capture, "overlay cleared");
    }

    /// Remove one stroke by z-order index
    pub fn remove_stroke(&mut self, index: usize) -> OverlayResult<()> {
        self.engine.remove_stroke(index)?;
        Ok(())
    }

    /// Freeze a gesture cut off by dragging or capture
    fn suspend_ink(&mut self) {
        if let StrokeEnd::Freehand(StrokeId(index)) = self.engine.freeze_stroke() {
            debug!(index, "gesture frozen: inking suspended");
        }
    }

    fn pointer_down(&mut self, point: Point) -> bool {
        if !self.accepts_ink() {
            trace!("pointer down ignored: inking disabled");
            return false;
        }
        self.engine.begin_stroke(point, self.pen);
        true
    }

    /// Whether pointer events reach the stroke engine
    pub fn accepts_ink(&self) -> bool {
        !self.frame.draggable && self.captured.is_none()
    }

    /// Whether the window chrome may resize the frame
    pub fn can_resize(&self) -> bool {
        self.captured.is_none()
    }

    pub fn state(&self) -> OverlayState {
        if self.captured.is_some() {
            OverlayState::Captured
        } else {
            OverlayState::Drawing
        }
    }

    /// What to paint for the current frame size
    pub fn render_plan(&self) -> RenderPlan {
        RenderPlan::build(
            self.frame_rect.width as f64,
            self.frame_rect.height as f64,
            &self.frame,
            self.engine.snapshot(),
            self.captured.is_some(),
        )
    }

    pub fn engine(&self) -> &StrokeEngine {
        &self.engine
    }

    pub fn pen(&self) -> PenConfig {
        self.pen
    }

    pub fn straighten(&self) -> StraightenConfig {
        self.straighten
    }

    pub fn frame(&self) -> &FrameConfig {
        &self.frame
    }

    pub fn frame_rect(&self) -> Rect {
        self.frame_rect
    }

    /// Flattened image of the current capture
    pub fn captured_image(&self) -> Option<&RgbaImage> {
        self.captured.as_ref().map(|capture| &capture.image)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
