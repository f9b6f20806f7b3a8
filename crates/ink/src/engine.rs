//! Stroke engine: owns the session and drives the pointer gesture protocol
//!
//! The session is an ordered list of strokes. Order is creation order and
//! also z-order; later strokes draw on top. At most one stroke is active
//! (receiving samples) at a time.

use crate::geom::Point;
use crate::pen::{PenConfig, StraightenConfig};
use crate::straighten::{fit_line, Fit};
use crate::stroke::Stroke;
use crate::{InkError, InkResult};
use tracing::{debug, trace, warn};

/// Position of a stroke in the session at the time it was created.
///
/// Indices shift down when an earlier stroke is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StrokeId(pub usize);

/// How a gesture finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeEnd {
    /// No stroke was active
    Idle,
    /// Stroke kept as drawn
    Freehand(StrokeId),
    /// Stroke replaced by its straight projection
    Straightened(StrokeId),
}

impl StrokeEnd {
    /// Whether the session content changed
    pub fn changed(&self) -> bool {
        !matches!(self, StrokeEnd::Idle)
    }
}

/// Stroke collection plus the active gesture
#[derive(Debug, Default)]
pub struct StrokeEngine {
    strokes: Vec<Stroke>,
    active: Option<usize>,
}

impl StrokeEngine {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a stroke at `point` with a copy of the current pen.
    ///
    /// A gesture still in progress is ended first, as drawn, without
    /// appending a sample or straightening it.
    pub fn begin_stroke(&mut self, point: Point, pen: PenConfig) -> StrokeId {
        if let StrokeEnd::Freehand(StrokeId(index)) = self.freeze_stroke() {
            warn!(index, "stroke begun while another was active; ending it as drawn");
        }

        self.strokes.push(Stroke::new(pen.width, pen.color, point));
        let index = self.strokes.len() - 1;
        self.active = Some(index);

        trace!(index, x = point.x, y = point.y, "begin stroke");
        StrokeId(index)
    }

    /// Append a sample to the active stroke. Returns false when idle.
    pub fn continue_stroke(&mut self, point: Point) -> bool {
        match self.active_stroke_mut() {
            Some(stroke) => {
                stroke.push(point);
                true
            }
            None => false,
        }
    }

    /// Append the final sample, optionally straighten, and end the gesture
    pub fn end_stroke(&mut self, point: Point, straighten: StraightenConfig) -> StrokeEnd {
        let Some(index) = self.active.take() else {
            return StrokeEnd::Idle;
        };

        let stroke = &mut self.strokes[index];
        stroke.push(point);

        if !straighten.enabled {
            return StrokeEnd::Freehand(StrokeId(index));
        }

        match fit_line(stroke.points(), straighten.threshold) {
            Fit::Straight(points) => {
                debug!(index, points = points.len(), "stroke straightened");
                stroke.replace_points(points);
                StrokeEnd::Straightened(StrokeId(index))
            }
            Fit::Rejected {
                index: sample,
                distance,
            } => {
                debug!(
                    index,
                    sample,
                    distance,
                    threshold = straighten.threshold,
                    "stroke kept freehand"
                );
                StrokeEnd::Freehand(StrokeId(index))
            }
            Fit::TooShort => StrokeEnd::Freehand(StrokeId(index)),
        }
    }

    /// End the active gesture as drawn: no final sample, no straightening
    pub fn freeze_stroke(&mut self) -> StrokeEnd {
        match self.active.take() {
            Some(index) => StrokeEnd::Freehand(StrokeId(index)),
            None => StrokeEnd::Idle,
        }
    }

    /// Remove the stroke at `index`; later strokes shift down by one
    pub fn remove_stroke(&mut self, index: usize) -> InkResult<Stroke> {
        let len = self.strokes.len();
        if index >= len {
            return Err(InkError::InvalidIndex { index, len });
        }

        self.active = match self.active {
            Some(active) if active == index => None,
            Some(active) if active > index => Some(active - 1),
            other => other,
        };

        debug!(index, "stroke removed");
        Ok(self.strokes.remove(index))
    }

    /// Drop every stroke and any gesture in progress
    pub fn clear_session(&mut self) {
        debug!(strokes = self.strokes.len(), "session cleared");
        self.strokes.clear();
        self.active = None;
    }

    /// Strokes in z-order, including the one being drawn
    pub fn snapshot(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Index of the stroke receiving samples
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_stroke(&self) -> Option<&Stroke> {
        self.active.map(|index| &self.strokes[index])
    }

    pub fn is_drawing(&self) -> bool {
        self.active.is_some()
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    fn active_stroke_mut(&mut self) -> Option<&mut Stroke> {
        self.active.map(|index| &mut self.strokes[index])
    }
}
