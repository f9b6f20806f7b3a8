//! Typed control events from the settings panel and pointer input

use crate::frame::Rect;
use crate::{OverlayError, OverlayResult};
use crossbeam_channel::{unbounded, Receiver, Sender};
use ink::{PenPreset, Point, Rgba};

/// Everything the UI can tell the overlay
#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent {
    /// Pointer pressed inside the frame (frame-local coordinates)
    PointerDown(Point),
    PointerMove(Point),
    PointerUp(Point),
    SetBackgroundOpacity(f64),
    SetPenWidth(f64),
    SetPenColor(Rgba),
    SetBorderThickness(f64),
    SetStraighten(bool),
    SetStraightenThreshold(f64),
    SetDraggable(bool),
    ApplyPreset(PenPreset),
    /// Frame moved or resized on screen
    SetFrameRect(Rect),
    /// Flatten, copy to clipboard, suspend drawing
    Capture,
    /// Discard the capture and all ink
    Clear,
}

/// Channel carrying control events to the overlay's thread
pub struct EventBus {
    tx: Sender<ControlEvent>,
    rx: Receiver<ControlEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self { tx, rx }
    }

    /// Handle for a UI control
    pub fn sender(&self) -> EventSender {
        EventSender {
            tx: self.tx.clone(),
        }
    }

    /// Events queued so far, without blocking
    pub fn pending(&self) -> impl Iterator<Item = ControlEvent> + '_ {
        self.rx.try_iter()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloneable sending half of an [`EventBus`]
#[derive(Clone)]
pub struct EventSender {
    tx: Sender<ControlEvent>,
}

impl EventSender {
    pub fn send(&self, event: ControlEvent) -> OverlayResult<()> {
        self.tx.send(event).map_err(|_| OverlayError::Disconnected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_arrive_in_order() {
        let bus = EventBus::new();
        let a = bus.sender();
        let b = a.clone();
        a.send(ControlEvent::SetPenWidth(3.0)).unwrap();
        b.send(ControlEvent::Capture).unwrap();
        a.send(ControlEvent::Clear).unwrap();

        let got: Vec<ControlEvent> = bus.pending().collect();
        assert_eq!(
            got,
            vec![
                ControlEvent::SetPenWidth(3.0),
                ControlEvent::Capture,
                ControlEvent::Clear
            ]
        );
        assert_eq!(bus.pending().count(), 0);
    }

    #[test]
    fn send_after_bus_dropped_fails() {
        let bus = EventBus::new();
        let sender = bus.sender();
        drop(bus);
        assert!(matches!(
            sender.send(ControlEvent::Clear),
            Err(OverlayError::Disconnected)
        ));
    }
}
