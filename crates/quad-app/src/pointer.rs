// ABOUTME: Translates window mouse input into timestamped pointer events.
// ABOUTME: Tracks cursor position so moves can be reported as deltas.

use std::time::{Duration, Instant};

use quad_core::{PaneRect, Point2D};
use quad_layout::PointerEvent;

/// Per-window mouse tracking for a single drag handle
pub struct PointerTracker {
    epoch: Instant,
    position: Option<Point2D>,
    pressed: bool,
}

impl PointerTracker {
    pub fn new(epoch: Instant) -> Self {
        Self {
            epoch,
            position: None,
            pressed: false,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    fn timestamp(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.epoch)
    }

    /// Returns a move event while the button is held on the handle
    pub fn cursor_moved(&mut self, position: Point2D, now: Instant) -> Option<PointerEvent> {
        let previous = self.position.replace(position);
        if !self.pressed {
            return None;
        }
        let delta = position - previous?;
        Some(PointerEvent::moved(self.timestamp(now), delta.dx, delta.dy))
    }

    /// Presses only count when they land on the handle
    pub fn button_pressed(&mut self, handle_frame: PaneRect, now: Instant) -> Option<PointerEvent> {
        let position = self.position?;
        if self.pressed || !handle_frame.contains(position) {
            return None;
        }
        self.pressed = true;
        Some(PointerEvent::down(self.timestamp(now)))
    }

    pub fn button_released(&mut self, now: Instant) -> Option<PointerEvent> {
        if !std::mem::replace(&mut self.pressed, false) {
            return None;
        }
        Some(PointerEvent::up(self.timestamp(now)))
    }

    /// Release the press without completing it
    pub fn cancel(&mut self, now: Instant) -> Option<PointerEvent> {
        if !std::mem::replace(&mut self.pressed, false) {
            return None;
        }
        Some(PointerEvent::cancel(self.timestamp(now)))
    }

    /// Losing focus mid-press cancels rather than completes the drag
    pub fn focus_lost(&mut self, now: Instant) -> Option<PointerEvent> {
        self.cancel(now)
    }
}
