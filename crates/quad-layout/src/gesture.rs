// ABOUTME: Press-then-drag gesture recognition over timestamped pointer events.
// ABOUTME: Filters out taps and jittery presses before a drag is allowed to start.

use std::time::Duration;

use quad_core::{GestureSettings, Vector2D};

/// Published gesture state, readable by the host at any time
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Inactive,
    Pressing,
    Dragging(Vector2D),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEventKind {
    Down,
    /// Movement since the previous event
    Move { delta: Vector2D },
    Up,
    Cancel,
}

/// A pointer event stamped with the host's monotonic clock
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Time since an arbitrary host-chosen epoch
    pub timestamp: Duration,
    pub kind: PointerEventKind,
}

impl PointerEvent {
    pub fn down(timestamp: Duration) -> Self {
        Self {
            timestamp,
            kind: PointerEventKind::Down,
        }
    }

    pub fn moved(timestamp: Duration, dx: f32, dy: f32) -> Self {
        Self {
            timestamp,
            kind: PointerEventKind::Move {
                delta: Vector2D::new(dx, dy),
            },
        }
    }

    pub fn up(timestamp: Duration) -> Self {
        Self {
            timestamp,
            kind: PointerEventKind::Up,
        }
    }

    pub fn cancel(timestamp: Duration) -> Self {
        Self {
            timestamp,
            kind: PointerEventKind::Cancel,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Move, up or cancel without a preceding down
    NotPressed,
    /// A second down while a press or drag is in progress
    AlreadyActive,
}

/// What a single event did to the recognizer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEffect {
    Pressed,
    /// Pointer moved while the press is still being confirmed
    PressHeld,
    /// Pointer wandered too far before the press was confirmed
    PressAbandoned,
    /// Released before any drag started
    Tapped,
    DragStarted(Vector2D),
    DragUpdated(Vector2D),
    /// Released after dragging; the host should commit this translation
    DragCompleted(Vector2D),
    /// Cancelled mid-drag; the translation is discarded
    DragCancelled(Vector2D),
    Ignored(IgnoreReason),
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Inactive,
    Pressing { since: Duration, translation: Vector2D },
    Dragging { translation: Vector2D },
}

#[derive(Debug, Clone)]
pub struct DragGestureRecognizer {
    minimum_press_duration: Duration,
    movement_tolerance: f32,
    phase: Phase,
}

impl DragGestureRecognizer {
    pub fn new(settings: &GestureSettings) -> Self {
        Self {
            minimum_press_duration: settings.press_duration(),
            movement_tolerance: settings.movement_tolerance.max(0.0),
            phase: Phase::Inactive,
        }
    }

    pub fn minimum_press_duration(&self) -> Duration {
        self.minimum_press_duration
    }

    pub fn state(&self) -> GestureState {
        match self.phase {
            Phase::Inactive => GestureState::Inactive,
            Phase::Pressing { .. } => GestureState::Pressing,
            Phase::Dragging { translation } => GestureState::Dragging(translation),
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.phase, Phase::Inactive)
    }

    /// Live translation of the current drag, zero unless dragging
    pub fn translation(&self) -> Vector2D {
        match self.phase {
            Phase::Dragging { translation } => translation,
            _ => Vector2D::ZERO,
        }
    }

    pub fn handle_event(&mut self, event: &PointerEvent) -> GestureEffect {
        let effect = match (self.phase, event.kind) {
            (Phase::Inactive, PointerEventKind::Down) => {
                self.phase = Phase::Pressing {
                    since: event.timestamp,
                    translation: Vector2D::ZERO,
                };
                GestureEffect::Pressed
            }
            (Phase::Inactive, _) => GestureEffect::Ignored(IgnoreReason::NotPressed),
            (_, PointerEventKind::Down) => GestureEffect::Ignored(IgnoreReason::AlreadyActive),

            (Phase::Pressing { since, translation }, PointerEventKind::Move { delta }) => {
                let translation = translation + delta.finite_or_zero();
                // Timestamps before the press count as no time elapsed
                let elapsed = event.timestamp.saturating_sub(since);
                if elapsed >= self.minimum_press_duration {
                    self.phase = Phase::Dragging { translation };
                    GestureEffect::DragStarted(translation)
                } else if translation.length() > self.movement_tolerance {
                    self.phase = Phase::Inactive;
                    GestureEffect::PressAbandoned
                } else {
                    self.phase = Phase::Pressing { since, translation };
                    GestureEffect::PressHeld
                }
            }
            (Phase::Pressing { .. }, PointerEventKind::Up) => {
                self.phase = Phase::Inactive;
                GestureEffect::Tapped
            }
            (Phase::Pressing { .. }, PointerEventKind::Cancel) => {
                self.phase = Phase::Inactive;
                GestureEffect::PressAbandoned
            }

            (Phase::Dragging { translation }, PointerEventKind::Move { delta }) => {
                let translation = translation + delta.finite_or_zero();
                self.phase = Phase::Dragging { translation };
                GestureEffect::DragUpdated(translation)
            }
            (Phase::Dragging { translation }, PointerEventKind::Up) => {
                self.phase = Phase::Inactive;
                GestureEffect::DragCompleted(translation)
            }
            (Phase::Dragging { translation }, PointerEventKind::Cancel) => {
                self.phase = Phase::Inactive;
                GestureEffect::DragCancelled(translation)
            }
        };

        match effect {
            GestureEffect::Ignored(reason) => {
                tracing::trace!("Ignoring {:?}: {:?}", event.kind, reason);
            }
            GestureEffect::PressHeld | GestureEffect::DragUpdated(_) => {}
            _ => tracing::debug!("Gesture {:?} -> {:?}", effect, self.state()),
        }

        effect
    }

    /// Drop any press or drag in progress without completing it.
    /// Returns the state that was discarded, or None if already inactive.
    pub fn force_cancel(&mut self) -> Option<GestureState> {
        if !self.is_active() {
            return None;
        }
        let discarded = self.state();
        self.phase = Phase::Inactive;
        tracing::debug!("Gesture force-cancelled from {:?}", discarded);
        Some(discarded)
    }
}

impl Default for DragGestureRecognizer {
    fn default() -> Self {
        Self::new(&GestureSettings::default())
    }
}
