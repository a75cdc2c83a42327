// ABOUTME: Four-pane split component tying the gesture recognizer to the layout engine.
// ABOUTME: Owns the committed drag offset and the host's opaque pane and handle content.

use quad_core::{
    Config, HandleGeometry, OverdragPolicy, PaneRect, QuadRects, Quadrant, Size2D, SplitRatio,
    Vector2D,
};

use crate::engine::PartitionLayoutEngine;
use crate::gesture::{DragGestureRecognizer, GestureEffect, GestureState, PointerEvent};

/// Handle content used when the host does not supply its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DefaultHandle;

/// One value per quadrant. The split never looks inside these.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Panes<P> {
    pub top_left: P,
    pub top_right: P,
    pub bottom_left: P,
    pub bottom_right: P,
}

impl<P> Panes<P> {
    pub fn new(top_left: P, top_right: P, bottom_left: P, bottom_right: P) -> Self {
        Self {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }

    pub fn get(&self, quadrant: Quadrant) -> &P {
        match quadrant {
            Quadrant::TopLeft => &self.top_left,
            Quadrant::TopRight => &self.top_right,
            Quadrant::BottomLeft => &self.bottom_left,
            Quadrant::BottomRight => &self.bottom_right,
        }
    }

    pub fn get_mut(&mut self, quadrant: Quadrant) -> &mut P {
        match quadrant {
            Quadrant::TopLeft => &mut self.top_left,
            Quadrant::TopRight => &mut self.top_right,
            Quadrant::BottomLeft => &mut self.bottom_left,
            Quadrant::BottomRight => &mut self.bottom_right,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Quadrant, &P)> + '_ {
        Quadrant::ALL.into_iter().map(move |q| (q, self.get(q)))
    }
}

/// Layout of one pass, paired with the content to place at each rectangle
#[derive(Debug)]
pub struct QuadLayout<'a, P, H> {
    pub rects: QuadRects,
    pub handle: HandleGeometry,
    pub gesture: GestureState,
    panes: &'a Panes<P>,
    handle_content: &'a H,
}

impl<'a, P, H> QuadLayout<'a, P, H> {
    pub fn pane(&self, quadrant: Quadrant) -> (&'a P, PaneRect) {
        (self.panes.get(quadrant), self.rects[quadrant])
    }

    pub fn handle_content(&self) -> &'a H {
        self.handle_content
    }

    /// Panes in reading order with their rectangles
    pub fn iter(&self) -> impl Iterator<Item = (Quadrant, &'a P, PaneRect)> + 'a {
        let panes = self.panes;
        let rects = self.rects;
        Quadrant::ALL
            .into_iter()
            .map(move |q| (q, panes.get(q), rects[q]))
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, GestureState::Dragging(_))
    }
}

#[derive(Debug, Clone)]
pub struct QuadSplit<P, H = DefaultHandle> {
    panes: Panes<P>,
    handle: H,
    recognizer: DragGestureRecognizer,
    engine: PartitionLayoutEngine,
    split_ratio: SplitRatio,
    committed: Vector2D,
    /// Offset the layout uses right now, advanced one move at a time
    live: Vector2D,
    /// Recognizer translation already folded into `live`
    applied: Vector2D,
    overdrag: OverdragPolicy,
    container: Size2D,
}

impl<P> QuadSplit<P> {
    /// Split with the default handle and default settings
    pub fn new(panes: Panes<P>) -> Self {
        Self::with_handle(panes, DefaultHandle)
    }
}

impl<P, H> QuadSplit<P, H> {
    pub fn with_handle(panes: Panes<P>, handle: H) -> Self {
        Self::from_config(panes, handle, &Config::default())
    }

    pub fn from_config(panes: Panes<P>, handle: H, config: &Config) -> Self {
        Self {
            panes,
            handle,
            recognizer: DragGestureRecognizer::new(&config.gesture),
            engine: PartitionLayoutEngine::new(config.layout),
            split_ratio: SplitRatio::new(
                config.layout.initial_split_ratio.x,
                config.layout.initial_split_ratio.y,
            ),
            committed: Vector2D::ZERO,
            live: Vector2D::ZERO,
            applied: Vector2D::ZERO,
            overdrag: config.overdrag,
            container: Size2D::ZERO,
        }
    }

    pub fn panes(&self) -> &Panes<P> {
        &self.panes
    }

    pub fn panes_mut(&mut self) -> &mut Panes<P> {
        &mut self.panes
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    pub fn gesture_state(&self) -> GestureState {
        self.recognizer.state()
    }

    pub fn committed_offset(&self) -> Vector2D {
        self.committed
    }

    pub fn split_ratio(&self) -> SplitRatio {
        self.split_ratio
    }

    pub fn set_split_ratio(&mut self, ratio: SplitRatio) {
        self.split_ratio = SplitRatio::new(ratio.x, ratio.y);
        self.reconstrain();
    }

    pub fn overdrag(&self) -> OverdragPolicy {
        self.overdrag
    }

    pub fn set_overdrag(&mut self, policy: OverdragPolicy) {
        self.overdrag = policy;
        self.reconstrain();
    }

    pub fn container_size(&self) -> Size2D {
        self.container
    }

    /// Record the container size used by later layout passes
    pub fn set_container_size(&mut self, size: Size2D) {
        self.container = Size2D::new(size.width, size.height);
        self.reconstrain();
    }

    /// Feed one pointer event. A completed drag is folded into the committed offset.
    pub fn handle_event(&mut self, event: &PointerEvent) -> GestureEffect {
        let effect = self.recognizer.handle_event(event);
        match effect {
            GestureEffect::DragStarted(translation) | GestureEffect::DragUpdated(translation) => {
                self.advance(translation);
            }
            GestureEffect::DragCompleted(translation) => {
                self.advance(translation);
                self.committed = self.live;
                self.applied = Vector2D::ZERO;
                tracing::debug!(
                    "Committed drag of ({:.1}, {:.1}), offset now ({:.1}, {:.1})",
                    translation.dx,
                    translation.dy,
                    self.committed.dx,
                    self.committed.dy
                );
            }
            GestureEffect::DragCancelled(_) => self.discard_drag(),
            _ => {}
        }
        effect
    }

    /// Abandon the current gesture without committing it
    pub fn cancel_gesture(&mut self) -> Option<GestureState> {
        let discarded = self.recognizer.force_cancel();
        self.discard_drag();
        discarded
    }

    /// Committed offset plus the in-progress drag, as the layout will use it
    pub fn live_translation(&self) -> Vector2D {
        self.live
    }

    pub fn layout(&self) -> QuadLayout<'_, P, H> {
        let partition =
            self.engine
                .compute(self.container, self.split_ratio, self.live_translation());
        QuadLayout {
            rects: partition.rects,
            handle: partition.handle,
            gesture: self.recognizer.state(),
            panes: &self.panes,
            handle_content: &self.handle,
        }
    }

    /// The split ratio with the committed offset folded in, for the current container
    pub fn effective_split_ratio(&self) -> SplitRatio {
        let p = self.engine.settings().padding_factor;
        let span_x = p * self.container.width;
        let span_y = p * self.container.height;
        let x = if span_x > 0.0 {
            self.split_ratio.x + self.committed.dx / span_x
        } else {
            self.split_ratio.x
        };
        let y = if span_y > 0.0 {
            self.split_ratio.y + self.committed.dy / span_y
        } else {
            self.split_ratio.y
        };
        SplitRatio::new(x, y)
    }

    /// Forget all committed dragging and drop any gesture in progress
    pub fn reset(&mut self) {
        self.recognizer.force_cancel();
        self.committed = Vector2D::ZERO;
        self.discard_drag();
    }

    /// Apply the part of the drag not yet seen. Clamping each step keeps a
    /// reversal from having to unwind movement that was already cut off.
    fn advance(&mut self, translation: Vector2D) {
        let delta = (translation - self.applied).finite_or_zero();
        self.live = self.constrain(self.live + delta);
        self.applied = translation;
    }

    fn discard_drag(&mut self) {
        self.live = self.committed;
        self.applied = Vector2D::ZERO;
    }

    fn reconstrain(&mut self) {
        self.committed = self.constrain(self.committed);
        self.live = self.constrain(self.live);
    }

    fn constrain(&self, translation: Vector2D) -> Vector2D {
        match self.overdrag {
            OverdragPolicy::Unclamped => translation.finite_or_zero(),
            OverdragPolicy::Clamped => self
                .engine
                .translation_bounds(self.container, self.split_ratio)
                .clamp(translation),
        }
    }
}
