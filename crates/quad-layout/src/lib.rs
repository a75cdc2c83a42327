// ABOUTME: Four-pane split layout with a draggable crosshair handle.
// ABOUTME: Gesture recognition, pane partitioning, and the component that joins them.

pub mod engine;
pub mod gesture;
mod split;

pub use engine::{PaneExtents, PartitionLayoutEngine, QuadPartition, TranslationBounds};
pub use gesture::{
    DragGestureRecognizer, GestureEffect, GestureState, IgnoreReason, PointerEvent,
    PointerEventKind,
};
pub use split::{DefaultHandle, Panes, QuadLayout, QuadSplit};
