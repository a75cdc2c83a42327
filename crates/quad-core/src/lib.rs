// ABOUTME: Shared types and configuration for quadsplit.
// ABOUTME: Defines geometry value types, tunable settings, and config file handling.

pub mod config;
pub mod geometry;
pub mod settings;

pub use config::{Config, ConfigError};
pub use geometry::{
    GeometryError, HandleGeometry, PaneRect, Point2D, QuadRects, Quadrant, Size2D, SplitRatio,
    Vector2D,
};
pub use settings::{GestureSettings, LayoutSettings, OverdragPolicy};
