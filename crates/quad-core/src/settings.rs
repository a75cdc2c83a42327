// ABOUTME: Tunable parameters for the drag gesture and the quadrant layout.
// ABOUTME: Every field has a default so partial config files stay valid.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Size2D, SplitRatio};

/// What happens to the translation once a pane has shrunk to zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OverdragPolicy {
    /// Keep accumulating past the clamp point. Reversing the drag does nothing
    /// until the pointer comes back over the point where the pane hit zero.
    #[default]
    Unclamped,
    /// Stop the translation where a pane hits zero, so reversing responds at once
    Clamped,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureSettings {
    /// Seconds the pointer must stay down before a drag may start
    pub minimum_press_duration: f64,

    /// Movement allowed while the press is still being confirmed
    pub movement_tolerance: f32,
}

impl GestureSettings {
    pub fn press_duration(&self) -> Duration {
        if self.minimum_press_duration > 0.0 {
            Duration::try_from_secs_f64(self.minimum_press_duration).unwrap_or(Duration::MAX)
        } else {
            Duration::ZERO
        }
    }
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            minimum_press_duration: 0.05,
            movement_tolerance: 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Split used before anything has been dragged
    pub initial_split_ratio: SplitRatio,

    /// Uniform shrink applied to every pane (0.9 leaves a 10% gutter)
    pub padding_factor: f32,

    /// Gap between neighbouring panes
    pub divider_width: f32,

    pub handle_size: Size2D,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            initial_split_ratio: SplitRatio::EVEN,
            padding_factor: 0.9,
            divider_width: 1.0,
            handle_size: Size2D::new(40.0, 40.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_press_duration_is_fifty_ms() {
        let settings = GestureSettings::default();
        assert_eq!(settings.press_duration(), Duration::from_millis(50));
    }

    #[test]
    fn negative_press_duration_means_immediate() {
        let settings = GestureSettings {
            minimum_press_duration: -1.0,
            ..Default::default()
        };
        assert_eq!(settings.press_duration(), Duration::ZERO);
    }
}
