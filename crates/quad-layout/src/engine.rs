// ABOUTME: Computes the four quadrant rectangles and the handle position.
// ABOUTME: Pure function of container size, split ratio and drag translation.

use quad_core::{
    HandleGeometry, LayoutSettings, PaneRect, QuadRects, Size2D, SplitRatio, Vector2D,
};

/// Pane sizes before they are placed in the 2x2 grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneExtents {
    pub left_width: f32,
    pub right_width: f32,
    pub top_height: f32,
    pub bottom_height: f32,
}

/// Output of one layout pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadPartition {
    pub extents: PaneExtents,
    pub rects: QuadRects,
    pub handle: HandleGeometry,
}

/// Range of translations for which no pane gets clamped
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TranslationBounds {
    pub min: Vector2D,
    pub max: Vector2D,
}

impl TranslationBounds {
    pub fn clamp(&self, translation: Vector2D) -> Vector2D {
        let translation = translation.finite_or_zero();
        Vector2D::new(
            translation.dx.clamp(self.min.dx, self.max.dx),
            translation.dy.clamp(self.min.dy, self.max.dy),
        )
    }

    pub fn contains(&self, translation: Vector2D) -> bool {
        (self.min.dx..=self.max.dx).contains(&translation.dx)
            && (self.min.dy..=self.max.dy).contains(&translation.dy)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PartitionLayoutEngine {
    settings: LayoutSettings,
}

impl PartitionLayoutEngine {
    pub fn new(settings: LayoutSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &LayoutSettings {
        &self.settings
    }

    /// Pane widths and heights. The near side gains exactly what the far side
    /// loses until one of them is clamped at 0 or the container edge.
    pub fn extents(&self, size: Size2D, ratio: SplitRatio, translation: Vector2D) -> PaneExtents {
        let size = Size2D::new(size.width, size.height);
        let ratio = SplitRatio::new(ratio.x, ratio.y);
        let t = translation.finite_or_zero();
        let p = self.settings.padding_factor;

        PaneExtents {
            top_height: clamp_to(p * ratio.y * size.height + t.dy, size.height),
            bottom_height: clamp_to(p * (1.0 - ratio.y) * size.height - t.dy, size.height),
            left_width: clamp_to(p * ratio.x * size.width + t.dx, size.width),
            right_width: clamp_to(p * (1.0 - ratio.x) * size.width - t.dx, size.width),
        }
    }

    pub fn compute(&self, size: Size2D, ratio: SplitRatio, translation: Vector2D) -> QuadPartition {
        let size = Size2D::new(size.width, size.height);
        let extents = self.extents(size, ratio, translation);
        let gap = self.settings.divider_width.max(0.0);

        // The 2x2 block is centred in the container
        let block_width = extents.left_width + gap + extents.right_width;
        let block_height = extents.top_height + gap + extents.bottom_height;
        let left_x = ((size.width - block_width) / 2.0).max(0.0);
        let top_y = ((size.height - block_height) / 2.0).max(0.0);
        // A collapsed far pane sits on the container edge rather than past it
        let right_x = (left_x + extents.left_width + gap).min(size.width);
        let bottom_y = (top_y + extents.top_height + gap).min(size.height);

        let rects = QuadRects {
            top_left: PaneRect::new(left_x, top_y, extents.left_width, extents.top_height),
            top_right: PaneRect::new(right_x, top_y, extents.right_width, extents.top_height),
            bottom_left: PaneRect::new(left_x, bottom_y, extents.left_width, extents.bottom_height),
            bottom_right: PaneRect::new(
                right_x,
                bottom_y,
                extents.right_width,
                extents.bottom_height,
            ),
        };

        let handle = HandleGeometry {
            center: size.center() + translation.finite_or_zero(),
            size: self.settings.handle_size,
        };

        QuadPartition {
            extents,
            rects,
            handle,
        }
    }

    pub fn translation_bounds(&self, size: Size2D, ratio: SplitRatio) -> TranslationBounds {
        let size = Size2D::new(size.width, size.height);
        let ratio = SplitRatio::new(ratio.x, ratio.y);
        let p = self.settings.padding_factor;

        let (min_dx, max_dx) = axis_bounds(
            p * ratio.x * size.width,
            p * (1.0 - ratio.x) * size.width,
            size.width,
        );
        let (min_dy, max_dy) = axis_bounds(
            p * ratio.y * size.height,
            p * (1.0 - ratio.y) * size.height,
            size.height,
        );

        TranslationBounds {
            min: Vector2D::new(min_dx, min_dy),
            max: Vector2D::new(max_dx, max_dy),
        }
    }
}

/// Translation range keeping both `near + t` and `far - t` inside 0..=limit
fn axis_bounds(near: f32, far: f32, limit: f32) -> (f32, f32) {
    let min = (-near).max(far - limit);
    let max = far.min(limit - near);
    if min <= max {
        (min, max)
    } else {
        let mid = (min + max) / 2.0;
        (mid, mid)
    }
}

fn clamp_to(value: f32, limit: f32) -> f32 {
    value.clamp(0.0, limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 0.001;

    fn size() -> Size2D {
        Size2D::new(1000.0, 600.0)
    }

    #[test]
    fn even_split_at_rest() {
        let engine = PartitionLayoutEngine::default();
        let ext = engine.extents(size(), SplitRatio::EVEN, Vector2D::ZERO);

        assert!((ext.left_width - 450.0).abs() < EPS);
        assert!((ext.right_width - 450.0).abs() < EPS);
        assert!((ext.top_height - 270.0).abs() < EPS);
        assert!((ext.bottom_height - 270.0).abs() < EPS);
    }

    #[test]
    fn panes_tile_padded_container_at_rest() {
        let engine = PartitionLayoutEngine::default();
        for ratio in [SplitRatio::new(0.2, 0.8), SplitRatio::new(0.65, 0.1), SplitRatio::EVEN] {
            let ext = engine.extents(size(), ratio, Vector2D::ZERO);
            assert!((ext.left_width + ext.right_width - 0.9 * 1000.0).abs() < EPS);
            assert!((ext.top_height + ext.bottom_height - 0.9 * 600.0).abs() < EPS);
        }
    }

    #[test]
    fn translation_moves_space_between_sides() {
        let engine = PartitionLayoutEngine::default();
        let ratio = SplitRatio::new(0.4, 0.6);
        let rest = engine.extents(size(), ratio, Vector2D::ZERO);

        for t in [Vector2D::new(50.0, -30.0), Vector2D::new(-120.0, 90.0)] {
            let moved = engine.extents(size(), ratio, t);
            let left_gain = moved.left_width - rest.left_width;
            let right_gain = moved.right_width - rest.right_width;
            assert!((left_gain + right_gain).abs() < EPS);
            assert!((left_gain - t.dx).abs() < EPS);

            let top_gain = moved.top_height - rest.top_height;
            let bottom_gain = moved.bottom_height - rest.bottom_height;
            assert!((top_gain + bottom_gain).abs() < EPS);
            assert!((top_gain - t.dy).abs() < EPS);
        }
    }

    #[test]
    fn oversized_translation_clamps_to_zero() {
        let engine = PartitionLayoutEngine::default();
        let ext = engine.extents(size(), SplitRatio::EVEN, Vector2D::new(5000.0, -5000.0));

        assert_eq!(ext.right_width, 0.0);
        assert_eq!(ext.left_width, 1000.0);
        assert_eq!(ext.top_height, 0.0);
        assert_eq!(ext.bottom_height, 600.0);

        let partition = engine.compute(size(), SplitRatio::EVEN, Vector2D::new(-5000.0, 5000.0));
        for (_, rect) in partition.rects.iter() {
            assert!(rect.width >= 0.0);
            assert!(rect.height >= 0.0);
        }
        assert_eq!(partition.rects.top_left.width, 0.0);
        assert_eq!(partition.rects.bottom_right.height, 0.0);
    }

    #[test]
    fn rects_form_a_centered_grid_without_overlap() {
        let engine = PartitionLayoutEngine::new(LayoutSettings {
            divider_width: 4.0,
            ..Default::default()
        });
        let partition = engine.compute(size(), SplitRatio::EVEN, Vector2D::new(30.0, -10.0));
        let rects = partition.rects;

        assert!((rects.top_right.x - rects.top_left.right() - 4.0).abs() < EPS);
        assert!((rects.bottom_left.y - rects.top_left.bottom() - 4.0).abs() < EPS);
        assert_eq!(rects.top_left.x, rects.bottom_left.x);
        assert_eq!(rects.top_right.y, rects.top_left.y);

        let block_width = rects.top_right.right() - rects.top_left.x;
        assert!((rects.top_left.x - (1000.0 - block_width) / 2.0).abs() < EPS);

        let all: Vec<PaneRect> = rects.iter().map(|(_, r)| *r).collect();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert!(!a.intersects(b));
            }
        }
    }

    #[test]
    fn handle_follows_translation() {
        let engine = PartitionLayoutEngine::default();
        let partition = engine.compute(size(), SplitRatio::new(0.3, 0.3), Vector2D::new(12.0, -8.0));

        assert_eq!(partition.handle.center.x, 512.0);
        assert_eq!(partition.handle.center.y, 292.0);
        assert_eq!(partition.handle.size, Size2D::new(40.0, 40.0));
    }

    #[test]
    fn out_of_range_ratio_is_clamped() {
        let engine = PartitionLayoutEngine::default();
        let ext = engine.extents(size(), SplitRatio { x: 1.7, y: -0.4 }, Vector2D::ZERO);
        assert!((ext.left_width - 900.0).abs() < EPS);
        assert_eq!(ext.right_width, 0.0);
        assert_eq!(ext.top_height, 0.0);
        assert!((ext.bottom_height - 540.0).abs() < EPS);
    }

    #[test]
    fn layout_is_deterministic() {
        let engine = PartitionLayoutEngine::default();
        let ratio = SplitRatio::new(0.37, 0.61);
        let t = Vector2D::new(13.7, -42.1);
        let a = engine.compute(size(), ratio, t);
        let b = engine.compute(size(), ratio, t);
        assert_eq!(a, b);
        for q in quad_core::Quadrant::ALL {
            assert_eq!(a.rects[q].width.to_bits(), b.rects[q].width.to_bits());
            assert_eq!(a.rects[q].x.to_bits(), b.rects[q].x.to_bits());
        }
    }

    #[test]
    fn collapsed_panes_stay_inside_container() {
        let engine = PartitionLayoutEngine::new(LayoutSettings {
            divider_width: 6.0,
            ..Default::default()
        });
        let partition = engine.compute(size(), SplitRatio::EVEN, Vector2D::new(5000.0, 5000.0));
        let rects = partition.rects;

        assert_eq!(rects.top_right.width, 0.0);
        assert_eq!(rects.top_right.x, 1000.0);
        assert_eq!(rects.bottom_left.height, 0.0);
        assert_eq!(rects.bottom_left.y, 600.0);
        for (_, rect) in rects.iter() {
            assert!(rect.x >= 0.0 && rect.right() <= 1000.0);
            assert!(rect.y >= 0.0 && rect.bottom() <= 600.0);
        }
    }

    #[test]
    fn zero_sized_container() {
        let engine = PartitionLayoutEngine::default();
        let partition = engine.compute(Size2D::ZERO, SplitRatio::EVEN, Vector2D::new(10.0, 10.0));
        for (_, rect) in partition.rects.iter() {
            assert_eq!(rect.area(), 0.0);
        }
    }

    #[test]
    fn bounds_keep_every_pane_unclamped() {
        let engine = PartitionLayoutEngine::default();
        let ratio = SplitRatio::new(0.25, 0.5);
        let bounds = engine.translation_bounds(size(), ratio);

        assert!((bounds.min.dx + 225.0).abs() < EPS);
        assert!((bounds.max.dx - 675.0).abs() < EPS);
        assert!((bounds.min.dy + 270.0).abs() < EPS);
        assert!((bounds.max.dy - 270.0).abs() < EPS);

        let ext = engine.extents(size(), ratio, bounds.max);
        assert!(ext.right_width.abs() < EPS);
        assert!(ext.bottom_height.abs() < EPS);

        assert_eq!(
            bounds.clamp(Vector2D::new(-9999.0, 10.0)),
            Vector2D::new(bounds.min.dx, 10.0)
        );
        assert!(bounds.contains(Vector2D::ZERO));
    }
}
