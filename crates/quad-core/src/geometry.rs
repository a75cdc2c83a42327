// ABOUTME: Plain 2D value types shared by the gesture and layout code.
// ABOUTME: Sizes, points, vectors, split ratios, pane rectangles and quadrants.

use std::ops::{Add, AddAssign, Index, Neg, Sub};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("Split ratio component {axis} must be within 0.0..=1.0 (got {value})")]
    RatioOutOfRange { axis: char, value: f32 },
}

/// Width and height, both never negative
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size2D {
    pub width: f32,
    pub height: f32,
}

impl Size2D {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Negative and non-finite dimensions become 0
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: non_negative(width),
            height: non_negative(height),
        }
    }

    pub fn center(&self) -> Point2D {
        Point2D::new(self.width / 2.0, self.height / 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add<Vector2D> for Point2D {
    type Output = Point2D;

    fn add(self, rhs: Vector2D) -> Point2D {
        Point2D::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

impl Sub for Point2D {
    type Output = Vector2D;

    fn sub(self, rhs: Point2D) -> Vector2D {
        Vector2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A translation offset. Zero when nothing is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2D {
    pub dx: f32,
    pub dy: f32,
}

impl Vector2D {
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    pub fn length(&self) -> f32 {
        self.dx.hypot(self.dy)
    }

    /// Replace NaN/infinite components with 0
    pub fn finite_or_zero(self) -> Self {
        Self {
            dx: if self.dx.is_finite() { self.dx } else { 0.0 },
            dy: if self.dy.is_finite() { self.dy } else { 0.0 },
        }
    }
}

impl Add for Vector2D {
    type Output = Vector2D;

    fn add(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.dx + rhs.dx, self.dy + rhs.dy)
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, rhs: Vector2D) {
        self.dx += rhs.dx;
        self.dy += rhs.dy;
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.dx - rhs.dx, self.dy - rhs.dy)
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        Vector2D::new(-self.dx, -self.dy)
    }
}

/// Fraction of the width (x) and height (y) given to the left and top panes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitRatio {
    pub x: f32,
    pub y: f32,
}

impl SplitRatio {
    pub const EVEN: Self = Self { x: 0.5, y: 0.5 };

    /// Clamp both components into 0.0..=1.0. Non-finite components fall back to 0.5.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: clamp_ratio(x),
            y: clamp_ratio(y),
        }
    }

    /// Like `new`, but rejects values outside 0.0..=1.0 instead of clamping
    pub fn try_new(x: f32, y: f32) -> Result<Self, GeometryError> {
        for (axis, value) in [('x', x), ('y', y)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(GeometryError::RatioOutOfRange { axis, value });
            }
        }
        Ok(Self { x, y })
    }

    pub fn validate(&self) -> Result<(), GeometryError> {
        Self::try_new(self.x, self.y).map(|_| ())
    }
}

impl Default for SplitRatio {
    fn default() -> Self {
        Self::EVEN
    }
}

/// Axis-aligned rectangle in container coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PaneRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PaneRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width: non_negative(width),
            height: non_negative(height),
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Point2D {
        Point2D::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    pub fn contains(&self, point: Point2D) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    /// True when the interiors overlap (shared edges do not count)
    pub fn intersects(&self, other: &PaneRect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    /// Reading order: left to right, top to bottom
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Quadrant::TopLeft => "top-left",
            Quadrant::TopRight => "top-right",
            Quadrant::BottomLeft => "bottom-left",
            Quadrant::BottomRight => "bottom-right",
        }
    }
}

/// The four pane rectangles of one layout pass
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct QuadRects {
    pub top_left: PaneRect,
    pub top_right: PaneRect,
    pub bottom_left: PaneRect,
    pub bottom_right: PaneRect,
}

impl QuadRects {
    pub fn get(&self, quadrant: Quadrant) -> &PaneRect {
        match quadrant {
            Quadrant::TopLeft => &self.top_left,
            Quadrant::TopRight => &self.top_right,
            Quadrant::BottomLeft => &self.bottom_left,
            Quadrant::BottomRight => &self.bottom_right,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Quadrant, &PaneRect)> + '_ {
        Quadrant::ALL.into_iter().map(move |q| (q, self.get(q)))
    }
}

impl Index<Quadrant> for QuadRects {
    type Output = PaneRect;

    fn index(&self, quadrant: Quadrant) -> &PaneRect {
        self.get(quadrant)
    }
}

/// Where the drag handle sits and how big it is
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HandleGeometry {
    pub center: Point2D,
    pub size: Size2D,
}

impl HandleGeometry {
    /// Bounding rectangle of the handle
    pub fn frame(&self) -> PaneRect {
        PaneRect::new(
            self.center.x - self.size.width / 2.0,
            self.center.y - self.size.height / 2.0,
            self.size.width,
            self.size.height,
        )
    }
}

fn non_negative(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

fn clamp_ratio(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_normalizes_negative_and_nan() {
        let size = Size2D::new(-5.0, f32::NAN);
        assert_eq!(size, Size2D::ZERO);
    }

    #[test]
    fn split_ratio_new_clamps() {
        let ratio = SplitRatio::new(1.5, -0.2);
        assert_eq!(ratio, SplitRatio { x: 1.0, y: 0.0 });

        let ratio = SplitRatio::new(f32::NAN, 0.3);
        assert_eq!(ratio, SplitRatio { x: 0.5, y: 0.3 });
    }

    #[test]
    fn split_ratio_try_new_rejects_out_of_range() {
        assert!(SplitRatio::try_new(0.25, 0.75).is_ok());
        assert_eq!(
            SplitRatio::try_new(0.5, 1.01),
            Err(GeometryError::RatioOutOfRange {
                axis: 'y',
                value: 1.01
            })
        );
        assert!(SplitRatio::try_new(f32::NAN, 0.5).is_err());
    }

    #[test]
    fn pane_rect_never_negative() {
        let rect = PaneRect::new(10.0, 10.0, -3.0, 4.0);
        assert_eq!(rect.width, 0.0);
        assert_eq!(rect.height, 4.0);
    }

    #[test]
    fn touching_rects_do_not_intersect() {
        let a = PaneRect::new(0.0, 0.0, 10.0, 10.0);
        let b = PaneRect::new(10.0, 0.0, 10.0, 10.0);
        let c = PaneRect::new(5.0, 5.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&c));
    }

    #[test]
    fn handle_frame_is_centered() {
        let handle = HandleGeometry {
            center: Point2D::new(100.0, 50.0),
            size: Size2D::new(40.0, 40.0),
        };
        let frame = handle.frame();
        assert_eq!(frame, PaneRect::new(80.0, 30.0, 40.0, 40.0));
        assert!(frame.contains(Point2D::new(100.0, 50.0)));
        assert!(!frame.contains(Point2D::new(121.0, 50.0)));
    }

    #[test]
    fn quad_rects_iterate_in_reading_order() {
        let rects = QuadRects::default();
        let order: Vec<Quadrant> = rects.iter().map(|(q, _)| q).collect();
        assert_eq!(order, Quadrant::ALL.to_vec());
    }

    #[test]
    fn vector_arithmetic() {
        let mut v = Vector2D::new(1.0, 2.0);
        v += Vector2D::new(3.0, -1.0);
        assert_eq!(v, Vector2D::new(4.0, 1.0));
        assert_eq!(-v, Vector2D::new(-4.0, -1.0));
        assert_eq!(Point2D::new(1.0, 1.0) + v, Point2D::new(5.0, 2.0));
        assert_eq!(Vector2D::new(f32::INFINITY, 2.0).finite_or_zero(), Vector2D::new(0.0, 2.0));
    }
}
