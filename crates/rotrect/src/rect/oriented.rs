//! `OrientedRect`: rectangle rotated about a pivot.
//!
//! Model
//! - The unrotated rectangle spans `[-origin, size - origin]` in local space.
//! - Local corners are rotated by `angle` about the local zero, then translated
//!   by `position`. So `position` is where the pivot lands in world space.
//!
//! Why one corner routine
//! - `corners()` is the only place the trigonometry happens. Center, bounds,
//!   containment and overlap all consume its output, which keeps them
//!   consistent with each other down to the last bit.

use nalgebra::Vector2;

use super::types::{Corners, IRect};

/// Rectangle with position, size, rotation angle (radians) and pivot.
///
/// Invariants:
/// - None are enforced. `size` may be zero or negative (mirrored/degenerate),
///   `angle` is never wrapped, NaN/Inf propagate silently.
/// - Derived values (`corners`, `center`, `aabb`) are recomputed on every call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientedRect {
    /// World position of the pivot.
    pub position: Vector2<f32>,
    /// Width and height.
    pub size: Vector2<f32>,
    /// Rotation in radians about `origin`.
    pub angle: f32,
    /// Pivot offset measured from the unrotated top-left corner.
    pub origin: Vector2<f32>,
}

impl OrientedRect {
    /// Rectangle from all four fields.
    #[inline]
    pub fn new(position: Vector2<f32>, size: Vector2<f32>, angle: f32, origin: Vector2<f32>) -> Self {
        Self {
            position,
            size,
            angle,
            origin,
        }
    }

    /// Axis-aligned rectangle at `(x, y)` with zero angle and zero origin.
    #[inline]
    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(
            Vector2::new(x, y),
            Vector2::new(width, height),
            0.0,
            Vector2::zeros(),
        )
    }

    /// Takes location and size from an integer rectangle.
    #[inline]
    pub fn from_irect(rect: IRect, angle: f32, origin: Vector2<f32>) -> Self {
        Self::new(
            Vector2::new(rect.x as f32, rect.y as f32),
            Vector2::new(rect.width as f32, rect.height as f32),
            angle,
            origin,
        )
    }

    /// Same rectangle with `angle` replaced.
    #[inline]
    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    /// Same rectangle with the pivot moved to `origin`; `position` is kept.
    #[inline]
    pub fn with_origin(mut self, origin: Vector2<f32>) -> Self {
        self.origin = origin;
        self
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.position.x
    }
    #[inline]
    pub fn set_x(&mut self, x: f32) {
        self.position.x = x;
    }
    #[inline]
    pub fn y(&self) -> f32 {
        self.position.y
    }
    #[inline]
    pub fn set_y(&mut self, y: f32) {
        self.position.y = y;
    }
    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }
    #[inline]
    pub fn set_width(&mut self, width: f32) {
        self.size.x = width;
    }
    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }
    #[inline]
    pub fn set_height(&mut self, height: f32) {
        self.size.y = height;
    }

    /// World corners: local `[-origin, size - origin]` rotated by `angle`,
    /// then translated by `position`.
    pub fn corners(&self) -> Corners {
        let (sin, cos) = self.angle.sin_cos();
        let x = -self.origin.x;
        let y = -self.origin.y;
        let w = self.size.x + x;
        let h = self.size.y + y;
        let p = self.position;
        let rotate = |lx: f32, ly: f32| {
            Vector2::new(lx * cos - ly * sin + p.x, lx * sin + ly * cos + p.y)
        };
        Corners {
            top_left: rotate(x, y),
            top_right: rotate(w, y),
            bottom_right: rotate(w, h),
            bottom_left: rotate(x, h),
        }
    }

    /// Mean of the four world corners.
    #[inline]
    pub fn center(&self) -> Vector2<f32> {
        self.corners().mean()
    }

    /// Integer box enclosing the rotated rectangle (floor low, ceil high).
    #[inline]
    pub fn aabb(&self) -> IRect {
        self.corners().bounds()
    }

    /// Strict point containment; edge points are outside.
    #[inline]
    pub fn contains_point(&self, p: Vector2<f32>) -> bool {
        self.corners().contains_point(p)
    }

    /// `true` if all four corners of `other` are strictly inside `self`.
    ///
    /// Checking corners suffices because both shapes are convex.
    #[inline]
    pub fn contains(&self, other: &OrientedRect) -> bool {
        self.corners().contains_corners(&other.corners())
    }

    /// Containment of an integer rectangle taken as zero angle, zero origin.
    #[inline]
    pub fn contains_rect(&self, rect: &IRect) -> bool {
        self.contains(&OrientedRect::from(*rect))
    }

    /// Overlap test.
    ///
    /// Runs the closest-point test in both directions: the point on each edge
    /// of one rectangle closest to the other's center must land strictly
    /// inside that other rectangle. Symmetric by construction.
    ///
    /// This is not a separating-axis test. Long thin rectangles that cross
    /// each other far from both centers can be reported disjoint, and
    /// rectangles that only touch along an edge are disjoint.
    #[inline]
    pub fn intersects(&self, other: &OrientedRect) -> bool {
        self.intersects_any_edge(other) || other.intersects_any_edge(self)
    }

    /// Overlap with an integer rectangle taken as zero angle, zero origin.
    #[inline]
    pub fn intersects_rect(&self, rect: &IRect) -> bool {
        self.intersects(&OrientedRect::from(*rect))
    }

    /// Grow each edge outward by `d` (negative shrinks), anchored at the pivot.
    ///
    /// `size += 2d` and `origin += d`, so `position` (the pivot) stays put and
    /// every edge moves by `d` in its own direction. No clamping: sizes may go
    /// negative.
    #[inline]
    pub fn inflate(&mut self, d: Vector2<f32>) {
        self.size = Vector2::new(d.x * 2.0 + self.size.x, d.y * 2.0 + self.size.y);
        self.origin = Vector2::new(d.x + self.origin.x, d.y + self.origin.y);
    }

    /// Translate by `d`. Size, angle and origin are untouched.
    #[inline]
    pub fn offset(&mut self, d: Vector2<f32>) {
        self.position += d;
    }

    fn intersects_any_edge(&self, other: &OrientedRect) -> bool {
        let own = self.corners();
        let center = own.mean();
        other
            .corners()
            .edges()
            .iter()
            .any(|edge| own.contains_point(edge.closest_point(center)))
    }
}

impl From<IRect> for OrientedRect {
    #[inline]
    fn from(rect: IRect) -> Self {
        Self::from_irect(rect, 0.0, Vector2::zeros())
    }
}
