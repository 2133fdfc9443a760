//! Corner sets and integer rectangles shared by the oriented queries.
//!
//! - `Corners`: the four world corners of an `OrientedRect` in fixed order,
//!   with the strict is-left containment predicate every query goes through.
//! - `IRect`: integer axis-aligned rectangle (`x, y, width, height`), used as
//!   the bounding box type and as the axis-aligned operand of queries.

use nalgebra::Vector2;

use super::segment::Segment;

/// Signed area test: `> 0` when `p` lies left of the directed line `a → b`.
#[inline]
fn is_left(a: Vector2<f32>, b: Vector2<f32>, p: Vector2<f32>) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y)
}

/// World-space corners of an oriented rectangle.
///
/// Invariants:
/// - Order is top-left, top-right, bottom-right, bottom-left of the unrotated
///   rectangle; edges run `tl → tr → br → bl → tl`.
/// - For positive width and height the quadrilateral is simple and convex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Corners {
    pub top_left: Vector2<f32>,
    pub top_right: Vector2<f32>,
    pub bottom_right: Vector2<f32>,
    pub bottom_left: Vector2<f32>,
}

impl Corners {
    #[inline]
    pub fn to_array(self) -> [Vector2<f32>; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }

    /// Arithmetic mean of the four corners, summed in corner order.
    #[inline]
    pub fn mean(&self) -> Vector2<f32> {
        let (tl, tr, br, bl) = (
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        );
        Vector2::new(
            (tl.x + tr.x + br.x + bl.x) / 4.0,
            (tl.y + tr.y + br.y + bl.y) / 4.0,
        )
    }

    /// Strict containment: `p` must lie left of all four directed edges.
    ///
    /// Points on an edge give `is_left == 0` and are rejected. NaN inputs are
    /// rejected as well since every comparison against NaN is false.
    #[inline]
    pub fn contains_point(&self, p: Vector2<f32>) -> bool {
        is_left(self.top_left, self.top_right, p) > 0.0
            && is_left(self.top_right, self.bottom_right, p) > 0.0
            && is_left(self.bottom_right, self.bottom_left, p) > 0.0
            && is_left(self.bottom_left, self.top_left, p) > 0.0
    }

    /// `true` if every corner of `other` is strictly inside `self`.
    #[inline]
    pub fn contains_corners(&self, other: &Corners) -> bool {
        other.to_array().iter().all(|&p| self.contains_point(p))
    }

    /// Directed edges in corner order.
    #[inline]
    pub(crate) fn edges(&self) -> [Segment; 4] {
        [
            Segment::new(self.top_left, self.top_right),
            Segment::new(self.top_right, self.bottom_right),
            Segment::new(self.bottom_right, self.bottom_left),
            Segment::new(self.bottom_left, self.top_left),
        ]
    }

    /// Smallest integer rectangle enclosing the corners.
    ///
    /// The low end is floored and the high end ceiled in world space, so the
    /// box never cuts into the float corners. This differs from truncating
    /// the local extents and then offsetting by the truncated position, which
    /// is off by one for negative fractional coordinates. Conversion uses
    /// saturating `as i32` (NaN becomes 0).
    pub fn bounds(&self) -> IRect {
        let pts = self.to_array();
        let (mut min, mut max) = (pts[0], pts[0]);
        for p in &pts[1..] {
            min = Vector2::new(min.x.min(p.x), min.y.min(p.y));
            max = Vector2::new(max.x.max(p.x), max.y.max(p.y));
        }
        let x0 = min.x.floor() as i32;
        let y0 = min.y.floor() as i32;
        let x1 = max.x.ceil() as i32;
        let y1 = max.y.ceil() as i32;
        IRect::new(x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0))
    }
}

/// Integer axis-aligned rectangle.
///
/// Spans `[x, x + width) × [y, y + height)`. Width and height are not
/// required to be positive; a non-positive extent is simply empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl IRect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    #[inline]
    pub fn location(&self) -> Vector2<i32> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Vector2<i32> {
        Vector2::new(self.width, self.height)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Half-open membership test.
    #[inline]
    pub fn contains_point(&self, p: Vector2<i32>) -> bool {
        self.x <= p.x && p.x < self.right() && self.y <= p.y && p.y < self.bottom()
    }

    /// Translate in place.
    #[inline]
    pub fn offset(&mut self, d: Vector2<i32>) {
        self.x = self.x.saturating_add(d.x);
        self.y = self.y.saturating_add(d.y);
    }

    /// Smallest rectangle covering both. Empty operands are not skipped.
    pub fn union(&self, other: &IRect) -> IRect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        IRect::new(x, y, right.saturating_sub(x), bottom.saturating_sub(y))
    }
}
