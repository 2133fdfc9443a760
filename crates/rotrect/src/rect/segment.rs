use nalgebra::Vector2;

/// Closed line segment `a → b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Segment {
    pub a: Vector2<f32>,
    pub b: Vector2<f32>,
}

impl Segment {
    #[inline]
    pub fn new(a: Vector2<f32>, b: Vector2<f32>) -> Self {
        Self { a, b }
    }

    /// Point on the segment closest to `p` (projection clamped to the endpoints).
    ///
    /// A zero-length segment takes neither clamp branch and divides `0/0`, so
    /// the result is NaN. Callers feed it to strict predicates, which reject it.
    #[inline]
    pub fn closest_point(&self, p: Vector2<f32>) -> Vector2<f32> {
        let ab = self.b - self.a;
        let t = (p - self.a).dot(&ab);
        if t < 0.0 {
            return self.a;
        }
        let sqlen = ab.norm_squared();
        if t > sqlen {
            return self.b;
        }
        self.a + ab * (t / sqlen)
    }
}
