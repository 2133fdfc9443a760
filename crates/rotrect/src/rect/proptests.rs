//! Property checks over randomized rectangles.

use super::*;
use nalgebra::{vector, Vector2};
use proptest::prelude::*;

fn rect_strategy() -> impl Strategy<Value = OrientedRect> {
    (
        -1000.0f32..1000.0,
        -1000.0f32..1000.0,
        0.1f32..200.0,
        0.1f32..200.0,
        -10.0f32..10.0,
        -50.0f32..50.0,
        -50.0f32..50.0,
    )
        .prop_map(|(x, y, w, h, angle, ox, oy)| {
            OrientedRect::new(vector![x, y], vector![w, h], angle, vector![ox, oy])
        })
}

proptest! {
    #[test]
    fn axis_aligned_contains_matches_open_interval(
        x in -1000.0f32..1000.0,
        y in -1000.0f32..1000.0,
        w in 0.5f32..500.0,
        h in 0.5f32..500.0,
        u in -0.25f32..1.25,
        v in -0.25f32..1.25,
        snap in 0u8..6,
    ) {
        let r = OrientedRect::from_xywh(x, y, w, h);
        // Some draws sit exactly on an edge.
        let px = match snap {
            0 => x,
            1 => x + w,
            _ => x + u * w,
        };
        let py = match snap {
            2 => y,
            3 => y + h,
            _ => y + v * h,
        };
        let expected = x < px && px < x + w && y < py && py < y + h;
        prop_assert_eq!(r.contains_point(vector![px, py]), expected);
    }

    #[test]
    fn aabb_encloses_every_corner(r in rect_strategy()) {
        let aabb = r.aabb();
        for p in r.corners().to_array() {
            prop_assert!(aabb.x as f32 <= p.x && p.x <= aabb.right() as f32);
            prop_assert!(aabb.y as f32 <= p.y && p.y <= aabb.bottom() as f32);
        }
    }

    #[test]
    fn intersects_is_symmetric(a in rect_strategy(), b in rect_strategy(), pull in 0.0f32..1.0) {
        // Pull `b` toward `a` so a good share of pairs overlap.
        let mut b = b;
        b.position = b.position + (a.position - b.position) * pull;
        prop_assert_eq!(a.intersects(&b), b.intersects(&a));
    }

    #[test]
    fn containment_implies_intersection(
        a in rect_strategy(),
        frac in 0.05f32..0.45,
    ) {
        prop_assume!(a.width() >= 4.0 && a.height() >= 4.0);
        let k = a.width().min(a.height()) * frac;
        let mut inner = a;
        inner.inflate(vector![-k, -k]);
        prop_assert!(a.contains(&inner));
        prop_assert!(a.intersects(&inner));
        prop_assert!(inner.intersects(&a));
    }

    #[test]
    fn offset_moves_every_corner(r in rect_strategy(), dx in -100.0f32..100.0, dy in -100.0f32..100.0) {
        let mut moved = r;
        moved.offset(vector![dx, dy]);
        let d = Vector2::new(dx, dy);
        for (a, b) in r.corners().to_array().iter().zip(moved.corners().to_array()) {
            prop_assert!((a + d - b).norm() < 1e-3);
        }
        prop_assert_eq!(moved.size, r.size);
        prop_assert_eq!(moved.origin, r.origin);
        prop_assert_eq!(moved.angle, r.angle);
    }
}
