//! Serializable views of query results.

use rotrect::{IRect, OrientedRect, Vec2};
use serde::Serialize;

use crate::table::fields_of;

fn xy(v: Vec2<f32>) -> [f32; 2] {
    [v.x, v.y]
}

/// Bounding box in `[x, y, width, height]` form.
fn irect(r: IRect) -> [i32; 4] {
    [r.x, r.y, r.width, r.height]
}

/// Derived geometry of one rectangle plus whichever queries were asked.
#[derive(Debug, Serialize)]
pub struct RectReport {
    /// `[x, y, w, h, angle, ox, oy]`.
    pub rect: [f32; 7],
    /// Top-left, top-right, bottom-right, bottom-left.
    pub corners: [[f32; 2]; 4],
    pub center: [f32; 2],
    pub aabb: [i32; 4],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_point: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other: Option<PairRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aabb_rect: Option<IRectQuery>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct IRectQuery {
    pub rect: [i32; 4],
    pub intersects: bool,
    pub contains: bool,
}

impl RectReport {
    pub fn describe(r: &OrientedRect) -> Self {
        Self {
            rect: fields_of(r),
            corners: r.corners().to_array().map(xy),
            center: xy(r.center()),
            aabb: irect(r.aabb()),
            contains_point: None,
            other: None,
            aabb_rect: None,
        }
    }

    pub fn with_point(mut self, r: &OrientedRect, p: Vec2<f32>) -> Self {
        self.contains_point = Some(r.contains_point(p));
        self
    }

    pub fn with_other(mut self, r: &OrientedRect, other: &OrientedRect) -> Self {
        self.other = Some(PairRow::evaluate(0, r, other));
        self
    }

    pub fn with_irect(mut self, r: &OrientedRect, rect: IRect) -> Self {
        self.aabb_rect = Some(IRectQuery {
            rect: irect(rect),
            intersects: r.intersects_rect(&rect),
            contains: r.contains_rect(&rect),
        });
        self
    }
}

/// Query results for one `(a, b)` pair.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PairRow {
    pub row: usize,
    pub intersects: bool,
    pub a_contains_b: bool,
    pub b_contains_a: bool,
}

impl PairRow {
    pub fn evaluate(row: usize, a: &OrientedRect, b: &OrientedRect) -> Self {
        Self {
            row,
            intersects: a.intersects(b),
            a_contains_b: a.contains(b),
            b_contains_a: b.contains(a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rotrect::vector;
    use serde_json::json;

    #[test]
    fn describe_axis_aligned() {
        let r = OrientedRect::from_xywh(0.0, 0.0, 10.0, 4.0);
        let report = RectReport::describe(&r).with_point(&r, vector![5.0, 2.0]);
        let v = serde_json::to_value(&report).unwrap();
        assert_eq!(v["rect"], json!([0.0, 0.0, 10.0, 4.0, 0.0, 0.0, 0.0]));
        assert_eq!(v["corners"], json!([[0.0, 0.0], [10.0, 0.0], [10.0, 4.0], [0.0, 4.0]]));
        assert_eq!(v["center"], json!([5.0, 2.0]));
        assert_eq!(v["aabb"], json!([0, 0, 10, 4]));
        assert_eq!(v["contains_point"], json!(true));
        assert!(v.get("other").is_none());
        assert!(v.get("aabb_rect").is_none());
    }

    #[test]
    fn pair_and_irect_queries() {
        let outer = OrientedRect::from_xywh(0.0, 0.0, 20.0, 20.0);
        let inner = OrientedRect::from_xywh(5.0, 5.0, 4.0, 4.0);
        assert_eq!(
            PairRow::evaluate(3, &outer, &inner),
            PairRow {
                row: 3,
                intersects: true,
                a_contains_b: true,
                b_contains_a: false,
            }
        );

        let report = RectReport::describe(&outer).with_irect(&outer, IRect::new(100, 100, 5, 5));
        assert_eq!(
            report.aabb_rect,
            Some(IRectQuery {
                rect: [100, 100, 5, 5],
                intersects: false,
                contains: false,
            })
        );
    }
}
