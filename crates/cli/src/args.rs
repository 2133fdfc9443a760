//! Command-line value parsers for rectangles and points.
//!
//! - Rectangle: `x,y,w,h[,angle[,ox,oy]]` (angle in radians).
//! - Integer rectangle: `x,y,w,h`.
//! - Point: `x,y`.
//!
//! Whitespace around fields is ignored.

use rotrect::{IRect, OrientedRect, Vec2};
use std::str::FromStr;

fn fields<T: FromStr>(s: &str) -> Result<Vec<T>, String> {
    s.split(',')
        .enumerate()
        .map(|(index, raw)| {
            let text = raw.trim();
            text.parse::<T>()
                .map_err(|_| format!("field {index} is not a valid number: {text:?}"))
        })
        .collect()
}

pub fn parse_rect(s: &str) -> Result<OrientedRect, String> {
    let v: Vec<f32> = fields(s)?;
    let (angle, origin) = match v.len() {
        4 => (0.0, Vec2::zeros()),
        5 => (v[4], Vec2::zeros()),
        7 => (v[4], Vec2::new(v[5], v[6])),
        found => return Err(format!("expected 4, 5 or 7 fields, found {found}")),
    };
    Ok(OrientedRect::new(
        Vec2::new(v[0], v[1]),
        Vec2::new(v[2], v[3]),
        angle,
        origin,
    ))
}

pub fn parse_irect(s: &str) -> Result<IRect, String> {
    let v: Vec<i32> = fields(s)?;
    match v[..] {
        [x, y, w, h] => Ok(IRect::new(x, y, w, h)),
        _ => Err(format!("expected 4 fields, found {}", v.len())),
    }
}

pub fn parse_point(s: &str) -> Result<Vec2<f32>, String> {
    let v: Vec<f32> = fields(s)?;
    match v[..] {
        [x, y] => Ok(Vec2::new(x, y)),
        _ => Err(format!("expected x,y, got {s:?}")),
    }
}
