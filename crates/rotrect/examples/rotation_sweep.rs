//! Sweep a rectangle through a full turn and print its bounds at each step.
//!
//! Usage:
//!   cargo run -p rotrect --example rotation_sweep -- [steps]
//!
//! Prints one line per step: angle, center, integer AABB, and whether the
//! rotated rectangle still overlaps a fixed probe square.

use rotrect::prelude::*;

fn main() {
    let steps: u32 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(12)
        .max(1);
    let base = OrientedRect::new(vector![0.0, 0.0], vector![40.0, 6.0], 0.0, vector![20.0, 3.0]);
    let probe = OrientedRect::from_xywh(12.0, 12.0, 6.0, 6.0);
    for k in 0..steps {
        let angle = k as f32 * std::f32::consts::TAU / steps as f32;
        let r = base.with_angle(angle);
        let c = r.center();
        let b = r.aabb();
        println!(
            "angle={angle:.3} center=({:.2},{:.2}) aabb=({},{} {}x{}) hits_probe={}",
            c.x,
            c.y,
            b.x,
            b.y,
            b.width,
            b.height,
            r.intersects(&probe)
        );
    }
}
