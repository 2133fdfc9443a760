//! Oriented rectangle primitive (corners, bounds, overlap and containment).
//!
//! Purpose
//! - Provide `OrientedRect`, a `Copy` value type positioned by an anchor,
//!   sized, and rotated about a pivot (`origin`) measured from that anchor.
//! - Provide `IRect`, the integer axis-aligned rectangle returned by
//!   `OrientedRect::aabb` and accepted by the axis-aligned query variants.
//!
//! Conventions
//! - Corner order is top-left, top-right, bottom-right, bottom-left of the
//!   unrotated rectangle, rotated with `x' = x cos θ − y sin θ`,
//!   `y' = x sin θ + y cos θ`.
//! - Containment is strict: points on an edge are outside.
//! - Overlap uses a closest-point-to-center test run in both directions, not a
//!   separating-axis test. See `OrientedRect::intersects` for its limits.

mod oriented;
mod segment;
mod types;

pub use oriented::OrientedRect;
pub use types::{Corners, IRect};

#[cfg(test)]
mod proptests;
