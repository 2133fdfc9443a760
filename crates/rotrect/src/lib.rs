//! Oriented rectangles in 2D.
//!
//! A rectangle with a position, a size, a rotation angle and a pivot, plus the
//! boolean queries that spatial code needs from it (overlap, containment) and
//! the bounding box used to hand it to axis-aligned structures.
//!
//! API Policy
//! - Every query derives the four world corners through one routine
//!   (`OrientedRect::corners`), so all queries agree bit-for-bit.
//! - Nothing is cached; mutating a field changes every derived result.
//! - Inputs are never validated. Negative sizes, huge angles and NaNs flow
//!   through the arithmetic and produce degenerate (but consistent) answers.

pub mod rect;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::{vector, Vector2 as Vec2};
pub use rect::{Corners, IRect, OrientedRect};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::rect::{Corners, IRect, OrientedRect};
    pub use crate::sample::{draw_pair, draw_rect, RectCfg, ReplayToken, SampleError};
    pub use nalgebra::{vector, Vector2 as Vec2};
}
