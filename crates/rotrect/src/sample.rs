//! Reproducible random oriented rectangles.
//!
//! Purpose
//! - Feed benchmarks, property checks and the CLI `sample` command with
//!   rectangle pairs that can be regenerated from a `(seed, index)` token.
//!
//! Model
//! - Position uniform in `[-extent, extent]²`, width/height uniform in
//!   `[size_min, size_max]`, angle uniform in `[0, 2π)` when `rotate` is set.
//! - Pivot is either the rectangle center or a uniform point inside it.
//! - Pairs place the second rectangle within `pair_spread` of the first so a
//!   useful share of pairs overlap.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

use crate::rect::OrientedRect;

/// Invalid sampler configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleError {
    InvalidParams { reason: String },
}

impl SampleError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid sampler params: {reason}"),
        }
    }
}

impl std::error::Error for SampleError {}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RectCfg {
    /// Positions are drawn from `[-extent, extent]` on both axes.
    pub extent: f32,
    pub size_min: f32,
    pub size_max: f32,
    /// Draw a random angle in `[0, 2π)`; otherwise angle is zero.
    pub rotate: bool,
    /// Pivot at the rectangle center; otherwise a random point inside it.
    pub centered_origin: bool,
    /// Max distance on each axis between the two positions of a pair.
    pub pair_spread: f32,
}

impl Default for RectCfg {
    fn default() -> Self {
        Self {
            extent: 100.0,
            size_min: 1.0,
            size_max: 40.0,
            rotate: true,
            centered_origin: true,
            pair_spread: 30.0,
        }
    }
}

impl RectCfg {
    pub fn validate(&self) -> Result<(), SampleError> {
        let finite = [self.extent, self.size_min, self.size_max, self.pair_spread];
        if !finite.iter().all(|v| v.is_finite()) {
            return Err(SampleError::invalid("all bounds must be finite"));
        }
        if self.extent < 0.0 || self.pair_spread < 0.0 {
            return Err(SampleError::invalid("extent and pair_spread must be >= 0"));
        }
        if self.size_min <= 0.0 {
            return Err(SampleError::invalid("size_min must be > 0"));
        }
        if self.size_min > self.size_max {
            return Err(SampleError::invalid("size_min <= size_max required"));
        }
        // rand scales each range width up slightly; keep a factor 2 headroom.
        let widths = [
            2.0 * self.extent,
            2.0 * self.pair_spread,
            self.size_max - self.size_min,
        ];
        if !widths.iter().all(|w| (2.0 * w).is_finite()) {
            return Err(SampleError::invalid("range width overflows f32"));
        }
        Ok(())
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Symmetric uniform draw in `[-half, half]`; zero width collapses to 0.
fn symmetric<R: Rng>(rng: &mut R, half: f32) -> f32 {
    if half > 0.0 {
        rng.gen_range(-half..=half)
    } else {
        0.0
    }
}

fn draw_with<R: Rng>(rng: &mut R, cfg: &RectCfg, center: Vector2<f32>, spread: f32) -> OrientedRect {
    let position = center + Vector2::new(symmetric(rng, spread), symmetric(rng, spread));
    let size = Vector2::new(
        rng.gen_range(cfg.size_min..=cfg.size_max),
        rng.gen_range(cfg.size_min..=cfg.size_max),
    );
    let angle = if cfg.rotate {
        rng.gen::<f32>() * std::f32::consts::TAU
    } else {
        0.0
    };
    let origin = if cfg.centered_origin {
        size * 0.5
    } else {
        Vector2::new(rng.gen::<f32>() * size.x, rng.gen::<f32>() * size.y)
    };
    OrientedRect::new(position, size, angle, origin)
}

/// Draw one rectangle.
///
/// Call `RectCfg::validate` first; `gen_range` panics on an inverted size range.
pub fn draw_rect(cfg: RectCfg, tok: ReplayToken) -> OrientedRect {
    let mut rng = tok.to_std_rng();
    draw_with(&mut rng, &cfg, Vector2::zeros(), cfg.extent)
}

/// Draw a pair; the second rectangle lands within `pair_spread` of the first.
pub fn draw_pair(cfg: RectCfg, tok: ReplayToken) -> (OrientedRect, OrientedRect) {
    let mut rng = tok.to_std_rng();
    let a = draw_with(&mut rng, &cfg, Vector2::zeros(), cfg.extent);
    let b = draw_with(&mut rng, &cfg, a.position, cfg.pair_spread);
    (a, b)
}
