//! Geometric value types used by the fitter.
//!
//! Everything here is `Copy` and allocation-free: boxes, planes in
//! `n · p + d = 0` form, and parametric lines.

mod aabb;
mod line;
mod plane;

pub use aabb::Aabb;
pub use line::Line;
pub use plane::Plane;

/// Threshold below which a denominator is treated as zero.
pub const EPSILON: f32 = 1e-6;
