//! Coordinate and geometry types shared across the paint model and rasterizer.
//!
//! Canonical CPU space:
//! - Device pixels, origin top-left
//! - +X right, +Y down
//!
//! Gradient shaders derive a second, per-shader "canonical" space via an
//! [`Affine`] transform chosen so the per-pixel math is as simple as possible.

mod affine;
mod vec2;

pub use affine::Affine;
pub use vec2::Vec2;
