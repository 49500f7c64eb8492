//! Paint model shared between callers and the rasterizer.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - paint sources (solid, gradients)
//! - the resolved color ramp gradients sample from
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;
pub mod ramp;

pub use color::Color;
pub use gradient::{ColorStop, LinearGradient, TwoPointConicalGradient};
pub use ramp::ColorRamp;

/// Paint source for filling geometry.
///
/// Extend by adding variants (`Image`, `Pattern`, sweep gradients) while
/// keeping the enum stable for shader dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    Linear(LinearGradient),
    Conical(TwoPointConicalGradient),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    #[inline]
    pub fn is_opaque(&self) -> bool {
        match self {
            Paint::Solid(c) => c.a >= 1.0,
            Paint::Linear(g) => g.stops.iter().all(|s| s.color.a >= 1.0),
            // Areas outside the cone are left unpainted, so a conical
            // gradient can never be treated as opaque even when every stop is.
            Paint::Conical(_) => false,
        }
    }
}
