use crate::coords::Vec2;

use super::Color;

/// A single gradient stop.
///
/// `t` is expected in [0, 1] in typical usage, but is not strictly enforced.
/// Shaders clamp and sort stops at build time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient definition in device pixel space.
///
/// Semantics:
/// - `start` and `end` are positions in the same coordinate space as geometry.
/// - Stops define premultiplied linear colors.
/// - Sampling outside the segment clamps to the edge stops.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>) -> Self {
        Self { start, end, stops }
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
            && self.stops.len() >= 2
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }
}

/// Two-point conical ("radial between two circles") gradient definition in
/// device pixel space.
///
/// Semantics:
/// - The gradient interpolates between the start circle (`t = 0`) and the end
///   circle (`t = 1`); a circle of radius `lerp(start_radius, end_radius, t)`
///   centered at `lerp(start_center, end_center, t)` is drawn at parameter `t`.
/// - Both radii are non-negative; the two circles may not be identical.
/// - Stops define premultiplied linear colors along `t`.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoPointConicalGradient {
    pub start_center: Vec2,
    pub start_radius: f32,
    pub end_center: Vec2,
    pub end_radius: f32,
    pub stops: Vec<ColorStop>,
}

impl TwoPointConicalGradient {
    pub fn new(
        start_center: Vec2,
        start_radius: f32,
        end_center: Vec2,
        end_radius: f32,
        stops: Vec<ColorStop>,
    ) -> Self {
        Self { start_center, start_radius, end_center, end_radius, stops }
    }

    /// Returns true when the gradient definition is structurally usable.
    ///
    /// A gradient between two identical circles is degenerate and rejected
    /// here, before geometry classification ever sees it.
    pub fn is_valid(&self) -> bool {
        self.start_center.is_finite()
            && self.end_center.is_finite()
            && self.start_radius.is_finite()
            && self.end_radius.is_finite()
            && self.start_radius >= 0.0
            && self.end_radius >= 0.0
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
            && self.stops.len() >= 2
            && (self.start_center != self.end_center || self.start_radius != self.end_radius)
    }
}
