use crate::coords::{Affine, Vec2};

use super::ShaderError;

// Tolerance for "numerically indistinguishable from zero" scalar checks,
// sized for coordinate magnitudes in device pixels.
pub(crate) const SCALAR_NEARLY_ZERO: f32 = 1.0 / (1 << 12) as f32;

#[inline]
pub(crate) fn nearly_zero(v: f32) -> bool {
    v.abs() <= SCALAR_NEARLY_ZERO
}

/// Classified geometry of a two-point conical gradient.
///
/// Computed once at shader construction and immutable afterwards. Each
/// variant carries only what its per-pixel branch needs: the canonicalizing
/// transform into the space where that branch's math is simplest.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GradientGeometry {
    /// The two centers coincide; the gradient is a plain radial fill.
    ///
    /// Canonical space translates the shared center to the origin and scales
    /// by `1 / max(r0, r1)`, so the outer circle lands on the unit circle.
    Concentric { canonical: Affine },
    /// General two-point case.
    ///
    /// Canonical space maps the start center to `(0, 0)` and the end center
    /// to `(1, 0)`, putting the whole circle family on the x-axis.
    TwoPoint { canonical: Affine },
}

impl GradientGeometry {
    #[inline]
    pub fn canonical(&self) -> Affine {
        match *self {
            GradientGeometry::Concentric { canonical } => canonical,
            GradientGeometry::TwoPoint { canonical } => canonical,
        }
    }
}

/// Classifies a circle pair and derives its canonicalizing transform.
///
/// The only fatal outcome is a singular two-point mapping, which surfaces as
/// [`ShaderError::DegenerateGeometry`]; callers must refuse to produce a
/// shader rather than render with undefined geometry.
pub fn classify(c0: Vec2, r0: f32, c1: Vec2, r1: f32) -> Result<GradientGeometry, ShaderError> {
    if nearly_zero((c0 - c1).length()) {
        // Concentric case: pretend we are radial (with a tiny twist applied
        // at synthesis). Translating by the end center keeps the remap stage
        // parametrized the same way as the two-point solver.
        let scale = 1.0 / r0.max(r1);
        let canonical = Affine::translate(-c1.x, -c1.y).then(Affine::scale(scale));
        return Ok(GradientGeometry::Concentric { canonical });
    }

    let canonical =
        Affine::map_to_unit_x(c0, c1).ok_or(ShaderError::DegenerateGeometry)?;
    Ok(GradientGeometry::TwoPoint { canonical })
}
