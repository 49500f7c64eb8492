//! Gradient shader compilation.
//!
//! Responsibilities:
//! - classify gradient geometry once at construction (`geometry`)
//! - synthesize per-pixel stage sequences once per draw setup
//!   (`conical`, `linear`)
//! - reject unusable descriptors before any pipeline exists
//!
//! The per-pixel evaluation itself lives in `raster`; this module only
//! decides which stages run and with which coefficients.

pub mod conical;
pub mod geometry;
pub mod linear;

use thiserror::Error;

use crate::paint::Paint;
use crate::raster::CompiledPaint;

pub use conical::ConicalGradientShader;
pub use geometry::{classify, GradientGeometry};
pub use linear::LinearGradientShader;

/// Why a shader could not be constructed.
///
/// Construction failure is the only fatal condition in shader compilation;
/// everything downstream of a successful construction is a normal branch.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ShaderError {
    /// The paint descriptor fails structural validation.
    #[error("invalid gradient descriptor: {0}")]
    InvalidDescriptor(&'static str),
    /// The canonicalizing transform for the gradient does not exist.
    #[error("degenerate gradient geometry: centers cannot be mapped onto the unit segment")]
    DegenerateGeometry,
}

/// Compiles a paint for per-pixel evaluation.
///
/// This is the factory boundary: on error no compiled paint exists and the
/// caller is expected to fall back (solid color, no paint) rather than draw
/// with undefined geometry.
pub fn compile(paint: &Paint) -> Result<CompiledPaint, ShaderError> {
    match paint {
        Paint::Solid(color) => Ok(CompiledPaint::Solid(*color)),
        Paint::Linear(g) => LinearGradientShader::new(g.clone()).map(|s| s.compile()),
        Paint::Conical(g) => ConicalGradientShader::new(g.clone()).map(|s| s.compile()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::{Color, ColorStop, TwoPointConicalGradient};

    #[test]
    fn solid_paint_compiles_to_solid() {
        let c = Color::from_straight(0.5, 0.5, 0.5, 1.0);
        let compiled = compile(&Paint::solid(c)).unwrap();
        assert!(matches!(compiled, CompiledPaint::Solid(got) if got == c));
    }

    #[test]
    fn invalid_conical_paint_does_not_compile() {
        let g = TwoPointConicalGradient::new(
            Vec2::zero(),
            1.0,
            Vec2::zero(),
            1.0,
            vec![
                ColorStop::new(0.0, Color::transparent()),
                ColorStop::new(1.0, Color::transparent()),
            ],
        );
        assert!(compile(&Paint::Conical(g)).is_err());
    }
}
