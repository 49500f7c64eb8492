use crate::coords::{Affine, Vec2};
use crate::paint::{ColorRamp, LinearGradient};
use crate::raster::{CompiledPaint, Pipeline, Stage};

use super::ShaderError;

/// A constructed linear gradient shader.
///
/// Shares the conical shader's canonicalization: the gradient axis is mapped
/// onto the unit x segment, after which the parameter is just the canonical
/// x coordinate.
#[derive(Debug, Clone)]
pub struct LinearGradientShader {
    gradient: LinearGradient,
    canonical: Affine,
    ramp: ColorRamp,
}

impl LinearGradientShader {
    pub fn new(gradient: LinearGradient) -> Result<Self, ShaderError> {
        if !gradient.is_valid() {
            return Err(ShaderError::InvalidDescriptor(
                "linear gradient descriptor is not usable",
            ));
        }
        let canonical = Affine::map_to_unit_x(gradient.start, gradient.end)
            .ok_or(ShaderError::DegenerateGeometry)?;
        let ramp = ColorRamp::resolve(&gradient.stops);
        Ok(Self { gradient, canonical, ramp })
    }

    /// Original gradient axis, unmodified by canonicalization.
    #[inline]
    pub fn axis(&self) -> (Vec2, Vec2) {
        (self.gradient.start, self.gradient.end)
    }

    #[inline]
    pub fn ramp(&self) -> &ColorRamp {
        &self.ramp
    }

    pub fn synthesize(&self) -> Pipeline {
        Pipeline::new(vec![Stage::Transform(self.canonical), Stage::XyToLinearT], vec![])
    }

    pub fn compile(&self) -> CompiledPaint {
        CompiledPaint::Gradient { pipeline: self.synthesize(), ramp: self.ramp.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::{Color, ColorStop};

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1.0e-5
    }

    fn stops() -> Vec<ColorStop> {
        vec![
            ColorStop::new(0.0, Color::from_straight(0.0, 0.0, 0.0, 1.0)),
            ColorStop::new(1.0, Color::from_straight(1.0, 1.0, 1.0, 1.0)),
        ]
    }

    #[test]
    fn parameter_is_projection_onto_axis() {
        let s = LinearGradientShader::new(LinearGradient::new(
            Vec2::zero(),
            Vec2::new(10.0, 0.0),
            stops(),
        ))
        .unwrap();
        let p = s.synthesize();

        let (t, valid) = p.eval(5.0, 3.0); // offset off-axis must not matter
        assert!(valid);
        assert!(close(t, 0.5));

        let (t, _) = p.eval(-2.0, 0.0);
        assert!(close(t, -0.2));
    }

    #[test]
    fn degenerate_axis_is_refused() {
        let g = LinearGradient::new(Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0), stops());
        assert!(LinearGradientShader::new(g).is_err());
    }
}
