use crate::coords::Vec2;
use crate::paint::{ColorRamp, TwoPointConicalGradient};
use crate::raster::{CompiledPaint, ConicalCoeffs, Pipeline, PostStage, Stage};

use super::geometry::{classify, nearly_zero, GradientGeometry};
use super::ShaderError;

/// A constructed two-point conical gradient shader.
///
/// Construction classifies the circle pair once; synthesis turns the result
/// into a pipeline stage sequence once per draw setup. Both outputs are pure
/// functions of the descriptor and immutable for the shader's lifetime.
#[derive(Debug, Clone)]
pub struct ConicalGradientShader {
    gradient: TwoPointConicalGradient,
    geometry: GradientGeometry,
    ramp: ColorRamp,
}

impl ConicalGradientShader {
    /// Builds the shader, or refuses to.
    ///
    /// Identical circles are rejected as an invalid descriptor before the
    /// classifier runs; a singular two-point mapping surfaces as
    /// [`ShaderError::DegenerateGeometry`]. On any error no shader exists.
    pub fn new(gradient: TwoPointConicalGradient) -> Result<Self, ShaderError> {
        if !gradient.is_valid() {
            return Err(ShaderError::InvalidDescriptor(
                "two-point conical gradient descriptor is not usable",
            ));
        }
        let geometry = classify(
            gradient.start_center,
            gradient.start_radius,
            gradient.end_center,
            gradient.end_radius,
        )?;
        let ramp = ColorRamp::resolve(&gradient.stops);
        Ok(Self { gradient, geometry, ramp })
    }

    // ── queries ───────────────────────────────────────────────────────────

    /// Original start circle, unmodified by canonicalization.
    #[inline]
    pub fn start_circle(&self) -> (Vec2, f32) {
        (self.gradient.start_center, self.gradient.start_radius)
    }

    /// Original end circle, unmodified by canonicalization.
    #[inline]
    pub fn end_circle(&self) -> (Vec2, f32) {
        (self.gradient.end_center, self.gradient.end_radius)
    }

    #[inline]
    pub fn geometry(&self) -> &GradientGeometry {
        &self.geometry
    }

    #[inline]
    pub fn ramp(&self) -> &ColorRamp {
        &self.ramp
    }

    // ── synthesis ─────────────────────────────────────────────────────────

    /// Synthesizes the per-pixel stage sequence for this shader.
    ///
    /// Every valid shader produces a valid pipeline; the degenerate branches
    /// are normal stage selections plus masking, never errors.
    pub fn synthesize(&self) -> Pipeline {
        let d_radius = self.gradient.end_radius - self.gradient.start_radius;

        let mut stages = Vec::with_capacity(4);
        let mut post = Vec::new();
        stages.push(Stage::Transform(self.geometry.canonical()));

        match self.geometry {
            GradientGeometry::Concentric { .. } => {
                stages.push(Stage::XyToRadius);

                // Canonical distance runs over [0, max(r0, r1)] = [0, 1], but
                // the gradient runs from r0 at the inner circle to r1 at the
                // outer one, so remap the distance onto that segment.
                let scale = self.gradient.start_radius.max(self.gradient.end_radius) / d_radius;
                let bias = -self.gradient.start_radius / d_radius;
                stages.push(Stage::RemapT { scale, bias });
            }
            GradientGeometry::TwoPoint { .. } => {
                let d_center = (self.gradient.start_center - self.gradient.end_center).length();
                let coeffs = self.coeffs(d_center, d_radius);

                let well_behaved;
                if nearly_zero(coeffs.coeff_a) {
                    // The focal point sits on the edge of the end circle and
                    // the quadratic collapses to a linear equation.
                    stages.push(Stage::ConicalLinear(coeffs));
                    well_behaved = false;
                } else {
                    well_behaved = d_radius.abs() >= d_center;

                    // Overlapping circles composite from the parameter value
                    // nearest +inf down, so the larger root wins. A shrinking
                    // radius flips the orientation under the canonical
                    // mapping; the smaller root then preserves that same
                    // cover order.
                    let flipped = well_behaved && d_radius < 0.0;
                    stages.push(if flipped {
                        Stage::ConicalQuadMin(coeffs)
                    } else {
                        Stage::ConicalQuadMax(coeffs)
                    });
                }

                if !well_behaved {
                    log::debug!(
                        "two-point conical gradient is not well behaved; masking degenerate pixels"
                    );
                    stages.push(Stage::MaskNegativeRadius(coeffs));
                    post.push(PostStage::ApplyMask);
                }
            }
        }

        Pipeline::new(stages, post)
    }

    /// Compiles the shader for the executor: stage sequence plus ramp.
    pub fn compile(&self) -> CompiledPaint {
        CompiledPaint::Gradient { pipeline: self.synthesize(), ramp: self.ramp.clone() }
    }

    /// Solver coefficients in canonical units.
    ///
    /// The centers were squashed onto the unit segment, so every radius
    /// quantity is divided by the real center distance.
    fn coeffs(&self, d_center: f32, d_radius: f32) -> ConicalCoeffs {
        let coeff_a = 1.0 - (d_radius * d_radius) / (d_center * d_center);
        ConicalCoeffs {
            coeff_a,
            inv_coeff_a: 1.0 / coeff_a,
            r0: self.gradient.start_radius / d_center,
            dr: d_radius / d_center,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{Color, ColorStop};

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1.0e-4
    }

    fn stops() -> Vec<ColorStop> {
        vec![
            ColorStop::new(0.0, Color::from_straight(1.0, 0.0, 0.0, 1.0)),
            ColorStop::new(1.0, Color::from_straight(0.0, 0.0, 1.0, 1.0)),
        ]
    }

    fn shader(c0: Vec2, r0: f32, c1: Vec2, r1: f32) -> ConicalGradientShader {
        ConicalGradientShader::new(TwoPointConicalGradient::new(c0, r0, c1, r1, stops()))
            .unwrap()
    }

    fn coeffs_of(p: &Pipeline) -> ConicalCoeffs {
        p.stages()
            .iter()
            .find_map(|s| match *s {
                Stage::ConicalLinear(c)
                | Stage::ConicalQuadMax(c)
                | Stage::ConicalQuadMin(c) => Some(c),
                _ => None,
            })
            .expect("pipeline has a conical solve stage")
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn identical_circles_are_refused() {
        let g = TwoPointConicalGradient::new(Vec2::zero(), 1.0, Vec2::zero(), 1.0, stops());
        let err = ConicalGradientShader::new(g).unwrap_err();
        assert!(matches!(err, ShaderError::InvalidDescriptor(_)));
    }

    #[test]
    fn queries_expose_original_parameters() {
        let s = shader(Vec2::new(3.0, 4.0), 1.5, Vec2::new(-2.0, 0.5), 6.0);
        assert_eq!(s.start_circle(), (Vec2::new(3.0, 4.0), 1.5));
        assert_eq!(s.end_circle(), (Vec2::new(-2.0, 0.5), 6.0));
    }

    // ── concentric synthesis ──────────────────────────────────────────────

    #[test]
    fn concentric_remap_hits_inner_and_outer_radii() {
        // r0 = 2, r1 = 4: real distance 2 is t = 0, real distance 4 is t = 1.
        let s = shader(Vec2::zero(), 2.0, Vec2::zero(), 4.0);
        let p = s.synthesize();
        assert!(p.post().is_empty());

        let (t_inner, _) = p.eval(2.0, 0.0);
        let (t_outer, _) = p.eval(0.0, 4.0);
        let (t_mid, _) = p.eval(3.0, 0.0);
        assert!(close(t_inner, 0.0));
        assert!(close(t_outer, 1.0));
        assert!(close(t_mid, 0.5));
    }

    // ── coefficient derivation ────────────────────────────────────────────

    #[test]
    fn coeff_a_satisfies_its_invariant() {
        let cases = [
            (Vec2::zero(), 1.0, Vec2::new(3.0, 0.0), 2.0),
            (Vec2::new(1.0, 1.0), 0.5, Vec2::new(4.0, 5.0), 3.0),
            (Vec2::zero(), 2.0, Vec2::new(0.0, 1.0), 0.0),
        ];
        for (c0, r0, c1, r1) in cases {
            let p = shader(c0, r0, c1, r1).synthesize();
            let c = coeffs_of(&p);
            assert!(close(c.coeff_a, 1.0 - c.dr * c.dr), "coeffs {c:?}");
            assert!(close(c.inv_coeff_a * c.coeff_a, 1.0));
            assert!(close(c.dr, (r1 - r0) / (c0 - c1).length()));
        }
    }

    #[test]
    fn negative_family_radius_is_masked_not_rejected() {
        // A shrinking family reaches radius zero at finite t; parameters past
        // that point are a masking concern, never a construction error.
        let p = shader(Vec2::zero(), 0.5, Vec2::new(10.0, 0.0), 0.1).synthesize();
        let c = coeffs_of(&p);
        assert!(c.dr < 0.0);
        assert!(c.radius_at(20.0) < 0.0);
        assert!(p.stages().iter().any(|s| matches!(s, Stage::MaskNegativeRadius(_))));
    }

    // ── stage selection ───────────────────────────────────────────────────

    #[test]
    fn steep_growing_radius_selects_max_root() {
        let p = shader(Vec2::zero(), 0.0, Vec2::new(1.0, 0.0), 2.0).synthesize();
        assert!(p.stages().iter().any(|s| matches!(s, Stage::ConicalQuadMax(_))));
        assert!(p.post().is_empty());
    }

    #[test]
    fn steep_shrinking_radius_selects_min_root() {
        let p = shader(Vec2::zero(), 2.0, Vec2::new(1.0, 0.0), 0.0).synthesize();
        assert!(p.stages().iter().any(|s| matches!(s, Stage::ConicalQuadMin(_))));
        assert!(p.post().is_empty());
    }

    #[test]
    fn shallow_radius_change_is_masked() {
        // |dRadius| = 0.2 < dCenter = 1: not well behaved.
        let p = shader(Vec2::zero(), 1.0, Vec2::new(1.0, 0.0), 1.2).synthesize();
        assert!(p.stages().iter().any(|s| matches!(s, Stage::ConicalQuadMax(_))));
        assert!(p.stages().iter().any(|s| matches!(s, Stage::MaskNegativeRadius(_))));
        assert_eq!(p.post(), &[PostStage::ApplyMask][..]);
    }

    #[test]
    fn focal_on_end_circle_edge_selects_linear_solve() {
        // dr = 1 after rescale makes coeff_a collapse to zero.
        let p = shader(Vec2::zero(), 0.0, Vec2::new(1.0, 0.0), 1.0).synthesize();
        assert!(p.stages().iter().any(|s| matches!(s, Stage::ConicalLinear(_))));
        assert_eq!(p.post(), &[PostStage::ApplyMask][..]);
    }

    // ── per-pixel solutions ───────────────────────────────────────────────

    #[test]
    fn solved_parameter_satisfies_the_circle_equation() {
        // Cone from a point focus: at (1, 0) the t = 1/3 circle (radius 2/3,
        // centered (1/3, 0)) is the outermost circle through the pixel.
        let s = shader(Vec2::zero(), 0.0, Vec2::new(1.0, 0.0), 2.0);
        let p = s.synthesize();
        let (t, valid) = p.eval(1.0, 0.0);
        assert!(valid);
        assert!(close(t, 1.0 / 3.0));
    }

    #[test]
    fn masked_pixels_have_negative_solved_radius() {
        let s = shader(Vec2::zero(), 1.0, Vec2::new(1.0, 0.0), 1.2);
        let p = s.synthesize();

        // Far along -X the solved circle radius goes negative.
        let (t_bad, valid_bad) = p.eval(-10.0, 0.0);
        let (t_ok, valid_ok) = p.eval(0.5, 0.0);
        let c = coeffs_of(&p);

        assert!(!valid_bad);
        assert!(c.radius_at(t_bad) < 0.0);

        assert!(valid_ok);
        let r = c.radius_at(t_ok);
        assert!(r >= 0.0);
        // The solved circle actually passes through the pixel: its canonical
        // center is (t, 0) and the pixel sits at distance r from it.
        let d = (Vec2::new(0.5, 0.0) - Vec2::new(t_ok, 0.0)).length();
        assert!(close(d, r));
    }

    #[test]
    fn swapping_circles_and_reversing_ramp_renders_identically() {
        let a = shader(Vec2::new(1.0, 2.0), 0.0, Vec2::new(5.0, 2.0), 8.0);
        let b = shader(Vec2::new(5.0, 2.0), 8.0, Vec2::new(1.0, 2.0), 0.0);
        let pa = a.synthesize();
        let pb = b.synthesize();
        let ramp_a = a.ramp().clone();
        let ramp_b = a.ramp().reversed();

        for p in [
            Vec2::new(2.0, 2.0),
            Vec2::new(4.5, 3.0),
            Vec2::new(1.0, 6.0),
            Vec2::new(6.0, 0.0),
        ] {
            let (ta, va) = pa.eval(p.x, p.y);
            let (tb, vb) = pb.eval(p.x, p.y);
            assert_eq!(va, vb);
            assert!(close(tb, 1.0 - ta), "at {p:?}: {ta} vs {tb}");

            let ca = ramp_a.sample(ta);
            let cb = ramp_b.sample(tb);
            assert!(close(ca.r, cb.r) && close(ca.g, cb.g) && close(ca.b, cb.b));
        }
    }
}
