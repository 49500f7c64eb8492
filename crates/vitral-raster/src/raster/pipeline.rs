use crate::coords::Vec2;

use super::stage::{conical_linear, conical_quadratic, PostStage, Root, Stage};

/// An immutable per-pixel stage sequence produced by shader synthesis.
///
/// Semantics:
/// - `stages` run per pixel and reduce device coordinates to a gradient
///   parameter `t` plus a validity flag.
/// - `post` stages run after color lookup (see `CompiledPaint::shade_span`).
///
/// Concurrency: a `Pipeline` is never mutated after synthesis; rendering
/// threads share it by reference without synchronization.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipeline {
    stages: Vec<Stage>,
    post: Vec<PostStage>,
}

impl Pipeline {
    pub fn new(stages: Vec<Stage>, post: Vec<PostStage>) -> Self {
        Self { stages, post }
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn post(&self) -> &[PostStage] {
        &self.post
    }

    /// Evaluates the stage sequence for one pixel.
    ///
    /// Returns the gradient parameter and whether the pixel has a valid
    /// solution. `valid` only ever goes false through an explicit mask stage;
    /// pipelines without one always return `true`.
    pub fn eval(&self, x: f32, y: f32) -> (f32, bool) {
        let mut x = x;
        let mut y = y;
        let mut t = 0.0;
        let mut valid = true;

        for stage in &self.stages {
            match *stage {
                Stage::Transform(m) => {
                    let p = m.apply(Vec2::new(x, y));
                    x = p.x;
                    y = p.y;
                }
                Stage::XyToRadius => t = (x * x + y * y).sqrt(),
                Stage::XyToLinearT => t = x,
                Stage::ConicalLinear(c) => t = conical_linear(c, x, y),
                Stage::ConicalQuadMax(c) => t = conical_quadratic(c, x, y, Root::Max),
                Stage::ConicalQuadMin(c) => t = conical_quadratic(c, x, y, Root::Min),
                Stage::RemapT { scale, bias } => t = t * scale + bias,
                Stage::MaskNegativeRadius(c) => {
                    valid = valid && t.is_finite() && c.radius_at(t) >= 0.0;
                }
            }
        }

        (t, valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Affine;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1.0e-5
    }

    #[test]
    fn radius_then_remap() {
        let p = Pipeline::new(
            vec![Stage::XyToRadius, Stage::RemapT { scale: 2.0, bias: -1.0 }],
            vec![],
        );
        let (t, valid) = p.eval(3.0, 4.0); // distance 5
        assert!(valid);
        assert!(close(t, 9.0));
    }

    #[test]
    fn transform_feeds_later_stages() {
        let p = Pipeline::new(
            vec![Stage::Transform(Affine::scale(0.5)), Stage::XyToLinearT],
            vec![],
        );
        let (t, _) = p.eval(8.0, 1.0);
        assert!(close(t, 4.0));
    }

    #[test]
    fn empty_pipeline_is_valid_zero() {
        let p = Pipeline::new(vec![], vec![]);
        assert_eq!(p.eval(10.0, 10.0), (0.0, true));
    }
}
