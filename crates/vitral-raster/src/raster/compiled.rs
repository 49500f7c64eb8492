use crate::paint::{Color, ColorRamp};

use super::pipeline::Pipeline;
use super::stage::PostStage;

/// A paint compiled for per-pixel evaluation.
///
/// Produced by `shader::compile`; consumed by `Pixmap::fill` or directly via
/// [`shade_span`](CompiledPaint::shade_span). Immutable once built, so it can
/// be shared across rendering threads.
#[derive(Debug, Clone)]
pub enum CompiledPaint {
    Solid(Color),
    Gradient { pipeline: Pipeline, ramp: ColorRamp },
}

impl CompiledPaint {
    /// Shades one horizontal span of pixels.
    ///
    /// `y` is the sample row (pixel center), `x0` the sample x of `span[0]`;
    /// pixel `i` samples at `(x0 + i, y)`.
    ///
    /// The validity mask is transient: sized to this span, owned by this call,
    /// dropped on return. It is only allocated when the pipeline carries a
    /// post stage that consumes it.
    pub fn shade_span(&self, y: f32, x0: f32, span: &mut [Color]) {
        match self {
            CompiledPaint::Solid(color) => span.fill(*color),
            CompiledPaint::Gradient { pipeline, ramp } => {
                let mut mask = if pipeline.post().is_empty() {
                    Vec::new()
                } else {
                    vec![true; span.len()]
                };

                for (i, px) in span.iter_mut().enumerate() {
                    let (t, valid) = pipeline.eval(x0 + i as f32, y);
                    if !mask.is_empty() {
                        mask[i] = valid;
                    }
                    *px = ramp.sample(t);
                }

                for post in pipeline.post() {
                    match post {
                        PostStage::ApplyMask => {
                            for (px, ok) in span.iter_mut().zip(mask.iter()) {
                                if !*ok {
                                    *px = Color::transparent();
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
