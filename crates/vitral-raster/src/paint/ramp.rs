use super::{Color, ColorStop};

/// A resolved one-dimensional color ramp, shared by all gradient shapes.
///
/// Built once at shader construction from user stops: positions clamped to
/// [0, 1] and sorted. Sampling clamps the parameter to the edge stops; there
/// is no repeat or mirror behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRamp {
    stops: Vec<ColorStop>,
}

impl ColorRamp {
    /// Resolves user stops into a sampleable ramp.
    ///
    /// Descriptor validation guarantees at least two finite stops; fewer are
    /// tolerated anyway (empty samples transparent, a single stop samples its
    /// color) so the ramp never panics on unvalidated input.
    pub fn resolve(stops: &[ColorStop]) -> Self {
        let mut stops: Vec<ColorStop> = stops
            .iter()
            .map(|s| ColorStop::new(s.t.clamp(0.0, 1.0), s.color))
            .collect();
        stops.sort_by(|a, b| a.t.total_cmp(&b.t));
        Self { stops }
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Returns the ramp with stop order reversed and positions reflected
    /// (`t` becomes `1 - t`).
    pub fn reversed(&self) -> Self {
        let mut stops: Vec<ColorStop> = self
            .stops
            .iter()
            .rev()
            .map(|s| ColorStop::new(1.0 - s.t, s.color))
            .collect();
        // Reflection preserves order except for exact ties; keep it canonical.
        stops.sort_by(|a, b| a.t.total_cmp(&b.t));
        Self { stops }
    }

    /// Samples the ramp at `t`, clamped to [0, 1].
    pub fn sample(&self, t: f32) -> Color {
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(f), Some(l)) => (f, l),
            _ => return Color::transparent(),
        };

        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 1.0 };
        if t <= first.t {
            return first.color;
        }
        if t >= last.t {
            return last.color;
        }

        // Stops are sorted; find the surrounding pair.
        let idx = self.stops.partition_point(|s| s.t < t);
        let hi = self.stops[idx];
        let lo = self.stops[idx - 1];
        let span = hi.t - lo.t;
        if span <= 0.0 {
            // Coincident stops form a hard transition.
            return hi.color;
        }
        lo.color.lerp(hi.color, (t - lo.t) / span)
    }
}
