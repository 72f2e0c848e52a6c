//! Color ramps — continuous color functions sampled at the gauge fill ratio.

use crate::color::GaugeColor;

/// A piecewise-linear color function over 0.0–1.0.
///
/// Stops are `(position, color)` pairs in ascending position order. Sampling
/// outside the stop span holds the terminal colors.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRamp {
    stops: Vec<(f64, GaugeColor)>,
}

impl ColorRamp {
    /// Build a ramp from explicit stops. Stops are sorted by position.
    pub fn new(mut stops: Vec<(f64, GaugeColor)>) -> Self {
        stops.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { stops }
    }

    /// A ramp running from `start` at 0.0 to `end` at 1.0.
    pub fn two_stop(start: GaugeColor, end: GaugeColor) -> Self {
        Self {
            stops: vec![(0.0, start), (1.0, end)],
        }
    }

    /// Sample the ramp at `t` (clamped to 0.0–1.0).
    ///
    /// An empty ramp evaluates to the default gray rather than failing.
    pub fn evaluate(&self, t: f64) -> GaugeColor {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return GaugeColor::default();
        };
        let t = crate::math::clamp01(t);
        if t <= first.0 {
            return first.1;
        }
        if t >= last.0 {
            return last.1;
        }
        for pair in self.stops.windows(2) {
            let (p0, c0) = pair[0];
            let (p1, c1) = pair[1];
            if t <= p1 {
                let span = p1 - p0;
                if span <= f64::EPSILON {
                    return c1;
                }
                return c0.lerp(c1, (t - p0) / span);
            }
        }
        last.1
    }
}
