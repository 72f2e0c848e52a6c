//! Ratio and interpolation math shared by layout, rendering, and scrubbing.

use crate::constants;

/// Clamp to the 0.0–1.0 range.
pub(crate) fn clamp01(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}

/// Linear interpolation between `a` and `b`.
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Normalized position of `current` inside `[min, max]`, clamped to 0.0–1.0.
///
/// Degenerate ranges (`max - min <= MIN_RANGE`, including inverted ranges)
/// yield 0.0 rather than dividing by a near-zero denominator.
pub(crate) fn fill_ratio(current: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    if range <= constants::MIN_RANGE {
        return 0.0;
    }
    clamp01((current - min) / range)
}
