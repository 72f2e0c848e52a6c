//! Visual configuration for the gauge, including per-field gradient overrides.

use crate::color::GaugeColor;
use crate::constants;
use crate::ramp::ColorRamp;

/// Maps a field-name fragment to a specific color ramp.
///
/// `key` is matched by case-sensitive substring containment against the
/// gauge's field name.
#[derive(Debug, Clone)]
pub struct GradientOverride {
    pub key: String,
    pub ramp: ColorRamp,
}

/// Visual parameters for gauge rendering, treated as immutable during a draw.
///
/// Hosts typically build one and share it between gauges via `Rc`; every
/// field has a usable built-in default.
#[derive(Debug, Clone)]
pub struct GaugeConfig {
    /// Header row height.
    pub height: f64,
    /// Inset between the bar area and the visible track.
    pub padding: f64,
    /// Corner radius of the track and fill.
    pub rounding: f64,
    /// Whether press/drag on the track edits the value.
    pub allow_scrubbing: bool,
    /// Whether the centered "current / max" overlay is drawn.
    pub show_text: bool,
    pub text_color: GaugeColor,
    pub gutter_color: GaugeColor,
    /// Track outline; skipped entirely when alpha is zero.
    pub border_color: GaugeColor,
    /// Ramp used when no override matches.
    pub default_ramp: ColorRamp,
    /// Scanned in order; the first matching entry wins.
    pub overrides: Vec<GradientOverride>,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            height: constants::GAUGE_HEIGHT,
            padding: constants::PADDING,
            rounding: constants::ROUNDING,
            allow_scrubbing: true,
            show_text: true,
            text_color: GaugeColor::WHITE,
            gutter_color: GaugeColor::from_rgba(0.1, 0.1, 0.1, 1.0),
            border_color: GaugeColor::from_rgba(0.0, 0.0, 0.0, 0.5),
            default_ramp: ColorRamp::two_stop(
                GaugeColor::from_rgba(0.2, 0.6, 1.0, 1.0),
                GaugeColor::from_rgba(0.1, 0.3, 0.8, 1.0),
            ),
            overrides: Vec::new(),
        }
    }
}

impl GaugeConfig {
    /// Pick the ramp for a field: first override whose `key` is contained in
    /// `field_name` (declaration order, case-sensitive), else the default.
    pub fn ramp_for(&self, field_name: &str) -> &ColorRamp {
        self.overrides
            .iter()
            .find(|o| field_name.contains(o.key.as_str()))
            .map(|o| &o.ramp)
            .unwrap_or(&self.default_ramp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named_ramp(level: f64) -> ColorRamp {
        ColorRamp::two_stop(
            GaugeColor::from_rgba(level, 0.0, 0.0, 1.0),
            GaugeColor::from_rgba(level, 1.0, 0.0, 1.0),
        )
    }

    #[test]
    fn override_matches_by_substring() {
        let config = GaugeConfig {
            overrides: vec![GradientOverride {
                key: "Health".into(),
                ramp: named_ramp(0.9),
            }],
            ..Default::default()
        };
        assert_eq!(config.ramp_for("PlayerHealthCurrent"), &named_ramp(0.9));
        assert_eq!(config.ramp_for("Mana"), &config.default_ramp);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let config = GaugeConfig {
            overrides: vec![GradientOverride {
                key: "Health".into(),
                ramp: named_ramp(0.9),
            }],
            ..Default::default()
        };
        assert_eq!(config.ramp_for("playerhealth"), &config.default_ramp);
    }

    #[test]
    fn first_registered_override_wins() {
        let config = GaugeConfig {
            overrides: vec![
                GradientOverride {
                    key: "Mana".into(),
                    ramp: named_ramp(0.1),
                },
                GradientOverride {
                    key: "ManaPool".into(),
                    ramp: named_ramp(0.2),
                },
            ],
            ..Default::default()
        };
        // Not longest-match: the first entry in declaration order is taken.
        assert_eq!(config.ramp_for("ManaPool"), &named_ramp(0.1));
    }
}
