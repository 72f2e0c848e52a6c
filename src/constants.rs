//! Sizing, color, and styling defaults for the gauge.

/// Gauge header row height
pub const GAUGE_HEIGHT: f64 = 18.0;

/// Inset between the bar area and the visible gauge track
pub const PADDING: f64 = 2.0;

/// Corner radius for the gauge track
pub const ROUNDING: f64 = 3.0;

/// Value overlay font size
pub const TEXT_FONT: f32 = 10.0;

/// Foldout label font size
pub const LABEL_FONT: f32 = 11.0;

/// Default host label column width
pub const LABEL_WIDTH: f64 = 120.0;

/// Default host vertical spacing between rows
pub const VERTICAL_SPACING: f64 = 2.0;

/// Indent applied to expanded child rows
pub const INDENT: f64 = 12.0;

/// Edge length of the foldout disclosure triangle
pub const FOLDOUT_SIZE: f64 = 8.0;

/// How far the fill color is pushed toward white on hover
pub const HOVER_BLEND: f64 = 0.15;

/// Ranges at or below this are treated as empty to avoid near-zero division
pub const MIN_RANGE: f64 = 1e-5;

/// Alpha of the value text drop shadow
pub const SHADOW_ALPHA: f64 = 0.7;
