//! Layout math: header/label/bar rectangles and required heights.

use floem::kurbo::Rect;

use crate::config::GaugeConfig;
use crate::constants;
use crate::field::FieldNode;

/// The host's standard layout constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostMetrics {
    /// Width of the label column.
    pub label_width: f64,
    /// Vertical spacing between stacked rows.
    pub vertical_spacing: f64,
    /// Indent applied to expanded child rows.
    pub indent: f64,
}

impl Default for HostMetrics {
    fn default() -> Self {
        Self {
            label_width: constants::LABEL_WIDTH,
            vertical_spacing: constants::VERTICAL_SPACING,
            indent: constants::INDENT,
        }
    }
}

/// Named sub-rectangles of one gauge row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeLayout {
    /// Full-width top strip of `config.height`.
    pub header: Rect,
    /// Left slice of the header holding the foldout label.
    pub label: Rect,
    /// Remainder of the header, right of the label.
    pub bar: Rect,
    /// `bar` inset by the configured padding; the visible track.
    pub visual_bar: Rect,
}

/// Split `outer` into the gauge's named sub-rectangles.
pub fn layout(outer: Rect, config: &GaugeConfig, metrics: &HostMetrics) -> GaugeLayout {
    let header = Rect::new(outer.x0, outer.y0, outer.x1, outer.y0 + config.height);
    let label_width = metrics.label_width.min(header.width());
    let label = Rect::new(header.x0, header.y0, header.x0 + label_width, header.y1);
    let bar = Rect::new(label.x1, header.y0, header.x1, header.y1);
    let visual_bar = Rect::new(
        bar.x0 + config.padding,
        bar.y0 + config.padding,
        bar.x1,
        bar.y1 - config.padding,
    );
    GaugeLayout {
        header,
        label,
        bar,
        visual_bar,
    }
}

/// Total vertical space the gauge needs for `field`.
///
/// Collapsed gauges take the fixed header height. Expanded gauges add the
/// host's vertical spacing plus each visible child's rendered height and
/// trailing spacing.
pub fn measure<N: FieldNode>(field: &N, config: &GaugeConfig, metrics: &HostMetrics) -> f64 {
    let mut total = config.height;
    if field.is_expanded() {
        total += metrics.vertical_spacing;
        for child in field.children() {
            total += child.row_height() + metrics.vertical_spacing;
        }
    }
    total
}
