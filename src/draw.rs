//! Paint routines for the gauge: track, fill, border, text overlay, foldout.

use floem::context::PaintCx;
use floem::kurbo::{BezPath, Point, Rect, Stroke};
use floem::text::{Attrs, AttrsList, TextLayout, Weight};
use floem_renderer::Renderer;

use crate::color::GaugeColor;
use crate::config::GaugeConfig;
use crate::constants;

/// Draw the track, the proportional fill, and the optional border.
///
/// `hover_feedback` should already account for scrubbing being enabled; when
/// set, the fill color is pushed 15% toward white.
pub(crate) fn paint_gauge(
    cx: &mut PaintCx,
    rect: Rect,
    ratio: f64,
    config: &GaugeConfig,
    field_name: &str,
    hover_feedback: bool,
) {
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return;
    }
    let track = rect.to_rounded_rect(config.rounding);

    // Gutter
    cx.fill(&track, config.gutter_color.to_peniko(), 0.0);

    // Fill, clipped so its corners follow the track rounding
    if ratio > 0.0 {
        let fill = Rect::new(rect.x0, rect.y0, rect.x0 + rect.width() * ratio, rect.y1);
        let mut color = config.ramp_for(field_name).evaluate(ratio);
        if hover_feedback {
            color = color.lerp(GaugeColor::WHITE, constants::HOVER_BLEND);
        }
        cx.save();
        cx.clip(&track);
        cx.fill(&fill, color.to_peniko(), 0.0);
        cx.restore();
    }

    if config.border_color.a() > 0.0 {
        cx.stroke(&track, config.border_color.to_peniko(), &Stroke::new(1.0));
    }
}

/// Draw the centered "current / max" overlay with a drop shadow.
pub(crate) fn paint_value_text(
    cx: &mut PaintCx,
    rect: Rect,
    current: f64,
    max: f64,
    config: &GaugeConfig,
) {
    let text = format!("{} / {}", format_value(current), format_value(max));
    let attrs = || {
        Attrs::new()
            .font_size(constants::TEXT_FONT)
            .weight(Weight::BOLD)
    };

    let shadow_color = GaugeColor::BLACK.with_alpha(constants::SHADOW_ALPHA);
    let mut shadow = TextLayout::new();
    shadow.set_text(&text, AttrsList::new(attrs().color(shadow_color.to_peniko())));

    let size = shadow.size();
    let origin = Point::new(
        rect.x0 + (rect.width() - size.width) / 2.0,
        rect.y0 + (rect.height() - size.height) / 2.0,
    );

    cx.draw_text(&shadow, Point::new(origin.x + 1.0, origin.y + 1.0));

    let mut foreground = TextLayout::new();
    foreground.set_text(&text, AttrsList::new(attrs().color(config.text_color.to_peniko())));
    cx.draw_text(&foreground, origin);
}

/// Draw the foldout label: disclosure triangle plus label text.
pub(crate) fn paint_label(cx: &mut PaintCx, rect: Rect, label: &str, expanded: bool) {
    let color = GaugeColor::from_rgb8(205, 205, 205);

    let tri = foldout_path(rect, expanded);
    cx.fill(&tri, color.to_peniko(), 0.0);

    let attrs = Attrs::new()
        .font_size(constants::LABEL_FONT)
        .color(color.to_peniko());
    let mut layout = TextLayout::new();
    layout.set_text(label, AttrsList::new(attrs));
    let size = layout.size();
    let origin = Point::new(
        rect.x0 + constants::FOLDOUT_SIZE + 4.0,
        rect.y0 + (rect.height() - size.height) / 2.0,
    );
    cx.draw_text(&layout, origin);
}

/// Right-pointing triangle when collapsed, down-pointing when expanded.
fn foldout_path(rect: Rect, expanded: bool) -> BezPath {
    let s = constants::FOLDOUT_SIZE;
    let x = rect.x0 + 1.0;
    let cy = rect.y0 + rect.height() / 2.0;

    let mut path = BezPath::new();
    if expanded {
        path.move_to((x, cy - s / 4.0));
        path.line_to((x + s, cy - s / 4.0));
        path.line_to((x + s / 2.0, cy + s / 2.0));
    } else {
        path.move_to((x, cy - s / 2.0));
        path.line_to((x + s * 0.75, cy));
        path.line_to((x, cy + s / 2.0));
    }
    path.close_path();
    path
}

/// Format a value with at most two decimal places, trimming trailing zeros.
pub(crate) fn format_value(value: f64) -> String {
    let s = format!("{:.2}", value);
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" || trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
