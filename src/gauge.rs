//! The gauge view: resolution, layout, scrubbing, and painting glued into a
//! Floem [`View`].

use std::rc::Rc;

use floem::kurbo::Rect;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx},
    event::{Event, EventPropagation},
    View, ViewId,
};

use crate::binding::BindingCache;
use crate::config::GaugeConfig;
use crate::draw;
use crate::field::FieldNode;
use crate::layout::{self, HostMetrics};
use crate::scrub::{InteractionContext, ScrubController, SharedInteraction};

pub struct GaugeView<N: FieldNode> {
    id: ViewId,
    field: N,
    label: String,
    config: Rc<GaugeConfig>,
    metrics: HostMetrics,
    interaction: SharedInteraction,
    scrub: ScrubController,
    cache: BindingCache<N>,
    hovering: bool,
    expanded: RwSignal<bool>,
    size: floem::taffy::prelude::Size<f32>,
}

/// Creates a gauge for `field` with default configuration and a private
/// interaction context.
pub fn bounded_gauge<N: FieldNode + 'static>(
    field: N,
    label: impl Into<String>,
) -> GaugeView<N> {
    bounded_gauge_with(
        field,
        label,
        Rc::new(GaugeConfig::default()),
        HostMetrics::default(),
        InteractionContext::shared(),
    )
}

/// Creates a gauge with explicit configuration, host metrics, and a shared
/// interaction context.
///
/// Gauges of one panel should share the same context so only one of them can
/// own an in-progress drag.
pub fn bounded_gauge_with<N: FieldNode + 'static>(
    field: N,
    label: impl Into<String>,
    config: Rc<GaugeConfig>,
    metrics: HostMetrics,
    interaction: SharedInteraction,
) -> GaugeView<N> {
    let id = ViewId::new();
    let expanded = RwSignal::new(field.is_expanded());

    let style_field = field.clone();
    let style_config = config.clone();
    GaugeView {
        id,
        field,
        label: label.into(),
        config,
        metrics,
        interaction,
        scrub: ScrubController::new(),
        cache: BindingCache::new(),
        hovering: false,
        expanded,
        size: Default::default(),
    }
    .style(move |s| {
        let height = if expanded.get() {
            layout::measure(&style_field, &style_config, &metrics)
        } else {
            style_config.height
        };
        let s = s.width_full().height(height as f32);
        if style_config.allow_scrubbing {
            s.cursor(floem::style::CursorStyle::ColResize)
        } else {
            s
        }
    })
}

impl<N: FieldNode + 'static> View for GaugeView<N> {
    fn id(&self) -> ViewId {
        self.id
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        let outer = Rect::new(0.0, 0.0, self.size.width as f64, self.size.height as f64);
        let lt = layout::layout(outer, &self.config, &self.metrics);

        match event {
            Event::PointerDown(e) => {
                if !e.button.is_primary() {
                    return EventPropagation::Continue;
                }
                if lt.label.contains(e.pos) {
                    let open = !self.field.is_expanded();
                    self.field.set_expanded(open);
                    self.expanded.set(open);
                    self.id.request_layout();
                    return EventPropagation::Stop;
                }
                if self.config.allow_scrubbing
                    && lt.visual_bar.contains(e.pos)
                    && self.field.is_alive()
                {
                    let binding = self.cache.get(&self.field);
                    let (min, max) = (binding.min_value(), binding.max_value());
                    let value = {
                        let mut ctx = self.interaction.borrow_mut();
                        self.scrub.press(&mut ctx, e.pos.x, lt.visual_bar, min, max)
                    };
                    if let Some(value) = value {
                        binding.commit_current(value);
                        cx.update_active(self.id);
                        self.id.request_paint();
                        return EventPropagation::Stop;
                    }
                }
                EventPropagation::Continue
            }
            Event::PointerMove(e) => {
                let hovering = lt.visual_bar.contains(e.pos);
                if hovering != self.hovering {
                    self.hovering = hovering;
                    self.id.request_paint();
                }
                if self.scrub.holds(&self.interaction.borrow()) {
                    if !self.field.is_alive() {
                        // Bound object died mid-drag: drop the capture, skip the commit.
                        self.scrub.release(&mut self.interaction.borrow_mut());
                        return EventPropagation::Continue;
                    }
                    let binding = self.cache.get(&self.field);
                    let (min, max) = (binding.min_value(), binding.max_value());
                    let value = {
                        let ctx = self.interaction.borrow();
                        self.scrub.drag(&ctx, e.pos.x, lt.visual_bar, min, max)
                    };
                    if let Some(value) = value {
                        binding.commit_current(value);
                        self.id.request_paint();
                        return EventPropagation::Stop;
                    }
                }
                EventPropagation::Continue
            }
            Event::PointerUp(_) => {
                if self.scrub.release(&mut self.interaction.borrow_mut()) {
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerLeave => {
                if self.hovering {
                    self.hovering = false;
                    self.id.request_paint();
                }
                EventPropagation::Continue
            }
            Event::FocusLost => {
                self.scrub.release(&mut self.interaction.borrow_mut());
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let outer = Rect::new(0.0, 0.0, w, h);

        // A held capture whose owner went away must read as released.
        if !self.field.is_alive() {
            self.interaction.borrow_mut().release(self.scrub.id());
        }

        let lt = layout::layout(outer, &self.config, &self.metrics);
        let binding = self.cache.get(&self.field);
        let current = binding.current_value();
        let max = binding.max_value();
        let ratio = binding.ratio();

        let expanded = self.field.is_expanded();
        draw::paint_label(cx, lt.label, &self.label, expanded);

        let hover_feedback = self.hovering && self.config.allow_scrubbing;
        draw::paint_gauge(
            cx,
            lt.visual_bar,
            ratio,
            &self.config,
            self.field.name(),
            hover_feedback,
        );
        if self.config.show_text {
            draw::paint_value_text(cx, lt.visual_bar, current, max, &self.config);
        }

        if expanded {
            let mut y = outer.y0 + self.config.height + self.metrics.vertical_spacing;
            for child in self.field.children() {
                let row = Rect::new(
                    outer.x0 + self.metrics.indent,
                    y,
                    outer.x1,
                    y + child.row_height(),
                );
                child.paint(cx, row);
                y = row.y1 + self.metrics.vertical_spacing;
            }
        }
    }
}
