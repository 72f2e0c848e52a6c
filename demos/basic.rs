//! Standalone demo: a small inspector column with scrubbable gauges backed by
//! an in-memory field tree.

use std::cell::Cell;
use std::rc::Rc;

use floem::context::PaintCx;
use floem::kurbo::{Point, Rect};
use floem::prelude::*;
use floem::text::{Attrs, AttrsList, TextLayout};
use floem::window::WindowConfig;
use floem_renderer::Renderer;

use floem_gauge::{
    bounded_gauge_with, ColorRamp, FieldKind, FieldNode, GaugeColor, GaugeConfig,
    GradientOverride, HostMetrics, InteractionContext,
};

struct Inner {
    name: String,
    kind: FieldKind,
    value: Cell<f64>,
    children: Vec<DemoField>,
    expanded: Cell<bool>,
}

/// Minimal in-memory implementation of the host field tree.
#[derive(Clone)]
struct DemoField(Rc<Inner>);

impl DemoField {
    fn float(name: &str, value: f64) -> Self {
        Self(Rc::new(Inner {
            name: name.to_string(),
            kind: FieldKind::Float,
            value: Cell::new(value),
            children: Vec::new(),
            expanded: Cell::new(false),
        }))
    }

    fn group(name: &str, children: Vec<DemoField>) -> Self {
        Self(Rc::new(Inner {
            name: name.to_string(),
            kind: FieldKind::Other,
            value: Cell::new(0.0),
            children,
            expanded: Cell::new(false),
        }))
    }
}

impl FieldNode for DemoField {
    fn name(&self) -> &str {
        &self.0.name
    }

    fn kind(&self) -> FieldKind {
        self.0.kind
    }

    fn child(&self, name: &str) -> Option<Self> {
        self.0.children.iter().find(|c| c.0.name == name).cloned()
    }

    fn as_float(&self) -> f64 {
        self.0.value.get()
    }

    fn as_int(&self) -> i32 {
        self.0.value.get() as i32
    }

    fn as_long(&self) -> i64 {
        self.0.value.get() as i64
    }

    fn set_float(&self, value: f64) {
        self.0.value.set(value);
    }

    fn set_int(&self, value: i32) {
        self.0.value.set(value as f64);
    }

    fn set_long(&self, value: i64) {
        self.0.value.set(value as f64);
    }

    fn commit(&self) {}

    fn is_expanded(&self) -> bool {
        self.0.expanded.get()
    }

    fn set_expanded(&self, expanded: bool) {
        self.0.expanded.set(expanded);
    }

    fn children(&self) -> Vec<Self> {
        self.0.children.clone()
    }

    fn row_height(&self) -> f64 {
        16.0
    }

    fn target_id(&self) -> u64 {
        1
    }

    fn is_alive(&self) -> bool {
        true
    }

    fn paint(&self, cx: &mut PaintCx, rect: Rect) {
        let text = format!("{} = {}", self.0.name, self.0.value.get());
        let attrs = Attrs::new()
            .font_size(11.0)
            .color(GaugeColor::from_rgb8(170, 170, 170).to_peniko());
        let mut layout = TextLayout::new();
        layout.set_text(&text, AttrsList::new(attrs));
        let size = layout.size();
        cx.draw_text(
            &layout,
            Point::new(rect.x0, rect.y0 + (rect.height() - size.height) / 2.0),
        );
    }
}

fn main() {
    let config = Rc::new(GaugeConfig {
        overrides: vec![GradientOverride {
            key: "Health".into(),
            ramp: ColorRamp::two_stop(
                GaugeColor::from_rgba(0.85, 0.2, 0.2, 1.0),
                GaugeColor::from_rgba(0.2, 0.8, 0.3, 1.0),
            ),
        }],
        ..Default::default()
    });
    let interaction = InteractionContext::shared();
    let metrics = HostMetrics::default();

    // Direct Current/Max/Min children
    let health = DemoField::group(
        "Health",
        vec![
            DemoField::float("Current", 72.0),
            DemoField::float("Max", 100.0),
            DemoField::float("Min", 0.0),
        ],
    );
    // Nested wrapper fallback
    let mana = DemoField::group(
        "Mana",
        vec![DemoField::group(
            "Value",
            vec![
                DemoField::float("Current", 40.0),
                DemoField::float("Max", 120.0),
            ],
        )],
    );
    // Duration standing in for Max
    let cooldown = DemoField::group(
        "Cooldown",
        vec![
            DemoField::float("Current", 2.5),
            DemoField::float("Duration", 8.0),
        ],
    );

    floem::Application::new()
        .window(
            move |_| {
                v_stack((
                    bounded_gauge_with(
                        health.clone(),
                        "Health",
                        config.clone(),
                        metrics,
                        interaction.clone(),
                    ),
                    bounded_gauge_with(
                        mana.clone(),
                        "Mana",
                        config.clone(),
                        metrics,
                        interaction.clone(),
                    ),
                    bounded_gauge_with(
                        cooldown.clone(),
                        "Cooldown",
                        config.clone(),
                        metrics,
                        interaction.clone(),
                    ),
                ))
                .style(|s| {
                    s.padding(8.0)
                        .gap(4.0)
                        .width_full()
                        .background(Color::rgb8(32, 32, 32))
                })
                .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((360.0, 220.0))
                    .title("floem-gauge"),
            ),
        )
        .run();
}
