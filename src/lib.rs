//! # floem-gauge
//!
//! A compact horizontal gauge widget for [Floem](https://github.com/lapce/floem)
//! property-inspection panels.
//!
//! The gauge visualizes any "bounded variable" (a value constrained between a
//! minimum and maximum) exposed through a host field tree, and lets the user
//! edit the value by pressing or dragging directly on the bar ("scrubbing").
//! Sub-fields are discovered by naming convention (`Current`, `Max` or
//! `Duration`, optional `Min`, with a one-level `Value`/`Volume` wrapper
//! fallback), the fill is colored by a configurable gradient ramp with
//! per-field-name overrides, and exactly one gauge of a panel can own an
//! in-progress drag at a time.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::rc::Rc;
//! use floem_gauge::{bounded_gauge_with, GaugeConfig, HostMetrics, InteractionContext};
//!
//! // `health` is a handle into your inspector's field tree (impl FieldNode).
//! let config = Rc::new(GaugeConfig::default());
//! let interaction = InteractionContext::shared();
//! let view = bounded_gauge_with(
//!     health,
//!     "Health",
//!     config,
//!     HostMetrics::default(),
//!     interaction,
//! );
//! ```

mod binding;
mod color;
mod config;
mod constants;
mod draw;
mod field;
mod gauge;
mod layout;
mod math;
mod ramp;
mod scrub;
#[cfg(test)]
mod test_support;

pub use binding::{BindingCache, PropertyBinding};
pub use color::GaugeColor;
pub use config::{GaugeConfig, GradientOverride};
pub use field::{FieldKind, FieldNode};
pub use gauge::{bounded_gauge, bounded_gauge_with, GaugeView};
pub use layout::{layout, measure, GaugeLayout, HostMetrics};
pub use ramp::ColorRamp;
pub use scrub::{GaugeId, InteractionContext, ScrubController, SharedInteraction};
