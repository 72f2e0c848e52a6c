//! Resolution of current/min/max sub-fields on a bound object.
//!
//! Bounded-variable types expose their parts under conventional names. The
//! resolver probes those names once per bound object and the result is cached
//! by the widget until the object's identity changes or it goes away.

use crate::field::{FieldKind, FieldNode};
use crate::math;

/// Resolved references to the current/min/max fields of a bounded variable.
///
/// `min` may be permanently absent (reads as 0). A binding with no `current`
/// is "empty": every read returns 0 and the gauge renders a zero ratio.
#[derive(Debug, Clone)]
pub struct PropertyBinding<N: FieldNode> {
    target: u64,
    current: Option<N>,
    max: Option<N>,
    min: Option<N>,
}

impl<N: FieldNode> PropertyBinding<N> {
    /// Locate the sub-fields of `root` by naming convention.
    ///
    /// Direct children are probed first: `Current`, `Max` (else `Duration`),
    /// `Min`. When no `Current` exists, a one-level wrapper named `Value`
    /// (else `Volume`) is probed with the same names instead.
    pub fn resolve(root: &N) -> Self {
        let mut current = root.child("Current");
        let mut max = root.child("Max").or_else(|| root.child("Duration"));
        let mut min = root.child("Min");

        if current.is_none() {
            if let Some(wrapper) = root.child("Value").or_else(|| root.child("Volume")) {
                current = wrapper.child("Current");
                max = wrapper.child("Max");
                min = wrapper.child("Min");
            }
        }

        Self {
            target: root.target_id(),
            current,
            max,
            min,
        }
    }

    /// Identity of the bound object this binding was resolved against.
    pub fn target(&self) -> u64 {
        self.target
    }

    /// True when no `current` field could be located.
    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    fn is_readable(&self) -> bool {
        match &self.current {
            Some(node) => node.is_alive(),
            // Empty bindings stay cached until the target identity changes.
            None => true,
        }
    }

    fn read(slot: &Option<N>) -> f64 {
        let Some(node) = slot else { return 0.0 };
        if !node.is_alive() {
            return 0.0;
        }
        match node.kind() {
            FieldKind::Float => node.as_float(),
            FieldKind::Int => node.as_int() as f64,
            FieldKind::Long => node.as_long() as f64,
            FieldKind::Other => 0.0,
        }
    }

    pub fn current_value(&self) -> f64 {
        Self::read(&self.current)
    }

    pub fn max_value(&self) -> f64 {
        Self::read(&self.max)
    }

    /// Minimum, defaulting to 0 when the field is absent.
    pub fn min_value(&self) -> f64 {
        Self::read(&self.min)
    }

    /// Display ratio of the bound variable, clamped to 0.0–1.0.
    pub fn ratio(&self) -> f64 {
        math::fill_ratio(self.current_value(), self.min_value(), self.max_value())
    }

    /// Store `value` into the `current` field and flush it through the host.
    ///
    /// Integer kinds are rounded to nearest. Unsupported kinds and dead
    /// references are a no-op rather than an error.
    pub fn commit_current(&self, value: f64) {
        let Some(node) = &self.current else { return };
        if !node.is_alive() {
            return;
        }
        match node.kind() {
            FieldKind::Float => node.set_float(value),
            FieldKind::Int => node.set_int(value.round() as i32),
            FieldKind::Long => node.set_long(value.round() as i64),
            FieldKind::Other => return,
        }
        node.commit();
    }
}

/// Per-widget binding cache, re-resolved when the bound object changes
/// identity or the cached reference stops being readable.
#[derive(Debug, Default)]
pub struct BindingCache<N: FieldNode> {
    binding: Option<PropertyBinding<N>>,
}

impl<N: FieldNode> BindingCache<N> {
    pub fn new() -> Self {
        Self { binding: None }
    }

    /// Return the binding for `root`, resolving if the cache is stale.
    pub fn get(&mut self, root: &N) -> &PropertyBinding<N> {
        let stale = match &self.binding {
            None => true,
            Some(b) => b.target() != root.target_id() || !b.is_readable(),
        };
        if stale {
            self.binding = None;
        }
        self.binding
            .get_or_insert_with(|| PropertyBinding::resolve(root))
    }
}
