//! Pointer-driven scrub editing with exclusive drag capture.
//!
//! One [`InteractionContext`] is shared by all gauges of a panel; at most one
//! gauge owns an in-progress drag at a time. The controller itself is pure:
//! it maps pointer positions to values and leaves committing to the caller.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use floem::kurbo::Rect;

use crate::math;

static NEXT_GAUGE_ID: AtomicU64 = AtomicU64::new(1);

/// Identifies one gauge instance for capture ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GaugeId(u64);

impl GaugeId {
    fn next() -> Self {
        Self(NEXT_GAUGE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Shared interaction context handle.
pub type SharedInteraction = Rc<RefCell<InteractionContext>>;

/// Holds the exclusive drag-capture token for one widget panel.
#[derive(Debug, Default)]
pub struct InteractionContext {
    owner: Option<GaugeId>,
}

impl InteractionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience for hosts sharing one context between gauges.
    pub fn shared() -> SharedInteraction {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Test-and-set acquisition. Fails without side effects when another
    /// gauge already owns the capture; re-acquiring by the owner succeeds.
    pub fn try_capture(&mut self, id: GaugeId) -> bool {
        match self.owner {
            Some(owner) if owner != id => false,
            _ => {
                self.owner = Some(id);
                true
            }
        }
    }

    /// Owner-checked release; releasing an unheld capture is a no-op.
    pub fn release(&mut self, id: GaugeId) {
        if self.owner == Some(id) {
            self.owner = None;
        }
    }

    pub fn holds(&self, id: GaugeId) -> bool {
        self.owner == Some(id)
    }

    pub fn owner(&self) -> Option<GaugeId> {
        self.owner
    }
}

/// Turns press/drag/release positions inside the visual bar into values.
#[derive(Debug)]
pub struct ScrubController {
    id: GaugeId,
}

impl Default for ScrubController {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrubController {
    pub fn new() -> Self {
        Self { id: GaugeId::next() }
    }

    pub fn id(&self) -> GaugeId {
        self.id
    }

    /// Whether this controller currently owns the drag.
    pub fn holds(&self, ctx: &InteractionContext) -> bool {
        ctx.holds(self.id)
    }

    /// Primary press inside the bar: claim capture and compute the value at
    /// `x`. Returns `None` when another gauge holds the capture, leaving that
    /// capture untouched.
    pub fn press(
        &self,
        ctx: &mut InteractionContext,
        x: f64,
        bar: Rect,
        min: f64,
        max: f64,
    ) -> Option<f64> {
        if !ctx.try_capture(self.id) {
            return None;
        }
        Some(value_at(x, bar, min, max))
    }

    /// Drag while holding capture: recompute the value. The position may
    /// exceed the bar bounds and is clamped. Returns `None` without capture.
    pub fn drag(
        &self,
        ctx: &InteractionContext,
        x: f64,
        bar: Rect,
        min: f64,
        max: f64,
    ) -> Option<f64> {
        if !ctx.holds(self.id) {
            return None;
        }
        Some(value_at(x, bar, min, max))
    }

    /// Release: frees the capture if held. Returns whether the event was
    /// consumed (i.e. the capture was actually ours).
    pub fn release(&self, ctx: &mut InteractionContext) -> bool {
        if ctx.holds(self.id) {
            ctx.release(self.id);
            true
        } else {
            false
        }
    }
}

/// Map a pointer x position on `bar` to a value in `[min, max]`.
fn value_at(x: f64, bar: Rect, min: f64, max: f64) -> f64 {
    let width = bar.width();
    let pct = if width > 0.0 {
        math::clamp01((x - bar.x0) / width)
    } else {
        0.0
    };
    min + pct * (max - min)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar() -> Rect {
        Rect::new(100.0, 0.0, 300.0, 14.0)
    }

    #[test]
    fn press_at_edges_commits_min_and_max() {
        let mut ctx = InteractionContext::new();
        let scrub = ScrubController::new();

        assert_eq!(scrub.press(&mut ctx, 100.0, bar(), 0.0, 100.0), Some(0.0));
        scrub.release(&mut ctx);
        assert_eq!(scrub.press(&mut ctx, 300.0, bar(), 0.0, 100.0), Some(100.0));
    }

    #[test]
    fn drag_positions_are_clamped_to_the_bar() {
        let mut ctx = InteractionContext::new();
        let scrub = ScrubController::new();
        scrub.press(&mut ctx, 200.0, bar(), 0.0, 100.0);

        assert_eq!(scrub.drag(&ctx, -50.0, bar(), 0.0, 100.0), Some(0.0));
        assert_eq!(scrub.drag(&ctx, 1000.0, bar(), 0.0, 100.0), Some(100.0));
        assert_eq!(scrub.drag(&ctx, 150.0, bar(), 0.0, 100.0), Some(25.0));
    }

    #[test]
    fn values_respect_nonzero_min() {
        let mut ctx = InteractionContext::new();
        let scrub = ScrubController::new();
        assert_eq!(scrub.press(&mut ctx, 200.0, bar(), 50.0, 150.0), Some(100.0));
    }

    #[test]
    fn drag_without_capture_is_ignored() {
        let ctx = InteractionContext::new();
        let scrub = ScrubController::new();
        assert_eq!(scrub.drag(&ctx, 200.0, bar(), 0.0, 100.0), None);
    }

    #[test]
    fn press_does_not_steal_a_held_capture() {
        let mut ctx = InteractionContext::new();
        let first = ScrubController::new();
        let second = ScrubController::new();

        assert!(first.press(&mut ctx, 150.0, bar(), 0.0, 100.0).is_some());
        assert_eq!(second.press(&mut ctx, 250.0, bar(), 0.0, 100.0), None);
        assert!(ctx.holds(first.id()));

        // Nor does the other gauge's release clear it.
        assert!(!second.release(&mut ctx));
        assert!(ctx.holds(first.id()));

        assert!(first.release(&mut ctx));
        assert_eq!(ctx.owner(), None);
    }

    #[test]
    fn release_is_idempotent() {
        let mut ctx = InteractionContext::new();
        let scrub = ScrubController::new();
        scrub.press(&mut ctx, 150.0, bar(), 0.0, 100.0);
        assert!(scrub.release(&mut ctx));
        assert!(!scrub.release(&mut ctx));
    }

    #[test]
    fn owner_may_reacquire() {
        let mut ctx = InteractionContext::new();
        let scrub = ScrubController::new();
        scrub.press(&mut ctx, 150.0, bar(), 0.0, 100.0);
        assert!(scrub.press(&mut ctx, 160.0, bar(), 0.0, 100.0).is_some());
    }

    #[test]
    fn zero_width_bar_maps_to_min() {
        let mut ctx = InteractionContext::new();
        let scrub = ScrubController::new();
        let empty = Rect::new(100.0, 0.0, 100.0, 14.0);
        assert_eq!(scrub.press(&mut ctx, 100.0, empty, 5.0, 10.0), Some(5.0));
    }
}
