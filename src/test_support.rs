//! In-memory field tree used by unit tests in place of a real host.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::field::{FieldKind, FieldNode};

struct Inner {
    name: String,
    kind: FieldKind,
    value: Cell<f64>,
    children: RefCell<Vec<TestField>>,
    expanded: Cell<bool>,
    alive: Cell<bool>,
    target: Cell<u64>,
    commits: Cell<u32>,
    row_height: f64,
}

/// A cheap-to-clone fake field handle with interior mutability.
#[derive(Clone)]
pub(crate) struct TestField(Rc<Inner>);

impl TestField {
    fn leaf(name: &str, kind: FieldKind, value: f64) -> Self {
        Self(Rc::new(Inner {
            name: name.to_string(),
            kind,
            value: Cell::new(value),
            children: RefCell::new(Vec::new()),
            expanded: Cell::new(false),
            alive: Cell::new(true),
            target: Cell::new(1),
            commits: Cell::new(0),
            row_height: 18.0,
        }))
    }

    pub fn float(name: &str, value: f64) -> Self {
        Self::leaf(name, FieldKind::Float, value)
    }

    pub fn int(name: &str, value: i32) -> Self {
        Self::leaf(name, FieldKind::Int, value as f64)
    }

    pub fn long(name: &str, value: i64) -> Self {
        Self::leaf(name, FieldKind::Long, value as f64)
    }

    pub fn group(name: &str, children: Vec<TestField>) -> Self {
        let node = Self::leaf(name, FieldKind::Other, 0.0);
        *node.0.children.borrow_mut() = children;
        node
    }

    pub fn set_target_id(&self, id: u64) {
        self.0.target.set(id);
    }

    pub fn kill(&self) {
        self.0.alive.set(false);
    }

    pub fn commit_count(&self) -> u32 {
        self.0.commits.get()
    }

    pub fn raw_value(&self) -> f64 {
        self.0.value.get()
    }
}

impl FieldNode for TestField {
    fn name(&self) -> &str {
        &self.0.name
    }

    fn kind(&self) -> FieldKind {
        self.0.kind
    }

    fn child(&self, name: &str) -> Option<Self> {
        self.0
            .children
            .borrow()
            .iter()
            .find(|c| c.0.name == name)
            .cloned()
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

    fn commit(&self) {
        self.0.commits.set(self.0.commits.get() + 1);
    }

    fn is_expanded(&self) -> bool {
        self.0.expanded.get()
    }

    fn set_expanded(&self, expanded: bool) {
        self.0.expanded.set(expanded);
    }

    fn children(&self) -> Vec<Self> {
        self.0.children.borrow().clone()
    }

    fn row_height(&self) -> f64 {
        self.0.row_height
    }

    fn target_id(&self) -> u64 {
        self.0.target.get()
    }

    fn is_alive(&self) -> bool {
        self.0.alive.get()
    }
}
