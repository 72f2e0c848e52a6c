//! Host property-tree interface.
//!
//! The gauge never owns the data it visualizes; it reads and writes fields of
//! an inspection framework's property tree through [`FieldNode`]. Handles are
//! expected to be cheap to clone (reference-like).

use floem::context::PaintCx;
use floem::kurbo::Rect;

/// Declared numeric kind of a field.
///
/// The kind fixes the commit path: floats are stored directly, integer kinds
/// are rounded to nearest. [`FieldKind::Other`] covers composite wrappers and
/// anything non-numeric; such fields read as 0 and ignore writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Float,
    Int,
    Long,
    Other,
}

/// A handle into the host's tree of editable fields.
pub trait FieldNode: Clone {
    /// Field name as declared in the tree.
    fn name(&self) -> &str;

    fn kind(&self) -> FieldKind;

    /// Direct child lookup by name.
    fn child(&self, name: &str) -> Option<Self>;

    fn as_float(&self) -> f64;
    fn as_int(&self) -> i32;
    fn as_long(&self) -> i64;

    fn set_float(&self, value: f64);
    fn set_int(&self, value: i32);
    fn set_long(&self, value: i64);

    /// Flush pending writes through the host's commit mechanism so external
    /// observers see the change synchronously.
    fn commit(&self);

    fn is_expanded(&self) -> bool;
    fn set_expanded(&self, expanded: bool);

    /// Visible child nodes in declaration order.
    fn children(&self) -> Vec<Self>;

    /// Host-rendered height of this node when drawn as a child row.
    fn row_height(&self) -> f64;

    /// Identity of the underlying bound object. A changed identity means the
    /// host swapped the data and any cached resolution must be discarded.
    fn target_id(&self) -> u64;

    /// Whether the underlying bound object still exists.
    fn is_alive(&self) -> bool;

    /// Ask the host to render this node as a generic field row.
    ///
    /// Called for child rows beneath an expanded gauge header. The default
    /// draws nothing, for hosts that render children through their own pass.
    fn paint(&self, _cx: &mut PaintCx, _rect: Rect) {}
}
