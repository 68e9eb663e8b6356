pub mod memory;

use anyhow::Result;

use crate::events::PointerEvent;

/// Opaque handle to a node owned by a [`Surface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

/// The drawable-surface primitives the slider consumes.
///
/// The slider never walks the node tree itself; it keeps the ids it
/// created and mutates them through this interface. Implementations
/// report failures as `anyhow` errors, which the slider wraps as render
/// errors.
pub trait Surface {
    /// Look up an existing element by selector.
    fn query(&mut self, selector: &str) -> Result<NodeId>;

    /// Create a detached element.
    fn create_element(&mut self, tag: &str) -> NodeId;

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<()>;

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) -> Result<()>;

    /// Replace the node's content with a raw markup fragment, unescaped.
    fn insert_markup(&mut self, node: NodeId, markup: &str) -> Result<()>;

    /// Replace the node's content with plain text.
    fn insert_text(&mut self, node: NodeId, text: &str) -> Result<()>;

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()>;

    /// Insert `child` as the first child of `parent`.
    fn insert_first(&mut self, parent: NodeId, child: NodeId) -> Result<()>;

    /// Register interest in a pointer event on `node`.
    fn listen(&mut self, node: NodeId, event: PointerEvent) -> Result<()>;

    /// Drop every listener on `node` and its subtree, as if the node were
    /// replaced by a listener-free clone of itself.
    fn strip_listeners(&mut self, node: NodeId) -> Result<()>;

    /// Detach `node` and its subtree from the surface.
    fn remove(&mut self, node: NodeId) -> Result<()>;
}
