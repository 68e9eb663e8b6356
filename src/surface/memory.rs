//! In-memory [`Surface`] used by the integration tests and by headless
//! embeddings that only need the state machine.

use std::collections::BTreeMap;

use anyhow::{Result, bail, ensure};

use super::{NodeId, Surface};
use crate::events::PointerEvent;

#[derive(Debug, Default)]
struct Node {
    tag: String,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: Option<String>,
    markup: Option<String>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    listeners: Vec<PointerEvent>,
    mount: bool,
    detached: bool,
}

/// Arena-backed surface: nodes are never deallocated, removal just
/// detaches a subtree, so stale [`NodeId`]s stay inspectable.
#[derive(Debug, Default)]
pub struct MemorySurface {
    nodes: Vec<Node>,
    selectors: BTreeMap<String, NodeId>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a mount element reachable through `selector`.
    pub fn mount(&mut self, selector: &str, tag: &str) -> NodeId {
        let id = self.push(tag);
        self.nodes[id.0 as usize].mount = true;
        self.selectors.insert(selector.to_owned(), id);
        id
    }

    fn push(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len() as u64);
        self.nodes.push(Node {
            tag: tag.to_owned(),
            ..Node::default()
        });
        id
    }

    fn check(&self, id: NodeId) -> Result<()> {
        ensure!(
            (id.0 as usize) < self.nodes.len(),
            "unknown node id {}",
            id.0
        );
        Ok(())
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0 as usize]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0 as usize]
    }

    pub fn tag(&self, id: NodeId) -> &str {
        &self.node(id).tag
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id).attributes.get(name).map(String::as_str)
    }

    pub fn style(&self, id: NodeId, property: &str) -> Option<&str> {
        self.node(id).styles.get(property).map(String::as_str)
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.node(id).text.as_deref()
    }

    pub fn markup(&self, id: NodeId) -> Option<&str> {
        self.node(id).markup.as_deref()
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    pub fn listeners(&self, id: NodeId) -> &[PointerEvent] {
        &self.node(id).listeners
    }

    /// Whether `id` is still reachable from a live mount.
    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut current = id;
        loop {
            let node = self.node(current);
            if node.detached {
                return false;
            }
            if node.mount {
                return true;
            }
            match node.parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }
}

impl Surface for MemorySurface {
    fn query(&mut self, selector: &str) -> Result<NodeId> {
        match self.selectors.get(selector) {
            Some(&id) if self.is_attached(id) => Ok(id),
            _ => bail!("no element matches selector `{selector}`"),
        }
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(tag)
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<()> {
        self.check(node)?;
        self.node_mut(node)
            .attributes
            .insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) -> Result<()> {
        self.check(node)?;
        self.node_mut(node)
            .styles
            .insert(property.to_owned(), value.to_owned());
        Ok(())
    }

    fn insert_markup(&mut self, node: NodeId, markup: &str) -> Result<()> {
        self.check(node)?;
        let node = self.node_mut(node);
        node.markup = Some(markup.to_owned());
        node.text = None;
        Ok(())
    }

    fn insert_text(&mut self, node: NodeId, text: &str) -> Result<()> {
        self.check(node)?;
        let node = self.node_mut(node);
        node.text = Some(text.to_owned());
        node.markup = None;
        Ok(())
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.check(parent)?;
        self.check(child)?;
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
        Ok(())
    }

    fn insert_first(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.check(parent)?;
        self.check(child)?;
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.insert(0, child);
        Ok(())
    }

    fn listen(&mut self, node: NodeId, event: PointerEvent) -> Result<()> {
        self.check(node)?;
        self.node_mut(node).listeners.push(event);
        Ok(())
    }

    fn strip_listeners(&mut self, node: NodeId) -> Result<()> {
        self.check(node)?;
        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            let node = self.node_mut(id);
            node.listeners.clear();
            let children = node.children.clone();
            stack.extend(children);
        }
        Ok(())
    }

    fn remove(&mut self, node: NodeId) -> Result<()> {
        self.check(node)?;
        if let Some(parent) = self.node(node).parent {
            self.node_mut(parent).children.retain(|&c| c != node);
        }
        let node = self.node_mut(node);
        node.parent = None;
        node.detached = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_resolves_registered_mounts_only() {
        let mut surface = MemorySurface::new();
        let mount = surface.mount("#slider", "div");
        assert_eq!(surface.query("#slider").unwrap(), mount);
        assert_eq!(surface.tag(mount), "div");
        assert!(surface.query("#other").is_err());
    }

    #[test]
    fn removed_subtrees_are_no_longer_attached() {
        let mut surface = MemorySurface::new();
        let mount = surface.mount("#slider", "div");
        let child = surface.create_element("div");
        surface.append_child(mount, child).unwrap();
        assert!(surface.is_attached(child));

        surface.remove(mount).unwrap();
        assert!(!surface.is_attached(child));
        assert!(surface.query("#slider").is_err());
    }

    #[test]
    fn strip_listeners_clears_the_whole_subtree() {
        let mut surface = MemorySurface::new();
        let mount = surface.mount("#slider", "div");
        let child = surface.create_element("div");
        surface.append_child(mount, child).unwrap();
        surface.listen(mount, PointerEvent::Enter).unwrap();
        surface.listen(child, PointerEvent::Leave).unwrap();

        surface.strip_listeners(mount).unwrap();
        assert!(surface.listeners(mount).is_empty());
        assert!(surface.listeners(child).is_empty());
    }
}
