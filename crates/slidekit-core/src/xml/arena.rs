use super::node::XmlNodeData;
use super::xname::XName;
use indextree::{Arena, NodeId};

/// Read-mostly XML tree backed by an `indextree` arena.
///
/// Built once per part by [`crate::xml::parser::parse_bytes`]; the lookup
/// helpers return `None` for absent nodes and attributes so callers can
/// apply their own fallback.
pub struct XmlDocument {
    arena: Arena<XmlNodeData>,
    root: Option<NodeId>,
}

impl XmlDocument {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn get(&self, id: NodeId) -> Option<&XmlNodeData> {
        self.arena.get(id).map(|node| node.get())
    }

    pub fn add_root(&mut self, data: XmlNodeData) -> NodeId {
        let id = self.arena.new_node(data);
        self.root = Some(id);
        id
    }

    pub fn add_child(&mut self, parent: NodeId, data: XmlNodeData) -> NodeId {
        let child = self.arena.new_node(data);
        parent.append(child, &mut self.arena);
        child
    }

    pub fn children(&self, parent: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        parent.children(&self.arena)
    }

    /// Descendants in document order, including `node` itself.
    pub fn descendants(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        node.descendants(&self.arena)
    }

    pub fn name(&self, id: NodeId) -> Option<&XName> {
        self.get(id).and_then(|data| data.name())
    }

    pub fn is(&self, id: NodeId, name: &XName) -> bool {
        self.name(id) == Some(name)
    }

    /// Element children only, skipping text.
    pub fn element_children(&self, parent: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(parent)
            .filter(move |&child| self.get(child).map(|d| d.is_element()).unwrap_or(false))
    }

    pub fn elements_by_name<'a>(
        &'a self,
        parent: NodeId,
        name: &'a XName,
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.children(parent)
            .filter(move |&child_id| self.is(child_id, name))
    }

    pub fn first_child(&self, parent: NodeId, name: &XName) -> Option<NodeId> {
        self.elements_by_name(parent, name).next()
    }

    /// Strict descendants of `node` with the given name, in document order.
    pub fn descendants_named<'a>(
        &'a self,
        node: NodeId,
        name: &'a XName,
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.descendants(node)
            .skip(1)
            .filter(move |&id| self.is(id, name))
    }

    pub fn first_descendant(&self, node: NodeId, name: &XName) -> Option<NodeId> {
        self.descendants_named(node, name).next()
    }

    /// Value of an unqualified attribute.
    pub fn attr(&self, id: NodeId, local_name: &str) -> Option<&str> {
        self.get(id)?
            .attribute_where(|name| name.is_unqualified(local_name))
    }

    /// Value of a namespace-qualified attribute.
    pub fn attr_ns(&self, id: NodeId, name: &XName) -> Option<&str> {
        self.get(id)?.attribute_where(|candidate| candidate == name)
    }

    /// Concatenated text of every text node under `node`.
    pub fn text_content(&self, node: NodeId) -> String {
        self.descendants(node)
            .filter_map(|id| self.get(id).and_then(|d| d.text()))
            .collect()
    }
}

impl Default for XmlDocument {
    fn default() -> Self {
        Self::new()
    }
}
