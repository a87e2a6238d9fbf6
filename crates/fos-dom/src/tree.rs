//! DOM Tree (arena-based allocation)
//!
//! Node 0 is always the document node. Detached nodes stay in the arena so
//! that a `NodeId` held by a caller never starts naming a different node.

use crate::{DomError, DomResult, ElementData, Node, NodeData, NodeId};

/// Arena-based DOM tree for memory efficiency
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeData::Document)],
        }
    }

    /// Document node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes in the arena, detached ones included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Only the document node exists
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    pub fn node(&self, id: NodeId) -> DomResult<&Node> {
        self.get(id).ok_or(DomError::NotFound(id))
    }

    pub fn element(&self, id: NodeId) -> DomResult<&ElementData> {
        self.node(id)?.as_element().ok_or(DomError::NotAnElement(id))
    }

    pub fn element_mut(&mut self, id: NodeId) -> DomResult<&mut ElementData> {
        self.get_mut(id)
            .ok_or(DomError::NotFound(id))?
            .as_element_mut()
            .ok_or(DomError::NotAnElement(id))
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(Node::new(NodeData::Element(ElementData::new(tag))))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(Node::new(NodeData::Text(text.to_string())))
    }

    /// Create a detached comment
    pub fn create_comment(&mut self, text: &str) -> NodeId {
        self.push(Node::new(NodeData::Comment(text.to_string())))
    }

    /// Create an empty fragment
    pub fn create_fragment(&mut self) -> NodeId {
        self.push(Node::new(NodeData::Fragment))
    }

    /// Parent node, if attached
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.parent).filter(|p| p.is_valid())
    }

    /// Iterate children as `(id, node)` pairs
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.get(id).map_or(NodeId::NONE, |n| n.first_child),
        }
    }

    pub fn child_ids(&self, id: NodeId) -> Vec<NodeId> {
        self.children(id).map(|(child, _)| child).collect()
    }

    /// Element children only
    pub fn element_children(&self, id: NodeId) -> Vec<NodeId> {
        self.children(id)
            .filter(|(_, node)| node.is_element())
            .map(|(child, _)| child)
            .collect()
    }

    /// All descendants in document (pre-)order, excluding `id`
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.child_ids(id);
        stack.reverse();
        while let Some(next) = stack.pop() {
            out.push(next);
            let before = stack.len();
            stack.extend(self.children(next).map(|(child, _)| child));
            stack[before..].reverse();
        }
        out
    }

    /// Ancestors from the parent upwards
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&n| self.parent(n))
    }

    /// Topmost ancestor (the node itself when detached without parent)
    pub fn tree_root(&self, id: NodeId) -> NodeId {
        self.ancestors(id).last().unwrap_or(id)
    }

    /// Inclusive ancestor check
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        ancestor == node || self.ancestors(node).any(|a| a == ancestor)
    }

    pub fn previous_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let mut cur = self.get(id)?.prev_sibling;
        while cur.is_valid() {
            let node = self.get(cur)?;
            if node.is_element() {
                return Some(cur);
            }
            cur = node.prev_sibling;
        }
        None
    }

    pub fn next_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let mut cur = self.get(id)?.next_sibling;
        while cur.is_valid() {
            let node = self.get(cur)?;
            if node.is_element() {
                return Some(cur);
            }
            cur = node.next_sibling;
        }
        None
    }

    /// Append `child` as the last child of `parent`
    ///
    /// An attached child is moved; a fragment child donates its children.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        self.insert_before(parent, child, None)
    }

    /// Insert `child` before `reference` (or at the end when `None`)
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: Option<NodeId>,
    ) -> DomResult<NodeId> {
        self.check_insert(parent, child)?;
        let mut before = reference.unwrap_or(NodeId::NONE);
        if before.is_valid() && self.node(before)?.parent != parent {
            return Err(DomError::HierarchyRequest(format!(
                "{before} is not a child of {parent}"
            )));
        }
        if before == child {
            before = self.node(child)?.next_sibling;
        }

        if matches!(self.node(child)?.data, NodeData::Fragment) {
            for moved in self.child_ids(child) {
                self.unlink(moved);
                self.link(parent, moved, before);
            }
        } else {
            self.unlink(child);
            self.link(parent, child, before);
        }
        Ok(child)
    }

    fn check_insert(&self, parent: NodeId, child: NodeId) -> DomResult<()> {
        if !self.node(parent)?.is_container() {
            return Err(DomError::HierarchyRequest(format!(
                "{parent} cannot have children"
            )));
        }
        if matches!(self.node(child)?.data, NodeData::Document) {
            return Err(DomError::HierarchyRequest(
                "the document node cannot be inserted".to_string(),
            ));
        }
        if self.contains(child, parent) {
            return Err(DomError::HierarchyRequest(format!(
                "{child} is an ancestor of {parent}"
            )));
        }
        Ok(())
    }

    fn link(&mut self, parent: NodeId, child: NodeId, before: NodeId) {
        let prev = if before.is_valid() {
            self.nodes[before.index()].prev_sibling
        } else {
            self.nodes[parent.index()].last_child
        };

        let node = &mut self.nodes[child.index()];
        node.parent = parent;
        node.prev_sibling = prev;
        node.next_sibling = before;

        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        if before.is_valid() {
            self.nodes[before.index()].prev_sibling = child;
        } else {
            self.nodes[parent.index()].last_child = child;
        }
    }

    fn unlink(&mut self, child: NodeId) {
        let (parent, prev, next) = {
            let node = &self.nodes[child.index()];
            (node.parent, node.prev_sibling, node.next_sibling)
        };
        if !parent.is_valid() {
            return;
        }
        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = next;
        } else {
            self.nodes[parent.index()].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = prev;
        } else {
            self.nodes[parent.index()].last_child = prev;
        }
        let node = &mut self.nodes[child.index()];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
    }

    /// Detach a node from its parent; returns whether it was attached
    pub fn detach(&mut self, id: NodeId) -> DomResult<bool> {
        let attached = self.node(id)?.parent.is_valid();
        self.unlink(id);
        Ok(attached)
    }

    /// Detach all children of `id`, returning how many were removed
    pub fn remove_children(&mut self, id: NodeId) -> DomResult<usize> {
        self.node(id)?;
        let children = self.child_ids(id);
        for &child in &children {
            self.unlink(child);
        }
        Ok(children.len())
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self, id: NodeId) -> DomResult<String> {
        match &self.node(id)?.data {
            NodeData::Text(text) | NodeData::Comment(text) => Ok(text.clone()),
            _ => Ok(self
                .descendants(id)
                .into_iter()
                .filter_map(|d| self.get(d).and_then(Node::as_text))
                .collect()),
        }
    }

    /// Replace children with a single text node (none for empty text)
    pub fn set_text_content(&mut self, id: NodeId, text: &str) -> DomResult<()> {
        match &mut self.get_mut(id).ok_or(DomError::NotFound(id))?.data {
            NodeData::Text(content) | NodeData::Comment(content) => {
                *content = text.to_string();
                return Ok(());
            }
            _ => {}
        }
        self.remove_children(id)?;
        if !text.is_empty() {
            let text = self.create_text(text);
            self.append_child(id, text)?;
        }
        Ok(())
    }
}

/// Child iterator
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.next.is_valid() {
            return None;
        }
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}
