//! fOS DOM - Document Object Model
//!
//! Arena-based DOM tree and the host APIs the query layer delegates to:
//! selector matching, attributes, class tokens, inline style, form state,
//! event dispatch and focus.

mod node;
mod tree;
mod document;
mod operations;
mod attributes;
mod classlist;
mod style;
mod element;
mod dom_events;
mod serialize;
pub mod forms;
pub mod selector;

pub use node::{Node, NodeData, ElementData};
pub use tree::DomTree;
pub use document::Document;
pub use operations::{DomError, DomResult};
pub use attributes::{Attr, NamedNodeMap, validate_name};
pub use classlist::ClassList;
pub use style::{StyleDeclaration, Declaration, normalize_property, parse_declaration};
pub use element::NodeList;
pub use dom_events::{Event, EventPhase, EventListeners, Listener, ListenerOptions};
pub use forms::{FormState, InputType};
pub use selector::SelectorList;

/// Node identifier (index into arena)
///
/// Ids are never reused, so two ids compare equal exactly when they name
/// the same node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node ID (the document node)
    pub const ROOT: NodeId = NodeId(0);

    /// Null node
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check that this is not the null node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            write!(f, "node#{}", self.0)
        } else {
            write!(f, "null")
        }
    }
}
