//! DOM Node - Compact representation
//!
//! Nodes link to each other through `NodeId`s (4 bytes) instead of pointers,
//! so the whole tree lives in one arena and ids stay stable after detach.

use std::collections::HashMap;

use crate::{ClassList, EventListeners, FormState, InputType, Listener, NamedNodeMap, NodeId};

/// DOM Node - Core structure
#[derive(Debug)]
pub struct Node {
    /// Parent node (NONE if detached or root)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    pub(crate) fn new(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Check if this is text
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    /// Check if this node may hold children
    #[inline]
    pub fn is_container(&self) -> bool {
        matches!(
            self.data,
            NodeData::Document | NodeData::Fragment | NodeData::Element(_)
        )
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    /// Document root
    Document,
    /// Detached container; its children move on insertion
    Fragment,
    /// Element
    Element(ElementData),
    /// Text content
    Text(String),
    /// Comment
    Comment(String),
}

/// Element-specific data
#[derive(Debug)]
pub struct ElementData {
    /// Tag name, lower-case
    pub tag: String,
    /// Attributes in insertion order
    pub attrs: NamedNodeMap,
    /// Dirty value / checkedness of form controls
    pub form: FormState,
    /// Registered event listeners
    pub listeners: EventListeners,
    /// `on<type>` handler properties, one per event type
    pub handlers: HashMap<String, Listener>,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: NamedNodeMap::new(),
            form: FormState::default(),
            listeners: EventListeners::default(),
            handlers: HashMap::new(),
        }
    }

    /// Get an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name)
    }

    /// Set an attribute without name validation (parser path)
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        self.attrs.set(name, value);
    }

    /// The `id` attribute
    pub fn id(&self) -> Option<&str> {
        self.attrs.get("id")
    }

    /// Class tokens parsed from the `class` attribute
    pub fn class_list(&self) -> ClassList {
        ClassList::from_attr(self.attrs.get("class"))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attrs
            .get("class")
            .is_some_and(|value| value.split_ascii_whitespace().any(|c| c == class))
    }

    /// Input type, for `<input>` elements only
    pub fn input_type(&self) -> Option<InputType> {
        (self.tag == "input").then(|| InputType::parse(self.attrs.get("type").unwrap_or("")))
    }

    /// Form control that honours the `disabled` attribute
    pub fn is_form_control(&self) -> bool {
        matches!(
            self.tag.as_str(),
            "button" | "input" | "select" | "textarea" | "option" | "fieldset"
        )
    }

    /// Disabled form control
    pub fn is_disabled(&self) -> bool {
        self.is_form_control() && self.attrs.contains("disabled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_tag_lowercased() {
        let elem = ElementData::new("DIV");
        assert_eq!(elem.tag, "div");
    }

    #[test]
    fn test_has_class() {
        let mut elem = ElementData::new("p");
        elem.set_attr("class", "note  warning");
        assert!(elem.has_class("warning"));
        assert!(!elem.has_class("warn"));
    }

    #[test]
    fn test_disabled_only_for_controls() {
        let mut button = ElementData::new("button");
        button.set_attr("disabled", "");
        assert!(button.is_disabled());

        let mut div = ElementData::new("div");
        div.set_attr("disabled", "");
        assert!(!div.is_disabled());
    }
}
