//! HTML5 Parser implementation
//!
//! Uses html5ever's RcDom and converts the result into our arena DOM.
//! Fragments are parsed in `<body>` context.

use fos_dom::{Document, DomTree, NodeId};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::ParseOpts;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};
use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Parser options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Parse `<noscript>` content as raw text, like a scripting browser
    pub scripting_enabled: bool,
    /// Keep whitespace-only text nodes
    pub keep_whitespace: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            scripting_enabled: true,
            keep_whitespace: true,
        }
    }
}

/// HTML5 parser
#[derive(Debug, Clone, Default)]
pub struct HtmlParser {
    config: ParserConfig,
}

impl HtmlParser {
    /// Create a parser with default options
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse HTML string into a Document
    pub fn parse(&self, html: &str) -> Result<Document, ParseError> {
        self.parse_with_url(html, "about:blank")
    }

    /// Parse HTML with a base URL
    pub fn parse_with_url(&self, html: &str, url: &str) -> Result<Document, ParseError> {
        tracing::debug!("Parsing HTML document: {}", url);

        let dom = self.parse_rcdom(html)?;
        let mut tree = DomTree::new();
        self.convert_children(&dom.document, &mut tree, NodeId::ROOT)?;

        let document = Document::from_tree(tree, url);
        tracing::debug!("Parsed {} nodes", document.tree().len());
        Ok(document)
    }

    /// Parse `markup` as the content of `context` and append the resulting
    /// nodes to it. Returns the ids of the new top-level nodes.
    pub fn parse_fragment_into(
        &self,
        tree: &mut DomTree,
        context: NodeId,
        markup: &str,
    ) -> Result<Vec<NodeId>, ParseError> {
        tree.node(context)?;
        let wrapped = format!("<!DOCTYPE html><body>{markup}");
        let dom = self.parse_rcdom(&wrapped)?;
        let body = find_element(&dom.document, "body").ok_or(ParseError::MissingBody)?;

        let added = self.convert_children(&body, tree, context)?;
        tracing::debug!("Parsed fragment into {}: {} top-level nodes", context, added.len());
        Ok(added)
    }

    fn parse_rcdom(&self, html: &str) -> Result<RcDom, ParseError> {
        let opts = ParseOpts {
            tree_builder: TreeBuilderOpts {
                scripting_enabled: self.config.scripting_enabled,
                ..Default::default()
            },
            ..Default::default()
        };
        let dom = parse_document(RcDom::default(), opts)
            .from_utf8()
            .read_from(&mut html.as_bytes())?;
        Ok(dom)
    }

    fn convert_children(
        &self,
        handle: &Handle,
        tree: &mut DomTree,
        parent: NodeId,
    ) -> Result<Vec<NodeId>, ParseError> {
        let mut added = Vec::new();
        for child in handle.children.borrow().iter() {
            if let Some(id) = self.convert_node(child, tree, parent)? {
                added.push(id);
            }
        }
        Ok(added)
    }

    /// Convert an RcDom node to our DOM format
    fn convert_node(
        &self,
        handle: &Handle,
        tree: &mut DomTree,
        parent: NodeId,
    ) -> Result<Option<NodeId>, ParseError> {
        let id = match &handle.data {
            RcNodeData::Text { contents } => {
                let text = contents.borrow().to_string();
                if !self.config.keep_whitespace && text.trim().is_empty() {
                    return Ok(None);
                }
                tree.create_text(&text)
            }
            RcNodeData::Comment { contents } => tree.create_comment(contents),
            RcNodeData::Element { name, attrs, .. } => {
                let id = tree.create_element(&name.local);
                let elem = tree.element_mut(id)?;
                for attr in attrs.borrow().iter() {
                    elem.set_attr(&attr.name.local, attr.value.to_string());
                }
                tree.append_child(parent, id)?;
                self.convert_children(handle, tree, id)?;
                return Ok(Some(id));
            }
            // Doctype and processing instructions have no counterpart
            _ => return Ok(None),
        };
        tree.append_child(parent, id)?;
        Ok(Some(id))
    }
}

/// Depth-first search for the first element named `tag`
fn find_element(handle: &Handle, tag: &str) -> Option<Handle> {
    for child in handle.children.borrow().iter() {
        if let RcNodeData::Element { name, .. } = &child.data {
            if name.local.as_ref() == tag {
                return Some(child.clone());
            }
        }
        if let Some(found) = find_element(child, tag) {
            return Some(found);
        }
    }
    None
}
