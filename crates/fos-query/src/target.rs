//! Target resolution
//!
//! A [`Target`] names the element(s) a verb acts on. Selector strings are
//! matched against the connected document in document order; nodes and
//! collections are taken as given, in their own order. `NodeId::NONE`
//! stands for "no element" wherever it appears.
//!
//! Resolution never mutates the document or the input, so resolving the
//! same target twice against an unchanged document yields the same nodes.

use std::fmt;

use fos_dom::{Document, NodeId, NodeList};

use crate::{Error, Page, Result};

/// What a verb should act on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    /// CSS selector, matched against the document
    Selector(&'a str),
    /// One already-resolved node
    Node(NodeId),
    /// Already-resolved nodes, used in this order
    Nodes(&'a [NodeId]),
}

impl<'a> From<&'a str> for Target<'a> {
    fn from(selector: &'a str) -> Self {
        Target::Selector(selector)
    }
}

impl<'a> From<&'a String> for Target<'a> {
    fn from(selector: &'a String) -> Self {
        Target::Selector(selector)
    }
}

impl From<NodeId> for Target<'_> {
    fn from(node: NodeId) -> Self {
        Target::Node(node)
    }
}

impl From<Option<NodeId>> for Target<'_> {
    fn from(node: Option<NodeId>) -> Self {
        Target::Node(node.unwrap_or(NodeId::NONE))
    }
}

impl<'a> From<&'a [NodeId]> for Target<'a> {
    fn from(nodes: &'a [NodeId]) -> Self {
        Target::Nodes(nodes)
    }
}

impl<'a, const N: usize> From<&'a [NodeId; N]> for Target<'a> {
    fn from(nodes: &'a [NodeId; N]) -> Self {
        Target::Nodes(nodes)
    }
}

impl<'a> From<&'a Vec<NodeId>> for Target<'a> {
    fn from(nodes: &'a Vec<NodeId>) -> Self {
        Target::Nodes(nodes)
    }
}

impl<'a> From<&'a NodeList> for Target<'a> {
    fn from(nodes: &'a NodeList) -> Self {
        Target::Nodes(nodes.as_slice())
    }
}

impl fmt::Display for Target<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Selector(selector) => write!(f, "selector {selector:?}"),
            Target::Node(node) => write!(f, "{node}"),
            Target::Nodes(nodes) => {
                write!(f, "[")?;
                for (i, node) in nodes.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{node}")?;
                }
                write!(f, "]")
            }
        }
    }
}

/// First node of the target, or `None`
pub fn resolve<'a>(doc: &Document, target: impl Into<Target<'a>>) -> Result<Option<NodeId>> {
    let target = target.into();
    let node = match target {
        Target::Selector(selector) => doc.query_selector(selector)?,
        Target::Node(node) => Some(node).filter(|n| n.is_valid()),
        Target::Nodes(nodes) => nodes.iter().copied().find(|n| n.is_valid()),
    };
    tracing::trace!("resolve {target} -> {node:?}");
    Ok(node)
}

/// Last node of the target, or `None`
pub fn resolve_last<'a>(doc: &Document, target: impl Into<Target<'a>>) -> Result<Option<NodeId>> {
    Ok(resolve_all(doc, target)?.pop())
}

/// Node at `index` (zero-based) of the target, or `None`
pub fn resolve_nth<'a>(
    doc: &Document,
    target: impl Into<Target<'a>>,
    index: usize,
) -> Result<Option<NodeId>> {
    Ok(resolve_all(doc, target)?.get(index).copied())
}

/// Every node of the target, possibly none
pub fn resolve_all<'a>(doc: &Document, target: impl Into<Target<'a>>) -> Result<Vec<NodeId>> {
    let target = target.into();
    let nodes = match target {
        Target::Selector(selector) => doc.query_selector_all(selector)?.into_vec(),
        Target::Node(node) if node.is_valid() => vec![node],
        Target::Node(_) => Vec::new(),
        Target::Nodes(nodes) => nodes.iter().copied().filter(|n| n.is_valid()).collect(),
    };
    tracing::trace!("resolve_all {target} -> {} nodes", nodes.len());
    Ok(nodes)
}

/// First node of the target; fails when there is none
pub fn resolve_required<'a>(doc: &Document, target: impl Into<Target<'a>>) -> Result<NodeId> {
    let target = target.into();
    resolve(doc, target)?.ok_or_else(|| Error::Resolution {
        target: target.to_string(),
    })
}

/// First element of the target
pub fn get_element<'a>(page: &Page, target: impl Into<Target<'a>>) -> Result<Option<NodeId>> {
    resolve(page.document(), target)
}

/// All elements of the target
pub fn get_elements<'a>(page: &Page, target: impl Into<Target<'a>>) -> Result<NodeList> {
    Ok(NodeList::from_vec(resolve_all(page.document(), target)?))
}

pub fn get_last_element<'a>(page: &Page, target: impl Into<Target<'a>>) -> Result<Option<NodeId>> {
    resolve_last(page.document(), target)
}

pub fn get_nth_element<'a>(
    page: &Page,
    target: impl Into<Target<'a>>,
    index: usize,
) -> Result<Option<NodeId>> {
    resolve_nth(page.document(), target, index)
}
