//! DOM Operation Errors
//!
//! Failures raised by host DOM calls.

use crate::NodeId;

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// Node id does not exist in this tree
    #[error("{0} not found")]
    NotFound(NodeId),

    /// Element operation on a text, comment or document node
    #[error("{0} is not an element")]
    NotAnElement(NodeId),

    /// Insertion would break the tree (cycle, bad parent or child kind)
    #[error("hierarchy request error: {0}")]
    HierarchyRequest(String),

    /// Selector failed to parse
    #[error("'{0}' is not a valid selector")]
    InvalidSelector(String),

    /// Tag or attribute name contains forbidden characters
    #[error("'{0}' is not a valid name")]
    InvalidName(String),

    /// Unknown or malformed style property name
    #[error("'{0}' is not a valid style property")]
    InvalidProperty(String),

    /// Markup could not be parsed
    #[error("markup error: {0}")]
    Markup(String),
}
