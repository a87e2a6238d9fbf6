//! Element Attributes
//!
//! Attribute manipulation: get, set, remove, has, toggle.
//! HTML attribute names are ASCII case-insensitive, so names are stored
//! lower-case and looked up the same way.

use crate::{DomError, DomResult, DomTree, NodeId};

/// Single attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: String,
    pub value: String,
}

/// Named node map (attribute collection)
#[derive(Debug, Clone, Default)]
pub struct NamedNodeMap {
    attributes: Vec<Attr>,
}

impl NamedNodeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.attributes
            .iter()
            .position(|a| a.name.eq_ignore_ascii_case(name))
    }

    /// Get attribute value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|i| self.attributes[i].value.as_str())
    }

    /// Set attribute, returning the previous value
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Option<String> {
        let value = value.into();
        match self.position(name) {
            Some(i) => Some(std::mem::replace(&mut self.attributes[i].value, value)),
            None => {
                self.attributes.push(Attr {
                    name: name.to_ascii_lowercase(),
                    value,
                });
                None
            }
        }
    }

    /// Remove attribute, returning its value
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.position(name)
            .map(|i| self.attributes.remove(i).value)
    }

    /// Check if attribute exists
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Toggle attribute presence, returns whether it is present afterwards
    pub fn toggle(&mut self, name: &str, force: Option<bool>) -> bool {
        let present = self.contains(name);
        let wanted = force.unwrap_or(!present);
        if wanted && !present {
            self.set(name, "");
        } else if !wanted && present {
            self.remove(name);
        }
        wanted
    }

    /// Attribute names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|a| a.name.as_str())
    }

    /// Iterate over attributes
    pub fn iter(&self) -> impl Iterator<Item = &Attr> {
        self.attributes.iter()
    }
}

/// Reject names the HTML serializer could not round-trip
pub fn validate_name(name: &str) -> DomResult<()> {
    let bad = name.is_empty()
        || name.chars().any(|c| {
            c.is_whitespace()
                || c.is_control()
                || matches!(c, '"' | '\'' | '>' | '<' | '/' | '=')
        });
    if bad {
        return Err(DomError::InvalidName(name.to_string()));
    }
    Ok(())
}

impl DomTree {
    pub fn get_attribute(&self, id: NodeId, name: &str) -> DomResult<Option<&str>> {
        Ok(self.element(id)?.attrs.get(name))
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> DomResult<bool> {
        Ok(self.element(id)?.attrs.contains(name))
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        validate_name(name)?;
        self.element_mut(id)?.attrs.set(name, value);
        Ok(())
    }

    /// Remove an attribute; absent attributes are not an error
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> DomResult<()> {
        self.element_mut(id)?.attrs.remove(name);
        Ok(())
    }

    pub fn toggle_attribute(
        &mut self,
        id: NodeId,
        name: &str,
        force: Option<bool>,
    ) -> DomResult<bool> {
        validate_name(name)?;
        Ok(self.element_mut(id)?.attrs.toggle(name, force))
    }
}
