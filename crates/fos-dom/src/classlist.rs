//! Class token list (classList)
//!
//! The `class` attribute is the only storage for class membership;
//! `ClassList` is a parsed view that writes back through the attribute.

use crate::{DomResult, DomTree, NodeId};

/// Ordered set of space-separated class tokens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from attribute value, dropping duplicates
    pub fn from_attr(value: Option<&str>) -> Self {
        let mut list = Self::new();
        if let Some(value) = value {
            list.add(value.split_ascii_whitespace());
        }
        list
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Add tokens, skipping empty and already present ones
    pub fn add<'a>(&mut self, tokens: impl IntoIterator<Item = &'a str>) {
        for token in tokens {
            if !token.is_empty() && !self.contains(token) {
                self.tokens.push(token.to_string());
            }
        }
    }

    pub fn remove<'a>(&mut self, tokens: impl IntoIterator<Item = &'a str>) {
        for token in tokens {
            self.tokens.retain(|t| t != token);
        }
    }

    /// Toggle token, returns new membership
    pub fn toggle(&mut self, token: &str, force: Option<bool>) -> bool {
        let wanted = force.unwrap_or(!self.contains(token));
        if wanted {
            self.add([token]);
        } else {
            self.remove([token]);
        }
        wanted
    }

    /// Serialized attribute value
    pub fn value(&self) -> String {
        self.tokens.join(" ")
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|s| s.as_str())
    }
}

impl std::fmt::Display for ClassList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value())
    }
}

impl DomTree {
    /// Apply `update` to the class list of `id` and write it back
    ///
    /// An element without a `class` attribute keeps having none while its
    /// list stays empty.
    fn update_classes<R>(
        &mut self,
        id: NodeId,
        update: impl FnOnce(&mut ClassList) -> R,
    ) -> DomResult<R> {
        let elem = self.element_mut(id)?;
        let mut list = elem.class_list();
        let result = update(&mut list);
        if elem.attrs.contains("class") || !list.is_empty() {
            elem.attrs.set("class", list.value());
        }
        Ok(result)
    }

    pub fn add_classes<'a>(
        &mut self,
        id: NodeId,
        classes: impl IntoIterator<Item = &'a str>,
    ) -> DomResult<()> {
        self.update_classes(id, |list| list.add(classes))
    }

    pub fn remove_classes<'a>(
        &mut self,
        id: NodeId,
        classes: impl IntoIterator<Item = &'a str>,
    ) -> DomResult<()> {
        self.update_classes(id, |list| list.remove(classes))
    }

    pub fn toggle_class(&mut self, id: NodeId, class: &str, force: Option<bool>) -> DomResult<bool> {
        if class.is_empty() {
            return Ok(false);
        }
        self.update_classes(id, |list| list.toggle(class, force))
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> DomResult<bool> {
        Ok(self.element(id)?.has_class(class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_attr_dedups() {
        let list = ClassList::from_attr(Some("btn  btn-primary btn"));
        assert_eq!(list.len(), 2);
        assert_eq!(list.value(), "btn btn-primary");
    }

    #[test]
    fn test_add_remove() {
        let mut list = ClassList::new();
        list.add(["foo", "bar", ""]);
        assert_eq!(list.len(), 2);

        list.remove(["foo"]);
        assert_eq!(list.len(), 1);
        assert!(!list.contains("foo"));
    }

    #[test]
    fn test_toggle() {
        let mut list = ClassList::new();

        assert!(list.toggle("active", None));
        assert!(list.contains("active"));

        assert!(!list.toggle("active", None));
        assert!(!list.contains("active"));

        assert!(!list.toggle("active", Some(false)));
        assert!(list.is_empty());
    }

    #[test]
    fn test_tree_remove_without_attribute_adds_nothing() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        tree.remove_classes(div, ["ghost"]).unwrap();
        assert!(!tree.has_attribute(div, "class").unwrap());

        tree.add_classes(div, ["a", "b"]).unwrap();
        tree.remove_classes(div, ["a", "b"]).unwrap();
        assert_eq!(tree.get_attribute(div, "class").unwrap(), Some(""));
    }
}
