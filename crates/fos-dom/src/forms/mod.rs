//! Form control state
//!
//! `value` and `checked` of input, textarea, select and option elements.
//! A control starts "clean" and reflects its attributes; writing through
//! these APIs makes it dirty, after which attribute changes no longer show.

mod input;

pub use input::InputType;

use crate::{DomResult, DomTree, NodeId};

/// Dirty value / checkedness of a control
///
/// For `<option>` elements `checked` holds the selectedness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub value: Option<String>,
    pub checked: Option<bool>,
}

impl DomTree {
    /// Current value of a control
    pub fn value(&self, id: NodeId) -> DomResult<String> {
        let elem = self.element(id)?;
        let attr = || elem.attrs.get("value").map(str::to_string);
        let value = match elem.tag.as_str() {
            "input" => {
                let kind = elem.input_type().unwrap_or_default();
                if kind.is_checkable() {
                    attr().unwrap_or_else(|| "on".to_string())
                } else if kind.value_is_attribute() {
                    attr().unwrap_or_default()
                } else {
                    elem.form.value.clone().or_else(attr).unwrap_or_default()
                }
            }
            "textarea" => match &elem.form.value {
                Some(value) => value.clone(),
                None => self.text_content(id)?,
            },
            "select" => match self.selected_option(id) {
                Some(option) => self.value(option)?,
                None => String::new(),
            },
            "option" => match attr() {
                Some(value) => value,
                None => collapse_whitespace(&self.text_content(id)?),
            },
            "button" => attr().unwrap_or_default(),
            _ => elem.form.value.clone().or_else(attr).unwrap_or_default(),
        };
        Ok(value)
    }

    /// Set the value of a control
    pub fn set_value(&mut self, id: NodeId, value: &str) -> DomResult<()> {
        let (tag, reflects_attr) = {
            let elem = self.element(id)?;
            let reflects = elem.input_type().is_some_and(InputType::value_is_attribute);
            (elem.tag.clone(), reflects)
        };
        match tag.as_str() {
            "input" if reflects_attr => {
                self.element_mut(id)?.attrs.set("value", value);
            }
            "option" | "button" => {
                self.element_mut(id)?.attrs.set("value", value);
            }
            "select" => {
                let mut matched = false;
                for option in self.options(id) {
                    let selected = !matched && self.value(option)? == value;
                    matched |= selected;
                    self.element_mut(option)?.form.checked = Some(selected);
                }
            }
            _ => self.element_mut(id)?.form.value = Some(value.to_string()),
        }
        Ok(())
    }

    /// Checkedness (selectedness for options)
    pub fn checked(&self, id: NodeId) -> DomResult<bool> {
        let elem = self.element(id)?;
        let default_attr = if elem.tag == "option" { "selected" } else { "checked" };
        Ok(elem
            .form
            .checked
            .unwrap_or_else(|| elem.attrs.contains(default_attr)))
    }

    /// Set checkedness; checking a radio unchecks the rest of its group
    pub fn set_checked(&mut self, id: NodeId, checked: bool) -> DomResult<()> {
        self.element_mut(id)?.form.checked = Some(checked);
        if checked {
            for other in self.radio_group(id)? {
                self.element_mut(other)?.form.checked = Some(false);
            }
        }
        Ok(())
    }

    /// Other radios sharing `id`'s name within the same tree
    pub fn radio_group(&self, id: NodeId) -> DomResult<Vec<NodeId>> {
        let elem = self.element(id)?;
        if elem.input_type() != Some(InputType::Radio) {
            return Ok(Vec::new());
        }
        let Some(name) = elem.attrs.get("name").filter(|n| !n.is_empty()) else {
            return Ok(Vec::new());
        };
        let root = self.tree_root(id);
        Ok(self
            .descendants(root)
            .into_iter()
            .filter(|&other| other != id)
            .filter(|&other| {
                self.element(other).is_ok_and(|e| {
                    e.input_type() == Some(InputType::Radio) && e.attrs.get("name") == Some(name)
                })
            })
            .collect())
    }

    fn options(&self, select: NodeId) -> Vec<NodeId> {
        self.descendants(select)
            .into_iter()
            .filter(|&d| self.element(d).is_ok_and(|e| e.tag == "option"))
            .collect()
    }

    /// Selected option of a `<select>`: the last selected one for single
    /// selects, the first for `multiple`. A single select nobody has
    /// written to yet falls back to its first enabled option.
    pub fn selected_option(&self, select: NodeId) -> Option<NodeId> {
        let options = self.options(select);
        let multiple = self
            .element(select)
            .is_ok_and(|e| e.attrs.contains("multiple"));
        let mut selected = options
            .iter()
            .copied()
            .filter(|&o| self.checked(o).unwrap_or(false));
        let picked = if multiple { selected.next() } else { selected.last() };
        picked.or_else(|| {
            let dirty = options
                .iter()
                .any(|&o| self.element(o).is_ok_and(|e| e.form.checked.is_some()));
            if multiple || dirty {
                return None;
            }
            options
                .iter()
                .copied()
                .find(|&o| !self.element(o).is_ok_and(|e| e.attrs.contains("disabled")))
        })
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_ascii_whitespace().collect::<Vec<_>>().join(" ")
}
