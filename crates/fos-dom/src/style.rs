//! Inline Style Declarations
//!
//! Parsed view over the `style` attribute, read and validated with
//! lightningcss. Property names are accepted in camelCase
//! (`backgroundColor`), kebab-case (`background-color`) or as custom
//! properties (`--accent`).

use lightningcss::properties::Property;
use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleAttribute};

use crate::{DomError, DomResult, DomTree, NodeId};

/// One `name: value` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub value: String,
    pub important: bool,
}

/// Ordered inline declarations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDeclaration {
    declarations: Vec<Declaration>,
}

impl StyleDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `style` attribute value. Invalid declarations are skipped.
    pub fn parse(css: &str) -> Self {
        let mut style = Self::new();
        let options = ParserOptions {
            error_recovery: true,
            ..ParserOptions::default()
        };
        let attr = match StyleAttribute::parse(css, options) {
            Ok(attr) => attr,
            Err(e) => {
                tracing::debug!("Unparsable style attribute {css:?}: {e:?}");
                return style;
            }
        };
        let block = &attr.declarations;
        let normal = block.declarations.iter().map(|p| (p, false));
        let important = block.important_declarations.iter().map(|p| (p, true));
        for (property, important) in normal.chain(important) {
            if let Some(decl) = convert_property(property, important) {
                style.set(&decl.name, &decl.value, decl.important);
            }
        }
        style
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Value of a normalized property, empty when unset
    pub fn get(&self, name: &str) -> &str {
        self.declarations
            .iter()
            .find(|d| d.name == name)
            .map_or("", |d| d.value.as_str())
    }

    pub fn is_important(&self, name: &str) -> bool {
        self.declarations
            .iter()
            .any(|d| d.name == name && d.important)
    }

    /// Set a normalized property without validation; an empty value
    /// removes it
    pub fn set(&mut self, name: &str, value: &str, important: bool) {
        let value = value.trim();
        if value.is_empty() {
            self.remove(name);
            return;
        }
        match self.declarations.iter_mut().find(|d| d.name == name) {
            Some(decl) => {
                decl.value = value.to_string();
                decl.important = important;
            }
            None => self.declarations.push(Declaration {
                name: name.to_string(),
                value: value.to_string(),
                important,
            }),
        }
    }

    /// Remove a property, returning its old value
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let pos = self.declarations.iter().position(|d| d.name == name)?;
        Some(self.declarations.remove(pos).value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter()
    }

    /// Serialized `style` attribute text
    pub fn css_text(&self) -> String {
        let parts: Vec<String> = self
            .declarations
            .iter()
            .map(|d| {
                if d.important {
                    format!("{}: {} !important;", d.name, d.value)
                } else {
                    format!("{}: {};", d.name, d.value)
                }
            })
            .collect();
        parts.join(" ")
    }
}

/// Parse `value` as the single value of the normalized property `name`
///
/// Returns `None` when lightningcss rejects the declaration or the value
/// spills into further declarations. The stored value is lightningcss's
/// serialization.
pub fn parse_declaration(name: &str, value: &str, important: bool) -> Option<Declaration> {
    let priority = if important { " !important" } else { "" };
    let css = format!("{name}: {value}{priority}");
    let attr = StyleAttribute::parse(&css, ParserOptions::default()).ok()?;
    let block = &attr.declarations;
    let (property, important) = match (&block.declarations[..], &block.important_declarations[..]) {
        ([property], []) => (property, false),
        ([], [property]) => (property, true),
        _ => return None,
    };
    let decl = convert_property(property, important)?;
    Some(Declaration {
        name: name.to_string(),
        ..decl
    })
}

/// Split a lightningcss property into name and serialized value
fn convert_property(property: &Property, important: bool) -> Option<Declaration> {
    let text = property
        .to_css_string(false, PrinterOptions::default())
        .ok()?;
    let (name, value) = text.split_once(':')?;
    Some(Declaration {
        name: name.trim().to_string(),
        value: value.trim().to_string(),
        important,
    })
}

/// Normalize a property name to its kebab-case form
///
/// Custom properties keep their case; `cssFloat` maps to `float`.
pub fn normalize_property(name: &str) -> DomResult<String> {
    let invalid = || DomError::InvalidProperty(name.to_string());

    if let Some(custom) = name.strip_prefix("--") {
        let ok = !custom.is_empty()
            && !custom
                .chars()
                .any(|c| c.is_whitespace() || matches!(c, ';' | ':' | '{' | '}' | '!'));
        return if ok { Ok(name.to_string()) } else { Err(invalid()) };
    }

    if name == "cssFloat" {
        return Ok("float".to_string());
    }

    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        match c {
            'A'..='Z' => {
                if i > 0 {
                    out.push('-');
                }
                out.push(c.to_ascii_lowercase());
            }
            'a'..='z' | '-' => out.push(c),
            '0'..='9' if i > 0 => out.push(c),
            _ => return Err(invalid()),
        }
    }
    let starts_ok = out
        .trim_start_matches('-')
        .starts_with(|c: char| c.is_ascii_lowercase());
    if !starts_ok || out.ends_with('-') || out.contains("--") {
        return Err(invalid());
    }
    Ok(out)
}


impl DomTree {
    /// Parsed inline style of an element
    pub fn style(&self, id: NodeId) -> DomResult<StyleDeclaration> {
        let elem = self.element(id)?;
        Ok(elem.attrs.get("style").map(StyleDeclaration::parse).unwrap_or_default())
    }

    /// Read an inline property (camelCase, kebab-case or custom)
    pub fn get_style_property(&self, id: NodeId, name: &str) -> DomResult<String> {
        let name = normalize_property(name)?;
        Ok(self.style(id)?.get(&name).to_string())
    }

    /// Write an inline property; empty value removes it
    ///
    /// Values lightningcss rejects, or that would break out of the
    /// declaration, are ignored the way the platform drops unparsable
    /// values. Returns whether it was applied.
    pub fn set_style_property(
        &mut self,
        id: NodeId,
        name: &str,
        value: &str,
        important: bool,
    ) -> DomResult<bool> {
        let name = normalize_property(name)?;
        let mut style = self.style(id)?;
        if value.trim().is_empty() {
            style.remove(&name);
        } else {
            let Some(decl) = parse_declaration(&name, value, important) else {
                return Ok(false);
            };
            style.set(&decl.name, &decl.value, decl.important);
        }
        self.write_style(id, &style)?;
        Ok(true)
    }

    pub fn remove_style_property(&mut self, id: NodeId, name: &str) -> DomResult<Option<String>> {
        let name = normalize_property(name)?;
        let mut style = self.style(id)?;
        let old = style.remove(&name);
        if old.is_some() {
            self.write_style(id, &style)?;
        }
        Ok(old)
    }

    fn write_style(&mut self, id: NodeId, style: &StyleDeclaration) -> DomResult<()> {
        let elem = self.element_mut(id)?;
        if elem.attrs.contains("style") || !style.is_empty() {
            elem.attrs.set("style", style.css_text());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_property() {
        assert_eq!(normalize_property("backgroundColor").unwrap(), "background-color");
        assert_eq!(normalize_property("background-color").unwrap(), "background-color");
        assert_eq!(normalize_property("--Accent").unwrap(), "--Accent");
        assert_eq!(normalize_property("cssFloat").unwrap(), "float");
        assert_eq!(normalize_property("-webkit-box-flex").unwrap(), "-webkit-box-flex");
        assert!(normalize_property("").is_err());
        assert!(normalize_property("color;").is_err());
        assert!(normalize_property("1color").is_err());
        assert!(normalize_property("--").is_err());
    }

    #[test]
    fn test_parse_and_serialize() {
        let style =
            StyleDeclaration::parse(r#"display: block; --sep: "a;b"; margin-top: 4px !important"#);
        assert_eq!(style.len(), 3);
        assert_eq!(style.get("--sep"), r#""a;b""#);
        assert!(style.is_important("margin-top"));
        assert!(!style.is_important("display"));
        assert_eq!(
            style.css_text(),
            r#"display: block; --sep: "a;b"; margin-top: 4px !important;"#
        );
    }

    #[test]
    fn test_parse_skips_garbage() {
        let style = StyleDeclaration::parse(";;display block; height: 2px");
        assert_eq!(style.len(), 1);
        assert_eq!(style.get("height"), "2px");
    }

    #[test]
    fn test_set_empty_removes() {
        let mut style = StyleDeclaration::parse("display: none");
        style.set("display", "", false);
        assert!(style.is_empty());
    }

    #[test]
    fn test_parse_declaration() {
        let decl = parse_declaration("width", "10px", false).unwrap();
        assert_eq!((decl.name.as_str(), decl.value.as_str()), ("width", "10px"));
        assert!(parse_declaration("width", "10px !important", false).unwrap().important);
        assert!(parse_declaration("width", "10px; display: none", false).is_none());
        assert!(parse_declaration("width", "10px }", false).is_none());
    }

    #[test]
    fn test_tree_style_roundtrip() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        assert!(tree.set_style_property(div, "fontSize", "12px", false).unwrap());
        assert_eq!(tree.get_attribute(div, "style").unwrap(), Some("font-size: 12px;"));
        assert_eq!(tree.get_style_property(div, "font-size").unwrap(), "12px");

        assert!(!tree.set_style_property(div, "width", "1px; display: none", false).unwrap());
        assert_eq!(tree.get_style_property(div, "display").unwrap(), "");
        assert_eq!(tree.get_style_property(div, "width").unwrap(), "");

        assert!(tree.set_style_property(div, "fontSize", "", false).unwrap());
        assert_eq!(tree.get_attribute(div, "style").unwrap(), Some(""));
    }
}
