//! Inline style verbs
//!
//! Property names may be camelCase (`backgroundColor`), kebab-case
//! (`background-color`) or custom (`--accent`). Only the `style` attribute
//! is consulted; nothing here computes cascaded styles.

use crate::target::{Target, resolve_all, resolve_required};
use crate::{Page, Result};

/// Inline value of `property` on the first element, empty when unset
pub fn get_style<'a>(page: &Page, target: impl Into<Target<'a>>, property: &str) -> Result<String> {
    let doc = page.document();
    let id = resolve_required(doc, target)?;
    Ok(doc.tree().get_style_property(id, property)?)
}

/// Set `property` on every element; an empty value removes it
pub fn set_style<'a>(
    page: &mut Page,
    target: impl Into<Target<'a>>,
    property: &str,
    value: &str,
) -> Result<()> {
    set_style_property(page, target, property, value, false)
}

/// Set a property with an explicit priority on every element
///
/// Custom properties (`--name`) are stored verbatim. Values lightningcss
/// rejects, or that would escape their declaration, are dropped.
pub fn set_style_property<'a>(
    page: &mut Page,
    target: impl Into<Target<'a>>,
    property: &str,
    value: &str,
    important: bool,
) -> Result<()> {
    for id in resolve_all(page.document(), target)? {
        let applied = page
            .document_mut()
            .tree_mut()
            .set_style_property(id, property, value, important)?;
        if !applied {
            tracing::debug!("Ignored value for {property} on {id}: {value:?}");
        }
    }
    Ok(())
}

/// Remove `property` from every element
pub fn remove_style_property<'a>(
    page: &mut Page,
    target: impl Into<Target<'a>>,
    property: &str,
) -> Result<()> {
    for id in resolve_all(page.document(), target)? {
        page.document_mut().tree_mut().remove_style_property(id, property)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, get_attribute};
    use fos_dom::DomError;

    fn page() -> Page {
        Page::from_html(r#"<div id="box" style="display: block; margin-top: 4px"></div><div></div>"#)
            .unwrap()
    }

    #[test]
    fn test_get_either_case() {
        let page = page();
        assert_eq!(get_style(&page, "#box", "display").unwrap(), "block");
        assert_eq!(get_style(&page, "#box", "marginTop").unwrap(), "4px");
        assert_eq!(get_style(&page, "#box", "margin-top").unwrap(), "4px");
        assert_eq!(get_style(&page, "#box", "width").unwrap(), "");
    }

    #[test]
    fn test_set_and_clear() {
        let mut page = page();
        set_style(&mut page, "div", "minWidth", "10px").unwrap();
        set_style(&mut page, "#box", "display", "").unwrap();
        assert_eq!(
            get_attribute(&page, "#box", "style").unwrap().as_deref(),
            Some("margin-top: 4px; min-width: 10px;")
        );
        assert_eq!(get_style(&page, "div:last-child", "min-width").unwrap(), "10px");
    }

    #[test]
    fn test_custom_property_and_priority() {
        let mut page = page();
        set_style_property(&mut page, "#box", "--Gap", "12px", true).unwrap();
        assert_eq!(get_style(&page, "#box", "--Gap").unwrap(), "12px");
        assert!(
            get_attribute(&page, "#box", "style")
                .unwrap()
                .is_some_and(|s| s.contains("--Gap: 12px !important;"))
        );
        remove_style_property(&mut page, "#box", "--Gap").unwrap();
        assert_eq!(get_style(&page, "#box", "--Gap").unwrap(), "");
    }

    #[test]
    fn test_unsafe_value_ignored() {
        let mut page = page();
        set_style(&mut page, "#box", "display", "none; width: 0px").unwrap();
        assert_eq!(get_style(&page, "#box", "display").unwrap(), "block");
        assert_eq!(get_style(&page, "#box", "width").unwrap(), "");
    }

    #[test]
    fn test_invalid_property() {
        let mut page = page();
        let err = set_style(&mut page, "#box", "1abc", "x").unwrap_err();
        assert!(matches!(err, Error::Host(DomError::InvalidProperty(_))));
    }
}
