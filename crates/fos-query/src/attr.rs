//! Attribute verbs

use crate::target::{Target, resolve_all, resolve_required};
use crate::{Page, Result};

/// Value of `name` on the first element, `None` when absent
pub fn get_attribute<'a>(
    page: &Page,
    target: impl Into<Target<'a>>,
    name: &str,
) -> Result<Option<String>> {
    let doc = page.document();
    let id = resolve_required(doc, target)?;
    Ok(doc.tree().get_attribute(id, name)?.map(str::to_string))
}

/// Set `name` on every element; `None` writes an empty value
pub fn set_attribute<'a>(
    page: &mut Page,
    target: impl Into<Target<'a>>,
    name: &str,
    value: Option<&str>,
) -> Result<()> {
    let value = value.unwrap_or_default();
    for id in resolve_all(page.document(), target)? {
        page.document_mut().tree_mut().set_attribute(id, name, value)?;
    }
    Ok(())
}

pub fn has_attribute<'a>(page: &Page, target: impl Into<Target<'a>>, name: &str) -> Result<bool> {
    let doc = page.document();
    let id = resolve_required(doc, target)?;
    Ok(doc.tree().has_attribute(id, name)?)
}

/// Remove `name` from every element; absent attributes are skipped
pub fn remove_attribute<'a>(
    page: &mut Page,
    target: impl Into<Target<'a>>,
    name: &str,
) -> Result<()> {
    for id in resolve_all(page.document(), target)? {
        page.document_mut().tree_mut().remove_attribute(id, name)?;
    }
    Ok(())
}

/// Flip presence of `name` on every element
///
/// With `force`, the attribute is added (`Some(true)`) or removed
/// (`Some(false)`) regardless of its current state.
pub fn toggle_attribute<'a>(
    page: &mut Page,
    target: impl Into<Target<'a>>,
    name: &str,
    force: Option<bool>,
) -> Result<()> {
    for id in resolve_all(page.document(), target)? {
        page.document_mut().tree_mut().toggle_attribute(id, name, force)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use fos_dom::DomError;

    fn page() -> Page {
        Page::from_html(r#"<button id="btn" data-x="1">Go</button><a></a><a></a>"#).unwrap()
    }

    #[test]
    fn test_set_has_remove() {
        let mut page = page();
        set_attribute(&mut page, "#btn", "disabled", Some("")).unwrap();
        assert!(has_attribute(&page, "#btn", "disabled").unwrap());
        assert_eq!(get_attribute(&page, "#btn", "disabled").unwrap(), Some(String::new()));

        remove_attribute(&mut page, "#btn", "disabled").unwrap();
        assert!(!has_attribute(&page, "#btn", "disabled").unwrap());
        remove_attribute(&mut page, "#btn", "disabled").unwrap();
        assert_eq!(get_attribute(&page, "#btn", "disabled").unwrap(), None);
    }

    #[test]
    fn test_set_without_value_and_on_many() {
        let mut page = page();
        set_attribute(&mut page, "a", "download", None).unwrap();
        for a in page.document().query_selector_all("a").unwrap() {
            assert_eq!(page.document().tree().get_attribute(a, "download").unwrap(), Some(""));
        }
        // No match: nothing to do
        set_attribute(&mut page, ".none", "x", Some("y")).unwrap();
    }

    #[test]
    fn test_toggle() {
        let mut page = page();
        toggle_attribute(&mut page, "#btn", "hidden", None).unwrap();
        assert!(has_attribute(&page, "#btn", "hidden").unwrap());
        toggle_attribute(&mut page, "#btn", "hidden", Some(true)).unwrap();
        assert!(has_attribute(&page, "#btn", "hidden").unwrap());
        toggle_attribute(&mut page, "#btn", "hidden", None).unwrap();
        assert!(!has_attribute(&page, "#btn", "hidden").unwrap());
    }

    #[test]
    fn test_failures() {
        let mut page = page();
        assert!(matches!(
            get_attribute(&page, "#missing", "id"),
            Err(Error::Resolution { .. })
        ));
        assert_eq!(
            set_attribute(&mut page, "#btn", "bad name", Some("v")),
            Err(Error::Host(DomError::InvalidName("bad name".to_string())))
        );
    }
}
