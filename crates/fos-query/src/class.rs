//! Class verbs
//!
//! Class lists are whitespace separated; every verb that takes names
//! accepts several at once.

use crate::target::{Target, resolve_all, resolve_required};
use crate::{Page, Result};

/// Add each whitespace-separated class to every element
pub fn add_class<'a>(page: &mut Page, target: impl Into<Target<'a>>, names: &str) -> Result<()> {
    for id in resolve_all(page.document(), target)? {
        page.document_mut()
            .tree_mut()
            .add_classes(id, names.split_ascii_whitespace())?;
    }
    Ok(())
}

/// Remove each whitespace-separated class from every element
pub fn remove_class<'a>(
    page: &mut Page,
    target: impl Into<Target<'a>>,
    names: &str,
) -> Result<()> {
    for id in resolve_all(page.document(), target)? {
        page.document_mut()
            .tree_mut()
            .remove_classes(id, names.split_ascii_whitespace())?;
    }
    Ok(())
}

/// Flip each class on every element, or force it on/off
pub fn toggle_class<'a>(
    page: &mut Page,
    target: impl Into<Target<'a>>,
    names: &str,
    force: Option<bool>,
) -> Result<()> {
    for id in resolve_all(page.document(), target)? {
        let tree = page.document_mut().tree_mut();
        for name in names.split_ascii_whitespace() {
            tree.toggle_class(id, name, force)?;
        }
    }
    Ok(())
}

/// Whether the first element carries `name`
pub fn has_class<'a>(page: &Page, target: impl Into<Target<'a>>, name: &str) -> Result<bool> {
    let doc = page.document();
    let id = resolve_required(doc, target)?;
    Ok(doc.tree().has_class(id, name)?)
}

/// Full `class` string of the first element
pub fn get_class_name<'a>(page: &Page, target: impl Into<Target<'a>>) -> Result<String> {
    let doc = page.document();
    let id = resolve_required(doc, target)?;
    Ok(doc
        .tree()
        .get_attribute(id, "class")?
        .unwrap_or_default()
        .to_string())
}

/// Replace the whole `class` string on every element
pub fn set_class_name<'a>(
    page: &mut Page,
    target: impl Into<Target<'a>>,
    class_name: &str,
) -> Result<()> {
    for id in resolve_all(page.document(), target)? {
        page.document_mut()
            .tree_mut()
            .set_attribute(id, "class", class_name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Page {
        Page::from_html(r#"<p id="a" class="x"></p><p id="b"></p>"#).unwrap()
    }

    #[test]
    fn test_add_and_remove_lists() {
        let mut page = page();
        add_class(&mut page, "p", "  one two\tx ").unwrap();
        assert_eq!(get_class_name(&page, "#a").unwrap(), "x one two");
        assert_eq!(get_class_name(&page, "#b").unwrap(), "one two x");

        remove_class(&mut page, "p", "one x").unwrap();
        assert_eq!(get_class_name(&page, "#a").unwrap(), "two");
        assert!(!has_class(&page, "#b", "x").unwrap());
    }

    #[test]
    fn test_empty_names_are_no_op() {
        let mut page = page();
        add_class(&mut page, "#b", "").unwrap();
        toggle_class(&mut page, "#b", "   ", None).unwrap();
        let b = page.document().get_element_by_id("b").unwrap();
        assert!(!page.document().tree().has_attribute(b, "class").unwrap());
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut page = page();
        toggle_class(&mut page, "#a", "x", None).unwrap();
        assert!(!has_class(&page, "#a", "x").unwrap());
        toggle_class(&mut page, "#a", "x", None).unwrap();
        assert!(has_class(&page, "#a", "x").unwrap());

        toggle_class(&mut page, "#a", "x", Some(true)).unwrap();
        assert!(has_class(&page, "#a", "x").unwrap());
    }

    #[test]
    fn test_set_class_name() {
        let mut page = page();
        set_class_name(&mut page, "p", "a b").unwrap();
        assert!(has_class(&page, "#a", "b").unwrap());
        assert!(!has_class(&page, "#a", "x").unwrap());
        set_class_name(&mut page, "#a", "").unwrap();
        assert_eq!(get_class_name(&page, "#a").unwrap(), "");
    }
}
