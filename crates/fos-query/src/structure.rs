//! Structural verbs: creating, inserting and removing nodes

use fos_dom::{DomError, NodeData, NodeId, validate_name};

use crate::target::{Target, resolve_all, resolve_required};
use crate::{Page, Result};

/// Create a detached `tag` element, optionally filled with parsed `markup`
pub fn create_element(page: &mut Page, tag: &str, markup: Option<&str>) -> Result<NodeId> {
    validate_name(tag)?;
    let parser = page.parser();
    let tree = page.document_mut().tree_mut();
    let id = tree.create_element(tag);
    if let Some(markup) = markup {
        parser.parse_fragment_into(tree, id, markup)?;
    }
    tracing::debug!("Created <{tag}> as {id}");
    Ok(id)
}

/// Append `node` as the last child of the first element, moving it if it
/// is already attached
pub fn append<'a>(page: &mut Page, target: impl Into<Target<'a>>, node: NodeId) -> Result<()> {
    let parent = resolve_required(page.document(), target)?;
    page.document_mut().tree_mut().append_child(parent, node)?;
    Ok(())
}

/// Remove every child of every element
pub fn remove_children<'a>(page: &mut Page, target: impl Into<Target<'a>>) -> Result<()> {
    for id in resolve_all(page.document(), target)? {
        let removed = page.document_mut().tree_mut().remove_children(id)?;
        tracing::debug!("Removed {removed} children of {id}");
    }
    Ok(())
}

/// Detach every element of the target in one pass
///
/// Each node is moved, in target order, out of its parent and into a new
/// detached fragment as a sibling of the others; a node nested inside
/// another removed node is pulled out of it too. The fragment is
/// returned, or `None` when the target is empty.
pub fn remove_elements<'a>(
    page: &mut Page,
    target: impl Into<Target<'a>>,
) -> Result<Option<NodeId>> {
    let nodes = resolve_all(page.document(), target)?;
    if nodes.is_empty() {
        return Ok(None);
    }
    let tree = page.document_mut().tree_mut();
    for &id in &nodes {
        if matches!(tree.node(id)?.data, NodeData::Document) {
            return Err(DomError::HierarchyRequest(format!("{id} is the document node")).into());
        }
    }
    let fragment = tree.create_fragment();
    let mut moved = 0;
    for &id in &nodes {
        if tree.parent(id) == Some(fragment) {
            continue;
        }
        tree.append_child(fragment, id)?;
        moved += 1;
    }
    tracing::debug!("Removed {moved} elements into {fragment}");
    Ok(Some(fragment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, get_html};

    #[test]
    fn test_create_detached_with_markup() {
        let mut page = Page::new("about:blank");
        let div = create_element(&mut page, "div", Some("<b>hi</b>")).unwrap();
        let tree = page.document().tree();
        assert_eq!(tree.inner_html(div).unwrap(), "<b>hi</b>");
        assert_eq!(tree.parent(div), None);
        assert!(!page.document().is_connected(div));

        append(&mut page, "body", div).unwrap();
        assert_eq!(get_html(&page, "body").unwrap(), "<div><b>hi</b></div>");
    }

    #[test]
    fn test_create_invalid_tag() {
        let mut page = Page::new("about:blank");
        assert_eq!(
            create_element(&mut page, "a b", None),
            Err(Error::Host(DomError::InvalidName("a b".to_string())))
        );
    }

    #[test]
    fn test_append_moves() {
        let mut page = Page::from_html("<ul id=a><li>x</li></ul><ul id=b></ul>").unwrap();
        let li = page.document().query_selector("li").unwrap().unwrap();
        append(&mut page, "#b", li).unwrap();
        assert_eq!(get_html(&page, "#a").unwrap(), "");
        assert_eq!(get_html(&page, "#b").unwrap(), "<li>x</li>");
    }

    #[test]
    fn test_append_cycle_rejected() {
        let mut page = Page::from_html("<div id=a><p id=b></p></div>").unwrap();
        let a = page.document().get_element_by_id("a").unwrap();
        let err = append(&mut page, "#b", a).unwrap_err();
        assert!(matches!(err, Error::Host(DomError::HierarchyRequest(_))));
    }

    #[test]
    fn test_remove_children() {
        let mut page = Page::from_html("<div id=a>text<i></i><!--c--></div>").unwrap();
        remove_children(&mut page, "#a").unwrap();
        assert_eq!(get_html(&page, "#a").unwrap(), "");
    }

    #[test]
    fn test_remove_children_of_every_match() {
        let mut page =
            Page::from_html("<div class=box><i>1</i></div><div class=box><i>2</i></div>").unwrap();
        remove_children(&mut page, ".box").unwrap();
        for id in page.document().query_selector_all(".box").unwrap() {
            assert_eq!(page.document().tree().inner_html(id).unwrap(), "");
        }
        assert!(page.document().query_selector("i").unwrap().is_none());
    }

    #[test]
    fn test_remove_children_no_match() {
        let mut page = Page::from_html("<div id=a><i></i></div>").unwrap();
        remove_children(&mut page, ".none").unwrap();
        assert_eq!(get_html(&page, "#a").unwrap(), "<i></i>");
    }

    #[test]
    fn test_remove_nested_elements() {
        let mut page = Page::from_html("<div class=x><p class=x></p></div>").unwrap();
        let fragment = remove_elements(&mut page, ".x").unwrap().unwrap();
        assert!(page.document().query_selector(".x").unwrap().is_none());
        let tree = page.document().tree();
        assert_eq!(
            tree.inner_html(fragment).unwrap(),
            r#"<div class="x"></div><p class="x"></p>"#
        );
    }

    #[test]
    fn test_remove_document_node_rejected() {
        let mut page = Page::from_html("<p id=a></p>").unwrap();
        let a = page.document().get_element_by_id("a").unwrap();
        let nodes_before = page.document().tree().len();

        let err = remove_elements(&mut page, &[a, NodeId::ROOT]).unwrap_err();
        assert!(matches!(err, Error::Host(DomError::HierarchyRequest(_))));
        assert_eq!(page.document().tree().len(), nodes_before);
        assert!(page.document().is_connected(a));
    }

    #[test]
    fn test_remove_nothing() {
        let mut page = Page::new("about:blank");
        assert_eq!(remove_elements(&mut page, ".none").unwrap(), None);
    }
}
