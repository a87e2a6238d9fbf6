//! Text and markup verbs

use crate::target::{Target, resolve_all, resolve_required};
use crate::{Page, Result};

/// Text content of the first element
pub fn get_text<'a>(page: &Page, target: impl Into<Target<'a>>) -> Result<String> {
    let doc = page.document();
    let id = resolve_required(doc, target)?;
    Ok(doc.tree().text_content(id)?)
}

/// Replace the children of every element with `text`
pub fn set_text<'a>(page: &mut Page, target: impl Into<Target<'a>>, text: &str) -> Result<()> {
    for id in resolve_all(page.document(), target)? {
        page.document_mut().tree_mut().set_text_content(id, text)?;
    }
    Ok(())
}

/// Serialized children of the first element
pub fn get_html<'a>(page: &Page, target: impl Into<Target<'a>>) -> Result<String> {
    let doc = page.document();
    let id = resolve_required(doc, target)?;
    Ok(doc.tree().inner_html(id)?)
}

/// Replace the children of every element with parsed `markup`
pub fn set_html<'a>(page: &mut Page, target: impl Into<Target<'a>>, markup: &str) -> Result<()> {
    let parser = page.parser();
    for id in resolve_all(page.document(), target)? {
        let tree = page.document_mut().tree_mut();
        tree.element(id)?;
        tree.remove_children(id)?;
        parser.parse_fragment_into(tree, id, markup)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text() {
        let mut page = Page::from_html("<p id=a>Hello <b>there</b></p><p></p>").unwrap();
        assert_eq!(get_text(&page, "#a").unwrap(), "Hello there");

        set_text(&mut page, "p", "<plain> & text").unwrap();
        assert_eq!(get_text(&page, "p:last-child").unwrap(), "<plain> & text");
        assert_eq!(get_html(&page, "#a").unwrap(), "&lt;plain&gt; &amp; text");
    }

    #[test]
    fn test_html() {
        let mut page = Page::from_html("<div id=a><span>old</span></div>").unwrap();
        set_html(&mut page, "#a", "<i>new</i> text").unwrap();
        assert_eq!(get_html(&page, "#a").unwrap(), "<i>new</i> text");
        assert!(page.document().query_selector("span").unwrap().is_none());
        assert!(page.document().query_selector("#a > i").unwrap().is_some());
    }
}
