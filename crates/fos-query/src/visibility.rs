//! Visibility verbs
//!
//! An element is hidden while it carries the page's hidden marker
//! attribute (`Config::hidden_attribute`, `hidden` by default). Only that
//! attribute is consulted: ancestors and styles do not count.

use crate::target::{Target, resolve_all, resolve_required};
use crate::{Page, Result};

/// Remove the hidden marker from every element
pub fn show<'a>(page: &mut Page, target: impl Into<Target<'a>>) -> Result<()> {
    set_hidden(page, target.into(), Some(false))
}

/// Add the hidden marker to every element
pub fn hide<'a>(page: &mut Page, target: impl Into<Target<'a>>) -> Result<()> {
    set_hidden(page, target.into(), Some(true))
}

/// Flip visibility of each element independently
pub fn toggle<'a>(page: &mut Page, target: impl Into<Target<'a>>) -> Result<()> {
    set_hidden(page, target.into(), None)
}

/// Whether the first element lacks the hidden marker
pub fn is_visible<'a>(page: &Page, target: impl Into<Target<'a>>) -> Result<bool> {
    let doc = page.document();
    let id = resolve_required(doc, target)?;
    Ok(!doc.tree().has_attribute(id, &page.config().hidden_attribute)?)
}

/// Show `target` when `condition` holds, hide it otherwise
///
/// A `placeholder` is put in the opposite state, so exactly one of the
/// two is visible afterwards.
pub fn show_if<'a>(
    page: &mut Page,
    target: impl Into<Target<'a>>,
    condition: bool,
    placeholder: Option<Target<'_>>,
) -> Result<()> {
    set_hidden(page, target.into(), Some(!condition))?;
    if let Some(placeholder) = placeholder {
        set_hidden(page, placeholder, Some(condition))?;
    }
    Ok(())
}

/// Hide `target` when `condition` holds, show it otherwise
pub fn hide_if<'a>(
    page: &mut Page,
    target: impl Into<Target<'a>>,
    condition: bool,
    placeholder: Option<Target<'_>>,
) -> Result<()> {
    show_if(page, target, !condition, placeholder)
}

/// `Some(hidden)` forces the state, `None` flips it per element
fn set_hidden(page: &mut Page, target: Target<'_>, hidden: Option<bool>) -> Result<()> {
    let attr = page.config().hidden_attribute.clone();
    for id in resolve_all(page.document(), target)? {
        page.document_mut().tree_mut().toggle_attribute(id, &attr, hidden)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    fn page() -> Page {
        Page::from_html(r#"<div id="a"></div><div id="b" hidden></div>"#).unwrap()
    }

    #[test]
    fn test_show_hide_idempotent() {
        let mut page = page();
        hide(&mut page, "#a").unwrap();
        hide(&mut page, "#a").unwrap();
        assert!(!is_visible(&page, "#a").unwrap());
        show(&mut page, "div").unwrap();
        show(&mut page, "div").unwrap();
        assert!(is_visible(&page, "#a").unwrap());
        assert!(is_visible(&page, "#b").unwrap());
    }

    #[test]
    fn test_toggle_each() {
        let mut page = page();
        toggle(&mut page, "div").unwrap();
        assert!(!is_visible(&page, "#a").unwrap());
        assert!(is_visible(&page, "#b").unwrap());
    }

    #[test]
    fn test_show_if_with_placeholder() {
        let mut page = page();
        show_if(&mut page, "#a", true, Some("#b".into())).unwrap();
        assert!(is_visible(&page, "#a").unwrap());
        assert!(!is_visible(&page, "#b").unwrap());

        show_if(&mut page, "#a", false, Some("#b".into())).unwrap();
        assert!(!is_visible(&page, "#a").unwrap());
        assert!(is_visible(&page, "#b").unwrap());

        hide_if(&mut page, "#a", false, None).unwrap();
        assert!(is_visible(&page, "#a").unwrap());
    }

    #[test]
    fn test_custom_marker() {
        let config = Config::default().with_hidden_attribute("data-hidden");
        let mut page = Page::from_html_with_config("<p hidden></p>", config).unwrap();
        assert!(is_visible(&page, "p").unwrap());
        hide(&mut page, "p").unwrap();
        assert!(page.document().query_selector("p[data-hidden]").unwrap().is_some());
    }
}
