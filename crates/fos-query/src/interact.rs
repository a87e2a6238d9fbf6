//! Focus, click and identity verbs

use fos_dom::NodeId;

use crate::target::{Target, resolve, resolve_required};
use crate::{Page, Result};

/// Focus the first element; returns whether it holds focus afterwards
///
/// Elements that cannot take focus are left alone.
pub fn focus<'a>(page: &mut Page, target: impl Into<Target<'a>>) -> Result<bool> {
    let id = resolve_required(page.document(), target)?;
    Ok(page.document_mut().focus(id)?)
}

pub fn blur<'a>(page: &mut Page, target: impl Into<Target<'a>>) -> Result<()> {
    let id = resolve_required(page.document(), target)?;
    Ok(page.document_mut().blur(id)?)
}

/// Click the first element, with checkbox/radio activation
///
/// Returns `false` when a listener prevented the default action or the
/// control is disabled.
pub fn click<'a>(page: &mut Page, target: impl Into<Target<'a>>) -> Result<bool> {
    let id = resolve_required(page.document(), target)?;
    Ok(page.document_mut().click(id)?)
}

/// Whether `node` is exactly the element the target resolves to
pub fn is_element<'a>(page: &Page, target: impl Into<Target<'a>>, node: NodeId) -> Result<bool> {
    Ok(node.is_valid() && resolve(page.document(), target)? == Some(node))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Listener, ListenerOptions, add_listener, get_checked};

    fn page() -> Page {
        Page::from_html(
            r#"<input id="a"><input id="b"><div id="plain"></div>
               <input type="checkbox" id="cb">"#,
        )
        .unwrap()
    }

    #[test]
    fn test_focus_moves() {
        let mut page = page();
        assert!(focus(&mut page, "#a").unwrap());
        assert!(focus(&mut page, "#b").unwrap());
        let b = page.document().get_element_by_id("b");
        assert_eq!(page.document().active_element(), b);

        assert!(!focus(&mut page, "#plain").unwrap());
        assert_eq!(page.document().active_element(), b);

        blur(&mut page, "#b").unwrap();
        assert_eq!(page.document().active_element(), page.document().body());
    }

    #[test]
    fn test_click_toggles_checkbox() {
        let mut page = page();
        assert!(click(&mut page, "#cb").unwrap());
        assert!(get_checked(&page, "#cb").unwrap());

        let cancel = Listener::new(|event| event.prevent_default());
        add_listener(&mut page, "#cb", "click", &cancel, ListenerOptions::default()).unwrap();
        assert!(!click(&mut page, "#cb").unwrap());
        assert!(get_checked(&page, "#cb").unwrap());
    }

    #[test]
    fn test_is_element() {
        let page = page();
        let a = page.document().get_element_by_id("a").unwrap();
        let b = page.document().get_element_by_id("b").unwrap();
        assert!(is_element(&page, "#a", a).unwrap());
        assert!(is_element(&page, "input", a).unwrap());
        assert!(!is_element(&page, "#a", b).unwrap());
        assert!(!is_element(&page, "#missing", NodeId::NONE).unwrap());
    }
}
