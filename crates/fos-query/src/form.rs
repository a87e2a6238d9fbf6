//! Value and checked verbs for form controls

use crate::target::{Target, resolve_all, resolve_required};
use crate::{Page, Result};

/// Current value of the first element
pub fn get_value<'a>(page: &Page, target: impl Into<Target<'a>>) -> Result<String> {
    let doc = page.document();
    let id = resolve_required(doc, target)?;
    Ok(doc.tree().value(id)?)
}

pub fn set_value<'a>(page: &mut Page, target: impl Into<Target<'a>>, value: &str) -> Result<()> {
    for id in resolve_all(page.document(), target)? {
        page.document_mut().tree_mut().set_value(id, value)?;
    }
    Ok(())
}

/// Checkedness of the first element (selectedness for `<option>`)
pub fn get_checked<'a>(page: &Page, target: impl Into<Target<'a>>) -> Result<bool> {
    let doc = page.document();
    let id = resolve_required(doc, target)?;
    Ok(doc.tree().checked(id)?)
}

pub fn set_checked<'a>(page: &mut Page, target: impl Into<Target<'a>>, checked: bool) -> Result<()> {
    for id in resolve_all(page.document(), target)? {
        page.document_mut().tree_mut().set_checked(id, checked)?;
    }
    Ok(())
}

/// Flip checkedness of each element independently
pub fn toggle_checked<'a>(page: &mut Page, target: impl Into<Target<'a>>) -> Result<()> {
    for id in resolve_all(page.document(), target)? {
        let tree = page.document_mut().tree_mut();
        let checked = tree.checked(id)?;
        tree.set_checked(id, !checked)?;
    }
    Ok(())
}
