//! Listener verbs
//!
//! Listeners are matched by reference. `remove_listener` only detaches a
//! registration made with the same [`Listener`] value (or a clone of it);
//! building an identical closure again does not match. This module keeps
//! no record of registrations, so callers hold on to their listeners.

use fos_dom::{Event, Listener, ListenerOptions};

use crate::target::{Target, resolve_all};
use crate::{Page, Result};

/// Register `listener` for `event_type` on every element
///
/// Coexists with other listeners and with the handler set by
/// [`set_listener`]. A second registration of the same listener with the
/// same capture flag is ignored.
pub fn add_listener<'a>(
    page: &mut Page,
    target: impl Into<Target<'a>>,
    event_type: &str,
    listener: &Listener,
    options: ListenerOptions,
) -> Result<()> {
    for id in resolve_all(page.document(), target)? {
        page.document_mut()
            .add_event_listener(id, event_type, listener.clone(), options)?;
    }
    Ok(())
}

/// Detach `listener` from every element
pub fn remove_listener<'a>(
    page: &mut Page,
    target: impl Into<Target<'a>>,
    event_type: &str,
    listener: &Listener,
    options: ListenerOptions,
) -> Result<()> {
    for id in resolve_all(page.document(), target)? {
        page.document_mut()
            .remove_event_listener(id, event_type, listener, options)?;
    }
    Ok(())
}

/// Assign the `on<event_type>` handler of every element, replacing any
/// previous handler
pub fn set_listener<'a>(
    page: &mut Page,
    target: impl Into<Target<'a>>,
    event_type: &str,
    listener: &Listener,
) -> Result<()> {
    for id in resolve_all(page.document(), target)? {
        page.document_mut()
            .set_event_handler(id, event_type, Some(listener.clone()))?;
    }
    Ok(())
}

/// Clear the `on<event_type>` handler of every element
pub fn clear_listener<'a>(
    page: &mut Page,
    target: impl Into<Target<'a>>,
    event_type: &str,
) -> Result<()> {
    for id in resolve_all(page.document(), target)? {
        page.document_mut().set_event_handler(id, event_type, None)?;
    }
    Ok(())
}

/// Dispatch a bubbling, cancelable `event_type` event at every element
pub fn trigger<'a>(page: &mut Page, target: impl Into<Target<'a>>, event_type: &str) -> Result<()> {
    for id in resolve_all(page.document(), target)? {
        let event = Event::new(event_type, id).bubbles(true).cancelable(true);
        page.document_mut().dispatch_event(event)?;
    }
    Ok(())
}
