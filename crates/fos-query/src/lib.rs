//! fOS Query
//!
//! Selector-resolved DOM verbs. Every verb takes the [`Page`] it works on
//! and a [`Target`]: a selector string, a node, or a collection of nodes.
//! The target is resolved against the page's document and the verb
//! delegates to the matching `fos-dom` call.
//!
//! Verbs that read, and verbs that act on exactly one element, use the
//! first match and fail with [`Error::Resolution`] when nothing matches.
//! Verbs that write across a set apply to every match and do nothing when
//! the set is empty.
//!
//! # Example
//! ```rust,ignore
//! use fos_query::{Page, add_class, has_class, hide, is_visible};
//!
//! let mut page = Page::from_html(r#"<button id="save">Save</button>"#)?;
//! add_class(&mut page, "#save", "primary wide")?;
//! assert!(has_class(&page, "#save", "wide")?);
//!
//! hide(&mut page, "button")?;
//! assert!(!is_visible(&page, "#save")?);
//! ```

mod error;
mod config;
mod page;
pub mod target;
pub mod attr;
pub mod class;
pub mod style;
pub mod form;
pub mod content;
pub mod visibility;
pub mod events;
pub mod structure;
pub mod interact;

pub use error::{Error, Result};
pub use config::Config;
pub use page::Page;
pub use target::{
    Target, get_element, get_elements, get_last_element, get_nth_element, resolve, resolve_all,
    resolve_last, resolve_nth, resolve_required,
};

pub use attr::{get_attribute, has_attribute, remove_attribute, set_attribute, toggle_attribute};
pub use class::{add_class, get_class_name, has_class, remove_class, set_class_name, toggle_class};
pub use style::{get_style, remove_style_property, set_style, set_style_property};
pub use form::{get_checked, get_value, set_checked, set_value, toggle_checked};
pub use content::{get_html, get_text, set_html, set_text};
pub use visibility::{hide, hide_if, is_visible, show, show_if, toggle};
pub use events::{add_listener, clear_listener, remove_listener, set_listener, trigger};
pub use structure::{append, create_element, remove_children, remove_elements};
pub use interact::{blur, click, focus, is_element};

// Host types that appear in verb signatures
pub use fos_dom::{Document, DomError, Event, Listener, ListenerOptions, NodeId, NodeList};
pub use fos_html::ParserConfig;
