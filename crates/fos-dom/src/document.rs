//! Document - High-level document API
//!
//! Queries, event dispatch, click activation and focus on top of `DomTree`.

use crate::{
    DomResult, DomTree, Event, EventPhase, InputType, Listener, ListenerOptions, NodeId,
    NodeList, SelectorList,
};

/// HTML Document
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    tree: DomTree,
    /// Document URL
    url: String,
    /// Element that last received focus
    focused: Option<NodeId>,
}

impl Document {
    /// Create a document with an empty `<html><head><body>` skeleton
    pub fn new(url: &str) -> Self {
        Self::from_tree(skeleton().unwrap_or_default(), url)
    }

    /// Create an empty document (no structure)
    pub fn empty(url: &str) -> Self {
        Self::from_tree(DomTree::new(), url)
    }

    /// Wrap an already built tree
    pub fn from_tree(tree: DomTree, url: &str) -> Self {
        Self {
            tree,
            url: url.to_string(),
            focused: None,
        }
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// The `<html>` element
    pub fn document_element(&self) -> Option<NodeId> {
        self.tree.element_children(NodeId::ROOT).first().copied()
    }

    fn html_child(&self, tag: &str) -> Option<NodeId> {
        let html = self.document_element()?;
        self.tree
            .element_children(html)
            .into_iter()
            .find(|&c| self.tree.element(c).is_ok_and(|e| e.tag == tag))
    }

    pub fn head(&self) -> Option<NodeId> {
        self.html_child("head")
    }

    pub fn body(&self) -> Option<NodeId> {
        self.html_child("body")
    }

    /// Text of the first `<title>`
    pub fn title(&self) -> String {
        self.tree
            .descendants(NodeId::ROOT)
            .into_iter()
            .find(|&n| self.tree.element(n).is_ok_and(|e| e.tag == "title"))
            .and_then(|t| self.tree.text_content(t).ok())
            .map(|t| t.split_ascii_whitespace().collect::<Vec<_>>().join(" "))
            .unwrap_or_default()
    }

    /// Node is reachable from the document node
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.tree.get(id).is_some() && self.tree.tree_root(id) == NodeId::ROOT
    }

    /// First connected element with this id
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        self.tree
            .descendants(NodeId::ROOT)
            .into_iter()
            .find(|&n| self.tree.element(n).is_ok_and(|e| e.id() == Some(id)))
    }

    /// First connected element matching `selector`, in document order
    pub fn query_selector(&self, selector: &str) -> DomResult<Option<NodeId>> {
        let list = SelectorList::parse(selector)?;
        Ok(self
            .tree
            .descendants(NodeId::ROOT)
            .into_iter()
            .find(|&n| list.matches(&self.tree, n)))
    }

    /// All connected elements matching `selector`, in document order
    pub fn query_selector_all(&self, selector: &str) -> DomResult<NodeList> {
        let list = SelectorList::parse(selector)?;
        let nodes: Vec<NodeId> = self
            .tree
            .descendants(NodeId::ROOT)
            .into_iter()
            .filter(|&n| list.matches(&self.tree, n))
            .collect();
        tracing::trace!("query_selector_all({selector}) -> {} nodes", nodes.len());
        Ok(NodeList::from_vec(nodes))
    }

    /// Check if an element matches `selector`
    pub fn matches(&self, id: NodeId, selector: &str) -> DomResult<bool> {
        let list = SelectorList::parse(selector)?;
        self.tree.element(id)?;
        Ok(list.matches(&self.tree, id))
    }

    /// Closest inclusive ancestor matching `selector`
    pub fn closest(&self, id: NodeId, selector: &str) -> DomResult<Option<NodeId>> {
        let list = SelectorList::parse(selector)?;
        self.tree.node(id)?;
        Ok(std::iter::once(id)
            .chain(self.tree.ancestors(id))
            .find(|&n| list.matches(&self.tree, n)))
    }

    pub fn add_event_listener(
        &mut self,
        id: NodeId,
        event_type: &str,
        listener: Listener,
        options: ListenerOptions,
    ) -> DomResult<()> {
        self.tree
            .element_mut(id)?
            .listeners
            .add(event_type, listener, options);
        Ok(())
    }

    /// Remove a listener; only the same `Listener` (or a clone) matches
    pub fn remove_event_listener(
        &mut self,
        id: NodeId,
        event_type: &str,
        listener: &Listener,
        options: ListenerOptions,
    ) -> DomResult<()> {
        self.tree
            .element_mut(id)?
            .listeners
            .remove(event_type, listener, options.capture);
        Ok(())
    }

    /// Assign (or clear) the `on<type>` handler property
    pub fn set_event_handler(
        &mut self,
        id: NodeId,
        event_type: &str,
        handler: Option<Listener>,
    ) -> DomResult<()> {
        let handlers = &mut self.tree.element_mut(id)?.handlers;
        match handler {
            Some(handler) => {
                handlers.insert(event_type.to_string(), handler);
            }
            None => {
                handlers.remove(event_type);
            }
        }
        Ok(())
    }

    pub fn event_handler(&self, id: NodeId, event_type: &str) -> DomResult<Option<Listener>> {
        Ok(self.tree.element(id)?.handlers.get(event_type).cloned())
    }

    /// Dispatch an event: capture down, target, then bubble up when the
    /// event bubbles. Returns `false` if the default was prevented.
    pub fn dispatch_event(&mut self, mut event: Event) -> DomResult<bool> {
        let target = event.target;
        self.tree.node(target)?;
        let path: Vec<NodeId> = self
            .tree
            .ancestors(target)
            .filter(|&a| self.tree.element(a).is_ok())
            .collect();
        tracing::trace!("dispatch {} to {} ({} ancestors)", event.event_type, target, path.len());

        for &node in path.iter().rev() {
            if event.is_propagation_stopped() {
                break;
            }
            self.invoke(node, &mut event, EventPhase::Capturing)?;
        }
        if !event.is_propagation_stopped() {
            self.invoke(target, &mut event, EventPhase::AtTarget)?;
        }
        if event.bubbles {
            for &node in &path {
                if event.is_propagation_stopped() {
                    break;
                }
                self.invoke(node, &mut event, EventPhase::Bubbling)?;
            }
        }
        event.phase = EventPhase::None;
        event.current_target = NodeId::NONE;
        Ok(!event.is_default_prevented())
    }

    /// Run the listeners of one node for one phase
    fn invoke(&mut self, node: NodeId, event: &mut Event, phase: EventPhase) -> DomResult<()> {
        let Ok(elem) = self.tree.element(node) else {
            return Ok(());
        };
        let listeners = elem.listeners.matching(&event.event_type, phase);
        let handler = match phase {
            EventPhase::Capturing => None,
            _ => elem.handlers.get(&event.event_type).cloned(),
        };

        event.current_target = node;
        event.phase = phase;
        for (listener, options) in listeners {
            if options.once {
                self.tree
                    .element_mut(node)?
                    .listeners
                    .remove(&event.event_type, &listener, options.capture);
            }
            event.set_passive(options.passive);
            listener.call(event);
            event.set_passive(false);
        }
        if let Some(handler) = handler {
            handler.call(event);
        }
        Ok(())
    }

    /// Simulate a user click with the platform's activation behaviour
    ///
    /// Checkboxes flip and radios select before the `click` listeners run;
    /// a prevented default rolls that back, otherwise `input` and `change`
    /// follow. Disabled controls ignore the click. Returns `false` when the
    /// default was prevented or the element is disabled.
    pub fn click(&mut self, id: NodeId) -> DomResult<bool> {
        let elem = self.tree.element(id)?;
        if elem.is_disabled() {
            return Ok(false);
        }
        let kind = elem.input_type();

        let was_checked = self.tree.checked(id)?;
        let previous_radio = match kind {
            Some(InputType::Radio) => self
                .tree
                .radio_group(id)?
                .into_iter()
                .find(|&r| self.tree.checked(r).unwrap_or(false)),
            _ => None,
        };
        match kind {
            Some(InputType::Checkbox) => self.tree.set_checked(id, !was_checked)?,
            Some(InputType::Radio) => self.tree.set_checked(id, true)?,
            _ => {}
        }

        let event = Event::new("click", id).bubbles(true).cancelable(true);
        let proceed = self.dispatch_event(event)?;

        if !kind.is_some_and(InputType::is_checkable) {
            return Ok(proceed);
        }
        if !proceed {
            self.tree.set_checked(id, was_checked)?;
            if let Some(previous) = previous_radio {
                self.tree.set_checked(previous, true)?;
            }
        } else if self.tree.checked(id)? != was_checked {
            self.dispatch_event(Event::new("input", id).bubbles(true))?;
            self.dispatch_event(Event::new("change", id).bubbles(true))?;
        }
        Ok(proceed)
    }

    /// Element can receive focus
    pub fn is_focusable(&self, id: NodeId) -> bool {
        let Ok(elem) = self.tree.element(id) else {
            return false;
        };
        if !self.is_connected(id) || elem.is_disabled() {
            return false;
        }
        if elem.attrs.contains("tabindex") {
            return true;
        }
        match elem.tag.as_str() {
            "a" | "area" => elem.attrs.contains("href"),
            "input" => elem.input_type() != Some(InputType::Hidden),
            "button" | "select" | "textarea" | "iframe" | "summary" => true,
            _ => false,
        }
    }

    /// Focused element, falling back to `<body>`
    pub fn active_element(&self) -> Option<NodeId> {
        self.focused
            .filter(|&f| self.is_connected(f))
            .or_else(|| self.body())
    }

    /// Move focus to `id`; non-focusable elements are ignored.
    /// Returns whether `id` holds focus afterwards.
    pub fn focus(&mut self, id: NodeId) -> DomResult<bool> {
        self.tree.element(id)?;
        if !self.is_focusable(id) {
            return Ok(false);
        }
        if self.focused == Some(id) {
            return Ok(true);
        }
        if let Some(old) = self.focused.take() {
            if self.is_connected(old) {
                self.dispatch_event(Event::new("blur", old))?;
            }
        }
        self.focused = Some(id);
        self.dispatch_event(Event::new("focus", id))?;
        Ok(true)
    }

    /// Drop focus if `id` has it
    pub fn blur(&mut self, id: NodeId) -> DomResult<()> {
        self.tree.element(id)?;
        if self.focused == Some(id) {
            self.focused = None;
            self.dispatch_event(Event::new("blur", id))?;
        }
        Ok(())
    }
}

/// `<html><head></head><body></body></html>` under a fresh document node
fn skeleton() -> DomResult<DomTree> {
    let mut tree = DomTree::new();
    let html = tree.create_element("html");
    let head = tree.create_element("head");
    let body = tree.create_element("body");
    tree.append_child(NodeId::ROOT, html)?;
    tree.append_child(html, head)?;
    tree.append_child(html, body)?;
    Ok(tree)
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}
