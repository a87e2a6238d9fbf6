//! DOM Events
//!
//! Events, listener callbacks and per-element listener registries.

use std::fmt;
use std::rc::Rc;

use crate::NodeId;

/// Dispatch phase an event is currently in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventPhase {
    #[default]
    None,
    Capturing,
    AtTarget,
    Bubbling,
}

/// DOM event
#[derive(Debug, Clone)]
pub struct Event {
    pub event_type: String,
    pub target: NodeId,
    pub current_target: NodeId,
    pub phase: EventPhase,
    pub bubbles: bool,
    pub cancelable: bool,
    default_prevented: bool,
    propagation_stopped: bool,
    in_passive_listener: bool,
}

impl Event {
    /// Non-bubbling, non-cancelable event
    pub fn new(event_type: &str, target: NodeId) -> Self {
        Self {
            event_type: event_type.to_string(),
            target,
            current_target: NodeId::NONE,
            phase: EventPhase::None,
            bubbles: false,
            cancelable: false,
            default_prevented: false,
            propagation_stopped: false,
            in_passive_listener: false,
        }
    }

    pub fn bubbles(mut self, bubbles: bool) -> Self {
        self.bubbles = bubbles;
        self
    }

    pub fn cancelable(mut self, cancelable: bool) -> Self {
        self.cancelable = cancelable;
        self
    }

    /// Prevent default action; ignored for non-cancelable events and
    /// inside passive listeners
    pub fn prevent_default(&mut self) {
        if self.cancelable && !self.in_passive_listener {
            self.default_prevented = true;
        }
    }

    /// Stop propagation after the current node's listeners
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    pub(crate) fn set_passive(&mut self, passive: bool) {
        self.in_passive_listener = passive;
    }
}

/// Event callback
///
/// Listeners are compared by reference: two `Listener`s are equal only if
/// one is a clone of the other. Keep the value used for registration to
/// remove it later; an identical closure built again will not match.
#[derive(Clone)]
pub struct Listener(Rc<dyn Fn(&mut Event)>);

impl Listener {
    pub fn new(callback: impl Fn(&mut Event) + 'static) -> Self {
        Self(Rc::new(callback))
    }

    pub fn call(&self, event: &mut Event) {
        (self.0)(event)
    }
}

impl PartialEq for Listener {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Listener {}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Listener({:p})", Rc::as_ptr(&self.0) as *const ())
    }
}

/// Options passed with a listener registration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListenerOptions {
    pub capture: bool,
    pub once: bool,
    pub passive: bool,
}

#[derive(Debug, Clone)]
struct Registration {
    event_type: String,
    listener: Listener,
    options: ListenerOptions,
}

/// Listeners registered on one element, in registration order
#[derive(Debug, Default)]
pub struct EventListeners {
    entries: Vec<Registration>,
}

impl EventListeners {
    /// Register a listener. A second registration of the same
    /// (type, listener, capture) triple is ignored.
    pub fn add(&mut self, event_type: &str, listener: Listener, options: ListenerOptions) -> bool {
        if self.position(event_type, &listener, options.capture).is_some() {
            return false;
        }
        self.entries.push(Registration {
            event_type: event_type.to_string(),
            listener,
            options,
        });
        true
    }

    /// Remove a registration; returns whether one matched
    pub fn remove(&mut self, event_type: &str, listener: &Listener, capture: bool) -> bool {
        match self.position(event_type, listener, capture) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    fn position(&self, event_type: &str, listener: &Listener, capture: bool) -> Option<usize> {
        self.entries.iter().position(|r| {
            r.event_type == event_type && r.listener == *listener && r.options.capture == capture
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count registrations for one event type
    pub fn count(&self, event_type: &str) -> usize {
        self.entries
            .iter()
            .filter(|r| r.event_type == event_type)
            .count()
    }

    /// Snapshot of the listeners that fire for `event_type` in `phase`
    pub fn matching(&self, event_type: &str, phase: EventPhase) -> Vec<(Listener, ListenerOptions)> {
        self.entries
            .iter()
            .filter(|r| r.event_type == event_type)
            .filter(|r| match phase {
                EventPhase::Capturing => r.options.capture,
                EventPhase::Bubbling => !r.options.capture,
                EventPhase::AtTarget => true,
                EventPhase::None => false,
            })
            .map(|r| (r.listener.clone(), r.options))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_listener_reference_equality() {
        let a = Listener::new(|_| {});
        let b = Listener::new(|_| {});
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_duplicate_registration_ignored() {
        let mut listeners = EventListeners::default();
        let cb = Listener::new(|_| {});
        assert!(listeners.add("click", cb.clone(), ListenerOptions::default()));
        assert!(!listeners.add("click", cb.clone(), ListenerOptions::default()));
        let capture = ListenerOptions { capture: true, ..Default::default() };
        assert!(listeners.add("click", cb.clone(), capture));
        assert_eq!(listeners.count("click"), 2);

        assert!(listeners.remove("click", &cb, true));
        assert!(!listeners.remove("click", &cb, true));
        assert_eq!(listeners.len(), 1);
    }

    #[test]
    fn test_matching_by_phase() {
        let mut listeners = EventListeners::default();
        listeners.add("input", Listener::new(|_| {}), ListenerOptions::default());
        listeners.add(
            "input",
            Listener::new(|_| {}),
            ListenerOptions { capture: true, ..Default::default() },
        );

        assert_eq!(listeners.matching("input", EventPhase::AtTarget).len(), 2);
        assert_eq!(listeners.matching("input", EventPhase::Capturing).len(), 1);
        assert_eq!(listeners.matching("input", EventPhase::Bubbling).len(), 1);
        assert!(listeners.matching("change", EventPhase::AtTarget).is_empty());
    }

    #[test]
    fn test_prevent_default_rules() {
        let mut event = Event::new("submit", NodeId::ROOT);
        event.prevent_default();
        assert!(!event.is_default_prevented());

        let mut event = Event::new("submit", NodeId::ROOT).cancelable(true);
        event.set_passive(true);
        event.prevent_default();
        assert!(!event.is_default_prevented());
        event.set_passive(false);
        event.prevent_default();
        assert!(event.is_default_prevented());
    }

    #[test]
    fn test_call_listener() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let cb = Listener::new(move |_| counter.set(counter.get() + 1));
        cb.call(&mut Event::new("x", NodeId::ROOT));
        cb.call(&mut Event::new("x", NodeId::ROOT));
        assert_eq!(hits.get(), 2);
    }
}
