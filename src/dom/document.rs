use super::element::{DisplayElement, ElementHandle};
use super::event::{Event, EventKind};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::debug;

type Listener = Box<dyn FnMut(&Event)>;

/// Owns every element on the stage and routes events to their listeners.
///
/// Elements keep their insertion order, which is also the order they're drawn in.
#[derive(Default)]
pub(crate) struct Document {
    elements: Vec<ElementHandle>,
    listeners: HashMap<(String, EventKind), Vec<Listener>>,
}

impl Document {
    /// Create an element and append it to the document.
    ///
    /// If an element with the same id exists, that one is returned instead.
    pub(crate) fn create_element(&mut self, id: &str) -> ElementHandle {
        if let Some(element) = self.get_element_by_id(id) {
            return element;
        }
        let element = Rc::new(RefCell::new(DisplayElement::new(id)));
        self.elements.push(element.clone());
        element
    }

    pub(crate) fn get_element_by_id(&self, id: &str) -> Option<ElementHandle> {
        self.elements.iter().find(|e| e.borrow().id() == id).cloned()
    }

    pub(crate) fn elements(&self) -> &[ElementHandle] {
        &self.elements
    }

    /// Register a listener for events of `kind` fired on the element `id`.
    ///
    /// Listeners run in registration order and are never removed.
    pub(crate) fn add_event_listener<F>(&mut self, id: &str, kind: EventKind, listener: F)
    where
        F: FnMut(&Event) + 'static,
    {
        self.listeners.entry((id.to_string(), kind)).or_default().push(Box::new(listener));
    }

    /// Deliver an event to the listeners registered for its target and kind.
    ///
    /// Returns the number of listeners that ran.
    pub(crate) fn dispatch(&mut self, event: &Event) -> usize {
        let key = (event.target.clone(), event.kind);
        let Some(listeners) = self.listeners.get_mut(&key) else {
            return 0;
        };
        debug!(
            element = %event.target,
            kind = ?event.kind,
            elapsed = ?event.elapsed,
            listeners = listeners.len(),
            "dispatching event"
        );
        for listener in listeners.iter_mut() {
            listener(event);
        }
        listeners.len()
    }
}
