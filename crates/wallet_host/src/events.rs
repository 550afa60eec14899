//! Lifecycle event contract between the session core and the hosting UI component.

use std::{cell::RefCell, rc::Rc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Session lifecycle transitions announced to the host.
pub enum LifecycleEvent {
    /// A connect attempt started.
    Connecting,
    /// A connect attempt succeeded.
    Connected,
    /// The session was disconnected.
    Disconnected,
}

impl LifecycleEvent {
    /// Returns the DOM event name dispatched for this transition.
    pub const fn event_name(self) -> &'static str {
        match self {
            Self::Connecting => "lwc:connecting",
            Self::Connected => "lwc:connected",
            Self::Disconnected => "lwc:disconnected",
        }
    }
}

/// Fire-and-forget delivery of [`LifecycleEvent`] values.
///
/// Delivery is synchronous at the call site; the session never observes a result.
pub trait EventDispatcher {
    /// Notifies the host of a lifecycle transition.
    fn dispatch(&self, event: LifecycleEvent);
}

#[derive(Debug, Clone, Copy, Default)]
/// Dispatcher that drops every event.
pub struct NoopEventDispatcher;

impl EventDispatcher for NoopEventDispatcher {
    fn dispatch(&self, _event: LifecycleEvent) {}
}

#[derive(Debug, Clone, Default)]
/// Dispatcher that records emitted events in order. Clones share the same log.
pub struct RecordingEventDispatcher {
    events: Rc<RefCell<Vec<LifecycleEvent>>>,
}

impl RecordingEventDispatcher {
    /// Returns every event dispatched so far.
    pub fn events(&self) -> Vec<LifecycleEvent> {
        self.events.borrow().clone()
    }

    /// Drops the recorded history.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl EventDispatcher for RecordingEventDispatcher {
    fn dispatch(&self, event: LifecycleEvent) {
        self.events.borrow_mut().push(event);
    }
}
