use std::rc::Rc;

use wallet_host::{
    EventDispatcher, HostServices, HostStrategy, KeyValueStorage, LifecycleEvent,
    NoopEventDispatcher, NoopKeyValueStorage,
};

use crate::{HostElement, WebEventDispatcher, WebKeyValueStorage};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Adapter enum that erases the concrete storage backend behind [`KeyValueStorage`].
#[derive(Debug, Clone, Copy)]
pub enum KeyValueStorageAdapter {
    /// `localStorage`-backed storage.
    Browser(WebKeyValueStorage),
    /// No-op fallback for stubbed hosts.
    Stub(NoopKeyValueStorage),
}

impl KeyValueStorage for KeyValueStorageAdapter {
    fn load_raw(&self, key: &str) -> Result<Option<String>, String> {
        match self {
            Self::Browser(storage) => storage.load_raw(key),
            Self::Stub(storage) => storage.load_raw(key),
        }
    }

    fn save_raw(&self, key: &str, raw: &str) -> Result<(), String> {
        match self {
            Self::Browser(storage) => storage.save_raw(key, raw),
            Self::Stub(storage) => storage.save_raw(key, raw),
        }
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        match self {
            Self::Browser(storage) => storage.remove(key),
            Self::Stub(storage) => storage.remove(key),
        }
    }
}

/// Adapter enum that erases the concrete event backend behind [`EventDispatcher`].
#[derive(Debug, Clone)]
pub enum EventDispatcherAdapter {
    /// DOM `CustomEvent` delivery.
    Browser(WebEventDispatcher),
    /// Drops every event.
    Stub(NoopEventDispatcher),
}

impl EventDispatcher for EventDispatcherAdapter {
    fn dispatch(&self, event: LifecycleEvent) {
        match self {
            Self::Browser(dispatcher) => dispatcher.dispatch(event),
            Self::Stub(dispatcher) => dispatcher.dispatch(event),
        }
    }
}

/// Builds the configured key/value storage adapter.
pub fn key_value_storage() -> KeyValueStorageAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => KeyValueStorageAdapter::Browser(WebKeyValueStorage),
        HostStrategy::Stub => KeyValueStorageAdapter::Stub(NoopKeyValueStorage),
    }
}

/// Builds the configured lifecycle event dispatcher, targeting `host`.
pub fn event_dispatcher(host: &HostElement) -> EventDispatcherAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => EventDispatcherAdapter::Browser(host.event_dispatcher()),
        HostStrategy::Stub => EventDispatcherAdapter::Stub(NoopEventDispatcher),
    }
}

/// Builds the host service bundle consumed by the session runtime.
pub fn build_host_services(host: &HostElement) -> HostServices {
    HostServices::new(
        Rc::new(key_value_storage()),
        Rc::new(event_dispatcher(host)),
        selected_host_strategy(),
    )
}
