//! Host service bundle assembled by the entry layer and injected into the session runtime.

use std::rc::Rc;

use crate::{
    EventDispatcher, KeyValueStorage, MemoryKeyValueStorage, NoopEventDispatcher,
    NoopKeyValueStorage, RecordingEventDispatcher,
};

/// Host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed services (`localStorage`, DOM events).
    Browser,
    /// Placeholder services that persist nothing and drop events.
    Stub,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Stub => "stub",
        }
    }
}

#[derive(Clone)]
/// Storage and event services used by the session runtime.
pub struct HostServices {
    storage: Rc<dyn KeyValueStorage>,
    events: Rc<dyn EventDispatcher>,
    strategy: HostStrategy,
}

impl HostServices {
    /// Bundles the supplied services.
    pub fn new(
        storage: Rc<dyn KeyValueStorage>,
        events: Rc<dyn EventDispatcher>,
        strategy: HostStrategy,
    ) -> Self {
        Self {
            storage,
            events,
            strategy,
        }
    }

    /// Services that persist nothing and drop every event.
    pub fn stub() -> Self {
        Self::new(
            Rc::new(NoopKeyValueStorage),
            Rc::new(NoopEventDispatcher),
            HostStrategy::Stub,
        )
    }

    /// In-memory services; the passed handles keep observing what the session does.
    pub fn in_memory(storage: MemoryKeyValueStorage, events: RecordingEventDispatcher) -> Self {
        Self::new(Rc::new(storage), Rc::new(events), HostStrategy::Stub)
    }

    /// Returns the durable key/value storage service.
    pub fn storage(&self) -> Rc<dyn KeyValueStorage> {
        self.storage.clone()
    }

    /// Returns the lifecycle event dispatcher.
    pub fn events(&self) -> Rc<dyn EventDispatcher> {
        self.events.clone()
    }

    /// Returns the host strategy these services were built for.
    pub fn strategy(&self) -> HostStrategy {
        self.strategy
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("strategy", &self.strategy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LifecycleEvent;

    #[test]
    fn in_memory_services_share_handles_with_the_caller() {
        let storage = MemoryKeyValueStorage::default();
        let events = RecordingEventDispatcher::default();
        let host = HostServices::in_memory(storage.clone(), events.clone());

        host.storage().save_raw("k", "v").expect("save");
        host.events().dispatch(LifecycleEvent::Disconnected);

        assert!(storage.contains("k"));
        assert_eq!(events.events(), vec![LifecycleEvent::Disconnected]);
    }

    #[test]
    fn stub_services_report_stub_strategy() {
        let host = HostServices::stub();
        assert_eq!(host.strategy(), HostStrategy::Stub);
        assert_eq!(host.strategy().as_str(), "stub");
        assert_eq!(host.storage().load_raw("k").expect("load"), None);
    }
}
