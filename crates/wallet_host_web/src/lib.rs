//! Browser (`wasm32`) implementations of [`wallet_host`] service contracts.
//!
//! On non-wasm targets every adapter compiles to an inert fallback so the runtime can be built and
//! tested natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod connectors;
pub mod events;
pub mod host_element;
pub mod storage;

pub use adapters::{
    build_host_services, event_dispatcher, host_strategy_name, key_value_storage,
    selected_host_strategy, EventDispatcherAdapter, KeyValueStorageAdapter,
};
pub use connectors::{web_connector_factories, WebLnConnector, WEBLN_CONNECTOR_TYPE};
pub use events::WebEventDispatcher;
pub use host_element::{HostElement, SESSION_SETTINGS_ATTRIBUTE};
pub use storage::local_storage::WebKeyValueStorage;
