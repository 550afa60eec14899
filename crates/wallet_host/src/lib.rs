//! Typed host contracts shared by the wallet connector runtime and its browser adapters.
//!
//! This crate is the API-first boundary for everything the session core talks to: the persisted
//! connector configuration, the connector capability, key/value storage, and lifecycle event
//! delivery. Concrete browser adapters live in `wallet_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod connector;
pub mod events;
pub mod host;
pub mod storage;

pub use config::{ConnectorConfig, CONNECTOR_CONFIG_KEY};
pub use connector::{Connector, ConnectorFactory, ConnectorFuture};
pub use events::{EventDispatcher, LifecycleEvent, NoopEventDispatcher, RecordingEventDispatcher};
pub use host::{HostServices, HostStrategy};
pub use storage::{
    load_json_with, save_json_with, KeyValueStorage, MemoryKeyValueStorage, NoopKeyValueStorage,
};
