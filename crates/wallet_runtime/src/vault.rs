//! Private session store holding the live connector and its config.
//!
//! Kept apart from the public session signal so the connector handle is never observable or
//! serialized by UI code. Backed by a non-reactive [`StoredValue`].

use std::rc::Rc;

use leptos::{store_value, StoredValue};
use wallet_host::{Connector, ConnectorConfig};

#[derive(Clone, Default)]
/// Active config and connector. Both are present or both are absent.
pub struct PrivateSession {
    /// Config the live connector was built from.
    pub config: Option<ConnectorConfig>,
    /// Live connector handle.
    pub connector: Option<Rc<dyn Connector>>,
}

impl std::fmt::Debug for PrivateSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateSession")
            .field("config", &self.config)
            .field("connector", &self.connector.as_ref().map(|_| "<connector>"))
            .finish()
    }
}

#[derive(Clone, Copy)]
/// Handle to the private session cell.
pub struct PrivateSessionStore {
    inner: StoredValue<PrivateSession>,
}

impl PrivateSessionStore {
    /// Creates an empty store owned by the current reactive owner.
    pub fn new() -> Self {
        Self {
            inner: store_value(PrivateSession::default()),
        }
    }

    /// Replaces the stored config.
    pub fn set_config(&self, config: Option<ConnectorConfig>) {
        self.inner.update_value(|session| session.config = config);
    }

    /// Replaces the stored connector handle, dropping the previous one.
    pub fn set_connector(&self, connector: Option<Rc<dyn Connector>>) {
        self.inner.update_value(|session| session.connector = connector);
    }

    /// Returns the current `(config, connector)` pair.
    pub fn snapshot(&self) -> PrivateSession {
        self.inner.with_value(Clone::clone)
    }

    /// Returns the live config, if any.
    pub fn config(&self) -> Option<ConnectorConfig> {
        self.inner.with_value(|session| session.config.clone())
    }

    /// Returns the live connector handle, if any.
    pub fn connector(&self) -> Option<Rc<dyn Connector>> {
        self.inner.with_value(|session| session.connector.clone())
    }

    /// Returns the display name from the live config.
    pub fn connector_name(&self) -> Option<String> {
        self.inner.with_value(|session| {
            session
                .config
                .as_ref()
                .map(|config| config.connector_name.clone())
        })
    }
}

impl Default for PrivateSessionStore {
    fn default() -> Self {
        Self::new()
    }
}
