//! Connector capability contract consumed by the session core.

use std::{future::Future, pin::Pin, rc::Rc};

use crate::ConnectorConfig;

/// Object-safe boxed future used by [`Connector`] async methods.
pub type ConnectorFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Live connection to one wallet backend.
///
/// Instances are created fresh for every connect attempt and dropped when the session is
/// disconnected or replaced.
pub trait Connector {
    /// Establishes the connection. Resolves once the backend is usable.
    fn init<'a>(&'a self) -> ConnectorFuture<'a, Result<(), String>>;
}

/// Constructor for one connector variant, keyed by `connectorType` in a registry.
pub type ConnectorFactory = Rc<dyn Fn(&ConnectorConfig) -> Result<Rc<dyn Connector>, String>>;
