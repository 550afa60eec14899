//! Connector registry keyed by `connectorType`.

use std::{collections::HashMap, rc::Rc};

use wallet_host::{Connector, ConnectorConfig, ConnectorFactory, ConnectorFuture};

use crate::error::SessionError;

/// Registry key for [`DemoConnector`].
pub const DEMO_CONNECTOR_TYPE: &str = "demo";

#[derive(Debug, Clone, Copy, Default)]
/// Connector whose `init()` succeeds immediately. Used for demos and local development.
pub struct DemoConnector;

impl Connector for DemoConnector {
    fn init<'a>(&'a self) -> ConnectorFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Clone, Default)]
/// Map from `connectorType` to the factory constructing that variant.
pub struct ConnectorRegistry {
    factories: HashMap<String, ConnectorFactory>,
}

impl ConnectorRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the connectors that need no host support.
    pub fn with_builtin_connectors() -> Self {
        let demo: ConnectorFactory = Rc::new(
            |_config: &ConnectorConfig| -> Result<Rc<dyn Connector>, String> {
                Ok(Rc::new(DemoConnector))
            },
        );
        Self::new().with(DEMO_CONNECTOR_TYPE, demo)
    }

    /// Registers `factory` under `connector_type`, replacing any earlier registration.
    pub fn register(&mut self, connector_type: impl Into<String>, factory: ConnectorFactory) {
        self.factories.insert(connector_type.into(), factory);
    }

    /// Builder form of [`Self::register`].
    pub fn with(mut self, connector_type: impl Into<String>, factory: ConnectorFactory) -> Self {
        self.register(connector_type, factory);
        self
    }

    /// Registers every `(connector_type, factory)` pair.
    pub fn extend(
        &mut self,
        factories: impl IntoIterator<Item = (&'static str, ConnectorFactory)>,
    ) {
        for (connector_type, factory) in factories {
            self.register(connector_type, factory);
        }
    }

    /// Returns whether a variant is registered for `connector_type`.
    pub fn contains(&self, connector_type: &str) -> bool {
        self.factories.contains_key(connector_type)
    }

    /// Returns the registered keys in sorted order.
    pub fn connector_types(&self) -> Vec<&str> {
        let mut keys = self.factories.keys().map(String::as_str).collect::<Vec<_>>();
        keys.sort_unstable();
        keys
    }

    /// Constructs the variant named by `config.connector_type`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownConnectorType`] when the key is not registered and
    /// [`SessionError::ConnectorRejected`] when the factory refuses the config.
    pub fn create(&self, config: &ConnectorConfig) -> Result<Rc<dyn Connector>, SessionError> {
        let factory = self
            .factories
            .get(&config.connector_type)
            .ok_or_else(|| SessionError::UnknownConnectorType(config.connector_type.clone()))?;
        factory(config).map_err(|message| SessionError::ConnectorRejected {
            connector_type: config.connector_type.clone(),
            message,
        })
    }
}

impl std::fmt::Debug for ConnectorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectorRegistry")
            .field("connector_types", &self.connector_types())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn builtin_registry_constructs_the_demo_connector() {
        let registry = ConnectorRegistry::with_builtin_connectors();
        assert_eq!(registry.connector_types(), vec!["demo"]);

        let connector = registry
            .create(&ConnectorConfig::new("demo", "Demo"))
            .expect("create demo");
        block_on(connector.init()).expect("demo init");
    }

    #[test]
    fn unknown_type_is_reported_by_key() {
        let registry = ConnectorRegistry::with_builtin_connectors();
        let err = registry
            .create(&ConnectorConfig::new("unknown", "X"))
            .err()
            .expect("unknown type must fail");
        assert_eq!(err, SessionError::UnknownConnectorType("unknown".to_string()));
    }

    #[test]
    fn factory_rejection_keeps_the_message() {
        let registry = ConnectorRegistry::new().with(
            "lnbits",
            Rc::new(|config: &ConnectorConfig| -> Result<Rc<dyn Connector>, String> {
                config
                    .option_str("url")
                    .map(|_| Rc::new(DemoConnector) as Rc<dyn Connector>)
                    .ok_or_else(|| "missing url".to_string())
            }),
        );

        let err = registry
            .create(&ConnectorConfig::new("lnbits", "LNbits"))
            .err()
            .expect("missing option must fail");
        assert_eq!(
            err,
            SessionError::ConnectorRejected {
                connector_type: "lnbits".to_string(),
                message: "missing url".to_string(),
            }
        );
        assert!(registry
            .create(&ConnectorConfig::new("lnbits", "LNbits").with_option("url", "https://x"))
            .is_ok());
    }

    #[test]
    fn later_registration_replaces_earlier_one() {
        let mut registry = ConnectorRegistry::with_builtin_connectors();
        registry.extend(vec![(
            DEMO_CONNECTOR_TYPE,
            Rc::new(
                |_config: &ConnectorConfig| -> Result<Rc<dyn Connector>, String> {
                    Err("disabled".to_string())
                },
            ) as ConnectorFactory,
        )]);
        assert!(registry.contains("demo"));
        assert!(registry.create(&ConnectorConfig::new("demo", "Demo")).is_err());
    }
}
