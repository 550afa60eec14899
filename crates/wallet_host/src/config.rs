//! Persisted connector configuration model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Storage key holding the last connector configuration the user picked.
pub const CONNECTOR_CONFIG_KEY: &str = "lwc:config";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Configuration selecting and parameterizing one connector backend.
///
/// Serialized as a flat JSON object. Connector-specific fields ride along in [`Self::options`] so
/// a record written by one build survives being read back by another.
pub struct ConnectorConfig {
    /// Registry key selecting the connector variant (for example `demo` or `webln`).
    pub connector_type: String,
    /// Display name shown once the connector is connected.
    pub connector_name: String,
    /// Connector-specific fields, kept verbatim.
    #[serde(flatten)]
    pub options: Map<String, Value>,
}

impl ConnectorConfig {
    /// Creates a config without connector-specific options.
    pub fn new(connector_type: impl Into<String>, connector_name: impl Into<String>) -> Self {
        Self {
            connector_type: connector_type.into(),
            connector_name: connector_name.into(),
            options: Map::new(),
        }
    }

    /// Returns the config with one connector-specific option added.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Reads a connector-specific string option.
    pub fn option_str(&self, key: &str) -> Option<&str> {
        self.options.get(key).and_then(Value::as_str)
    }
}
