//! Persistence of the active connector config under a single storage key.

use wallet_host::{save_json_with, ConnectorConfig, KeyValueStorage};

use crate::error::SessionError;

/// Writes `config` under `key`, overwriting any prior record.
pub fn save_connector_config(
    storage: &dyn KeyValueStorage,
    key: &str,
    config: &ConnectorConfig,
) -> Result<(), SessionError> {
    save_json_with(storage, key, config).map_err(SessionError::Storage)
}

/// Reads the config stored under `key`.
///
/// # Errors
///
/// Returns [`SessionError::CorruptConfig`] when a record exists but does not parse, and
/// [`SessionError::Storage`] when the read itself fails.
pub fn load_connector_config(
    storage: &dyn KeyValueStorage,
    key: &str,
) -> Result<Option<ConnectorConfig>, SessionError> {
    let Some(raw) = storage.load_raw(key).map_err(SessionError::Storage)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| SessionError::CorruptConfig(e.to_string()))
}

/// Removes the record under `key`. Succeeds when nothing is stored.
pub fn delete_connector_config(
    storage: &dyn KeyValueStorage,
    key: &str,
) -> Result<(), SessionError> {
    storage.remove(key).map_err(SessionError::Storage)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use wallet_host::{MemoryKeyValueStorage, CONNECTOR_CONFIG_KEY};

    use super::*;

    #[test]
    fn save_then_load_returns_an_equal_config() {
        let storage = MemoryKeyValueStorage::default();
        let config = ConnectorConfig::new("lnc", "Lightning Node Connect")
            .with_option("pairingPhrase", "word word word");

        save_connector_config(&storage, CONNECTOR_CONFIG_KEY, &config).expect("save");
        let loaded = load_connector_config(&storage, CONNECTOR_CONFIG_KEY).expect("load");
        assert_eq!(loaded, Some(config));
    }

    #[test]
    fn save_overwrites_the_previous_record() {
        let storage = MemoryKeyValueStorage::default();
        save_connector_config(&storage, "k", &ConnectorConfig::new("demo", "One")).expect("save");
        save_connector_config(&storage, "k", &ConnectorConfig::new("demo", "Two")).expect("save");
        assert_eq!(
            load_connector_config(&storage, "k").expect("load"),
            Some(ConnectorConfig::new("demo", "Two"))
        );
    }

    #[test]
    fn absent_record_loads_as_none_and_delete_is_a_noop() {
        let storage = MemoryKeyValueStorage::default();
        assert_eq!(load_connector_config(&storage, "k").expect("load"), None);
        delete_connector_config(&storage, "k").expect("delete absent");
    }

    #[test]
    fn malformed_record_is_reported_as_corrupt() {
        let storage = MemoryKeyValueStorage::default();
        storage.save_raw("k", "{\"connectorType\":").expect("seed");
        let err = load_connector_config(&storage, "k").expect_err("corrupt record");
        assert!(matches!(err, SessionError::CorruptConfig(_)));
    }
}
