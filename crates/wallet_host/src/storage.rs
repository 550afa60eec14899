//! Key-scoped durable storage contracts and adapters.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};

/// Host service for small text records stored under a fixed key (JSON stored as text).
///
/// The contract is synchronous because the browser backing (`localStorage`) is.
pub trait KeyValueStorage {
    /// Reads the raw record stored under `key`.
    fn load_raw(&self, key: &str) -> Result<Option<String>, String>;

    /// Writes `raw` under `key`, overwriting any prior value.
    fn save_raw(&self, key: &str, raw: &str) -> Result<(), String>;

    /// Removes `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Storage that never holds anything, for stubbed hosts.
pub struct NoopKeyValueStorage;

impl KeyValueStorage for NoopKeyValueStorage {
    fn load_raw(&self, _key: &str) -> Result<Option<String>, String> {
        Ok(None)
    }

    fn save_raw(&self, _key: &str, _raw: &str) -> Result<(), String> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory storage keyed by string. Clones share the same map.
pub struct MemoryKeyValueStorage {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryKeyValueStorage {
    /// Returns whether a record exists under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.inner.borrow().contains_key(key)
    }
}

impl KeyValueStorage for MemoryKeyValueStorage {
    fn load_raw(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.inner.borrow().get(key).cloned())
    }

    fn save_raw(&self, key: &str, raw: &str) -> Result<(), String> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), raw.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        self.inner.borrow_mut().remove(key);
        Ok(())
    }
}

/// Loads and deserializes a typed record through a [`KeyValueStorage`] implementation.
///
/// # Errors
///
/// Returns an error when the storage read or JSON deserialization fails. An absent key is
/// `Ok(None)`, not an error.
pub fn load_json_with<S: KeyValueStorage + ?Sized, T: DeserializeOwned>(
    storage: &S,
    key: &str,
) -> Result<Option<T>, String> {
    let Some(raw) = storage.load_raw(key)? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&raw).map_err(|e| e.to_string())?;
    Ok(Some(value))
}

/// Serializes and saves a typed record through a [`KeyValueStorage`] implementation.
///
/// # Errors
///
/// Returns an error when serialization or the storage write fails.
pub fn save_json_with<S: KeyValueStorage + ?Sized, T: Serialize>(
    storage: &S,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    storage.save_raw(key, &raw)
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Record {
        name: String,
    }

    #[test]
    fn memory_storage_overwrites_and_removes() {
        let storage = MemoryKeyValueStorage::default();
        let storage_obj: &dyn KeyValueStorage = &storage;

        storage_obj.save_raw("k", "{\"a\":1}").expect("save");
        storage_obj.save_raw("k", "{\"a\":2}").expect("overwrite");
        assert_eq!(
            storage_obj.load_raw("k").expect("load"),
            Some("{\"a\":2}".to_string())
        );

        storage_obj.remove("k").expect("remove");
        storage_obj.remove("k").expect("remove absent key");
        assert_eq!(storage_obj.load_raw("k").expect("load"), None);
    }

    #[test]
    fn typed_helpers_round_trip_through_shared_clones() {
        let storage = MemoryKeyValueStorage::default();
        let writer = storage.clone();
        save_json_with(
            &writer,
            "record",
            &Record {
                name: "alpha".to_string(),
            },
        )
        .expect("save typed");

        let loaded: Option<Record> = load_json_with(&storage, "record").expect("load typed");
        assert_eq!(
            loaded,
            Some(Record {
                name: "alpha".to_string()
            })
        );
    }

    #[test]
    fn malformed_record_is_an_error_not_absent() {
        let storage = MemoryKeyValueStorage::default();
        storage.save_raw("record", "{not json").expect("save raw");
        assert!(load_json_with::<_, Record>(&storage, "record").is_err());
        assert_eq!(
            load_json_with::<_, Record>(&storage, "missing").expect("load missing"),
            None
        );
    }

    #[test]
    fn noop_storage_is_empty_and_successful() {
        let storage = NoopKeyValueStorage;
        storage.save_raw("k", "{}").expect("save");
        assert_eq!(storage.load_raw("k").expect("load"), None);
        storage.remove("k").expect("remove");
    }
}
