//! Reconnect-on-load from the persisted connector config.

use leptos::logging;

use crate::{
    error::SessionError,
    persistence,
    session::{ConnectOutcome, ConnectorSession},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What boot restoration did.
pub enum RestoreOutcome {
    /// Restoration is turned off in the session settings.
    Disabled,
    /// No connector config was persisted.
    NothingSaved,
    /// A persisted config was found and a connect attempt ran.
    Attempted(ConnectOutcome),
    /// The persisted record did not parse and was deleted.
    DiscardedCorrupt,
    /// The storage backend could not be read.
    StorageUnavailable,
}

/// Restores the session from the persisted connector config, if any.
///
/// Runs once at startup before any user interaction. A corrupt record is logged and deleted and
/// the session stays disconnected.
pub async fn restore_session(session: ConnectorSession) -> RestoreOutcome {
    let settings = session.settings();
    if !settings.restore_on_boot {
        return RestoreOutcome::Disabled;
    }

    let storage = session.host().storage();
    match persistence::load_connector_config(storage.as_ref(), &settings.storage_key) {
        Ok(None) => RestoreOutcome::NothingSaved,
        Ok(Some(config)) => RestoreOutcome::Attempted(session.connect(config).await),
        Err(SessionError::CorruptConfig(err)) => {
            logging::warn!("discarding corrupt connector config: {err}");
            if let Err(err) =
                persistence::delete_connector_config(storage.as_ref(), &settings.storage_key)
            {
                logging::warn!("delete corrupt connector config failed: {err}");
            }
            RestoreOutcome::DiscardedCorrupt
        }
        Err(err) => {
            logging::warn!("connector config load failed: {err}");
            RestoreOutcome::StorageUnavailable
        }
    }
}
