//! Core state models for the connector session runtime.

use leptos::logging;
use serde::{Deserialize, Serialize};
use wallet_host::CONNECTOR_CONFIG_KEY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Coarse lifecycle phase derived from [`PublicSessionState`].
pub enum SessionPhase {
    /// No session and no attempt in flight.
    Disconnected,
    /// A connect attempt is awaiting its connector.
    Connecting,
    /// A connector is live.
    Connected,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// UI-observable session fields.
///
/// `connected` and `connecting` are never both set, and `connector_name` is present only while
/// `connected` is.
pub struct PublicSessionState {
    /// A connector is live.
    pub connected: bool,
    /// A connect attempt is in flight.
    pub connecting: bool,
    /// Wallet alias reported by the connected backend.
    pub alias: Option<String>,
    /// Wallet balance reported by the connected backend.
    pub balance: Option<f64>,
    /// Display name of the live connector.
    pub connector_name: Option<String>,
}

impl PublicSessionState {
    /// Returns the lifecycle phase these fields describe.
    pub fn phase(&self) -> SessionPhase {
        if self.connected {
            SessionPhase::Connected
        } else if self.connecting {
            SessionPhase::Connecting
        } else {
            SessionPhase::Disconnected
        }
    }

    /// Returns whether the invariants between fields hold.
    pub fn is_consistent(&self) -> bool {
        !(self.connected && self.connecting) && (self.connector_name.is_none() || self.connected)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Runtime knobs for a connector session.
pub struct SessionSettings {
    /// Storage key holding the persisted connector configuration.
    pub storage_key: String,
    /// Whether boot restores the persisted configuration.
    pub restore_on_boot: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            storage_key: CONNECTOR_CONFIG_KEY.to_string(),
            restore_on_boot: true,
        }
    }
}

impl SessionSettings {
    /// Parses settings supplied by the host page; missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when `raw` is not a JSON object of settings.
    pub fn from_json(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|e| e.to_string())
    }

    /// Settings from an optional host-page attribute value.
    ///
    /// An absent attribute yields the defaults; a malformed one is logged and ignored.
    pub fn from_host_attribute(raw: Option<&str>) -> Self {
        match raw.map(Self::from_json) {
            Some(Ok(settings)) => settings,
            Some(Err(err)) => {
                logging::warn!("ignoring malformed session settings: {err}");
                Self::default()
            }
            None => Self::default(),
        }
    }
}
