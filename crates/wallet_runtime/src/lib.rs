//! Wallet connector session runtime.
//!
//! Owns the connection lifecycle state machine: a public, UI-observable session signal, a private
//! store holding the live connector handle, persistence of the active connector configuration, and
//! reconnect-on-load.

pub mod boot;
pub mod components;
pub mod connectors;
pub mod error;
pub mod model;
pub mod persistence;
pub mod reducer;
pub mod session;
pub mod vault;

pub use boot::{restore_session, RestoreOutcome};
pub use components::{use_connector_session, ConnectorSessionProvider};
pub use connectors::{ConnectorRegistry, DemoConnector, DEMO_CONNECTOR_TYPE};
pub use error::SessionError;
pub use model::*;
pub use reducer::{reduce_session, SessionAction, SessionEffect};
pub use session::{ConnectOutcome, ConnectorSession};
pub use vault::{PrivateSession, PrivateSessionStore};
