//! Connector session orchestration.
//!
//! [`ConnectorSession`] is the single context object for one wallet connection. It owns the
//! public session signal observed by UI code, the private store holding the live connector, the
//! host services used for persistence and lifecycle events, and the connector registry.
//!
//! Every `connect` and `disconnect` advances an attempt generation. A `connect` that resumes after
//! a newer call has been issued drops its connector and leaves state to the newer call.

use std::rc::Rc;

use leptos::*;
use wallet_host::{ConnectorConfig, HostServices, KeyValueStorage};

use crate::{
    connectors::ConnectorRegistry,
    error::SessionError,
    model::{PublicSessionState, SessionPhase, SessionSettings},
    persistence,
    reducer::{reduce_session, SessionAction, SessionEffect},
    vault::PrivateSessionStore,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How a `connect` call ended.
pub enum ConnectOutcome {
    /// The connector is live and the session is connected.
    Connected,
    /// Construction or `init()` failed; the session is disconnected.
    Failed,
    /// A newer `connect` or `disconnect` was issued while this one was awaiting `init()`.
    Superseded,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct AttemptTracker {
    generation: u64,
    pending: Option<u64>,
}

impl AttemptTracker {
    fn begin(&mut self) {
        self.generation += 1;
        self.pending = Some(self.generation);
    }

    fn invalidate(&mut self) {
        self.generation += 1;
    }

    fn is_current(&self, attempt: u64) -> bool {
        self.generation == attempt
    }

    /// Clears the in-flight marker if `attempt` is still the newest connect.
    fn settle(&mut self, attempt: u64) -> bool {
        if self.pending == Some(attempt) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

#[derive(Clone, Copy)]
/// Context object for one wallet connector session.
pub struct ConnectorSession {
    host: StoredValue<HostServices>,
    registry: StoredValue<ConnectorRegistry>,
    settings: StoredValue<SessionSettings>,
    vault: PrivateSessionStore,
    state: RwSignal<PublicSessionState>,
    attempts: StoredValue<AttemptTracker>,
}

impl ConnectorSession {
    /// Creates a disconnected session owned by the current reactive owner.
    pub fn new(host: HostServices, registry: ConnectorRegistry, settings: SessionSettings) -> Self {
        Self {
            host: store_value(host),
            registry: store_value(registry),
            settings: store_value(settings),
            vault: PrivateSessionStore::new(),
            state: create_rw_signal(PublicSessionState::default()),
            attempts: store_value(AttemptTracker::default()),
        }
    }

    /// Read-only public session signal for subscribers.
    pub fn state(&self) -> ReadSignal<PublicSessionState> {
        self.state.read_only()
    }

    /// Current public state without subscribing.
    pub fn snapshot(&self) -> PublicSessionState {
        self.state.get_untracked()
    }

    /// Tracked read of `connected`.
    pub fn connected(&self) -> bool {
        self.state.with(|state| state.connected)
    }

    /// Tracked read of `connecting`.
    pub fn connecting(&self) -> bool {
        self.state.with(|state| state.connecting)
    }

    /// Tracked read of the wallet alias.
    pub fn alias(&self) -> Option<String> {
        self.state.with(|state| state.alias.clone())
    }

    /// Tracked read of the wallet balance.
    pub fn balance(&self) -> Option<f64> {
        self.state.with(|state| state.balance)
    }

    /// Tracked read of the live connector's display name.
    pub fn connector_name(&self) -> Option<String> {
        self.state.with(|state| state.connector_name.clone())
    }

    /// Tracked read of the lifecycle phase.
    pub fn phase(&self) -> SessionPhase {
        self.state.with(PublicSessionState::phase)
    }

    /// Display name from the private store's live config, independent of the public signal.
    pub fn active_connector_name(&self) -> Option<String> {
        self.vault.connector_name()
    }

    /// Settings this session was created with.
    pub fn settings(&self) -> SessionSettings {
        self.settings.get_value()
    }

    pub(crate) fn host(&self) -> HostServices {
        self.host.get_value()
    }

    /// Connects using the connector variant named by `config.connector_type`.
    ///
    /// `connecting` is published before the connector is awaited. Failures are logged and turned
    /// into a transition back to disconnected. The config is persisted whether or not the attempt
    /// succeeds, unless a newer call superseded it.
    pub async fn connect(self, config: ConnectorConfig) -> ConnectOutcome {
        self.attempts.update_value(AttemptTracker::begin);
        let attempt = self.attempts.with_value(|attempts| attempts.generation);
        self.apply(SessionAction::BeginConnect);

        let result = match self.registry.with_value(|registry| registry.create(&config)) {
            Ok(connector) => {
                let init = connector.init().await;
                match init {
                    Ok(()) => Ok(connector),
                    Err(message) => Err(SessionError::ConnectorRejected {
                        connector_type: config.connector_type.clone(),
                        message,
                    }),
                }
            }
            Err(err) => Err(err),
        };

        let mut settled = false;
        self.attempts
            .update_value(|attempts| settled = attempts.settle(attempt));
        if !self.attempts.with_value(|attempts| attempts.is_current(attempt)) {
            logging::warn!(
                "discarding superseded `{}` connect attempt",
                config.connector_type
            );
            if settled {
                self.apply(SessionAction::ConnectAbandoned);
            }
            return ConnectOutcome::Superseded;
        }

        let outcome = match result {
            Ok(connector) => {
                self.vault.set_config(Some(config.clone()));
                self.vault.set_connector(Some(connector));
                self.apply(SessionAction::ConnectSucceeded {
                    connector_name: config.connector_name.clone(),
                });
                ConnectOutcome::Connected
            }
            Err(err) => {
                logging::error!("wallet connect failed: {err}");
                self.apply(SessionAction::ConnectFailed);
                ConnectOutcome::Failed
            }
        };

        let (storage, key) = self.storage_target();
        if let Err(err) = persistence::save_connector_config(storage.as_ref(), &key, &config) {
            logging::warn!("persist connector config failed: {err}");
        }
        outcome
    }

    /// Drops the live connector, clears the public fields and the persisted config.
    ///
    /// Leaves `connecting` alone; an in-flight `connect` is superseded, not cancelled.
    pub fn disconnect(&self) {
        self.attempts.update_value(AttemptTracker::invalidate);
        self.apply(SessionAction::Disconnect);
    }

    /// Replaces the wallet alias. Callers only do this while connected.
    pub fn set_alias(&self, alias: Option<String>) {
        self.apply(SessionAction::SetAlias(alias));
    }

    /// Replaces the wallet balance. Callers only do this while connected.
    pub fn set_balance(&self, balance: Option<f64>) {
        self.apply(SessionAction::SetBalance(balance));
    }

    fn storage_target(&self) -> (Rc<dyn KeyValueStorage>, String) {
        (
            self.host.with_value(HostServices::storage),
            self.settings
                .with_value(|settings| settings.storage_key.clone()),
        )
    }

    fn apply(&self, action: SessionAction) {
        let mut preview = self.state.get_untracked();
        let effects = reduce_session(&mut preview, action.clone());

        for effect in effects {
            match effect {
                SessionEffect::Emit(event) => {
                    let events = self.host.with_value(HostServices::events);
                    events.dispatch(event);
                }
                SessionEffect::PublishState => self.publish(&action),
                SessionEffect::ClearPrivateSession => {
                    self.vault.set_config(None);
                    self.vault.set_connector(None);
                }
                SessionEffect::DeleteSavedConfig => {
                    let (storage, key) = self.storage_target();
                    if let Err(err) = persistence::delete_connector_config(storage.as_ref(), &key)
                    {
                        logging::warn!("delete connector config failed: {err}");
                    }
                }
            }
        }
    }

    /// Re-applies `action` to the live state, keeping fields listeners wrote since `apply` began.
    fn publish(&self, action: &SessionAction) {
        let mut next = self.state.get_untracked();
        reduce_session(&mut next, action.clone());
        debug_assert!(next.is_consistent());
        if next != self.state.get_untracked() {
            self.state.set(next);
        }
    }
}

impl std::fmt::Debug for ConnectorSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectorSession")
            .field("state", &self.state.get_untracked())
            .finish_non_exhaustive()
    }
}
