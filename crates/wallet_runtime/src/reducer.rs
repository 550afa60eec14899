//! Session actions, ordered side-effect intents, and transition logic.

use wallet_host::LifecycleEvent;

use crate::model::PublicSessionState;

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_session`].
pub enum SessionAction {
    /// A connect attempt started.
    BeginConnect,
    /// The current connect attempt produced a live connector.
    ConnectSucceeded {
        /// Display name from the attempt's config.
        connector_name: String,
    },
    /// The current connect attempt failed.
    ConnectFailed,
    /// A superseded connect attempt settled while no newer attempt was in flight.
    ConnectAbandoned,
    /// Tear the session down.
    Disconnect,
    /// Replace the wallet alias.
    SetAlias(Option<String>),
    /// Replace the wallet balance.
    SetBalance(Option<f64>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side effects the session executes, in the order returned.
pub enum SessionEffect {
    /// Notify the host of a lifecycle transition.
    Emit(LifecycleEvent),
    /// Publish the reduced state to observers.
    PublishState,
    /// Drop the private config and connector handle.
    ClearPrivateSession,
    /// Remove the persisted connector config.
    DeleteSavedConfig,
}

/// Applies `action` to `state` and returns the effects to run, in order.
pub fn reduce_session(state: &mut PublicSessionState, action: SessionAction) -> Vec<SessionEffect> {
    match action {
        SessionAction::BeginConnect => {
            // A new attempt supersedes a live session without a separate disconnect step.
            state.connected = false;
            state.connector_name = None;
            state.connecting = true;
            vec![
                SessionEffect::Emit(LifecycleEvent::Connecting),
                SessionEffect::PublishState,
            ]
        }
        SessionAction::ConnectSucceeded { connector_name } => {
            state.connected = true;
            state.connecting = false;
            state.connector_name = Some(connector_name);
            vec![
                SessionEffect::PublishState,
                SessionEffect::Emit(LifecycleEvent::Connected),
            ]
        }
        SessionAction::ConnectFailed | SessionAction::ConnectAbandoned => {
            state.connecting = false;
            vec![SessionEffect::PublishState]
        }
        SessionAction::Disconnect => {
            state.connected = false;
            state.alias = None;
            state.balance = None;
            state.connector_name = None;
            vec![
                SessionEffect::ClearPrivateSession,
                SessionEffect::PublishState,
                SessionEffect::DeleteSavedConfig,
                SessionEffect::Emit(LifecycleEvent::Disconnected),
            ]
        }
        SessionAction::SetAlias(alias) => {
            state.alias = alias;
            vec![SessionEffect::PublishState]
        }
        SessionAction::SetBalance(balance) => {
            state.balance = balance;
            vec![SessionEffect::PublishState]
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::SessionPhase;

    fn connected_state() -> PublicSessionState {
        let mut state = PublicSessionState::default();
        reduce_session(&mut state, SessionAction::BeginConnect);
        reduce_session(
            &mut state,
            SessionAction::ConnectSucceeded {
                connector_name: "Demo".to_string(),
            },
        );
        state
    }

    #[test]
    fn begin_connect_emits_before_publishing() {
        let mut state = PublicSessionState::default();
        let effects = reduce_session(&mut state, SessionAction::BeginConnect);

        assert_eq!(
            effects,
            vec![
                SessionEffect::Emit(LifecycleEvent::Connecting),
                SessionEffect::PublishState,
            ]
        );
        assert_eq!(state.phase(), SessionPhase::Connecting);
    }

    #[test]
    fn success_publishes_before_emitting_connected() {
        let mut state = PublicSessionState::default();
        reduce_session(&mut state, SessionAction::BeginConnect);
        let effects = reduce_session(
            &mut state,
            SessionAction::ConnectSucceeded {
                connector_name: "Demo".to_string(),
            },
        );

        assert_eq!(
            effects,
            vec![
                SessionEffect::PublishState,
                SessionEffect::Emit(LifecycleEvent::Connected),
            ]
        );
        assert_eq!(
            state,
            PublicSessionState {
                connected: true,
                connecting: false,
                alias: None,
                balance: None,
                connector_name: Some("Demo".to_string()),
            }
        );
    }

    #[test]
    fn failure_only_clears_connecting() {
        let mut state = PublicSessionState::default();
        reduce_session(&mut state, SessionAction::BeginConnect);
        let effects = reduce_session(&mut state, SessionAction::ConnectFailed);

        assert_eq!(effects, vec![SessionEffect::PublishState]);
        assert_eq!(state, PublicSessionState::default());
    }

    #[test]
    fn reconnect_from_connected_never_sets_both_flags() {
        let mut state = connected_state();
        reduce_session(&mut state, SessionAction::BeginConnect);

        assert!(state.connecting);
        assert!(!state.connected);
        assert_eq!(state.connector_name, None);
        assert!(state.is_consistent());
    }

    #[test]
    fn disconnect_clears_everything_but_connecting() {
        let mut state = connected_state();
        reduce_session(&mut state, SessionAction::SetAlias(Some("abc".to_string())));
        reduce_session(&mut state, SessionAction::SetBalance(Some(21.0)));

        let effects = reduce_session(&mut state, SessionAction::Disconnect);
        assert_eq!(
            effects,
            vec![
                SessionEffect::ClearPrivateSession,
                SessionEffect::PublishState,
                SessionEffect::DeleteSavedConfig,
                SessionEffect::Emit(LifecycleEvent::Disconnected),
            ]
        );
        assert_eq!(state, PublicSessionState::default());

        let mut in_flight = PublicSessionState::default();
        reduce_session(&mut in_flight, SessionAction::BeginConnect);
        reduce_session(&mut in_flight, SessionAction::Disconnect);
        assert!(in_flight.connecting);
    }

    #[test]
    fn disconnect_twice_matches_disconnect_once() {
        let mut once = connected_state();
        reduce_session(&mut once, SessionAction::Disconnect);
        let mut twice = once.clone();
        reduce_session(&mut twice, SessionAction::Disconnect);
        assert_eq!(once, twice);
    }

    #[test]
    fn setters_do_not_check_connection_state() {
        let mut state = PublicSessionState::default();
        reduce_session(&mut state, SessionAction::SetAlias(Some("node".to_string())));
        reduce_session(&mut state, SessionAction::SetBalance(Some(1500.0)));
        assert_eq!(state.alias.as_deref(), Some("node"));
        assert_eq!(state.balance, Some(1500.0));

        reduce_session(&mut state, SessionAction::SetAlias(None));
        assert_eq!(state.alias, None);
    }
}
