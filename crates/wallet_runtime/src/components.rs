//! Leptos wiring for the connector session.

use leptos::*;
use wallet_host::HostServices;

use crate::{
    boot::restore_session, connectors::ConnectorRegistry, model::SessionSettings,
    session::ConnectorSession,
};

#[component]
/// Provides a [`ConnectorSession`] to descendant components and restores the persisted session.
pub fn ConnectorSessionProvider(
    /// Injected browser or stub host bundle assembled by the entry layer.
    host_services: HostServices,
    /// Connector variants available to the session. Defaults to the built-in connectors.
    #[prop(optional)]
    registry: Option<ConnectorRegistry>,
    /// Session knobs. Defaults to [`SessionSettings::default`].
    #[prop(optional)]
    settings: Option<SessionSettings>,
    children: Children,
) -> impl IntoView {
    let session = ConnectorSession::new(
        host_services,
        registry.unwrap_or_else(ConnectorRegistry::with_builtin_connectors),
        settings.unwrap_or_default(),
    );
    provide_context(session);

    create_effect(move |_| {
        spawn_local(async move {
            let _ = restore_session(session).await;
        });
    });

    children().into_view()
}

/// Returns the current [`ConnectorSession`].
///
/// # Panics
///
/// Panics if called outside [`ConnectorSessionProvider`].
pub fn use_connector_session() -> ConnectorSession {
    use_context::<ConnectorSession>().expect("ConnectorSession not provided")
}
