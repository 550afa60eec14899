use leptos::*;
use wallet_host::{ConnectorConfig, HostServices};
use wallet_host_web::{web_connector_factories, WEBLN_CONNECTOR_TYPE};
use wallet_runtime::{
    use_connector_session, ConnectorRegistry, ConnectorSessionProvider, SessionPhase,
    SessionSettings, DEMO_CONNECTOR_TYPE,
};

#[component]
pub fn SiteApp(host_services: HostServices, settings: SessionSettings) -> impl IntoView {
    let mut registry = ConnectorRegistry::with_builtin_connectors();
    registry.extend(web_connector_factories());

    view! {
        <main class="site-root">
            <ConnectorSessionProvider
                host_services=host_services
                registry=registry
                settings=settings
            >
                <SessionPanel />
            </ConnectorSessionProvider>
        </main>
    }
}

#[component]
pub fn SessionPanel() -> impl IntoView {
    let session = use_connector_session();
    let status = move || match session.phase() {
        SessionPhase::Disconnected => "Not connected".to_string(),
        SessionPhase::Connecting => "Connecting...".to_string(),
        SessionPhase::Connected => format!(
            "Connected via {}",
            session.connector_name().unwrap_or_default()
        ),
    };
    let connect = move |connector_type: &'static str, connector_name: &'static str| {
        spawn_local(async move {
            let _ = session
                .connect(ConnectorConfig::new(connector_type, connector_name))
                .await;
        });
    };

    view! {
        <section class="lwc-session">
            <p class="lwc-status">{status}</p>
            <Show
                when=move || session.connected()
                fallback=move || {
                    view! {
                        <button
                            disabled=move || session.connecting()
                            on:click=move |_| connect(DEMO_CONNECTOR_TYPE, "Demo")
                        >
                            "Connect demo wallet"
                        </button>
                        <button
                            disabled=move || session.connecting()
                            on:click=move |_| connect(WEBLN_CONNECTOR_TYPE, "WebLN")
                        >
                            "Connect WebLN"
                        </button>
                    }
                }
            >
                <p class="lwc-alias">{move || session.alias().unwrap_or_default()}</p>
                <button on:click=move |_| session.disconnect()>"Disconnect"</button>
            </Show>
        </section>
    }
}
