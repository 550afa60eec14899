mod web_app;

pub use web_app::{SessionPanel, SiteApp};

/// DOM id of the element the session UI mounts into.
pub const HOST_ELEMENT_ID: &str = "lwc-root";

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    use wallet_host_web::{build_host_services, HostElement};
    use wallet_runtime::SessionSettings;

    console_error_panic_hook::set_once();

    let host = HostElement::find(HOST_ELEMENT_ID);
    let host_services = build_host_services(&host);
    let settings = SessionSettings::from_host_attribute(host.settings_json().as_deref());
    match host.element() {
        Some(element) => leptos::mount_to(element, move || {
            leptos::view! { <SiteApp host_services=host_services settings=settings /> }
        }),
        None => leptos::mount_to_body(move || {
            leptos::view! { <SiteApp host_services=host_services settings=settings /> }
        }),
    }
}
