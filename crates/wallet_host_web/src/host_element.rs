//! Lookup of the page element hosting the wallet connector UI.

use crate::WebEventDispatcher;

/// Attribute on the host element carrying JSON session settings.
pub const SESSION_SETTINGS_ATTRIBUTE: &str = "data-lwc-settings";

#[derive(Debug, Clone, Default)]
/// The element the session UI mounts into and announces lifecycle events on.
///
/// A detached host (no matching element, or a native build) mounts to `<body>` and dispatches on
/// `window`.
pub struct HostElement {
    #[cfg(target_arch = "wasm32")]
    element: Option<web_sys::HtmlElement>,
}

impl HostElement {
    /// Host with no backing element.
    pub fn detached() -> Self {
        Self::default()
    }

    /// Looks up the host element by DOM id, falling back to a detached host.
    pub fn find(id: &str) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;

            let element = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.get_element_by_id(id))
                .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());
            Self { element }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = id;
            Self::detached()
        }
    }

    /// Returns whether a page element backs this host.
    pub fn is_attached(&self) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            self.element.is_some()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            false
        }
    }

    /// The backing element, for mounting.
    #[cfg(target_arch = "wasm32")]
    pub fn element(&self) -> Option<web_sys::HtmlElement> {
        self.element.clone()
    }

    /// Raw value of [`SESSION_SETTINGS_ATTRIBUTE`], if the host element sets it.
    pub fn settings_json(&self) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            self.element
                .as_ref()?
                .get_attribute(SESSION_SETTINGS_ATTRIBUTE)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    /// Dispatcher targeting the host element, or `window` when detached.
    pub fn event_dispatcher(&self) -> WebEventDispatcher {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;

            match &self.element {
                Some(element) => {
                    WebEventDispatcher::with_target(element.clone().unchecked_into())
                }
                None => WebEventDispatcher::new(),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            WebEventDispatcher::new()
        }
    }
}
