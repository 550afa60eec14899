//! DOM `CustomEvent` delivery of session lifecycle events.

use wallet_host::{EventDispatcher, LifecycleEvent};

#[derive(Debug, Clone, Default)]
/// Dispatches lifecycle events as bubbling, composed `CustomEvent`s.
///
/// Events go to the configured target (usually the host element) or to `window` when none is set.
pub struct WebEventDispatcher {
    #[cfg(target_arch = "wasm32")]
    target: Option<web_sys::EventTarget>,
}

impl WebEventDispatcher {
    /// Dispatcher targeting `window`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatcher targeting a specific element or other event target.
    #[cfg(target_arch = "wasm32")]
    pub fn with_target(target: web_sys::EventTarget) -> Self {
        Self {
            target: Some(target),
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn try_dispatch(&self, event: LifecycleEvent) -> Result<(), String> {
        use wasm_bindgen::JsCast;

        let init = web_sys::CustomEventInit::new();
        init.set_bubbles(true);
        init.set_composed(true);
        let dom_event =
            web_sys::CustomEvent::new_with_event_init_dict(event.event_name(), &init)
                .map_err(|e| format!("create {} event failed: {e:?}", event.event_name()))?;

        let target = match &self.target {
            Some(target) => target.clone(),
            None => web_sys::window()
                .ok_or_else(|| "window unavailable".to_string())?
                .unchecked_into::<web_sys::EventTarget>(),
        };
        target
            .dispatch_event(&dom_event)
            .map(|_| ())
            .map_err(|e| format!("dispatch {} failed: {e:?}", event.event_name()))
    }
}

impl EventDispatcher for WebEventDispatcher {
    fn dispatch(&self, event: LifecycleEvent) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Err(err) = self.try_dispatch(event) {
                web_sys::console::warn_1(&err.into());
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = event;
        }
    }
}
