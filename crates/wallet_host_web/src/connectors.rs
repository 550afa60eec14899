//! Browser-only connector variants.

use std::rc::Rc;

use wallet_host::{Connector, ConnectorConfig, ConnectorFactory, ConnectorFuture};

/// Registry key for [`WebLnConnector`].
pub const WEBLN_CONNECTOR_TYPE: &str = "webln";

#[derive(Debug, Clone, Default)]
/// Connector driving a WebLN provider injected into the page as `window.webln`.
pub struct WebLnConnector {
    connector_name: String,
}

impl WebLnConnector {
    /// Builds the connector for a config selecting it.
    pub fn from_config(config: &ConnectorConfig) -> Self {
        Self {
            connector_name: config.connector_name.clone(),
        }
    }

    #[cfg(target_arch = "wasm32")]
    async fn enable(&self) -> Result<(), String> {
        use wasm_bindgen::{JsCast, JsValue};

        let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
        let provider = js_sys::Reflect::get(&window, &JsValue::from_str("webln"))
            .map_err(|e| format!("read window.webln failed: {e:?}"))?;
        if provider.is_undefined() || provider.is_null() {
            return Err(format!(
                "{}: no WebLN provider found in this browser",
                self.connector_name
            ));
        }
        let enable = js_sys::Reflect::get(&provider, &JsValue::from_str("enable"))
            .map_err(|e| format!("read webln.enable failed: {e:?}"))?
            .dyn_into::<js_sys::Function>()
            .map_err(|_| "webln.enable is not a function".to_string())?;
        let promise = enable
            .call0(&provider)
            .map_err(|e| format!("webln.enable threw: {e:?}"))?;
        wasm_bindgen_futures::JsFuture::from(js_sys::Promise::resolve(&promise))
            .await
            .map(|_| ())
            .map_err(|e| format!("{}: webln.enable rejected: {e:?}", self.connector_name))
    }
}

impl Connector for WebLnConnector {
    fn init<'a>(&'a self) -> ConnectorFuture<'a, Result<(), String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                self.enable().await
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                Err(format!(
                    "{}: WebLN is only available in the browser",
                    self.connector_name
                ))
            }
        })
    }
}

/// Connector factories for every browser-only variant, keyed by `connectorType`.
pub fn web_connector_factories() -> Vec<(&'static str, ConnectorFactory)> {
    let webln: ConnectorFactory = Rc::new(
        |config: &ConnectorConfig| -> Result<Rc<dyn Connector>, String> {
            Ok(Rc::new(WebLnConnector::from_config(config)))
        },
    );
    vec![(WEBLN_CONNECTOR_TYPE, webln)]
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn webln_factory_is_registered_under_its_key() {
        let factories = web_connector_factories();
        assert_eq!(factories.len(), 1);
        assert_eq!(factories[0].0, WEBLN_CONNECTOR_TYPE);
    }

    #[test]
    fn webln_init_fails_outside_the_browser() {
        let config = ConnectorConfig::new(WEBLN_CONNECTOR_TYPE, "Alby");
        let factories = web_connector_factories();
        let connector = (factories[0].1)(&config).expect("construct");
        let err = block_on(connector.init()).expect_err("native init must fail");
        assert!(err.contains("Alby"));
    }
}
