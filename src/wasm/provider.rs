//! `window.ethereum` as a `WalletProvider`.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::core::constants::rpc;
use crate::error::RpcError;
use crate::session::WalletProvider;

const INJECTION_KEY: &str = "ethereum";

#[derive(Serialize)]
struct RequestArguments<'a> {
    method: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    params: Vec<Value>,
}

/// Injected EIP-1193 provider, looked up on every call so a wallet enabled
/// after page load is still found.
#[derive(Debug, Clone)]
pub struct InjectedProvider {
    key: String,
}

impl Default for InjectedProvider {
    fn default() -> Self {
        Self { key: INJECTION_KEY.into() }
    }
}

impl InjectedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    fn object(&self) -> Option<JsValue> {
        let window = web_sys::window()?;
        let obj = js_sys::Reflect::get(&window, &JsValue::from_str(&self.key)).ok()?;
        if obj.is_undefined() || obj.is_null() {
            None
        } else {
            Some(obj)
        }
    }

    fn method(obj: &JsValue, name: &str) -> Result<js_sys::Function, RpcError> {
        js_sys::Reflect::get(obj, &JsValue::from_str(name))
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
            .ok_or_else(|| RpcError::new(None, format!("provider has no {name}() method")))
    }

    /// Subscribe to `accountsChanged`. The listener lives for the page.
    pub fn on_accounts_changed(&self, mut callback: impl FnMut(Vec<String>) + 'static) -> Result<(), JsValue> {
        let Some(obj) = self.object() else {
            return Ok(());
        };
        let Ok(on) = Self::method(&obj, "on") else {
            // `on` is optional in the provider API.
            return Ok(());
        };
        let listener = Closure::<dyn FnMut(JsValue)>::new(move |accounts: JsValue| {
            match serde_wasm_bindgen::from_value::<Vec<String>>(accounts) {
                Ok(accounts) => callback(accounts),
                Err(e) => super::console_error(&format!("ignoring malformed accountsChanged payload: {e}")),
            }
        });
        on.call2(&obj, &JsValue::from_str(rpc::ACCOUNTS_CHANGED), listener.as_ref())?;
        listener.forget();
        Ok(())
    }
}

#[async_trait(?Send)]
impl WalletProvider for InjectedProvider {
    fn is_available(&self) -> bool {
        self.object().is_some()
    }

    fn selected_address(&self) -> Option<String> {
        let obj = self.object()?;
        js_sys::Reflect::get(&obj, &JsValue::from_str("selectedAddress")).ok()?.as_string()
    }

    async fn request(&self, method: &str, params: Vec<Value>) -> Result<Value, RpcError> {
        let obj = self.object().ok_or_else(|| RpcError::new(None, "wallet provider not installed"))?;
        let request = Self::method(&obj, "request")?;

        let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
        let args = RequestArguments { method, params }
            .serialize(&serializer)
            .map_err(|e| RpcError::new(None, e.to_string()))?;

        let promise = request.call1(&obj, &args).map_err(rpc_error_from_js)?;
        let promise = promise
            .dyn_into::<js_sys::Promise>()
            .map_err(|_| RpcError::new(None, "provider.request did not return a promise"))?;
        let value = JsFuture::from(promise).await.map_err(rpc_error_from_js)?;
        serde_wasm_bindgen::from_value(value).map_err(|e| RpcError::new(None, e.to_string()))
    }
}

/// `{code, message}` provider errors, `Error` objects, or bare strings.
fn rpc_error_from_js(err: JsValue) -> RpcError {
    let code = js_sys::Reflect::get(&err, &JsValue::from_str("code"))
        .ok()
        .and_then(|c| c.as_f64())
        .map(|c| c as i64);
    let message = js_sys::Reflect::get(&err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| "Unknown error".into());
    RpcError::new(code, message)
}
