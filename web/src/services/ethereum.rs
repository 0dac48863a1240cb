//! Injected Ethereum Wallet via wasm-bindgen
//!
//! JavaScript interop for the EIP-1193 provider that wallet extensions
//! (MetaMask and compatibles) inject as `window.ethereum`.

use async_trait::async_trait;
use js_sys::Reflect;
use serde::Serialize;
use serde_json::Value;
use shared::rpc::{RpcError, RpcTransport};
use wasm_bindgen::prelude::*;

// ============================================================================
// EIP-1193 BINDINGS (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
export function hasEthereum() {
    return typeof window.ethereum !== 'undefined' && window.ethereum !== null;
}

export async function ethereumRequest(method, params) {
    if (!hasEthereum()) {
        throw { code: -32603, message: 'No injected wallet' };
    }
    try {
        return await window.ethereum.request({ method: method, params: params });
    } catch (error) {
        // Normalize to { code, message } so the Rust side sees one shape.
        const code = (error && typeof error.code === 'number') ? error.code : -32603;
        const message = (error && error.message) ? error.message : String(error);
        const data = error && error.data !== undefined ? error.data : null;
        throw { code: code, message: message, data: data };
    }
}
")]
extern "C" {
    /// Whether a wallet extension injected `window.ethereum`
    fn hasEthereum() -> bool;

    /// `window.ethereum.request({ method, params })`
    #[wasm_bindgen(catch)]
    async fn ethereumRequest(method: &str, params: JsValue) -> Result<JsValue, JsValue>;
}

// ============================================================================
// INJECTED WALLET TRANSPORT
// ============================================================================

/// Handle to the page's injected wallet.
#[derive(Clone, Copy, Debug)]
pub struct InjectedWallet;

impl InjectedWallet {
    /// `None` when no wallet extension is installed.
    pub fn detect() -> Option<Self> {
        hasEthereum().then_some(InjectedWallet)
    }
}

#[async_trait(?Send)]
impl RpcTransport for InjectedWallet {
    async fn request(&self, method: &str, params: Value) -> Result<Value, RpcError> {
        let js_params = params
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| RpcError::internal(format!("Failed to encode params: {}", e)))?;

        match ethereumRequest(method, js_params).await {
            Ok(result) => serde_wasm_bindgen::from_value(result)
                .map_err(|e| RpcError::internal(format!("Failed to decode {} result: {}", method, e))),
            Err(e) => Err(rpc_error_from_js(&e)),
        }
    }
}

/// Extract `{ code, message, data }` from a thrown JS value.
fn rpc_error_from_js(err: &JsValue) -> RpcError {
    if let Some(message) = err.as_string() {
        return RpcError::from_parts(None, Some(message), None);
    }

    let field = |name: &str| {
        Reflect::get(err, &JsValue::from_str(name))
            .ok()
            .filter(|v| !v.is_null() && !v.is_undefined())
    };

    RpcError::from_parts(
        field("code").and_then(|v| v.as_f64()),
        field("message").and_then(|v| v.as_string()),
        field("data").and_then(|v| serde_wasm_bindgen::from_value(v).ok()),
    )
}

/// Message of a thrown JS value (`Error.message` or a thrown string).
pub fn js_error_message(err: &JsValue) -> Option<String> {
    err.as_string().or_else(|| {
        Reflect::get(err, &JsValue::from_str("message"))
            .ok()
            .and_then(|v| v.as_string())
    })
}
