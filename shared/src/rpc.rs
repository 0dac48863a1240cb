//! # JSON-RPC Transport Seam
//!
//! Both provider variants speak the same EIP-1193 `request({ method, params })`
//! shape: the injected wallet directly, the local development node through an
//! HTTP JSON-RPC envelope. Everything above this module only ever sees
//! [`RpcTransport`].
//!
//! The traits are `?Send` because browser handles (`JsValue`) are confined to
//! the single UI thread.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// EIP-1193 code a wallet returns when the user declines a request.
pub const USER_REJECTED_CODE: i64 = 4001;

/// Generic JSON-RPC internal error, also used for transport-level failures.
pub const INTERNAL_ERROR_CODE: i64 = -32603;

/// Error object returned by a wallet or node for a failed request.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message} (code {code})")]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl RpcError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Transport-level failure (network down, malformed envelope).
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(INTERNAL_ERROR_CODE, message)
    }

    /// Normalize the loosely typed fields of an error thrown by a wallet.
    ///
    /// JS numbers arrive as `f64`; anything that is not an integral code
    /// becomes [`INTERNAL_ERROR_CODE`]. A missing or blank message stays
    /// empty so the failure is reported as unknown further up. A `null`
    /// `data` is dropped.
    pub fn from_parts(code: Option<f64>, message: Option<String>, data: Option<Value>) -> Self {
        let code = code
            .filter(|c| c.is_finite() && c.fract() == 0.0)
            .map(|c| c as i64)
            .unwrap_or(INTERNAL_ERROR_CODE);
        let message = message.map(|m| m.trim().to_string()).unwrap_or_default();
        Self {
            code,
            message,
            data: data.filter(|d| !d.is_null()),
        }
    }

    /// Whether the user declined the request in the wallet UI.
    ///
    /// Wallets disagree on how they report this: most use code 4001, some
    /// wrap the rejection in a -32603 with a "User denied ..." message.
    pub fn is_user_rejection(&self) -> bool {
        if self.code == USER_REJECTED_CODE {
            return true;
        }
        let message = self.message.to_ascii_lowercase();
        message.contains("user rejected") || message.contains("user denied")
    }
}

/// A single EIP-1193 style request channel.
#[async_trait(?Send)]
pub trait RpcTransport {
    /// Send `method` with positional `params` and return the raw `result`.
    async fn request(&self, method: &str, params: Value) -> Result<Value, RpcError>;
}

/// Suspends the current task; used between confirmation polls.
#[async_trait(?Send)]
pub trait Timer {
    async fn sleep_ms(&self, millis: u32);
}

/// JSON-RPC 2.0 request envelope, used by the HTTP transport.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: Value,
}

impl<'a> JsonRpcRequest<'a> {
    pub fn new(id: u64, method: &'a str, params: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            method,
            params,
        }
    }
}

/// JSON-RPC 2.0 response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<RpcError>,
}

impl JsonRpcResponse {
    /// Collapse the envelope into the `result` value or the node's error.
    ///
    /// A response carrying neither field is treated as a `null` result,
    /// which is what nodes send for e.g. an unknown transaction receipt.
    pub fn into_result(self) -> Result<Value, RpcError> {
        match (self.error, self.result) {
            (Some(err), _) => Err(err),
            (None, Some(value)) => Ok(value),
            (None, None) => Ok(Value::Null),
        }
    }
}
