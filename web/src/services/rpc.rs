//! JSON-RPC over HTTP to the local development node, and the browser timer.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde_json::Value;
use shared::rpc::{JsonRpcRequest, JsonRpcResponse, RpcError, RpcTransport, Timer};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Posts JSON-RPC envelopes to a fixed endpoint.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    url: String,
}

impl HttpTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait(?Send)]
impl RpcTransport for HttpTransport {
    async fn request(&self, method: &str, params: Value) -> Result<Value, RpcError> {
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        let body = JsonRpcRequest::new(id, method, params);
        log::debug!("[RPC] -> {} #{} {}", self.url, id, method);

        let response = Request::post(&self.url)
            .json(&body)
            .map_err(|e| RpcError::internal(format!("Failed to encode request: {}", e)))?
            .send()
            .await
            .map_err(|e| RpcError::internal(format!("Failed to reach {}: {}", self.url, e)))?;

        if !response.ok() {
            let text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RpcError::internal(format!("HTTP {}: {}", response.status(), text)));
        }

        let envelope: JsonRpcResponse = response
            .json()
            .await
            .map_err(|e| RpcError::internal(format!("Malformed JSON-RPC response: {}", e)))?;
        envelope.into_result()
    }
}

/// `setTimeout`-backed sleep.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTimer;

#[async_trait(?Send)]
impl Timer for GlooTimer {
    async fn sleep_ms(&self, millis: u32) {
        TimeoutFuture::new(millis).await;
    }
}
