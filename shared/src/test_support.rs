//! Scripted transport and helpers for the flow tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use alloy_primitives::{Bytes, U256};
use async_trait::async_trait;
use serde_json::Value;

use crate::config::{AppConfig, ConfirmationPolicy, NetworkMode};
use crate::error::DappError;
use crate::provider::ProviderResolver;
use crate::rpc::{RpcError, RpcTransport, Timer};
use crate::seal::SealProvider;

pub const ACCOUNT: &str = "0xabcdef0123456789abcdef0123456789abcdef01";
pub const TX_HASH: &str = "0x1111111111111111111111111111111111111111111111111111111111111111";

#[derive(Default)]
struct Script {
    responses: HashMap<String, VecDeque<Result<Value, RpcError>>>,
    calls: Vec<(String, Value)>,
}

/// Records every request and replays queued responses per method.
///
/// A method with nothing queued answers `null`. Clones share one script.
#[derive(Clone, Default)]
pub struct MockTransport {
    script: Rc<RefCell<Script>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next response for `method`.
    pub fn respond(&self, method: &str, response: Result<Value, RpcError>) {
        self.script
            .borrow_mut()
            .responses
            .entry(method.to_string())
            .or_default()
            .push_back(response);
    }

    pub fn call_count(&self) -> usize {
        self.script.borrow().calls.len()
    }

    pub fn calls_to(&self, method: &str) -> usize {
        self.script.borrow().calls.iter().filter(|(m, _)| m == method).count()
    }

    /// Params of the most recent call to `method`.
    pub fn last_params(&self, method: &str) -> Option<Value> {
        self.script
            .borrow()
            .calls
            .iter()
            .rev()
            .find(|(m, _)| m == method)
            .map(|(_, params)| params.clone())
    }
}

#[async_trait(?Send)]
impl RpcTransport for MockTransport {
    async fn request(&self, method: &str, params: Value) -> Result<Value, RpcError> {
        let mut script = self.script.borrow_mut();
        script.calls.push((method.to_string(), params));
        script
            .responses
            .get_mut(method)
            .and_then(VecDeque::pop_front)
            .unwrap_or(Ok(Value::Null))
    }
}

pub struct NoDelay;

#[async_trait(?Send)]
impl Timer for NoDelay {
    async fn sleep_ms(&self, _millis: u32) {}
}

/// Returns the same bytes for every value.
#[derive(Debug, Clone, Default)]
pub struct StaticSeal(pub Bytes);

#[async_trait(?Send)]
impl SealProvider for StaticSeal {
    async fn seal_for(&self, _x: U256) -> Result<Bytes, DappError> {
        Ok(self.0.clone())
    }

    fn is_placeholder(&self) -> bool {
        true
    }
}

/// Resolver over mock transports, three confirmation polls, no delay.
pub fn test_resolver(
    mode: NetworkMode,
    local: MockTransport,
    wallet: Option<MockTransport>,
) -> ProviderResolver {
    let config = AppConfig {
        network_mode: mode,
        confirmation: ConfirmationPolicy {
            poll_interval_ms: 1,
            max_polls: 3,
        },
        ..AppConfig::default()
    };
    ProviderResolver::new(
        &config,
        Rc::new(local),
        wallet.map(|w| Rc::new(w) as Rc<dyn RpcTransport>),
        Rc::new(NoDelay),
    )
}

/// ABI word for `number()` return data.
pub fn number_word(value: u64) -> Value {
    Value::String(format!("0x{:064x}", value))
}
