//! # Provider Resolver
//!
//! One capability shared by both widgets. The resolver decides, from the
//! configured [`NetworkMode`], which transport an operation talks to and
//! builds a fresh [`Provider`] for it. The injected wallet is handed in at
//! construction, so tests can substitute it.
//!
//! ```text
//! ProviderResolver ──resolve()──▶ Provider ──signer()──▶ ContractSigner
//!                                    │                        │
//!                                 read_number()        submit_set() / wait_for_receipt()
//! ```

use std::rc::Rc;

use alloy_primitives::{Address, Bytes, B256, U256};
use serde_json::{json, Value};

use crate::config::{AppConfig, ConfirmationPolicy, NetworkMode};
use crate::contract::{self, Receipt};
use crate::error::{ContractError, DappError};
use crate::rpc::{RpcTransport, Timer};

/// Builds a provider handle per operation.
#[derive(Clone)]
pub struct ProviderResolver {
    mode: NetworkMode,
    contract: Address,
    confirmation: ConfirmationPolicy,
    local: Rc<dyn RpcTransport>,
    injected: Option<Rc<dyn RpcTransport>>,
    timer: Rc<dyn Timer>,
}

impl ProviderResolver {
    pub fn new(
        config: &AppConfig,
        local: Rc<dyn RpcTransport>,
        injected: Option<Rc<dyn RpcTransport>>,
        timer: Rc<dyn Timer>,
    ) -> Self {
        Self {
            mode: config.network_mode,
            contract: config.contract_address,
            confirmation: config.confirmation,
            local,
            injected,
            timer,
        }
    }

    /// Provider for the configured mode.
    ///
    /// Fails with [`DappError::WalletNotInstalled`] in injected mode when no
    /// wallet was detected; nothing else is attempted in that case.
    pub fn resolve(&self) -> Result<Provider, DappError> {
        let transport = match self.mode {
            NetworkMode::Local => self.local.clone(),
            NetworkMode::Injected => self.injected_wallet()?,
        };
        Ok(Provider {
            transport,
            contract: self.contract,
            confirmation: self.confirmation,
            timer: self.timer.clone(),
        })
    }

    /// The injected wallet regardless of mode (account authorization always
    /// goes through the extension).
    pub fn injected_wallet(&self) -> Result<Rc<dyn RpcTransport>, DappError> {
        self.injected.clone().ok_or(DappError::WalletNotInstalled)
    }
}

/// A connection to either the local node or the injected wallet.
pub struct Provider {
    transport: Rc<dyn RpcTransport>,
    contract: Address,
    confirmation: ConfirmationPolicy,
    timer: Rc<dyn Timer>,
}

impl Provider {
    /// Read-only `number()` call.
    pub async fn read_number(&self) -> Result<U256, ContractError> {
        let result = self
            .transport
            .request("eth_call", contract::number_call_params(self.contract))
            .await?;
        contract::decode_number(&result)
    }

    /// Signing handle for the first authorized account.
    ///
    /// Uses already-authorized accounts when there are any, otherwise asks
    /// the wallet for authorization. No account at all is an error.
    pub async fn signer(&self) -> Result<ContractSigner, DappError> {
        let mut accounts = self.accounts("eth_accounts").await?;
        if accounts.is_empty() {
            log::debug!("[SIGNER] no authorized accounts, requesting access");
            accounts = self.accounts("eth_requestAccounts").await?;
        }

        let address = accounts
            .into_iter()
            .next()
            .ok_or_else(|| DappError::SignerUnavailable("wallet returned no accounts".to_string()))?;

        Ok(ContractSigner {
            transport: self.transport.clone(),
            contract: self.contract,
            confirmation: self.confirmation,
            timer: self.timer.clone(),
            address,
        })
    }

    async fn accounts(&self, method: &str) -> Result<Vec<Address>, DappError> {
        let result = self
            .transport
            .request(method, json!([]))
            .await
            .map_err(|e| DappError::SignerUnavailable(e.to_string()))?;
        contract::parse_accounts(&result).map_err(|e| DappError::SignerUnavailable(e.to_string()))
    }
}

/// An account authorized to send `set` transactions.
pub struct ContractSigner {
    transport: Rc<dyn RpcTransport>,
    contract: Address,
    confirmation: ConfirmationPolicy,
    timer: Rc<dyn Timer>,
    address: Address,
}

impl ContractSigner {
    pub fn address(&self) -> Address {
        self.address
    }

    /// Submit `set(x, seal)` and return the transaction hash.
    pub async fn submit_set(&self, x: U256, seal: Bytes) -> Result<B256, DappError> {
        let params = contract::set_transaction_params(self.contract, self.address, x, seal);
        let result = self
            .transport
            .request("eth_sendTransaction", params)
            .await
            .map_err(DappError::from_transaction_rpc)?;
        contract::parse_tx_hash(&result).map_err(|e| DappError::Transaction(e.to_string()))
    }

    /// Poll for the receipt of `tx_hash` until it is mined or the policy gives up.
    ///
    /// A failed poll counts as "not mined yet": the transaction is already
    /// broadcast, so only a wallet rejection ends the wait early.
    pub async fn wait_for_receipt(&self, tx_hash: B256) -> Result<Receipt, DappError> {
        for attempt in 0..self.confirmation.max_polls {
            let polled = self
                .transport
                .request("eth_getTransactionReceipt", json!([tx_hash]))
                .await;

            let result = match polled {
                Ok(result) => result,
                Err(e) if e.is_user_rejection() => return Err(DappError::UserRejected),
                Err(e) => {
                    log::warn!("[SUBMIT] receipt poll {} for {:#x} failed: {}", attempt + 1, tx_hash, e);
                    Value::Null
                }
            };

            match contract::parse_receipt(tx_hash, &result) {
                Ok(Some(receipt)) if receipt.success => return Ok(receipt),
                Ok(Some(_)) => return Err(DappError::Transaction("transaction reverted".to_string())),
                Ok(None) => {
                    log::debug!("[SUBMIT] receipt for {:#x} not available (poll {})", tx_hash, attempt + 1);
                }
                Err(e) => return Err(DappError::Transaction(e.to_string())),
            }

            if attempt + 1 < self.confirmation.max_polls {
                self.timer.sleep_ms(self.confirmation.poll_interval_ms).await;
            }
        }

        Err(DappError::Transaction(format!(
            "confirmation timed out after {} polls",
            self.confirmation.max_polls
        )))
    }
}
