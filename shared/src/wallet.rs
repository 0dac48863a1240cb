//! Wallet connection state for the connect widget.

use alloy_primitives::Address;
use serde_json::json;

use crate::contract;
use crate::error::DappError;
use crate::provider::ProviderResolver;
use crate::utils::truncate_address;

/// Connection state; starts disconnected and lives for the page session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConnectionState {
    pub is_connected: bool,
    pub address: String,
    pub connecting: bool,
    pub error: Option<String>,
}

impl ConnectionState {
    pub fn set_connecting(&mut self) {
        self.connecting = true;
        self.error = None;
    }

    pub fn set_connected(&mut self, address: Address) {
        self.is_connected = true;
        self.connecting = false;
        self.address = address.to_checksum(None);
        self.error = None;
    }

    /// A failed attempt leaves the state disconnected.
    pub fn set_failed(&mut self, err: &DappError) {
        self.connecting = false;
        self.error = Some(connect_error_message(err));
    }

    /// `0x1234...abcd`, or `None` while disconnected.
    pub fn display_address(&self) -> Option<String> {
        self.is_connected.then(|| truncate_address(&self.address))
    }
}

/// Ask the injected wallet for account access and return the first account.
///
/// Authorization always goes through the extension, even in local mode.
pub async fn connect_wallet(resolver: &ProviderResolver) -> Result<Address, DappError> {
    let wallet = resolver.injected_wallet()?;

    let result = wallet
        .request("eth_requestAccounts", json!([]))
        .await
        .map_err(|e| {
            if e.is_user_rejection() {
                DappError::UserRejected
            } else {
                DappError::SignerUnavailable(e.message)
            }
        })?;

    contract::parse_accounts(&result)
        .map_err(|e| DappError::SignerUnavailable(e.to_string()))?
        .into_iter()
        .next()
        .ok_or_else(|| DappError::SignerUnavailable("wallet returned no accounts".to_string()))
}

/// Text shown in the connect widget after a failed attempt.
pub fn connect_error_message(err: &DappError) -> String {
    match err {
        DappError::WalletNotInstalled => err.user_message(),
        DappError::UserRejected => "Connection request rejected by user".to_string(),
        DappError::SignerUnavailable(detail) => format!("Failed to connect wallet: {}", detail),
        other => format!("Failed to connect wallet: {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NetworkMode;
    use crate::rpc::RpcError;
    use crate::test_support::{test_resolver, MockTransport, ACCOUNT};

    #[test]
    fn test_initial_state_is_disconnected() {
        let state = ConnectionState::default();
        assert!(!state.is_connected);
        assert_eq!(state.display_address(), None);
    }

    #[test]
    fn test_display_address_truncates() {
        let mut state = ConnectionState::default();
        state.set_connected(ACCOUNT.parse().unwrap());
        assert_eq!(state.display_address(), Some("0xabCD...EF01".to_string()));
    }

    #[tokio::test]
    async fn test_connect_success() {
        let wallet = MockTransport::new();
        wallet.respond("eth_requestAccounts", Ok(json!([ACCOUNT])));
        let resolver = test_resolver(NetworkMode::Injected, MockTransport::new(), Some(wallet.clone()));

        let mut state = ConnectionState::default();
        state.set_connecting();
        let address = connect_wallet(&resolver).await.unwrap();
        state.set_connected(address);

        assert!(state.is_connected);
        assert!(!state.connecting);
        assert_eq!(state.address.to_lowercase(), ACCOUNT);
        assert_eq!(wallet.calls_to("eth_requestAccounts"), 1);
    }

    #[tokio::test]
    async fn test_connect_uses_wallet_even_in_local_mode() {
        let local = MockTransport::new();
        let wallet = MockTransport::new();
        wallet.respond("eth_requestAccounts", Ok(json!([ACCOUNT])));
        let resolver = test_resolver(NetworkMode::Local, local.clone(), Some(wallet));

        assert!(connect_wallet(&resolver).await.is_ok());
        assert_eq!(local.call_count(), 0);
    }

    #[tokio::test]
    async fn test_connect_without_wallet() {
        let local = MockTransport::new();
        let resolver = test_resolver(NetworkMode::Injected, local.clone(), None);

        let err = connect_wallet(&resolver).await.unwrap_err();
        let mut state = ConnectionState::default();
        state.set_failed(&err);

        assert!(!state.is_connected);
        assert_eq!(state.error.as_deref(), Some("Please install MetaMask!"));
        assert_eq!(local.call_count(), 0);
    }

    #[tokio::test]
    async fn test_connect_declined() {
        let wallet = MockTransport::new();
        wallet.respond("eth_requestAccounts", Err(RpcError::new(4001, "User rejected the request.")));
        let resolver = test_resolver(NetworkMode::Injected, MockTransport::new(), Some(wallet));

        let err = connect_wallet(&resolver).await.unwrap_err();
        assert_eq!(err, DappError::UserRejected);
        assert_eq!(connect_error_message(&err), "Connection request rejected by user");
    }
}
