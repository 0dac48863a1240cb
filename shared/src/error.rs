//! # Error Types
//!
//! [`DappError`] is the user-facing taxonomy: every failure in the read, write
//! or connect flows ends up as one of its variants, and the widgets only ever
//! render [`DappError::user_message`].
//!
//! ## Error Categories
//!
//! - **Preconditions**: [`DappError::WalletNotInstalled`], [`DappError::SignerUnavailable`]
//! - **Validation**: [`DappError::InvalidNumber`]
//! - **User rejection**: [`DappError::UserRejected`]
//! - **Transaction/network**: [`DappError::Transaction`], [`DappError::Fetch`]
//! - **Guard**: [`DappError::SubmissionInFlight`]
//! - **Fallbacks**: [`DappError::Other`], [`DappError::Unknown`]
//!
//! ```rust
//! use shared::error::DappError;
//!
//! let err = DappError::Transaction("execution reverted".to_string());
//! assert_eq!(err.user_message(), "Transaction failed: execution reverted");
//! ```

use thiserror::Error;

use crate::rpc::RpcError;

/// Shown when the injected wallet extension is missing.
pub const INSTALL_WALLET_MESSAGE: &str = "Please install MetaMask!";

/// Shown when no account can be obtained from the wallet connection.
pub const SIGNER_UNAVAILABLE_MESSAGE: &str =
    "Failed to get signer. Is MetaMask connected and unlocked?";

/// Shown for non-numeric or odd input.
pub const INVALID_NUMBER_MESSAGE: &str = "Please enter a valid even number";

/// Shown when the user declines the transaction in the wallet.
pub const USER_REJECTED_MESSAGE: &str = "Transaction rejected by user";

/// Shown while a submitted transaction waits for confirmation.
pub const PENDING_CONFIRMATION_MESSAGE: &str = "Transaction sent. Waiting for confirmation...";

/// Errors raised by the read, write and connect flows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DappError {
    /// No injected wallet while local-network mode is off.
    #[error("no injected wallet provider detected")]
    WalletNotInstalled,

    /// The wallet returned no usable account (locked, disconnected, declined).
    #[error("signer unavailable: {0}")]
    SignerUnavailable(String),

    /// Input text is not a non-negative integer, or is odd.
    #[error("invalid even number: {0:?}")]
    InvalidNumber(String),

    /// The user declined the request in the wallet UI.
    #[error("transaction rejected by user")]
    UserRejected,

    /// Submission or confirmation failed for any other reason.
    #[error("transaction failed: {0}")]
    Transaction(String),

    /// The read-only `number()` call failed.
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// A previous submission has not settled yet.
    #[error("a submission is already in flight")]
    SubmissionInFlight,

    /// Any other failure that carries a message.
    #[error("{0}")]
    Other(String),

    /// Failure with no usable message.
    #[error("unknown error")]
    Unknown,
}

impl DappError {
    /// Catch-all failure; a blank message becomes [`DappError::Unknown`].
    pub fn other(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            DappError::Unknown
        } else {
            DappError::Other(message)
        }
    }

    /// Classify a failure of `eth_sendTransaction` or receipt polling.
    pub fn from_transaction_rpc(err: RpcError) -> Self {
        if err.is_user_rejection() {
            DappError::UserRejected
        } else {
            DappError::Transaction(err.message)
        }
    }

    /// Text rendered in the widget for this failure.
    pub fn user_message(&self) -> String {
        match self {
            DappError::WalletNotInstalled => INSTALL_WALLET_MESSAGE.to_string(),
            DappError::SignerUnavailable(_) => SIGNER_UNAVAILABLE_MESSAGE.to_string(),
            DappError::InvalidNumber(_) => INVALID_NUMBER_MESSAGE.to_string(),
            DappError::UserRejected => USER_REJECTED_MESSAGE.to_string(),
            DappError::Transaction(msg) if msg.trim().is_empty() => {
                "Transaction failed: Unknown error".to_string()
            }
            DappError::Transaction(msg) => format!("Transaction failed: {}", msg),
            DappError::Fetch(msg) => format!("Error fetching even number: {}", msg),
            DappError::SubmissionInFlight => "A transaction is already in progress".to_string(),
            DappError::Other(msg) => format!("Error: {}", msg),
            DappError::Unknown => "An unknown error occurred".to_string(),
        }
    }
}

/// Failures while turning raw RPC results into typed values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    #[error("unexpected RPC result: {0}")]
    UnexpectedResult(String),

    #[error("ABI decoding failed: {0}")]
    Abi(String),

    #[error(transparent)]
    Rpc(#[from] RpcError),
}

/// Rejected build-time configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{key} is not a valid address: {value}")]
    InvalidAddress { key: &'static str, value: String },

    #[error("{key} must be a valid number: {value}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("{0}")]
    Invalid(String),
}
