//! # Highlander Shared Core
//!
//! Platform-independent logic behind the Highlander even-number page. The
//! browser crate supplies the adapters (injected wallet, HTTP JSON-RPC,
//! timers, seal source); everything here compiles natively and is tested
//! against a scripted transport.
//!
//! ## Structure
//!
//! - **[`config`]**: build-time configuration and the global accessor
//! - **[`rpc`]**: the [`rpc::RpcTransport`] / [`rpc::Timer`] seams and JSON-RPC envelopes
//! - **[`contract`]**: `IEvenNumber` ABI bindings and RPC result parsing
//! - **[`provider`]**: [`provider::ProviderResolver`], read handles and signers
//! - **[`status`]**: the read/write flow and its view state machine
//! - **[`wallet`]**: wallet connection state
//! - **[`validation`]**, **[`seal`]**, **[`error`]**, **[`utils`]**
//!
//! ## Usage in the Frontend
//!
//! ```rust,ignore
//! use shared::status::{EvenNumberFlow, EvenNumberViewState};
//!
//! let flow = EvenNumberFlow::new(&resolver, &seal);
//! let input = state.begin_submit()?;
//! flow.submit(&input, &mut |event| state.apply(event)).await?;
//! ```

pub mod config;
pub mod contract;
pub mod error;
pub mod provider;
pub mod rpc;
pub mod seal;
pub mod status;
pub mod utils;
pub mod validation;
pub mod wallet;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::DappError;
pub use utils::*;
