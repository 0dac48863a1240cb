//! Seal (proof) source for `set(uint256,bytes)`.
//!
//! The contract expects a proof that `x` is even. No prover is wired in yet,
//! so the browser build supplies a random placeholder through this trait.

use alloy_primitives::{Bytes, U256};
use async_trait::async_trait;

use crate::error::DappError;

/// Produces the seal submitted alongside a new value.
#[async_trait(?Send)]
pub trait SealProvider {
    async fn seal_for(&self, x: U256) -> Result<Bytes, DappError>;

    /// `true` when the seal is not a real proof.
    fn is_placeholder(&self) -> bool {
        false
    }
}
