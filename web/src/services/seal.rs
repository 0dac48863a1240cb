//! Placeholder seal from browser randomness.

use alloy_primitives::{Bytes, U256};
use async_trait::async_trait;
use shared::seal::SealProvider;
use shared::DappError;

use super::ethereum::js_error_message;

const SEAL_LEN: usize = 32;

/// 32 random bytes from `crypto.getRandomValues`.
///
/// TODO: replace with a seal produced by the evenness prover once it exposes
/// an HTTP endpoint; the contract verifier will reject these.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserRandomSeal;

#[async_trait(?Send)]
impl SealProvider for BrowserRandomSeal {
    async fn seal_for(&self, _x: U256) -> Result<Bytes, DappError> {
        let crypto = web_sys::window()
            .ok_or_else(|| DappError::other("No window available"))?
            .crypto()
            .map_err(|e| DappError::other(js_error_message(&e).unwrap_or_default()))?;

        let mut seal = [0u8; SEAL_LEN];
        crypto
            .get_random_values_with_u8_array(&mut seal)
            .map_err(|e| DappError::other(js_error_message(&e).unwrap_or_default()))?;

        Ok(Bytes::copy_from_slice(&seal))
    }

    fn is_placeholder(&self) -> bool {
        true
    }
}
