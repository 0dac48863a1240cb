//! # EvenNumber Contract Bindings
//!
//! ABI for the deployed `EvenNumber` contract and helpers that turn its two
//! calls into JSON-RPC parameters and back.

use alloy_primitives::{Address, Bytes, B256, U256};
use alloy_sol_types::{sol, SolCall};
use serde_json::{json, Value};

use crate::error::ContractError;

sol! {
    interface IEvenNumber {
        function number() external view returns (uint256);
        function set(uint256 x, bytes calldata seal) external;
    }
}

/// Calldata for `number()`.
pub fn number_calldata() -> Bytes {
    IEvenNumber::numberCall {}.abi_encode().into()
}

/// Calldata for `set(x, seal)`.
pub fn set_calldata(x: U256, seal: Bytes) -> Bytes {
    IEvenNumber::setCall { x, seal }.abi_encode().into()
}

/// Decode the return data of `number()` as produced by `eth_call`.
pub fn decode_number(result: &Value) -> Result<U256, ContractError> {
    let data = hex_bytes(result)?;
    IEvenNumber::numberCall::abi_decode_returns(&data).map_err(|e| ContractError::Abi(e.to_string()))
}

/// Params for an `eth_call` of `number()` at the latest block.
pub fn number_call_params(contract: Address) -> Value {
    json!([
        { "to": contract, "data": number_calldata() },
        "latest"
    ])
}

/// Params for `eth_sendTransaction` of `set(x, seal)` from `from`.
pub fn set_transaction_params(contract: Address, from: Address, x: U256, seal: Bytes) -> Value {
    json!([{
        "from": from,
        "to": contract,
        "data": set_calldata(x, seal),
    }])
}

/// Parse a `0x`-prefixed hex string result into raw bytes.
pub fn hex_bytes(result: &Value) -> Result<Vec<u8>, ContractError> {
    let text = result
        .as_str()
        .ok_or_else(|| ContractError::UnexpectedResult(format!("expected hex string, got {}", result)))?;
    hex::decode(text.trim_start_matches("0x"))
        .map_err(|e| ContractError::UnexpectedResult(format!("invalid hex {:?}: {}", text, e)))
}

/// Parse the transaction hash returned by `eth_sendTransaction`.
pub fn parse_tx_hash(result: &Value) -> Result<B256, ContractError> {
    let bytes = hex_bytes(result)?;
    if bytes.len() != 32 {
        return Err(ContractError::UnexpectedResult(format!(
            "transaction hash must be 32 bytes, got {}",
            bytes.len()
        )));
    }
    Ok(B256::from_slice(&bytes))
}

/// Parse an account list (`eth_accounts` / `eth_requestAccounts`).
pub fn parse_accounts(result: &Value) -> Result<Vec<Address>, ContractError> {
    let items = result
        .as_array()
        .ok_or_else(|| ContractError::UnexpectedResult(format!("expected account list, got {}", result)))?;
    items
        .iter()
        .map(|item| {
            item.as_str()
                .and_then(|s| s.parse::<Address>().ok())
                .ok_or_else(|| ContractError::UnexpectedResult(format!("invalid account {}", item)))
        })
        .collect()
}

/// Outcome of a mined transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receipt {
    pub transaction_hash: B256,
    pub block_number: Option<u64>,
    pub success: bool,
}

/// Parse `eth_getTransactionReceipt`; `null` means "not mined yet".
pub fn parse_receipt(tx_hash: B256, result: &Value) -> Result<Option<Receipt>, ContractError> {
    if result.is_null() {
        return Ok(None);
    }
    let obj = result
        .as_object()
        .ok_or_else(|| ContractError::UnexpectedResult(format!("expected receipt object, got {}", result)))?;

    // Pre-Byzantium receipts carry no status; treat them as successful.
    let success = match obj.get("status").and_then(Value::as_str) {
        Some(status) => quantity(status)? != 0,
        None => true,
    };
    let block_number = match obj.get("blockNumber").and_then(Value::as_str) {
        Some(n) => Some(quantity(n)?),
        None => None,
    };

    Ok(Some(Receipt {
        transaction_hash: tx_hash,
        block_number,
        success,
    }))
}

fn quantity(text: &str) -> Result<u64, ContractError> {
    u64::from_str_radix(text.trim_start_matches("0x"), 16)
        .map_err(|e| ContractError::UnexpectedResult(format!("invalid quantity {:?}: {}", text, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    const CONTRACT: Address = address!("e7f1725e7734ce288f8367e1bb143e90bb3f0512");

    #[test]
    fn test_number_selector() {
        // keccak256("number()")[..4]
        assert_eq!(&number_calldata()[..], &[0x83u8, 0x81, 0xf5, 0x8a]);
    }

    #[test]
    fn test_set_calldata_carries_value_and_seal() {
        let seal = Bytes::from(vec![0xAB; 32]);
        let data = set_calldata(U256::from(42), seal.clone());
        let decoded = IEvenNumber::setCall::abi_decode(&data).unwrap();
        assert_eq!(decoded.x, U256::from(42));
        assert_eq!(decoded.seal, seal);
    }

    #[test]
    fn test_decode_number() {
        let word = format!("0x{:064x}", 1234);
        assert_eq!(decode_number(&json!(word)).unwrap(), U256::from(1234));
    }

    #[test]
    fn test_decode_number_rejects_garbage() {
        assert!(matches!(decode_number(&json!(12)), Err(ContractError::UnexpectedResult(_))));
        assert!(matches!(decode_number(&json!("0xzz")), Err(ContractError::UnexpectedResult(_))));
        assert!(matches!(decode_number(&json!("0x")), Err(ContractError::Abi(_))));
    }

    #[test]
    fn test_number_call_params_shape() {
        let params = number_call_params(CONTRACT);
        assert_eq!(params[1], "latest");
        let to = params[0]["to"].as_str().unwrap().to_lowercase();
        assert_eq!(to, "0xe7f1725e7734ce288f8367e1bb143e90bb3f0512");
        assert_eq!(params[0]["data"], "0x8381f58a");
    }

    #[test]
    fn test_parse_accounts() {
        let accounts = parse_accounts(&json!(["0xe7f1725e7734ce288f8367e1bb143e90bb3f0512"])).unwrap();
        assert_eq!(accounts, vec![CONTRACT]);
        assert!(parse_accounts(&json!([])).unwrap().is_empty());
        assert!(parse_accounts(&json!("nope")).is_err());
    }

    #[test]
    fn test_parse_receipt() {
        let hash = B256::repeat_byte(0x11);
        assert_eq!(parse_receipt(hash, &Value::Null).unwrap(), None);

        let mined = parse_receipt(hash, &json!({ "status": "0x1", "blockNumber": "0x10" }))
            .unwrap()
            .unwrap();
        assert!(mined.success);
        assert_eq!(mined.block_number, Some(16));

        let reverted = parse_receipt(hash, &json!({ "status": "0x0" })).unwrap().unwrap();
        assert!(!reverted.success);
    }

    #[test]
    fn test_parse_tx_hash_length() {
        let ok = format!("0x{}", "ab".repeat(32));
        assert_eq!(parse_tx_hash(&json!(ok)).unwrap(), B256::repeat_byte(0xab));
        assert!(parse_tx_hash(&json!("0xabcd")).is_err());
    }
}
