//! # Display Helpers
//!
//! Formatting for addresses and hashes shown in the widgets.
//!
//! ```rust
//! use shared::utils::truncate_address;
//!
//! assert_eq!(truncate_address("0xABCDEF0123456789ABCDEF0123456789ABCDEF01"), "0xABCD...EF01");
//! ```

use alloy_primitives::{B256, U256};

/// Show the first `prefix_len` and last `suffix_len` characters of `value`.
///
/// Values too short to shorten are returned unchanged. Counting is done in
/// characters, so non-ASCII input cannot split a code point.
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512";
/// assert_eq!(format_address(addr, 6, 4), "0xe7f1...0512");
/// assert_eq!(format_address("0x1234", 6, 4), "0x1234");
/// ```
pub fn format_address(value: &str, prefix_len: usize, suffix_len: usize) -> String {
    let len = value.chars().count();
    if len <= prefix_len + suffix_len {
        return value.to_string();
    }

    let prefix: String = value.chars().take(prefix_len).collect();
    let suffix: String = value.chars().skip(len - suffix_len).collect();
    format!("{}...{}", prefix, suffix)
}

/// Address as shown in the wallet widget: `0x` plus four hex digits, then the last four.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

/// Transaction hash as shown while waiting for confirmation.
pub fn truncate_hash(hash: &B256) -> String {
    format_address(&format!("{:#x}", hash), 10, 8)
}

/// Decimal rendering of a contract value.
pub fn format_value(value: &U256) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_address() {
        let addr = "0xABCDEF0123456789ABCDEF0123456789ABCDEF01";
        assert_eq!(truncate_address(addr), "0xABCD...EF01");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("0xABCDEF", 6, 4), "0xABCDEF");
        assert_eq!(format_address("", 6, 4), "");
    }

    #[test]
    fn test_format_address_multibyte() {
        assert_eq!(format_address("ααααββββγγγγ", 2, 2), "αα...γγ");
    }

    #[test]
    fn test_truncate_hash() {
        let hash = B256::repeat_byte(0xab);
        assert_eq!(truncate_hash(&hash), "0xabababab...abababab");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&U256::from(1_000_000u64)), "1000000");
    }
}
