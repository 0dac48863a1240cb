//! Validation of the even-number input field.

use alloy_primitives::U256;

use crate::error::DappError;

/// Parse `input` as a non-negative decimal integer divisible by two.
///
/// Surrounding whitespace and a single leading `+` are accepted. Signs,
/// fractions, exponents and anything that does not fit in `uint256` are
/// rejected, so nothing reaches the contract that its ABI could not encode.
pub fn parse_even_number(input: &str) -> Result<U256, DappError> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DappError::InvalidNumber(input.to_string()));
    }

    let value = U256::from_str_radix(digits, 10)
        .map_err(|_| DappError::InvalidNumber(input.to_string()))?;

    if value.bit(0) {
        return Err(DappError::InvalidNumber(input.to_string()));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_even_numbers() {
        assert_eq!(parse_even_number("42").unwrap(), U256::from(42));
        assert_eq!(parse_even_number("0").unwrap(), U256::ZERO);
        assert_eq!(parse_even_number("  8 ").unwrap(), U256::from(8));
        assert_eq!(parse_even_number("+16").unwrap(), U256::from(16));
        assert_eq!(parse_even_number("0010").unwrap(), U256::from(10));
    }

    #[test]
    fn test_accepts_values_beyond_u64() {
        let big = "36893488147419103232"; // 2^65
        assert_eq!(parse_even_number(big).unwrap(), U256::from(1u8) << 65);
    }

    #[test]
    fn test_rejects_odd_numbers() {
        for input in ["1", "3", "41", "99999999999999999999999"] {
            assert_eq!(
                parse_even_number(input),
                Err(DappError::InvalidNumber(input.to_string())),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_non_numeric() {
        for input in ["", "   ", "abc", "4.0", "1e2", "-4", "0x10", "12abc", "+", "4 2"] {
            assert!(parse_even_number(input).is_err(), "{input:?} should be rejected");
        }
    }

    #[test]
    fn test_rejects_overflow() {
        let too_big = "1".to_string() + &"0".repeat(80);
        assert!(parse_even_number(&too_big).is_err());
    }
}
