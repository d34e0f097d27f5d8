//! # Formatting Utilities for the Console
//!
//! Number formatting for balances and hashes. For address formatting, use
//! [`shared::utils::format_address`] or [`shared::utils::truncate_address`].

/// Insert thousands separators into the integer part of a decimal string.
///
/// ```rust
/// use token_web::utils::format::format_balance;
///
/// assert_eq!(format_balance("9999.9999300"), "9,999.9999300");
/// assert_eq!(format_balance("100"), "100");
/// ```
pub fn format_balance(balance: &str) -> String {
    let (integer_part, decimal_part) = match balance.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (balance, None),
    };

    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return balance.to_string();
    }

    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    let integer_with_commas: String = result.chars().rev().collect();

    match decimal_part {
        Some(dec) => format!("{}{}.{}", sign, integer_with_commas, dec),
        None => format!("{}{}", sign, integer_with_commas),
    }
}

/// Shorten a 64 character hash for display.
pub fn short_hash(hash: &str) -> String {
    shared::utils::format_address(hash, 8, 8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_balance() {
        assert_eq!(format_balance("1234567.89"), "1,234,567.89");
        assert_eq!(format_balance("-1234"), "-1,234");
        assert_eq!(format_balance("0"), "0");
    }

    #[test]
    fn test_format_balance_passes_through_garbage() {
        assert_eq!(format_balance("n/a"), "n/a");
    }

    #[test]
    fn test_short_hash() {
        let hash = "ab".repeat(32);
        assert_eq!(short_hash(&hash), "abababab...abababab");
    }
}
