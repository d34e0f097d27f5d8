//! # Shared Utility Functions
//!
//! Common utility functions used by the backend and the web console.
//!
//! ## Address Formatting
//!
//! Functions for formatting Stellar addresses for display:
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - Alias for `format_address` with default parameters
//!
//! ## Address Shape
//!
//! - [`is_account_id`] / [`is_contract_id`] - cheap strkey shape checks (prefix, length,
//!   base32 alphabet). The checksum is verified by the SDK when the address is decoded.
//! - [`parse_address_list`] - split a comma separated list of addresses
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "GDOBGW2B4PHXXEOWAACCEVDZJJ6Q2EUZGTK5ZQNEVZZFP4VC3MD4223B";
//! let formatted = format_address(address, 4, 4);
//! assert_eq!(formatted, "GDOB...223B");
//! ```

/// Length of an encoded ed25519 account or contract strkey.
pub const STRKEY_LEN: usize = 56;

/// Format a Stellar address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "GDOBGW2B4PHXXEOWAACCEVDZJJ6Q2EUZGTK5ZQNEVZZFP4VC3MD4223B";
/// assert_eq!(format_address(addr, 4, 4), "GDOB...223B");
/// assert_eq!(format_address(addr, 6, 6), "GDOBGW...D4223B");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
        || !address.is_ascii()
    {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format an address with default 4-character prefix and suffix.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "CCQWMCHX6GPZDCKZRACJM35FRSA5M6BNG5Q23GRT4IPGG7I6P5ZAURV4";
/// assert_eq!(truncate_address(addr), "CCQW...URV4");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 4, 4)
}

fn has_strkey_shape(value: &str, prefix: char) -> bool {
    value.len() == STRKEY_LEN
        && value.starts_with(prefix)
        && value
            .bytes()
            .all(|b| b.is_ascii_uppercase() || (b'2'..=b'7').contains(&b))
}

/// `G...` account id shape.
pub fn is_account_id(value: &str) -> bool {
    has_strkey_shape(value, 'G')
}

/// `C...` contract id shape.
pub fn is_contract_id(value: &str) -> bool {
    has_strkey_shape(value, 'C')
}

/// Split comma separated addresses, trimming whitespace and dropping empty entries.
///
/// ```rust
/// use shared::utils::parse_address_list;
///
/// assert_eq!(parse_address_list(" GA1, GB2 ,,"), vec!["GA1", "GB2"]);
/// ```
pub fn parse_address_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
