//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication between
//! the web console and the backend via the REST API.
//!
//! ## Module Organization
//!
//! - [`account`] - Ledger account summaries and error responses
//! - [`soroban`] - Typed contract arguments, read-only calls, network info
//! - [`token`] - One call per token contract entry point
//! - [`transaction`] - Build, submit and status of transaction envelopes
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Amounts**: `i128` values serialize as decimal strings
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/transactions/build
//! Content-Type: application/json
//!
//! {
//!   "source": "GDOBGW2B4PHXXEOWAACCEVDZJJ6Q2EUZGTK5ZQNEVZZFP4VC3MD4223B",
//!   "call": { "function": "burn", "from": "GDOBGW2B...", "amount": "100" }
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "xdr": "AAAAAgAAAADcE1tB48...",
//!   "hash": "5f0c3b...",
//!   "function": "burn",
//!   "source": "GDOBGW2B4PHXXEOWAACCEVDZJJ6Q2EUZGTK5ZQNEVZZFP4VC3MD4223B",
//!   "sequence": 1234567890123,
//!   "fee": 100,
//!   "network_passphrase": "Test SDF Network ; September 2015"
//! }
//! ```

pub mod account;
pub mod soroban;
pub mod token;
pub mod transaction;

pub use account::*;
pub use soroban::*;
pub use token::*;
pub use transaction::*;
