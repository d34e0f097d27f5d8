//! # Soroban
//!
//! Everything needed to turn a console request into a signable envelope.
//!
//! ## Modules
//!
//! - **[`scval`]**: contract argument and result conversions
//! - **[`builder`]**: contract-call operations and unsigned envelopes
//! - **[`token`]**: one call constructor per token contract entry point
//! - **[`ledger`]**: Horizon and Soroban RPC access behind the [`Ledger`] trait

pub mod builder;
pub mod ledger;
pub mod scval;
pub mod token;

pub use builder::{decode_envelope, ContractCall, UnsignedTransaction};
pub use ledger::{Ledger, StellarNetwork};
pub use token::TokenContract;
