//! # Horizon
//!
//! Account records come from Horizon; everything contract related goes through
//! Soroban RPC (see [`crate::soroban`]).

pub mod horizon;
pub mod types;

pub use horizon::HorizonClient;
pub use types::{AccountResponse, Balance};
