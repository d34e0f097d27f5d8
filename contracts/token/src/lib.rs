#![no_std]

mod admin;
mod allowance;
mod balance;
mod contract;
mod freeze;
mod metadata;
mod multisig;
mod storage_types;

#[cfg(test)]
mod test;

pub use crate::contract::{Token, TokenClient};
pub use crate::metadata::TokenMetadata;
pub use crate::multisig::MultisigTransaction;
