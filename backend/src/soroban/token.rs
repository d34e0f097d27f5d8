//! # Token Contract Calls
//!
//! One constructor per token contract entry point. Each returns a [`ContractCall`]
//! with arguments typed the way the contract declares them:
//!
//! | entry point                     | arguments                                              |
//! |---------------------------------|--------------------------------------------------------|
//! | `initialize`                    | admin: Address, decimal: u32, name: String, symbol: String |
//! | `mint`                          | to: Address, amount: i128                              |
//! | `set_admin`                     | new_admin: Address                                     |
//! | `transfer`                      | from: Address, to: Address, amount: i128               |
//! | `approve`                       | from, spender: Address, amount: i128, expiration_ledger: u32 |
//! | `transfer_from`                 | spender, from, to: Address, amount: i128               |
//! | `burn`                          | from: Address, amount: i128                            |
//! | `burn_from`                     | spender, from: Address, amount: i128                   |
//! | `freeze_account`                | account: Address                                       |
//! | `unfreeze_account`              | account: Address                                       |
//! | `setup_multisig`                | owners: Vec<Address>, threshold: u32                   |
//! | `propose_multisig_transaction`  | owner: Address, function: Symbol, to: Address, amount: i128, expiration: u64 |
//! | `approve_multisig_transaction`  | owner: Address, transaction_id: u64                    |

use shared::dto::token::{MultisigOperation, TokenCall};
use soroban_client::xdr::ScVal;

use super::builder::ContractCall;
use super::scval::{address_to_scval, i128_to_scval, string_to_scval, symbol_to_scval, vec_to_scval};
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct TokenContract {
    contract_id: String,
}

impl TokenContract {
    pub fn new(contract_id: impl Into<String>) -> Self {
        Self {
            contract_id: contract_id.into(),
        }
    }

    pub fn contract_id(&self) -> &str {
        &self.contract_id
    }

    fn call(&self, function: &str, args: Vec<ScVal>) -> ContractCall {
        ContractCall::new(self.contract_id.clone(), function, args)
    }

    pub fn initialize(&self, admin: &str, decimal: u32, name: &str, symbol: &str) -> Result<ContractCall> {
        Ok(self.call(
            "initialize",
            vec![
                address_to_scval(admin)?,
                ScVal::U32(decimal),
                string_to_scval(name)?,
                string_to_scval(symbol)?,
            ],
        ))
    }

    pub fn mint(&self, to: &str, amount: i128) -> Result<ContractCall> {
        Ok(self.call("mint", vec![address_to_scval(to)?, i128_to_scval(amount)]))
    }

    pub fn set_admin(&self, new_admin: &str) -> Result<ContractCall> {
        Ok(self.call("set_admin", vec![address_to_scval(new_admin)?]))
    }

    pub fn transfer(&self, from: &str, to: &str, amount: i128) -> Result<ContractCall> {
        Ok(self.call(
            "transfer",
            vec![address_to_scval(from)?, address_to_scval(to)?, i128_to_scval(amount)],
        ))
    }

    pub fn approve(
        &self,
        from: &str,
        spender: &str,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<ContractCall> {
        Ok(self.call(
            "approve",
            vec![
                address_to_scval(from)?,
                address_to_scval(spender)?,
                i128_to_scval(amount),
                ScVal::U32(expiration_ledger),
            ],
        ))
    }

    pub fn transfer_from(&self, spender: &str, from: &str, to: &str, amount: i128) -> Result<ContractCall> {
        Ok(self.call(
            "transfer_from",
            vec![
                address_to_scval(spender)?,
                address_to_scval(from)?,
                address_to_scval(to)?,
                i128_to_scval(amount),
            ],
        ))
    }

    pub fn burn(&self, from: &str, amount: i128) -> Result<ContractCall> {
        Ok(self.call("burn", vec![address_to_scval(from)?, i128_to_scval(amount)]))
    }

    pub fn burn_from(&self, spender: &str, from: &str, amount: i128) -> Result<ContractCall> {
        Ok(self.call(
            "burn_from",
            vec![address_to_scval(spender)?, address_to_scval(from)?, i128_to_scval(amount)],
        ))
    }

    pub fn freeze_account(&self, account: &str) -> Result<ContractCall> {
        Ok(self.call("freeze_account", vec![address_to_scval(account)?]))
    }

    pub fn unfreeze_account(&self, account: &str) -> Result<ContractCall> {
        Ok(self.call("unfreeze_account", vec![address_to_scval(account)?]))
    }

    pub fn setup_multisig(&self, owners: &[String], threshold: u32) -> Result<ContractCall> {
        let owners = owners
            .iter()
            .map(|owner| address_to_scval(owner))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.call("setup_multisig", vec![vec_to_scval(owners)?, ScVal::U32(threshold)]))
    }

    pub fn propose_multisig_transaction(
        &self,
        owner: &str,
        operation: MultisigOperation,
        to: &str,
        amount: i128,
        expiration: u64,
    ) -> Result<ContractCall> {
        Ok(self.call(
            "propose_multisig_transaction",
            vec![
                address_to_scval(owner)?,
                symbol_to_scval(operation.as_str())?,
                address_to_scval(to)?,
                i128_to_scval(amount),
                ScVal::U64(expiration),
            ],
        ))
    }

    pub fn approve_multisig_transaction(&self, owner: &str, transaction_id: u64) -> Result<ContractCall> {
        Ok(self.call(
            "approve_multisig_transaction",
            vec![address_to_scval(owner)?, ScVal::U64(transaction_id)],
        ))
    }

    /// Dispatch a console request to the matching entry point.
    pub fn contract_call(&self, call: &TokenCall) -> Result<ContractCall> {
        match call {
            TokenCall::Initialize { admin, decimal, name, symbol } => {
                self.initialize(admin, *decimal, name, symbol)
            }
            TokenCall::Mint { to, amount } => self.mint(to, *amount),
            TokenCall::SetAdmin { new_admin } => self.set_admin(new_admin),
            TokenCall::Transfer { from, to, amount } => self.transfer(from, to, *amount),
            TokenCall::Approve { from, spender, amount, expiration_ledger } => {
                self.approve(from, spender, *amount, *expiration_ledger)
            }
            TokenCall::TransferFrom { spender, from, to, amount } => {
                self.transfer_from(spender, from, to, *amount)
            }
            TokenCall::Burn { from, amount } => self.burn(from, *amount),
            TokenCall::BurnFrom { spender, from, amount } => self.burn_from(spender, from, *amount),
            TokenCall::FreezeAccount { account } => self.freeze_account(account),
            TokenCall::UnfreezeAccount { account } => self.unfreeze_account(account),
            TokenCall::SetupMultisig { owners, threshold } => self.setup_multisig(owners, *threshold),
            TokenCall::ProposeMultisigTransaction { owner, operation, to, amount, expiration } => {
                self.propose_multisig_transaction(owner, *operation, to, *amount, *expiration)
            }
            TokenCall::ApproveMultisigTransaction { owner, transaction_id } => {
                self.approve_multisig_transaction(owner, *transaction_id)
            }
        }
    }
}
