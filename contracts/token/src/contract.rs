//! Token entry points.
//!
//! A standard token (balances, allowances, burn, metadata) extended with
//! admin-controlled account freezing and a multisig owner set that can
//! propose and approve mint, burn and transfer operations.

use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Symbol, Vec};

use crate::admin::{has_administrator, read_administrator, write_administrator};
use crate::allowance::{read_allowance, spend_allowance, write_allowance};
use crate::balance::{read_balance, receive_balance, spend_balance};
use crate::freeze::{self, check_not_frozen, write_frozen};
use crate::metadata::{read_decimal, read_name, read_symbol, write_metadata, TokenMetadata};
use crate::multisig::{self, MultisigTransaction};
use crate::storage_types::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};

fn check_nonnegative_amount(amount: i128) {
    if amount < 0 {
        panic!("negative amount is not allowed: {}", amount)
    }
}

fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// region: --- Events

fn emit_mint(e: &Env, admin: Address, to: Address, amount: i128) {
    e.events().publish((symbol_short!("mint"), admin, to), amount);
}

fn emit_transfer(e: &Env, from: Address, to: Address, amount: i128) {
    e.events().publish((symbol_short!("transfer"), from, to), amount);
}

fn emit_burn(e: &Env, from: Address, amount: i128) {
    e.events().publish((symbol_short!("burn"), from), amount);
}

fn emit_account_event(e: &Env, name: &str, admin: Address, account: Address) {
    e.events().publish((Symbol::new(e, name), admin, account), ());
}

// endregion: --- Events

#[contract]
pub struct Token;

#[contractimpl]
impl Token {
    pub fn initialize(e: Env, admin: Address, decimal: u32, name: String, symbol: String) {
        if has_administrator(&e) {
            panic!("already initialized")
        }
        if decimal > u8::MAX.into() {
            panic!("Decimal must fit in a u8");
        }

        write_administrator(&e, &admin);
        write_metadata(&e, TokenMetadata { decimal, name, symbol });
    }

    pub fn mint(e: Env, to: Address, amount: i128) {
        check_nonnegative_amount(amount);
        let admin = read_administrator(&e);
        admin.require_auth();

        bump_instance(&e);

        receive_balance(&e, to.clone(), amount);
        emit_mint(&e, admin, to, amount);
    }

    pub fn set_admin(e: Env, new_admin: Address) {
        let admin = read_administrator(&e);
        admin.require_auth();

        bump_instance(&e);

        write_administrator(&e, &new_admin);
        e.events().publish((symbol_short!("set_admin"), admin), new_admin);
    }

    pub fn admin(e: Env) -> Address {
        read_administrator(&e)
    }

    // region: --- Freeze

    pub fn freeze_account(e: Env, account: Address) {
        let admin = read_administrator(&e);
        admin.require_auth();

        bump_instance(&e);

        write_frozen(&e, &account, true);
        emit_account_event(&e, "freeze_account", admin, account);
    }

    pub fn unfreeze_account(e: Env, account: Address) {
        let admin = read_administrator(&e);
        admin.require_auth();

        bump_instance(&e);

        write_frozen(&e, &account, false);
        emit_account_event(&e, "unfreeze_account", admin, account);
    }

    pub fn is_frozen(e: Env, account: Address) -> bool {
        freeze::is_frozen(&e, &account)
    }

    // endregion: --- Freeze

    // region: --- Token interface

    pub fn allowance(e: Env, from: Address, spender: Address) -> i128 {
        bump_instance(&e);
        read_allowance(&e, from, spender).amount
    }

    pub fn approve(e: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();

        check_nonnegative_amount(amount);

        bump_instance(&e);

        write_allowance(&e, from.clone(), spender.clone(), amount, expiration_ledger);
        e.events().publish(
            (symbol_short!("approve"), from, spender),
            (amount, expiration_ledger),
        );
    }

    pub fn balance(e: Env, id: Address) -> i128 {
        bump_instance(&e);
        read_balance(&e, id)
    }

    pub fn transfer(e: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();

        check_nonnegative_amount(amount);

        bump_instance(&e);
        check_not_frozen(&e, &from);

        spend_balance(&e, from.clone(), amount);
        receive_balance(&e, to.clone(), amount);
        emit_transfer(&e, from, to, amount);
    }

    pub fn transfer_from(e: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();

        check_nonnegative_amount(amount);

        bump_instance(&e);
        check_not_frozen(&e, &from);

        spend_allowance(&e, from.clone(), spender, amount);
        spend_balance(&e, from.clone(), amount);
        receive_balance(&e, to.clone(), amount);
        emit_transfer(&e, from, to, amount);
    }

    pub fn burn(e: Env, from: Address, amount: i128) {
        from.require_auth();

        check_nonnegative_amount(amount);

        bump_instance(&e);
        check_not_frozen(&e, &from);

        spend_balance(&e, from.clone(), amount);
        emit_burn(&e, from, amount);
    }

    pub fn burn_from(e: Env, spender: Address, from: Address, amount: i128) {
        spender.require_auth();

        check_nonnegative_amount(amount);

        bump_instance(&e);
        check_not_frozen(&e, &from);

        spend_allowance(&e, from.clone(), spender, amount);
        spend_balance(&e, from.clone(), amount);
        emit_burn(&e, from, amount);
    }

    pub fn decimals(e: Env) -> u32 {
        read_decimal(&e)
    }

    pub fn name(e: Env) -> String {
        read_name(&e)
    }

    pub fn symbol(e: Env) -> String {
        read_symbol(&e)
    }

    // endregion: --- Token interface

    // region: --- Multisig

    pub fn setup_multisig(e: Env, owners: Vec<Address>, threshold: u32) {
        let admin = read_administrator(&e);
        admin.require_auth();

        if owners.is_empty() {
            panic!("owner list cannot be empty");
        }
        if multisig::has_duplicates(&owners) {
            panic!("duplicate owner");
        }
        if threshold == 0 || threshold > owners.len() {
            panic!("invalid threshold");
        }

        bump_instance(&e);

        multisig::write_config(&e, &owners, threshold);
        e.events().publish(
            (Symbol::new(&e, "setup_multisig"), admin),
            (owners.len(), threshold),
        );
    }

    pub fn propose_multisig_transaction(
        e: Env,
        owner: Address,
        function: Symbol,
        to: Address,
        amount: i128,
        expiration: u64,
    ) -> u64 {
        owner.require_auth();
        multisig::require_owner(&e, &owner);

        if !multisig::is_supported_operation(&e, &function) {
            panic!("unknown operation");
        }
        check_nonnegative_amount(amount);
        if expiration < u64::from(e.ledger().sequence()) {
            panic!("expiration already passed");
        }

        bump_instance(&e);

        let transaction_id = multisig::next_proposal_id(&e);
        let proposal = MultisigTransaction {
            operation: function.clone(),
            target: to.clone(),
            amount,
            expiration,
            executed: false,
        };
        multisig::write_proposal(&e, transaction_id, &proposal);
        multisig::add_approval(&e, transaction_id, &owner);

        e.events().publish(
            (Symbol::new(&e, "propose_multisig_transaction"), owner),
            (transaction_id, function, to, amount, expiration),
        );

        execute_if_approved(&e, transaction_id, proposal);
        transaction_id
    }

    pub fn approve_multisig_transaction(e: Env, owner: Address, transaction_id: u64) {
        owner.require_auth();
        multisig::require_owner(&e, &owner);

        let proposal = multisig::read_proposal(&e, transaction_id);
        if proposal.executed {
            panic!("transaction already executed");
        }
        if proposal.is_expired(&e) {
            panic!("transaction expired");
        }

        bump_instance(&e);

        if !multisig::add_approval(&e, transaction_id, &owner) {
            return;
        }

        e.events().publish(
            (Symbol::new(&e, "approve_multisig_transaction"), owner),
            transaction_id,
        );

        execute_if_approved(&e, transaction_id, proposal);
    }

    pub fn multisig_owners(e: Env) -> Vec<Address> {
        multisig::read_owners(&e)
    }

    pub fn multisig_threshold(e: Env) -> u32 {
        multisig::read_threshold(&e)
    }

    pub fn get_proposal(e: Env, transaction_id: u64) -> MultisigTransaction {
        multisig::read_proposal(&e, transaction_id)
    }

    pub fn proposal_approvals(e: Env, transaction_id: u64) -> Vec<Address> {
        multisig::read_approvals(&e, transaction_id)
    }

    // endregion: --- Multisig
}

/// Run `proposal` once its approvals reach the threshold.
fn execute_if_approved(e: &Env, transaction_id: u64, mut proposal: MultisigTransaction) {
    if multisig::count_owner_approvals(e, transaction_id) < multisig::read_threshold(e) {
        return;
    }

    let target = proposal.target.clone();
    let amount = proposal.amount;

    if proposal.operation == symbol_short!("transfer") {
        let treasury = e.current_contract_address();
        spend_balance(e, treasury.clone(), amount);
        receive_balance(e, target.clone(), amount);
        emit_transfer(e, treasury, target.clone(), amount);
    } else if proposal.operation == symbol_short!("mint") {
        receive_balance(e, target.clone(), amount);
        emit_mint(e, e.current_contract_address(), target.clone(), amount);
    } else if proposal.operation == symbol_short!("burn") {
        spend_balance(e, target.clone(), amount);
        emit_burn(e, target.clone(), amount);
    } else {
        panic!("unknown operation");
    }

    proposal.executed = true;
    multisig::write_proposal(e, transaction_id, &proposal);

    e.events().publish(
        (Symbol::new(e, "execute_multisig_transaction"), transaction_id),
        (proposal.operation, target, amount),
    );
}
