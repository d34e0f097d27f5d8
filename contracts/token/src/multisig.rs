//! Multisig owner set and proposal storage.
//!
//! Owners and threshold live in instance storage; each proposal and its
//! approval list are persistent entries keyed by proposal id.

use soroban_sdk::{contracttype, Address, Env, Symbol, Vec};

use crate::storage_types::{DataKey, BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD};

pub const OPERATIONS: [&str; 3] = ["transfer", "mint", "burn"];

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct MultisigTransaction {
    pub operation: Symbol,
    pub target: Address,
    pub amount: i128,
    /// Last ledger sequence at which the proposal can still be approved
    pub expiration: u64,
    pub executed: bool,
}

impl MultisigTransaction {
    pub fn is_expired(&self, e: &Env) -> bool {
        u64::from(e.ledger().sequence()) > self.expiration
    }
}

pub fn is_supported_operation(e: &Env, operation: &Symbol) -> bool {
    OPERATIONS
        .iter()
        .any(|name| Symbol::new(e, name) == *operation)
}

// region: --- Configuration

pub fn write_config(e: &Env, owners: &Vec<Address>, threshold: u32) {
    e.storage().instance().set(&DataKey::MultisigOwners, owners);
    e.storage().instance().set(&DataKey::MultisigThreshold, &threshold);
}

pub fn read_owners(e: &Env) -> Vec<Address> {
    e.storage()
        .instance()
        .get(&DataKey::MultisigOwners)
        .unwrap_or_else(|| panic!("multisig not configured"))
}

pub fn read_threshold(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get(&DataKey::MultisigThreshold)
        .unwrap_or_else(|| panic!("multisig not configured"))
}

pub fn require_owner(e: &Env, owner: &Address) {
    if !read_owners(e).contains(owner) {
        panic!("sender is not a multisig owner");
    }
}

pub fn has_duplicates(owners: &Vec<Address>) -> bool {
    for (i, owner) in owners.iter().enumerate() {
        if owners.iter().skip(i + 1).any(|other| other == owner) {
            return true;
        }
    }
    false
}

// endregion: --- Configuration

// region: --- Proposals

pub fn next_proposal_id(e: &Env) -> u64 {
    let id: u64 = e
        .storage()
        .instance()
        .get(&DataKey::NextProposalId)
        .unwrap_or(0);
    e.storage().instance().set(&DataKey::NextProposalId, &(id + 1));
    id
}

pub fn read_proposal(e: &Env, id: u64) -> MultisigTransaction {
    let key = DataKey::Proposal(id);
    let Some(proposal) = e.storage().persistent().get::<_, MultisigTransaction>(&key) else {
        panic!("transaction not found");
    };
    e.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
    proposal
}

pub fn write_proposal(e: &Env, id: u64, proposal: &MultisigTransaction) {
    let key = DataKey::Proposal(id);
    e.storage().persistent().set(&key, proposal);
    e.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn read_approvals(e: &Env, id: u64) -> Vec<Address> {
    e.storage()
        .persistent()
        .get(&DataKey::Approvals(id))
        .unwrap_or_else(|| Vec::new(e))
}

/// Approvals from accounts that are still owners; a reconfigured owner set
/// does not inherit approvals from removed owners.
pub fn count_owner_approvals(e: &Env, id: u64) -> u32 {
    let owners = read_owners(e);
    read_approvals(e, id)
        .iter()
        .filter(|approver| owners.contains(approver))
        .count() as u32
}

/// Record `owner`'s approval. Returns false when it was already recorded.
pub fn add_approval(e: &Env, id: u64, owner: &Address) -> bool {
    let mut approvals = read_approvals(e, id);
    if approvals.contains(owner) {
        return false;
    }
    approvals.push_back(owner.clone());

    let key = DataKey::Approvals(id);
    e.storage().persistent().set(&key, &approvals);
    e.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
    true
}

// endregion: --- Proposals
