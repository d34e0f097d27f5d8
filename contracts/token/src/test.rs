#![cfg(test)]
extern crate std;

use crate::{contract::Token, TokenClient};
use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, AuthorizedFunction, AuthorizedInvocation, Events, Ledger},
    vec, Address, Env, IntoVal, String, Symbol, Val, Vec,
};

fn create_token<'a>(e: &Env, admin: &Address) -> TokenClient<'a> {
    let token = TokenClient::new(e, &e.register_contract(None, Token {}));
    token.initialize(admin, &7, &"name".into_val(e), &"symbol".into_val(e));
    token
}

fn set_sequence(e: &Env, sequence: u32) {
    e.ledger().with_mut(|li| li.sequence_number = sequence);
}

struct Multisig<'a> {
    e: Env,
    owners: [Address; 3],
    token: TokenClient<'a>,
}

/// Token with three multisig owners and a threshold of two.
fn setup_multisig<'a>() -> Multisig<'a> {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let owners = [Address::generate(&e), Address::generate(&e), Address::generate(&e)];
    let token = create_token(&e, &admin);
    token.setup_multisig(
        &vec![&e, owners[0].clone(), owners[1].clone(), owners[2].clone()],
        &2,
    );

    Multisig { e, owners, token }
}

// ========== Token interface ==========

#[test]
fn test() {
    let e = Env::default();
    e.mock_all_auths();

    let admin1 = Address::generate(&e);
    let admin2 = Address::generate(&e);
    let user1 = Address::generate(&e);
    let user2 = Address::generate(&e);
    let user3 = Address::generate(&e);
    let token = create_token(&e, &admin1);

    token.mint(&user1, &1000);
    assert_eq!(
        e.auths(),
        std::vec![(
            admin1.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    token.address.clone(),
                    symbol_short!("mint"),
                    (&user1, 1000_i128).into_val(&e),
                )),
                sub_invocations: std::vec![]
            }
        )]
    );
    assert_eq!(token.balance(&user1), 1000);

    token.approve(&user2, &user3, &500, &200);
    assert_eq!(token.allowance(&user2, &user3), 500);

    token.transfer(&user1, &user2, &600);
    assert_eq!(
        e.auths(),
        std::vec![(
            user1.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    token.address.clone(),
                    symbol_short!("transfer"),
                    (&user1, &user2, 600_i128).into_val(&e),
                )),
                sub_invocations: std::vec![]
            }
        )]
    );
    assert_eq!(token.balance(&user1), 400);
    assert_eq!(token.balance(&user2), 600);

    token.transfer_from(&user3, &user2, &user1, &400);
    assert_eq!(token.balance(&user1), 800);
    assert_eq!(token.balance(&user2), 200);
    assert_eq!(token.allowance(&user2, &user3), 100);

    token.set_admin(&admin2);
    assert_eq!(token.admin(), admin2);

    assert_eq!(token.decimals(), 7);
    assert_eq!(token.name(), String::from_str(&e, "name"));
    assert_eq!(token.symbol(), String::from_str(&e, "symbol"));
}

#[test]
fn test_burn() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let user1 = Address::generate(&e);
    let user2 = Address::generate(&e);
    let token = create_token(&e, &admin);

    token.mint(&user1, &1000);
    token.approve(&user1, &user2, &500, &200);

    token.burn_from(&user2, &user1, &500);
    assert_eq!(token.allowance(&user1, &user2), 0);
    assert_eq!(token.balance(&user1), 500);

    token.burn(&user1, &500);
    assert_eq!(token.balance(&user1), 0);
}

#[test]
fn test_allowance_expires() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let user1 = Address::generate(&e);
    let user2 = Address::generate(&e);
    let token = create_token(&e, &admin);

    set_sequence(&e, 100);
    token.approve(&user1, &user2, &500, &105);
    assert_eq!(token.allowance(&user1, &user2), 500);

    set_sequence(&e, 105);
    assert_eq!(token.allowance(&user1, &user2), 500);

    set_sequence(&e, 106);
    assert_eq!(token.allowance(&user1, &user2), 0);
}

#[test]
#[should_panic(expected = "insufficient balance")]
fn transfer_insufficient_balance() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let user1 = Address::generate(&e);
    let user2 = Address::generate(&e);
    let token = create_token(&e, &admin);

    token.mint(&user1, &1000);
    token.transfer(&user1, &user2, &1001);
}

#[test]
#[should_panic(expected = "insufficient allowance")]
fn transfer_from_insufficient_allowance() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let user1 = Address::generate(&e);
    let user2 = Address::generate(&e);
    let user3 = Address::generate(&e);
    let token = create_token(&e, &admin);

    token.mint(&user1, &1000);
    token.approve(&user1, &user3, &100, &200);
    token.transfer_from(&user3, &user1, &user2, &101);
}

#[test]
#[should_panic(expected = "negative amount is not allowed")]
fn mint_negative_amount() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let token = create_token(&e, &admin);
    token.mint(&Address::generate(&e), &-1);
}

#[test]
#[should_panic(expected = "already initialized")]
fn initialize_already_initialized() {
    let e = Env::default();
    let admin = Address::generate(&e);
    let token = create_token(&e, &admin);

    token.initialize(&admin, &10, &"name".into_val(&e), &"symbol".into_val(&e));
}

#[test]
#[should_panic(expected = "Decimal must fit in a u8")]
fn decimal_is_over_max() {
    let e = Env::default();
    let admin = Address::generate(&e);
    let token = TokenClient::new(&e, &e.register_contract(None, Token {}));
    token.initialize(
        &admin,
        &(u32::from(u8::MAX) + 1),
        &"name".into_val(&e),
        &"symbol".into_val(&e),
    );
}

// ========== Freeze ==========

#[test]
#[should_panic(expected = "account is frozen")]
fn transfer_from_frozen_account_should_fail() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let user1 = Address::generate(&e);
    let user2 = Address::generate(&e);
    let token = create_token(&e, &admin);

    token.mint(&user1, &1000);
    token.freeze_account(&user1);
    token.transfer(&user1, &user2, &100);
}

#[test]
fn freeze_emits_event() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let user = Address::generate(&e);
    let token = create_token(&e, &admin);

    token.freeze_account(&user);

    let events = e.events().all();
    let (contract, topics, _data) = events.last().unwrap();
    let expected: Vec<Val> = (Symbol::new(&e, "freeze_account"), admin.clone(), user.clone()).into_val(&e);
    assert_eq!(contract, token.address);
    assert_eq!(topics, expected);
    assert!(token.is_frozen(&user));
}

#[test]
fn unfreeze_account_then_transfer() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let user1 = Address::generate(&e);
    let user2 = Address::generate(&e);
    let token = create_token(&e, &admin);

    token.mint(&user1, &1000);
    token.freeze_account(&user1);
    token.unfreeze_account(&user1);
    assert!(!token.is_frozen(&user1));

    token.transfer(&user1, &user2, &100);
    assert_eq!(token.balance(&user2), 100);
}

#[test]
#[should_panic(expected = "account is frozen")]
fn burn_from_frozen_account_should_fail() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let user1 = Address::generate(&e);
    let user2 = Address::generate(&e);
    let token = create_token(&e, &admin);

    token.mint(&user1, &1000);
    token.approve(&user1, &user2, &500, &200);
    token.freeze_account(&user1);
    token.burn_from(&user2, &user1, &100);
}

#[test]
fn frozen_account_can_still_receive() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let user1 = Address::generate(&e);
    let user2 = Address::generate(&e);
    let token = create_token(&e, &admin);

    token.mint(&user1, &1000);
    token.freeze_account(&user2);
    token.transfer(&user1, &user2, &250);
    assert_eq!(token.balance(&user2), 250);
}

// ========== Multisig ==========

#[test]
fn test_multisig_setup() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let owners = vec![&e, Address::generate(&e), Address::generate(&e), Address::generate(&e)];
    let token = create_token(&e, &admin);

    token.setup_multisig(&owners, &2);
    assert_eq!(
        e.auths(),
        std::vec![(
            admin.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    token.address.clone(),
                    Symbol::new(&e, "setup_multisig"),
                    (owners.clone(), 2_u32).into_val(&e),
                )),
                sub_invocations: std::vec![]
            }
        )]
    );

    assert_eq!(token.multisig_owners(), owners);
    assert_eq!(token.multisig_threshold(), 2);
}

#[test]
fn test_multisig_reconfiguration_drops_stale_approvals() {
    let Multisig { e, owners, token, .. } = setup_multisig();
    let recipient = Address::generate(&e);

    let id = token.propose_multisig_transaction(&owners[0], &symbol_short!("mint"), &recipient, &500, &1000);

    let replacements = [Address::generate(&e), Address::generate(&e)];
    token.setup_multisig(&vec![&e, replacements[0].clone(), replacements[1].clone()], &2);

    token.approve_multisig_transaction(&replacements[0], &id);
    assert!(!token.get_proposal(&id).executed);
    assert_eq!(token.balance(&recipient), 0);

    token.approve_multisig_transaction(&replacements[1], &id);
    assert!(token.get_proposal(&id).executed);
    assert_eq!(token.balance(&recipient), 500);
}

#[test]
fn test_multisig_mint_reaches_threshold() {
    let Multisig { e, owners, token, .. } = setup_multisig();
    let recipient = Address::generate(&e);

    let id = token.propose_multisig_transaction(&owners[0], &symbol_short!("mint"), &recipient, &300, &1000);
    assert_eq!(id, 0);
    assert_eq!(token.proposal_approvals(&id), vec![&e, owners[0].clone()]);
    assert!(!token.get_proposal(&id).executed);
    assert_eq!(token.balance(&recipient), 0);

    token.approve_multisig_transaction(&owners[1], &id);

    let proposal = token.get_proposal(&id);
    assert!(proposal.executed);
    assert_eq!(proposal.target, recipient);
    assert_eq!(token.balance(&recipient), 300);
}

#[test]
fn test_multisig_ids_are_sequential() {
    let Multisig { e, owners, token, .. } = setup_multisig();
    let recipient = Address::generate(&e);

    let first = token.propose_multisig_transaction(&owners[0], &symbol_short!("mint"), &recipient, &1, &1000);
    let second = token.propose_multisig_transaction(&owners[1], &symbol_short!("burn"), &recipient, &1, &1000);
    assert_eq!((first, second), (0, 1));
}

#[test]
fn test_multisig_duplicate_approval_is_ignored() {
    let Multisig { e, owners, token, .. } = setup_multisig();
    let recipient = Address::generate(&e);

    let id = token.propose_multisig_transaction(&owners[0], &symbol_short!("mint"), &recipient, &300, &1000);
    token.approve_multisig_transaction(&owners[0], &id);

    assert_eq!(token.proposal_approvals(&id).len(), 1);
    assert!(!token.get_proposal(&id).executed);
}

#[test]
fn test_multisig_transfer_spends_contract_balance() {
    let Multisig { e, owners, token, .. } = setup_multisig();
    let recipient = Address::generate(&e);

    token.mint(&token.address, &1000);
    let id = token.propose_multisig_transaction(&owners[0], &symbol_short!("transfer"), &recipient, &400, &1000);
    token.approve_multisig_transaction(&owners[2], &id);

    assert_eq!(token.balance(&token.address), 600);
    assert_eq!(token.balance(&recipient), 400);
}

#[test]
fn test_multisig_burn_debits_target() {
    let Multisig { e, owners, token, .. } = setup_multisig();
    let holder = Address::generate(&e);

    token.mint(&holder, &1000);
    let id = token.propose_multisig_transaction(&owners[1], &symbol_short!("burn"), &holder, &250, &1000);
    token.approve_multisig_transaction(&owners[2], &id);

    assert_eq!(token.balance(&holder), 750);
}

#[test]
fn test_multisig_threshold_one_executes_on_proposal() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let owner = Address::generate(&e);
    let recipient = Address::generate(&e);
    let token = create_token(&e, &admin);
    token.setup_multisig(&vec![&e, owner.clone()], &1);

    let id = token.propose_multisig_transaction(&owner, &symbol_short!("mint"), &recipient, &50, &1000);

    assert!(token.get_proposal(&id).executed);
    assert_eq!(token.balance(&recipient), 50);
}

#[test]
#[should_panic(expected = "sender is not a multisig owner")]
fn test_multisig_transaction_unauthorized() {
    let Multisig { e, token, .. } = setup_multisig();
    let outsider = Address::generate(&e);

    token.propose_multisig_transaction(&outsider, &symbol_short!("mint"), &outsider, &1, &1000);
}

#[test]
#[should_panic(expected = "unknown operation")]
fn test_multisig_rejects_unknown_operation() {
    let Multisig { e, owners, token, .. } = setup_multisig();
    let recipient = Address::generate(&e);

    token.propose_multisig_transaction(&owners[0], &symbol_short!("swap"), &recipient, &1, &1000);
}

#[test]
#[should_panic(expected = "transaction expired")]
fn test_multisig_expired_approval() {
    let Multisig { e, owners, token, .. } = setup_multisig();
    let recipient = Address::generate(&e);

    set_sequence(&e, 100);
    let id = token.propose_multisig_transaction(&owners[0], &symbol_short!("mint"), &recipient, &1, &120);

    set_sequence(&e, 121);
    token.approve_multisig_transaction(&owners[1], &id);
}

#[test]
fn test_multisig_approval_on_expiration_ledger() {
    let Multisig { e, owners, token, .. } = setup_multisig();
    let recipient = Address::generate(&e);

    set_sequence(&e, 100);
    let id = token.propose_multisig_transaction(&owners[0], &symbol_short!("mint"), &recipient, &1, &120);

    set_sequence(&e, 120);
    token.approve_multisig_transaction(&owners[1], &id);
    assert!(token.get_proposal(&id).executed);
}

#[test]
#[should_panic(expected = "expiration already passed")]
fn test_multisig_rejects_past_expiration() {
    let Multisig { e, owners, token, .. } = setup_multisig();
    let recipient = Address::generate(&e);

    set_sequence(&e, 100);
    token.propose_multisig_transaction(&owners[0], &symbol_short!("mint"), &recipient, &1, &99);
}

#[test]
#[should_panic(expected = "transaction already executed")]
fn test_multisig_cannot_approve_executed() {
    let Multisig { e, owners, token, .. } = setup_multisig();
    let recipient = Address::generate(&e);

    let id = token.propose_multisig_transaction(&owners[0], &symbol_short!("mint"), &recipient, &1, &1000);
    token.approve_multisig_transaction(&owners[1], &id);
    token.approve_multisig_transaction(&owners[2], &id);
}

#[test]
#[should_panic(expected = "transaction not found")]
fn test_multisig_unknown_proposal() {
    let Multisig { owners, token, .. } = setup_multisig();

    token.approve_multisig_transaction(&owners[0], &42);
}

#[test]
#[should_panic(expected = "invalid threshold")]
fn test_multisig_threshold_above_owner_count() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let token = create_token(&e, &admin);
    token.setup_multisig(&vec![&e, Address::generate(&e)], &2);
}

#[test]
#[should_panic(expected = "duplicate owner")]
fn test_multisig_duplicate_owners() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let owner = Address::generate(&e);
    let token = create_token(&e, &admin);
    token.setup_multisig(&vec![&e, owner.clone(), owner], &1);
}

#[test]
#[should_panic(expected = "owner list cannot be empty")]
fn test_multisig_empty_owners() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let token = create_token(&e, &admin);
    token.setup_multisig(&Vec::new(&e), &1);
}
