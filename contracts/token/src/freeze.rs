use soroban_sdk::{Address, Env};

use crate::storage_types::{DataKey, BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD};

pub fn is_frozen(e: &Env, account: &Address) -> bool {
    let key = DataKey::Frozen(account.clone());
    e.storage().persistent().get::<_, bool>(&key).unwrap_or(false)
}

pub fn write_frozen(e: &Env, account: &Address, frozen: bool) {
    let key = DataKey::Frozen(account.clone());
    if frozen {
        e.storage().persistent().set(&key, &true);
        e.storage()
            .persistent()
            .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
    } else {
        e.storage().persistent().remove(&key);
    }
}

pub fn check_not_frozen(e: &Env, account: &Address) {
    if is_frozen(e, account) {
        panic!("account is frozen");
    }
}
