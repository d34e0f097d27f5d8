//! # Form Parsing
//!
//! Pure functions turning the console's text fields into a [`TokenCall`].
//! Nothing here checks business rules (balances, ownership, thresholds);
//! the contract owns those. A field either parses into the type its entry
//! point takes or the action is refused with a [`FormError`] and no request
//! goes out.

use shared::dto::token::{MultisigOperation, TokenCall};
use shared::utils::parse_address_list;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{field} must be a whole number, got '{value}'")]
    NotANumber { field: &'static str, value: String },

    #[error("{field} is out of range: '{value}'")]
    OutOfRange { field: &'static str, value: String },

    #[error("Unknown multisig function '{0}'")]
    UnknownOperation(String),

    #[error("{field} must be the connected account; switch wallets to act as {spender}")]
    NotInvoker { field: &'static str, spender: String },
}

pub type FormResult<T> = Result<T, FormError>;

// region: --- Field parsers

pub fn parse_address(field: &'static str, text: &str) -> FormResult<String> {
    let address = text.trim();
    if address.is_empty() {
        return Err(FormError::Missing(field));
    }
    Ok(address.to_string())
}

fn parse_integer<T>(field: &'static str, text: &str) -> FormResult<T>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    let value = text.trim();
    if value.is_empty() {
        return Err(FormError::Missing(field));
    }

    value.parse::<T>().map_err(|e| match e.kind() {
        std::num::IntErrorKind::PosOverflow | std::num::IntErrorKind::NegOverflow => {
            FormError::OutOfRange { field, value: value.to_string() }
        }
        _ => FormError::NotANumber { field, value: value.to_string() },
    })
}

/// Token amount in base units.
///
/// ```rust
/// use token_web::forms::parse_amount;
///
/// assert_eq!(parse_amount("Amount", " 2500 "), Ok(2500));
/// assert!(parse_amount("Amount", "2.5").is_err());
/// ```
pub fn parse_amount(field: &'static str, text: &str) -> FormResult<i128> {
    parse_integer(field, text)
}

pub fn parse_u32(field: &'static str, text: &str) -> FormResult<u32> {
    parse_integer(field, text)
}

pub fn parse_u64(field: &'static str, text: &str) -> FormResult<u64> {
    parse_integer(field, text)
}

/// Comma separated owner addresses.
pub fn parse_owners(text: &str) -> FormResult<Vec<String>> {
    let owners = parse_address_list(text);
    if owners.is_empty() {
        return Err(FormError::Missing("Owners"));
    }
    Ok(owners)
}

pub fn parse_operation(text: &str) -> FormResult<MultisigOperation> {
    text.parse()
        .map_err(|_| FormError::UnknownOperation(text.trim().to_string()))
}

// endregion: --- Field parsers

// region: --- Calls

pub fn transfer(from: &str, to: &str, amount: &str) -> FormResult<TokenCall> {
    Ok(TokenCall::Transfer {
        from: parse_address("Source account", from)?,
        to: parse_address("Recipient", to)?,
        amount: parse_amount("Amount", amount)?,
    })
}

pub fn approve(from: &str, spender: &str, amount: &str, expiration_ledger: &str) -> FormResult<TokenCall> {
    Ok(TokenCall::Approve {
        from: parse_address("Source account", from)?,
        spender: parse_address("Spender", spender)?,
        amount: parse_amount("Allowance", amount)?,
        expiration_ledger: parse_u32("Expiration ledger", expiration_ledger)?,
    })
}

/// Allowance spenders authorize through the envelope source, so the spender
/// has to be the account that signs.
fn parse_spender(field: &'static str, text: &str, invoker: &str) -> FormResult<String> {
    let spender = parse_address(field, text)?;
    if spender != invoker.trim() {
        return Err(FormError::NotInvoker { field, spender });
    }
    Ok(spender)
}

pub fn transfer_from(invoker: &str, spender: &str, from: &str, to: &str, amount: &str) -> FormResult<TokenCall> {
    Ok(TokenCall::TransferFrom {
        spender: parse_spender("Spender", spender, invoker)?,
        from: parse_address("From", from)?,
        to: parse_address("Recipient", to)?,
        amount: parse_amount("Amount", amount)?,
    })
}

pub fn burn(from: &str, amount: &str) -> FormResult<TokenCall> {
    Ok(TokenCall::Burn {
        from: parse_address("Source account", from)?,
        amount: parse_amount("Burn amount", amount)?,
    })
}

pub fn burn_from(invoker: &str, spender: &str, from: &str, amount: &str) -> FormResult<TokenCall> {
    Ok(TokenCall::BurnFrom {
        spender: parse_spender("Burn from spender", spender, invoker)?,
        from: parse_address("Burn from account", from)?,
        amount: parse_amount("Burn from amount", amount)?,
    })
}

pub fn freeze(account: &str) -> FormResult<TokenCall> {
    Ok(TokenCall::FreezeAccount {
        account: parse_address("Account to freeze", account)?,
    })
}

pub fn unfreeze(account: &str) -> FormResult<TokenCall> {
    Ok(TokenCall::UnfreezeAccount {
        account: parse_address("Account to unfreeze", account)?,
    })
}

pub fn setup_multisig(owners: &str, threshold: &str) -> FormResult<TokenCall> {
    Ok(TokenCall::SetupMultisig {
        owners: parse_owners(owners)?,
        threshold: parse_u32("Threshold", threshold)?,
    })
}

pub fn propose(owner: &str, operation: &str, to: &str, amount: &str, expiration: &str) -> FormResult<TokenCall> {
    Ok(TokenCall::ProposeMultisigTransaction {
        owner: parse_address("Owner", owner)?,
        operation: parse_operation(operation)?,
        to: parse_address("Target", to)?,
        amount: parse_amount("Amount", amount)?,
        expiration: parse_u64("Expiration", expiration)?,
    })
}

pub fn approve_proposal(owner: &str, transaction_id: &str) -> FormResult<TokenCall> {
    Ok(TokenCall::ApproveMultisigTransaction {
        owner: parse_address("Owner", owner)?,
        transaction_id: parse_u64("Transaction ID", transaction_id)?,
    })
}

pub fn mint(to: &str, amount: &str) -> FormResult<TokenCall> {
    Ok(TokenCall::Mint {
        to: parse_address("Mint recipient", to)?,
        amount: parse_amount("Mint amount", amount)?,
    })
}

pub fn set_admin(new_admin: &str) -> FormResult<TokenCall> {
    Ok(TokenCall::SetAdmin {
        new_admin: parse_address("New admin", new_admin)?,
    })
}

// endregion: --- Calls
