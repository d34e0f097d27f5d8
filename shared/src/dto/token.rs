//! # Token Contract Calls
//!
//! One [`TokenCall`] variant per entry point of the token contract. The UI builds
//! a `TokenCall` from its form fields and the backend turns it into a
//! contract-call operation.
//!
//! ## Wire Format
//!
//! Variants are tagged by `function` and use the contract's snake_case entry
//! point names. Amounts are `i128` and travel as decimal strings so they
//! survive JavaScript number handling:
//!
//! ```text
//! {
//!   "function": "transfer",
//!   "from": "GDOBGW2B4PHXXEOWAACCEVDZJJ6Q2EUZGTK5ZQNEVZZFP4VC3MD4223B",
//!   "to": "GA5ZSEJYB37JRC5AVCIA5MOP4RHTM335X2KGX3IHOJAPP5RE34K4KZVN",
//!   "amount": "2500000"
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::utils::truncate_address;

/// Operation a multisig proposal executes once it reaches quorum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MultisigOperation {
    #[default]
    Transfer,
    Mint,
    Burn,
}

impl MultisigOperation {
    pub const ALL: [MultisigOperation; 3] = [
        MultisigOperation::Transfer,
        MultisigOperation::Mint,
        MultisigOperation::Burn,
    ];

    /// Symbol passed to the contract.
    pub fn as_str(&self) -> &'static str {
        match self {
            MultisigOperation::Transfer => "transfer",
            MultisigOperation::Mint => "mint",
            MultisigOperation::Burn => "burn",
        }
    }
}

impl std::str::FromStr for MultisigOperation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "transfer" => Ok(MultisigOperation::Transfer),
            "mint" => Ok(MultisigOperation::Mint),
            "burn" => Ok(MultisigOperation::Burn),
            other => Err(format!("unknown multisig operation: {}", other)),
        }
    }
}

/// A call to one entry point of the token contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "function", rename_all = "snake_case")]
pub enum TokenCall {
    Initialize {
        admin: String,
        decimal: u32,
        name: String,
        symbol: String,
    },
    Mint {
        to: String,
        #[serde(with = "amount")]
        amount: i128,
    },
    SetAdmin {
        new_admin: String,
    },
    Transfer {
        from: String,
        to: String,
        #[serde(with = "amount")]
        amount: i128,
    },
    Approve {
        from: String,
        spender: String,
        #[serde(with = "amount")]
        amount: i128,
        expiration_ledger: u32,
    },
    TransferFrom {
        spender: String,
        from: String,
        to: String,
        #[serde(with = "amount")]
        amount: i128,
    },
    Burn {
        from: String,
        #[serde(with = "amount")]
        amount: i128,
    },
    BurnFrom {
        spender: String,
        from: String,
        #[serde(with = "amount")]
        amount: i128,
    },
    FreezeAccount {
        account: String,
    },
    UnfreezeAccount {
        account: String,
    },
    SetupMultisig {
        owners: Vec<String>,
        threshold: u32,
    },
    ProposeMultisigTransaction {
        owner: String,
        operation: MultisigOperation,
        to: String,
        #[serde(with = "amount")]
        amount: i128,
        expiration: u64,
    },
    ApproveMultisigTransaction {
        owner: String,
        transaction_id: u64,
    },
}

impl TokenCall {
    /// Name of the contract entry point this call invokes.
    pub fn function_name(&self) -> &'static str {
        match self {
            TokenCall::Initialize { .. } => "initialize",
            TokenCall::Mint { .. } => "mint",
            TokenCall::SetAdmin { .. } => "set_admin",
            TokenCall::Transfer { .. } => "transfer",
            TokenCall::Approve { .. } => "approve",
            TokenCall::TransferFrom { .. } => "transfer_from",
            TokenCall::Burn { .. } => "burn",
            TokenCall::BurnFrom { .. } => "burn_from",
            TokenCall::FreezeAccount { .. } => "freeze_account",
            TokenCall::UnfreezeAccount { .. } => "unfreeze_account",
            TokenCall::SetupMultisig { .. } => "setup_multisig",
            TokenCall::ProposeMultisigTransaction { .. } => "propose_multisig_transaction",
            TokenCall::ApproveMultisigTransaction { .. } => "approve_multisig_transaction",
        }
    }

    /// Allowance spender that must sign as the transaction source.
    pub fn spender(&self) -> Option<&str> {
        match self {
            TokenCall::TransferFrom { spender, .. } | TokenCall::BurnFrom { spender, .. } => Some(spender),
            _ => None,
        }
    }

    /// One-line summary used in notifications.
    pub fn describe(&self) -> String {
        match self {
            TokenCall::Initialize { name, symbol, decimal, .. } => {
                format!("Initialize {} ({}) with {} decimals", name, symbol, decimal)
            }
            TokenCall::Mint { to, amount } => {
                format!("Mint {} tokens to {}", amount, truncate_address(to))
            }
            TokenCall::SetAdmin { new_admin } => {
                format!("Set admin to {}", truncate_address(new_admin))
            }
            TokenCall::Transfer { to, amount, .. } => {
                format!("Transferring {} tokens to {}", amount, truncate_address(to))
            }
            TokenCall::Approve { spender, amount, .. } => {
                format!("Approving {} tokens for {}", amount, truncate_address(spender))
            }
            TokenCall::TransferFrom { from, to, amount, .. } => format!(
                "Transferring {} tokens from {} to {}",
                amount,
                truncate_address(from),
                truncate_address(to)
            ),
            TokenCall::Burn { amount, .. } => format!("Burning {} tokens", amount),
            TokenCall::BurnFrom { from, amount, .. } => {
                format!("Burning {} tokens from {}", amount, truncate_address(from))
            }
            TokenCall::FreezeAccount { account } => {
                format!("Freezing {}", truncate_address(account))
            }
            TokenCall::UnfreezeAccount { account } => {
                format!("Unfreezing {}", truncate_address(account))
            }
            TokenCall::SetupMultisig { owners, threshold } => {
                format!("Multisig with {} owners, threshold {}", owners.len(), threshold)
            }
            TokenCall::ProposeMultisigTransaction { operation, to, amount, .. } => format!(
                "Proposing {} of {} tokens for {}",
                operation.as_str(),
                amount,
                truncate_address(to)
            ),
            TokenCall::ApproveMultisigTransaction { transaction_id, .. } => {
                format!("Approving multisig transaction #{}", transaction_id)
            }
        }
    }
}

/// `i128` amounts as decimal strings.
///
/// JSON integers are accepted on input up to the range the JSON parser keeps
/// exact (`u64`); larger amounts must be sent as strings.
pub mod amount {
    use std::fmt;

    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &i128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i128, D::Error> {
        deserializer.deserialize_any(AmountVisitor)
    }

    struct AmountVisitor;

    impl<'de> Visitor<'de> for AmountVisitor {
        type Value = i128;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an integer amount or a decimal string")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i128, E> {
            Ok(v.into())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i128, E> {
            Ok(v.into())
        }

        fn visit_i128<E: de::Error>(self, v: i128) -> Result<i128, E> {
            Ok(v)
        }

        fn visit_u128<E: de::Error>(self, v: u128) -> Result<i128, E> {
            i128::try_from(v).map_err(|_| E::custom(format!("amount {} out of range", v)))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<i128, E> {
            Err(E::custom(format!(
                "amount {} is not an exact integer, send it as a string",
                v
            )))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<i128, E> {
            v.trim()
                .parse::<i128>()
                .map_err(|e| E::custom(format!("invalid amount '{}': {}", v, e)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const FROM: &str = "GDOBGW2B4PHXXEOWAACCEVDZJJ6Q2EUZGTK5ZQNEVZZFP4VC3MD4223B";
    const TO: &str = "GA5ZSEJYB37JRC5AVCIA5MOP4RHTM335X2KGX3IHOJAPP5RE34K4KZVN";

    #[test]
    fn test_transfer_wire_format() {
        let call = TokenCall::Transfer {
            from: FROM.to_string(),
            to: TO.to_string(),
            amount: 170_141_183_460_469_231_731_687_303_715_884_105_727,
        };

        let value = serde_json::to_value(&call).unwrap();
        assert_eq!(value["function"], "transfer");
        assert_eq!(value["amount"], "170141183460469231731687303715884105727");

        let back: TokenCall = serde_json::from_value(value).unwrap();
        assert_eq!(back, call);
    }

    #[test]
    fn test_amount_accepts_json_number() {
        let call: TokenCall = serde_json::from_value(json!({
            "function": "burn",
            "from": FROM,
            "amount": 42
        }))
        .unwrap();

        assert_eq!(call, TokenCall::Burn { from: FROM.to_string(), amount: 42 });
    }

    #[test]
    fn test_amount_accepts_numbers_above_i64() {
        let call: TokenCall = serde_json::from_str(&format!(
            r#"{{"function":"mint","to":"{}","amount":{}}}"#,
            TO,
            u64::MAX
        ))
        .unwrap();

        assert_eq!(call, TokenCall::Mint { to: TO.to_string(), amount: u64::MAX as i128 });
    }

    #[test]
    fn test_amount_rejects_inexact_number() {
        let result = serde_json::from_str::<TokenCall>(&format!(
            r#"{{"function":"mint","to":"{}","amount":1.5}}"#,
            TO
        ));
        assert!(result.is_err());
    }

    #[test]
    fn test_amount_rejects_garbage() {
        let result = serde_json::from_value::<TokenCall>(json!({
            "function": "mint",
            "to": TO,
            "amount": "12abc"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_function_names_match_contract() {
        let propose = TokenCall::ProposeMultisigTransaction {
            owner: FROM.to_string(),
            operation: MultisigOperation::Mint,
            to: TO.to_string(),
            amount: 10,
            expiration: 5000,
        };
        assert_eq!(propose.function_name(), "propose_multisig_transaction");

        let value = serde_json::to_value(&propose).unwrap();
        assert_eq!(value["function"], "propose_multisig_transaction");
        assert_eq!(value["operation"], "mint");

        let freeze = TokenCall::FreezeAccount { account: TO.to_string() };
        assert_eq!(freeze.function_name(), "freeze_account");
    }

    #[test]
    fn test_describe_truncates_addresses() {
        let call = TokenCall::Transfer {
            from: FROM.to_string(),
            to: TO.to_string(),
            amount: 5,
        };
        assert_eq!(call.describe(), "Transferring 5 tokens to GA5Z...KZVN");
    }

    #[test]
    fn test_multisig_operation_parse() {
        assert_eq!("burn".parse::<MultisigOperation>(), Ok(MultisigOperation::Burn));
        assert!("swap".parse::<MultisigOperation>().is_err());
    }
}
