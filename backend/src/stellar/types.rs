use serde::{Deserialize, Serialize};
use shared::dto::account::{AccountSummary, AssetBalance};

use crate::error::{AppError, Result};

/// Account record as returned by Horizon `GET /accounts/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    pub account_id: String,
    /// Current sequence number; Horizon encodes it as a string
    pub sequence: String,
    #[serde(default)]
    pub balances: Vec<Balance>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Balance {
    pub balance: String,
    pub asset_type: String,
    pub asset_code: Option<String>,
    pub asset_issuer: Option<String>,
}

/// Horizon problem document (RFC 7807).
#[derive(Debug, Clone, Deserialize)]
pub struct Problem {
    pub title: String,
    #[serde(default)]
    pub detail: Option<String>,
}

impl AccountResponse {
    pub fn sequence_number(&self) -> Result<i64> {
        self.sequence.parse::<i64>().map_err(|e| {
            AppError::Account(format!("Invalid sequence number '{}': {}", self.sequence, e))
        })
    }

    pub fn native_balance(&self) -> Option<&str> {
        self.balances
            .iter()
            .find(|b| b.asset_type == "native")
            .map(|b| b.balance.as_str())
    }

    pub fn to_summary(&self) -> Result<AccountSummary> {
        Ok(AccountSummary {
            account_id: self.account_id.clone(),
            sequence: self.sequence_number()?,
            native_balance: self.native_balance().unwrap_or("0").to_string(),
            balances: self
                .balances
                .iter()
                .map(|b| AssetBalance {
                    asset_type: b.asset_type.clone(),
                    asset_code: b.asset_code.clone(),
                    asset_issuer: b.asset_issuer.clone(),
                    balance: b.balance.clone(),
                })
                .collect(),
        })
    }
}
