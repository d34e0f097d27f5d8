use super::types::*;
use crate::error::{AppError, Result};
use reqwest::{Client, StatusCode};
use tracing::{debug, error};

/// Minimal Horizon client: only account loading is needed to build transactions.
#[derive(Clone)]
pub struct HorizonClient {
    client: Client,
    base_url: String,
}

impl HorizonClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Load an account record (sequence number and balances).
    pub async fn load_account(&self, account_id: &str) -> Result<AccountResponse> {
        let url = format!("{}/accounts/{}", self.base_url, account_id);

        debug!("Loading account from: {}", url);

        let response = self.client.get(&url).send().await?;

        match response.status() {
            status if status.is_success() => Ok(response.json::<AccountResponse>().await?),
            StatusCode::NOT_FOUND => Err(AppError::Account(format!(
                "Account {} not found; fund it with friendbot first",
                account_id
            ))),
            StatusCode::BAD_REQUEST => {
                let problem = response.json::<Problem>().await.ok();
                Err(AppError::InvalidInput(
                    problem
                        .and_then(|p| p.detail.or(Some(p.title)))
                        .unwrap_or_else(|| format!("Invalid account id: {}", account_id)),
                ))
            }
            status => {
                error!("Horizon API error: {}", status);
                Err(AppError::StellarRpc(format!("Horizon API error: {}", status)))
            }
        }
    }
}
