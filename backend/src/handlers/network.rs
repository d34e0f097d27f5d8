//! # Network & Account Handlers
//!
//! ## Endpoints
//!
//! - `GET /api/network` - contract id, passphrase and endpoints the console should use
//! - `GET /api/accounts/{account_id}` - sequence number and balances of an account
//!
//! ## Request Examples
//!
//! ```bash
//! curl "http://localhost:3001/api/network"
//! curl "http://localhost:3001/api/accounts/GDOBGW2B4PHXXEOWAACCEVDZJJ6Q2EUZGTK5ZQNEVZZFP4VC3MD4223B"
//! ```

use axum::{
    extract::{Path, State},
    Json,
};
use shared::dto::account::AccountSummary;
use shared::dto::soroban::NetworkInfo;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::error::Result;
use crate::services::TokenService;

/// Network configuration for the console.
///
/// **Route**: `GET /api/network`
///
/// # Returns
///
/// Success (200): `Json<NetworkInfo>`. `latest_ledger` is omitted when Soroban RPC
/// cannot be reached, so the console still learns which contract to target.
#[instrument(skip(service))]
pub async fn get_network(State(service): State<Arc<TokenService>>) -> Json<NetworkInfo> {
    Json(service.network_info().await)
}

/// Load an account from Horizon.
///
/// **Route**: `GET /api/accounts/{account_id}`
///
/// # Returns
///
/// Success (200): `Json<AccountSummary>`
///
/// Error (400): not a `G...` address
/// Error (404): account does not exist (not funded yet)
/// Error (502): Horizon unreachable
///
/// # Example
///
/// ```json
/// {
///   "account_id": "GDOBGW2B4PHXXEOWAACCEVDZJJ6Q2EUZGTK5ZQNEVZZFP4VC3MD4223B",
///   "sequence": 4389476239032320,
///   "native_balance": "9999.9999300",
///   "balances": [{ "asset_type": "native", "balance": "9999.9999300" }]
/// }
/// ```
#[instrument(skip(service))]
pub async fn get_account(
    State(service): State<Arc<TokenService>>,
    Path(account_id): Path<String>,
) -> Result<Json<AccountSummary>> {
    let summary = service.account(&account_id).await?;
    info!("Loaded account {} ({} XLM)", summary.account_id, summary.native_balance);
    Ok(Json(summary))
}
