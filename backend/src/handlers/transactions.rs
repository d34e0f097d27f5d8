//! # Transaction Handlers
//!
//! The build → sign → submit round trip. Signing happens in the browser wallet;
//! these endpoints only ever see unsigned envelopes going out and signed ones
//! coming back.
//!
//! ## Endpoints
//!
//! - `POST /api/transactions/build` - unsigned envelope for one token entry point
//! - `POST /api/transactions/submit` - forward a signed envelope to Soroban RPC
//! - `GET /api/transactions/{hash}` - inclusion status
//!
//! ## Request Examples
//!
//! ```bash
//! curl -X POST http://localhost:3001/api/transactions/build \
//!   -H 'Content-Type: application/json' \
//!   -d '{
//!         "source": "GDOBGW2B4PHXXEOWAACCEVDZJJ6Q2EUZGTK5ZQNEVZZFP4VC3MD4223B",
//!         "call": {
//!           "function": "transfer",
//!           "from": "GDOBGW2B4PHXXEOWAACCEVDZJJ6Q2EUZGTK5ZQNEVZZFP4VC3MD4223B",
//!           "to": "GA5ZSEJYB37JRC5AVCIA5MOP4RHTM335X2KGX3IHOJAPP5RE34K4KZVN",
//!           "amount": "5"
//!         }
//!       }'
//! ```

use axum::{
    extract::{Path, State},
    Json,
};
use shared::dto::transaction::{
    BuildTransactionRequest, BuildTransactionResponse, SubmitTransactionRequest,
    SubmitTransactionResponse, TransactionStatusResponse,
};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::error::Result;
use crate::services::TokenService;

/// Build an unsigned transaction invoking a token entry point.
///
/// **Route**: `POST /api/transactions/build`
///
/// # Request Body
///
/// `BuildTransactionRequest`: the source account, the call (tagged by `function`)
/// and whether to simulate first (default `true`).
///
/// # Returns
///
/// Success (200): `Json<BuildTransactionResponse>` with the base64 envelope, its hash,
/// the sequence number and fee used, and simulation details when simulated.
///
/// Error (400): malformed address or the contract rejected the call in simulation
/// Error (404): source account does not exist
/// Error (502): Horizon or Soroban RPC unreachable
#[instrument(skip(service, request))]
pub async fn build_transaction(
    State(service): State<Arc<TokenService>>,
    Json(request): Json<BuildTransactionRequest>,
) -> Result<Json<BuildTransactionResponse>> {
    info!("{}", request.call.describe());
    Ok(Json(service.build(request).await?))
}

/// Submit a wallet-signed envelope.
///
/// **Route**: `POST /api/transactions/submit`
///
/// # Returns
///
/// Success (200): `Json<SubmitTransactionResponse>`. A network-side rejection is
/// still a 200 with `status: "ERROR"` and the result XDR in `error`.
///
/// Error (400): envelope does not decode or carries no signature
#[instrument(skip_all)]
pub async fn submit_transaction(
    State(service): State<Arc<TokenService>>,
    Json(request): Json<SubmitTransactionRequest>,
) -> Result<Json<SubmitTransactionResponse>> {
    Ok(Json(service.submit(request).await?))
}

/// Inclusion status of a submitted transaction.
///
/// **Route**: `GET /api/transactions/{hash}`
///
/// # Returns
///
/// Success (200): `Json<TransactionStatusResponse>` with `SUCCESS`, `FAILED` or `NOT_FOUND`
///
/// Error (400): not a 64 character hex hash
#[instrument(skip(service))]
pub async fn get_transaction_status(
    State(service): State<Arc<TokenService>>,
    Path(hash): Path<String>,
) -> Result<Json<TransactionStatusResponse>> {
    Ok(Json(service.status(&hash).await?))
}
