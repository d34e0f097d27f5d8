use axum::{extract::State, Json};
use shared::dto::soroban::{CallContractFunctionRequest, CallContractFunctionResponse};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::error::Result;
use crate::services::TokenService;

/// Read-only contract call, answered by simulation.
///
/// **Route**: `POST /api/contract/call`
///
/// `contract_id` defaults to the configured token contract and `source_account` to the
/// configured default account. Contract failures come back as `success: false`.
///
/// # Example
///
/// ```json
/// {
///   "function_name": "balance",
///   "parameters": [{ "Address": "GDOBGW2B4PHXXEOWAACCEVDZJJ6Q2EUZGTK5ZQNEVZZFP4VC3MD4223B" }]
/// }
/// ```
#[instrument(skip(service, request))]
pub async fn call_contract_function(
    State(service): State<Arc<TokenService>>,
    Json(request): Json<CallContractFunctionRequest>,
) -> Result<Json<CallContractFunctionResponse>> {
    info!("Simulating contract function: {}", request.function_name);
    Ok(Json(service.simulate_call(request).await?))
}
