//! Backend API client
//!
//! Thin gloo-net wrappers around the backend routes. Error bodies follow
//! [`ErrorResponse`]; their message is surfaced as-is in the console toasts.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::dto::account::{AccountSummary, ErrorResponse};
use shared::dto::soroban::NetworkInfo;
use shared::dto::token::TokenCall;
use shared::dto::transaction::{
    BuildTransactionRequest, BuildTransactionResponse, SubmitTransactionRequest,
    SubmitTransactionResponse, TransactionStatusResponse,
};
use thiserror::Error;

use crate::utils::constants::API_BASE;

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response; the message comes from the backend's error body
    #[error("{message}")]
    Backend { status: u16, message: String },

    #[error("Server response error: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

fn url(path: &str) -> String {
    format!("{}{}", API_BASE, path)
}

async fn read<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    if !response.ok() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&text)
            .map(|body| body.error)
            .unwrap_or_else(|_| {
                if text.is_empty() {
                    format!("HTTP {}", status)
                } else {
                    text
                }
            });
        return Err(ApiError::Backend { status, message });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn get<T: DeserializeOwned>(path: &str) -> ApiResult<T> {
    let response = Request::get(&url(path))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read(response).await
}

async fn post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> ApiResult<T> {
    let response = Request::post(&url(path))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read(response).await
}

pub async fn get_network() -> ApiResult<NetworkInfo> {
    get("/api/network").await
}

pub async fn get_account(account_id: &str) -> ApiResult<AccountSummary> {
    get(&format!("/api/accounts/{}", urlencoding::encode(account_id.trim()))).await
}

/// Build (and by default simulate) an unsigned envelope for `call`.
pub async fn build_transaction(source: &str, call: TokenCall) -> ApiResult<BuildTransactionResponse> {
    let request = BuildTransactionRequest {
        source: source.trim().to_string(),
        call,
        simulate: true,
    };
    post("/api/transactions/build", &request).await
}

pub async fn submit_transaction(signed_xdr: String) -> ApiResult<SubmitTransactionResponse> {
    post("/api/transactions/submit", &SubmitTransactionRequest { signed_xdr }).await
}

pub async fn get_transaction_status(hash: &str) -> ApiResult<TransactionStatusResponse> {
    get(&format!("/api/transactions/{}", urlencoding::encode(hash))).await
}
