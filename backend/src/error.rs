//! # Centralized Error Handling
//!
//! Application-wide error type [`AppError`] used by every backend module.
//!
//! ## Error Categories
//!
//! 1. **Client Errors** (4xx)
//!    - [`InvalidInput`](AppError::InvalidInput) → 400 Bad Request
//!    - [`Transaction`](AppError::Transaction) → 400 Bad Request (failed simulation, bad envelope)
//!    - [`Account`](AppError::Account) / [`NotFound`](AppError::NotFound) → 404 Not Found
//!
//! 2. **Server Errors** (5xx)
//!    - [`StellarRpc`](AppError::StellarRpc) → 502 Bad Gateway (Horizon or Soroban RPC)
//!    - [`Config`](AppError::Config), [`Internal`](AppError::Internal),
//!      [`XdrEncoding`](AppError::XdrEncoding) → 500
//!
//! [`XdrDecoding`](AppError::XdrDecoding) is reported as 400 because decoded XDR always
//! comes from the client (signed envelopes).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Stellar RPC error: {0}")]
    StellarRpc(String),

    #[error("Account error: {0}")]
    Account(String),

    #[error("Transaction error: {0}")]
    Transaction(String),

    #[error("XDR encoding error: {0}")]
    XdrEncoding(String),

    #[error("XDR decoding error: {0}")]
    XdrDecoding(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) | AppError::Transaction(_) | AppError::XdrDecoding(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) | AppError::Account(_) => StatusCode::NOT_FOUND,
            AppError::StellarRpc(_) => StatusCode::BAD_GATEWAY,
            AppError::Config(_) | AppError::Internal(_) | AppError::XdrEncoding(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to show to the console user.
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg)
            | AppError::NotFound(msg)
            | AppError::Account(msg)
            | AppError::Transaction(msg)
            | AppError::XdrDecoding(msg) => msg.clone(),
            AppError::StellarRpc(_) => "Stellar network temporarily unavailable".to_string(),
            AppError::Config(_) | AppError::Internal(_) | AppError::XdrEncoding(_) => {
                "An internal error occurred".to_string()
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "Config",
            AppError::StellarRpc(_) => "StellarRpc",
            AppError::Account(_) => "Account",
            AppError::Transaction(_) => "Transaction",
            AppError::XdrEncoding(_) => "XdrEncoding",
            AppError::XdrDecoding(_) => "XdrDecoding",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::Internal(_) => "Internal",
            AppError::NotFound(_) => "NotFound",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Server error: {}", self);
        } else {
            tracing::debug!("Client error: {}", self);
        }

        let body = Json(json!({
            "error": self.user_message(),
            "code": self.code(),
        }));

        (status, body).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::StellarRpc(format!("Network error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::StellarRpc(format!("Failed to parse response: {}", err))
    }
}

impl From<soroban_client::xdr::Error> for AppError {
    fn from(err: soroban_client::xdr::Error) -> Self {
        AppError::XdrEncoding(format!("{:?}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::InvalidInput("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::Account("x".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::StellarRpc("x".into()).status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            AppError::XdrEncoding("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let err = AppError::StellarRpc("connection refused to 10.0.0.1".into());
        assert_eq!(err.user_message(), "Stellar network temporarily unavailable");

        let err = AppError::Transaction("HostError: Error(Contract, #1)".into());
        assert_eq!(err.user_message(), "HostError: Error(Contract, #1)");
    }

    #[tokio::test]
    async fn test_into_response_body() {
        let response = AppError::InvalidInput("amount must be non-negative".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"], "amount must be non-negative");
        assert_eq!(value["code"], "InvalidInput");
    }
}
