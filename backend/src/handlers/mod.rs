//! # HTTP Handlers
//!
//! Thin axum handlers over [`TokenService`](crate::services::TokenService). Every
//! fallible handler returns [`AppError`](crate::error::AppError), which renders as
//! `{"error", "code"}` JSON.

pub mod contract;
pub mod network;
pub mod transactions;


pub use contract::*;
pub use network::*;
pub use transactions::*;

/// Liveness check.
///
/// **Route**: `GET /health`
pub async fn health() -> &'static str {
    "OK"
}
