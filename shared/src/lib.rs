//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the web console and the backend API.
//! All DTOs use JSON serialization via `serde` for API communication.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::token`]**: Token contract calls, one per entry point
//!   - **[`dto::transaction`]**: Envelope build/submit requests and responses
//!   - **[`dto::soroban`]**: Contract arguments and network description
//!   - **[`dto::account`]**: Account summaries
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format Stellar addresses for display
//!   - **[`utils::parse_address_list`]**: Split comma separated address input
//!
//! ## Usage in Backend
//!
//! ```rust,ignore
//! use shared::dto::transaction::{BuildTransactionRequest, BuildTransactionResponse};
//! use axum::Json;
//!
//! async fn build(Json(request): Json<BuildTransactionRequest>) -> Json<BuildTransactionResponse> {
//!     // Request is automatically deserialized from JSON
//!     # todo!()
//! }
//! ```
//!
//! ## Usage in Frontend
//!
//! ```rust,no_run
//! use shared::dto::token::TokenCall;
//! use shared::utils::truncate_address;
//!
//! let call = TokenCall::Burn {
//!     from: "GDOBGW2B4PHXXEOWAACCEVDZJJ6Q2EUZGTK5ZQNEVZZFP4VC3MD4223B".to_string(),
//!     amount: 100,
//! };
//! let label = format!("{} from {}", call.function_name(), truncate_address("GDOBGW2B4PHXXEOWAACCEVDZJJ6Q2EUZGTK5ZQNEVZZFP4VC3MD4223B"));
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
