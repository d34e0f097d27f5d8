//! # Token Console Backend
//!
//! HTTP API behind the token console: loads accounts, builds unsigned contract-call
//! envelopes for the browser wallet to sign, and relays signed envelopes to
//! Soroban RPC.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod server;
pub mod services;
pub mod soroban;
pub mod stellar;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
pub use server::{create_router, start_server, AppState};
