//! # Services
//!
//! Business logic between the HTTP handlers and the network.

pub mod token;

pub use token::TokenService;
