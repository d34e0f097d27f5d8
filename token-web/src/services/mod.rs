//! Backend and wallet services

pub mod api;
pub mod freighter;
