//! Global state

pub mod console;
