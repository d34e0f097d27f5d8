//! Application constants

pub const API_BASE: &str = "http://127.0.0.1:3001";

// Toasts
pub const TOAST_DURATION_MS: u32 = 5000;

// Status polling after submission
pub const STATUS_POLL_INTERVAL_MS: u32 = 2000;
pub const STATUS_POLL_ATTEMPTS: u32 = 15;

pub const DEFAULT_MULTISIG_THRESHOLD: &str = "2";

pub const STELLAR_EXPERT_TX: &str = "https://stellar.expert/explorer/testnet/tx/";
