//! # Application Configuration
//!
//! Configuration is loaded from environment variables (a `.env` file is picked up by
//! `dotenvy` in `main`) and validated on startup to fail fast if misconfigured.
//!
//! | variable             | default                                   |
//! |----------------------|-------------------------------------------|
//! | `BIND_ADDRESS`       | `127.0.0.1:3001`                          |
//! | `ALLOWED_ORIGINS`    | local trunk / dev server origins          |
//! | `HORIZON_URL`        | `https://horizon-testnet.stellar.org`     |
//! | `SOROBAN_RPC_URL`    | `https://soroban-testnet.stellar.org`     |
//! | `NETWORK_PASSPHRASE` | `Test SDF Network ; September 2015`       |
//! | `TOKEN_CONTRACT_ID`  | deployed testnet token contract           |
//! | `DEFAULT_ACCOUNT`    | account prefilled in the console          |
//! | `BASE_FEE`           | `100` stroops                             |
//! | `TX_TIMEOUT_SECS`    | `30`                                      |

use shared::dto::soroban::NetworkType;
use shared::utils::{is_account_id, is_contract_id};

use crate::utils::{get_env_or, get_env_parse_or};

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3001";
pub const DEFAULT_HORIZON_URL: &str = "https://horizon-testnet.stellar.org";
pub const DEFAULT_SOROBAN_RPC_URL: &str = "https://soroban-testnet.stellar.org";
pub const DEFAULT_CONTRACT_ID: &str = "CCQWMCHX6GPZDCKZRACJM35FRSA5M6BNG5Q23GRT4IPGG7I6P5ZAURV4";
pub const DEFAULT_ACCOUNT: &str = "GDOBGW2B4PHXXEOWAACCEVDZJJ6Q2EUZGTK5ZQNEVZZFP4VC3MD4223B";
pub const DEFAULT_BASE_FEE: u32 = 100;
pub const DEFAULT_TX_TIMEOUT_SECS: u64 = 30;

const MAX_TX_TIMEOUT_SECS: u64 = 3600;

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: String,

    /// Origins the browser console is served from
    pub allowed_origins: Vec<String>,

    pub horizon_url: String,
    pub soroban_rpc_url: String,
    pub network_passphrase: String,

    /// Token contract every built transaction invokes
    pub contract_id: String,

    /// Account prefilled in the console and used as source for read-only calls
    pub default_account: String,

    /// Inclusion fee per transaction, in stroops
    pub base_fee: u32,

    /// Upper time bound of built transactions, relative to build time
    pub tx_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            allowed_origins: default_origins(),
            horizon_url: DEFAULT_HORIZON_URL.to_string(),
            soroban_rpc_url: DEFAULT_SOROBAN_RPC_URL.to_string(),
            network_passphrase: NetworkType::TESTNET_PASSPHRASE.to_string(),
            contract_id: DEFAULT_CONTRACT_ID.to_string(),
            default_account: DEFAULT_ACCOUNT.to_string(),
            base_fee: DEFAULT_BASE_FEE,
            tx_timeout_secs: DEFAULT_TX_TIMEOUT_SECS,
        }
    }
}

fn default_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://127.0.0.1:3000".to_string(),
        "http://localhost:8080".to_string(),
        "http://127.0.0.1:8080".to_string(),
    ]
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let allowed_origins = match std::env::var("ALLOWED_ORIGINS") {
            Ok(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            Err(_) => defaults.allowed_origins,
        };

        let base_fee = get_env_parse_or("BASE_FEE", defaults.base_fee)
            .map_err(|e| format!("BASE_FEE must be a valid number: {}", e))?;

        let tx_timeout_secs = get_env_parse_or("TX_TIMEOUT_SECS", defaults.tx_timeout_secs)
            .map_err(|e| format!("TX_TIMEOUT_SECS must be a valid number: {}", e))?;

        Ok(Self {
            bind_address: get_env_or("BIND_ADDRESS", &defaults.bind_address),
            allowed_origins,
            horizon_url: get_env_or("HORIZON_URL", &defaults.horizon_url),
            soroban_rpc_url: get_env_or("SOROBAN_RPC_URL", &defaults.soroban_rpc_url),
            network_passphrase: get_env_or("NETWORK_PASSPHRASE", &defaults.network_passphrase),
            contract_id: get_env_or("TOKEN_CONTRACT_ID", &defaults.contract_id),
            default_account: get_env_or("DEFAULT_ACCOUNT", &defaults.default_account),
            base_fee,
            tx_timeout_secs,
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.horizon_url.trim().is_empty() {
            return Err("HORIZON_URL cannot be empty".to_string());
        }
        if self.soroban_rpc_url.trim().is_empty() {
            return Err("SOROBAN_RPC_URL cannot be empty".to_string());
        }
        if self.network_passphrase.trim().is_empty() {
            return Err("NETWORK_PASSPHRASE cannot be empty".to_string());
        }
        if !is_contract_id(&self.contract_id) {
            return Err(format!("TOKEN_CONTRACT_ID is not a contract address: {}", self.contract_id));
        }
        if !is_account_id(&self.default_account) {
            return Err(format!("DEFAULT_ACCOUNT is not an account address: {}", self.default_account));
        }
        if self.base_fee == 0 {
            return Err("BASE_FEE must be greater than zero".to_string());
        }
        if self.tx_timeout_secs == 0 || self.tx_timeout_secs > MAX_TX_TIMEOUT_SECS {
            return Err(format!("TX_TIMEOUT_SECS must be between 1 and {}", MAX_TX_TIMEOUT_SECS));
        }
        Ok(())
    }

    pub fn network(&self) -> NetworkType {
        NetworkType::from_passphrase(&self.network_passphrase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.network(), NetworkType::Testnet);
    }

    #[test]
    fn test_rejects_account_as_contract() {
        let config = Config {
            contract_id: DEFAULT_ACCOUNT.to_string(),
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("TOKEN_CONTRACT_ID"));
    }

    #[test]
    fn test_rejects_zero_fee_and_bad_timeout() {
        let config = Config { base_fee: 0, ..Config::default() };
        assert!(config.validate().is_err());

        let config = Config { tx_timeout_secs: 0, ..Config::default() };
        assert!(config.validate().is_err());

        let config = Config { tx_timeout_secs: 7200, ..Config::default() };
        assert!(config.validate().is_err());
    }
}
