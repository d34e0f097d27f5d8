//! # Ledger Access
//!
//! [`Ledger`] is the seam between the token service and the network. The live
//! implementation, [`StellarNetwork`], reads account summaries from Horizon and
//! uses the Soroban RPC [`Server`] for sequence numbers, simulation, assembly and
//! submission; handler tests swap in an in-memory mock.

use async_trait::async_trait;
use soroban_client::account::Account;
use soroban_client::soroban_rpc::{SendTransactionStatus, TransactionStatus};
use soroban_client::transaction::Transaction;
use soroban_client::xdr::ScVal;
use soroban_client::{Options, Server};
use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::stellar::{AccountResponse, HorizonClient};

/// Outcome of a read-only simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct Simulation {
    pub latest_ledger: u32,
    pub result: Option<ScVal>,
    /// Set when the invocation failed during simulation
    pub error: Option<String>,
}

/// What the network said about a submitted envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub hash: String,
    /// `PENDING`, `DUPLICATE`, `TRY_AGAIN_LATER` or `ERROR`
    pub status: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionOutcome {
    /// `SUCCESS`, `NOT_FOUND` or `FAILED`
    pub status: String,
    pub ledger: Option<u32>,
}

#[async_trait]
pub trait Ledger: Send + Sync {
    /// Horizon account record with balances.
    async fn load_account(&self, account_id: &str) -> Result<AccountResponse>;

    /// Account at its current sequence number, ready for the transaction builder.
    async fn source_account(&self, account_id: &str) -> Result<Account>;

    async fn latest_ledger(&self) -> Result<u32>;

    async fn simulate(&self, tx: &Transaction) -> Result<Simulation>;

    /// Simulate and attach the footprint, auth entries and resource fee.
    async fn prepare(&self, tx: &Transaction) -> Result<Transaction>;

    async fn send(&self, signed: Transaction) -> Result<Submission>;

    async fn transaction_status(&self, hash: &str) -> Result<TransactionOutcome>;
}

fn rpc_error(context: &str, err: impl std::fmt::Debug) -> AppError {
    AppError::StellarRpc(format!("{}: {:?}", context, err))
}

pub struct StellarNetwork {
    horizon: HorizonClient,
    server: Server,
}

impl StellarNetwork {
    pub fn from_config(config: &Config) -> Result<Self> {
        let options = Options {
            allow_http: config.soroban_rpc_url.starts_with("http://"),
            ..Options::default()
        };
        let server = Server::new(&config.soroban_rpc_url, options).map_err(|e| {
            AppError::Config(format!("Invalid Soroban RPC url {}: {:?}", config.soroban_rpc_url, e))
        })?;

        Ok(Self {
            horizon: HorizonClient::new(config.horizon_url.clone()),
            server,
        })
    }
}

#[async_trait]
impl Ledger for StellarNetwork {
    #[instrument(skip(self))]
    async fn load_account(&self, account_id: &str) -> Result<AccountResponse> {
        self.horizon.load_account(account_id).await
    }

    #[instrument(skip(self))]
    async fn source_account(&self, account_id: &str) -> Result<Account> {
        self.server
            .get_account(account_id)
            .await
            .map_err(|e| AppError::Account(format!("Account {} not found: {:?}", account_id, e)))
    }

    async fn latest_ledger(&self) -> Result<u32> {
        let latest = self
            .server
            .get_latest_ledger()
            .await
            .map_err(|e| rpc_error("getLatestLedger", e))?;
        Ok(latest.sequence)
    }

    #[instrument(skip_all)]
    async fn simulate(&self, tx: &Transaction) -> Result<Simulation> {
        let sim = self
            .server
            .simulate_transaction(tx, None)
            .await
            .map_err(|e| rpc_error("simulateTransaction", e))?;

        Ok(Simulation {
            latest_ledger: sim.latest_ledger,
            result: sim.to_result().map(|(value, _auth)| value),
            error: sim.error.clone(),
        })
    }

    #[instrument(skip_all)]
    async fn prepare(&self, tx: &Transaction) -> Result<Transaction> {
        self.server
            .prepare_transaction(tx)
            .await
            .map_err(|e| AppError::Transaction(format!("Simulation failed: {:?}", e)))
    }

    #[instrument(skip_all)]
    async fn send(&self, signed: Transaction) -> Result<Submission> {
        let sent = self
            .server
            .send_transaction(signed)
            .await
            .map_err(|e| rpc_error("sendTransaction", e))?;
        debug!("sendTransaction -> {:?}", sent);

        let status = match sent.status {
            SendTransactionStatus::Pending => "PENDING",
            SendTransactionStatus::Duplicate => "DUPLICATE",
            SendTransactionStatus::TryAgainLater => "TRY_AGAIN_LATER",
            SendTransactionStatus::Error => "ERROR",
        };

        Ok(Submission {
            hash: sent.hash,
            status: status.to_string(),
        })
    }

    #[instrument(skip(self))]
    async fn transaction_status(&self, hash: &str) -> Result<TransactionOutcome> {
        let tx = self
            .server
            .get_transaction(hash)
            .await
            .map_err(|e| rpc_error("getTransaction", e))?;

        let status = match tx.status {
            TransactionStatus::Success => "SUCCESS",
            TransactionStatus::NotFound => "NOT_FOUND",
            TransactionStatus::Failed => "FAILED",
        };

        Ok(TransactionOutcome {
            status: status.to_string(),
            ledger: tx.ledger,
        })
    }
}
