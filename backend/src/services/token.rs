//! # Token Service
//!
//! Orchestrates the build → sign → submit round trip for token contract calls.
//!
//! ## Architecture
//!
//! ```text
//! TokenService ──► TokenContract ──► ContractCall ──► UnsignedTransaction
//!              ──► Ledger (Horizon + Soroban RPC Server)
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, AppError>`:
//! - `AppError::InvalidInput` - malformed address, hash or call argument
//! - `AppError::Account` - source account does not exist
//! - `AppError::Transaction` - simulation rejected the call, or envelope is unsigned
//! - `AppError::XdrDecoding` - submitted envelope does not decode
//! - `AppError::StellarRpc` - network failure

use std::sync::Arc;

use shared::dto::account::AccountSummary;
use shared::dto::soroban::{
    CallContractFunctionRequest, CallContractFunctionResponse, NetworkInfo, SimulationDetailsDto,
};
use shared::dto::transaction::{
    BuildTransactionRequest, BuildTransactionResponse, SubmitTransactionRequest,
    SubmitTransactionResponse, TransactionStatusResponse,
};
use shared::utils::{is_account_id, is_contract_id};
use soroban_client::xdr::{Limits, WriteXdr};
use tracing::{debug, info, instrument, warn};

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::soroban::builder::{
    decode_envelope, signature_count, signed_transaction, ContractCall, UnsignedTransaction,
};
use crate::soroban::ledger::Ledger;
use crate::soroban::scval::{parameters_to_scvals, scval_to_json};
use crate::soroban::token::TokenContract;

#[derive(Clone)]
pub struct TokenService {
    ledger: Arc<dyn Ledger>,
    config: Arc<Config>,
    token: TokenContract,
}

impl TokenService {
    pub fn new(ledger: Arc<dyn Ledger>, config: Arc<Config>) -> Self {
        let token = TokenContract::new(config.contract_id.clone());
        Self { ledger, config, token }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Network and contract details; the latest ledger is best effort.
    pub async fn network_info(&self) -> NetworkInfo {
        let latest_ledger = match self.ledger.latest_ledger().await {
            Ok(sequence) => Some(sequence),
            Err(e) => {
                warn!("Latest ledger unavailable: {}", e);
                None
            }
        };

        NetworkInfo {
            contract_id: self.config.contract_id.clone(),
            network: self.config.network(),
            network_passphrase: self.config.network_passphrase.clone(),
            rpc_url: self.config.soroban_rpc_url.clone(),
            horizon_url: self.config.horizon_url.clone(),
            default_account: self.config.default_account.clone(),
            latest_ledger,
        }
    }

    #[instrument(skip(self))]
    pub async fn account(&self, account_id: &str) -> Result<AccountSummary> {
        ensure_account_id(account_id)?;
        self.ledger.load_account(account_id).await?.to_summary()
    }

    /// Build an unsigned envelope for one token entry point.
    #[instrument(skip(self, request), fields(function = request.call.function_name(), source = %request.source))]
    pub async fn build(&self, request: BuildTransactionRequest) -> Result<BuildTransactionResponse> {
        ensure_account_id(&request.source)?;
        if let Some(spender) = request.call.spender() {
            if spender != request.source {
                return Err(AppError::InvalidInput(format!(
                    "Spender {} must be the transaction source {}",
                    spender, request.source
                )));
            }
        }

        let call = self.token.contract_call(&request.call)?;
        let mut tx = self.build_unsigned(&request.source, &call).await?;

        let mut simulation = None;
        if request.simulate {
            let prepared = match self.ledger.prepare(tx.transaction()).await {
                Ok(prepared) => UnsignedTransaction::new(prepared)?,
                Err(e) => {
                    warn!("Simulation of {} failed: {}", call.function, e);
                    return Err(e);
                }
            };
            simulation = Some(SimulationDetailsDto {
                latest_ledger: None,
                min_resource_fee: Some(prepared.fee().saturating_sub(tx.fee()).to_string()),
            });
            tx = prepared;
        }

        let hash = tx.hash();
        info!("Built {} transaction {}", call.function, hash);

        Ok(BuildTransactionResponse {
            xdr: tx.to_xdr()?,
            hash,
            function: call.function,
            source: request.source,
            sequence: tx.sequence(),
            fee: tx.fee(),
            network_passphrase: self.config.network_passphrase.clone(),
            simulation,
        })
    }

    async fn build_unsigned(&self, source: &str, call: &ContractCall) -> Result<UnsignedTransaction> {
        let account = self.ledger.source_account(source).await?;
        debug!("Loaded source account {}", source);

        call.build(
            account,
            &self.config.network_passphrase,
            self.config.base_fee,
            self.config.tx_timeout_secs,
        )
    }

    /// Read-only call answered by simulation. Contract failures are reported in
    /// the response body, not as an error.
    #[instrument(skip(self, request), fields(function = %request.function_name))]
    pub async fn simulate_call(
        &self,
        request: CallContractFunctionRequest,
    ) -> Result<CallContractFunctionResponse> {
        let contract_id = request
            .contract_id
            .unwrap_or_else(|| self.config.contract_id.clone());
        if !is_contract_id(&contract_id) {
            return Err(AppError::InvalidInput(format!("Invalid contract id: {}", contract_id)));
        }

        let source = request
            .source_account
            .unwrap_or_else(|| self.config.default_account.clone());
        ensure_account_id(&source)?;

        let args = parameters_to_scvals(&request.parameters)?;
        let call = ContractCall::new(contract_id, request.function_name, args);
        let tx = self.build_unsigned(&source, &call).await?;

        let sim = self.ledger.simulate(tx.transaction()).await?;
        let details = SimulationDetailsDto {
            latest_ledger: Some(sim.latest_ledger),
            min_resource_fee: None,
        };

        if let Some(err) = sim.error {
            return Ok(CallContractFunctionResponse {
                success: false,
                result: None,
                error: Some(err),
                result_xdr: None,
                simulation: Some(details),
            });
        }

        let result_xdr = match &sim.result {
            Some(value) => Some(value.to_xdr_base64(Limits::none())?),
            None => None,
        };

        Ok(CallContractFunctionResponse {
            success: true,
            result: sim.result.as_ref().map(scval_to_json),
            error: None,
            result_xdr,
            simulation: Some(details),
        })
    }

    /// Forward a wallet-signed envelope to the network.
    #[instrument(skip_all)]
    pub async fn submit(&self, request: SubmitTransactionRequest) -> Result<SubmitTransactionResponse> {
        let envelope = decode_envelope(&request.signed_xdr)?;
        if signature_count(&envelope) == 0 {
            return Err(AppError::Transaction("Transaction envelope is not signed".to_string()));
        }

        let signed = signed_transaction(envelope, &self.config.network_passphrase)?;
        let sent = self.ledger.send(signed).await?;
        info!("Submitted transaction {} -> {}", sent.hash, sent.status);

        let error = match sent.status.as_str() {
            "ERROR" => Some("Transaction rejected by the network".to_string()),
            "TRY_AGAIN_LATER" => Some("Network is busy, try again later".to_string()),
            _ => None,
        };

        Ok(SubmitTransactionResponse {
            hash: sent.hash,
            status: sent.status,
            error,
        })
    }

    #[instrument(skip(self))]
    pub async fn status(&self, hash: &str) -> Result<TransactionStatusResponse> {
        let hash = hash.to_lowercase();
        match hex::decode(&hash) {
            Ok(bytes) if bytes.len() == 32 => {}
            _ => return Err(AppError::InvalidInput(format!("Invalid transaction hash: {}", hash))),
        }

        let tx = self.ledger.transaction_status(&hash).await?;
        Ok(TransactionStatusResponse {
            hash,
            status: tx.status,
            ledger: tx.ledger,
        })
    }
}

fn ensure_account_id(account_id: &str) -> Result<()> {
    if is_account_id(account_id) {
        Ok(())
    } else {
        Err(AppError::InvalidInput(format!("Invalid account address: {}", account_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::soroban::ledger::mock::{MockLedger, ALICE, BOB};
    use crate::soroban::scval::i128_to_scval;
    use shared::dto::soroban::FunctionParameter;
    use shared::dto::token::TokenCall;
    use soroban_client::xdr::{DecoratedSignature, Signature, SignatureHint, TransactionEnvelope};

    fn service(ledger: Arc<MockLedger>) -> TokenService {
        TokenService::new(ledger, Arc::new(Config::default()))
    }

    fn transfer_request(simulate: bool) -> BuildTransactionRequest {
        BuildTransactionRequest {
            source: ALICE.to_string(),
            call: TokenCall::Transfer {
                from: ALICE.to_string(),
                to: BOB.to_string(),
                amount: 5,
            },
            simulate,
        }
    }

    fn signed(xdr: &str) -> String {
        let TransactionEnvelope::Tx(mut env) = decode_envelope(xdr).unwrap() else {
            panic!("expected v1 envelope");
        };
        env.signatures = vec![DecoratedSignature {
            hint: SignatureHint([1, 2, 3, 4]),
            signature: Signature(vec![7u8; 64].try_into().unwrap()),
        }]
        .try_into()
        .unwrap();
        TransactionEnvelope::Tx(env).to_xdr_base64(Limits::none()).unwrap()
    }

    #[tokio::test]
    async fn test_build_without_simulation() {
        // Arrange
        let ledger = Arc::new(MockLedger::new());
        let service = service(ledger.clone());

        // Act
        let response = service.build(transfer_request(false)).await.unwrap();

        // Assert
        assert_eq!(response.function, "transfer");
        assert_eq!(response.sequence, MockLedger::SEQUENCE + 1);
        assert_eq!(response.fee, 100);
        assert_eq!(response.hash.len(), 64);
        assert!(response.simulation.is_none());
        assert_eq!(ledger.prepared_count(), 0);
        assert!(decode_envelope(&response.xdr).is_ok());
    }

    #[tokio::test]
    async fn test_build_with_simulation_adds_resource_fee() {
        // Arrange
        let ledger = Arc::new(MockLedger::new());
        let service = service(ledger.clone());

        // Act
        let response = service.build(transfer_request(true)).await.unwrap();

        // Assert
        assert_eq!(response.fee, 100 + MockLedger::RESOURCE_FEE);
        assert_eq!(response.sequence, MockLedger::SEQUENCE + 1);
        assert_eq!(ledger.prepared_count(), 1);
        let simulation = response.simulation.unwrap();
        assert_eq!(simulation.min_resource_fee.as_deref(), Some("58181"));
    }

    #[tokio::test]
    async fn test_build_surfaces_simulation_error() {
        // Arrange
        let ledger = Arc::new(MockLedger::new().with_simulation_error("account is frozen"));
        let service = service(ledger);

        // Act
        let err = service.build(transfer_request(true)).await.unwrap_err();

        // Assert
        assert!(matches!(err, AppError::Transaction(ref msg) if msg.contains("frozen")));
    }

    #[tokio::test]
    async fn test_build_rejects_contract_source() {
        let service = service(Arc::new(MockLedger::new()));
        let mut request = transfer_request(false);
        request.source = "CCQWMCHX6GPZDCKZRACJM35FRSA5M6BNG5Q23GRT4IPGG7I6P5ZAURV4".to_string();

        let err = service.build(request).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_build_refuses_spender_other_than_source() {
        let ledger = Arc::new(MockLedger::new());
        let service = service(ledger.clone());
        let request = BuildTransactionRequest {
            source: ALICE.to_string(),
            call: TokenCall::BurnFrom { spender: BOB.to_string(), from: ALICE.to_string(), amount: 5 },
            simulate: true,
        };

        let result = service.build(request).await;

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
        assert_eq!(ledger.prepared_count(), 0);
    }

    #[tokio::test]
    async fn test_build_unknown_account() {
        let service = service(Arc::new(MockLedger::new()));
        let mut request = transfer_request(false);
        request.source = BOB.to_string();

        let err = service.build(request).await.unwrap_err();
        assert!(matches!(err, AppError::Account(_)));
    }

    #[tokio::test]
    async fn test_simulate_call_decodes_result() {
        // Arrange
        let value = i128_to_scval(1_500);
        let ledger = Arc::new(MockLedger::new().with_result(value.clone()));
        let service = service(ledger.clone());

        // Act
        let response = service
            .simulate_call(CallContractFunctionRequest {
                contract_id: None,
                function_name: "balance".to_string(),
                parameters: vec![FunctionParameter::Address(ALICE.to_string())],
                source_account: Some(ALICE.to_string()),
            })
            .await
            .unwrap();

        // Assert
        assert!(response.success);
        assert_eq!(response.result, Some(serde_json::json!("1500")));
        assert_eq!(
            response.result_xdr,
            Some(value.to_xdr_base64(Limits::none()).unwrap())
        );
        assert_eq!(ledger.simulated_count(), 1);
    }

    #[tokio::test]
    async fn test_simulate_call_reports_contract_failure() {
        let ledger = Arc::new(MockLedger::new().with_simulation_error("HostError: Error(Contract, #1)"));
        let service = service(ledger);

        let response = service
            .simulate_call(CallContractFunctionRequest {
                contract_id: None,
                function_name: "decimals".to_string(),
                parameters: vec![],
                source_account: Some(ALICE.to_string()),
            })
            .await
            .unwrap();

        assert!(!response.success);
        assert!(response.error.unwrap().contains("HostError"));
    }

    #[tokio::test]
    async fn test_submit_requires_signature() {
        // Arrange
        let ledger = Arc::new(MockLedger::new());
        let service = service(ledger.clone());
        let built = service.build(transfer_request(false)).await.unwrap();

        // Act
        let err = service
            .submit(SubmitTransactionRequest { signed_xdr: built.xdr.clone() })
            .await
            .unwrap_err();

        // Assert
        assert!(matches!(err, AppError::Transaction(_)));
        assert_eq!(ledger.sent_count(), 0);
    }

    #[tokio::test]
    async fn test_submit_signed_envelope() {
        // Arrange
        let ledger = Arc::new(MockLedger::new());
        let service = service(ledger.clone());
        let built = service.build(transfer_request(false)).await.unwrap();

        // Act
        let response = service
            .submit(SubmitTransactionRequest { signed_xdr: signed(&built.xdr) })
            .await
            .unwrap();

        // Assert
        assert_eq!(response.status, "PENDING");
        assert!(response.error.is_none());
        assert_eq!(ledger.sent_count(), 1);
    }

    #[tokio::test]
    async fn test_submit_busy_network_reports_error() {
        let ledger = Arc::new(MockLedger::new().with_send_status("TRY_AGAIN_LATER"));
        let service = service(ledger);
        let built = service.build(transfer_request(false)).await.unwrap();

        let response = service
            .submit(SubmitTransactionRequest { signed_xdr: signed(&built.xdr) })
            .await
            .unwrap();

        assert_eq!(response.status, "TRY_AGAIN_LATER");
        assert!(response.error.is_some());
    }

    #[tokio::test]
    async fn test_status_validates_hash() {
        let service = service(Arc::new(MockLedger::new()));

        let err = service.status("abc").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));

        let hash = "AB".repeat(32);
        let status = service.status(&hash).await.unwrap();
        assert_eq!(status.hash, "ab".repeat(32));
        assert_eq!(status.status, "SUCCESS");
        assert_eq!(status.ledger, Some(MockLedger::LATEST_LEDGER));
    }

    #[tokio::test]
    async fn test_network_info() {
        let info = service(Arc::new(MockLedger::new())).network_info().await;
        assert_eq!(info.latest_ledger, Some(MockLedger::LATEST_LEDGER));
        assert_eq!(info.default_account, ALICE);
    }
}
