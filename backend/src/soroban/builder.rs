//! # Transaction Builder
//!
//! Turns a [`ContractCall`] into an unsigned, base64 encoded transaction envelope
//! using the Stellar SDK builder.
//!
//! ## Flow
//!
//! ```text
//! ContractCall ──► Contracts::call ──► TransactionBuilder ──► UnsignedTransaction
//!                                       (fee, timeout,           │ to_xdr()
//!                                        sequence + 1)           ▼ hash()
//!                                                   envelope ready for the wallet
//! ```
//!
//! Simulation and assembly go through [`Ledger::prepare`](super::ledger::Ledger::prepare).
//! Signing happens in the browser wallet; this module never touches secret keys.

use std::cell::RefCell;
use std::rc::Rc;

use shared::utils::is_contract_id;
use soroban_client::account::Account;
use soroban_client::contract::{ContractBehavior, Contracts};
use soroban_client::transaction::{Transaction, TransactionBehavior};
use soroban_client::transaction_builder::{TransactionBuilder, TransactionBuilderBehavior};
use soroban_client::xdr::{
    Limits, Operation, Preconditions, ReadXdr, ScVal, TransactionEnvelope, TransactionExt, WriteXdr,
};

use crate::error::{AppError, Result};

/// Invocation of one contract entry point with typed arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractCall {
    pub contract_id: String,
    pub function: String,
    pub args: Vec<ScVal>,
}

impl ContractCall {
    pub fn new(contract_id: impl Into<String>, function: impl Into<String>, args: Vec<ScVal>) -> Self {
        Self {
            contract_id: contract_id.into(),
            function: function.into(),
            args,
        }
    }

    /// Invoke-host-function operation with no auth entries; those come from simulation.
    pub fn to_operation(&self) -> Result<Operation> {
        if !is_contract_id(&self.contract_id) {
            return Err(AppError::InvalidInput(format!("Invalid contract id: {}", self.contract_id)));
        }
        if !is_function_name(&self.function) {
            return Err(AppError::InvalidInput(format!("Invalid function name: {}", self.function)));
        }
        let contract = Contracts::new(&self.contract_id)
            .map_err(|_| AppError::InvalidInput(format!("Invalid contract id: {}", self.contract_id)))?;
        Ok(contract.call(&self.function, Some(self.args.clone())))
    }

    /// Single-operation transaction for `source`, which the builder advances to
    /// its next sequence number.
    pub fn build(
        &self,
        source: Account,
        network_passphrase: &str,
        fee: u32,
        timeout_secs: u64,
    ) -> Result<UnsignedTransaction> {
        let operation = self.to_operation()?;
        let timeout = i64::try_from(timeout_secs)
            .map_err(|_| AppError::Transaction(format!("Timeout out of range: {}", timeout_secs)))?;

        let source = Rc::new(RefCell::new(source));
        let mut builder = TransactionBuilder::new(source, network_passphrase, None);
        builder.fee(fee).add_operation(operation);
        builder
            .set_timeout(timeout)
            .map_err(|e| AppError::Transaction(e.to_string()))?;

        UnsignedTransaction::new(builder.build())
    }
}

/// SDK transaction together with its encoded envelope.
pub struct UnsignedTransaction {
    tx: Transaction,
    envelope: TransactionEnvelope,
}

impl UnsignedTransaction {
    pub fn new(tx: Transaction) -> Result<Self> {
        let envelope = tx
            .to_envelope()
            .map_err(|e| AppError::XdrEncoding(format!("Failed to encode transaction: {}", e)))?;
        Ok(Self { tx, envelope })
    }

    pub fn transaction(&self) -> &Transaction {
        &self.tx
    }

    pub fn envelope(&self) -> &TransactionEnvelope {
        &self.envelope
    }

    /// Total fee in stroops, resource fee included once prepared.
    pub fn fee(&self) -> u32 {
        match &self.envelope {
            TransactionEnvelope::TxV0(env) => env.tx.fee,
            TransactionEnvelope::Tx(env) => env.tx.fee,
            TransactionEnvelope::TxFeeBump(env) => env.tx.fee.try_into().unwrap_or(u32::MAX),
        }
    }

    pub fn sequence(&self) -> i64 {
        match &self.envelope {
            TransactionEnvelope::TxV0(env) => env.tx.seq_num.0,
            TransactionEnvelope::Tx(env) => env.tx.seq_num.0,
            TransactionEnvelope::TxFeeBump(_) => 0,
        }
    }

    /// Base64 `TransactionEnvelope` with an empty signature list.
    pub fn to_xdr(&self) -> Result<String> {
        Ok(self.envelope.to_xdr_base64(Limits::none())?)
    }

    /// Hex transaction hash, the id the network reports once submitted.
    pub fn hash(&self) -> String {
        hex::encode(self.tx.hash())
    }
}

/// Decode a base64 envelope received from a client.
pub fn decode_envelope(xdr: &str) -> Result<TransactionEnvelope> {
    TransactionEnvelope::from_xdr_base64(xdr.trim(), Limits::none())
        .map_err(|e| AppError::XdrDecoding(format!("Invalid transaction envelope: {:?}", e)))
}

/// Symbols are at most 32 characters of `[a-zA-Z0-9_]`.
fn is_function_name(name: &str) -> bool {
    !name.is_empty() && name.len() <= 32 && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// SDK transaction for a signed envelope, with its signatures and Soroban
/// resources intact so the payload hash is unchanged.
pub fn signed_transaction(envelope: TransactionEnvelope, network_passphrase: &str) -> Result<Transaction> {
    let TransactionEnvelope::Tx(env) = envelope else {
        return Err(AppError::Transaction(
            "Contract calls must use a v1 transaction envelope".to_string(),
        ));
    };
    if matches!(env.tx.cond, Preconditions::V2(_)) {
        return Err(AppError::Transaction(
            "Extended transaction preconditions are not supported".to_string(),
        ));
    }

    let soroban_data = match &env.tx.ext {
        TransactionExt::V1(data) => Some(data.clone()),
        TransactionExt::V0 => None,
    };
    let xdr = TransactionEnvelope::Tx(env).to_xdr_base64(Limits::none())?;

    let mut tx = Transaction::from_xdr_envelope(&xdr, network_passphrase);
    tx.soroban_data = soroban_data;
    Ok(tx)
}

pub fn signature_count(envelope: &TransactionEnvelope) -> usize {
    match envelope {
        TransactionEnvelope::TxV0(env) => env.signatures.len(),
        TransactionEnvelope::Tx(env) => env.signatures.len(),
        TransactionEnvelope::TxFeeBump(env) => env.signatures.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::soroban::scval::{address_to_scval, i128_to_scval};
    use shared::dto::soroban::NetworkType;
    use soroban_client::account::AccountBehavior;
    use soroban_client::xdr::{
        DecoratedSignature, HostFunction, LedgerFootprint, Memo, MuxedAccount, OperationBody, Signature,
        SignatureHint, SorobanResources, SorobanTransactionData, SorobanTransactionDataExt,
    };

    const SOURCE: &str = "GDOBGW2B4PHXXEOWAACCEVDZJJ6Q2EUZGTK5ZQNEVZZFP4VC3MD4223B";
    const RECIPIENT: &str = "GA5ZSEJYB37JRC5AVCIA5MOP4RHTM335X2KGX3IHOJAPP5RE34K4KZVN";
    const CONTRACT: &str = "CCQWMCHX6GPZDCKZRACJM35FRSA5M6BNG5Q23GRT4IPGG7I6P5ZAURV4";

    fn mint_call() -> ContractCall {
        ContractCall::new(
            CONTRACT,
            "mint",
            vec![address_to_scval(RECIPIENT).unwrap(), i128_to_scval(1_000)],
        )
    }

    fn build(passphrase: &str) -> UnsignedTransaction {
        let account = Account::new(SOURCE, "41").unwrap();
        mint_call().build(account, passphrase, 100, 30).unwrap()
    }

    fn v1(tx: &UnsignedTransaction) -> &soroban_client::xdr::Transaction {
        let TransactionEnvelope::Tx(env) = tx.envelope() else {
            panic!("expected v1 envelope");
        };
        &env.tx
    }

    #[test]
    fn test_build_sets_sequence_fee_and_time_bounds() {
        let tx = build(NetworkType::TESTNET_PASSPHRASE);

        assert_eq!(tx.sequence(), 42);
        assert_eq!(tx.fee(), 100);
        assert!(matches!(v1(&tx).memo, Memo::None));

        let Preconditions::Time(bounds) = &v1(&tx).cond else {
            panic!("expected time bounds");
        };
        assert_eq!(bounds.min_time.0, 0);
        assert!(bounds.max_time.0 > 0);
    }

    #[test]
    fn test_source_bytes() {
        let tx = build(NetworkType::TESTNET_PASSPHRASE);
        let MuxedAccount::Ed25519(key) = &v1(&tx).source_account else {
            panic!("expected ed25519 source");
        };
        assert_eq!(
            hex::encode(key.0),
            "dc135b41e3cf7b91d600042254794a7d0d129934d5dcc1a4ae7257f2a2db07cd"
        );
    }

    #[test]
    fn test_envelope_round_trip() {
        let tx = build(NetworkType::TESTNET_PASSPHRASE);
        let xdr = tx.to_xdr().unwrap();

        let envelope = decode_envelope(&xdr).unwrap();
        assert_eq!(signature_count(&envelope), 0);

        let TransactionEnvelope::Tx(env) = envelope else {
            panic!("expected v1 envelope");
        };
        let OperationBody::InvokeHostFunction(op) = &env.tx.operations[0].body else {
            panic!("expected invoke host function");
        };
        let HostFunction::InvokeContract(args) = &op.host_function else {
            panic!("expected contract invocation");
        };
        assert_eq!(args.function_name.0.to_utf8_string_lossy(), "mint");
        assert_eq!(args.args.len(), 2);
    }

    #[test]
    fn test_hash_depends_on_network() {
        let testnet = build(NetworkType::TESTNET_PASSPHRASE).hash();
        let mainnet = build(NetworkType::MAINNET_PASSPHRASE).hash();

        assert_eq!(testnet.len(), 64);
        assert_ne!(testnet, mainnet);
    }

    #[test]
    fn test_rejects_bad_contract_id() {
        let call = ContractCall::new(SOURCE, "mint", vec![]);
        assert!(matches!(call.to_operation(), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_rejects_bad_function_name() {
        let call = ContractCall::new(CONTRACT, "transfer-from", vec![]);
        assert!(matches!(call.to_operation(), Err(AppError::InvalidInput(_))));

        let call = ContractCall::new(CONTRACT, "a".repeat(33), vec![]);
        assert!(matches!(call.to_operation(), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_signed_transaction_keeps_resources_and_hash() {
        let mut tx = build(NetworkType::TESTNET_PASSPHRASE).transaction().clone();
        tx.soroban_data = Some(SorobanTransactionData {
            ext: SorobanTransactionDataExt::V0,
            resources: SorobanResources {
                footprint: LedgerFootprint {
                    read_only: vec![].try_into().unwrap(),
                    read_write: vec![].try_into().unwrap(),
                },
                instructions: 1_000,
                disk_read_bytes: 0,
                write_bytes: 0,
            },
            resource_fee: 58_181,
        });
        let prepared = UnsignedTransaction::new(tx).unwrap();

        let TransactionEnvelope::Tx(mut env) = prepared.envelope().clone() else {
            panic!("expected v1 envelope");
        };
        env.signatures = vec![DecoratedSignature {
            hint: SignatureHint([1, 2, 3, 4]),
            signature: Signature(vec![7u8; 64].try_into().unwrap()),
        }]
        .try_into()
        .unwrap();

        let signed = signed_transaction(TransactionEnvelope::Tx(env), NetworkType::TESTNET_PASSPHRASE).unwrap();

        assert_eq!(hex::encode(signed.hash()), prepared.hash());
        assert_eq!(signed.signatures.len(), 1);
        assert_eq!(signed.soroban_data.map(|data| data.resource_fee), Some(58_181));
    }

    #[test]
    fn test_decode_garbage() {
        assert!(matches!(decode_envelope("bm90IHhkcg=="), Err(AppError::XdrDecoding(_))));
    }
}
