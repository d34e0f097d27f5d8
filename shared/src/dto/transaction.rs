use serde::{Deserialize, Serialize};

use super::soroban::SimulationDetailsDto;
use super::token::TokenCall;

/// Build an unsigned transaction invoking one token entry point.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BuildTransactionRequest {
    /// Account that pays the fee and provides the sequence number
    pub source: String,
    pub call: TokenCall,
    /// Run the call through simulation and attach its footprint and auth entries
    #[serde(default = "default_simulate")]
    pub simulate: bool,
}

fn default_simulate() -> bool {
    true
}

/// Unsigned transaction envelope, ready for the wallet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BuildTransactionResponse {
    /// Base64 `TransactionEnvelope` XDR
    pub xdr: String,
    /// Hex transaction hash (what the wallet signs)
    pub hash: String,
    pub function: String,
    pub source: String,
    pub sequence: i64,
    pub fee: u32,
    pub network_passphrase: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulation: Option<SimulationDetailsDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmitTransactionRequest {
    pub signed_xdr: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmitTransactionResponse {
    pub hash: String,
    /// RPC status: PENDING, DUPLICATE, TRY_AGAIN_LATER or ERROR
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmitTransactionResponse {
    /// Why the network did not take the envelope, or `None` when it is queued.
    /// Only `PENDING` and `DUPLICATE` without an error count as accepted.
    pub fn rejection(&self) -> Option<String> {
        match (self.status.as_str(), &self.error) {
            ("PENDING" | "DUPLICATE", None) => None,
            (_, Some(error)) => Some(error.clone()),
            (status, None) => Some(format!("Network returned {}", status)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionStatusResponse {
    pub hash: String,
    /// RPC status: SUCCESS, FAILED or NOT_FOUND
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ledger: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_request_simulates_by_default() {
        let request: BuildTransactionRequest = serde_json::from_value(json!({
            "source": "GDOBGW2B4PHXXEOWAACCEVDZJJ6Q2EUZGTK5ZQNEVZZFP4VC3MD4223B",
            "call": {
                "function": "approve_multisig_transaction",
                "owner": "GDOBGW2B4PHXXEOWAACCEVDZJJ6Q2EUZGTK5ZQNEVZZFP4VC3MD4223B",
                "transaction_id": 3
            }
        }))
        .unwrap();

        assert!(request.simulate);
        assert_eq!(request.call.function_name(), "approve_multisig_transaction");
    }

    fn submitted(status: &str, error: Option<&str>) -> SubmitTransactionResponse {
        SubmitTransactionResponse {
            hash: "ab".repeat(32),
            status: status.to_string(),
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn test_pending_and_duplicate_are_accepted() {
        assert_eq!(submitted("PENDING", None).rejection(), None);
        assert_eq!(submitted("DUPLICATE", None).rejection(), None);
    }

    #[test]
    fn test_busy_network_is_rejected() {
        assert_eq!(
            submitted("TRY_AGAIN_LATER", Some("Network is busy, try again later")).rejection(),
            Some("Network is busy, try again later".to_string())
        );
        assert_eq!(
            submitted("TRY_AGAIN_LATER", None).rejection(),
            Some("Network returned TRY_AGAIN_LATER".to_string())
        );
    }

    #[test]
    fn test_any_error_is_rejected() {
        assert!(submitted("ERROR", None).rejection().is_some());
        assert_eq!(
            submitted("PENDING", Some("tx_bad_seq")).rejection(),
            Some("tx_bad_seq".to_string())
        );
    }
}
