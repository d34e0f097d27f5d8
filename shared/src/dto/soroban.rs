use serde::{Deserialize, Serialize};

/// Read-only contract call, answered by simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallContractFunctionRequest {
    /// Defaults to the configured token contract when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_id: Option<String>,
    pub function_name: String,
    #[serde(default)]
    pub parameters: Vec<FunctionParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_account: Option<String>,
}

/// Typed contract argument.
///
/// `Enum` follows the contract type encoding: a vector holding the variant
/// symbol and, for tuple variants, its payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum FunctionParameter {
    Symbol(String),
    Address(String),
    U32(u32),
    I32(i32),
    U64(u64),
    I64(i64),
    I128(i128),
    String(String),
    Bool(bool),
    Bytes(Vec<u8>),
    Vec(Vec<FunctionParameter>),
    Enum(String, Option<Box<FunctionParameter>>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallContractFunctionResponse {
    pub success: bool,
    pub result: Option<serde_json::Value>,
    pub error: Option<String>,
    pub result_xdr: Option<String>,
    pub simulation: Option<SimulationDetailsDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimulationDetailsDto {
    pub latest_ledger: Option<u32>,
    /// Stroops added on top of the inclusion fee
    pub min_resource_fee: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    Testnet,
    Mainnet,
    Futurenet,
    Standalone,
}

impl NetworkType {
    pub const TESTNET_PASSPHRASE: &'static str = "Test SDF Network ; September 2015";
    pub const MAINNET_PASSPHRASE: &'static str = "Public Global Stellar Network ; September 2015";
    pub const FUTURENET_PASSPHRASE: &'static str = "Test SDF Future Network ; October 2022";

    /// Network a passphrase belongs to. Unknown passphrases are treated as standalone.
    pub fn from_passphrase(passphrase: &str) -> Self {
        match passphrase {
            Self::TESTNET_PASSPHRASE => NetworkType::Testnet,
            Self::MAINNET_PASSPHRASE => NetworkType::Mainnet,
            Self::FUTURENET_PASSPHRASE => NetworkType::Futurenet,
            _ => NetworkType::Standalone,
        }
    }
}

/// Network and contract the backend builds transactions for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkInfo {
    pub contract_id: String,
    pub network: NetworkType,
    pub network_passphrase: String,
    pub rpc_url: String,
    pub horizon_url: String,
    pub default_account: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_ledger: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_from_passphrase() {
        assert_eq!(
            NetworkType::from_passphrase("Test SDF Network ; September 2015"),
            NetworkType::Testnet
        );
        assert_eq!(
            NetworkType::from_passphrase("Public Global Stellar Network ; September 2015"),
            NetworkType::Mainnet
        );
        assert_eq!(
            NetworkType::from_passphrase("Standalone Network ; February 2017"),
            NetworkType::Standalone
        );
    }

    #[test]
    fn test_call_request_defaults() {
        let request: CallContractFunctionRequest =
            serde_json::from_str(r#"{"function_name":"decimals"}"#).unwrap();
        assert!(request.contract_id.is_none());
        assert!(request.parameters.is_empty());
    }
}
