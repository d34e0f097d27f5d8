//! # ScVal Conversions
//!
//! Contract arguments go in as [`ScVal`]s; read-only results come back as [`ScVal`]s
//! and are rendered to JSON for the console.
//!
//! 128-bit integers are rendered as decimal strings so JavaScript clients do not
//! lose precision.

use serde_json::{json, Value};
use shared::dto::soroban::FunctionParameter;
use soroban_client::address::{Address, AddressTrait};
use soroban_client::xdr::{
    Int128Parts, ScAddress, ScBytes, ScString, ScSymbol, ScVal, ScVec, UInt128Parts, VecM,
};

use crate::error::{AppError, Result};

pub fn i128_to_scval(value: i128) -> ScVal {
    let hi = (value >> 64) as i64;
    let lo = value as u64;
    ScVal::I128(Int128Parts { hi, lo })
}

pub fn i128_from_parts(parts: &Int128Parts) -> i128 {
    ((parts.hi as i128) << 64) | parts.lo as i128
}

pub fn u128_from_parts(parts: &UInt128Parts) -> u128 {
    ((parts.hi as u128) << 64) | parts.lo as u128
}

/// `G...` account or `C...` contract strkey to an address value.
pub fn address_to_scval(address: &str) -> Result<ScVal> {
    let addr = Address::new(address)
        .map_err(|e| AppError::InvalidInput(format!("Invalid address '{}': {:?}", address, e)))?;
    addr.to_sc_val()
        .map_err(|e| AppError::XdrEncoding(format!("Failed to convert address: {:?}", e)))
}

pub fn symbol_to_scval(symbol: &str) -> Result<ScVal> {
    let inner = symbol
        .try_into()
        .map_err(|_| AppError::InvalidInput(format!("Invalid symbol '{}' (max 32 chars)", symbol)))?;
    Ok(ScVal::Symbol(ScSymbol(inner)))
}

pub fn string_to_scval(value: &str) -> Result<ScVal> {
    let inner = value
        .try_into()
        .map_err(|_| AppError::InvalidInput("String argument too long".to_string()))?;
    Ok(ScVal::String(ScString(inner)))
}

pub fn vec_to_scval(items: Vec<ScVal>) -> Result<ScVal> {
    let items: VecM<ScVal> = items.try_into()?;
    Ok(ScVal::Vec(Some(ScVec(items))))
}

/// Convert a typed console parameter into a contract argument.
///
/// Enum parameters follow the contract type encoding: `Vec[Symbol(variant), payload?]`.
pub fn parameter_to_scval(param: &FunctionParameter) -> Result<ScVal> {
    match param {
        FunctionParameter::Symbol(s) => symbol_to_scval(s),
        FunctionParameter::Address(a) => address_to_scval(a),
        FunctionParameter::U32(v) => Ok(ScVal::U32(*v)),
        FunctionParameter::I32(v) => Ok(ScVal::I32(*v)),
        FunctionParameter::U64(v) => Ok(ScVal::U64(*v)),
        FunctionParameter::I64(v) => Ok(ScVal::I64(*v)),
        FunctionParameter::I128(v) => Ok(i128_to_scval(*v)),
        FunctionParameter::String(s) => string_to_scval(s),
        FunctionParameter::Bool(b) => Ok(ScVal::Bool(*b)),
        FunctionParameter::Bytes(bytes) => {
            let inner = bytes.clone().try_into()?;
            Ok(ScVal::Bytes(ScBytes(inner)))
        }
        FunctionParameter::Vec(items) => {
            let items = items.iter().map(parameter_to_scval).collect::<Result<Vec<_>>>()?;
            vec_to_scval(items)
        }
        FunctionParameter::Enum(variant, payload) => {
            let mut items = vec![symbol_to_scval(variant)?];
            if let Some(inner) = payload {
                items.push(parameter_to_scval(inner)?);
            }
            vec_to_scval(items)
        }
    }
}

pub fn parameters_to_scvals(params: &[FunctionParameter]) -> Result<Vec<ScVal>> {
    params.iter().map(parameter_to_scval).collect()
}

/// Render a contract return value as JSON.
pub fn scval_to_json(value: &ScVal) -> Value {
    match value {
        ScVal::Bool(b) => json!(b),
        ScVal::Void => Value::Null,
        ScVal::U32(v) => json!(v),
        ScVal::I32(v) => json!(v),
        ScVal::U64(v) => json!(v),
        ScVal::I64(v) => json!(v),
        ScVal::U128(parts) => json!(u128_from_parts(parts).to_string()),
        ScVal::I128(parts) => json!(i128_from_parts(parts).to_string()),
        ScVal::String(s) => json!(s.0.to_utf8_string_lossy()),
        ScVal::Symbol(s) => json!(s.0.to_utf8_string_lossy()),
        ScVal::Bytes(b) => json!(hex::encode(&b.0)),
        ScVal::Address(addr) => json!(address_to_string(addr)),
        ScVal::Vec(Some(items)) => Value::Array(items.0.iter().map(scval_to_json).collect()),
        ScVal::Vec(None) => Value::Array(vec![]),
        ScVal::Map(Some(entries)) => {
            let mut map = serde_json::Map::new();
            for entry in entries.0.iter() {
                let key = match scval_to_json(&entry.key) {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                map.insert(key, scval_to_json(&entry.val));
            }
            Value::Object(map)
        }
        ScVal::Map(None) => Value::Object(serde_json::Map::new()),
        other => json!(format!("{:?}", other)),
    }
}

fn address_to_string(addr: &ScAddress) -> String {
    Address::from_sc_address(addr)
        .map(|a| AddressTrait::to_string(&a))
        .unwrap_or_else(|_| format!("{:?}", addr))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCOUNT: &str = "GDOBGW2B4PHXXEOWAACCEVDZJJ6Q2EUZGTK5ZQNEVZZFP4VC3MD4223B";
    const CONTRACT: &str = "CCQWMCHX6GPZDCKZRACJM35FRSA5M6BNG5Q23GRT4IPGG7I6P5ZAURV4";

    #[test]
    fn test_i128_parts() {
        for value in [0i128, 1, -1, 10_000_000_000, i128::MAX, i128::MIN, (1i128 << 64) + 5] {
            let ScVal::I128(parts) = i128_to_scval(value) else {
                panic!("expected i128");
            };
            assert_eq!(i128_from_parts(&parts), value);
        }

        let ScVal::I128(parts) = i128_to_scval(-1) else { unreachable!() };
        assert_eq!(parts.hi, -1);
        assert_eq!(parts.lo, u64::MAX);
    }

    #[test]
    fn test_address_kinds() {
        let ScVal::Address(account) = address_to_scval(ACCOUNT).unwrap() else {
            panic!("expected address");
        };
        assert!(matches!(account, ScAddress::Account(_)));

        let ScVal::Address(contract) = address_to_scval(CONTRACT).unwrap() else {
            panic!("expected address");
        };
        assert!(matches!(contract, ScAddress::Contract(_)));
    }

    #[test]
    fn test_invalid_address() {
        let err = address_to_scval("not-an-address").unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_symbol_length_limit() {
        assert!(symbol_to_scval("transfer").is_ok());
        let long = "a".repeat(33);
        assert!(matches!(symbol_to_scval(&long), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_enum_parameter() {
        let param = FunctionParameter::Enum(
            "Other".to_string(),
            Some(Box::new(FunctionParameter::Symbol("XLM".to_string()))),
        );
        let ScVal::Vec(Some(items)) = parameter_to_scval(&param).unwrap() else {
            panic!("expected vec");
        };
        assert_eq!(items.0.len(), 2);
        assert_eq!(scval_to_json(&items.0[0]), json!("Other"));
        assert_eq!(scval_to_json(&items.0[1]), json!("XLM"));

        let unit = FunctionParameter::Enum("None".to_string(), None);
        let ScVal::Vec(Some(items)) = parameter_to_scval(&unit).unwrap() else {
            panic!("expected vec");
        };
        assert_eq!(items.0.len(), 1);
    }

    #[test]
    fn test_scval_to_json() {
        assert_eq!(scval_to_json(&ScVal::U32(7)), json!(7));
        assert_eq!(scval_to_json(&ScVal::Void), Value::Null);
        assert_eq!(scval_to_json(&i128_to_scval(-250)), json!("-250"));
        assert_eq!(scval_to_json(&string_to_scval("Token").unwrap()), json!("Token"));

        let list = vec_to_scval(vec![ScVal::Bool(true), ScVal::U64(3)]).unwrap();
        assert_eq!(scval_to_json(&list), json!([true, 3]));
    }

    #[test]
    fn test_address_renders_as_strkey() {
        let value = address_to_scval(ACCOUNT).unwrap();
        assert_eq!(scval_to_json(&value), json!(ACCOUNT));
    }
}
