//! Freighter Wallet Integration via wasm-bindgen
//!
//! Binds to the `freighterApi` global exposed by the Freighter API bundle
//! loaded in index.html. Both the v1 API (plain string results) and the
//! v2+ API (result objects carrying an `error` field) are handled on the
//! JavaScript side so Rust only ever sees strings.

use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = "
function api() {
    const freighter = window.freighterApi;
    if (!freighter) {
        throw new Error('Freighter not found. Install the extension from https://freighter.app');
    }
    return freighter;
}

function unwrap(result, field) {
    if (result && typeof result === 'object') {
        if (result.error) {
            throw new Error(result.error.message || String(result.error));
        }
        return result[field];
    }
    return result;
}

export function isFreighterInstalled() {
    return typeof window.freighterApi !== 'undefined';
}

export async function connectFreighter() {
    const freighter = api();
    let address;
    if (typeof freighter.requestAccess === 'function') {
        address = unwrap(await freighter.requestAccess(), 'address');
    }
    if (!address && typeof freighter.getAddress === 'function') {
        address = unwrap(await freighter.getAddress(), 'address');
    }
    if (!address && typeof freighter.getPublicKey === 'function') {
        address = unwrap(await freighter.getPublicKey(), 'publicKey');
    }
    if (!address) {
        throw new Error('Freighter did not share an account. Unlock the wallet and try again.');
    }
    return String(address);
}

export async function freighterNetwork() {
    const freighter = api();
    if (typeof freighter.getNetworkDetails === 'function') {
        const details = await freighter.getNetworkDetails();
        if (details && !details.error) {
            return { network: details.network || '', networkPassphrase: details.networkPassphrase || '' };
        }
    }
    return null;
}

export async function signWithFreighter(xdr, networkPassphrase, address) {
    const freighter = api();
    const opts = { networkPassphrase: networkPassphrase };
    if (address) {
        opts.address = address;
        opts.accountToSign = address;
    }
    const signed = unwrap(await freighter.signTransaction(xdr, opts), 'signedTxXdr');
    if (!signed) {
        throw new Error('Freighter returned no signed transaction');
    }
    return String(signed);
}
")]
extern "C" {
    fn isFreighterInstalled() -> bool;

    #[wasm_bindgen(catch)]
    async fn connectFreighter() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn freighterNetwork() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn signWithFreighter(xdr: &str, network_passphrase: &str, address: &str) -> Result<JsValue, JsValue>;
}

/// Wallet connection state
#[derive(Clone, Debug, PartialEq)]
pub enum WalletState {
    Disconnected,
    Connecting,
    Connected { address: String },
    Error(String),
}

impl WalletState {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletState::Connected { .. })
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            WalletState::Connected { address } => Some(address),
            _ => None,
        }
    }
}

/// Network the wallet is currently pointed at.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalletNetwork {
    pub network: String,
    pub network_passphrase: String,
}

fn js_error(e: JsValue, context: &str) -> String {
    if let Some(message) = e.as_string() {
        return message;
    }
    js_sys::Reflect::get(&e, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{}: {:?}", context, e))
}

pub fn is_installed() -> bool {
    isFreighterInstalled()
}

/// Ask Freighter for access and return the selected account.
pub async fn connect() -> Result<String, String> {
    let address = connectFreighter()
        .await
        .map_err(|e| js_error(e, "Connection error"))?;
    address
        .as_string()
        .ok_or_else(|| "Freighter returned a non-string address".to_string())
}

/// `None` when the installed Freighter cannot report its network.
pub async fn network() -> Result<Option<WalletNetwork>, String> {
    let value = freighterNetwork()
        .await
        .map_err(|e| js_error(e, "Network lookup error"))?;
    if value.is_null() || value.is_undefined() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(value)
        .map(Some)
        .map_err(|e| format!("Unexpected network details: {}", e))
}

/// Sign a base64 envelope for `network_passphrase`; returns the signed envelope.
pub async fn sign_transaction(xdr: &str, network_passphrase: &str, address: &str) -> Result<String, String> {
    let signed = signWithFreighter(xdr, network_passphrase, address)
        .await
        .map_err(|e| js_error(e, "Sign error"))?;
    signed
        .as_string()
        .ok_or_else(|| "Freighter returned a non-string envelope".to_string())
}
