//! Console state management
//!
//! Every form field lives in its own signal so inputs bind directly with
//! `bind:value`. Amount-like fields are kept as text and only parsed when an
//! action fires (see [`crate::forms`]).

use leptos::prelude::*;
use shared::dto::soroban::NetworkInfo;
use shared::dto::transaction::BuildTransactionResponse;

use crate::services::freighter::WalletState;
use crate::utils::constants::{DEFAULT_MULTISIG_THRESHOLD, TOAST_DURATION_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: String,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

/// Global console context
#[derive(Clone, Copy)]
pub struct ConsoleContext {
    // Connection
    pub network: RwSignal<Option<NetworkInfo>>,
    pub wallet: RwSignal<WalletState>,
    pub public_key: RwSignal<String>,
    pub balance: RwSignal<Option<String>>,

    // Transfer / allowance
    pub recipient: RwSignal<String>,
    pub amount: RwSignal<String>,
    pub spender: RwSignal<String>,
    pub allowance: RwSignal<String>,
    pub allowance_expiration: RwSignal<String>,
    pub from: RwSignal<String>,

    // Burn
    pub burn_amount: RwSignal<String>,
    pub burn_from_spender: RwSignal<String>,
    pub burn_from_from: RwSignal<String>,
    pub burn_from_amount: RwSignal<String>,

    // Freeze
    pub freeze_account: RwSignal<String>,
    pub unfreeze_account: RwSignal<String>,

    // Multisig
    pub multisig_owners: RwSignal<String>,
    pub multisig_threshold: RwSignal<String>,
    pub ms_function: RwSignal<String>,
    pub ms_to: RwSignal<String>,
    pub ms_amount: RwSignal<String>,
    pub ms_expiration: RwSignal<String>,
    pub ms_tx_id: RwSignal<String>,

    // Admin
    pub mint_to: RwSignal<String>,
    pub mint_amount: RwSignal<String>,
    pub new_admin: RwSignal<String>,

    pub loading: RwSignal<bool>,
    pub last_built: RwSignal<Option<BuildTransactionResponse>>,
    pub toasts: RwSignal<Vec<Toast>>,
}

impl ConsoleContext {
    pub fn new() -> Self {
        let text = |value: &str| RwSignal::new(value.to_string());
        Self {
            network: RwSignal::new(None),
            wallet: RwSignal::new(WalletState::Disconnected),
            public_key: text(""),
            balance: RwSignal::new(None),

            recipient: text(""),
            amount: text("0"),
            spender: text(""),
            allowance: text("0"),
            allowance_expiration: text("0"),
            from: text(""),

            burn_amount: text("0"),
            burn_from_spender: text(""),
            burn_from_from: text(""),
            burn_from_amount: text("0"),

            freeze_account: text(""),
            unfreeze_account: text(""),

            multisig_owners: text(""),
            multisig_threshold: text(DEFAULT_MULTISIG_THRESHOLD),
            ms_function: text("transfer"),
            ms_to: text(""),
            ms_amount: text("0"),
            ms_expiration: text("0"),
            ms_tx_id: text(""),

            mint_to: text(""),
            mint_amount: text("0"),
            new_admin: text(""),

            loading: RwSignal::new(false),
            last_built: RwSignal::new(None),
            toasts: RwSignal::new(Vec::new()),
        }
    }

    /// Account the console acts as: the connected wallet, else the typed key.
    pub fn source_account(&self) -> String {
        self.wallet
            .with_untracked(|w| w.address().map(str::to_string))
            .unwrap_or_else(|| self.public_key.get_untracked().trim().to_string())
    }

    pub fn is_loaded(&self) -> bool {
        self.balance.with(Option::is_some)
    }

    fn push_toast(&self, kind: ToastKind, title: String, description: Option<String>) {
        let id = uuid::Uuid::new_v4().to_string();
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id: id.clone(),
                kind,
                title,
                description,
            })
        });

        let toasts = self.toasts;
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
            toasts.update(|toasts| toasts.retain(|t| t.id != id));
        });
    }

    pub fn toast_info(&self, title: impl Into<String>) {
        self.push_toast(ToastKind::Info, title.into(), None);
    }

    pub fn toast_success(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push_toast(ToastKind::Success, title.into(), Some(description.into()));
    }

    pub fn toast_error(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push_toast(ToastKind::Error, title.into(), Some(description.into()));
    }

    pub fn dismiss_toast(&self, id: &str) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Default for ConsoleContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_console_context() -> ConsoleContext {
    let context = ConsoleContext::new();
    provide_context(context);
    context
}

pub fn use_console_context() -> ConsoleContext {
    expect_context::<ConsoleContext>()
}
