//! Console Page
//!
//! Connect panel plus one tab per group of contract entry points. Every
//! action follows the same path: parse the fields, build the envelope on the
//! backend, toast the outcome and hand the envelope to the sign page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use shared::dto::token::{MultisigOperation, TokenCall};

use crate::components::{NumberField, TextField};
use crate::forms::{self, FormResult};
use crate::services::api;
use crate::services::freighter::{self, WalletState};
use crate::state::console::{use_console_context, ConsoleContext};
use crate::utils::format::format_balance;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Transfer,
    Allowance,
    Burn,
    Freeze,
    Multisig,
    Admin,
}

impl Tab {
    const ALL: [Tab; 6] = [Tab::Transfer, Tab::Allowance, Tab::Burn, Tab::Freeze, Tab::Multisig, Tab::Admin];

    fn label(self) -> &'static str {
        match self {
            Tab::Transfer => "Transfer",
            Tab::Allowance => "Allowance",
            Tab::Burn => "Burn",
            Tab::Freeze => "Freeze",
            Tab::Multisig => "Multisig",
            Tab::Admin => "Admin",
        }
    }
}

// region: --- Dispatch

/// Build `call` for the current source account and move on to signing.
fn use_dispatch() -> impl Fn(&'static str, FormResult<TokenCall>) + Clone + 'static {
    let ctx = use_console_context();
    let navigate = use_navigate();

    move |label: &'static str, call: FormResult<TokenCall>| {
        let call = match call {
            Ok(call) => call,
            Err(e) => {
                ctx.toast_error(format!("{} failed", label), e.to_string());
                return;
            }
        };

        let source = ctx.source_account();
        if source.is_empty() {
            ctx.toast_error(format!("{} failed", label), "Connect an account first");
            return;
        }

        let navigate = navigate.clone();
        ctx.loading.set(true);
        log::info!("{}: {}", label, call.describe());

        leptos::task::spawn_local(async move {
            match api::build_transaction(&source, call).await {
                Ok(built) => {
                    log::info!("Built {} transaction {}", built.function, built.hash);
                    ctx.toast_info(format!("{} called", label));
                    ctx.last_built.set(Some(built));
                    navigate("/sign", Default::default());
                }
                Err(e) => {
                    log::error!("{} failed: {}", label, e);
                    ctx.toast_error(format!("{} failed", label), e.to_string());
                }
            }
            ctx.loading.set(false);
        });
    }
}

fn action_button(ctx: ConsoleContext, label: &'static str, on_click: impl Fn() + 'static) -> impl IntoView {
    view! {
        <button
            class="btn"
            style="width: 100%;"
            disabled=move || ctx.loading.get()
            on:click=move |_| on_click()
        >
            {move || if ctx.loading.get() { "Working..." } else { label }}
        </button>
    }
}

// endregion: --- Dispatch

// region: --- Connect panel

fn load_account(ctx: ConsoleContext, account_id: String) {
    ctx.loading.set(true);
    leptos::task::spawn_local(async move {
        match api::get_account(&account_id).await {
            Ok(account) => {
                ctx.balance.set(Some(account.native_balance));
                ctx.toast_success("Connected", format!("Account {} loaded", account.account_id));
            }
            Err(e) => {
                log::error!("Failed to load account {}: {}", account_id, e);
                ctx.balance.set(None);
                ctx.toast_error("Connection failed", e.to_string());
            }
        }
        ctx.loading.set(false);
    });
}

#[component]
fn ConnectPanel() -> impl IntoView {
    let ctx = use_console_context();

    let connect = move || {
        let account_id = ctx.public_key.get_untracked().trim().to_string();
        if account_id.is_empty() {
            ctx.toast_error("Connection failed", "Enter a Stellar public key");
            return;
        }
        load_account(ctx, account_id);
    };

    let connect_freighter = move || {
        if !freighter::is_installed() {
            ctx.toast_error("Freighter not found", "Install the Freighter extension to sign transactions");
            return;
        }
        ctx.wallet.set(WalletState::Connecting);
        leptos::task::spawn_local(async move {
            match freighter::connect().await {
                Ok(address) => {
                    log::info!("Freighter connected: {}", address);
                    ctx.wallet.set(WalletState::Connected { address: address.clone() });
                    ctx.public_key.set(address.clone());
                    load_account(ctx, address);
                }
                Err(e) => {
                    log::error!("Freighter connection failed: {}", e);
                    ctx.wallet.set(WalletState::Error(e.clone()));
                    ctx.toast_error("Wallet connection failed", e);
                }
            }
        });
    };

    view! {
        <div class="card">
            {move || ctx.network.with(|network| network.as_ref().map(|info| view! {
                <p class="muted" style="text-align: center; word-break: break-all;">
                    "Smart Contract Address: " {info.contract_id.clone()}
                </p>
            }))}
            <TextField label="Public key" value=ctx.public_key placeholder="Enter your Stellar public key"/>
            <div class="button-row">
                {action_button(ctx, "Connect Account", connect)}
                <button
                    class="btn-secondary"
                    style="width: 100%;"
                    disabled=move || ctx.wallet.with(|w| *w == WalletState::Connecting)
                    on:click=move |_| connect_freighter()
                >
                    {move || match ctx.wallet.get() {
                        WalletState::Connecting => "Connecting...".to_string(),
                        WalletState::Connected { .. } => "Freighter connected".to_string(),
                        _ => "Connect Freighter".to_string(),
                    }}
                </button>
            </div>
            {move || ctx.balance.get().map(|balance| view! {
                <p class="balance">"Account Balance: " {format_balance(&balance)} " XLM"</p>
            })}
        </div>
    }
}

// endregion: --- Connect panel

// region: --- Tabs

#[component]
fn TransferTab() -> impl IntoView {
    let ctx = use_console_context();
    let dispatch = use_dispatch();

    view! {
        <div class="tab-panel">
            <TextField label="Recipient Address" value=ctx.recipient placeholder="Enter recipient address"/>
            <NumberField label="Amount" value=ctx.amount/>
            {action_button(ctx, "Transfer", move || {
                dispatch(
                    "Transfer",
                    forms::transfer(&ctx.source_account(), &ctx.recipient.get_untracked(), &ctx.amount.get_untracked()),
                )
            })}
        </div>
    }
}

#[component]
fn AllowanceTab() -> impl IntoView {
    let ctx = use_console_context();
    let approve = use_dispatch();
    let transfer_from = approve.clone();

    view! {
        <div class="tab-panel">
            <h3 class="section-title">"Approve"</h3>
            <TextField label="Spender Address" value=ctx.spender placeholder="Enter spender address"/>
            <NumberField label="Allowance Amount" value=ctx.allowance/>
            <NumberField label="Expiration Ledger" value=ctx.allowance_expiration/>
            {action_button(ctx, "Approve", move || {
                approve(
                    "Approve",
                    forms::approve(
                        &ctx.source_account(),
                        &ctx.spender.get_untracked(),
                        &ctx.allowance.get_untracked(),
                        &ctx.allowance_expiration.get_untracked(),
                    ),
                )
            })}

            <h3 class="section-title">"Transfer From"</h3>
            <TextField label="From Address" value=ctx.from placeholder="Enter from address"/>
            <TextField label="Recipient Address" value=ctx.recipient placeholder="Enter recipient address"/>
            <NumberField label="Amount" value=ctx.amount/>
            {action_button(ctx, "Transfer From", move || {
                transfer_from(
                    "TransferFrom",
                    forms::transfer_from(
                        &ctx.source_account(),
                        &ctx.spender.get_untracked(),
                        &ctx.from.get_untracked(),
                        &ctx.recipient.get_untracked(),
                        &ctx.amount.get_untracked(),
                    ),
                )
            })}
        </div>
    }
}

#[component]
fn BurnTab() -> impl IntoView {
    let ctx = use_console_context();
    let burn = use_dispatch();
    let burn_from = burn.clone();

    view! {
        <div class="tab-panel">
            <NumberField label="Burn Amount" value=ctx.burn_amount/>
            {action_button(ctx, "Burn", move || {
                burn("Burn", forms::burn(&ctx.source_account(), &ctx.burn_amount.get_untracked()))
            })}

            <h3 class="section-title">"Burn From"</h3>
            <TextField label="Burn From Spender" value=ctx.burn_from_spender placeholder="Enter burn from spender"/>
            <TextField label="Burn From Address" value=ctx.burn_from_from placeholder="Enter burn from address"/>
            <NumberField label="Burn From Amount" value=ctx.burn_from_amount/>
            {action_button(ctx, "Burn From", move || {
                burn_from(
                    "BurnFrom",
                    forms::burn_from(
                        &ctx.source_account(),
                        &ctx.burn_from_spender.get_untracked(),
                        &ctx.burn_from_from.get_untracked(),
                        &ctx.burn_from_amount.get_untracked(),
                    ),
                )
            })}
        </div>
    }
}

#[component]
fn FreezeTab() -> impl IntoView {
    let ctx = use_console_context();
    let freeze = use_dispatch();
    let unfreeze = freeze.clone();

    view! {
        <div class="tab-panel">
            <TextField label="Account to Freeze" value=ctx.freeze_account placeholder="Enter account address"/>
            {action_button(ctx, "Freeze Account", move || {
                freeze("FreezeAccount", forms::freeze(&ctx.freeze_account.get_untracked()))
            })}

            <TextField label="Account to Unfreeze" value=ctx.unfreeze_account placeholder="Enter account address"/>
            {action_button(ctx, "Unfreeze Account", move || {
                unfreeze("UnfreezeAccount", forms::unfreeze(&ctx.unfreeze_account.get_untracked()))
            })}
        </div>
    }
}

#[component]
fn MultisigTab() -> impl IntoView {
    let ctx = use_console_context();
    let setup = use_dispatch();
    let propose = setup.clone();
    let approve = setup.clone();

    view! {
        <div class="tab-panel">
            <h3 class="section-title">"Setup Multisig"</h3>
            <TextField label="Owners (comma separated)" value=ctx.multisig_owners placeholder="GABC..., GDEF..."/>
            <NumberField label="Threshold" value=ctx.multisig_threshold/>
            {action_button(ctx, "Setup Multisig", move || {
                setup(
                    "setupMultisig",
                    forms::setup_multisig(&ctx.multisig_owners.get_untracked(), &ctx.multisig_threshold.get_untracked()),
                )
            })}

            <h3 class="section-title">"Propose Multisig Transaction"</h3>
            <div class="form-control">
                <label class="form-label">"Function"</label>
                <select
                    class="input"
                    prop:value=move || ctx.ms_function.get()
                    on:change=move |ev| ctx.ms_function.set(event_target_value(&ev))
                >
                    {MultisigOperation::ALL
                        .iter()
                        .map(|op| view! { <option value=op.as_str()>{op.as_str()}</option> })
                        .collect_view()}
                </select>
            </div>
            <TextField label="To" value=ctx.ms_to placeholder="Enter target address"/>
            <NumberField label="Amount" value=ctx.ms_amount/>
            <NumberField label="Expiration Ledger" value=ctx.ms_expiration/>
            {action_button(ctx, "Propose", move || {
                propose(
                    "proposeMultisigTransaction",
                    forms::propose(
                        &ctx.source_account(),
                        &ctx.ms_function.get_untracked(),
                        &ctx.ms_to.get_untracked(),
                        &ctx.ms_amount.get_untracked(),
                        &ctx.ms_expiration.get_untracked(),
                    ),
                )
            })}

            <h3 class="section-title">"Approve Multisig Transaction"</h3>
            <NumberField label="Transaction ID" value=ctx.ms_tx_id/>
            {action_button(ctx, "Approve Proposal", move || {
                approve(
                    "approveMultisigTransaction",
                    forms::approve_proposal(&ctx.source_account(), &ctx.ms_tx_id.get_untracked()),
                )
            })}
        </div>
    }
}

#[component]
fn AdminTab() -> impl IntoView {
    let ctx = use_console_context();
    let mint = use_dispatch();
    let set_admin = mint.clone();

    view! {
        <div class="tab-panel">
            <h3 class="section-title">"Mint"</h3>
            <TextField label="Mint To" value=ctx.mint_to placeholder="Enter recipient address"/>
            <NumberField label="Mint Amount" value=ctx.mint_amount/>
            {action_button(ctx, "Mint", move || {
                mint("Mint", forms::mint(&ctx.mint_to.get_untracked(), &ctx.mint_amount.get_untracked()))
            })}

            <h3 class="section-title">"Set Admin"</h3>
            <TextField label="New Admin" value=ctx.new_admin placeholder="Enter new admin address"/>
            {action_button(ctx, "Set Admin", move || {
                set_admin("SetAdmin", forms::set_admin(&ctx.new_admin.get_untracked()))
            })}
        </div>
    }
}

// endregion: --- Tabs

#[component]
pub fn ConsolePage() -> impl IntoView {
    let ctx = use_console_context();
    let (tab, set_tab) = signal(Tab::Transfer);

    view! {
        <div class="console-container">
            <h1 class="page-title">"Token Console"</h1>
            <ConnectPanel/>

            <Show when=move || ctx.is_loaded()>
                <div class="card">
                    <div class="tab-list">
                        {Tab::ALL
                            .into_iter()
                            .map(|t| view! {
                                <button
                                    class=move || if tab.get() == t { "tab tab-active" } else { "tab" }
                                    on:click=move |_| set_tab.set(t)
                                >
                                    {t.label()}
                                </button>
                            })
                            .collect_view()}
                    </div>
                    {move || match tab.get() {
                        Tab::Transfer => view! { <TransferTab/> }.into_any(),
                        Tab::Allowance => view! { <AllowanceTab/> }.into_any(),
                        Tab::Burn => view! { <BurnTab/> }.into_any(),
                        Tab::Freeze => view! { <FreezeTab/> }.into_any(),
                        Tab::Multisig => view! { <MultisigTab/> }.into_any(),
                        Tab::Admin => view! { <AdminTab/> }.into_any(),
                    }}
                </div>
            </Show>
        </div>
    }
}
