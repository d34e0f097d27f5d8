//! Transaction signing page
//!
//! Shows the envelope the console last built, signs it with Freighter,
//! submits it through the backend and follows its status until the network
//! settles on an outcome.

use leptos::prelude::*;
use leptos_router::components::A;
use shared::dto::transaction::BuildTransactionResponse;
use shared::utils::truncate_address;

use crate::services::api;
use crate::services::freighter;
use crate::state::console::{use_console_context, ConsoleContext};
use crate::utils::constants::{STATUS_POLL_ATTEMPTS, STATUS_POLL_INTERVAL_MS, STELLAR_EXPERT_TX};
use crate::utils::format::short_hash;

#[derive(Clone, Debug, PartialEq)]
enum Stage {
    Review,
    Signing,
    Submitted { hash: String, status: String },
}

/// Poll until the transaction leaves NOT_FOUND or we run out of attempts.
async fn follow_status(hash: String, set_stage: WriteSignal<Stage>, ctx: ConsoleContext) {
    for _ in 0..STATUS_POLL_ATTEMPTS {
        gloo_timers::future::TimeoutFuture::new(STATUS_POLL_INTERVAL_MS).await;

        match api::get_transaction_status(&hash).await {
            Ok(status) if status.status == "NOT_FOUND" => continue,
            Ok(status) => {
                match status.status.as_str() {
                    "SUCCESS" => ctx.toast_success(
                        "Transaction confirmed",
                        format!("Included in ledger {}", status.ledger.unwrap_or_default()),
                    ),
                    other => ctx.toast_error("Transaction failed", format!("Status {}", other)),
                }
                set_stage.set(Stage::Submitted { hash, status: status.status });
                return;
            }
            Err(e) => {
                log::warn!("Status check for {} failed: {}", hash, e);
            }
        }
    }
    log::warn!("Gave up following {}", hash);
}

async fn sign_and_submit(built: BuildTransactionResponse, ctx: ConsoleContext, set_stage: WriteSignal<Stage>) {
    match freighter::network().await {
        Ok(Some(wallet)) if wallet.network_passphrase != built.network_passphrase => {
            ctx.toast_error(
                "Wrong network",
                format!("Freighter is on {}, switch it to the console's network", wallet.network),
            );
            set_stage.set(Stage::Review);
            return;
        }
        Ok(_) => {}
        Err(e) => log::warn!("Could not read Freighter network: {}", e),
    }

    let signed = match freighter::sign_transaction(&built.xdr, &built.network_passphrase, &built.source).await {
        Ok(signed) => signed,
        Err(e) => {
            log::error!("Failed to sign transaction: {}", e);
            ctx.toast_error("Signing failed", e);
            set_stage.set(Stage::Review);
            return;
        }
    };
    log::info!("Transaction signed successfully");

    match api::submit_transaction(signed).await {
        Ok(submitted) => {
            if let Some(reason) = submitted.rejection() {
                log::warn!("Transaction not accepted: {} ({})", submitted.hash, submitted.status);
                ctx.toast_error("Submission failed", reason);
                set_stage.set(Stage::Review);
                return;
            }

            log::info!("Transaction submitted: {} ({})", submitted.hash, submitted.status);
            ctx.toast_success("Transaction submitted", short_hash(&submitted.hash));
            ctx.last_built.set(None);
            let hash = submitted.hash.clone();
            set_stage.set(Stage::Submitted { hash: submitted.hash, status: submitted.status });
            follow_status(hash, set_stage, ctx).await;
        }
        Err(e) => {
            log::error!("Transaction submission failed: {}", e);
            ctx.toast_error("Submission failed", e.to_string());
            set_stage.set(Stage::Review);
        }
    }
}

#[component]
pub fn SignPage() -> impl IntoView {
    let ctx = use_console_context();
    let (stage, set_stage) = signal(Stage::Review);

    let sign = move || {
        let Some(built) = ctx.last_built.get_untracked() else {
            ctx.toast_error("Nothing to sign", "Build a transaction from the console first");
            return;
        };
        if !freighter::is_installed() {
            ctx.toast_error("Freighter not found", "Install the Freighter extension to sign transactions");
            return;
        }

        set_stage.set(Stage::Signing);
        ctx.loading.set(true);
        leptos::task::spawn_local(async move {
            sign_and_submit(built, ctx, set_stage).await;
            ctx.loading.set(false);
        });
    };

    let review = move |built: BuildTransactionResponse| {
        let simulation = built.simulation.clone().map(|sim| {
            view! {
                <p>"Resource fee: " {sim.min_resource_fee.unwrap_or_else(|| "-".to_string())}</p>
            }
        });

        view! {
            <div class="info" style="margin: 16px 0;">
                <p style="margin-bottom: 8px;">"Review Transaction Details"</p>
                <p>"Function: " <span class="mono">{built.function.clone()}</span></p>
                <p>"Source: " <span class="mono" title=built.source.clone()>{truncate_address(&built.source)}</span></p>
                <p>"Sequence: " {built.sequence}</p>
                <p>"Fee (stroops): " {built.fee}</p>
                {simulation}
                <p>"Hash: " <span class="mono">{short_hash(&built.hash)}</span></p>
            </div>
            <textarea class="input mono xdr" readonly=true rows="6">{built.xdr.clone()}</textarea>
            <button
                class="btn-secondary"
                style="width: 100%; padding: 16px; margin-top: 16px;"
                disabled=move || stage.get() == Stage::Signing
                on:click=move |_| sign()
            >
                {move || if stage.get() == Stage::Signing { "Signing..." } else { "Sign and Submit Transaction" }}
            </button>
            {move || (stage.get() == Stage::Signing).then(|| view! {
                <div style="text-align: center; margin-top: 16px;">
                    <div class="spinner"></div>
                    <p class="muted">"Please approve the transaction in Freighter..."</p>
                </div>
            })}
        }
    };

    view! {
        <div class="page-center">
            <div class="card" style="max-width: 640px; width: 100%;">
                <h1 class="card-title">"Sign Transaction"</h1>
                {move || match stage.get() {
                    Stage::Submitted { hash, status } => view! {
                        <div class="success">
                            <p style="text-align: center; font-weight: bold;">"Transaction Signed and Submitted"</p>
                            <p class="muted">"Hash:"</p>
                            <p class="mono" style="word-break: break-all;">{hash.clone()}</p>
                            <p>"Status: " {status}</p>
                            <a href=format!("{}{}", STELLAR_EXPERT_TX, hash) target="_blank" rel="noopener">
                                "View on Stellar Expert"
                            </a>
                        </div>
                        <A href="/"><span class="btn" style="margin-top: 16px; display: inline-block;">"Back to Console"</span></A>
                    }.into_any(),
                    _ => match ctx.last_built.get() {
                        Some(built) => review(built).into_any(),
                        None => view! {
                            <div class="error">
                                <p>"No transaction to sign"</p>
                                <p style="font-size: 0.9em; margin-top: 8px;">
                                    "Pick an action on the console to build one."
                                </p>
                            </div>
                            <A href="/"><span class="btn" style="margin-top: 16px; display: inline-block;">"Back to Console"</span></A>
                        }.into_any(),
                    },
                }}
            </div>
        </div>
    }
}
