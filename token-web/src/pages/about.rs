//! About Page

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page-center">
            <div class="card about-container">
                <h1 class="card-title" style="text-align: center;">"About Token Console"</h1>

                <p class="muted">
                    "Token Console operates a Soroban token contract on the Stellar test network.
                    Each form builds one contract call; the backend loads your account, simulates
                    the call and returns an unsigned envelope that Freighter signs in the browser."
                </p>

                <h2 class="section-title">"Features"</h2>
                <ul class="muted">
                    <li>"Transfers, allowances and delegated transfers"</li>
                    <li>"Burning from your own or an approved balance"</li>
                    <li>"Freezing and unfreezing accounts"</li>
                    <li>"Multisig owner sets, proposals and approvals"</li>
                    <li>"Minting and admin rotation"</li>
                </ul>

                <h2 class="section-title">"Technology"</h2>
                <p class="muted">
                    "The console is written in Rust with Leptos and compiled to WebAssembly. The
                    backend is an axum service talking to Horizon and Soroban RPC, and the token
                    contract itself is a Soroban contract built with soroban-sdk."
                </p>
            </div>
        </div>
    }
}
