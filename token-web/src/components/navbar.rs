//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;
use shared::utils::truncate_address;

use crate::state::console::use_console_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_console_context();

    let network_badge = move || {
        ctx.network.with(|network| {
            network
                .as_ref()
                .map(|info| format!("{:?}", info.network).to_lowercase())
                .unwrap_or_else(|| "offline".to_string())
        })
    };

    view! {
        <nav>
            <div class="nav-inner">
                <A href="/" attr:class="nav-link-clean">
                    <span class="nav-title">"Token Console"</span>
                </A>
                <div class="nav-links">
                    <A href="/sign" attr:class="nav-link">"Sign"</A>
                    <A href="/about" attr:class="nav-link">"About"</A>
                    <span class="badge">{network_badge}</span>
                    {move || ctx.wallet.with(|w| w.address().map(|address| view! {
                        <span class="badge badge-wallet" title=address.to_string()>
                            {truncate_address(address)}
                        </span>
                    }))}
                </div>
            </div>
        </nav>
    }
}
