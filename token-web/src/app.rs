//! Token Console web app - router and global context

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::components::{Navbar, Toasts};
use crate::pages::{AboutPage, ConsolePage, SignPage};
use crate::services::api;
use crate::state::console::provide_console_context;

#[component]
pub fn App() -> impl IntoView {
    let ctx = provide_console_context();

    // Network and contract come from the backend so the UI never hardcodes them
    leptos::task::spawn_local(async move {
        match api::get_network().await {
            Ok(info) => {
                log::info!("Backend on {:?}, contract {}", info.network, info.contract_id);
                if ctx.public_key.with_untracked(|key| key.is_empty()) {
                    ctx.public_key.set(info.default_account.clone());
                }
                ctx.network.set(Some(info));
            }
            Err(e) => {
                log::error!("Failed to load network info: {}", e);
                ctx.toast_error("Backend unreachable", e.to_string());
            }
        }
    });

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=ConsolePage/>
                    <Route path=path!("/sign") view=SignPage/>
                    <Route path=path!("/about") view=AboutPage/>
                </Routes>
                <Toasts/>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page-center">
            <div class="card" style="max-width: 500px; text-align: center;">
                <h1 class="card-title">"404 - Page Not Found"</h1>
                <p class="muted">"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn" style="margin-top: 20px; display: inline-block;">
                        "Back to Console"
                    </span>
                </A>
            </div>
        </div>
    }
}
