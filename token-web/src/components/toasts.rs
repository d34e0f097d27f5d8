//! Toast notifications

use leptos::prelude::*;

use crate::state::console::{use_console_context, ToastKind};

#[component]
pub fn Toasts() -> impl IntoView {
    let ctx = use_console_context();

    view! {
        <div class="toast-stack">
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id.clone()
                children=move |toast| {
                    let class = match toast.kind {
                        ToastKind::Info => "toast toast-info",
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                    };
                    let id = toast.id.clone();
                    view! {
                        <div class=class>
                            <div class="toast-body">
                                <p class="toast-title">{toast.title}</p>
                                {toast.description.map(|d| view! { <p class="toast-description">{d}</p> })}
                            </div>
                            <button class="toast-close" on:click=move |_| ctx.dismiss_toast(&id)>"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
