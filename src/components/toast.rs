//! Status Toast Component
//!
//! The single transient status area shared by signup and unregister.

use leptos::*;

use crate::state::global::{GlobalState, StatusKind, StatusMessage};

/// Status area container; empty whenever no message is live
#[component]
pub fn StatusToast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed bottom-6 right-4 z-50">
            {move || {
                state.status.get().map(|message| view! {
                    <StatusLine message=message />
                })
            }}
        </div>
    }
}

#[component]
fn StatusLine(message: StatusMessage) -> impl IntoView {
    let (icon, bg_class) = match message.kind {
        StatusKind::Success => ("✓", "bg-green-600"),
        StatusKind::Error => ("✕", "bg-red-600"),
    };

    view! {
        <div class=format!(
            "message {} flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
             transform transition-all duration-300 ease-out animate-slide-in",
            message.kind.css_class(),
            bg_class
        )>
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{message.text}</span>
        </div>
    }
}
