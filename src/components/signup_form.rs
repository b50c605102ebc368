//! Signup Form Component
//!
//! Email entry plus activity selection, posting to the signup endpoint.
//! The server is the authority on email format, capacity, and duplicates;
//! the form submits whatever was typed.

use leptos::*;

use crate::api;
use crate::state::catalog::Activity;
use crate::state::global::GlobalState;

/// Signup form component
#[component]
pub fn SignupForm(visible: Memo<Vec<(String, Activity)>>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (email, set_email) = create_signal(String::new());
    let (selected, set_selected) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let activity = selected.get();
        let address = email.get();

        set_submitting.set(true);

        let state_clone = state.clone();
        spawn_local(async move {
            match api::signup(&activity, &address).await {
                Ok(message) => {
                    state_clone.show_success(&message);

                    // Fields reset only on success
                    set_email.set(String::new());
                    set_selected.set(String::new());

                    state_clone.refresh();
                }
                Err(e) => {
                    state_clone.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            // Email input
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                <input
                    type="text"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            // Activity selector, mirroring the list's current order
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Activity"</label>
                <select
                    on:change=move |ev| set_selected.set(event_target_value(&ev))
                    prop:value=move || selected.get()
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                >
                    <option value="">"-- Select an activity --"</option>

                    {move || {
                        visible.get()
                            .into_iter()
                            .map(|(name, _)| view! {
                                <option value=name.clone()>{name}</option>
                            })
                            .collect_view()
                    }}
                </select>
            </div>

            // Submit button
            <button
                type="submit"
                disabled=move || submitting.get()
                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                       transition-colors flex items-center justify-center space-x-2"
            >
                {move || if submitting.get() {
                    view! {
                        <div class="loading-spinner w-5 h-5" />
                        <span>"Signing up..."</span>
                    }.into_view()
                } else {
                    view! {
                        <span>"Sign Up"</span>
                    }.into_view()
                }}
            </button>
        </form>
    }
}
