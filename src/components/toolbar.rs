//! Toolbar Component
//!
//! Category filter, sort selector, and search box for the activity list.
//! The controls only write their signals; the board derives the visible
//! list from them.

use leptos::*;

use crate::state::global::GlobalState;

/// Toolbar with the three independent list criteria
#[component]
pub fn Toolbar(
    category: ReadSignal<String>,
    set_category: WriteSignal<String>,
    sort: ReadSignal<String>,
    set_sort: WriteSignal<String>,
    search: ReadSignal<String>,
    set_search: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="flex flex-wrap items-center gap-3">
            <CategorySelect category=category set_category=set_category />

            // Sort selector
            <select
                on:change=move |ev| set_sort.set(event_target_value(&ev))
                prop:value=move || sort.get()
                class="bg-gray-700 rounded-lg px-4 py-2 text-white
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            >
                <option value="">"Default order"</option>
                <option value="name">"Sort by name"</option>
                <option value="schedule">"Sort by schedule"</option>
            </select>

            // Search box
            <input
                type="text"
                placeholder="Search activities..."
                prop:value=move || search.get()
                on:input=move |ev| set_search.set(event_target_value(&ev))
                class="flex-1 min-w-48 bg-gray-700 rounded-lg px-4 py-2 text-white
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}

#[component]
fn CategorySelect(
    category: ReadSignal<String>,
    set_category: WriteSignal<String>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <select
            on:change=move |ev| set_category.set(event_target_value(&ev))
            prop:value=move || category.get()
            class="bg-gray-700 rounded-lg px-4 py-2 text-white
                   border border-gray-600 focus:border-primary-500 focus:outline-none"
        >
            <option value="">"All"</option>

            // Dynamic options rebuilt from the current catalog
            {move || {
                state.categories.get()
                    .into_iter()
                    .map(|category| view! {
                        <option value=category.clone()>{category}</option>
                    })
                    .collect_view()
            }}
        </select>
    }
}
