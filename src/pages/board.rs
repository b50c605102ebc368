//! Board Page
//!
//! The activity board: toolbar, activity list, and signup form.

use leptos::*;

use crate::components::{ActivityCard, CardSkeleton, SignupForm, Toolbar};
use crate::state::catalog::{select_visible, Filters, SortKey};
use crate::state::global::GlobalState;

/// Activity board page component
#[component]
pub fn Board() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Toolbar control values, consumed exactly as written
    let (category, set_category) = create_signal(String::new());
    let (sort, set_sort) = create_signal(String::new());
    let (search, set_search) = create_signal(String::new());

    // Fetch the catalog on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        state_for_effect.refresh();
    });

    let activities = state.activities;
    let loading = state.loading;
    let load_failed = state.load_failed;

    // Display-ordered view of the catalog; recomputed whenever the catalog
    // or any criterion changes
    let visible = create_memo(move |_| {
        let filters = Filters {
            category: category.get(),
            search: search.get(),
            sort: SortKey::from_control(&sort.get()),
        };
        select_visible(&activities.get(), &filters)
    });

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Activities"</h1>
                    <p class="text-gray-400 mt-1">"Browse the catalog and find your spot"</p>
                </div>

                <div class="text-sm text-gray-400">
                    {move || format!("{} shown", visible.get().len())}
                </div>
            </div>

            // Activity list with its toolbar
            <section class="bg-gray-800/50 rounded-xl p-6 space-y-4">
                <Toolbar
                    category=category
                    set_category=set_category
                    sort=sort
                    set_sort=set_sort
                    search=search
                    set_search=set_search
                />

                {move || {
                    if load_failed.get() {
                        view! {
                            <p class="text-gray-400 py-8 text-center">
                                "Failed to load activities. Please try again later."
                            </p>
                        }.into_view()
                    } else if loading.get() && activities.get().is_empty() {
                        view! { <CardSkeleton count=3 /> }.into_view()
                    } else if visible.get().is_empty() {
                        view! {
                            <p class="text-gray-400 py-8 text-center">
                                "No activities match the current filters."
                            </p>
                        }.into_view()
                    } else {
                        view! {
                            <div class="grid md:grid-cols-2 gap-4">
                                {visible.get().into_iter().map(|(name, activity)| view! {
                                    <ActivityCard name=name activity=activity />
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }
                }}
            </section>

            // Signup section
            <section class="bg-gray-800 rounded-xl p-6 max-w-xl">
                <h2 class="text-xl font-semibold mb-4">"Sign Up for an Activity"</h2>
                <SignupForm visible=visible />
            </section>
        </div>
    }
}
