//! Loading Component
//!
//! Skeleton state shown while the first catalog fetch is in flight.

use leptos::*;

/// Skeleton loader shaped like a column of activity cards
#[component]
pub fn CardSkeleton(
    #[prop(default = 3)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="space-y-3 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-gray-800 rounded-lg p-4">
                    <div class="h-4 bg-gray-700 rounded w-1/3 mb-4" />
                    <div class="h-8 bg-gray-700 rounded w-1/2 mb-2" />
                    <div class="h-4 bg-gray-700 rounded w-2/3" />
                </div>
            }).collect_view()}
        </div>
    }
}
