//! Activity Card Component
//!
//! One card per activity: description, schedule, remaining spots, and the
//! participant roster with unregister controls.

use leptos::*;

use crate::api;
use crate::state::catalog::{derive_category, Activity};
use crate::state::global::GlobalState;

/// Shown in the roster area when nobody is signed up
const EMPTY_ROSTER_TEXT: &str = "No participants yet";

/// Roster area content: the placeholder takes the spot of an empty list
#[derive(Debug, PartialEq)]
enum Roster {
    Empty,
    Rows(Vec<String>),
}

fn roster_view(participants: Vec<String>) -> Roster {
    if participants.is_empty() {
        Roster::Empty
    } else {
        Roster::Rows(participants)
    }
}

/// Card for a single activity
#[component]
pub fn ActivityCard(name: String, activity: Activity) -> impl IntoView {
    let spots = activity.spots_left();
    let category = derive_category(&name, &activity);
    let Activity {
        description,
        schedule,
        participants,
        ..
    } = activity;

    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700 hover:border-gray-600 transition-colors">
            <div class="flex items-start justify-between">
                <h4 class="font-semibold text-white">{name.clone()}</h4>
                <span class="bg-gray-600 text-gray-200 text-xs px-2 py-0.5 rounded-full">
                    {category}
                </span>
            </div>

            <p class="text-gray-400 text-sm mt-1">{description}</p>
            <p class="text-sm text-gray-300 mt-2">
                <span class="text-gray-500">"Schedule: "</span>
                {schedule}
            </p>
            <p class="text-sm text-gray-300 mt-1">
                <span class="text-gray-500">"Availability: "</span>
                {spots}" spots left"
            </p>

            <div class="mt-3 pt-3 border-t border-gray-700">
                {match roster_view(participants) {
                    Roster::Empty => view! {
                        <p class="text-gray-500 text-sm italic">{EMPTY_ROSTER_TEXT}</p>
                    }.into_view(),
                    Roster::Rows(emails) => view! {
                        <div>
                            <h5 class="text-sm text-gray-400 mb-1">"Participants"</h5>
                            <ul class="space-y-1">
                                {emails.into_iter().map(|email| view! {
                                    <ParticipantRow activity=name.clone() email=email />
                                }).collect_view()}
                            </ul>
                        </div>
                    }.into_view(),
                }}
            </div>
        </div>
    }
}

/// One roster row with its unregister control
#[component]
fn ParticipantRow(activity: String, email: String) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let email_label = email.clone();
    let on_unregister = move |_| {
        let activity = activity.clone();
        let email = email.clone();

        let state_clone = state.clone();
        spawn_local(async move {
            match api::unregister(&activity, &email).await {
                Ok(message) => {
                    state_clone.show_success(&message);
                    state_clone.refresh();
                }
                Err(e) => {
                    state_clone.show_error(&e);
                }
            }
        });
    };

    view! {
        <li class="flex items-center justify-between bg-gray-700/50 rounded px-2 py-1">
            <span class="text-sm text-gray-300">{email_label}</span>
            <button
                on:click=on_unregister
                title="Unregister"
                class="text-gray-400 hover:text-red-400 text-sm transition-colors"
            >
                "✕"
            </button>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_roster_shows_placeholder() {
        assert_eq!(roster_view(Vec::new()), Roster::Empty);
        assert_eq!(EMPTY_ROSTER_TEXT, "No participants yet");
    }

    #[test]
    fn test_roster_keeps_registration_order() {
        let roster = roster_view(vec![
            "alex@example.com".to_string(),
            "sam@example.com".to_string(),
        ]);
        assert_eq!(
            roster,
            Roster::Rows(vec![
                "alex@example.com".to_string(),
                "sam@example.com".to_string(),
            ])
        );
    }
}
