//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use super::catalog::{distinct_categories, Catalog};

/// How long a status message stays visible
const STATUS_VISIBLE_MS: u32 = 5_000;

/// Outcome style for the shared status area
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    /// CSS class carried by the status area
    pub fn css_class(self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

/// A transient message shown in the shared status area
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Activities as last fetched, in server document order
    pub activities: RwSignal<Catalog>,
    /// Distinct categories in discovery order, for the filter control
    pub categories: RwSignal<Vec<String>>,
    /// Catalog fetch in flight
    pub loading: RwSignal<bool>,
    /// Last catalog fetch failed; the list area shows the failure text
    pub load_failed: RwSignal<bool>,
    /// Message currently occupying the status area
    pub status: RwSignal<Option<StatusMessage>>,
    /// Bumped on every show; a hide timer armed for an older value must
    /// leave the area alone
    status_seq: RwSignal<u64>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new());
}

impl Default for GlobalState {
    fn default() -> Self {
        Self::new()
    }
}

impl GlobalState {
    /// Fresh state: empty catalog, nothing in flight, no status message
    pub fn new() -> Self {
        Self {
            activities: create_rw_signal(Catalog::new()),
            categories: create_rw_signal(Vec::new()),
            loading: create_rw_signal(false),
            load_failed: create_rw_signal(false),
            status: create_rw_signal(None),
            status_seq: create_rw_signal(0),
        }
    }

    /// Replace the catalog wholesale and rederive the category facets
    pub fn install_catalog(&self, catalog: Catalog) {
        self.categories.set(distinct_categories(&catalog));
        self.activities.set(catalog);
        self.load_failed.set(false);
    }

    /// Fetch the catalog and install it; on failure flag the list area
    /// instead of touching the status area
    pub fn refresh(&self) {
        let state = self.clone();
        self.loading.set(true);

        spawn_local(async move {
            match crate::api::fetch_activities().await {
                Ok(catalog) => state.install_catalog(catalog),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch activities: {}", e).into(),
                    );
                    state.load_failed.set(true);
                }
            }
            state.loading.set(false);
        });
    }

    /// Put a message in the status area and arm its hide timer
    pub fn show_status(&self, kind: StatusKind, text: &str) {
        let seq = self.arm_status(StatusMessage {
            text: text.to_string(),
            kind,
        });

        let state = self.clone();
        gloo_timers::callback::Timeout::new(STATUS_VISIBLE_MS, move || {
            state.clear_status_if_current(seq);
        })
        .forget();
    }

    /// Publish a message; returns the generation its hide timer arms for
    fn arm_status(&self, message: StatusMessage) -> u64 {
        let seq = self.status_seq.get_untracked() + 1;
        self.status_seq.set(seq);
        self.status.set(Some(message));
        seq
    }

    /// Hide-timer body: only the live generation's timer clears the area
    fn clear_status_if_current(&self, armed: u64) {
        // A newer message owns the area now
        if self.status_seq.get_untracked() != armed {
            return;
        }
        self.status.set(None);
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, text: &str) {
        self.show_status(StatusKind::Success, text);
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, text: &str) {
        self.show_status(StatusKind::Error, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog::Activity;

    #[test]
    fn test_status_kind_classes() {
        assert_eq!(StatusKind::Success.css_class(), "success");
        assert_eq!(StatusKind::Error.css_class(), "error");
    }

    #[test]
    fn test_install_catalog_rederives_categories() {
        let runtime = create_runtime();

        let state = GlobalState::new();
        state.load_failed.set(true);

        let mut catalog = Catalog::new();
        catalog.insert(
            "Chess Club".to_string(),
            Activity {
                description: "Learn strategies".to_string(),
                schedule: "Fridays".to_string(),
                max_participants: 12,
                participants: Vec::new(),
                category: None,
            },
        );
        catalog.insert(
            "Chess Tournament".to_string(),
            Activity {
                description: "Bracket play".to_string(),
                schedule: "Saturdays".to_string(),
                max_participants: 16,
                participants: Vec::new(),
                category: None,
            },
        );
        state.install_catalog(catalog);

        assert_eq!(state.categories.get_untracked(), vec!["Chess"]);
        assert_eq!(state.activities.get_untracked().len(), 2);
        assert!(!state.load_failed.get_untracked());

        runtime.dispose();
    }

    #[test]
    fn test_superseded_hide_timer_leaves_newer_message() {
        let runtime = create_runtime();

        let state = GlobalState::new();
        let first = state.arm_status(StatusMessage {
            text: "Signed up alex@example.com for Chess Club".to_string(),
            kind: StatusKind::Success,
        });
        let second = state.arm_status(StatusMessage {
            text: "Not registered".to_string(),
            kind: StatusKind::Error,
        });

        // The older timer fires inside the newer message's window
        state.clear_status_if_current(first);
        let live = state.status.get_untracked();
        assert_eq!(live.map(|m| m.text), Some("Not registered".to_string()));

        // The newer message's own timer still clears the area
        state.clear_status_if_current(second);
        assert!(state.status.get_untracked().is_none());

        runtime.dispose();
    }
}
