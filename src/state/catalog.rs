//! Activity Catalog
//!
//! The catalog data model and the pure filter/search/sort pipeline that
//! decides which activities are displayed and in what order.

use std::cmp::Ordering;

use indexmap::IndexMap;

/// A single activity as served by the sign-up API
#[derive(Clone, Debug, serde::Deserialize, PartialEq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl Activity {
    /// Remaining capacity; negative when the roster is over capacity
    pub fn spots_left(&self) -> i64 {
        self.max_participants - self.participants.len() as i64
    }
}

/// Activities keyed by name, in server document order
pub type Catalog = IndexMap<String, Activity>;

/// Category facet for one activity: the explicit `category` field when the
/// server provides one, otherwise the first whitespace-delimited token of
/// the activity name
pub fn derive_category(name: &str, activity: &Activity) -> String {
    match &activity.category {
        Some(category) => category.clone(),
        None => name.split_whitespace().next().unwrap_or(name).to_string(),
    }
}

/// Distinct categories across the catalog, in order of first appearance
pub fn distinct_categories(catalog: &Catalog) -> Vec<String> {
    let mut categories = Vec::new();
    for (name, activity) in catalog {
        let category = derive_category(name, activity);
        if !categories.contains(&category) {
            categories.push(category);
        }
    }
    categories
}

/// Sort order selected in the toolbar
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Keep the catalog's own order
    #[default]
    Unsorted,
    Name,
    Schedule,
}

impl SortKey {
    /// Parse a sort-select control value; anything unrecognized keeps the
    /// catalog order
    pub fn from_control(value: &str) -> Self {
        match value {
            "name" => SortKey::Name,
            "schedule" => SortKey::Schedule,
            _ => SortKey::Unsorted,
        }
    }
}

/// The three independent toolbar criteria
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filters {
    /// Exact category to keep; empty keeps every activity
    pub category: String,
    /// Substring to search for; empty keeps every activity
    pub search: String,
    pub sort: SortKey,
}

/// Case-insensitive ordering with the raw strings as tie-break, so equal
/// keys still have a deterministic order
fn compare_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Apply the category filter, then the search, then the sort, yielding the
/// display-ordered (name, activity) sequence. Pure: same catalog and
/// filters always produce the same sequence.
pub fn select_visible(catalog: &Catalog, filters: &Filters) -> Vec<(String, Activity)> {
    let term = filters.search.trim().to_lowercase();

    let mut visible: Vec<(String, Activity)> = catalog
        .iter()
        .filter(|(name, activity)| {
            filters.category.is_empty() || derive_category(name, activity) == filters.category
        })
        .filter(|(name, activity)| {
            term.is_empty()
                || name.to_lowercase().contains(&term)
                || activity.description.to_lowercase().contains(&term)
                || activity.schedule.to_lowercase().contains(&term)
        })
        .map(|(name, activity)| (name.clone(), activity.clone()))
        .collect();

    match filters.sort {
        SortKey::Name => visible.sort_by(|a, b| compare_ci(&a.0, &b.0)),
        SortKey::Schedule => visible.sort_by(|a, b| compare_ci(&a.1.schedule, &b.1.schedule)),
        SortKey::Unsorted => {}
    }

    visible
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(description: &str, schedule: &str, max: i64, participants: &[&str]) -> Activity {
        Activity {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants: max,
            participants: participants.iter().map(|p| p.to_string()).collect(),
            category: None,
        }
    }

    fn sample_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.insert(
            "Chess Club".to_string(),
            activity(
                "Learn strategies and compete",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["alex@example.com", "sam@example.com"],
            ),
        );
        catalog.insert(
            "Art Workshop".to_string(),
            Activity {
                category: Some("Creative".to_string()),
                ..activity("Painting and drawing", "Tuesdays, 3:30 PM - 5:00 PM", 15, &[])
            },
        );
        catalog.insert(
            "Soccer Practice".to_string(),
            activity(
                "Weekly training sessions",
                "Mondays, 4:00 PM - 5:30 PM",
                22,
                &["jordan@example.com"],
            ),
        );
        catalog.insert(
            "Chess Tournament".to_string(),
            activity("Monthly bracket play", "Saturdays, 10:00 AM", 16, &[]),
        );
        catalog
    }

    #[test]
    fn test_category_falls_back_to_first_name_token() {
        let act = activity("", "", 10, &[]);
        assert_eq!(derive_category("Chess Club", &act), "Chess");
        assert_eq!(derive_category("Swimming", &act), "Swimming");
    }

    #[test]
    fn test_category_prefers_explicit_field() {
        let act = Activity {
            category: Some("Creative".to_string()),
            ..activity("", "", 10, &[])
        };
        assert_eq!(derive_category("Art Workshop", &act), "Creative");
    }

    #[test]
    fn test_distinct_categories_keep_first_appearance_order() {
        let catalog = sample_catalog();
        assert_eq!(
            distinct_categories(&catalog),
            vec!["Chess", "Creative", "Soccer"]
        );
    }

    #[test]
    fn test_category_filter_is_exact() {
        let catalog = sample_catalog();
        let filters = Filters {
            category: "Chess".to_string(),
            ..Filters::default()
        };
        let names: Vec<String> = select_visible(&catalog, &filters)
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["Chess Club", "Chess Tournament"]);
    }

    #[test]
    fn test_empty_filters_keep_catalog_order() {
        let catalog = sample_catalog();
        let names: Vec<String> = select_visible(&catalog, &Filters::default())
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(
            names,
            vec!["Chess Club", "Art Workshop", "Soccer Practice", "Chess Tournament"]
        );
    }

    #[test]
    fn test_search_is_case_insensitive_and_trimmed() {
        let catalog = sample_catalog();
        let filters = Filters {
            search: "  SOCCER ".to_string(),
            ..Filters::default()
        };
        let visible = select_visible(&catalog, &filters);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].0, "Soccer Practice");
    }

    #[test]
    fn test_search_matches_description_and_schedule() {
        let catalog = sample_catalog();

        let by_description = Filters {
            search: "bracket".to_string(),
            ..Filters::default()
        };
        assert_eq!(select_visible(&catalog, &by_description)[0].0, "Chess Tournament");

        let by_schedule = Filters {
            search: "mondays".to_string(),
            ..Filters::default()
        };
        assert_eq!(select_visible(&catalog, &by_schedule)[0].0, "Soccer Practice");
    }

    #[test]
    fn test_search_with_no_match_yields_empty() {
        let catalog = sample_catalog();
        let filters = Filters {
            search: "robotics".to_string(),
            ..Filters::default()
        };
        assert!(select_visible(&catalog, &filters).is_empty());
    }

    #[test]
    fn test_sort_by_name_is_non_decreasing() {
        let catalog = sample_catalog();
        let filters = Filters {
            sort: SortKey::Name,
            ..Filters::default()
        };
        let visible = select_visible(&catalog, &filters);
        for pair in visible.windows(2) {
            assert_ne!(compare_ci(&pair[0].0, &pair[1].0), Ordering::Greater);
        }
    }

    #[test]
    fn test_sort_by_schedule_is_non_decreasing() {
        let catalog = sample_catalog();
        let filters = Filters {
            sort: SortKey::Schedule,
            ..Filters::default()
        };
        let visible = select_visible(&catalog, &filters);
        for pair in visible.windows(2) {
            assert_ne!(
                compare_ci(&pair[0].1.schedule, &pair[1].1.schedule),
                Ordering::Greater
            );
        }
    }

    #[test]
    fn test_sort_ignores_case() {
        let mut catalog = Catalog::new();
        catalog.insert("banana club".to_string(), activity("", "", 5, &[]));
        catalog.insert("Apple Club".to_string(), activity("", "", 5, &[]));
        let filters = Filters {
            sort: SortKey::Name,
            ..Filters::default()
        };
        let visible = select_visible(&catalog, &filters);
        assert_eq!(visible[0].0, "Apple Club");
        assert_eq!(visible[1].0, "banana club");
    }

    #[test]
    fn test_filter_order_does_not_matter() {
        let catalog = sample_catalog();
        let combined = Filters {
            category: "Chess".to_string(),
            search: "club".to_string(),
            ..Filters::default()
        };

        // Category first, then search over the survivors
        let category_only = Filters {
            category: "Chess".to_string(),
            ..Filters::default()
        };
        let narrowed: Catalog = select_visible(&catalog, &category_only).into_iter().collect();
        let search_only = Filters {
            search: "club".to_string(),
            ..Filters::default()
        };

        assert_eq!(
            select_visible(&catalog, &combined),
            select_visible(&narrowed, &search_only)
        );
    }

    #[test]
    fn test_pipeline_is_deterministic() {
        let catalog = sample_catalog();
        let filters = Filters {
            category: "Chess".to_string(),
            search: "c".to_string(),
            sort: SortKey::Name,
        };
        assert_eq!(
            select_visible(&catalog, &filters),
            select_visible(&catalog, &filters)
        );
    }

    #[test]
    fn test_spots_left_subtracts_roster() {
        let act = activity("", "", 10, &["a@example.com", "b@example.com"]);
        assert_eq!(act.spots_left(), 8);
    }

    #[test]
    fn test_spots_left_goes_negative_when_over_capacity() {
        let act = activity("", "", 2, &["a@example.com", "b@example.com", "c@example.com"]);
        assert_eq!(act.spots_left(), -1);
    }

    #[test]
    fn test_activity_decodes_with_missing_optional_fields() {
        let json = r#"{
            "description": "Learn strategies and compete",
            "schedule": "Fridays, 3:30 PM - 5:00 PM",
            "max_participants": 12
        }"#;
        let act: Activity = serde_json::from_str(json).unwrap();
        assert!(act.participants.is_empty());
        assert_eq!(act.category, None);
        assert_eq!(act.spots_left(), 12);
    }

    #[test]
    fn test_catalog_preserves_document_order() {
        let json = r#"{
            "Zebra Watching": {"description": "", "schedule": "", "max_participants": 5},
            "Art Workshop": {"description": "", "schedule": "", "max_participants": 5},
            "Math Circle": {"description": "", "schedule": "", "max_participants": 5}
        }"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        let names: Vec<&String> = catalog.keys().collect();
        assert_eq!(names, vec!["Zebra Watching", "Art Workshop", "Math Circle"]);
    }
}
