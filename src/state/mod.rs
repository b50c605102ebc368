//! State Management
//!
//! Global application state and the pure catalog pipeline.

pub mod catalog;
pub mod global;

pub use catalog::{
    derive_category, distinct_categories, select_visible, Activity, Catalog, Filters, SortKey,
};
pub use global::{provide_global_state, GlobalState, StatusKind, StatusMessage};
