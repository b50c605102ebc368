//! UI Components
//!
//! Reusable Leptos components for the board.

pub mod nav;
pub mod toolbar;
pub mod activity_card;
pub mod signup_form;
pub mod loading;
pub mod toast;

pub use nav::Nav;
pub use toolbar::Toolbar;
pub use activity_card::ActivityCard;
pub use signup_form::SignupForm;
pub use loading::CardSkeleton;
pub use toast::StatusToast;
