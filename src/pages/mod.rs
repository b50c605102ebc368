//! Pages
//!
//! Top-level page components for each route.

pub mod board;
pub mod settings;

pub use board::Board;
pub use settings::Settings;
