//! Activity Board
//!
//! Sign-up board for extracurricular activities, built with Leptos (WASM).
//!
//! # Features
//!
//! - Activity catalog with category, sort, and text filters
//! - Signup and unregister straight from the board
//! - Transient status messages for action outcomes
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the activity sign-up REST API over HTTP: the
//! catalog is fetched in full, filtered and sorted in memory, and re-fetched
//! after every successful signup or unregistration.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
