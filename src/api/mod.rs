//! API Client
//!
//! HTTP access to the activity sign-up REST API.

pub mod client;

pub use client::*;
