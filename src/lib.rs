//! Terminal browser for the Rick and Morty character API, built around an
//! explicit state container with slice-based subscriptions.

pub mod api;
pub mod config;
pub mod store;
pub mod trace;
pub mod ui;
