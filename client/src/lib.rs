//! # vibe-client
//!
//! Leptos + WASM frontend for Find Your Vibe.
//!
//! This crate contains the route-level pages (home, dashboard, login,
//! signup), the shared navbar and small presentational components, the
//! view-state models they read from context, and the pure helpers (link
//! matching, form validation) that keep page logic testable without a
//! browser.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic/log hooks and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
