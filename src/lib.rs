//! # account-ui
//!
//! Leptos + WASM frontend for the account service: a single page offering
//! sign-up and log-in forms that talk to the account REST API.
//!
//! This crate contains the page, the two form components, per-form state
//! machines, network types, and the HTTP API helpers. Form logic lives in
//! plain structs under [`state`] so it is testable without a browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
