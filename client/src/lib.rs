//! # client
//!
//! Leptos + WASM frontend for the adpilot marketing suite.
//!
//! This crate contains pages, components, application state and the REST
//! helpers that talk to the marketing backend. Request/response shapes and
//! the pure business helpers live in the shared `wire` crate.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
