//! # catalog-admin
//!
//! Leptos + WASM admin client for a multi-tenant product catalog.
//!
//! ARCHITECTURE
//! ============
//! - `net`: HTTP gateway, typed resource accessors, and wire schemas.
//! - `state`: session store, view guard, and per-screen list state. Plain
//!   Rust, testable without a browser.
//! - `pages` / `components`: route screens and shared chrome.
//! - `util`: browser-facing helpers (storage, clock, timers, formatting).

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
