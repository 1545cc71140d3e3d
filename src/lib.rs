//! # workdesk
//!
//! Leptos + WASM administrative client for the work-order management system.
//!
//! This crate contains the routed pages, the session store backing login and
//! role-gated navigation, the REST helpers for the backend API, and the
//! `localStorage` glue that lets a session survive page reloads.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entrypoint: install the panic hook and console logger, then
/// hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
