//! # portal-client
//!
//! Leptos + WASM frontend for the IPTV support portal.
//!
//! This crate contains the portal shell, the three submission forms and their
//! card-building logic, toast and view state, and the browser side of the
//! create-card call. The server links it with the `ssr` feature for
//! server-side rendering and reuses the wire types in `net::types`.

pub mod app;
pub mod components;
pub mod forms;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
