//! # eexplo-client
//!
//! Leptos + WASM frontend for the Eexplo travel and stays site.
//!
//! Pages compose independent sections. Content-bound sections fetch from the
//! content provider after mounting and fall back to the placeholder catalog;
//! widgets (accordion, contact form, carousel, marquee, video toggle) keep
//! their own local state.

#![recursion_limit = "256"]
pub mod app;
pub mod catalog;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
