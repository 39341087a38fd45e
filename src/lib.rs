#![recursion_limit = "256"]

pub mod common;
pub mod config;
pub mod content;
pub mod forms;
pub mod frontend;
pub mod models;
pub mod motion;
pub mod state;

/// WASM hydration entry point
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(frontend::App);
}
