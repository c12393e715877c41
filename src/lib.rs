//! # price-compare-ui
//!
//! Leptos + WASM enhancements for the server-rendered cloud price listing.
//!
//! The listing page is plain HTML; this crate attaches to it after load and
//! provides the interactive pieces:
//!
//! - a two-row comparison selection that survives page loads
//!   ([`tracker`], persisted through [`storage`]),
//! - exclusive provider filter pills and the provider/service hidden field
//!   dependency ([`state::provider`]).
//!
//! Rules live in host-testable modules (`config`, `state`, `storage`,
//! `tracker`). Browser bindings are in `dom` and only build with the
//! `hydrate` feature.

pub mod components;
pub mod config;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod state;
pub mod storage;
pub mod tracker;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point: set up logging and wire every widget on the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    dom::install();
}

/// Reset the comparison selection. Callable from `onclick` attributes.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(js_name = clearSelection)]
pub fn clear_selection() {
    dom::compare::clear();
}

/// Apply a row checkbox change. Callable as `onclick="handleCheckbox(this)"`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(js_name = handleCheckbox)]
pub fn handle_checkbox(input: web_sys::HtmlInputElement) {
    dom::compare::toggle_row(&input);
}
