//! Browser glue binding page markup to the client state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only compiled with the `hydrate` feature. Everything here is a thin mapping
//! between DOM events/attributes and the pure modules in `state`, `storage`
//! and `tracker`; behavior lives in those modules and is tested there.

pub mod compare;
pub mod provider;

use wasm_bindgen::JsCast;
use web_sys::Document;

use crate::config::{ATTR_FIELD_NAME, ATTR_STORAGE_KEY, ATTR_WARNING, PageConfig};

/// Wire every widget present on the current page.
pub fn install() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("no document available; page widgets not installed");
        return;
    };
    let config = page_config(&document);

    compare::install(&document, &config);
    provider::install_pills(&document, &config);
    provider::install_form_sync(&document, &config);
}

/// Read `data-compare-*` overrides from `<body>`.
fn page_config(document: &Document) -> PageConfig {
    let Some(dataset) = document.body().map(|b| b.dataset()) else {
        return PageConfig::default();
    };
    PageConfig::from_lookup(|key| match key {
        ATTR_STORAGE_KEY | ATTR_FIELD_NAME | ATTR_WARNING => dataset.get(key),
        _ => None,
    })
}

/// All elements matching `selector`, cast to `T`; non-matching types are skipped.
pub(crate) fn query_all<T: JsCast>(root: &web_sys::Element, selector: &str) -> Vec<T> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("invalid selector: {selector}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Document-wide variant of [`query_all`].
pub(crate) fn query_document<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    match document.document_element() {
        Some(root) => query_all(&root, selector),
        None => Vec::new(),
    }
}
