//! Row checkboxes, compare button and compare form.

use std::cell::RefCell;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement};

use super::{query_all, query_document};
use crate::components::compare_fields::CompareFields;
use crate::config::PageConfig;
use crate::state::projection::FormProjection;
use crate::state::selection::Selection;
use crate::storage::LocalStorageStore;
use crate::tracker::{CompareSurface, SelectionTracker};

type PageTracker = SelectionTracker<LocalStorageStore, DocumentSurface>;

thread_local! {
    static TRACKER: RefCell<Option<PageTracker>> = const { RefCell::new(None) };
}

/// [`CompareSurface`] backed by the live document.
pub struct DocumentSurface {
    document: Document,
    row_selector: String,
    projection: RwSignal<FormProjection>,
}

impl DocumentSurface {
    fn rows(&self) -> Vec<HtmlInputElement> {
        query_document(&self.document, &self.row_selector)
    }
}

impl CompareSurface for DocumentSurface {
    fn sync_rows(&mut self, selection: &Selection) {
        for row in self.rows() {
            row.set_checked(selection.contains(&row.value()));
        }
    }

    fn uncheck_row(&mut self, id: &str) {
        for row in self.rows().into_iter().filter(|r| r.value() == id) {
            row.set_checked(false);
        }
    }

    fn render(&mut self, projection: &FormProjection) {
        self.projection.set(projection.clone());
    }

    fn warn(&mut self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

/// Mount the hidden-field view, restore the stored selection and start
/// listening for row and reset events.
pub fn install(document: &Document, config: &PageConfig) {
    let projection = RwSignal::new(FormProjection::empty());
    mount_form(document, config, projection);

    let surface = DocumentSurface {
        document: document.clone(),
        row_selector: config.row_selector(),
        projection,
    };
    let store = LocalStorageStore::new(config.storage_key.clone(), config.max_selected);
    let mut tracker = SelectionTracker::new(store, surface, config);
    let restored = tracker.load();
    log::debug!("restored {} selected rows", restored.len());
    TRACKER.with(|slot| *slot.borrow_mut() = Some(tracker));

    listen_for_row_changes(document, config);
    listen_for_clear(document, config);
}

/// Reset the selection; exported for inline `onclick` handlers.
pub fn clear() {
    with_tracker(PageTracker::clear);
}

/// Apply a row checkbox's current state to the selection.
///
/// Reached from both the delegated `change` listener and inline
/// `onclick="handleCheckbox(this)"` markup; a second call with the same
/// checked state is `Unchanged`.
pub fn toggle_row(input: &HtmlInputElement) {
    let (id, checked) = (input.value(), input.checked());
    with_tracker(|tracker| {
        tracker.toggle(&id, checked);
    });
}

fn with_tracker(f: impl FnOnce(&mut PageTracker)) {
    TRACKER.with(|slot| {
        if let Some(tracker) = slot.borrow_mut().as_mut() {
            f(tracker);
        }
    });
}

fn mount_form(document: &Document, config: &PageConfig, projection: RwSignal<FormProjection>) {
    let Some(form) = document
        .get_element_by_id(&config.selectors.compare_form_id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        log::debug!("no compare form on this page");
        return;
    };

    // The view owns the hidden fields from here on.
    let stale = format!("input[type=\"hidden\"][name=\"{}\"]", config.field_name);
    for input in query_all::<Element>(&form, &stale) {
        input.remove();
    }

    let button = document.get_element_by_id(&config.selectors.compare_button_id);
    leptos::mount::mount_to(form, move || {
        // Effects run on the next microtask, so the button and hidden fields
        // settle after the handler returns, before any later user event.
        Effect::new(move || {
            let enabled = projection.get().submit_enabled;
            if let Some(button) = &button {
                let _ = button.toggle_attribute_with_force("disabled", !enabled);
            }
        });
        view! { <CompareFields projection/> }
    })
    .forget();
}

fn listen_for_row_changes(document: &Document, config: &PageConfig) {
    let field_name = config.field_name.clone();
    let on_change = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        let Some(input) = ev.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
            return;
        };
        if input.type_() != "checkbox" || input.name() != field_name {
            return;
        }
        toggle_row(&input);
    });
    let _ = document.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
    on_change.forget();
}

fn listen_for_clear(document: &Document, config: &PageConfig) {
    let selector = config.selectors.clear_control.clone();
    let on_click = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        let hit = ev
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(&selector).ok().flatten());
        if hit.is_some() {
            clear();
        }
    });
    let _ = document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();
}
