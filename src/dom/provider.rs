//! Provider pills on the filter form and the provider/service hidden fields.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement};

use super::query_document;
use crate::config::PageConfig;
use crate::state::provider::{ProviderFields, ProviderPicker};

const PROVIDER_FIELD: &str = "provider";

/// Make `.provider-buttons .pill` behave as exclusive provider filters.
pub fn install_pills(document: &Document, config: &PageConfig) {
    let form = document
        .query_selector(&config.selectors.filter_form)
        .ok()
        .flatten()
        .or_else(|| document.query_selector("form").ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok());
    let Some(form) = form else {
        return;
    };
    let Some(input) = provider_input(document, &form) else {
        return;
    };

    let pills: Rc<Vec<HtmlElement>> = Rc::new(query_document(document, &config.selectors.provider_pills));
    let values: Vec<String> = pills.iter().map(pill_value).collect();
    let picker = Rc::new(RefCell::new(ProviderPicker::new(values, input.value())));
    apply_pressed(&pills, &picker.borrow());

    for pill in pills.iter() {
        let value = pill_value(pill);
        let (pills, picker, input, form) = (Rc::clone(&pills), Rc::clone(&picker), input.clone(), form.clone());
        let on_click = Closure::<dyn FnMut(Event)>::new(move |_ev: Event| {
            let mut picker = picker.borrow_mut();
            input.set_value(picker.pick(value.clone()));
            apply_pressed(&pills, &picker);
            if let Err(e) = form.submit() {
                log::warn!("provider filter submit failed: {e:?}");
            }
        });
        let _ = pill.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }
}

/// Within the provider form, picking a provider button resets the service.
pub fn install_form_sync(document: &Document, config: &PageConfig) {
    let selectors = &config.selectors;
    let Some(form) = document.get_element_by_id(&selectors.provider_form_id) else {
        return;
    };
    let provider_hidden = hidden_input(document, &selectors.provider_hidden_id);
    let service_hidden = hidden_input(document, &selectors.service_hidden_id);

    let on_click = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        let Some(button) = ev.target().and_then(|t| t.dyn_into::<HtmlButtonElement>().ok()) else {
            return;
        };
        if button.name() != PROVIDER_FIELD {
            return;
        }

        let mut fields = ProviderFields {
            provider: provider_hidden.as_ref().map(HtmlInputElement::value).unwrap_or_default(),
            service: service_hidden.as_ref().map(HtmlInputElement::value).unwrap_or_default(),
        };
        fields.select_provider(button.value());

        if let Some(svc) = &service_hidden {
            svc.set_value(&fields.service);
        }
        if let Some(prov) = &provider_hidden {
            prov.set_value(&fields.provider);
        }
    });
    let _ = form.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();
}

/// The form's `provider` input, created as a hidden input when absent.
fn provider_input(document: &Document, form: &HtmlFormElement) -> Option<HtmlInputElement> {
    let selector = format!("[name=\"{PROVIDER_FIELD}\"]");
    if let Some(existing) = form.query_selector(&selector).ok().flatten() {
        return existing.dyn_into::<HtmlInputElement>().ok();
    }

    let input = document
        .create_element("input")
        .ok()?
        .dyn_into::<HtmlInputElement>()
        .ok()?;
    input.set_type("hidden");
    input.set_name(PROVIDER_FIELD);
    form.append_child(&input).ok()?;
    Some(input)
}

fn hidden_input(document: &Document, id: &str) -> Option<HtmlInputElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
}

fn pill_value(pill: &HtmlElement) -> String {
    pill.dataset().get(PROVIDER_FIELD).unwrap_or_default()
}

fn apply_pressed(pills: &[HtmlElement], picker: &ProviderPicker) {
    for (pill, pressed) in pills.iter().zip(picker.pressed()) {
        let _ = pill.set_attribute("aria-pressed", if pressed { "true" } else { "false" });
    }
}
