//! Hidden `ids` inputs inside the comparison form.
//!
//! DESIGN
//! ======
//! The tracker only publishes a [`FormProjection`]; this component turns it
//! into one hidden input per selected row so the form submits
//! `?ids=a&ids=b` in selection order.

use leptos::prelude::*;

use crate::state::projection::{FormProjection, HiddenField};

/// One hidden input per projected field, keyed by row id.
#[component]
pub fn CompareFields(#[prop(into)] projection: Signal<FormProjection>) -> impl IntoView {
    view! {
        <For
            each=move || projection.get().fields
            key=|field: &HiddenField| field.value.clone()
            children=move |field: HiddenField| {
                view! { <input type="hidden" name=field.name value=field.value/> }
            }
        />
    }
}
