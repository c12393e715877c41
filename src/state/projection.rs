//! Form state derived from the current selection.

#[cfg(test)]
#[path = "projection_test.rs"]
mod projection_test;

use super::selection::Selection;

/// A synthesized hidden `<input>` in the comparison form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HiddenField {
    pub name: String,
    pub value: String,
}

/// What the comparison form should look like for a given selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormProjection {
    /// The compare button is enabled only with exactly `cap` rows selected.
    pub submit_enabled: bool,
    /// One field per selected id, in selection order.
    pub fields: Vec<HiddenField>,
}

impl FormProjection {
    pub fn from_selection(selection: &Selection, field_name: &str, cap: usize) -> Self {
        Self {
            submit_enabled: selection.len() == cap,
            fields: selection
                .into_iter()
                .map(|id| HiddenField { name: field_name.to_owned(), value: id.clone() })
                .collect(),
        }
    }

    /// Projection of the empty selection.
    pub fn empty() -> Self {
        Self::default()
    }
}
