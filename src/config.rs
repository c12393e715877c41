//! Page-level configuration for the comparison and provider widgets.
//!
//! SYSTEM CONTEXT
//! ==============
//! The listing page is rendered by the server, so ids, names and selectors are
//! a fixed contract with that markup. Defaults match the shipped templates; a
//! template can override the few values that vary per deployment through
//! `data-compare-*` attributes on `<body>`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default `localStorage` key for the persisted selection.
pub const DEFAULT_STORAGE_KEY: &str = "selected_ids";
/// Default name shared by row checkboxes and synthesized hidden inputs.
pub const DEFAULT_FIELD_NAME: &str = "ids";
/// Maximum number of rows that can be compared at once.
pub const MAX_SELECTED: usize = 2;
/// Alert text shown when a third row is selected.
pub const DEFAULT_CAP_WARNING: &str = "Bitte nur zwei Zeilen auswählen.";

/// Dataset key overriding [`PageConfig::storage_key`].
pub const ATTR_STORAGE_KEY: &str = "compareStorageKey";
/// Dataset key overriding [`PageConfig::field_name`].
pub const ATTR_FIELD_NAME: &str = "compareFieldName";
/// Dataset key overriding [`PageConfig::cap_warning`].
pub const ATTR_WARNING: &str = "compareWarning";

/// DOM selectors used to find the page's controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selectors {
    pub compare_button_id: String,
    pub compare_form_id: String,
    pub clear_control: String,
    pub provider_pills: String,
    pub filter_form: String,
    pub provider_form_id: String,
    pub provider_hidden_id: String,
    pub service_hidden_id: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            compare_button_id: "compareBtn".to_owned(),
            compare_form_id: "compareForm".to_owned(),
            clear_control: "[data-compare-clear]".to_owned(),
            provider_pills: ".provider-buttons .pill".to_owned(),
            filter_form: "form[action=\"/\"]".to_owned(),
            provider_form_id: "providerForm".to_owned(),
            provider_hidden_id: "providerHidden".to_owned(),
            service_hidden_id: "providerServiceHidden".to_owned(),
        }
    }
}

/// Typed page configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageConfig {
    pub storage_key: String,
    pub field_name: String,
    pub max_selected: usize,
    pub cap_warning: String,
    pub selectors: Selectors,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            field_name: DEFAULT_FIELD_NAME.to_owned(),
            max_selected: MAX_SELECTED,
            cap_warning: DEFAULT_CAP_WARNING.to_owned(),
            selectors: Selectors::default(),
        }
    }
}

impl PageConfig {
    /// Build config from defaults plus overrides returned by `lookup`.
    ///
    /// `lookup` receives dataset keys (`compareStorageKey`, ...). Blank values
    /// and field names that cannot appear in a CSS attribute selector are
    /// ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(key) = non_blank(lookup(ATTR_STORAGE_KEY)) {
            config.storage_key = key;
        }

        if let Some(name) = non_blank(lookup(ATTR_FIELD_NAME)) {
            if is_valid_field_name(&name) {
                config.field_name = name;
            } else {
                log::warn!("ignoring invalid compare field name override: {name:?}");
            }
        }

        if let Some(warning) = non_blank(lookup(ATTR_WARNING)) {
            config.cap_warning = warning;
        }

        config
    }

    /// Selector matching the row checkboxes, e.g. `input[name="ids"]`.
    pub fn row_selector(&self) -> String {
        format!("input[type=\"checkbox\"][name=\"{}\"]", self.field_name)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

/// Field names end up inside a quoted attribute selector.
fn is_valid_field_name(name: &str) -> bool {
    name.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '[' | ']'))
}
