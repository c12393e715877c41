use super::*;

fn lookup_from(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |key: &str| {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| (*v).to_owned())
    }
}

#[test]
fn default_matches_page_markup() {
    let cfg = PageConfig::default();
    assert_eq!(cfg.storage_key, "selected_ids");
    assert_eq!(cfg.field_name, "ids");
    assert_eq!(cfg.max_selected, 2);
    assert_eq!(cfg.selectors.compare_button_id, "compareBtn");
    assert_eq!(cfg.selectors.compare_form_id, "compareForm");
}

#[test]
fn from_lookup_without_overrides_is_default() {
    let cfg = PageConfig::from_lookup(|_| None);
    assert_eq!(cfg, PageConfig::default());
}

#[test]
fn from_lookup_applies_overrides() {
    let cfg = PageConfig::from_lookup(lookup_from(&[
        ("compareStorageKey", "cmp_v2"),
        ("compareFieldName", "row_ids"),
        ("compareWarning", "Only two rows."),
    ]));
    assert_eq!(cfg.storage_key, "cmp_v2");
    assert_eq!(cfg.field_name, "row_ids");
    assert_eq!(cfg.cap_warning, "Only two rows.");
}

#[test]
fn from_lookup_ignores_blank_values() {
    let cfg = PageConfig::from_lookup(lookup_from(&[("compareStorageKey", "   "), ("compareWarning", "")]));
    assert_eq!(cfg.storage_key, DEFAULT_STORAGE_KEY);
    assert_eq!(cfg.cap_warning, DEFAULT_CAP_WARNING);
}

#[test]
fn from_lookup_rejects_field_name_that_breaks_selector() {
    let cfg = PageConfig::from_lookup(lookup_from(&[("compareFieldName", "ids\"] , *[x")]));
    assert_eq!(cfg.field_name, DEFAULT_FIELD_NAME);
}

#[test]
fn row_selector_uses_field_name() {
    let cfg = PageConfig::default();
    assert_eq!(cfg.row_selector(), "input[type=\"checkbox\"][name=\"ids\"]");
}
