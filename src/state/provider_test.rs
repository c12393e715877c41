use super::*;

fn picker(active: &str) -> ProviderPicker {
    ProviderPicker::new(vec![String::new(), "Azure".to_owned(), "AWS".to_owned(), "GCP".to_owned()], active)
}

// =============================================================
// ProviderPicker
// =============================================================

#[test]
fn initial_pressed_state_follows_current_value() {
    assert_eq!(picker("AWS").pressed(), [false, false, true, false]);
}

#[test]
fn empty_value_presses_the_all_pill() {
    assert_eq!(picker("").pressed(), [true, false, false, false]);
}

#[test]
fn pick_presses_exactly_one_pill() {
    let mut p = picker("AWS");
    assert_eq!(p.pick("GCP"), "GCP");
    assert_eq!(p.pressed(), [false, false, false, true]);
    assert_eq!(p.pressed().iter().filter(|b| **b).count(), 1);
}

#[test]
fn pick_unknown_value_presses_none() {
    let mut p = picker("AWS");
    p.pick("Oracle");
    assert_eq!(p.active(), "Oracle");
    assert!(p.pressed().iter().all(|b| !b));
}

// =============================================================
// ProviderFields
// =============================================================

#[test]
fn select_provider_resets_service() {
    let mut fields = ProviderFields { provider: "AWS".to_owned(), service: "Compute".to_owned() };
    fields.select_provider("Azure");
    assert_eq!(fields.provider, "Azure");
    assert_eq!(fields.service, "");
}

#[test]
fn reselecting_same_provider_still_resets_service() {
    let mut fields = ProviderFields { provider: "AWS".to_owned(), service: "Storage".to_owned() };
    fields.select_provider("AWS");
    assert_eq!(fields.provider, "AWS");
    assert!(fields.service.is_empty());
}
