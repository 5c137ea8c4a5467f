use super::*;

use std::collections::HashMap;

fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_matches_endpoint_constants() {
    let cfg = WidgetConfig::default();
    assert_eq!(cfg.api_base, "/api/v1/chat");
    assert_eq!(cfg.platform, "web");
    assert_eq!(cfg.user_id, "web_user");
    assert_eq!(cfg.project_id, "nia_chat");
    assert_eq!(cfg.placeholder, DEFAULT_PLACEHOLDER);
}

#[test]
fn from_attributes_without_any_attribute_equals_default() {
    let cfg = WidgetConfig::from_attributes(|_| None);
    assert_eq!(cfg, WidgetConfig::default());
}

// =============================================================
// Overrides
// =============================================================

#[test]
fn from_attributes_applies_overrides() {
    let map = attrs(&[
        ("data-api-base", "https://chat.example.test/api/v1/chat"),
        ("data-platform", "kiosk"),
        ("data-user-id", "visitor"),
        ("data-project-id", "demo"),
        ("data-placeholder", "Ask me anything"),
    ]);
    let cfg = WidgetConfig::from_attributes(|name| map.get(name).cloned());

    assert_eq!(cfg.api_base, "https://chat.example.test/api/v1/chat");
    assert_eq!(cfg.platform, "kiosk");
    assert_eq!(cfg.user_id, "visitor");
    assert_eq!(cfg.project_id, "demo");
    assert_eq!(cfg.placeholder, "Ask me anything");
}

#[test]
fn from_attributes_trims_trailing_slashes_from_api_base() {
    let map = attrs(&[("data-api-base", "/chat/api//")]);
    let cfg = WidgetConfig::from_attributes(|name| map.get(name).cloned());
    assert_eq!(cfg.api_base, "/chat/api");
}

#[test]
fn from_attributes_blank_values_fall_back_to_defaults() {
    let map = attrs(&[("data-platform", "   "), ("data-user-id", ""), ("data-api-base", "/")]);
    let cfg = WidgetConfig::from_attributes(|name| map.get(name).cloned());
    assert_eq!(cfg.platform, DEFAULT_PLATFORM);
    assert_eq!(cfg.user_id, DEFAULT_USER_ID);
    assert_eq!(cfg.api_base, DEFAULT_API_BASE);
}

#[test]
fn from_attributes_trims_surrounding_whitespace() {
    let map = attrs(&[("data-project-id", "  support  ")]);
    let cfg = WidgetConfig::from_attributes(|name| map.get(name).cloned());
    assert_eq!(cfg.project_id, "support");
}
