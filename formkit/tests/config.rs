use formkit::config::{FormConfig, SelectConfig};

#[test]
fn test_select_defaults() {
    let config = SelectConfig::default();
    assert_eq!(config.placeholder, "Select...");
    assert_eq!(config.search_placeholder, "Search...");
    assert_eq!(config.empty_text, "No options");
    assert_eq!(config.select_all_label, "Select All");
    assert_eq!(config.deselect_all_label, "Deselect All");
}

#[test]
fn test_form_defaults() {
    let config = FormConfig::default();
    assert_eq!(config.title, "User Registration Form");
    assert_eq!(config.submit_label, "Submit Form");
}

#[test]
fn test_partial_select_override() {
    let config: SelectConfig =
        serde_json::from_str(r#"{"placeholder": "Pick one", "empty_text": "Nothing"}"#).unwrap();

    assert_eq!(config.placeholder, "Pick one");
    assert_eq!(config.empty_text, "Nothing");
    assert_eq!(config.search_placeholder, "Search...");
    assert_eq!(config.select_all_label, "Select All");
}

#[test]
fn test_empty_object_is_default() {
    let config: FormConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, FormConfig::default());
}

#[test]
fn test_builders() {
    let config = SelectConfig::new("Choose")
        .search_placeholder("Filter...")
        .select_all_labels("All", "None");
    assert_eq!(config.placeholder, "Choose");
    assert_eq!(config.search_placeholder, "Filter...");
    assert_eq!(config.deselect_all_label, "None");
    assert_eq!(config.empty_text, "No options");
}
