use formkit::widgets::select::{filter_options, SelectOption};

fn countries() -> Vec<SelectOption> {
    vec![
        SelectOption::new("us", "United States"),
        SelectOption::new("uk", "United Kingdom"),
        SelectOption::new("ca", "Canada"),
        SelectOption::new("au", "Australia"),
    ]
}

fn values<'a>(options: &[&'a SelectOption]) -> Vec<&'a str> {
    options.iter().map(|o| o.value.as_str()).collect()
}

#[test]
fn test_blank_queries_return_everything() {
    let options = countries();
    let all: Vec<&SelectOption> = options.iter().collect();
    assert_eq!(filter_options(&options, None), all);
    assert_eq!(filter_options(&options, Some("")), all);
    assert_eq!(filter_options(&options, Some("   ")), all);
    assert_eq!(filter_options(&options, Some("\t\n")), all);
}

#[test]
fn test_case_insensitive_label_match() {
    let options = countries();
    assert_eq!(values(&filter_options(&options, Some("UNITED"))), vec!["us", "uk"]);
    assert_eq!(values(&filter_options(&options, Some("canada"))), vec!["ca"]);
}

#[test]
fn test_matches_value_independently_of_label() {
    let options = vec![
        SelectOption::new("technology", "Tech"),
        SelectOption::new("sports", "Games"),
    ];
    assert_eq!(values(&filter_options(&options, Some("NOLOG"))), vec!["technology"]);
}

#[test]
fn test_substring_not_fuzzy() {
    let options = countries();
    // "usa" would fuzzy-match "United StAtes" but is not a substring.
    assert!(filter_options(&options, Some("usa")).is_empty());
    assert_eq!(values(&filter_options(&options, Some("ited K"))), vec!["uk"]);
}

#[test]
fn test_preserves_original_order() {
    let options = countries();
    // "a" hits United StAtes, CAnada, AustrAlia and "ca"/"au"
    let visible = filter_options(&options, Some("a"));
    assert_eq!(values(&visible), vec!["us", "ca", "au"]);
}

#[test]
fn test_result_is_subsequence() {
    let options = countries();
    for query in ["", "u", "an", "x", "IA", " "] {
        let visible = filter_options(&options, Some(query));
        let mut positions = visible
            .iter()
            .map(|v| options.iter().position(|o| o == *v).unwrap());
        let mut last = None;
        for p in positions.by_ref() {
            assert!(last.is_none_or(|l| p > l), "order broken for {query:?}");
            last = Some(p);
        }
    }
}

#[test]
fn test_empty_list() {
    let options: Vec<SelectOption> = Vec::new();
    assert!(filter_options(&options, Some("us")).is_empty());
    assert!(filter_options(&options, None).is_empty());
}

#[test]
fn test_query_with_surrounding_spaces_is_used_as_typed() {
    let options = countries();
    assert!(filter_options(&options, Some(" canada")).is_empty());
    assert_eq!(values(&filter_options(&options, Some("ted "))), vec!["us", "uk"]);
}
