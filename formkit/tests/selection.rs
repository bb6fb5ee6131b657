use formkit::widgets::{OptionList, SelectOption, SelectionValue};

fn interests() -> OptionList {
    OptionList::from_pairs([
        ("technology", "Technology"),
        ("sports", "Sports"),
        ("music", "Music"),
    ])
    .unwrap()
}

fn refs(options: &OptionList) -> Vec<&SelectOption> {
    options.iter().collect()
}

#[test]
fn test_single_pick_replaces() {
    let options = interests();
    let value = SelectionValue::from("sports");
    let next = value.picked(options.find("music").unwrap());
    assert_eq!(next, SelectionValue::from("music"));
}

#[test]
fn test_multi_toggle_adds_and_removes() {
    let options = interests();
    let music = options.find("music").unwrap();
    let sports = options.find("sports").unwrap();

    let value = SelectionValue::empty(true);
    let value = value.picked(music);
    let value = value.picked(sports);
    assert_eq!(value, SelectionValue::from(vec!["music", "sports"]));

    let value = value.picked(music);
    assert_eq!(value, SelectionValue::from(vec!["sports"]));
}

#[test]
fn test_toggle_twice_is_identity() {
    let options = interests();
    let start = SelectionValue::from(vec!["technology", "music"]);
    for option in &options {
        assert_eq!(start.picked(option).picked(option).len(), start.len());
        let mut round: Vec<String> = start.picked(option).picked(option).as_multiple().unwrap().to_vec();
        let mut original: Vec<String> = start.as_multiple().unwrap().to_vec();
        round.sort();
        original.sort();
        assert_eq!(round, original);
    }
}

#[test]
fn test_labels_follow_option_order() {
    let options = interests();
    let value = SelectionValue::from(vec!["music", "technology"]);
    assert_eq!(value.selected_labels(&options), vec!["Technology", "Music"]);
}

#[test]
fn test_labels_skip_stale_values() {
    let options = interests();
    let value = SelectionValue::from(vec!["music", "removed"]);
    assert_eq!(value.selected_labels(&options), vec!["Music"]);
    assert!(SelectionValue::from("gone").selected_labels(&options).is_empty());
}

#[test]
fn test_select_all_then_deselect_all() {
    let options = interests();
    let visible = refs(&options);

    let all = SelectionValue::empty(true).toggled_all(&visible).unwrap();
    assert_eq!(all, SelectionValue::from(vec!["technology", "sports", "music"]));
    assert!(all.all_selected(&visible));

    let none = all.toggled_all(&visible).unwrap();
    assert_eq!(none, SelectionValue::empty(true));
}

#[test]
fn test_select_all_under_filter_discards_hidden() {
    let options = interests();
    let visible: Vec<&SelectOption> = options.iter().filter(|o| o.value != "technology").collect();

    let value = SelectionValue::from(vec!["technology"]);
    let next = value.toggled_all(&visible).unwrap();
    assert_eq!(next, SelectionValue::from(vec!["sports", "music"]));
    assert!(!next.contains("technology"));
}

#[test]
fn test_select_all_needs_every_visible_value_not_just_count() {
    let options = interests();
    let visible: Vec<&SelectOption> = options.iter().take(2).collect();

    // Same size as the visible set, but "music" is not visible.
    let value = SelectionValue::from(vec!["technology", "music"]);
    assert!(!value.all_selected(&visible));
    assert_eq!(
        value.toggled_all(&visible).unwrap(),
        SelectionValue::from(vec!["technology", "sports"])
    );
}

#[test]
fn test_select_all_ignored_for_single() {
    let options = interests();
    assert_eq!(SelectionValue::from("music").toggled_all(&refs(&options)), None);
    assert!(!SelectionValue::from("music").all_selected(&refs(&options)));
}

#[test]
fn test_empty_shapes() {
    assert_eq!(SelectionValue::empty(false), SelectionValue::Single(String::new()));
    assert_eq!(SelectionValue::empty(true), SelectionValue::Multiple(Vec::new()));
    assert!(SelectionValue::empty(false).is_empty());
    assert!(SelectionValue::empty(true).is_empty());
    assert!(!SelectionValue::from("us").is_empty());
}
