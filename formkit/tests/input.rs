use std::sync::{Arc, Mutex};

use formdom::{find_element, Event, Key, Modifiers};
use formkit::widgets::{EventResult, Input, InputKind, InputProps};

fn recorded(props: InputProps) -> (Input, Arc<Mutex<Vec<String>>>) {
    let changes = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&changes);
    let input = Input::new("name", props).on_change(move |v| sink.lock().unwrap().push(v));
    (input, changes)
}

fn type_text(input: &mut Input, text: &str) {
    let field = input.field_id();
    for c in text.chars() {
        input.handle_event(&Event::key(field.clone(), Key::Char(c)));
    }
}

#[test]
fn test_typing_reports_full_text() {
    let (mut input, changes) = recorded(InputProps::new(InputKind::Text));
    type_text(&mut input, "Jo");

    assert_eq!(*changes.lock().unwrap(), vec!["J", "Jo"]);
    assert_eq!(input.value(), "Jo");
    assert_eq!(input.cursor(), 2);
}

#[test]
fn test_shift_chars_insert_ctrl_chars_do_not() {
    let (mut input, changes) = recorded(InputProps::new(InputKind::Text));
    let field = input.field_id();

    let shifted = Event::Key {
        target: Some(field.clone()),
        key: Key::Char('J'),
        modifiers: Modifiers::shift(),
    };
    assert_eq!(input.handle_event(&shifted), EventResult::Consumed);

    let ctrl = Event::Key {
        target: Some(field),
        key: Key::Char('a'),
        modifiers: Modifiers::ctrl(),
    };
    assert_eq!(input.handle_event(&ctrl), EventResult::Ignored);
    assert_eq!(*changes.lock().unwrap(), vec!["J"]);
}

#[test]
fn test_editing_at_cursor() {
    let (mut input, changes) = recorded(InputProps::new(InputKind::Text).value("Jhn"));
    let field = input.field_id();
    assert_eq!(input.cursor(), 3);

    input.handle_event(&Event::key(field.clone(), Key::Home));
    input.handle_event(&Event::key(field.clone(), Key::Right));
    input.handle_event(&Event::key(field.clone(), Key::Char('o')));
    assert_eq!(input.value(), "John");

    input.handle_event(&Event::key(field.clone(), Key::Delete));
    assert_eq!(input.value(), "Jon");
    input.handle_event(&Event::key(field.clone(), Key::Backspace));
    assert_eq!(input.value(), "Jn");

    input.handle_event(&Event::key(field.clone(), Key::End));
    assert_eq!(input.cursor(), 2);
    assert_eq!(changes.lock().unwrap().len(), 3);
}

#[test]
fn test_backspace_at_start_emits_nothing() {
    let (mut input, changes) = recorded(InputProps::new(InputKind::Text));
    let result = input.handle_event(&Event::key(input.field_id(), Key::Backspace));

    assert_eq!(result, EventResult::Consumed);
    assert!(changes.lock().unwrap().is_empty());
}

#[test]
fn test_multibyte_editing() {
    let (mut input, _) = recorded(InputProps::new(InputKind::Text).value("Zoë"));
    let field = input.field_id();

    input.handle_event(&Event::key(field.clone(), Key::Backspace));
    assert_eq!(input.value(), "Zo");
    type_text(&mut input, "é");
    assert_eq!(input.value(), "Zoé");
    assert_eq!(input.cursor(), 3);
}

#[test]
fn test_input_event_replaces_text() {
    let (mut input, changes) = recorded(InputProps::new(InputKind::Email).value("old"));
    input.handle_event(&Event::input(input.field_id(), "john@example.com"));

    assert_eq!(input.value(), "john@example.com");
    assert_eq!(input.cursor(), 16);
    assert_eq!(*changes.lock().unwrap(), vec!["john@example.com"]);
}

#[test]
fn test_enter_bubbles() {
    let (mut input, _) = recorded(InputProps::new(InputKind::Text));
    let result = input.handle_event(&Event::key(input.field_id(), Key::Enter));
    assert_eq!(result, EventResult::Ignored);
}

#[test]
fn test_other_targets_ignored() {
    let (mut input, changes) = recorded(InputProps::new(InputKind::Text));
    let result = input.handle_event(&Event::key("email-field", Key::Char('x')));

    assert_eq!(result, EventResult::Ignored);
    assert!(changes.lock().unwrap().is_empty());
}

#[test]
fn test_disabled_ignores_everything() {
    let (mut input, changes) = recorded(InputProps::new(InputKind::Text).disabled());
    type_text(&mut input, "abc");
    let click = input.handle_event(&Event::click(input.field_id()));

    assert_eq!(click, EventResult::Ignored);
    assert!(changes.lock().unwrap().is_empty());
    assert_eq!(input.value(), "");
}

#[test]
fn test_set_value_clamps_cursor() {
    let (mut input, changes) = recorded(InputProps::new(InputKind::Text).value("John Doe"));
    input.set_value("Jo");

    assert_eq!(input.cursor(), 2);
    assert!(changes.lock().unwrap().is_empty());
}

#[test]
fn test_render_label_and_required_marker() {
    let input = Input::new(
        "name",
        InputProps::new(InputKind::Text)
            .label("Full Name")
            .placeholder("Enter your full name")
            .required(),
    );
    let root = input.render();

    let label = find_element(&root, &input.label_id()).unwrap();
    assert_eq!(label.collect_text(), vec!["Full Name", "*"]);

    let field = find_element(&root, &input.field_id()).unwrap();
    assert_eq!(field.data_value("placeholder"), Some("Enter your full name"));
    assert_eq!(field.data_value("type"), Some("text"));
    assert_eq!(field.data_value("invalid"), Some("false"));
    assert!(find_element(&root, &input.error_id()).is_none());
}

#[test]
fn test_render_error() {
    let mut input = Input::new("email", InputProps::new(InputKind::Email));
    input.set_error(Some("Email is required".to_string()));
    let root = input.render();

    let error = find_element(&root, &input.error_id()).unwrap();
    assert_eq!(error.text_content(), Some("Email is required"));
    let field = find_element(&root, &input.field_id()).unwrap();
    assert_eq!(field.data_value("invalid"), Some("true"));

    input.clear_error();
    assert!(find_element(&input.render(), &input.error_id()).is_none());
}

#[test]
fn test_password_is_masked() {
    let input = Input::new("pw", InputProps::new(InputKind::Password).value("hunter2"));
    let root = input.render();
    let field = find_element(&root, &input.field_id()).unwrap();

    assert_eq!(field.text_content(), Some("•••••••"));
    assert_eq!(input.value(), "hunter2");
}

#[test]
fn test_no_label_row_without_label() {
    let input = Input::new("bare", InputProps::default());
    let root = input.render();
    assert!(find_element(&root, &input.label_id()).is_none());
    assert_eq!(root.child_elements().len(), 1);
}
