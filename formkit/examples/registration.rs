//! Scripted run of the registration form.
//!
//! Replays the clicks and keystrokes a user would make, printing the element
//! tree at each step. Widget logs go to `registration.log`.

use formkit::logging::init_file_logger;
use formkit::prelude::*;
use log::LevelFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_file_logger("registration.log", LevelFilter::Debug)?;

    let surface = Surface::new();
    let mut form = RegistrationForm::new(&surface)?.on_submit(|data| {
        println!("submitted: {data:?}");
    });

    println!("== empty submit ==");
    let submit = form.submit_id();
    form.press(&submit);
    print_tree(&form.render(), 0);

    println!("== filling in ==");
    let name = form.name_input().field_id();
    let email = form.email_input().field_id();
    type_text(&mut form, &name, "John Doe");
    type_text(&mut form, &email, "john@example.com");

    let interests = form.interests_select().control_id();
    form.press(&interests);
    let interests_search = form.interests_select().search_id();
    type_text(&mut form, &interests_search, "s");
    print_tree(&form.render(), 0);

    let select_all = form.interests_select().select_all_id();
    form.press(&select_all);

    // Opening the country dropdown closes the interests one.
    let country = form.country_select().control_id();
    form.press(&country);
    if let Some(option) = form.country_select().option_id_for("ca") {
        form.press(&option);
    }
    print_tree(&form.render(), 0);

    println!("== submit ==");
    form.handle_event(&Event::key(email, Key::Enter));
    Ok(())
}

fn type_text(form: &mut RegistrationForm, target: &str, text: &str) {
    for c in text.chars() {
        form.handle_event(&Event::key(target, Key::Char(c)));
    }
}

fn print_tree(element: &Element, depth: usize) {
    let indent = "  ".repeat(depth);
    let mut flags = String::new();
    if let Some(checked) = element.checked {
        flags.push_str(if checked { " [x]" } else { " [ ]" });
    }
    if element.selected {
        flags.push_str(" *");
    }

    match element.text_content() {
        Some(text) => println!("{indent}{text}{flags}"),
        None => {
            if !element.id.starts_with("el-") {
                println!("{indent}#{}{flags}", element.id);
            }
            for child in element.child_elements() {
                print_tree(child, depth + 1);
            }
        }
    }
}
