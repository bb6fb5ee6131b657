//! The user registration form.

use std::sync::LazyLock;

use formdom::{Element, Event, Surface};
use regex::Regex;

use super::{FormErrors, FormField, RegistrationData};
use crate::config::FormConfig;
use crate::error::{OptionListError, SubmitError};
use crate::state::State;
use crate::validation::Validator;
use crate::widgets::{
    EventResult, Input, InputKind, InputProps, OptionList, Select, SelectProps, SelectionValue,
};

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const COUNTRY_REQUIRED: &str = "Please select a country";

/// `local@domain.tld`: no whitespace, one `@`, a dot somewhere after it.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

const INTERESTS: [(&str, &str); 8] = [
    ("technology", "Technology"),
    ("sports", "Sports"),
    ("music", "Music"),
    ("travel", "Travel"),
    ("cooking", "Cooking"),
    ("reading", "Reading"),
    ("gaming", "Gaming"),
    ("fitness", "Fitness"),
];

const COUNTRIES: [(&str, &str); 8] = [
    ("us", "United States"),
    ("uk", "United Kingdom"),
    ("ca", "Canada"),
    ("au", "Australia"),
    ("de", "Germany"),
    ("fr", "France"),
    ("jp", "Japan"),
    ("br", "Brazil"),
];

const FORM_ID: &str = "registration";

/// Callback invoked with the collected data on a valid submission.
pub type SubmitHandler = Box<dyn FnMut(&RegistrationData) + Send>;

/// Name, email, interests and country, validated on submit.
///
/// The form owns every field value and error message. Widgets get them as
/// props and report edits through change callbacks, which write into the
/// form's [`State`]s; the form pushes the new props back after each event.
/// Editing a field clears that field's error right away.
///
/// Interests are marked required in the UI but never enforced.
pub struct RegistrationForm {
    config: FormConfig,
    surface: Surface,
    data: State<RegistrationData>,
    errors: State<FormErrors>,
    name: Input,
    email: Input,
    interests: Select,
    country: Select,
    /// Revisions of `data` and `errors` last pushed into the widgets.
    synced: Option<(u64, u64)>,
    on_submit: Option<SubmitHandler>,
}

impl RegistrationForm {
    pub fn new(surface: &Surface) -> Result<Self, OptionListError> {
        Self::with_config(surface, FormConfig::default())
    }

    pub fn with_config(surface: &Surface, config: FormConfig) -> Result<Self, OptionListError> {
        let data = State::new(RegistrationData::default());
        let errors = State::new(FormErrors::new());

        let name = Input::new(
            field_id(FormField::Name),
            InputProps::new(InputKind::Text)
                .label("Full Name")
                .placeholder("Enter your full name")
                .required(),
        )
        .on_change(text_sink(data.clone(), errors.clone(), FormField::Name, |d, v| d.name = v));

        let email = Input::new(
            field_id(FormField::Email),
            InputProps::new(InputKind::Email)
                .label("Email Address")
                .placeholder("Enter your email address")
                .required(),
        )
        .on_change(text_sink(data.clone(), errors.clone(), FormField::Email, |d, v| d.email = v));

        let interests = Select::new(
            field_id(FormField::Interests),
            SelectProps::multiple(OptionList::from_pairs(INTERESTS)?)
                .placeholder("Select your interests"),
            surface,
        )
        .on_change(selection_sink(data.clone(), errors.clone(), FormField::Interests, |d, v| {
            if let SelectionValue::Multiple(values) = v {
                d.interests = values;
            }
        }));

        let country = Select::new(
            field_id(FormField::Country),
            SelectProps::single(OptionList::from_pairs(COUNTRIES)?)
                .placeholder("Select your country"),
            surface,
        )
        .on_change(selection_sink(data.clone(), errors.clone(), FormField::Country, |d, v| {
            if let SelectionValue::Single(value) = v {
                d.country = value;
            }
        }));

        Ok(Self {
            config,
            surface: surface.clone(),
            data,
            errors,
            name,
            email,
            interests,
            country,
            synced: None,
            on_submit: None,
        })
    }

    /// Set the submit callback.
    pub fn on_submit<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&RegistrationData) + Send + 'static,
    {
        self.on_submit = Some(Box::new(handler));
        self
    }

    pub fn id(&self) -> &str {
        FORM_ID
    }

    pub fn submit_id(&self) -> String {
        format!("{FORM_ID}-submit")
    }

    pub fn data(&self) -> RegistrationData {
        self.data.get()
    }

    pub fn errors(&self) -> FormErrors {
        self.errors.get()
    }

    /// First field with an error, in form order.
    pub fn first_invalid_field(&self) -> Option<FormField> {
        self.errors.with(FormErrors::first)
    }

    pub fn name_input(&self) -> &Input {
        &self.name
    }

    pub fn email_input(&self) -> &Input {
        &self.email
    }

    pub fn interests_select(&self) -> &Select {
        &self.interests
    }

    pub fn country_select(&self) -> &Select {
        &self.country
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Route an event to the widget that owns its target.
    ///
    /// Activating the submit button, or pressing Enter in a text field,
    /// submits the form.
    pub fn handle_event(&mut self, event: &Event) -> EventResult {
        let result = self.dispatch(event);
        self.sync_props();
        result
    }

    /// Press then click `target`, the way a pointer does.
    ///
    /// The press goes out on the surface first, so an open dropdown sees it
    /// as an outside press unless `target` is inside it.
    pub fn press(&mut self, target: &str) -> EventResult {
        self.pointer_down(target);
        self.handle_event(&Event::click(target))
    }

    /// Broadcast a pointer press on `target` without clicking it.
    pub fn pointer_down(&self, target: &str) {
        self.surface.pointer_down(&self.render(), target);
    }

    fn dispatch(&mut self, event: &Event) -> EventResult {
        let submit_id = self.submit_id();
        match event {
            Event::Click {
                target: Some(target),
                ..
            } if *target == submit_id => {
                self.try_submit();
                return EventResult::Consumed;
            }
            Event::Key {
                target: Some(target),
                key,
                ..
            } if *target == submit_id && key.is_activation() => {
                self.try_submit();
                return EventResult::Consumed;
            }
            _ => {}
        }

        let handled = self
            .name
            .handle_event(event)
            .or_else(|| self.email.handle_event(event))
            .or_else(|| self.interests.handle_event(event))
            .or_else(|| self.country.handle_event(event));
        if handled.is_handled() {
            return handled;
        }

        // Enter in a text field submits, like a native form.
        if let Event::Key {
            target: Some(target),
            key: formdom::Key::Enter,
            ..
        } = event
            && (*target == self.name.field_id() || *target == self.email.field_id())
        {
            self.try_submit();
            return EventResult::Consumed;
        }

        EventResult::Ignored
    }

    fn try_submit(&mut self) {
        if let Err(err) = self.submit() {
            log::debug!("submit rejected: {err}");
        }
    }

    // -------------------------------------------------------------------------
    // Validation and submission
    // -------------------------------------------------------------------------

    /// Check every field against its rules without submitting.
    pub fn validate(&self) -> FormErrors {
        let result = Validator::new()
            .field(&self.name, FormField::Name.as_str())
            .required(NAME_REQUIRED)
            .field(&self.email, FormField::Email.as_str())
            .required(EMAIL_REQUIRED)
            .matches(&EMAIL_PATTERN, EMAIL_INVALID)
            .field(&self.country, FormField::Country.as_str())
            .selected(COUNTRY_REQUIRED)
            .validate();
        FormErrors::from_result(&result)
    }

    /// Validate, then hand the data to the submit callback if nothing failed.
    ///
    /// The new errors replace the old ones either way. Nothing is submitted
    /// while any field has an error.
    pub fn submit(&mut self) -> Result<RegistrationData, SubmitError> {
        self.sync_props();
        let errors = self.validate();
        self.errors.set(errors.clone());
        self.sync_props();

        if !errors.is_empty() {
            return Err(SubmitError::Invalid(errors));
        }

        let data = self.data.get();
        log::info!("Form submitted with data: {data:?}");
        if let Some(handler) = self.on_submit.as_mut() {
            handler(&data);
        }
        Ok(data)
    }

    /// Push the owned values and errors down into the widgets.
    fn sync_props(&mut self) {
        let revisions = (self.data.revision(), self.errors.revision());
        if self.synced == Some(revisions) {
            return;
        }
        let data = self.data.get();
        let errors = self.errors.get();

        self.name.set_value(data.name);
        self.name
            .set_error(errors.get(FormField::Name).map(String::from));
        self.email.set_value(data.email);
        self.email
            .set_error(errors.get(FormField::Email).map(String::from));
        self.interests
            .set_value(SelectionValue::Multiple(data.interests));
        self.country.set_value(SelectionValue::Single(data.country));

        self.synced = Some(revisions);
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    pub fn render(&self) -> Element {
        let errors = self.errors.get();

        Element::col()
            .id(FORM_ID)
            .child(Element::text(self.config.title.clone()).id(format!("{FORM_ID}-title")))
            .child(self.name.render())
            .child(self.email.render())
            .child(select_field(
                "Interests",
                &self.interests,
                errors.get(FormField::Interests),
            ))
            .child(select_field(
                "Country",
                &self.country,
                errors.get(FormField::Country),
            ))
            .child(
                Element::row()
                    .id(self.submit_id())
                    .focusable(true)
                    .clickable(true)
                    .child(Element::text(self.config.submit_label.clone())),
            )
    }
}

impl std::fmt::Debug for RegistrationForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("data", &self.data.get())
            .field("errors", &self.errors.get())
            .finish_non_exhaustive()
    }
}

fn field_id(field: FormField) -> String {
    format!("{FORM_ID}-{field}")
}

/// Labelled wrapper around a select, with the error line below it.
fn select_field(label: &str, select: &Select, error: Option<&str>) -> Element {
    let mut wrapper = Element::col()
        .id(format!("{}-field", select.id()))
        .child(
            Element::row()
                .child(Element::text(label))
                .child(Element::text("*").data("role", "required")),
        )
        .child(select.render());
    if let Some(error) = error {
        wrapper = wrapper.child(Element::text(error).id(format!("{}-error", select.id())));
    }
    wrapper
}

/// Change callback that stores a text value and clears the field's error.
fn text_sink(
    data: State<RegistrationData>,
    errors: State<FormErrors>,
    field: FormField,
    store: fn(&mut RegistrationData, String),
) -> impl FnMut(String) + Send + 'static {
    move |value| {
        data.update(|d| store(d, value));
        clear_error(&errors, field);
    }
}

/// Change callback that stores a selection and clears the field's error.
fn selection_sink(
    data: State<RegistrationData>,
    errors: State<FormErrors>,
    field: FormField,
    store: fn(&mut RegistrationData, SelectionValue),
) -> impl FnMut(SelectionValue) + Send + 'static {
    move |value| {
        data.update(|d| store(d, value));
        clear_error(&errors, field);
    }
}

fn clear_error(errors: &State<FormErrors>, field: FormField) {
    if errors.with(|e| e.contains(field)) {
        errors.update(|e| {
            e.remove(field);
        });
    }
}
