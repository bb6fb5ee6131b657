//! Forms composed from the built-in widgets.

mod registration;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::validation::ValidationResult;

pub use registration::{
    RegistrationForm, SubmitHandler, COUNTRY_REQUIRED, EMAIL_INVALID, EMAIL_REQUIRED,
    NAME_REQUIRED,
};

/// Values collected by the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationData {
    pub name: String,
    pub email: String,
    pub interests: Vec<String>,
    pub country: String,
}

/// Fields of the registration form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Interests,
    Country,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Interests,
        FormField::Country,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Interests => "interests",
            FormField::Country => "country",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error message per field. A field that is absent is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormErrors(BTreeMap<FormField, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Errors for every failed field in `result` that names a form field.
    pub fn from_result(result: &ValidationResult) -> Self {
        Self(
            result
                .errors()
                .iter()
                .filter_map(|e| Some((FormField::from_name(&e.field_name)?, e.message.clone())))
                .collect(),
        )
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Clear one field's error. Returns whether there was one.
    pub fn remove(&mut self, field: FormField) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First failing field in display order.
    pub fn first(&self) -> Option<FormField> {
        self.0.keys().next().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl FromIterator<(FormField, String)> for FormErrors {
    fn from_iter<I: IntoIterator<Item = (FormField, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
