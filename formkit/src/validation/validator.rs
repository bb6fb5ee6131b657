//! Validator builder for fluent validation API.

use regex::Regex;

use super::result::{ErrorKind, FieldError, ValidationResult};
use super::validatable::Validatable;
use crate::widgets::SelectionValue;

/// A field whose rules have all been applied.
#[derive(Debug)]
struct FieldEntry {
    name: String,
    widget_id: Option<String>,
    failure: Option<(ErrorKind, String)>,
}

/// Builder for validating multiple form fields.
///
/// Rules run against a snapshot of each value as they are added. Only the
/// first failing rule of a field is kept.
#[derive(Debug, Default)]
pub struct Validator {
    fields: Vec<FieldEntry>,
}

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a widget to validate.
    pub fn field<W: Validatable>(self, widget: &W, name: impl Into<String>) -> FieldBuilder<W::Value> {
        FieldBuilder {
            validator: self,
            name: name.into(),
            widget_id: Some(widget.widget_id()),
            value: widget.validation_value(),
            failure: None,
        }
    }

    /// Add a plain value to validate.
    pub fn value<V>(self, name: impl Into<String>, value: V) -> FieldBuilder<V> {
        FieldBuilder {
            validator: self,
            name: name.into(),
            widget_id: None,
            value,
            failure: None,
        }
    }

    /// Collect the results of every field.
    pub fn validate(self) -> ValidationResult {
        let errors: Vec<FieldError> = self
            .fields
            .into_iter()
            .filter_map(|field| {
                field.failure.map(|(kind, message)| FieldError {
                    field_name: field.name,
                    widget_id: field.widget_id,
                    kind,
                    message,
                })
            })
            .collect();

        if errors.is_empty() {
            ValidationResult::Valid
        } else {
            log::debug!("validation failed for {} field(s)", errors.len());
            ValidationResult::Invalid(errors)
        }
    }
}

/// Builder for adding validation rules to a single field.
#[derive(Debug)]
pub struct FieldBuilder<V> {
    validator: Validator,
    name: String,
    widget_id: Option<String>,
    value: V,
    failure: Option<(ErrorKind, String)>,
}

impl<V> FieldBuilder<V> {
    /// Add a custom validation rule.
    pub fn rule<F>(self, f: F, msg: impl Into<String>) -> Self
    where
        F: FnOnce(&V) -> bool,
    {
        self.rule_kind(ErrorKind::Custom, f, msg)
    }

    /// Add a rule reporting `kind` when it fails.
    pub fn rule_kind<F>(mut self, kind: ErrorKind, f: F, msg: impl Into<String>) -> Self
    where
        F: FnOnce(&V) -> bool,
    {
        if self.failure.is_none() && !f(&self.value) {
            self.failure = Some((kind, msg.into()));
        }
        self
    }

    /// Continue with the next widget.
    pub fn field<W: Validatable>(self, widget: &W, name: impl Into<String>) -> FieldBuilder<W::Value> {
        self.finalize().field(widget, name)
    }

    /// Continue with the next plain value.
    pub fn value<V2>(self, name: impl Into<String>, value: V2) -> FieldBuilder<V2> {
        self.finalize().value(name, value)
    }

    /// Finalize and collect the results of every field.
    pub fn validate(self) -> ValidationResult {
        self.finalize().validate()
    }

    /// Finalize this field and return the validator.
    fn finalize(self) -> Validator {
        let mut validator = self.validator;
        validator.fields.push(FieldEntry {
            name: self.name,
            widget_id: self.widget_id,
            failure: self.failure,
        });
        validator
    }
}

// Built-in rules for String values
impl FieldBuilder<String> {
    /// Require the field to be non-blank.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule_kind(ErrorKind::Required, |v| !v.trim().is_empty(), msg)
    }

    /// Require minimum length (in characters).
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule_kind(ErrorKind::Length, |v| v.chars().count() >= min, msg)
    }

    /// Require maximum length (in characters).
    pub fn max_length(self, max: usize, msg: impl Into<String>) -> Self {
        self.rule_kind(ErrorKind::Length, |v| v.chars().count() <= max, msg)
    }

    /// Require the value to match a regex.
    pub fn matches(self, re: &Regex, msg: impl Into<String>) -> Self {
        self.rule_kind(ErrorKind::Format, |v| re.is_match(v), msg)
    }

    /// Require an RFC 5322 email address. Empty passes; use `required()`.
    pub fn email(self, msg: impl Into<String>) -> Self {
        self.rule_kind(
            ErrorKind::Format,
            |v| v.is_empty() || email_address::EmailAddress::is_valid(v),
            msg,
        )
    }

    /// Require the value to contain a substring.
    pub fn contains(self, substr: &str, msg: impl Into<String>) -> Self {
        self.rule_kind(ErrorKind::Format, |v| v.contains(substr), msg)
    }
}

// Built-in rules for selections
impl FieldBuilder<SelectionValue> {
    /// Require that something is selected.
    pub fn selected(self, msg: impl Into<String>) -> Self {
        self.rule_kind(ErrorKind::SelectionRequired, |v| !v.is_empty(), msg)
    }

    /// Require at least `min` selected values.
    pub fn min_selected(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule_kind(ErrorKind::Length, |v| v.len() >= min, msg)
    }
}
