use std::collections::BTreeMap;

/// Which kind of rule a field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A mandatory text field is empty.
    Required,
    /// Text does not have the expected shape.
    Format,
    /// A mandatory selection is empty.
    SelectionRequired,
    /// Text or selection is too short or too long.
    Length,
    /// A caller-supplied rule failed.
    Custom,
}

/// Information about a single field validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field name (from `.field()` / `.value()`).
    pub field_name: String,
    /// Widget ID (for focusing), when validated through a widget.
    pub widget_id: Option<String>,
    pub kind: ErrorKind,
    pub message: String,
}

/// Result of validating one or more fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    /// All fields passed validation.
    #[default]
    Valid,
    /// One or more fields failed validation, in the order they were added.
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    /// Check if all fields passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if any field failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Get all validation errors.
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    /// Get the first validation error (if any).
    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors().first()
    }

    /// Get the widget ID of the first invalid field (for focusing).
    pub fn first_invalid_widget(&self) -> Option<&str> {
        self.errors().iter().find_map(|e| e.widget_id.as_deref())
    }

    /// Message for `field`, if it failed.
    pub fn message(&self, field: &str) -> Option<&str> {
        self.errors()
            .iter()
            .find(|e| e.field_name == field)
            .map(|e| e.message.as_str())
    }

    /// Field name to message. Fields that passed are absent.
    pub fn messages(&self) -> BTreeMap<String, String> {
        self.errors()
            .iter()
            .map(|e| (e.field_name.clone(), e.message.clone()))
            .collect()
    }
}
