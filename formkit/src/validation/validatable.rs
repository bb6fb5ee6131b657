//! Validatable trait for widgets that support validation.

use crate::widgets::{Input, Select, SelectionValue};

/// A widget whose current value can be validated.
pub trait Validatable {
    /// The value type used for validation.
    type Value;

    /// Extract the current value for validation.
    fn validation_value(&self) -> Self::Value;

    /// Get the widget ID for focusing.
    fn widget_id(&self) -> String;
}

impl Validatable for Input {
    type Value = String;

    fn validation_value(&self) -> String {
        self.value().to_string()
    }

    fn widget_id(&self) -> String {
        self.field_id()
    }
}

impl Validatable for Select {
    type Value = SelectionValue;

    fn validation_value(&self) -> SelectionValue {
        self.value().clone()
    }

    fn widget_id(&self) -> String {
        self.control_id()
    }
}
