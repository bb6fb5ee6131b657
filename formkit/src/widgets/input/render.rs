//! Rendering for the Input widget.

use formdom::text::mask;
use formdom::Element;

use super::{Input, InputKind};

const PASSWORD_MASK: char = '•';

impl Input {
    /// Build the element tree: optional label row, the field, and the error
    /// line when an error is set.
    pub fn render(&self) -> Element {
        let props = self.props();
        let mut root = Element::col().id(self.id());

        if let Some(label) = &props.label {
            let mut row = Element::row()
                .id(self.label_id())
                .child(Element::text(label.clone()));
            if props.required {
                row = row.child(Element::text("*").data("role", "required"));
            }
            root = root.child(row);
        }

        let shown = match props.kind {
            InputKind::Password => mask(&props.value, PASSWORD_MASK),
            _ => props.value.clone(),
        };
        let mut field = Element::text(shown)
            .id(self.field_id())
            .focusable(!props.disabled)
            .clickable(!props.disabled)
            .captures_input(true)
            .disabled(props.disabled)
            .data("type", props.kind.as_str())
            .data("cursor", self.cursor().to_string())
            .data("invalid", self.has_error().to_string());
        if let Some(placeholder) = &props.placeholder {
            field = field.data("placeholder", placeholder.clone());
        }
        root = root.child(field);

        if let Some(error) = &props.error {
            root = root.child(Element::text(error.clone()).id(self.error_id()));
        }

        root
    }
}
