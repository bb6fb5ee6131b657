use serde::{Deserialize, Serialize};

use formdom::text::char_to_byte_index;

/// The kind of text an input takes. Affects rendering only; no kind
/// validates what is typed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Password,
    Number,
    Tel,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Email => "email",
            InputKind::Password => "password",
            InputKind::Number => "number",
            InputKind::Tel => "tel",
        }
    }
}

/// Change callback invoked with the full text after every edit.
pub type TextChangeHandler = Box<dyn FnMut(String) + Send>;

/// Construction input for an [`Input`].
#[derive(Debug, Clone, Default)]
pub struct InputProps {
    pub kind: InputKind,
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub value: String,
    pub required: bool,
    pub error: Option<String>,
    pub disabled: bool,
}

impl InputProps {
    pub fn new(kind: InputKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// A single-line text field.
///
/// Every edit reports the whole new text through the change callback, with
/// no validation of its own. The widget keeps a copy of the text so edits
/// compose between events; the owner stays authoritative and can overwrite
/// it at any time with [`Input::set_value`]. Errors are shown, not computed:
/// the owner passes them in with [`Input::set_error`].
pub struct Input {
    id: String,
    props: InputProps,
    /// Cursor position in characters
    cursor: usize,
    on_change: Option<TextChangeHandler>,
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Input")
            .field("id", &self.id)
            .field("props", &self.props)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

impl Input {
    /// Create an input whose root element id is `id`.
    pub fn new(id: impl Into<String>, props: InputProps) -> Self {
        let cursor = props.value.chars().count();
        Self {
            id: id.into(),
            props,
            cursor,
            on_change: None,
        }
    }

    /// Set the change callback.
    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: FnMut(String) + Send + 'static,
    {
        self.on_change = Some(Box::new(handler));
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn field_id(&self) -> String {
        format!("{}-field", self.id)
    }

    pub fn label_id(&self) -> String {
        format!("{}-label", self.id)
    }

    pub fn error_id(&self) -> String {
        format!("{}-error", self.id)
    }

    pub fn props(&self) -> &InputProps {
        &self.props
    }

    pub fn kind(&self) -> InputKind {
        self.props.kind
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn value(&self) -> &str {
        &self.props.value
    }

    pub fn is_empty(&self) -> bool {
        self.props.value.is_empty()
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn error(&self) -> Option<&str> {
        self.props.error.as_deref()
    }

    pub fn has_error(&self) -> bool {
        self.props.error.is_some()
    }

    pub fn is_required(&self) -> bool {
        self.props.required
    }

    pub fn is_disabled(&self) -> bool {
        self.props.disabled
    }

    // -------------------------------------------------------------------------
    // Owner-side props
    // -------------------------------------------------------------------------

    /// Overwrite the text. Keeps the cursor if it still fits.
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value == self.props.value {
            return;
        }
        let len = value.chars().count();
        self.props.value = value;
        self.cursor = self.cursor.min(len);
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.props.error = error;
    }

    pub fn clear_error(&mut self) {
        self.props.error = None;
    }

    // -------------------------------------------------------------------------
    // Editing
    // -------------------------------------------------------------------------

    /// Insert a character at the cursor.
    pub(super) fn insert_char(&mut self, c: char) {
        let byte_pos = char_to_byte_index(&self.props.value, self.cursor);
        self.props.value.insert(byte_pos, c);
        self.cursor += 1;
        self.emit();
    }

    /// Delete the character before the cursor. Returns true if text changed.
    pub(super) fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let byte_pos = char_to_byte_index(&self.props.value, self.cursor - 1);
        self.props.value.remove(byte_pos);
        self.cursor -= 1;
        self.emit();
        true
    }

    /// Delete the character under the cursor. Returns true if text changed.
    pub(super) fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.props.value.chars().count() {
            return false;
        }
        let byte_pos = char_to_byte_index(&self.props.value, self.cursor);
        self.props.value.remove(byte_pos);
        self.emit();
        true
    }

    /// Replace the whole text, cursor at the end.
    pub(super) fn replace_text(&mut self, text: &str) {
        self.props.value = text.to_string();
        self.cursor = text.chars().count();
        self.emit();
    }

    pub(super) fn move_cursor(&mut self, delta: isize) {
        let len = self.props.value.chars().count();
        self.cursor = self.cursor.saturating_add_signed(delta).min(len);
    }

    pub(super) fn move_to_start(&mut self) {
        self.cursor = 0;
    }

    pub(super) fn move_to_end(&mut self) {
        self.cursor = self.props.value.chars().count();
    }

    fn emit(&mut self) {
        log::debug!("Input {} change len={}", self.id, self.props.value.len());
        if let Some(handler) = self.on_change.as_mut() {
            handler(self.props.value.clone());
        }
    }
}
