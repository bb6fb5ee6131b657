use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Main axis for laying out children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    Row,
    #[default]
    Column,
}

/// A node in the rendered widget tree.
///
/// Widgets build these every render; the host lays them out and paints
/// them, and routes input back by element id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,

    // Content
    pub content: Content,
    pub direction: Direction,

    // Interaction
    pub focusable: bool,
    pub clickable: bool,
    /// When true, this element captures keyboard input (for text fields).
    pub captures_input: bool,
    /// Disabled elements don't receive input.
    pub disabled: bool,

    // Widget state surfaced to the host
    /// Checkbox state for checkable rows. `None` when not checkable.
    pub checked: Option<bool>,
    /// Highlighted as the current choice.
    pub selected: bool,

    // Custom data storage (option values, roles, etc.)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            content: Content::None,
            direction: Direction::Column,
            focusable: false,
            clickable: false,
            captures_input: false,
            disabled: false,
            checked: None,
            selected: false,
            data: HashMap::new(),
        }
    }
}

impl Element {
    // Constructors

    pub fn row() -> Self {
        Self {
            direction: Direction::Row,
            content: Content::Children(Vec::new()),
            ..Default::default()
        }
    }

    pub fn col() -> Self {
        Self {
            direction: Direction::Column,
            content: Content::Children(Vec::new()),
            ..Default::default()
        }
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(s.into()),
            ..Default::default()
        }
    }

    // Identity

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Children

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    // Interaction

    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn captures_input(mut self, captures: bool) -> Self {
        self.captures_input = captures;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    // Accessors

    /// Child elements, empty for text and empty boxes.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Text of this element if it is a text run.
    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(s) => Some(s),
            _ => None,
        }
    }

    /// All text runs in this subtree, depth first.
    pub fn collect_text(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.push_text(&mut out);
        out
    }

    fn push_text<'a>(&'a self, out: &mut Vec<&'a str>) {
        match &self.content {
            Content::Text(s) => out.push(s),
            Content::Children(children) => {
                for child in children {
                    child.push_text(out);
                }
            }
            Content::None => {}
        }
    }

    pub fn data_value(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }
}
