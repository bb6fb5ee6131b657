//! Selection values and the transitions between them.
//!
//! The owner of a Select holds its [`SelectionValue`]; the widget only
//! computes the next value from the current one and hands it back through
//! its change callback. Nothing here mutates in place.

use serde::{Deserialize, Serialize};

use super::{OptionList, SelectOption};

/// The chosen value(s) of a Select.
///
/// Serializes as a bare string for single selection and a string array for
/// multiple selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectionValue {
    /// One value; the empty string means nothing is selected.
    Single(String),
    /// A set of values without duplicates, in the order they were chosen.
    Multiple(Vec<String>),
}

impl Default for SelectionValue {
    fn default() -> Self {
        Self::Single(String::new())
    }
}

impl From<&str> for SelectionValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for SelectionValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for SelectionValue {
    fn from(values: Vec<String>) -> Self {
        Self::Multiple(values)
    }
}

impl From<Vec<&str>> for SelectionValue {
    fn from(values: Vec<&str>) -> Self {
        Self::Multiple(values.into_iter().map(String::from).collect())
    }
}

impl SelectionValue {
    /// The "nothing selected" value for a single or multiple select.
    pub fn empty(multiple: bool) -> Self {
        if multiple {
            Self::Multiple(Vec::new())
        } else {
            Self::Single(String::new())
        }
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }

    /// True when nothing is selected.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(v) => v.is_empty(),
            Self::Multiple(vs) => vs.is_empty(),
        }
    }

    /// Number of selected values.
    pub fn len(&self) -> usize {
        match self {
            Self::Single(v) if v.is_empty() => 0,
            Self::Single(_) => 1,
            Self::Multiple(vs) => vs.len(),
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        match self {
            Self::Single(v) => v == value,
            Self::Multiple(vs) => vs.iter().any(|v| v == value),
        }
    }

    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(v) => Some(v),
            Self::Multiple(_) => None,
        }
    }

    pub fn as_multiple(&self) -> Option<&[String]> {
        match self {
            Self::Single(_) => None,
            Self::Multiple(vs) => Some(vs),
        }
    }

    /// Value after the user picks `option`.
    ///
    /// Single selection replaces the value. Multiple selection toggles
    /// membership: a present value is removed, an absent one is appended.
    pub fn picked(&self, option: &SelectOption) -> Self {
        match self {
            Self::Single(_) => Self::Single(option.value.clone()),
            Self::Multiple(vs) => {
                if vs.contains(&option.value) {
                    Self::Multiple(vs.iter().filter(|v| **v != option.value).cloned().collect())
                } else {
                    let mut next = vs.clone();
                    next.push(option.value.clone());
                    Self::Multiple(next)
                }
            }
        }
    }

    /// True when the selection is exactly the visible options.
    ///
    /// Same size, and every visible value selected. Always false for single
    /// selection.
    pub fn all_selected(&self, visible: &[&SelectOption]) -> bool {
        match self {
            Self::Single(_) => false,
            Self::Multiple(vs) => {
                vs.len() == visible.len() && visible.iter().all(|o| vs.contains(&o.value))
            }
        }
    }

    /// Value after the select-all row is activated.
    ///
    /// Clears the selection when it already equals the visible options,
    /// otherwise replaces it with exactly the visible values, dropping any
    /// selected value that is filtered out. `None` for single selection.
    pub fn toggled_all(&self, visible: &[&SelectOption]) -> Option<Self> {
        if !self.is_multiple() {
            return None;
        }
        if self.all_selected(visible) {
            Some(Self::Multiple(Vec::new()))
        } else {
            Some(Self::Multiple(
                visible.iter().map(|o| o.value.clone()).collect(),
            ))
        }
    }

    /// Labels of the selected options, in option-list order.
    ///
    /// Values with no matching option are skipped.
    pub fn selected_labels<'a>(&self, options: &'a OptionList) -> Vec<&'a str> {
        match self {
            Self::Single(v) => options
                .find(v)
                .map(|o| vec![o.label.as_str()])
                .unwrap_or_default(),
            Self::Multiple(vs) => options
                .iter()
                .filter(|o| vs.contains(&o.value))
                .map(|o| o.label.as_str())
                .collect(),
        }
    }
}
