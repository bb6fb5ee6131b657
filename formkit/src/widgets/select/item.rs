//! Option types for the Select widget.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::OptionListError;

/// A selectable `{value, label}` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
    /// Machine value, unique within its list.
    pub value: String,
    /// Human-readable text.
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Ordered list of options with unique values.
///
/// Order is the caller's and is kept through filtering and display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OptionList(Vec<SelectOption>);

impl OptionList {
    /// Build a list, rejecting duplicate values.
    pub fn new(options: impl IntoIterator<Item = SelectOption>) -> Result<Self, OptionListError> {
        let options: Vec<SelectOption> = options.into_iter().collect();
        let mut seen = HashSet::with_capacity(options.len());
        for option in &options {
            if !seen.insert(option.value.as_str()) {
                return Err(OptionListError::DuplicateValue(option.value.clone()));
            }
        }
        Ok(Self(options))
    }

    /// Build a list from `(value, label)` pairs.
    pub fn from_pairs<V, L>(pairs: impl IntoIterator<Item = (V, L)>) -> Result<Self, OptionListError>
    where
        V: Into<String>,
        L: Into<String>,
    {
        Self::new(pairs.into_iter().map(|(v, l)| SelectOption::new(v, l)))
    }

    pub fn as_slice(&self) -> &[SelectOption] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SelectOption> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Position of the option carrying `value`.
    pub fn position(&self, value: &str) -> Option<usize> {
        self.0.iter().position(|o| o.value == value)
    }

    pub fn get(&self, index: usize) -> Option<&SelectOption> {
        self.0.get(index)
    }

    /// The option carrying `value`.
    pub fn find(&self, value: &str) -> Option<&SelectOption> {
        self.0.iter().find(|o| o.value == value)
    }
}

impl<'a> IntoIterator for &'a OptionList {
    type Item = &'a SelectOption;
    type IntoIter = std::slice::Iter<'a, SelectOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for OptionList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let options = Vec::<SelectOption>::deserialize(deserializer)?;
        Self::new(options).map_err(serde::de::Error::custom)
    }
}
