//! Widget and form configuration.
//!
//! Both configs deserialize with every field optional, so a host can load a
//! partial override from whatever serde format it uses.

use serde::{Deserialize, Serialize};

/// Display text for a Select widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectConfig {
    /// Shown on the control when nothing is selected.
    pub placeholder: String,
    /// Shown in the empty search box.
    pub search_placeholder: String,
    /// Row shown when the filter leaves no options.
    pub empty_text: String,
    pub select_all_label: String,
    pub deselect_all_label: String,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            placeholder: "Select...".into(),
            search_placeholder: "Search...".into(),
            empty_text: "No options".into(),
            select_all_label: "Select All".into(),
            deselect_all_label: "Deselect All".into(),
        }
    }
}

impl SelectConfig {
    /// Create a config with the given placeholder.
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            ..Default::default()
        }
    }

    /// Set the search box placeholder.
    pub fn search_placeholder(mut self, text: impl Into<String>) -> Self {
        self.search_placeholder = text.into();
        self
    }

    /// Set the text of the empty-result row.
    pub fn empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = text.into();
        self
    }

    /// Set the select-all row labels.
    pub fn select_all_labels(
        mut self,
        select_all: impl Into<String>,
        deselect_all: impl Into<String>,
    ) -> Self {
        self.select_all_label = select_all.into();
        self.deselect_all_label = deselect_all.into();
        self
    }
}

/// Display text for the registration form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub title: String,
    pub submit_label: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            title: "User Registration Form".into(),
            submit_label: "Submit Form".into(),
        }
    }
}

impl FormConfig {
    /// Set the form heading.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the submit button label.
    pub fn submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }
}
