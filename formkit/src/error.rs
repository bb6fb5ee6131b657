//! Error types for widget setup and form submission.

use thiserror::Error;

use crate::form::FormErrors;

/// Errors from building an option list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionListError {
    /// Two options share the same value.
    #[error("Duplicate option value '{0}'")]
    DuplicateValue(String),
}

/// Errors from submitting a form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// One or more fields failed validation; nothing was submitted.
    #[error("Form has {} invalid field(s)", .0.len())]
    Invalid(FormErrors),
}

/// Errors from installing the file logger.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to open log file '{path}'")]
    OpenFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("A global logger is already installed")]
    AlreadyInstalled(#[from] log::SetLoggerError),
}
