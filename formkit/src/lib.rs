//! Headless form widgets with client-side validation.
//!
//! - [`widgets::Select`]: dropdown with search, single or multiple selection
//!   and a select-all row.
//! - [`widgets::Input`]: single-line text field.
//! - [`form::RegistrationForm`]: name, email, interests and country, validated
//!   on submit.
//!
//! Widgets render into [`formdom::Element`] trees and take
//! [`formdom::Event`]s; a host toolkit does layout, painting, and input
//! capture.

pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod state;
pub mod validation;
pub mod widgets;

pub mod prelude {
    pub use crate::config::{FormConfig, SelectConfig};
    pub use crate::error::{LoggingError, OptionListError, SubmitError};
    pub use crate::form::{FormErrors, FormField, RegistrationData, RegistrationForm};
    pub use crate::state::State;
    pub use crate::validation::{ErrorKind, ValidationResult, Validator};
    pub use crate::widgets::select::filter_options;
    pub use crate::widgets::{
        EventResult, Input, InputKind, InputProps, OptionList, Select, SelectOption, SelectProps,
        SelectionValue,
    };

    pub use formdom::{Element, Event, Key, PointerDown, Surface};
}
