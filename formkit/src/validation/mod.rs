//! Form validation.
//!
//! A fluent builder checks field values against rules and collects the
//! first failing message per field. Validation never fails as a program
//! error: it always produces a [`ValidationResult`].
//!
//! # Example
//!
//! ```
//! use formkit::validation::Validator;
//! use formkit::widgets::SelectionValue;
//!
//! let result = Validator::new()
//!     .value("name", String::from("  "))
//!         .required("Name is required")
//!     .value("email", String::from("john@example"))
//!         .required("Email is required")
//!         .email("Please enter a valid email address")
//!     .value("country", SelectionValue::from(""))
//!         .selected("Please select a country")
//!     .validate();
//!
//! assert!(result.is_invalid());
//! assert_eq!(result.message("name"), Some("Name is required"));
//! ```

mod result;
mod validatable;
mod validator;

pub use result::{ErrorKind, FieldError, ValidationResult};
pub use validatable::Validatable;
pub use validator::{FieldBuilder, Validator};
