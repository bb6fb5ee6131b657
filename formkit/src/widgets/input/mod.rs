//! Input widget - a single-line text field.

pub mod events;
pub mod render;
mod state;

pub use state::{Input, InputKind, InputProps, TextChangeHandler};
