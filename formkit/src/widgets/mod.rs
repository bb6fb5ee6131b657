//! Built-in widgets.
//!
//! Widgets are headless state machines. Each one renders into a
//! [`formdom::Element`] tree and takes [`formdom::Event`]s aimed at the ids
//! in that tree. Values belong to the owner: a widget reads its value as a
//! prop and reports edits through a change callback.

pub mod events;
pub mod input;
pub mod select;

pub use events::EventResult;
pub use input::{Input, InputKind, InputProps};
pub use select::{OptionList, Select, SelectOption, SelectProps, SelectionValue};
