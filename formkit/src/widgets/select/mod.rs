//! Select widget - a dropdown with search, single or multiple selection.

pub mod dropdown;
pub mod events;
pub mod filter;
pub mod item;
pub mod render;
pub mod selection;
mod state;

pub use dropdown::{DropdownController, DropdownState};
pub use filter::filter_options;
pub use item::{OptionList, SelectOption};
pub use selection::SelectionValue;
pub use state::{ChangeHandler, Select, SelectProps};
