//! Select widget state.

use formdom::Surface;
use formdom::text::display_width;

use super::dropdown::{DropdownController, DropdownState};
use super::filter::filter_options;
use super::item::{OptionList, SelectOption};
use super::selection::SelectionValue;
use crate::config::SelectConfig;
use crate::widgets::events::EventResult;

/// Change callback invoked with every new selection value.
pub type ChangeHandler = Box<dyn FnMut(SelectionValue) + Send>;

/// Construction input for a [`Select`].
#[derive(Debug, Clone, Default)]
pub struct SelectProps {
    pub options: OptionList,
    pub multiple: bool,
    /// Overrides the config placeholder when set.
    pub placeholder: Option<String>,
    /// Must be `Multiple` exactly when `multiple` is set.
    pub value: SelectionValue,
}

impl SelectProps {
    /// Single-select props with nothing selected.
    pub fn single(options: OptionList) -> Self {
        Self {
            options,
            multiple: false,
            placeholder: None,
            value: SelectionValue::empty(false),
        }
    }

    /// Multi-select props with nothing selected.
    pub fn multiple(options: OptionList) -> Self {
        Self {
            options,
            multiple: true,
            placeholder: None,
            value: SelectionValue::empty(true),
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn value(mut self, value: impl Into<SelectionValue>) -> Self {
        self.value = value.into();
        self
    }
}

/// A dropdown select with search, single or multiple selection, and a
/// select-all row in multiple mode.
///
/// The selection value belongs to the owner: the widget reads it as a prop
/// (see [`Select::set_value`]) and asks for changes through the
/// [`on_change`](Select::on_change) callback. The open state and search
/// text belong to the widget and reset whenever the dropdown closes.
///
/// # Example
///
/// ```
/// use formdom::{Event, Surface};
/// use formkit::widgets::select::{OptionList, Select, SelectProps};
///
/// let surface = Surface::new();
/// let options = OptionList::from_pairs([("us", "United States"), ("ca", "Canada")]).unwrap();
/// let mut country = Select::new("country", SelectProps::single(options), &surface)
///     .on_change(|value| println!("country -> {value:?}"));
///
/// country.handle_event(&Event::click(country.control_id()));
/// assert!(country.is_open());
/// ```
pub struct Select {
    id: String,
    options: OptionList,
    multiple: bool,
    value: SelectionValue,
    config: SelectConfig,
    dropdown: DropdownController,
    on_change: Option<ChangeHandler>,
}

impl std::fmt::Debug for Select {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Select")
            .field("id", &self.id)
            .field("multiple", &self.multiple)
            .field("value", &self.value)
            .field("dropdown", &self.dropdown.state())
            .finish_non_exhaustive()
    }
}

impl Select {
    /// Create a select whose root element id is `id`.
    pub fn new(id: impl Into<String>, props: SelectProps, surface: &Surface) -> Self {
        let id = id.into();
        let mut config = SelectConfig::default();
        if let Some(placeholder) = props.placeholder {
            config.placeholder = placeholder;
        }
        let value = coerce_shape(&id, props.value, props.multiple);

        Self {
            dropdown: DropdownController::new(id.clone(), surface),
            id,
            options: props.options,
            multiple: props.multiple,
            value,
            config,
            on_change: None,
        }
    }

    /// Set the change callback.
    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: FnMut(SelectionValue) + Send + 'static,
    {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// Replace all display text, placeholder included.
    pub fn with_config(mut self, config: SelectConfig) -> Self {
        self.config = config;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    pub fn options(&self) -> &OptionList {
        &self.options
    }

    /// Replace the option list. Selected values are not pruned.
    pub fn set_options(&mut self, options: OptionList) {
        self.options = options;
    }

    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    // -------------------------------------------------------------------------
    // Selection value (owned by the caller)
    // -------------------------------------------------------------------------

    pub fn value(&self) -> &SelectionValue {
        &self.value
    }

    /// Push the owner's current value into the widget.
    pub fn set_value(&mut self, value: impl Into<SelectionValue>) {
        self.value = coerce_shape(&self.id, value.into(), self.multiple);
    }

    pub fn is_selected(&self, option: &SelectOption) -> bool {
        self.value.contains(&option.value)
    }

    /// Text for the closed control: the selected label(s) or the placeholder.
    pub fn display_label(&self) -> String {
        let labels = self.value.selected_labels(&self.options);
        if labels.is_empty() {
            self.config.placeholder.clone()
        } else {
            labels.join(", ")
        }
    }

    /// Columns needed for the closed control: label, a space, and the arrow.
    pub fn intrinsic_width(&self) -> u16 {
        display_width(&self.display_label()).saturating_add(2)
    }

    // -------------------------------------------------------------------------
    // Dropdown and search (owned by the widget)
    // -------------------------------------------------------------------------

    pub fn dropdown_state(&self) -> DropdownState {
        self.dropdown.state()
    }

    pub fn is_open(&self) -> bool {
        self.dropdown.is_open()
    }

    /// Whether an outside-press listener is registered right now.
    pub fn is_listening(&self) -> bool {
        self.dropdown.is_listening()
    }

    pub fn open(&self) {
        self.dropdown.open();
    }

    pub fn close(&self) {
        self.dropdown.close();
    }

    pub fn toggle_open(&self) {
        self.dropdown.toggle();
    }

    pub(super) fn dropdown(&self) -> &DropdownController {
        &self.dropdown
    }

    pub fn query(&self) -> String {
        self.dropdown.query()
    }

    /// Set the search text. Ignored while closed.
    pub fn set_query(&self, query: impl Into<String>) {
        self.dropdown.set_query(query);
    }

    /// Options matching the current search, in list order.
    pub fn visible_options(&self) -> Vec<&SelectOption> {
        let query = self.dropdown.query();
        filter_options(self.options.as_slice(), Some(&query))
    }

    /// Whether the selection is exactly the visible options.
    pub fn all_visible_selected(&self) -> bool {
        self.value.all_selected(&self.visible_options())
    }

    // -------------------------------------------------------------------------
    // Selection actions
    // -------------------------------------------------------------------------

    /// Pick the option carrying `value`.
    ///
    /// Single mode replaces the selection and closes the dropdown; multiple
    /// mode toggles the value and leaves the dropdown open.
    pub fn pick(&mut self, value: &str) -> EventResult {
        let Some(option) = self.options.find(value) else {
            log::warn!("Select {} pick of unknown value '{}'", self.id, value);
            return EventResult::Ignored;
        };
        let next = self.value.picked(option);
        self.emit(next);
        if !self.multiple {
            self.dropdown.close();
        }
        EventResult::Consumed
    }

    /// Activate the select-all row. No-op in single mode.
    pub fn toggle_all(&mut self) -> EventResult {
        let next = self.value.toggled_all(&self.visible_options());
        match next {
            Some(next) => {
                self.emit(next);
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }

    fn emit(&mut self, value: SelectionValue) {
        log::debug!("Select {} change {:?} -> {:?}", self.id, self.value, value);
        if let Some(handler) = self.on_change.as_mut() {
            handler(value);
        }
    }

    // -------------------------------------------------------------------------
    // Element ids
    // -------------------------------------------------------------------------

    pub fn control_id(&self) -> String {
        format!("{}-control", self.id)
    }

    pub fn label_id(&self) -> String {
        format!("{}-label", self.id)
    }

    pub fn dropdown_id(&self) -> String {
        format!("{}-dropdown", self.id)
    }

    pub fn search_id(&self) -> String {
        format!("{}-search", self.id)
    }

    pub fn clear_search_id(&self) -> String {
        format!("{}-search-clear", self.id)
    }

    pub fn select_all_id(&self) -> String {
        format!("{}-select-all", self.id)
    }

    pub fn empty_id(&self) -> String {
        format!("{}-empty", self.id)
    }

    /// Id of the row for the option at `index` in the full option list.
    pub fn option_id(&self, index: usize) -> String {
        format!("{}-option-{}", self.id, index)
    }

    /// Id of the row for the option carrying `value`.
    pub fn option_id_for(&self, value: &str) -> Option<String> {
        self.options.position(value).map(|i| self.option_id(i))
    }

    /// Whether `target` is one of the element ids this widget renders.
    ///
    /// Ids of a sibling whose own id merely starts with this one (`country`
    /// vs `country-code`) don't count.
    pub fn owns(&self, target: &str) -> bool {
        let Some(rest) = target.strip_prefix(self.id.as_str()) else {
            return false;
        };
        match rest {
            "" | "-control" | "-label" | "-dropdown" | "-search" | "-search-clear"
            | "-select-all" | "-empty" => true,
            _ => self.option_for_id(target).is_some(),
        }
    }

    /// Option behind an option-row id.
    pub(super) fn option_for_id(&self, target: &str) -> Option<&SelectOption> {
        let index = target
            .strip_prefix(self.id.as_str())?
            .strip_prefix("-option-")?
            .parse::<usize>()
            .ok()?;
        // `parse` also takes "+1" and "01"; only exact row ids count.
        if self.option_id(index) != target {
            return None;
        }
        self.options.get(index)
    }
}

fn coerce_shape(id: &str, value: SelectionValue, multiple: bool) -> SelectionValue {
    if value.is_multiple() == multiple {
        value
    } else {
        log::warn!(
            "Select {} got {:?} but multiple={}, resetting to empty",
            id,
            value,
            multiple
        );
        SelectionValue::empty(multiple)
    }
}
