//! Event handling for the Select widget.

use formdom::{Event, Key, Modifiers};

use super::Select;
use crate::widgets::events::EventResult;

impl Select {
    /// Route an input event aimed at one of this widget's elements.
    ///
    /// Outside presses arrive through the surface subscription instead.
    pub fn handle_event(&mut self, event: &Event) -> EventResult {
        match event {
            Event::Click {
                target: Some(target),
                ..
            } => self.on_click(target),
            Event::Key {
                target: Some(target),
                key,
                modifiers,
            } => self.on_key(target, *key, *modifiers),
            Event::Input { target, text } if *target == self.search_id() => {
                if !self.is_open() {
                    return EventResult::Ignored;
                }
                self.set_query(text.clone());
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn on_click(&mut self, target: &str) -> EventResult {
        if !self.owns(target) {
            return EventResult::Ignored;
        }
        if target == self.control_id() || target == self.label_id() {
            self.toggle_open();
            return EventResult::Consumed;
        }

        // Everything else lives inside the dropdown panel.
        if !self.is_open() {
            return EventResult::Ignored;
        }

        if target == self.search_id() {
            // Focuses the search box without toggling anything.
            EventResult::Consumed
        } else if target == self.clear_search_id() {
            self.dropdown().clear_query();
            EventResult::Consumed
        } else if target == self.select_all_id() {
            self.toggle_all()
        } else if let Some(option) = self.option_for_id(target) {
            let value = option.value.clone();
            self.pick(&value)
        } else {
            EventResult::Ignored
        }
    }

    fn on_key(&mut self, target: &str, key: Key, modifiers: Modifiers) -> EventResult {
        // Ignore keys with ctrl/alt modifiers
        if !self.owns(target) || modifiers.ctrl || modifiers.alt {
            return EventResult::Ignored;
        }

        if target == self.control_id() {
            return if self.dropdown().handle_key(key) {
                EventResult::Consumed
            } else {
                EventResult::Ignored
            };
        }

        if !self.is_open() {
            return EventResult::Ignored;
        }

        if target == self.search_id() {
            return self.on_search_key(key);
        }

        if key == Key::Escape {
            self.close();
            return EventResult::Consumed;
        }
        if !key.is_activation() {
            return EventResult::Ignored;
        }

        if target == self.select_all_id() {
            self.toggle_all()
        } else if let Some(option) = self.option_for_id(target) {
            let value = option.value.clone();
            self.pick(&value)
        } else {
            EventResult::Ignored
        }
    }

    fn on_search_key(&mut self, key: Key) -> EventResult {
        match key {
            Key::Char(c) => {
                let mut query = self.query();
                query.push(c);
                self.set_query(query);
                EventResult::Consumed
            }
            Key::Backspace => {
                let mut query = self.query();
                query.pop();
                self.set_query(query);
                EventResult::Consumed
            }
            Key::Escape => {
                self.close();
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}
