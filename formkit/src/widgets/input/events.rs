//! Event handling for the Input widget.

use formdom::{Event, Key, Modifiers};

use super::Input;
use crate::widgets::events::EventResult;

impl Input {
    /// Handle an event aimed at this input's field.
    ///
    /// Disabled inputs ignore everything.
    pub fn handle_event(&mut self, event: &Event) -> EventResult {
        if self.is_disabled() {
            return EventResult::Ignored;
        }

        match event {
            Event::Key {
                target: Some(target),
                key,
                modifiers,
            } if *target == self.field_id() => self.on_key(*key, *modifiers),
            Event::Input { target, text } if *target == self.field_id() => {
                self.replace_text(text);
                EventResult::Consumed
            }
            Event::Click {
                target: Some(target),
                ..
            } if *target == self.field_id() || *target == self.label_id() => {
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn on_key(&mut self, key: Key, modifiers: Modifiers) -> EventResult {
        match key {
            Key::Char(c) if modifiers.none() || (modifiers.shift && !modifiers.ctrl) => {
                self.insert_char(c);
                EventResult::Consumed
            }
            Key::Backspace if modifiers.none() => {
                self.delete_back();
                EventResult::Consumed
            }
            Key::Delete if modifiers.none() => {
                self.delete_forward();
                EventResult::Consumed
            }
            Key::Left if !modifiers.ctrl => {
                self.move_cursor(-1);
                EventResult::Consumed
            }
            Key::Right if !modifiers.ctrl => {
                self.move_cursor(1);
                EventResult::Consumed
            }
            Key::Home => {
                self.move_to_start();
                EventResult::Consumed
            }
            Key::End => {
                self.move_to_end();
                EventResult::Consumed
            }
            // Enter and everything else bubbles to the owner
            _ => EventResult::Ignored,
        }
    }
}
