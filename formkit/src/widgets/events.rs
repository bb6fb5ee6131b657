//! Widget event handling types.

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }

    /// This result if handled, otherwise the result of `f`.
    pub fn or_else(self, f: impl FnOnce() -> EventResult) -> EventResult {
        if self.is_handled() { self } else { f() }
    }
}
