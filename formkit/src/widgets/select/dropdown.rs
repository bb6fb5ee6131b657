//! Open/closed state machine for a Select's dropdown panel.

use std::sync::{Arc, RwLock, Weak};

use formdom::{Key, PointerDown, Subscription, Surface};

/// Whether the dropdown panel is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DropdownState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Default)]
struct DropdownInner {
    state: DropdownState,
    /// Search text for the current open session.
    query: String,
    /// Outside-press listener, held only while open.
    subscription: Option<Subscription>,
}

/// Owns the open state and search text of one dropdown.
///
/// While open, the controller listens on the [`Surface`] for pointer presses
/// and closes itself when one lands outside the element subtree rooted at
/// `owner_id`. The listener is released on every close and when the
/// controller is dropped. Closing always clears the search text.
#[derive(Debug)]
pub struct DropdownController {
    owner_id: String,
    surface: Surface,
    inner: Arc<RwLock<DropdownInner>>,
}

impl DropdownController {
    pub fn new(owner_id: impl Into<String>, surface: &Surface) -> Self {
        Self {
            owner_id: owner_id.into(),
            surface: surface.clone(),
            inner: Arc::new(RwLock::new(DropdownInner::default())),
        }
    }

    pub fn state(&self) -> DropdownState {
        self.inner
            .read()
            .map(|guard| guard.state)
            .unwrap_or_else(|poisoned| poisoned.into_inner().state)
    }

    pub fn is_open(&self) -> bool {
        self.state() == DropdownState::Open
    }

    /// Current search text; empty whenever closed.
    pub fn query(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.query.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().query.clone())
    }

    /// Replace the search text. Ignored while closed.
    pub fn set_query(&self, query: impl Into<String>) {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if guard.state == DropdownState::Open {
            guard.query = query.into();
        }
    }

    pub fn clear_query(&self) {
        self.set_query(String::new());
    }

    /// Whether an outside-press listener is currently registered.
    pub fn is_listening(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.subscription.is_some())
            .unwrap_or_else(|poisoned| poisoned.into_inner().subscription.is_some())
    }

    /// Open the panel. Returns false if it was already open.
    pub fn open(&self) -> bool {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if guard.state == DropdownState::Open {
            return false;
        }

        let weak = Arc::downgrade(&self.inner);
        let owner_id = self.owner_id.clone();
        let subscription = self.surface.subscribe(move |event: &PointerDown| {
            if !event.is_within(&owner_id) {
                log::debug!(
                    "Dropdown {} outside press on {:?}",
                    owner_id,
                    event.target
                );
                close_weak(&weak);
            }
        });

        guard.state = DropdownState::Open;
        guard.query.clear();
        guard.subscription = Some(subscription);
        log::debug!("Dropdown {} opened", self.owner_id);
        true
    }

    /// Close the panel. Returns false if it was already closed.
    pub fn close(&self) -> bool {
        let closed = close(&self.inner);
        if closed {
            log::debug!("Dropdown {} closed", self.owner_id);
        }
        closed
    }

    /// Open if closed, close if open.
    pub fn toggle(&self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Handle a key pressed on the control.
    ///
    /// Enter and Space toggle; Escape closes an open panel. Returns whether
    /// the key was used.
    pub fn handle_key(&self, key: Key) -> bool {
        match key {
            k if k.is_activation() => {
                self.toggle();
                true
            }
            Key::Escape => self.close(),
            _ => false,
        }
    }
}

fn close_weak(weak: &Weak<RwLock<DropdownInner>>) {
    if let Some(inner) = weak.upgrade() {
        close(&inner);
    }
}

fn close(inner: &RwLock<DropdownInner>) -> bool {
    let subscription = {
        let mut guard = inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if guard.state == DropdownState::Closed {
            return false;
        }
        guard.state = DropdownState::Closed;
        guard.query.clear();
        guard.subscription.take()
    };
    // Unsubscribe outside the state lock.
    drop(subscription);
    true
}
