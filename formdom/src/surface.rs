//! The ambient input surface.
//!
//! Widgets that need to hear about pointer presses anywhere on screen (for
//! example to close a dropdown when the user clicks elsewhere) subscribe
//! here. A [`Subscription`] is a guard: the listener stays registered for as
//! long as the guard lives and is removed when it is dropped.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, Weak};

use crate::element::{path_to, Element};
use crate::event::PointerDown;

type Listener = Arc<dyn Fn(&PointerDown) + Send + Sync>;

#[derive(Default)]
struct SurfaceInner {
    next_id: u64,
    listeners: BTreeMap<u64, Listener>,
}

/// Broadcasts pointer-down events to subscribed listeners.
///
/// Cheap to clone; clones share the same listener set.
#[derive(Clone, Default)]
pub struct Surface {
    inner: Arc<Mutex<SurfaceInner>>,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pointer-down listener.
    ///
    /// The listener is removed when the returned guard is dropped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&PointerDown) + Send + Sync + 'static,
    {
        let mut guard = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let id = guard.next_id;
        guard.next_id += 1;
        guard.listeners.insert(id, Arc::new(listener));
        log::debug!("Surface::subscribe id={} live={}", id, guard.listeners.len());

        Subscription {
            id,
            surface: Arc::downgrade(&self.inner),
        }
    }

    /// Number of live listeners.
    pub fn listener_count(&self) -> usize {
        self.inner
            .lock()
            .map(|guard| guard.listeners.len())
            .unwrap_or_else(|poisoned| poisoned.into_inner().listeners.len())
    }

    /// Deliver a pointer press to every live listener.
    ///
    /// Listeners are snapshotted before delivery, so a listener may drop its
    /// own (or any other) subscription while being called.
    pub fn dispatch(&self, event: &PointerDown) {
        let listeners: Vec<Listener> = self
            .inner
            .lock()
            .map(|guard| guard.listeners.values().cloned().collect())
            .unwrap_or_else(|poisoned| poisoned.into_inner().listeners.values().cloned().collect());

        for listener in listeners {
            listener(event);
        }
    }

    /// Press the element `target` inside the tree rooted at `root`.
    ///
    /// An unknown id is treated as a press outside every element.
    pub fn pointer_down(&self, root: &Element, target: &str) {
        let event = match path_to(root, target) {
            Some(path) => PointerDown::on_path(path),
            None => PointerDown::nowhere(0, 0),
        };
        self.dispatch(&event);
    }
}

/// Keeps a surface listener registered until dropped.
#[derive(Debug)]
#[must_use = "dropping a Subscription immediately unregisters its listener"]
pub struct Subscription {
    id: u64,
    surface: Weak<Mutex<SurfaceInner>>,
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(inner) = self.surface.upgrade() else {
            return;
        };
        let mut guard = inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let removed = guard.listeners.remove(&self.id);
        log::debug!(
            "Subscription::drop id={} live={}",
            self.id,
            guard.listeners.len()
        );
        // Release the lock before the listener itself is dropped.
        drop(guard);
        drop(removed);
    }
}
