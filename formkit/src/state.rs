use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// Shared value with interior mutability.
///
/// Owners keep field values and error maps in a `State<T>` so that the
/// change callbacks they hand to widgets can write into them. Clones share
/// the same value. Every write bumps a revision number, which lets an owner
/// skip pushing props down when nothing changed since the last push.
///
/// # Example
///
/// ```
/// use formkit::state::State;
///
/// let country = State::new(String::new());
/// let seen = country.revision();
/// let sink = country.clone();
/// let on_change = move |value: String| sink.set(value);
///
/// on_change("ca".into());
/// assert_eq!(country.get(), "ca");
/// assert!(country.changed_since(seen));
/// ```
#[derive(Debug)]
pub struct State<T> {
    value: Arc<RwLock<T>>,
    revision: Arc<AtomicU64>,
}

impl<T> State<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Arc::new(RwLock::new(value)),
            revision: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Snapshot of the value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.with(T::clone)
    }

    /// Borrow the value for the duration of `f`.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        match self.value.read() {
            Ok(guard) => f(&guard),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }

    pub fn set(&self, value: T) {
        self.update(|v| *v = value);
    }

    /// Mutate the value in place. Always counts as a change.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let mut guard = self
            .value
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard);
        self.revision.fetch_add(1, Ordering::SeqCst);
    }

    /// Number of writes so far.
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::SeqCst)
    }

    pub fn changed_since(&self, revision: u64) -> bool {
        self.revision() != revision
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            revision: Arc::clone(&self.revision),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
