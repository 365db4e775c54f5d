//! The key-value store abstraction and an in-memory implementation.

use std::sync::{Arc, Mutex, PoisonError};

use lulu_widget_protocol::Entries;

use crate::error::Result;

/// A flat key-value store shared between the app and its widgets.
///
/// Stands in for the platform stores (Android shared preferences, an iOS app
/// group's user defaults). Implementations must make [`replace_all`] atomic
/// with respect to [`load_all`]: a reader sees either the previous entries
/// or the new ones, never a mix.
///
/// [`replace_all`]: KeyValueStore::replace_all
/// [`load_all`]: KeyValueStore::load_all
pub trait KeyValueStore: Send + Sync {
    /// Reads every entry in one pass.
    ///
    /// Returns `Ok(None)` if nothing was ever written.
    ///
    /// # Errors
    ///
    /// Returns an error if the store exists but cannot be read.
    fn load_all(&self) -> Result<Option<Entries>>;

    /// Replaces every entry. Last write wins.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    fn replace_all(&self, entries: &Entries) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn load_all(&self) -> Result<Option<Entries>> {
        (**self).load_all()
    }

    fn replace_all(&self, entries: &Entries) -> Result<()> {
        (**self).replace_all(entries)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn load_all(&self) -> Result<Option<Entries>> {
        (**self).load_all()
    }

    fn replace_all(&self, entries: &Entries) -> Result<()> {
        (**self).replace_all(entries)
    }
}

/// An in-process store, for tests and for hosts that embed the app.
///
/// # Examples
///
/// ```
/// use lulu_widget_store::{KeyValueStore, MemoryStore};
/// use lulu_widget_protocol::Entries;
///
/// let store = MemoryStore::new();
/// assert_eq!(store.load_all().unwrap(), None);
///
/// store.replace_all(&Entries::new()).unwrap();
/// assert_eq!(store.load_all().unwrap(), Some(Entries::new()));
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<Option<Entries>>,
}

impl MemoryStore {
    /// Creates an empty store that has never been written.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `entries`.
    #[must_use]
    pub fn with_entries(entries: Entries) -> Self {
        Self {
            entries: Mutex::new(Some(entries)),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn load_all(&self) -> Result<Option<Entries>> {
        let guard = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(guard.clone())
    }

    fn replace_all(&self, entries: &Entries) -> Result<()> {
        let mut guard = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(entries.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn last_write_wins() {
        let store = MemoryStore::new();
        let mut first = Entries::new();
        first.insert("widget_state".to_string(), json!("ACTIVE"));
        let mut second = Entries::new();
        second.insert("widget_total_feeding_count".to_string(), json!(3));

        store.replace_all(&first).unwrap();
        store.replace_all(&second).unwrap();

        assert_eq!(store.load_all().unwrap(), Some(second));
    }

    #[test]
    fn shared_through_arc() {
        let store = Arc::new(MemoryStore::new());
        let shared = Arc::clone(&store);

        shared.replace_all(&Entries::new()).unwrap();
        assert!(store.load_all().unwrap().is_some());
    }
}
