//! The app side of the store.

use lulu_widget_protocol::{Entries, Snapshot};
use tracing::{info, instrument};

use crate::error::Result;
use crate::kv::KeyValueStore;

/// Publishes snapshots for widgets to pick up on their next refresh.
///
/// Unlike the reader, the writer surfaces store errors: the app needs to
/// know its snapshot did not land.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use lulu_widget_store::{MemoryStore, SnapshotReader, SnapshotWriter};
/// use lulu_widget_protocol::dummy::sample_snapshot;
/// use lulu_widget_protocol::WidgetState;
///
/// let store = Arc::new(MemoryStore::new());
/// let writer = SnapshotWriter::new(Arc::clone(&store));
/// let reader = SnapshotReader::new(store);
///
/// let snapshot = sample_snapshot(WidgetState::Urgent);
/// writer.publish(&snapshot).unwrap();
/// assert_eq!(reader.read(), snapshot);
/// ```
#[derive(Debug)]
pub struct SnapshotWriter<S> {
    store: S,
}

impl<S: KeyValueStore> SnapshotWriter<S> {
    /// Creates a writer over `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Replaces the published snapshot.
    ///
    /// Absent optional fields are omitted from the store, so they read back
    /// as absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    #[instrument(skip(self, snapshot), fields(state = %snapshot.state))]
    pub fn publish(&self, snapshot: &Snapshot) -> Result<()> {
        self.store.replace_all(&snapshot.to_entries())?;
        info!("published widget snapshot");
        Ok(())
    }

    /// Clears the store, which widgets read as the `EMPTY` default.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    #[instrument(skip(self))]
    pub fn clear(&self) -> Result<()> {
        self.store.replace_all(&Entries::new())?;
        info!("cleared widget snapshot");
        Ok(())
    }
}


#[cfg(test)]
mod proptest_tests {
    use std::sync::Arc;

    use super::*;
    use crate::kv::MemoryStore;
    use crate::reader::SnapshotReader;
    use lulu_widget_protocol::{UrgencyLevel, WidgetState};
    use proptest::prelude::*;

    fn arb_state() -> impl Strategy<Value = WidgetState> {
        prop_oneof![
            Just(WidgetState::Empty),
            Just(WidgetState::Active),
            Just(WidgetState::Urgent),
        ]
    }

    fn arb_urgency() -> impl Strategy<Value = Option<UrgencyLevel>> {
        prop_oneof![
            Just(None),
            Just(Some(UrgencyLevel::Green)),
            Just(Some(UrgencyLevel::Yellow)),
            Just(Some(UrgencyLevel::Red)),
        ]
    }

    proptest! {
        /// Whatever the app publishes is what the widget reads back.
        #[test]
        fn publish_then_read(
            state in arb_state(),
            urgency_level in arb_urgency(),
            minutes_remaining in proptest::option::of(-120i32..600),
            confidence_score in proptest::option::of(0u8..=100),
            total_feeding_count in 0u32..30,
        ) {
            let snapshot = Snapshot {
                state,
                urgency_level,
                minutes_remaining,
                confidence_score,
                total_feeding_count,
                ..Snapshot::default()
            };
            let store = Arc::new(MemoryStore::new());
            SnapshotWriter::new(Arc::clone(&store)).publish(&snapshot).unwrap();
            prop_assert_eq!(SnapshotReader::new(store).read(), snapshot);
        }
    }
}
