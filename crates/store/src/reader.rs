//! The widget side of the store: read once, never fail.

use lulu_widget_protocol::{Entries, Snapshot, UrgencyLevel, WidgetState, keys};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::kv::KeyValueStore;

/// Reads snapshots for a widget render pass.
///
/// # Examples
///
/// ```
/// use lulu_widget_store::{MemoryStore, SnapshotReader};
/// use lulu_widget_protocol::{Snapshot, WidgetState};
///
/// let reader = SnapshotReader::new(MemoryStore::new());
/// let snapshot = reader.read();
/// assert_eq!(snapshot.state, WidgetState::Empty);
/// assert_eq!(snapshot, Snapshot::default());
/// ```
#[derive(Debug)]
pub struct SnapshotReader<S> {
    store: S,
}

impl<S: KeyValueStore> SnapshotReader<S> {
    /// Creates a reader over `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reads the latest snapshot with a single store read.
    ///
    /// A missing store, an unreadable store and malformed fields all resolve
    /// to defaults. Problems are logged, never returned.
    #[instrument(skip(self))]
    pub fn read(&self) -> Snapshot {
        match self.store.load_all() {
            Ok(Some(entries)) => {
                log_unrecognized(&entries);
                let snapshot = Snapshot::from_entries(&entries);
                debug!(
                    state = %snapshot.state,
                    minutes_remaining = ?snapshot.minutes_remaining,
                    keys = entries.len(),
                    "read widget snapshot"
                );
                snapshot
            }
            Ok(None) => {
                debug!("no snapshot published yet");
                Snapshot::default()
            }
            Err(e) => {
                warn!(error = %e, "failed to read widget store, using defaults");
                Snapshot::default()
            }
        }
    }
}

/// Logs enum values the parser is about to discard.
fn log_unrecognized(entries: &Entries) {
    if let Some(raw) = entries.get(keys::STATE).filter(|v| !is_known_state(v)) {
        debug!(value = %raw, "unrecognized widget state, using EMPTY");
    }

    if let Some(raw) = entries.get(keys::URGENCY_LEVEL).filter(|v| !v.is_null()) {
        let known = raw
            .as_str()
            .is_some_and(|s| s.parse::<UrgencyLevel>().is_ok());
        if !known {
            debug!(value = %raw, "unrecognized urgency level, drawing no indicator");
        }
    }

    let unknown = entries
        .keys()
        .filter(|key| {
            !keys::ALL.contains(&key.as_str()) && !keys::READ_ALIASES.contains(&key.as_str())
        })
        .count();
    if unknown > 0 {
        debug!(unknown, "ignoring keys outside the widget schema");
    }
}

/// Returns `true` if `value` names a widget state.
fn is_known_state(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|s| s.parse::<WidgetState>().is_ok())
}
