//! Snapshot store for Lulu widgets.
//!
//! The app publishes a [`Snapshot`](lulu_widget_protocol::Snapshot) into a
//! flat key-value store; widgets read it back at every refresh. This crate
//! provides:
//!
//! - [`KeyValueStore`]: the store abstraction, with [`MemoryStore`] and the
//!   [`JsonFileStore`] that stands in for the platform store
//! - [`SnapshotReader`]: the widget read path, which never fails
//! - [`SnapshotWriter`]: the app write path
//!
//! # Examples
//!
//! ```no_run
//! use lulu_widget_store::{JsonFileStore, SnapshotReader};
//!
//! # fn example() -> lulu_widget_store::Result<()> {
//! let reader = SnapshotReader::new(JsonFileStore::at_default_location()?);
//! let snapshot = reader.read();
//! println!("widget state: {}", snapshot.state);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod file;
pub mod kv;
pub mod reader;
pub mod writer;

pub use error::{Result, StoreError};
pub use file::{JsonFileStore, default_store_path};
pub use kv::{KeyValueStore, MemoryStore};
pub use reader::SnapshotReader;
pub use writer::SnapshotWriter;
