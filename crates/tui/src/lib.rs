//! Terminal preview for Lulu widgets.
//!
//! The preview is a widget host: it reads the snapshot store, draws the
//! rendered view at each form factor, dispatches taps as deep links and
//! re-reads the store on the adaptive refresh schedule.
//!
//! - [`app`]: the preview application and its run loop
//! - [`state`]: what is shown and when it refreshes next
//! - [`dispatch`]: handing deep links to the host
//! - [`terminal`]: terminal setup, teardown and panic handling
//! - [`event`]: key and mouse mappings
//!
//! # Example
//!
//! ```no_run
//! use chrono::Utc;
//! use lulu_widget_store::{JsonFileStore, SnapshotReader};
//! use lulu_widget_tui::{App, OsDispatcher, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut guard = terminal::TerminalGuard::new()?;
//!
//!     let reader = SnapshotReader::new(JsonFileStore::at_default_location()?);
//!     let mut app = App::new(reader, OsDispatcher, Utc::now());
//!     let result = app.run(guard.terminal_mut()).await;
//!
//!     guard.restore()?;
//!     result
//! }
//! ```

pub mod app;
pub mod dispatch;
pub mod event;
pub mod layout;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

pub use app::App;
pub use dispatch::{ActionDispatcher, OsDispatcher, RecordingDispatcher};
pub use state::{DispatchRecord, PreviewState};
