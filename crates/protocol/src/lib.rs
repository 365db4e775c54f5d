//! Shared widget contract for Lulu home screen and lock screen widgets.
//!
//! This crate is the host-agnostic core every widget host links against:
//! it reads the snapshot the app publishes, derives what the widget should
//! show, lays that out for a form factor, and says when to refresh.
//!
//! # Overview
//!
//! - [`keys`]: wire key names of the snapshot store
//! - [`snapshot`]: the [`Snapshot`] schema and its lenient parser
//! - [`state`]: widget state, urgency tiers and tones
//! - [`presentation`]: [`derive`], snapshot to presentation model
//! - [`view`]: [`render`], presentation model to a [`RenderedView`]
//! - [`action`]: tap actions and their deep links
//! - [`form_factor`]: small, medium and lock screen
//! - [`refresh`]: the adaptive refresh policy
//! - [`message`]: terminal preview input messages
//! - [`dummy`]: sample snapshots
//!
//! # Examples
//!
//! One render pass, from raw store entries to a view and its refresh plan:
//!
//! ```
//! use chrono::Utc;
//! use lulu_widget_protocol::{
//!     derive, keys, render, Entries, FormFactor, RefreshPlan, Snapshot, WidgetAction,
//! };
//! use serde_json::json;
//!
//! let mut entries = Entries::new();
//! entries.insert(keys::STATE.to_string(), json!("ACTIVE"));
//! entries.insert(keys::URGENCY_LEVEL.to_string(), json!("RED"));
//! entries.insert(keys::MINUTES_REMAINING.to_string(), json!(8));
//! entries.insert(keys::NEXT_SWEET_SPOT_TIME.to_string(), json!("14:30"));
//!
//! let snapshot = Snapshot::from_entries(&entries);
//! let view = render(&derive(&snapshot), FormFactor::Small);
//! assert_eq!(view.widget_action(), Some(WidgetAction::LogSleep));
//!
//! let plan = RefreshPlan::after(Utc::now(), snapshot.minutes_remaining);
//! assert_eq!(plan.delay.as_secs(), 300);
//! ```

pub mod action;
pub mod dummy;
pub mod error;
pub mod form_factor;
pub mod keys;
pub mod message;
pub mod presentation;
pub mod refresh;
pub mod snapshot;
pub mod state;
pub mod view;

pub use action::{DEFAULT_SCHEME, WidgetAction};
pub use error::{ProtocolError, Result};
pub use form_factor::FormFactor;
pub use message::Message;
pub use presentation::{ActiveContent, DailySummary, PresentationModel, WidgetContent, derive};
pub use refresh::{RefreshPlan, next_refresh_delay};
pub use snapshot::{Entries, LegacyFields, Snapshot};
pub use state::{NextActionType, Tone, UrgencyLevel, WidgetState};
pub use view::{RenderedView, StatKind, TapRegion, TapTarget, ViewElement, render};
