//! Configuration management for lulu-widget.
//!
//! This crate handles loading, validating and persisting configuration from
//! files, environment variables and defaults.
//!
//! # Overview
//!
//! - [`config`]: the [`Config`] struct and loading logic
//! - [`deep_link`]: deep link scheme and its validation
//! - [`preview`]: terminal preview settings
//! - [`log`]: log filter and log file
//! - [`env`]: environment variable overrides
//! - [`persistence`]: config file discovery, reading and writing
//! - [`error`]: error types
//!
//! # Configuration Sources (Priority)
//!
//! 1. Environment variables (`LULU_WIDGET_STORE`, `LULU_WIDGET_SCHEME`,
//!    `LULU_WIDGET_LOG`)
//! 2. Local config (`./lulu-widget.json5` or `./lulu-widget.json`)
//! 3. User config (`<config_dir>/lulu-widget/config.json5` or `config.json`)
//! 4. Built-in defaults
//!
//! ```json5
//! {
//!   store: { path: "~/Library/Group Containers/group.com.lulu.babytracker/prefs.json" },
//!   deep_links: { scheme: "lulu" },
//!   preview: { form_factor: "medium", auto_refresh: true },
//!   log: { filter: "info" },
//! }
//! ```

pub mod config;
pub mod deep_link;
pub mod env;
pub mod error;
pub mod log;
pub mod persistence;
pub mod preview;

pub use config::{Config, StoreConfig};
pub use deep_link::DeepLinkConfig;
pub use error::{ConfigError, Result};
pub use log::LogConfig;
pub use preview::PreviewConfig;
