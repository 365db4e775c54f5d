//! Logging settings.
//!
//! The filter uses `tracing-subscriber`'s `EnvFilter` directive syntax, e.g.
//! `info` or `lulu_widget_store=debug,warn`. The binary validates the
//! directive itself when it installs the subscriber.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::persistence::APP_DIR_NAME;

/// Default filter directive.
pub const DEFAULT_FILTER: &str = "info";

/// File the preview logs to when no `file` is configured.
pub const DEFAULT_LOG_FILE_NAME: &str = "preview.log";

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directive.
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Log file for the interactive preview, which cannot log to the
    /// terminal it draws on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_filter() -> String {
    DEFAULT_FILTER.to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            file: None,
        }
    }
}

impl LogConfig {
    /// Returns the preview log file: the configured one, or
    /// `<data_local_dir>/lulu-widget/preview.log`.
    #[must_use]
    pub fn file_path(&self) -> Option<PathBuf> {
        self.file.clone().or_else(|| {
            dirs::data_local_dir().map(|dir| dir.join(APP_DIR_NAME).join(DEFAULT_LOG_FILE_NAME))
        })
    }

    /// Checks that the filter is not blank.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyLogFilter`] for a blank filter.
    pub fn validate(&self) -> Result<()> {
        if self.filter.trim().is_empty() {
            return Err(ConfigError::EmptyLogFilter);
        }
        Ok(())
    }
}
