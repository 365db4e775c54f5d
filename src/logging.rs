//! Logging setup for the command line.
//!
//! One-shot commands log to stderr so stdout stays clean for their output.
//! The preview owns the terminal, so it logs to a file instead.

use std::{
    fs::{self, OpenOptions},
    path::{Path, PathBuf},
};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Errors that may occur while initializing logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The configured filter directives do not parse.
    #[error("invalid log filter {filter:?}: {source}")]
    Filter {
        filter: String,
        source: tracing_subscriber::filter::ParseError,
    },
    /// No log file location is configured and none could be derived.
    #[error("no log file location available; set log.file in the configuration")]
    NoLogFile,
    /// Failed to create the log directory.
    #[error("failed to prepare log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to create the log file.
    #[error("failed to create log file at {path}: {source}")]
    CreateLogFile {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to set the global tracing subscriber.
    #[error("failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] tracing_subscriber::util::TryInitError),
}

/// Installs a subscriber writing to stderr.
pub fn init_stderr(filter: &str) -> Result<(), LoggingError> {
    let layer = fmt::layer().with_writer(std::io::stderr).with_target(false);
    tracing_subscriber::registry()
        .with(build_env_filter(filter)?)
        .with(layer)
        .try_init()?;
    Ok(())
}

/// Installs a subscriber appending to `path`.
///
/// The returned guard flushes buffered lines when dropped; keep it alive
/// until the preview exits.
pub fn init_file(filter: &str, path: Option<&Path>) -> Result<WorkerGuard, LoggingError> {
    let path = path.ok_or(LoggingError::NoLogFile)?;
    let (directory, file_name) = split_log_path(path)?;
    fs::create_dir_all(&directory).map_err(|source| LoggingError::CreateDir {
        path: directory.clone(),
        source,
    })?;
    ensure_file_exists(path)?;

    let appender = tracing_appender::rolling::never(&directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let layer = fmt::layer().with_ansi(false).with_writer(writer);
    tracing_subscriber::registry()
        .with(build_env_filter(filter)?)
        .with(layer)
        .try_init()?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(guard)
}

fn build_env_filter(filter: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(filter).map_err(|source| LoggingError::Filter {
        filter: filter.to_string(),
        source,
    })
}

fn split_log_path(path: &Path) -> Result<(PathBuf, std::ffi::OsString), LoggingError> {
    let file_name = path.file_name().ok_or(LoggingError::NoLogFile)?;
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((directory, file_name.to_os_string()))
}

fn ensure_file_exists(path: &Path) -> Result<(), LoggingError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(|_| ())
        .map_err(|source| LoggingError::CreateLogFile {
            path: path.to_path_buf(),
            source,
        })
}
