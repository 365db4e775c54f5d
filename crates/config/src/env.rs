//! Environment variable overrides.
//!
//! Overrides are applied on top of the file configuration and take
//! precedence over it. Empty values are ignored.

use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;

/// Overrides `store.path`.
pub const ENV_STORE: &str = "LULU_WIDGET_STORE";

/// Overrides `deep_links.scheme`.
pub const ENV_SCHEME: &str = "LULU_WIDGET_SCHEME";

/// Overrides `log.filter`.
pub const ENV_LOG: &str = "LULU_WIDGET_LOG";

/// Every variable read by [`apply_env_overrides`].
pub const ALL: &[&str] = &[ENV_STORE, ENV_SCHEME, ENV_LOG];

/// Applies overrides from `lookup`, typically `|var| std::env::var(var).ok()`.
///
/// Taking a lookup function keeps callers from mutating the process
/// environment in tests.
///
/// # Errors
///
/// Returns an error if an overridden value fails validation.
///
/// # Examples
///
/// ```
/// use lulu_widget_config::{Config, env};
///
/// let mut config = Config::default();
/// env::apply_env_overrides(&mut config, |var| {
///     (var == env::ENV_SCHEME).then(|| "lulu-dev".to_string())
/// })
/// .unwrap();
/// assert_eq!(config.deep_links.scheme, "lulu-dev");
/// ```
pub fn apply_env_overrides(
    config: &mut Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<()> {
    let read = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

    if let Some(path) = read(ENV_STORE) {
        config.store.path = Some(PathBuf::from(path));
    }
    if let Some(scheme) = read(ENV_SCHEME) {
        config.deep_links.scheme = scheme.trim().to_string();
        config.deep_links.validate()?;
    }
    if let Some(filter) = read(ENV_LOG) {
        config.log.filter = filter;
    }
    Ok(())
}

/// Applies overrides from the process environment.
///
/// # Errors
///
/// Returns an error if an overridden value fails validation.
pub fn apply_process_env(config: &mut Config) -> Result<()> {
    apply_env_overrides(config, |var| std::env::var(var).ok())
}
