//! Core configuration struct and loading logic.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::deep_link::DeepLinkConfig;
use crate::env::apply_process_env;
use crate::error::Result;
use crate::log::LogConfig;
use crate::persistence::{find_config_file, read_config_file, write_config_file};
use crate::preview::PreviewConfig;

/// Where the widget snapshot store lives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the JSON store file. `None` selects the platform default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// The lulu-widget configuration.
///
/// Every section has defaults, so an empty file is a valid configuration.
///
/// # Examples
///
/// ```
/// use lulu_widget_config::{Config, DeepLinkConfig};
///
/// let config = Config {
///     deep_links: DeepLinkConfig::with_scheme("lulu-dev"),
///     ..Config::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Snapshot store location.
    #[serde(default)]
    pub store: StoreConfig,

    /// Deep link scheme used for tap actions.
    #[serde(default)]
    pub deep_links: DeepLinkConfig,

    /// Terminal preview settings.
    #[serde(default)]
    pub preview: PreviewConfig,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Loads configuration from the default file locations and applies
    /// environment overrides.
    ///
    /// If no configuration file is found, the defaults are used.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be read
    /// or parsed, or if the result fails validation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use lulu_widget_config::Config;
    ///
    /// # fn example() -> lulu_widget_config::Result<()> {
    /// let config = Config::load()?;
    /// println!("Deep links use {}://", config.deep_links.scheme);
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> Result<Self> {
        let mut config = match find_config_file() {
            Some(path) => read_config_file(&path)?,
            None => Self::default(),
        };
        apply_process_env(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a specific file and applies environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// result fails validation.
    pub fn load_with_overrides(path: impl AsRef<Path>) -> Result<Self> {
        let mut config: Self = read_config_file(path)?;
        apply_process_env(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a specific file, without environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if it fails
    /// validation.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Self = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates every section.
    ///
    /// # Errors
    ///
    /// Returns the first section error.
    pub fn validate(&self) -> Result<()> {
        self.deep_links.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use lulu_widget_protocol::FormFactor;
    use tempfile::TempDir;

    #[test]
    fn load_with_overrides_reads_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lulu-widget.json5");
        std::fs::write(&path, "{ preview: { form_factor: 'lock-screen' } }").unwrap();

        let config = Config::load_with_overrides(&path).unwrap();
        assert_eq!(config.preview.form_factor, FormFactor::LockScreen);
    }

    #[test]
    fn load_with_overrides_requires_the_file() {
        let dir = TempDir::new().unwrap();
        assert!(Config::load_with_overrides(dir.path().join("missing.json5")).is_err());
    }

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.deep_links.scheme, "lulu");
        assert_eq!(config.store.path, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_object_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_from_json5() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lulu-widget.json5");
        std::fs::write(
            &path,
            r#"
            {
                store: { path: "/tmp/HomeWidgetPreferences.json" },
                deep_links: { scheme: "lulu-dev" },
                preview: { form_factor: "small", auto_refresh: false },
                log: { filter: "lulu_widget_store=debug" },
            }
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(
            config.store.path,
            Some(PathBuf::from("/tmp/HomeWidgetPreferences.json"))
        );
        assert_eq!(config.deep_links.scheme, "lulu-dev");
        assert_eq!(config.preview.form_factor, FormFactor::Small);
        assert!(!config.preview.auto_refresh);
        assert_eq!(config.log.filter, "lulu_widget_store=debug");
    }

    #[test]
    fn load_from_rejects_invalid_scheme() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lulu-widget.json");
        std::fs::write(&path, r#"{"deep_links": {"scheme": "lulu://"}}"#).unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidScheme { .. }));
    }

    #[test]
    fn load_from_rejects_unknown_form_factor() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lulu-widget.json");
        std::fs::write(&path, r#"{"preview": {"form_factor": "large"}}"#).unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::ParseJson5(_))
        ));
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        let original = Config {
            store: StoreConfig {
                path: Some(PathBuf::from("/var/lulu/prefs.json")),
            },
            deep_links: DeepLinkConfig::with_scheme("lulu-beta"),
            preview: PreviewConfig {
                form_factor: FormFactor::LockScreen,
                auto_refresh: false,
            },
            log: LogConfig {
                filter: "debug".to_string(),
                file: Some(PathBuf::from("/tmp/preview.log")),
            },
        };

        original.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), original);
    }

    #[test]
    fn unset_store_path_is_not_serialized() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert!(json.contains(r#""store":{}"#));
    }
}
