//! Config file discovery, reading and writing.
//!
//! Files are parsed with `serde_json5`, which also accepts plain JSON, and
//! written back as pretty-printed JSON.
//!
//! # File Locations
//!
//! Configuration is searched in the following order:
//!
//! 1. Working directory: `./lulu-widget.json5`, then `./lulu-widget.json`
//! 2. User: `<config_dir>/lulu-widget/config.json5`, then `config.json`

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// File names looked up in the working directory, in priority order.
const LOCAL_FILE_NAMES: &[&str] = &["lulu-widget.json5", "lulu-widget.json"];

/// Application directory under the platform config directory.
pub const APP_DIR_NAME: &str = "lulu-widget";

/// File names looked up in the user config directory, in priority order.
const USER_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Finds the configuration file in the working directory or the user
/// config directory.
///
/// # Examples
///
/// ```no_run
/// use lulu_widget_config::persistence::find_config_file;
///
/// if let Some(path) = find_config_file() {
///     println!("Found config at: {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    let user_dir = dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME));
    find_config_file_in(Path::new("."), user_dir.as_deref())
}

/// Finds the configuration file, searching `local_dir` before `user_dir`.
///
/// Returns `None` when neither directory holds a config file.
#[must_use]
pub fn find_config_file_in(local_dir: &Path, user_dir: Option<&Path>) -> Option<PathBuf> {
    let local = LOCAL_FILE_NAMES.iter().map(|name| local_dir.join(name));
    let user = user_dir
        .into_iter()
        .flat_map(|dir| USER_FILE_NAMES.iter().map(move |name| dir.join(name)));

    local.chain(user).find(|path| path.is_file())
}

/// Returns the user configuration directory, `<config_dir>/lulu-widget`.
///
/// # Errors
///
/// Returns an error if the platform has no configuration directory.
pub fn user_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or(ConfigError::NoConfigDirectory)
}

/// Returns the path new user configuration is saved to.
///
/// # Errors
///
/// Returns an error if the platform has no configuration directory.
pub fn default_user_config_path() -> Result<PathBuf> {
    Ok(user_config_dir()?.join(USER_FILE_NAMES[0]))
}

/// Reads and parses a JSON5 or JSON configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Examples
///
/// ```no_run
/// use lulu_widget_config::persistence::read_config_file;
/// use lulu_widget_config::Config;
///
/// # fn main() -> lulu_widget_config::Result<()> {
/// let config: Config = read_config_file("lulu-widget.json5")?;
/// # Ok(())
/// # }
/// ```
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json5::from_str(&content).map_err(ConfigError::from)
}

/// Writes `config` as pretty-printed JSON, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, config: &T) -> Result<()> {
    let path = path.as_ref();
    let write_error = |source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }

    let mut content = serde_json::to_string_pretty(config)?;
    content.push('\n');
    std::fs::write(path, content).map_err(write_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        scheme: String,
        minutes: i32,
    }

    #[test]
    fn read_json5_with_comments() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sample.json5");
        std::fs::write(
            &path,
            r#"
            {
                // deep link scheme
                scheme: "lulu",
                minutes: 15,
            }
            "#,
        )
        .unwrap();

        let sample: Sample = read_config_file(&path).unwrap();
        assert_eq!(
            sample,
            Sample {
                scheme: "lulu".to_string(),
                minutes: 15
            }
        );
    }

    #[test]
    fn read_missing_file_reports_path() {
        let err = read_config_file::<Sample>("/nonexistent/lulu-widget.json").unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
        assert!(err.to_string().contains("/nonexistent/lulu-widget.json"));
    }

    #[test]
    fn read_garbage_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "scheme = lulu").unwrap();

        let err = read_config_file::<Sample>(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseJson5(_)));
    }

    #[test]
    fn write_creates_parents_and_roundtrips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let sample = Sample {
            scheme: "lulu-dev".to_string(),
            minutes: 5,
        };

        write_config_file(&path, &sample).unwrap();
        assert_eq!(read_config_file::<Sample>(&path).unwrap(), sample);
        assert!(std::fs::read_to_string(&path).unwrap().ends_with("}\n"));
    }

    #[test]
    fn local_file_wins_over_user_file() {
        let local = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        std::fs::write(user.path().join("config.json5"), "{}").unwrap();

        assert_eq!(
            find_config_file_in(local.path(), Some(user.path())),
            Some(user.path().join("config.json5"))
        );

        std::fs::write(local.path().join("lulu-widget.json"), "{}").unwrap();
        assert_eq!(
            find_config_file_in(local.path(), Some(user.path())),
            Some(local.path().join("lulu-widget.json"))
        );
    }

    #[test]
    fn json5_is_preferred_over_json() {
        let local = TempDir::new().unwrap();
        std::fs::write(local.path().join("lulu-widget.json"), "{}").unwrap();
        std::fs::write(local.path().join("lulu-widget.json5"), "{}").unwrap();

        assert_eq!(
            find_config_file_in(local.path(), None),
            Some(local.path().join("lulu-widget.json5"))
        );
    }

    #[test]
    fn nothing_found_in_empty_dirs() {
        let local = TempDir::new().unwrap();
        assert_eq!(find_config_file_in(local.path(), None), None);
    }
}
