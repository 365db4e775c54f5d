//! A JSON file standing in for the platform key-value store.
//!
//! The file holds one JSON object whose keys are the wire keys, exactly
//! what the app would put in its shared preferences:
//!
//! ```json
//! {
//!   "widget_state": "ACTIVE",
//!   "widget_urgency_level": "RED",
//!   "widget_minutes_remaining": 8,
//!   "widget_next_sweet_spot_time": "14:30"
//! }
//! ```
//!
//! # Default Location
//!
//! ```text
//! ~/.local/share/lulu-widget/HomeWidgetPreferences.json            # Linux
//! ~/Library/Application Support/lulu-widget/HomeWidgetPreferences.json  # macOS
//! ```

use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use lulu_widget_protocol::Entries;
use lulu_widget_protocol::keys::ANDROID_PREFS_NAME;
use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::{debug, instrument, warn};

use crate::error::{Result, StoreError};
use crate::kv::KeyValueStore;

/// Application directory under the platform data directory.
const APP_DIR_NAME: &str = "lulu-widget";

/// Returns the default store file path.
///
/// # Errors
///
/// Returns an error if the platform has no data directory.
pub fn default_store_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or(StoreError::NoDataDirectory)?;
    Ok(data_dir
        .join(APP_DIR_NAME)
        .join(format!("{ANDROID_PREFS_NAME}.json")))
}

/// A store backed by one JSON object file.
///
/// Writes go to a temporary file in the same directory that is then renamed
/// over the store, so readers never observe a partial write.
///
/// # Examples
///
/// ```no_run
/// use lulu_widget_store::{JsonFileStore, KeyValueStore};
///
/// # fn example() -> lulu_widget_store::Result<()> {
/// let store = JsonFileStore::at_default_location()?;
/// if let Some(entries) = store.load_all()? {
///     println!("{} keys published", entries.len());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by `path`. The file need not exist yet.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store at [`default_store_path`].
    ///
    /// # Errors
    ///
    /// Returns an error if the platform has no data directory.
    pub fn at_default_location() -> Result<Self> {
        default_store_path().map(Self::new)
    }

    /// Returns the store file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl KeyValueStore for JsonFileStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load_all(&self) -> Result<Option<Entries>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("store file not found");
                return Ok(None);
            }
            Err(e) => {
                warn!(error = %e, "failed to read store file");
                return Err(self.io_error(e));
            }
        };

        match serde_json::from_str(&content) {
            Ok(Value::Object(entries)) => {
                debug!(keys = entries.len(), "loaded store entries");
                Ok(Some(entries))
            }
            Ok(_) => Err(StoreError::NotAnObject {
                path: self.path.clone(),
            }),
            Err(source) => Err(StoreError::Parse {
                path: self.path.clone(),
                source,
            }),
        }
    }

    #[instrument(skip(self, entries), fields(path = %self.path.display(), keys = entries.len()))]
    fn replace_all(&self, entries: &Entries) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;

        let content = serde_json::to_vec_pretty(entries)?;
        let mut staged = NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        staged.write_all(&content).map_err(|e| self.io_error(e))?;
        staged.as_file().sync_all().map_err(|e| self.io_error(e))?;
        staged
            .persist(&self.path)
            .map_err(|e| self.io_error(e.error))?;

        debug!("store replaced");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn entries(value: Value) -> Entries {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("prefs.json"));
        assert_eq!(store.load_all().unwrap(), None);
    }

    #[test]
    fn replace_then_load() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("prefs.json"));
        let written = entries(json!({"widget_state": "URGENT", "widget_total_diaper_count": 4}));

        store.replace_all(&written).unwrap();
        assert_eq!(store.load_all().unwrap(), Some(written));
    }

    #[test]
    fn replace_leaves_no_temporary_files() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("prefs.json"));

        store.replace_all(&Entries::new()).unwrap();
        store.replace_all(&Entries::new()).unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("prefs.json")]);
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{ widget_state: ").unwrap();

        let err = JsonFileStore::new(&path).load_all().unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
    }

    #[test]
    fn non_object_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"["widget_state", "ACTIVE"]"#).unwrap();

        let err = JsonFileStore::new(&path).load_all().unwrap_err();
        assert!(matches!(err, StoreError::NotAnObject { .. }));
    }

    #[test]
    fn default_path_uses_prefs_name() {
        if dirs::data_dir().is_some() {
            let path = default_store_path().unwrap();
            assert!(path.ends_with("lulu-widget/HomeWidgetPreferences.json"));
        }
    }
}
