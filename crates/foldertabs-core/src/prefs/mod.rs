//! Key-value preference storage.
//!
//! The state manager never talks to a global store: a [`PreferenceStore`]
//! is passed explicitly to `persist`/`restore`. [`MemoryPreferences`] backs
//! tests; [`FilePreferences`] keeps the values in a flat TOML table on disk.

pub mod list;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

pub use list::{read_string_list, write_string_list};

/// Get/set of string and integer values by key, with defaults when absent.
///
/// Reading a key that holds a value of the other type yields the default.
pub trait PreferenceStore {
    fn get_int(&self, key: &str, default: i64) -> i64;
    fn set_int(&mut self, key: &str, value: i64);
    fn get_string(&self, key: &str, default: &str) -> String;
    fn set_string(&mut self, key: &str, value: &str);
}

/// A single stored preference value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefValue {
    Int(i64),
    Str(String),
}

/// In-process preference map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryPreferences {
    #[serde(flatten)]
    values: BTreeMap<String, PrefValue>,
}

impl MemoryPreferences {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `true` if `key` holds any value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get_int(&self, key: &str, default: i64) -> i64 {
        match self.values.get(key) {
            Some(PrefValue::Int(v)) => *v,
            _ => default,
        }
    }

    fn set_int(&mut self, key: &str, value: i64) {
        self.values.insert(key.to_owned(), PrefValue::Int(value));
    }

    fn get_string(&self, key: &str, default: &str) -> String {
        match self.values.get(key) {
            Some(PrefValue::Str(v)) => v.clone(),
            _ => default.to_owned(),
        }
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.values
            .insert(key.to_owned(), PrefValue::Str(value.to_owned()));
    }
}

/// Preferences persisted as a TOML file.
///
/// Values live in memory until [`FilePreferences::save`] is called.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
    values: MemoryPreferences,
}

impl FilePreferences {
    /// Loads preferences from `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::from_io(path, e))?;
        let values: MemoryPreferences =
            toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))?;
        Ok(Self {
            path: path.to_path_buf(),
            values,
        })
    }

    /// Loads preferences from `path`, starting empty on any failure.
    ///
    /// A missing file is the normal first-run case and is not logged.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(prefs) => prefs,
            Err(CoreError::NotFound(_)) => Self::empty(path),
            Err(e) => {
                tracing::warn!("ignoring unreadable preferences at {}: {e}", path.display());
                Self::empty(path)
            }
        }
    }

    /// An empty store that will be written to `path`.
    pub fn empty(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            values: MemoryPreferences::new(),
        }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes all values to the backing file, creating parent directories.
    pub fn save(&self) -> CoreResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(&self.values)
            .map_err(|e| CoreError::ConfigParse(e.to_string()))?;
        std::fs::write(&self.path, content)?;
        tracing::debug!("saved {} preference keys to {}", self.values.len(), self.path.display());
        Ok(())
    }
}

impl PreferenceStore for FilePreferences {
    fn get_int(&self, key: &str, default: i64) -> i64 {
        self.values.get_int(key, default)
    }

    fn set_int(&mut self, key: &str, value: i64) {
        self.values.set_int(key, value);
    }

    fn get_string(&self, key: &str, default: &str) -> String {
        self.values.get_string(key, default)
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.values.set_string(key, value);
    }
}
