//! Application configuration loaded from a TOML file.
//!
//! Every field has a default, so FolderTabs runs without a config file and a
//! partial file only overrides what it names.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::nav::filter::FileTypeFilter;

/// Top-level application configuration.
///
/// Call [`Config::load`] to read from a TOML path, or
/// [`Config::load_or_default`] at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub preview: PreviewConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::from_io(path, e))?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }

    /// Loads `path`, falling back to defaults when it is missing or broken.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(CoreError::NotFound(_)) => Self::default(),
            Err(e) => {
                tracing::warn!("ignoring config {}: {e}", path.display());
                Self::default()
            }
        }
    }
}

/// How the listing pane lays out entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// A grid of large icons with names underneath.
    #[default]
    Icon,
    /// One row per entry with type and size columns.
    List,
}

impl ViewMode {
    pub fn toggle(self) -> Self {
        match self {
            Self::Icon => Self::List,
            Self::List => Self::Icon,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Icon => "Icon View",
            Self::List => "List View",
        }
    }
}

/// Startup browsing preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default)]
    pub default_view: ViewMode,
    #[serde(default = "default_filter")]
    pub default_filter: String,
    /// Restricts asset resolution to this directory when set.
    #[serde(default)]
    pub project_root: Option<PathBuf>,
}

impl GeneralConfig {
    /// The configured filter, or [`FileTypeFilter::All`] for unknown names.
    pub fn filter(&self) -> FileTypeFilter {
        FileTypeFilter::from_name(&self.default_filter).unwrap_or_else(|| {
            tracing::warn!("unknown default_filter {:?}", self.default_filter);
            FileTypeFilter::All
        })
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_view: ViewMode::default(),
            default_filter: default_filter(),
            project_root: None,
        }
    }
}

/// Preview pane configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_lines: default_max_lines(),
        }
    }
}

/// UI layout and display preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Share of the width given to the preview pane.
    #[serde(default = "default_preview_ratio")]
    pub preview_ratio: f64,
    #[serde(default = "default_true")]
    pub show_icons: bool,
    /// Width of one cell in the icon grid.
    #[serde(default = "default_icon_width")]
    pub icon_width: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            preview_ratio: default_preview_ratio(),
            show_icons: true,
            icon_width: default_icon_width(),
        }
    }
}

/// Where persisted tabs and favorites live.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Overrides the default preference file location.
    #[serde(default)]
    pub preferences_file: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

fn default_filter() -> String {
    "all".to_string()
}

fn default_max_lines() -> usize {
    40
}

fn default_preview_ratio() -> f64 {
    0.3
}

fn default_icon_width() -> u16 {
    14
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_config_general() {
        let config = Config::default();

        assert_eq!(config.general.default_view, ViewMode::Icon);
        assert_eq!(config.general.default_filter, "all");
        assert_eq!(config.general.filter(), FileTypeFilter::All);
        assert!(config.general.project_root.is_none());
    }

    #[test]
    fn default_config_preview() {
        let config = Config::default();

        assert!(config.preview.enabled);
        assert_eq!(config.preview.max_lines, 40);
    }

    #[test]
    fn default_config_ui() {
        let config = Config::default();

        assert!((config.ui.preview_ratio - 0.3).abs() < f64::EPSILON);
        assert!(config.ui.show_icons);
        assert_eq!(config.ui.icon_width, 14);
    }

    #[test]
    fn load_full_toml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            r#"
[general]
default_view = "list"
default_filter = "scripts"
project_root = "/proj/Assets"

[preview]
enabled = false
max_lines = 12

[ui]
preview_ratio = 0.5
show_icons = false
icon_width = 20

[storage]
preferences_file = "/tmp/prefs.toml"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.general.default_view, ViewMode::List);
        assert_eq!(config.general.filter(), FileTypeFilter::Scripts);
        assert_eq!(
            config.general.project_root.as_deref(),
            Some(Path::new("/proj/Assets"))
        );

        assert!(!config.preview.enabled);
        assert_eq!(config.preview.max_lines, 12);

        assert!((config.ui.preview_ratio - 0.5).abs() < f64::EPSILON);
        assert!(!config.ui.show_icons);
        assert_eq!(config.ui.icon_width, 20);

        assert_eq!(
            config.storage.preferences_file.as_deref(),
            Some(Path::new("/tmp/prefs.toml"))
        );
    }

    #[test]
    fn load_partial_toml_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            r#"
[general]
default_view = "list"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.general.default_view, ViewMode::List);
        assert_eq!(config.general.default_filter, "all");
        assert!(config.preview.enabled);
        assert!(config.storage.preferences_file.is_none());
    }

    #[test]
    fn load_empty_toml_uses_all_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "").unwrap();

        let config = Config::load(&path).unwrap();
        let default = Config::default();

        assert_eq!(config.general.default_view, default.general.default_view);
        assert_eq!(config.preview.max_lines, default.preview.max_lines);
        assert!((config.ui.preview_ratio - default.ui.preview_ratio).abs() < f64::EPSILON);
    }

    #[test]
    fn load_nonexistent_returns_not_found() {
        let tmp = TempDir::new().unwrap();
        let result = Config::load(&tmp.path().join("nonexistent.toml"));
        assert!(matches!(result.unwrap_err(), CoreError::NotFound(_)));
    }

    #[test]
    fn load_invalid_toml_returns_config_parse() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "this is not valid [[[toml").unwrap();

        let result = Config::load(&path);
        assert!(matches!(result.unwrap_err(), CoreError::ConfigParse(_)));
    }

    #[test]
    fn load_or_default_survives_bad_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[ui]\npreview_ratio = \"wide\"").unwrap();

        let config = Config::load_or_default(&path);
        assert!((config.ui.preview_ratio - 0.3).abs() < f64::EPSILON);

        let missing = Config::load_or_default(&tmp.path().join("missing.toml"));
        assert_eq!(missing.preview.max_lines, 40);
    }

    #[test]
    fn unknown_filter_name_falls_back_to_all() {
        let general = GeneralConfig {
            default_filter: "sounds".to_string(),
            ..GeneralConfig::default()
        };
        assert_eq!(general.filter(), FileTypeFilter::All);
    }

    #[test]
    fn view_mode_toggles() {
        assert_eq!(ViewMode::Icon.toggle(), ViewMode::List);
        assert_eq!(ViewMode::List.toggle(), ViewMode::Icon);
        assert_eq!(ViewMode::List.label(), "List View");
    }
}
