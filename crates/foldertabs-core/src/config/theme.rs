//! Theme configuration for FolderTabs.
//!
//! Colors are stored as strings (e.g. `"blue"`, `"#ff5500"`) and converted
//! to [`ratatui::style::Color`] at render time via [`parse_color`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Complete theme configuration with per-component color groups.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub tabs: TabsTheme,
    #[serde(default)]
    pub listing: ListingTheme,
    #[serde(default)]
    pub favorites: FavoritesTheme,
    #[serde(default)]
    pub preview: PreviewTheme,
    #[serde(default)]
    pub statusbar: StatusBarTheme,
    #[serde(default)]
    pub popup: PopupTheme,
}

impl Theme {
    /// Loads a theme from a TOML file at `path`.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::from_io(path, e))?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }

    /// Loads `path`, or the default theme when it is missing or broken.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(theme) => theme,
            Err(CoreError::NotFound(_)) => Self::default(),
            Err(e) => {
                tracing::warn!("ignoring theme {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Saves the theme to a TOML file at `path`.
    pub fn save(&self, path: &Path) -> CoreResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| CoreError::ConfigParse(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Tab strip colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabsTheme {
    pub active_fg: String,
    pub active_bg: String,
    pub inactive_fg: String,
    pub missing_fg: String,
}

impl Default for TabsTheme {
    fn default() -> Self {
        Self {
            active_fg: "black".to_string(),
            active_bg: "cyan".to_string(),
            inactive_fg: "gray".to_string(),
            missing_fg: "red".to_string(),
        }
    }
}

/// Folder content colors, shared by the list and icon views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingTheme {
    pub header_fg: String,
    pub dir_fg: String,
    pub file_fg: String,
    pub selected_fg: String,
    pub favorite_fg: String,
    pub error_fg: String,
    pub hint_fg: String,
}

impl Default for ListingTheme {
    fn default() -> Self {
        Self {
            header_fg: "cyan".to_string(),
            dir_fg: "blue".to_string(),
            file_fg: "white".to_string(),
            selected_fg: "yellow".to_string(),
            favorite_fg: "yellow".to_string(),
            error_fg: "red".to_string(),
            hint_fg: "dark_gray".to_string(),
        }
    }
}

/// Favorites list colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoritesTheme {
    pub border_fg: String,
    pub entry_fg: String,
    pub missing_fg: String,
}

impl Default for FavoritesTheme {
    fn default() -> Self {
        Self {
            border_fg: "yellow".to_string(),
            entry_fg: "white".to_string(),
            missing_fg: "dark_gray".to_string(),
        }
    }
}

/// Preview panel colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewTheme {
    pub border_fg: String,
    pub line_number_fg: String,
    pub title_fg: String,
    pub error_fg: String,
    pub truncation_fg: String,
}

impl Default for PreviewTheme {
    fn default() -> Self {
        Self {
            border_fg: "dark_gray".to_string(),
            line_number_fg: "dark_gray".to_string(),
            title_fg: "blue".to_string(),
            error_fg: "red".to_string(),
            truncation_fg: "yellow".to_string(),
        }
    }
}

/// Status bar colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusBarTheme {
    pub bg: String,
    pub position_fg: String,
    pub filter_fg: String,
    pub message_fg: String,
}

impl Default for StatusBarTheme {
    fn default() -> Self {
        Self {
            bg: "white".to_string(),
            position_fg: "black".to_string(),
            filter_fg: "blue".to_string(),
            message_fg: "magenta".to_string(),
        }
    }
}

/// Popup/dialog colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopupTheme {
    pub border_fg: String,
}

impl Default for PopupTheme {
    fn default() -> Self {
        Self {
            border_fg: "yellow".to_string(),
        }
    }
}

/// Parses a color string into a `ratatui::style::Color`.
///
/// Supports named colors (`"blue"`, `"dark_gray"`) and hex (`"#rrggbb"`).
/// Returns `Color::Reset` for unrecognised values.
pub fn parse_color(s: &str) -> ratatui::style::Color {
    use ratatui::style::Color;

    match s.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "dark_gray" | "dark_grey" | "darkgray" | "darkgrey" => Color::DarkGray,
        "light_red" | "lightred" => Color::LightRed,
        "light_green" | "lightgreen" => Color::LightGreen,
        "light_yellow" | "lightyellow" => Color::LightYellow,
        "light_blue" | "lightblue" => Color::LightBlue,
        "light_magenta" | "lightmagenta" => Color::LightMagenta,
        "light_cyan" | "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        "reset" => Color::Reset,
        hex if hex.starts_with('#') && hex.len() == 7 => {
            let r = u8::from_str_radix(&hex[1..3], 16).unwrap_or(0);
            let g = u8::from_str_radix(&hex[3..5], 16).unwrap_or(0);
            let b = u8::from_str_radix(&hex[5..7], 16).unwrap_or(0);
            Color::Rgb(r, g, b)
        }
        _ => Color::Reset,
    }
}
