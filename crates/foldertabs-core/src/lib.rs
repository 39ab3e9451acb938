//! FolderTabs core library: UI-agnostic state for a tabbed project browser.
//!
//! `foldertabs-core` owns the tab list, per-tab back history, favorites, the
//! search and type filter, and their persistence. It does not depend on any
//! particular frontend; `foldertabs-tui` renders it in a terminal.
//!
//! # Modules
//!
//! - [`fs`]: File system abstractions: [`FileEntry`], directory listing, asset resolution, drops, previews.
//! - [`nav`]: Navigation logic: [`FolderTabs`], history, favorites, filtering.
//! - [`prefs`]: Key-value [`PreferenceStore`] used to persist tabs and favorites.
//! - [`config`]: User-facing configuration (TOML-based settings and theme).
//! - [`event`]: [`Command`] intents for UI → Core communication.
//! - [`error`]: Unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod config;
pub mod error;
pub mod event;
pub mod fs;
pub mod nav;
pub mod prefs;

pub use error::{CoreError, CoreResult};
pub use event::Command;
pub use fs::entry::FileEntry;
pub use fs::ops::{folder_exists, list_directory, read_directory, DirectoryListing};
pub use fs::{
    accept_dropped_paths, parse_dropped_text, AssetHandle, AssetKind, AssetPreview,
    AssetResolver, DropOutcome, PreviewState, ProjectAssetResolver, Thumbnail,
};
pub use nav::favorites::Favorites;
pub use nav::filter::{filter_listing, is_visible, FileTypeFilter};
pub use nav::history::History;
pub use nav::tabs::FolderTabs;
pub use nav::view::FolderView;
pub use prefs::{FilePreferences, MemoryPreferences, PreferenceStore};

pub use config::settings::{Config, ViewMode};
pub use config::theme::{parse_color, Theme};

/// Normalises a string to NFC (composed) form.
///
/// macOS stores filenames in NFD (decomposed), which splits accented and
/// Hangul characters into separate code points. This helper re-composes them.
pub fn nfc_string(s: &str) -> String {
    use unicode_normalization::UnicodeNormalization;
    s.nfc().collect()
}
