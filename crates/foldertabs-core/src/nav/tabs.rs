//! The navigation state behind the browser: folder tabs, the folder being
//! shown, back history, favorites and the preview selection.
//!
//! The state is "no tab selected" while the tab list is empty, and "tab
//! selected with a current path" otherwise. Navigation operations are
//! no-ops in the first state.

use std::path::{Path, PathBuf};

use crate::event::Command;
use crate::fs::asset::AssetResolver;
use crate::fs::drop::{accept_dropped_paths, DropOutcome};
use crate::fs::entry::FileEntry;
use crate::nav::favorites::Favorites;
use crate::nav::filter::FileTypeFilter;
use crate::nav::history::History;
use crate::nav::view::FolderView;
use crate::prefs::list::{
    FAVORITES_COUNT_KEY, FAVORITES_ITEM_PREFIX, TABS_COUNT_KEY, TABS_ITEM_PREFIX,
};
use crate::prefs::{read_string_list, write_string_list, PreferenceStore};

/// Tabs, navigation and favorites for one browser panel.
///
/// Immutable: all state transitions consume `self` and return a new
/// `FolderTabs`. The selection index is kept in `0..len` whenever the list
/// is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderTabs {
    tabs: Vec<PathBuf>,
    selected: usize,
    /// `None` until the user navigates; the selected tab's folder is shown.
    current: Option<PathBuf>,
    history: History,
    favorites: Favorites,
    preview: Option<PathBuf>,
}

impl FolderTabs {
    /// Creates an empty state with no tabs and no favorites.
    pub fn new() -> Self {
        Self::default()
    }

    // --- Accessors ---

    /// Folder paths in display order.
    pub fn tabs(&self) -> &[PathBuf] {
        &self.tabs
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// Index of the selected tab, or `None` when there are no tabs.
    pub fn selected_index(&self) -> Option<usize> {
        (self.selected < self.tabs.len()).then_some(self.selected)
    }

    /// Root folder of the selected tab.
    pub fn selected_tab(&self) -> Option<&Path> {
        self.selected_index().map(|i| self.tabs[i].as_path())
    }

    /// Whether a tab is selected.
    pub fn has_selection(&self) -> bool {
        self.selected_index().is_some()
    }

    /// The folder being displayed.
    ///
    /// Falls back to the selected tab's root when no navigation happened.
    pub fn current_path(&self) -> Option<&Path> {
        let root = self.selected_tab()?;
        Some(self.current.as_deref().unwrap_or(root))
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn is_favorite(&self, path: &Path) -> bool {
        self.favorites.contains(path)
    }

    /// Asset shown in the preview pane. Always `None` without a selected tab.
    pub fn preview_path(&self) -> Option<&Path> {
        if !self.has_selection() {
            return None;
        }
        self.preview.as_deref()
    }

    // --- Tabs ---

    /// Appends `path` to the tab list. No deduplication and no existence
    /// check: a folder that vanished shows up as a listing error later.
    pub fn with_folder(self, path: impl Into<PathBuf>) -> Self {
        let mut tabs = self.tabs;
        tabs.push(path.into());
        Self { tabs, ..self }
    }

    /// Removes the tab at `index`. Out-of-range indices are ignored.
    ///
    /// The selection stays on the same tab when another tab is closed. Closing
    /// the selected tab counts as a tab switch: the selection clamps to the
    /// last tab and navigation restarts at its root with no history and no
    /// preview.
    pub fn without_tab(self, index: usize) -> Self {
        if index >= self.tabs.len() {
            return self;
        }
        let closing_selected = self.selected_index() == Some(index);

        let mut tabs = self.tabs;
        tabs.remove(index);

        let mut selected = if self.selected > index {
            self.selected - 1
        } else {
            self.selected
        };
        if selected >= tabs.len() {
            selected = tabs.len().saturating_sub(1);
        }

        if closing_selected {
            tracing::debug!("closed selected tab {index}; {} remain", tabs.len());
            return Self {
                tabs,
                selected,
                current: None,
                history: History::new(),
                preview: None,
                ..self
            };
        }

        Self {
            tabs,
            selected,
            ..self
        }
    }

    /// Switches to the tab at `index`, showing its root folder and clearing
    /// the back history and the preview. Out-of-range indices are ignored.
    pub fn with_selected_tab(self, index: usize) -> Self {
        let Some(root) = self.tabs.get(index).cloned() else {
            return self;
        };
        Self {
            selected: index,
            current: Some(root),
            history: History::new(),
            preview: None,
            ..self
        }
    }

    // --- Navigation ---

    /// Drills into `path`, remembering the current folder for [`with_back`].
    ///
    /// [`with_back`]: FolderTabs::with_back
    pub fn with_entered(self, path: impl Into<PathBuf>) -> Self {
        let Some(current) = self.current_path().map(Path::to_path_buf) else {
            return self;
        };
        Self {
            history: self.history.push(current),
            current: Some(path.into()),
            ..self
        }
    }

    /// Returns to the most recent folder in history. No-op when empty.
    pub fn with_back(self) -> Self {
        match self.history.go_back() {
            Some((history, path)) => Self {
                history,
                current: Some(path),
                ..self
            },
            None => self,
        }
    }

    /// Clicking an entry: directories are entered, files are previewed.
    pub fn with_activated(self, entry: &FileEntry) -> Self {
        if entry.is_dir() {
            self.with_entered(entry.path())
        } else {
            self.with_preview(entry.path())
        }
    }

    // --- Favorites & preview ---

    /// Adds `path` to favorites, or removes it when already present.
    pub fn with_toggled_favorite(self, path: impl Into<PathBuf>) -> Self {
        Self {
            favorites: self.favorites.with_toggled(path),
            ..self
        }
    }

    /// Shows `path` in the preview pane. Ignored without a selected tab.
    pub fn with_preview(self, path: impl Into<PathBuf>) -> Self {
        if !self.has_selection() {
            return self;
        }
        Self {
            preview: Some(path.into()),
            ..self
        }
    }

    pub fn with_cleared_preview(self) -> Self {
        Self {
            preview: None,
            ..self
        }
    }

    // --- Drop ---

    /// Adds every existing directory among `paths` as a tab, in drop order.
    pub fn with_dropped_folders(self, paths: &[PathBuf]) -> (Self, DropOutcome) {
        let outcome = accept_dropped_paths(paths);
        for rejected in &outcome.rejected {
            tracing::debug!("drop ignored, not a folder: {}", rejected.display());
        }
        let state = outcome
            .folders
            .iter()
            .cloned()
            .fold(self, |state, folder| state.with_folder(folder));
        (state, outcome)
    }

    /// Applies a deferred UI intent.
    pub fn apply(self, command: Command) -> Self {
        match command {
            Command::AddFolder(path) => self.with_folder(path),
            Command::RemoveTab(index) => self.without_tab(index),
            Command::SelectTab(index) => self.with_selected_tab(index),
            Command::Enter(path) => self.with_entered(path),
            Command::GoBack => self.with_back(),
            Command::ToggleFavorite(path) => self.with_toggled_favorite(path),
            Command::Preview(path) => self.with_preview(path),
            Command::ClearPreview => self.with_cleared_preview(),
            Command::DropFolders(paths) => self.with_dropped_folders(&paths).0,
        }
    }

    // --- Listing ---

    /// Lists the current folder through `resolver` under the given filters.
    ///
    /// Without a selected tab the view is empty. A folder that cannot be
    /// read yields an empty view carrying the error.
    pub fn list_current<R>(&self, resolver: &R, query: &str, filter: FileTypeFilter) -> FolderView
    where
        R: AssetResolver + ?Sized,
    {
        match self.current_path() {
            Some(path) => FolderView::load(path, resolver, query, filter),
            None => FolderView::empty(),
        }
    }

    // --- Persistence ---

    /// Writes the tab list and favorites to `store` (full overwrite).
    pub fn persist<S>(&self, store: &mut S)
    where
        S: PreferenceStore + ?Sized,
    {
        let tabs: Vec<String> = self.tabs.iter().map(|p| path_to_string(p)).collect();
        let favorites: Vec<String> = self.favorites.iter().map(path_to_string).collect();
        write_string_list(store, TABS_COUNT_KEY, TABS_ITEM_PREFIX, &tabs);
        write_string_list(store, FAVORITES_COUNT_KEY, FAVORITES_ITEM_PREFIX, &favorites);
        tracing::info!(
            "persisted {} tabs and {} favorites",
            tabs.len(),
            favorites.len()
        );
    }

    /// Rebuilds the tab list and favorites from `store`.
    ///
    /// Missing counts restore empty lists; empty entries are skipped. The
    /// first tab, if any, is selected with empty history.
    pub fn restore<S>(store: &S) -> Self
    where
        S: PreferenceStore + ?Sized,
    {
        let tabs: Vec<PathBuf> = read_string_list(store, TABS_COUNT_KEY, TABS_ITEM_PREFIX)
            .into_iter()
            .map(PathBuf::from)
            .collect();
        let favorites = Favorites::from_paths(
            read_string_list(store, FAVORITES_COUNT_KEY, FAVORITES_ITEM_PREFIX)
                .into_iter()
                .map(PathBuf::from),
        );
        tracing::info!(
            "restored {} tabs and {} favorites",
            tabs.len(),
            favorites.len()
        );
        Self {
            tabs,
            favorites,
            ..Self::default()
        }
    }
}

fn path_to_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
