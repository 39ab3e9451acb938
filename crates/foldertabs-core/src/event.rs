//! Commands from the UI to the navigation state.
//!
//! A renderer walking the tab strip or the favorites list must not mutate
//! them mid-iteration. It records a [`Command`] instead, and the frontend
//! applies it with [`crate::FolderTabs::apply`] once the walk is over.

use std::path::PathBuf;

/// An intent the UI asks the navigation state to carry out.
///
/// Commands flow **UI → Core**. The core never creates commands itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append a folder to the tab list.
    AddFolder(PathBuf),
    /// Close the tab at the given index.
    RemoveTab(usize),
    /// Switch to the tab at the given index.
    SelectTab(usize),
    /// Drill into a subfolder of the current path.
    Enter(PathBuf),
    /// Return to the previously visited folder.
    GoBack,
    /// Add or remove an asset from favorites.
    ToggleFavorite(PathBuf),
    /// Show an asset in the preview pane.
    Preview(PathBuf),
    /// Empty the preview pane.
    ClearPreview,
    /// Add every existing directory among the dropped paths as a tab.
    DropFolders(Vec<PathBuf>),
}
