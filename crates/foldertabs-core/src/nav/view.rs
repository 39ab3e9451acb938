//! A filtered, resolved snapshot of one folder, ready to render.

use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::fs::asset::AssetResolver;
use crate::fs::entry::FileEntry;
use crate::fs::ops::{list_directory, DirectoryListing};
use crate::nav::filter::{filter_listing, FileTypeFilter};

/// Visible entries of a folder plus any error hit while listing it.
///
/// A failed listing is not fatal: the view is empty and [`FolderView::error`]
/// says why, so the frontend can show an indicator and keep running.
#[derive(Debug, Default)]
pub struct FolderView {
    path: Option<PathBuf>,
    listing: DirectoryListing,
    error: Option<CoreError>,
}

impl FolderView {
    /// A view of nothing (no tab selected).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Lists `path`, applies the search and type filter, and drops every
    /// entry `resolver` cannot turn into an asset.
    pub fn load<R>(path: &Path, resolver: &R, query: &str, filter: FileTypeFilter) -> Self
    where
        R: AssetResolver + ?Sized,
    {
        let listing = match list_directory(path) {
            Ok(listing) => listing,
            Err(e) => {
                tracing::warn!("cannot list {}: {e}", path.display());
                return Self {
                    path: Some(path.to_path_buf()),
                    listing: DirectoryListing::default(),
                    error: Some(e),
                };
            }
        };

        let filtered = filter_listing(&listing, query, filter);
        let keep_resolved = |entries: Vec<FileEntry>| -> Vec<FileEntry> {
            entries
                .into_iter()
                .filter(|e| match resolver.resolve(e.path()) {
                    Ok(_) => true,
                    Err(err) => {
                        tracing::debug!("skipping entry: {err}");
                        false
                    }
                })
                .collect()
        };

        Self {
            path: Some(path.to_path_buf()),
            listing: DirectoryListing {
                directories: keep_resolved(filtered.directories),
                files: keep_resolved(filtered.files),
            },
            error: None,
        }
    }

    /// The folder this view shows, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn listing(&self) -> &DirectoryListing {
        &self.listing
    }

    pub fn directories(&self) -> &[FileEntry] {
        &self.listing.directories
    }

    pub fn files(&self) -> &[FileEntry] {
        &self.listing.files
    }

    /// Entry at a combined (directories-then-files) index.
    pub fn get(&self, index: usize) -> Option<&FileEntry> {
        self.listing.get(index)
    }

    pub fn len(&self) -> usize {
        self.listing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listing.is_empty()
    }

    /// Why the listing failed, if it did.
    pub fn error(&self) -> Option<&CoreError> {
        self.error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::asset::ProjectAssetResolver;
    use crate::nav::tabs::FolderTabs;
    use std::fs;
    use tempfile::TempDir;

    fn project() -> TempDir {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("Scripts")).unwrap();
        fs::create_dir(tmp.path().join("Textures")).unwrap();
        fs::write(tmp.path().join("Player.cs"), "class Player {}").unwrap();
        fs::write(tmp.path().join("Player.cs.meta"), "guid: 1").unwrap();
        fs::write(tmp.path().join("grass.png"), "").unwrap();
        fs::write(tmp.path().join(".DS_Store"), "").unwrap();
        tmp
    }

    fn names(entries: &[FileEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name()).collect()
    }

    #[test]
    fn load_lists_resolvable_entries() {
        let tmp = project();
        let view = FolderView::load(
            tmp.path(),
            &ProjectAssetResolver::new(),
            "",
            FileTypeFilter::All,
        );

        assert!(view.error().is_none());
        assert_eq!(names(view.directories()), vec!["Scripts", "Textures"]);
        assert_eq!(names(view.files()), vec!["grass.png", "Player.cs"]);
        assert_eq!(view.len(), 4);
        assert_eq!(view.path(), Some(tmp.path()));
    }

    #[test]
    fn load_applies_type_filter_to_files_only() {
        let tmp = project();
        let view = FolderView::load(
            tmp.path(),
            &ProjectAssetResolver::new(),
            "",
            FileTypeFilter::Scripts,
        );

        assert_eq!(names(view.directories()), vec!["Scripts", "Textures"]);
        assert_eq!(names(view.files()), vec!["Player.cs"]);
    }

    #[test]
    fn load_applies_search_query() {
        let tmp = project();
        let view = FolderView::load(
            tmp.path(),
            &ProjectAssetResolver::new(),
            "TEX",
            FileTypeFilter::All,
        );

        assert_eq!(names(view.directories()), vec!["Textures"]);
        assert!(view.files().is_empty());
    }

    #[test]
    fn missing_folder_yields_empty_view_with_error() {
        let tmp = TempDir::new().unwrap();
        let gone = tmp.path().join("Renamed");

        let view = FolderView::load(&gone, &ProjectAssetResolver::new(), "", FileTypeFilter::All);

        assert!(view.is_empty());
        assert!(matches!(view.error(), Some(CoreError::NotFound(_))));
    }

    #[test]
    fn list_current_without_selection_is_empty() {
        let view = FolderTabs::new().list_current(&ProjectAssetResolver::new(), "", FileTypeFilter::All);
        assert!(view.is_empty());
        assert!(view.path().is_none());
        assert!(view.error().is_none());
    }

    #[test]
    fn list_current_follows_navigation() {
        let tmp = project();
        fs::write(tmp.path().join("Scripts").join("Enemy.cs"), "").unwrap();

        let state = FolderTabs::new()
            .with_folder(tmp.path())
            .with_entered(tmp.path().join("Scripts"));
        let view = state.list_current(&ProjectAssetResolver::new(), "", FileTypeFilter::All);

        assert_eq!(names(view.files()), vec!["Enemy.cs"]);
        assert_eq!(view.get(0).map(|e| e.name()), Some("Enemy.cs"));
    }
}
