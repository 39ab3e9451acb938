//! Favorite assets.
//!
//! Favorites are individual asset paths, independent of tabs. Membership is
//! toggled rather than counted, and insertion order is kept for display.

use std::path::{Path, PathBuf};

/// An ordered set of favorited asset paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    entries: Vec<PathBuf>,
}

impl Favorites {
    /// Create an empty favorites list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored paths, keeping the first occurrence of duplicates.
    #[must_use]
    pub fn from_paths<I>(paths: I) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut entries: Vec<PathBuf> = Vec::new();
        for path in paths {
            if !entries.contains(&path) {
                entries.push(path);
            }
        }
        Self { entries }
    }

    /// Removes `path` if present, otherwise appends it.
    #[must_use]
    pub fn with_toggled(self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if self.contains(&path) {
            self.without(&path)
        } else {
            let mut entries = self.entries;
            entries.push(path);
            Self { entries }
        }
    }

    /// Return a new `Favorites` with `path` removed.
    #[must_use]
    pub fn without(self, path: &Path) -> Self {
        let entries = self.entries.into_iter().filter(|p| p != path).collect();
        Self { entries }
    }

    /// Returns `true` if `path` is a favorite.
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.entries.iter().any(|p| p == path)
    }

    /// Favorite at display position `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Path> {
        self.entries.get(index).map(PathBuf::as_path)
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(PathBuf::as_path)
    }

    /// Number of favorites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
