//! Search and file-type filtering for folder listings.

use crate::fs::entry::FileEntry;
use crate::fs::ops::DirectoryListing;

/// The file-type dropdown next to the search field.
///
/// Every variant except [`FileTypeFilter::All`] accepts a fixed set of
/// extensions. Directories are never filtered by type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FileTypeFilter {
    /// Accept everything.
    #[default]
    All,
    /// `png`, `jpg`, `jpeg`.
    Textures,
    /// `cs`.
    Scripts,
    /// `fbx`, `obj`.
    Models,
    /// `unity`.
    Scenes,
    /// `prefab`.
    Prefabs,
}

impl FileTypeFilter {
    /// All filters in dropdown order.
    pub const ALL: [FileTypeFilter; 6] = [
        FileTypeFilter::All,
        FileTypeFilter::Textures,
        FileTypeFilter::Scripts,
        FileTypeFilter::Models,
        FileTypeFilter::Scenes,
        FileTypeFilter::Prefabs,
    ];

    /// Lowercase extensions accepted by this filter. Empty for `All`.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            FileTypeFilter::All => &[],
            FileTypeFilter::Textures => &["png", "jpg", "jpeg"],
            FileTypeFilter::Scripts => &["cs"],
            FileTypeFilter::Models => &["fbx", "obj"],
            FileTypeFilter::Scenes => &["unity"],
            FileTypeFilter::Prefabs => &["prefab"],
        }
    }

    /// Display label, as shown in the dropdown.
    pub fn label(self) -> &'static str {
        match self {
            FileTypeFilter::All => "All",
            FileTypeFilter::Textures => "Textures",
            FileTypeFilter::Scripts => "Scripts",
            FileTypeFilter::Models => "Models",
            FileTypeFilter::Scenes => "Scenes",
            FileTypeFilter::Prefabs => "Prefabs",
        }
    }

    /// Parses a label case-insensitively (`"scripts"` → `Scripts`).
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.label().to_lowercase() == wanted)
    }

    /// Next filter in dropdown order, wrapping.
    pub fn next(self) -> Self {
        let idx = self.position();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous filter in dropdown order, wrapping.
    pub fn prev(self) -> Self {
        let idx = self.position();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Whether a lowercase extension passes this filter.
    pub fn accepts_extension(self, ext: &str) -> bool {
        match self {
            FileTypeFilter::All => true,
            other => other.extensions().contains(&ext),
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }
}

/// Case-insensitive substring match of `query` against `name`.
///
/// An empty query matches every name.
pub fn matches_query(name: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&query.to_lowercase())
}

/// Decides whether `entry` is shown under the current search and type filter.
///
/// - A non-empty `query` must be a case-insensitive substring of the name.
/// - Files carrying the sidecar suffix are always hidden.
/// - Files must match the type filter's extensions; directories never are
///   type-filtered.
pub fn is_visible(entry: &FileEntry, query: &str, filter: FileTypeFilter) -> bool {
    if !matches_query(entry.name(), query) {
        return false;
    }
    if entry.is_dir() {
        return true;
    }
    if entry.is_sidecar() {
        return false;
    }
    filter.accepts_extension(&entry.extension_lower())
}

/// Applies [`is_visible`] to both halves of a listing. Returns a new listing.
pub fn filter_listing(
    listing: &DirectoryListing,
    query: &str,
    filter: FileTypeFilter,
) -> DirectoryListing {
    let keep = |entries: &[FileEntry]| -> Vec<FileEntry> {
        entries
            .iter()
            .filter(|e| is_visible(e, query, filter))
            .cloned()
            .collect()
    };
    DirectoryListing {
        directories: keep(&listing.directories),
        files: keep(&listing.files),
    }
}
