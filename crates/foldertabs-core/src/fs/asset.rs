//! Asset resolution: from a filesystem path to a typed, displayable handle.
//!
//! The browser only shows entries that resolve to an asset. Anything the
//! resolver rejects is silently left out of the listing.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::{extension_lower, is_sidecar_name};
use crate::nav::filter::FileTypeFilter;

/// Broad asset category, derived from the extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Folder,
    Texture,
    Script,
    Model,
    Scene,
    Prefab,
    Other,
}

impl AssetKind {
    /// Classifies a file by its lowercase extension.
    pub fn from_extension(ext: &str) -> Self {
        let kinds = [
            (FileTypeFilter::Textures, AssetKind::Texture),
            (FileTypeFilter::Scripts, AssetKind::Script),
            (FileTypeFilter::Models, AssetKind::Model),
            (FileTypeFilter::Scenes, AssetKind::Scene),
            (FileTypeFilter::Prefabs, AssetKind::Prefab),
        ];
        kinds
            .into_iter()
            .find(|(filter, _)| filter.extensions().contains(&ext))
            .map(|(_, kind)| kind)
            .unwrap_or(AssetKind::Other)
    }

    /// Type name shown in the preview pane.
    pub fn label(self) -> &'static str {
        match self {
            AssetKind::Folder => "Folder",
            AssetKind::Texture => "Texture",
            AssetKind::Script => "Script",
            AssetKind::Model => "Model",
            AssetKind::Scene => "Scene",
            AssetKind::Prefab => "Prefab",
            AssetKind::Other => "File",
        }
    }
}

/// A resolved asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetHandle {
    pub path: PathBuf,
    pub name: String,
    pub kind: AssetKind,
    pub size: u64,
    pub modified: Option<SystemTime>,
}

/// Resolves paths to asset handles.
pub trait AssetResolver {
    /// Returns the asset at `path`, or [`CoreError::AssetResolution`] when
    /// there is nothing loadable there.
    fn resolve(&self, path: &Path) -> CoreResult<AssetHandle>;
}

/// Resolver over the local project tree.
///
/// A path resolves when it exists, is not a sidecar, hidden (`.foo`) or
/// backup (`foo~`) entry, and lies under `root` when a root is set.
#[derive(Debug, Clone, Default)]
pub struct ProjectAssetResolver {
    root: Option<PathBuf>,
}

impl ProjectAssetResolver {
    /// A resolver that accepts paths anywhere on disk.
    pub fn new() -> Self {
        Self::default()
    }

    /// A resolver restricted to `root` and its descendants.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    /// The project root, if any.
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    fn is_ignored_name(name: &str) -> bool {
        name.starts_with('.') || name.ends_with('~') || is_sidecar_name(name)
    }
}

impl AssetResolver for ProjectAssetResolver {
    fn resolve(&self, path: &Path) -> CoreResult<AssetHandle> {
        let unresolved = || CoreError::AssetResolution(path.to_path_buf());

        let name = path
            .file_name()
            .map(|n| crate::nfc_string(&n.to_string_lossy()))
            .ok_or_else(unresolved)?;
        if Self::is_ignored_name(&name) {
            return Err(unresolved());
        }
        if let Some(root) = &self.root {
            if !path.starts_with(root) {
                return Err(unresolved());
            }
        }

        let metadata = std::fs::metadata(path).map_err(|_| unresolved())?;
        let kind = if metadata.is_dir() {
            AssetKind::Folder
        } else {
            AssetKind::from_extension(&extension_lower(path))
        };

        Ok(AssetHandle {
            path: path.to_path_buf(),
            name,
            kind,
            size: if metadata.is_dir() { 0 } else { metadata.len() },
            modified: metadata.modified().ok(),
        })
    }
}
