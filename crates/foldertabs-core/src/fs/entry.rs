//! File entry representation.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::nfc_string;

/// Suffix of the per-asset metadata files the host generates next to every
/// asset. These never appear in file listings.
pub const SIDECAR_SUFFIX: &str = ".meta";

/// A single file or directory inside a project folder.
///
/// `FileEntry` is immutable. Directory sizes are reported as `0`.
///
/// # Examples
///
/// ```no_run
/// use foldertabs_core::FileEntry;
/// use std::fs;
///
/// let metadata = fs::metadata("Assets/Player.cs").unwrap();
/// let entry = FileEntry::new("Assets/Player.cs".into(), &metadata);
/// assert_eq!(entry.name(), "Player.cs");
/// assert_eq!(entry.extension_lower(), "cs");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    path: PathBuf,
    name: String,
    size: u64,
    modified: Option<SystemTime>,
    is_dir: bool,
}

impl FileEntry {
    /// Creates a new `FileEntry` from a path and its metadata.
    pub fn new(path: PathBuf, metadata: &std::fs::Metadata) -> Self {
        let name = file_name_of(&path);
        Self {
            path,
            name,
            size: if metadata.is_dir() { 0 } else { metadata.len() },
            modified: metadata.modified().ok(),
            is_dir: metadata.is_dir(),
        }
    }

    /// Creates an entry without touching the filesystem.
    ///
    /// Used for entries that are known by path only, such as favorites that
    /// are rendered before their metadata has been read.
    pub fn from_parts(path: PathBuf, is_dir: bool) -> Self {
        let name = file_name_of(&path);
        Self {
            path,
            name,
            size: 0,
            modified: None,
            is_dir,
        }
    }

    /// Returns the full path of this entry.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the file or directory name (last component of the path).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the file size in bytes. Always `0` for directories.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Returns the last-modified time, if available.
    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }

    /// Returns `true` if this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Returns `true` if the name starts with `.`.
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    /// Returns `true` if this is a metadata sidecar (`Foo.cs.meta`).
    pub fn is_sidecar(&self) -> bool {
        is_sidecar_name(&self.name)
    }

    /// Lowercased extension without the dot, or `""` when there is none.
    pub fn extension_lower(&self) -> String {
        extension_lower(&self.path)
    }
}

/// Returns `true` when `name` carries the metadata-sidecar suffix.
pub fn is_sidecar_name(name: &str) -> bool {
    name.to_lowercase().ends_with(SIDECAR_SUFFIX)
}

/// Lowercased extension of `path` without the dot.
pub fn extension_lower(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| nfc_string(&n.to_string_lossy()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn file_entry_from_regular_file() {
        let tmp = TempDir::new().unwrap();
        let file_path = tmp.path().join("Player.cs");
        fs::write(&file_path, "hello").unwrap();

        let metadata = fs::metadata(&file_path).unwrap();
        let entry = FileEntry::new(file_path.clone(), &metadata);

        assert_eq!(entry.name(), "Player.cs");
        assert_eq!(entry.size(), 5);
        assert!(!entry.is_dir());
        assert!(!entry.is_hidden());
        assert!(!entry.is_sidecar());
        assert_eq!(entry.path(), file_path);
        assert!(entry.modified().is_some());
    }

    #[test]
    fn file_entry_from_directory() {
        let tmp = TempDir::new().unwrap();
        let dir_path = tmp.path().join("Textures");
        fs::create_dir(&dir_path).unwrap();
        fs::write(dir_path.join("a.png"), "data").unwrap();

        let metadata = fs::metadata(&dir_path).unwrap();
        let entry = FileEntry::new(dir_path, &metadata);

        assert_eq!(entry.name(), "Textures");
        assert_eq!(entry.size(), 0);
        assert!(entry.is_dir());
    }

    #[test]
    fn sidecar_detected_by_suffix() {
        let entry = FileEntry::from_parts(PathBuf::from("/p/Foo.cs.meta"), false);
        assert!(entry.is_sidecar());
        assert_eq!(entry.extension_lower(), "meta");
    }

    #[test]
    fn sidecar_suffix_is_case_insensitive() {
        assert!(is_sidecar_name("Scene.unity.META"));
        assert!(!is_sidecar_name("metadata.txt"));
    }

    #[test]
    fn extension_is_lowercased() {
        let entry = FileEntry::from_parts(PathBuf::from("/p/Hero.PNG"), false);
        assert_eq!(entry.extension_lower(), "png");
    }

    #[test]
    fn extension_empty_when_missing() {
        let entry = FileEntry::from_parts(PathBuf::from("/p/Makefile"), false);
        assert_eq!(entry.extension_lower(), "");
    }

    #[test]
    fn hidden_detected_by_leading_dot() {
        let entry = FileEntry::from_parts(PathBuf::from("/p/.DS_Store"), false);
        assert!(entry.is_hidden());
    }

    #[test]
    fn from_parts_has_no_metadata() {
        let entry = FileEntry::from_parts(PathBuf::from("/p/Sub"), true);
        assert_eq!(entry.name(), "Sub");
        assert!(entry.is_dir());
        assert_eq!(entry.size(), 0);
        assert!(entry.modified().is_none());
    }

    #[test]
    fn file_entry_unicode_name() {
        let tmp = TempDir::new().unwrap();
        let file_path = tmp.path().join("한글파일.prefab");
        fs::write(&file_path, "내용").unwrap();

        let metadata = fs::metadata(&file_path).unwrap();
        let entry = FileEntry::new(file_path, &metadata);

        assert_eq!(entry.name(), "한글파일.prefab");
    }
}
