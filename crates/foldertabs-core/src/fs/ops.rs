//! Directory reading operations.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::FileEntry;

/// The immediate children of a folder, split by kind.
///
/// Both lists are sorted by name (case-insensitive). Metadata sidecars are
/// never part of `files`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryListing {
    pub directories: Vec<FileEntry>,
    pub files: Vec<FileEntry>,
}

impl DirectoryListing {
    /// Total number of entries in both lists.
    pub fn len(&self) -> usize {
        self.directories.len() + self.files.len()
    }

    /// Whether the listing has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.directories.is_empty() && self.files.is_empty()
    }

    /// Iterates directories first, then files.
    pub fn iter(&self) -> impl Iterator<Item = &FileEntry> {
        self.directories.iter().chain(self.files.iter())
    }

    /// Returns the entry at a combined (directories-then-files) index.
    pub fn get(&self, index: usize) -> Option<&FileEntry> {
        self.iter().nth(index)
    }
}

/// Reads the immediate contents of a directory and returns them as [`FileEntry`] values.
///
/// The returned entries are **unsorted**. Children whose metadata cannot be
/// read are skipped.
///
/// # Errors
///
/// - [`CoreError::NotFound`]: the path does not exist.
/// - [`CoreError::NotADirectory`]: the path is not a directory.
/// - [`CoreError::PermissionDenied`]: read access is denied.
/// - [`CoreError::Io`]: any other I/O error.
pub fn read_directory(path: &Path) -> CoreResult<Vec<FileEntry>> {
    if !path.exists() {
        return Err(CoreError::NotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(CoreError::NotADirectory(path.to_path_buf()));
    }

    let read_dir = std::fs::read_dir(path).map_err(|e| CoreError::from_io(path, e))?;

    let mut entries = Vec::new();
    for dir_entry in read_dir {
        let dir_entry = match dir_entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        let metadata = match dir_entry.metadata() {
            Ok(m) => m,
            Err(_) => continue,
        };
        entries.push(FileEntry::new(dir_entry.path(), &metadata));
    }

    Ok(entries)
}

/// Lists a folder as separate, sorted directory and file lists.
///
/// Sidecar files are dropped from `files`; a directory whose name happens
/// to end in the sidecar suffix is still listed.
///
/// # Errors
///
/// Same as [`read_directory`].
///
/// # Examples
///
/// ```no_run
/// use foldertabs_core::list_directory;
/// use std::path::Path;
///
/// let listing = list_directory(Path::new("/proj/Assets")).unwrap();
/// for dir in &listing.directories {
///     println!("{}/", dir.name());
/// }
/// ```
pub fn list_directory(path: &Path) -> CoreResult<DirectoryListing> {
    let (mut directories, mut files): (Vec<_>, Vec<_>) =
        read_directory(path)?.into_iter().partition(|e| e.is_dir());

    files.retain(|e| !e.is_sidecar());
    sort_by_name(&mut directories);
    sort_by_name(&mut files);

    Ok(DirectoryListing { directories, files })
}

/// Returns `true` if `path` exists and is a directory.
pub fn folder_exists(path: &Path) -> bool {
    path.is_dir()
}

/// Anchors a relative path at the current directory.
///
/// Paths that cannot be anchored (empty, or no current directory) are
/// returned unchanged.
pub fn absolute_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

fn sort_by_name(entries: &mut [FileEntry]) {
    entries.sort_by(|a, b| {
        a.name()
            .to_lowercase()
            .cmp(&b.name().to_lowercase())
            .then_with(|| a.name().cmp(b.name()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn names(entries: &[FileEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name()).collect()
    }

    #[test]
    fn read_directory_returns_all_children() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.cs"), "").unwrap();
        fs::write(tmp.path().join("a.cs.meta"), "").unwrap();
        fs::create_dir(tmp.path().join("Sub")).unwrap();

        let entries = read_directory(tmp.path()).unwrap();
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn read_directory_nonexistent_returns_not_found() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("gone");
        let err = read_directory(&missing).unwrap_err();
        assert!(matches!(err, CoreError::NotFound(p) if p == missing));
    }

    #[test]
    fn read_directory_on_file_returns_not_a_directory() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("file.txt");
        fs::write(&file, "x").unwrap();
        let err = read_directory(&file).unwrap_err();
        assert!(matches!(err, CoreError::NotADirectory(_)));
    }

    #[test]
    fn list_directory_splits_and_sorts() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("zeta.png"), "").unwrap();
        fs::write(tmp.path().join("Alpha.cs"), "").unwrap();
        fs::write(tmp.path().join("beta.prefab"), "").unwrap();
        fs::create_dir(tmp.path().join("Scripts")).unwrap();
        fs::create_dir(tmp.path().join("art")).unwrap();

        let listing = list_directory(tmp.path()).unwrap();

        assert_eq!(names(&listing.directories), vec!["art", "Scripts"]);
        assert_eq!(
            names(&listing.files),
            vec!["Alpha.cs", "beta.prefab", "zeta.png"]
        );
        assert_eq!(listing.len(), 5);
    }

    #[test]
    fn list_directory_drops_sidecar_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("Foo.cs"), "").unwrap();
        fs::write(tmp.path().join("Foo.cs.meta"), "").unwrap();
        fs::write(tmp.path().join("Sub.meta"), "").unwrap();
        fs::create_dir(tmp.path().join("Sub")).unwrap();

        let listing = list_directory(tmp.path()).unwrap();

        assert_eq!(names(&listing.files), vec!["Foo.cs"]);
        assert_eq!(names(&listing.directories), vec!["Sub"]);
    }

    #[test]
    fn list_directory_keeps_directory_with_sidecar_suffix() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("Odd.meta")).unwrap();

        let listing = list_directory(tmp.path()).unwrap();

        assert_eq!(names(&listing.directories), vec!["Odd.meta"]);
    }

    #[test]
    fn list_directory_empty_folder() {
        let tmp = TempDir::new().unwrap();
        let listing = list_directory(tmp.path()).unwrap();
        assert!(listing.is_empty());
        assert_eq!(listing.len(), 0);
    }

    #[test]
    fn listing_get_uses_directories_then_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.cs"), "").unwrap();
        fs::create_dir(tmp.path().join("z")).unwrap();

        let listing = list_directory(tmp.path()).unwrap();

        assert_eq!(listing.get(0).unwrap().name(), "z");
        assert_eq!(listing.get(1).unwrap().name(), "a.cs");
        assert!(listing.get(2).is_none());
    }

    #[test]
    fn folder_exists_checks_directory() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("f.txt");
        fs::write(&file, "").unwrap();

        assert!(folder_exists(tmp.path()));
        assert!(!folder_exists(&file));
        assert!(!folder_exists(&tmp.path().join("missing")));
    }

    #[cfg(unix)]
    #[test]
    fn list_directory_unreadable_returns_permission_denied() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let locked = tmp.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let result = list_directory(&locked);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        // Root can read anything; only assert when the read was refused.
        if let Err(err) = result {
            assert!(matches!(err, CoreError::PermissionDenied(_)));
        }
    }

    #[test]
    fn absolute_path_anchors_relative_paths() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(absolute_path(Path::new("Assets/Art")), cwd.join("Assets/Art"));
    }

    #[test]
    fn absolute_path_keeps_absolute_and_empty_paths() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(absolute_path(tmp.path()), tmp.path());
        assert_eq!(absolute_path(Path::new("")), PathBuf::new());
    }
}
