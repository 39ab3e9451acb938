//! Drop-to-import: turning a drop payload into folders to add as tabs.
//!
//! Terminals deliver a drag-and-drop of files as pasted text, so the payload
//! is parsed from a string first. Only existing directories are accepted.

use std::path::{Path, PathBuf};

/// Result of accepting a drop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropOutcome {
    /// Directories to add as tabs, in drop order.
    pub folders: Vec<PathBuf>,
    /// Paths that were not existing directories.
    pub rejected: Vec<PathBuf>,
}

/// Splits dropped text into paths.
///
/// Each non-empty line is taken verbatim when it names an existing path.
/// Otherwise the line is split like a shell word list: whitespace separates
/// paths, quotes group, and a backslash escapes the next character. A
/// `file://` URL is converted to the local path it names.
pub fn parse_dropped_text(text: &str) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if Path::new(line).exists() {
            paths.push(PathBuf::from(line));
            continue;
        }
        for word in split_words(line) {
            paths.push(word_to_path(&word));
        }
    }
    paths
}

/// Keeps the dropped paths that are existing directories.
pub fn accept_dropped_paths(paths: &[PathBuf]) -> DropOutcome {
    let (folders, rejected): (Vec<PathBuf>, Vec<PathBuf>) =
        paths.iter().cloned().partition(|p| p.is_dir());
    DropOutcome { folders, rejected }
}

fn split_words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('\''), c) => current.push(c),
            (Some(_), '\\') | (None, '\\') => {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
                in_word = true;
            }
            (Some(_), c) => current.push(c),
            (None, '\'') | (None, '"') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }
    if in_word {
        words.push(current);
    }
    words
}

/// Converts a `file://` URL into a local path. Other words are paths already.
fn word_to_path(word: &str) -> PathBuf {
    if !word.starts_with("file:") {
        return PathBuf::from(word);
    }
    match url::Url::parse(word).map(|u| u.to_file_path()) {
        Ok(Ok(path)) => path,
        _ => {
            tracing::debug!("dropped URL is not a local file: {word}");
            PathBuf::from(word)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn one_path_per_line() {
        let paths = parse_dropped_text("/proj/Assets/Art\n/proj/Assets/Code\n");
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/proj/Assets/Art"),
                PathBuf::from("/proj/Assets/Code")
            ]
        );
    }

    #[test]
    fn whitespace_separated_words() {
        let paths = parse_dropped_text("/a/one /a/two");
        assert_eq!(paths, vec![PathBuf::from("/a/one"), PathBuf::from("/a/two")]);
    }

    #[test]
    fn backslash_escaped_spaces() {
        let paths = parse_dropped_text(r"/a/My\ Folder /b");
        assert_eq!(paths, vec![PathBuf::from("/a/My Folder"), PathBuf::from("/b")]);
    }

    #[test]
    fn quoted_paths() {
        let paths = parse_dropped_text(r#"'/a/My Folder' "/b/Other Folder""#);
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/a/My Folder"),
                PathBuf::from("/b/Other Folder")
            ]
        );
    }

    #[test]
    fn file_url_is_decoded() {
        let paths = parse_dropped_text("file:///a/My%20Folder");
        assert_eq!(paths, vec![PathBuf::from("/a/My Folder")]);
    }

    #[test]
    fn file_url_with_localhost_host() {
        let paths = parse_dropped_text("file://localhost/tmp/Art");
        assert_eq!(paths, vec![PathBuf::from("/tmp/Art")]);
    }

    #[test]
    fn remote_file_url_is_kept_and_rejected() {
        let paths = parse_dropped_text("file://build-server/share/Art");
        assert_eq!(paths.len(), 1);
        let outcome = accept_dropped_paths(&paths);
        assert!(outcome.folders.is_empty());
    }

    #[test]
    fn existing_line_taken_verbatim() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("Has Space");
        fs::create_dir(&dir).unwrap();

        let paths = parse_dropped_text(&format!("{}\r\n", dir.display()));
        assert_eq!(paths, vec![dir]);
    }

    #[test]
    fn blank_text_yields_nothing() {
        assert!(parse_dropped_text("  \n\n").is_empty());
    }

    #[test]
    fn accept_keeps_only_directories_in_order() {
        let tmp = TempDir::new().unwrap();
        let b = tmp.path().join("B");
        let a = tmp.path().join("A");
        let file = tmp.path().join("f.cs");
        fs::create_dir(&a).unwrap();
        fs::create_dir(&b).unwrap();
        fs::write(&file, "").unwrap();
        let missing = tmp.path().join("missing");

        let outcome = accept_dropped_paths(&[b.clone(), file.clone(), a.clone(), missing.clone()]);

        assert_eq!(outcome.folders, vec![b, a]);
        assert_eq!(outcome.rejected, vec![file, missing]);
    }
}
