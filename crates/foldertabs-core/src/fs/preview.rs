//! Preview lookup for the selected asset.
//!
//! The preview pane shows a thumbnail of the asset that was last clicked:
//! image dimensions for textures, the first lines of text-based assets
//! (scripts, scenes, prefabs), or nothing for binary files.

use std::fs;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::fs::asset::{AssetHandle, AssetKind, AssetResolver};

/// The number of bytes to inspect for binary (null-byte) detection.
const BINARY_CHECK_SIZE: usize = 8192;

/// What the preview pane should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewState {
    /// No file has been clicked yet.
    NothingSelected,
    /// The selected path no longer resolves to an asset.
    Invalid(PathBuf),
    /// A resolved asset and its thumbnail.
    Ready(AssetPreview),
}

/// A resolved asset with its thumbnail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPreview {
    pub handle: AssetHandle,
    pub thumbnail: Thumbnail,
}

/// Thumbnail content for the preview pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Thumbnail {
    Image(ImageInfo),
    Text(TextPreview),
    /// "No preview available".
    Unavailable,
}

/// Basic image facts shown in place of a rendered thumbnail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub format: String,
}

/// A truncated text preview of a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPreview {
    /// The preview lines (up to `max_lines`).
    pub lines: Vec<String>,
    /// `true` when the file continues past the kept lines.
    pub is_truncated: bool,
}

/// Resolves `selected` and samples a thumbnail for it.
///
/// Never fails: an unresolvable path yields [`PreviewState::Invalid`] and an
/// unreadable thumbnail yields [`Thumbnail::Unavailable`].
pub fn preview_for<R>(resolver: &R, selected: Option<&Path>, max_lines: usize) -> PreviewState
where
    R: AssetResolver + ?Sized,
{
    let Some(path) = selected else {
        return PreviewState::NothingSelected;
    };
    let handle = match resolver.resolve(path) {
        Ok(h) => h,
        Err(e) => {
            tracing::debug!("preview target did not resolve: {e}");
            return PreviewState::Invalid(path.to_path_buf());
        }
    };
    let thumbnail = thumbnail_for(&handle, max_lines);
    PreviewState::Ready(AssetPreview { handle, thumbnail })
}

fn thumbnail_for(handle: &AssetHandle, max_lines: usize) -> Thumbnail {
    let sampled = match handle.kind {
        AssetKind::Folder | AssetKind::Model => return Thumbnail::Unavailable,
        AssetKind::Texture => read_image_info(&handle.path).map(Thumbnail::Image),
        _ => read_text_preview(&handle.path, max_lines).map(Thumbnail::Text),
    };
    sampled.unwrap_or_else(|e| {
        tracing::debug!("no thumbnail for {}: {e}", handle.path.display());
        Thumbnail::Unavailable
    })
}

/// Reads the dimensions and format of an image without decoding pixels.
///
/// # Errors
///
/// Returns [`CoreError::NotFound`] if `path` is not a file and
/// [`CoreError::AssetResolution`] if the image header cannot be read.
pub fn read_image_info(path: &Path) -> CoreResult<ImageInfo> {
    if !path.is_file() {
        return Err(CoreError::NotFound(path.to_path_buf()));
    }

    let format = image::ImageFormat::from_path(path)
        .map(|f| format!("{f:?}"))
        .unwrap_or_else(|_| "Unknown".to_string());

    let (width, height) = image::image_dimensions(path).map_err(|e| {
        tracing::debug!("image header unreadable: {e}");
        CoreError::AssetResolution(path.to_path_buf())
    })?;

    Ok(ImageInfo {
        width,
        height,
        format,
    })
}

/// Reads a text preview of the file at `path`, returning at most `max_lines`.
///
/// # Errors
///
/// Returns [`CoreError::NotFound`] if `path` does not point to a file,
/// [`CoreError::AssetResolution`] if the file is binary, and
/// [`CoreError::Io`] on I/O failures.
pub fn read_text_preview(path: &Path, max_lines: usize) -> CoreResult<TextPreview> {
    if !path.is_file() {
        return Err(CoreError::NotFound(path.to_path_buf()));
    }
    if is_binary(path)? {
        return Err(CoreError::AssetResolution(path.to_path_buf()));
    }

    let file = fs::File::open(path).map_err(|e| CoreError::from_io(path, e))?;
    let mut reader = BufReader::new(file);

    // Only the kept lines are read; invalid UTF-8 is replaced, not rejected.
    let mut lines = Vec::with_capacity(max_lines.min(256));
    let mut buf = Vec::new();
    let mut is_truncated = false;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if lines.len() == max_lines {
            is_truncated = true;
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);
        lines.push(strip_control_chars(line));
    }

    Ok(TextPreview {
        lines,
        is_truncated,
    })
}

/// Returns `true` if the file has a null byte in its first 8 KB.
pub fn is_binary(path: &Path) -> CoreResult<bool> {
    let mut file = fs::File::open(path).map_err(|e| CoreError::from_io(path, e))?;
    let mut buf = vec![0u8; BINARY_CHECK_SIZE];
    let bytes_read = file.read(&mut buf)?;
    Ok(buf[..bytes_read].contains(&0))
}

/// Strips ANSI escape sequences and control characters; expands tabs.
fn strip_control_chars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1b' {
            match chars.peek() {
                // CSI: \x1b[ ... <letter>
                Some('[') => {
                    chars.next();
                    for next in chars.by_ref() {
                        if next.is_ascii_alphabetic() {
                            break;
                        }
                    }
                }
                // OSC: \x1b] ... BEL
                Some(']') => {
                    chars.next();
                    for next in chars.by_ref() {
                        if next == '\x07' {
                            break;
                        }
                    }
                }
                Some(_) => {
                    chars.next();
                }
                None => {}
            }
        } else if c == '\t' {
            result.push_str("    ");
        } else if !c.is_control() {
            result.push(c);
        }
    }

    result
}
