//! File system abstractions for FolderTabs.
//!
//! This module provides [`entry::FileEntry`], directory listing
//! ([`ops::list_directory`]), asset resolution ([`asset::AssetResolver`]),
//! drop-to-import parsing ([`drop::parse_dropped_text`]) and the preview
//! lookup ([`preview::preview_for`]).

pub mod asset;
pub mod drop;
pub mod entry;
pub mod ops;
pub mod preview;

pub use asset::{AssetHandle, AssetKind, AssetResolver, ProjectAssetResolver};
pub use drop::{accept_dropped_paths, parse_dropped_text, DropOutcome};
pub use preview::{AssetPreview, ImageInfo, PreviewState, TextPreview, Thumbnail};
