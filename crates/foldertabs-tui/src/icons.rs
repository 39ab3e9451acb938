//! Nerd Font icon mapping for project assets.
//!
//! Icons follow the asset kind (texture, script, model, scene, prefab) so the
//! list and icon views agree with the type filter. A few common non-asset
//! extensions get their own glyph.

use foldertabs_core::fs::asset::AssetKind;
use foldertabs_core::fs::entry::FileEntry;

const FOLDER_ICON: &str = "\u{f07b} ";
const DEFAULT_ICON: &str = "\u{f15b} ";

/// Returns a Nerd Font icon for the given file entry.
pub fn icon_for_entry(entry: &FileEntry) -> &'static str {
    if entry.is_dir() {
        return FOLDER_ICON;
    }
    let ext = entry.extension_lower();
    match AssetKind::from_extension(&ext) {
        AssetKind::Other => icon_for_extension(&ext),
        kind => icon_for_kind(kind),
    }
}

/// Returns the icon for an asset category.
pub fn icon_for_kind(kind: AssetKind) -> &'static str {
    match kind {
        AssetKind::Folder => FOLDER_ICON,
        AssetKind::Texture => "\u{f1c5} ",
        AssetKind::Script => "\u{f031b} ",
        AssetKind::Model => "\u{f01a7} ",
        AssetKind::Scene => "\u{f0d6e} ",
        AssetKind::Prefab => "\u{f01a6} ",
        AssetKind::Other => DEFAULT_ICON,
    }
}

fn icon_for_extension(ext: &str) -> &'static str {
    match ext {
        "json" | "jsonc" => "\u{e60b} ",
        "xml" | "asmdef" => "\u{e619} ",
        "md" | "markdown" => "\u{e73e} ",
        "txt" => "\u{f15c} ",
        "shader" | "hlsl" | "cginc" | "compute" => "\u{f0e7} ",
        "mat" => "\u{f0a1a} ",
        "anim" | "controller" => "\u{f03d} ",
        "mp3" | "wav" | "ogg" | "aif" => "\u{f001} ",
        "ttf" | "otf" => "\u{f031} ",
        _ => DEFAULT_ICON,
    }
}
