//! Hand-off to the operating system: opening an asset with its default
//! application and revealing it in the system file manager.

use std::path::{Path, PathBuf};

use anyhow::Context;

/// Opens `path` with the system's default handler.
pub fn open_path(path: &Path) -> anyhow::Result<()> {
    open::that(path).with_context(|| format!("failed to open {}", path.display()))?;
    tracing::info!("opened {}", path.display());
    Ok(())
}

/// Shows `path` in the system file manager.
///
/// Files reveal their containing folder; folders open themselves.
pub fn reveal_path(path: &Path) -> anyhow::Result<()> {
    let target = reveal_target(path);
    open::that(&target).with_context(|| format!("failed to reveal {}", path.display()))?;
    tracing::info!("revealed {}", target.display());
    Ok(())
}

fn reveal_target(path: &Path) -> PathBuf {
    if path.is_dir() {
        return path.to_path_buf();
    }
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => path.to_path_buf(),
    }
}
