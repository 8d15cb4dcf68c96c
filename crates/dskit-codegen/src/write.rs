//! Single-shot output writing.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Write `content` to `path` in one step.
///
/// The bytes go to a sibling temp file first and are renamed over the target,
/// so a failed run never leaves a half-written artifact behind. Parent
/// directories are created as needed.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let tmp = temp_path(path);
    std::fs::write(&tmp, content).with_context(|| format!("Failed to write {}", tmp.display()))?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e).with_context(|| format!("Failed to replace {}", path.display()));
    }

    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".dskit-tmp");
    path.with_file_name(name)
}
