//! Picks the directory name the starter gets cloned into.
//!
//! The first free name in `base`, `base-1`, `base-2`, ... wins. Nothing is
//! reserved: the answer only holds at the moment of the probe, so a second
//! process racing for the same root may pick the same name.

use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::Path;

/// Returns the first name under `root` that does not exist yet.
///
/// Probes `base` first, then `base-1`, `base-2` and so on. A dangling symlink
/// counts as taken because `git clone` would refuse to write through it.
///
/// # Errors
/// Returns an error if:
/// - `base` is empty
/// - A probe fails for any reason other than the path not existing
///   (permission denied, I/O error, ...)
pub fn resolve_dir_name(root: &Path, base: &str) -> Result<String> {
    if base.is_empty() {
        anyhow::bail!("Directory base name must not be empty");
    }

    let mut candidate = base.to_string();
    let mut counter: u64 = 1;

    while is_taken(&root.join(&candidate))? {
        tracing::debug!(%candidate, "directory already exists");
        candidate = format!("{}-{}", base, counter);
        counter += 1;
    }

    tracing::debug!(%candidate, root = %root.display(), "resolved target directory");
    Ok(candidate)
}

fn is_taken(path: &Path) -> Result<bool> {
    match std::fs::symlink_metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).with_context(|| format!("Failed to check whether {} exists", path.display())),
    }
}
