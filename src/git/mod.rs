use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

use crate::traits::Cloner;

/// Clones through the `git` executable found on `PATH`
pub struct GitCli;

impl Cloner for GitCli {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<()> {
        tracing::info!(%url, dest = %dest.display(), "running git clone");

        let output = Command::new("git")
            .arg("clone")
            .arg(url)
            .arg(dest)
            .output()
            .context("Failed to execute git command")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("git clone exited with {}: {}", output.status, stderr.trim());
        }

        Ok(())
    }
}
