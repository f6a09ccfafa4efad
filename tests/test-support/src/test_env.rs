#![allow(clippy::unwrap_used)] // Tests use unwrap for simplicity

use anyhow::{Context, Result};
use assert_fs::TempDir;
use assert_fs::prelude::*;

use std::process::Command;

/// Test environment with a local repository standing in for the remote starter
pub struct CliTestEnvironment {
    pub source_repo: assert_fs::fixture::ChildPath,
    pub install_dir: assert_fs::fixture::ChildPath,
    _temp_dir: TempDir, // Keep temp_dir private to ensure cleanup, but don't expose it
}

impl CliTestEnvironment {
    /// Creates a source repository with one commit and an empty install directory
    ///
    /// # Errors
    /// Returns an error if:
    /// - Failed to create temporary directory
    /// - Failed to initialize git repository
    /// - Failed to configure git settings
    /// - Failed to create initial commit
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new().context("Failed to create temporary directory")?;
        let source_repo = temp_dir.child("starter");
        let install_dir = temp_dir.child("projects");

        source_repo.create_dir_all()?;
        install_dir.create_dir_all()?;

        Self::run_git_command(&source_repo, &["init"])?;
        Self::run_git_command(&source_repo, &["config", "user.name", "Test User"])?;
        Self::run_git_command(&source_repo, &["config", "user.email", "test@example.com"])?;

        source_repo.child("README.md").write_str("# Relivator")?;
        Self::run_git_command(&source_repo, &["add", "."])?;
        Self::run_git_command(&source_repo, &["commit", "-m", "Initial commit"])?;

        Ok(Self {
            source_repo,
            install_dir,
            _temp_dir: temp_dir,
        })
    }

    /// Run a git command in the given directory
    fn run_git_command(dir: &assert_fs::fixture::ChildPath, args: &[&str]) -> Result<()> {
        let output = Command::new("git")
            .args(args)
            .current_dir(dir.path())
            .output()
            .context("Failed to execute git command")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("Git command failed: {}", stderr);
        }

        Ok(())
    }

    /// The source repository as a clone URL
    pub fn source_url(&self) -> String {
        self.source_repo.path().to_string_lossy().to_string()
    }

    /// Execute the wizard with piped stdin, cloning from the local source repository
    ///
    /// # Errors
    /// Returns an error if the command setup fails
    pub fn run_command(&self, args: &[&str]) -> Result<assert_cmd::Command> {
        let mut cmd = assert_cmd::Command::cargo_bin("reliverse")
            .context("Failed to find reliverse binary")?;

        cmd.current_dir(self.install_dir.path())
            .env("RELIVERSE_REPO_URL", self.source_url())
            .env_remove("RELIVERSE_INSTALL_DIR")
            .env_remove("RELIVERSE_README_URL")
            .env_remove("RUST_LOG");

        cmd.args(args);
        Ok(cmd)
    }

    /// Path of a clone target inside the install directory
    pub fn target(&self, name: &str) -> assert_fs::fixture::ChildPath {
        self.install_dir.child(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use predicates::prelude::*;

    #[test]
    fn test_cli_test_environment_creation() -> Result<()> {
        let env = CliTestEnvironment::new()?;

        env.source_repo.assert(predicate::path::is_dir());
        env.source_repo.child(".git").assert(predicate::path::exists());
        env.source_repo
            .child("README.md")
            .assert(predicate::str::contains("# Relivator"));
        env.install_dir.assert(predicate::path::is_dir());

        Ok(())
    }
}
