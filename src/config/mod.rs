//! Settings for a single install run.
//!
//! There is no configuration file. Every value has a built-in default and may
//! be overridden from the command line or the environment (see `main.rs`).

use std::path::{Path, PathBuf};

/// Repository the starter is cloned from
pub const DEFAULT_REPO_URL: &str = "https://github.com/blefnk/relivator";

/// Page offered to the user once the clone is done
pub const DEFAULT_README_URL: &str = "https://github.com/blefnk/relivator#readme";

/// Directory name tried first for the clone
pub const DEFAULT_BASE_NAME: &str = "relivator";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstallConfig {
    pub repo_url: String,
    pub readme_url: String,
    /// Unsuffixed directory name for the clone target
    pub base_name: String,
    /// Directory the target name is resolved in and cloned into
    pub install_dir: PathBuf,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            repo_url: DEFAULT_REPO_URL.to_string(),
            readme_url: DEFAULT_README_URL.to_string(),
            base_name: DEFAULT_BASE_NAME.to_string(),
            install_dir: PathBuf::from("."),
        }
    }
}

impl InstallConfig {
    /// Overrides the install directory, keeping every other default
    #[must_use]
    pub fn with_install_dir(mut self, install_dir: impl Into<PathBuf>) -> Self {
        self.install_dir = install_dir.into();
        self
    }

    #[must_use]
    pub fn target_root(&self) -> &Path {
        &self.install_dir
    }
}
