use anyhow::Result;
use std::path::Path;

/// Clones a remote repository into a local directory
pub trait Cloner {
    /// Clones `url` into `dest`, which must not exist yet.
    ///
    /// # Errors
    /// Returns an error if the clone could not be started or did not succeed
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<()>;
}

/// Hands a URL to whatever the platform uses to show web pages
pub trait UrlOpener {
    /// Launches the opener without waiting for it to finish.
    ///
    /// # Errors
    /// Returns an error only if the launcher could not be spawned
    fn open_url(&self, url: &str) -> Result<()>;
}
