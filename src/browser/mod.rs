use anyhow::{Context, Result};

use crate::traits::UrlOpener;

/// Opens URLs with the platform launcher (`xdg-open`, `open`, or the Windows
/// URL handler).
///
/// The launcher is spawned detached and never awaited. A successful return
/// means it started, not that a browser actually showed the page.
pub struct SystemBrowser;

impl UrlOpener for SystemBrowser {
    fn open_url(&self, url: &str) -> Result<()> {
        tracing::info!(%url, "launching system browser");
        open::that_detached(url).with_context(|| format!("Failed to launch a browser for {}", url))
    }
}
