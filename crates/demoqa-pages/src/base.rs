// Shared page-object behavior

use playwright_rs::{Locator, Page};
use url::Url;

use crate::error::Result;
use crate::overlay;

/// Behavior every page object shares: an owned driver [`Page`], a base URL,
/// and navigation that scrubs the site's overlays before handing control
/// back to the caller.
pub trait PageObject {
    /// The driver page this object wraps.
    fn page(&self) -> &Page;

    /// Base URL all relative paths resolve against.
    fn base(&self) -> &Url;

    /// Navigates to `path` (relative to the base URL) and removes the site's
    /// fixed overlays once the page has loaded.
    fn open(&self, path: &str) -> impl Future<Output = Result<()>> + Send
    where
        Self: Sync,
    {
        async move {
            let target = self.base().join(path)?;
            self.page().goto(target.as_str(), None).await?;
            overlay::remove_fixed_overlays(self.page()).await?;
            Ok(())
        }
    }

    /// Clicks after a just-in-case overlay sweep; the banner re-inserts
    /// itself on some route changes.
    fn click_with_cleanup(&self, locator: &Locator) -> impl Future<Output = Result<()>> + Send
    where
        Self: Sync,
    {
        async move {
            overlay::remove_fixed_overlays(self.page()).await?;
            locator.click(None).await?;
            Ok(())
        }
    }
}
