// Broken Links - Images section
//
// Two checks, two truths: the DOM says whether an image decoded, the wire
// says whether a link's target answers 2xx.

use url::Url;

use crate::error::{PageError, Result};

use super::ElementsPage;

/// Selectors for the section's fixed assets.
pub const VALID_IMAGE: &str = r#"img[src="/images/Toolsqa.jpg"]"#;
pub const BROKEN_IMAGE: &str = r#"img[src="/images/Toolsqa_1.jpg"]"#;
pub const VALID_LINK: &str = r#"a:text-is("Click Here for Valid Link")"#;
pub const BROKEN_LINK: &str = r#"a:text-is("Click Here for Broken Link")"#;

impl ElementsPage {
    /// Whether the image failed to decode. A broken image either never
    /// completes or reports a natural width of zero.
    pub async fn is_image_broken(&self, selector: &str) -> Result<bool> {
        let broken = self
            .page
            .evaluate::<&str, bool>(
                "(sel) => { const img = document.querySelector(sel); \
                 return !img || !img.complete || img.naturalWidth === 0; }",
                Some(&selector),
            )
            .await?;
        Ok(broken)
    }

    /// Whether the anchor's target answers with a non-2xx status. The href
    /// is resolved against the current page URL before the probe.
    pub async fn is_link_broken(&self, selector: &str) -> Result<bool> {
        let anchor = self.page.locator(selector).await;
        let href = anchor
            .get_attribute("href")
            .await?
            .ok_or_else(|| PageError::MissingAttribute {
                selector: selector.to_string(),
                attribute: "href".to_string(),
            })?;
        let current = Url::parse(&self.page.url())?;
        let target = current.join(&href)?;
        let response = reqwest::get(target).await?;
        Ok(!response.status().is_success())
    }
}
