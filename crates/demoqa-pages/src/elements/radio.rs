// Radio Button section
//
// Options are addressed by visible label; the backing input is resolved
// through the label's `for` attribute so the disabled option can be
// asserted without clicking it.

use playwright_rs::Locator;

use crate::base::PageObject;
use crate::error::{PageError, Result};

use super::ElementsPage;

impl ElementsPage {
    /// Selects a radio option by its visible label.
    pub async fn select_radio(&self, option: &str) -> Result<()> {
        let label = self.radio_label(option).await;
        self.click_with_cleanup(&label).await
    }

    /// The "You have selected ..." confirmation line.
    pub async fn radio_result(&self) -> Result<String> {
        let result = self
            .page
            .locator(r#"p:has-text("You have selected")"#)
            .await;
        Ok(result.inner_text().await?)
    }

    /// Whether the option's backing input is disabled.
    pub async fn is_radio_disabled(&self, option: &str) -> Result<bool> {
        let input = self.radio_input(option).await?;
        Ok(!input.is_enabled().await?)
    }

    async fn radio_label(&self, option: &str) -> Locator {
        self.page
            .locator(&format!(r#".custom-control-label:text-is("{option}")"#))
            .await
    }

    async fn radio_input(&self, option: &str) -> Result<Locator> {
        let label = self.radio_label(option).await;
        let selector = label.selector().to_string();
        let target = label
            .get_attribute("for")
            .await?
            .ok_or(PageError::MissingAttribute {
                selector,
                attribute: "for".to_string(),
            })?;
        Ok(self.page.locator(&format!("#{target}")).await)
    }
}
