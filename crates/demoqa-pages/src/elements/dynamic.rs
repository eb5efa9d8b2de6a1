// Dynamic Properties section
//
// Everything here settles on a delay, so the assertions run with a window
// wider than the page's own timers.

use std::time::Duration;

use playwright_rs::expect;

use crate::error::{PageError, Result};

use super::ElementsPage;

const DYNAMIC_WAIT: Duration = Duration::from_secs(7);

impl ElementsPage {
    /// Id of the random-id paragraph, if the paragraph is visible.
    pub async fn random_id_text_id(&self) -> Result<Option<String>> {
        let text = self
            .page
            .locator(r#"p:text-is("This text has random Id")"#)
            .await;
        if text.is_visible().await? {
            Ok(text.get_attribute("id").await?)
        } else {
            Ok(None)
        }
    }

    /// Waits out the enable delay and reports the button's state.
    pub async fn enable_after_button_enabled(&self) -> Result<bool> {
        let button = self.page.locator("#enableAfter").await;
        expect(button.clone())
            .with_timeout(DYNAMIC_WAIT)
            .to_be_enabled()
            .await?;
        Ok(button.is_enabled().await?)
    }

    /// The color-change button's full class string.
    pub async fn color_change_classes(&self) -> Result<String> {
        let button = self.page.locator("#colorChange").await;
        button
            .get_attribute("class")
            .await?
            .ok_or_else(|| PageError::MissingAttribute {
                selector: "#colorChange".to_string(),
                attribute: "class".to_string(),
            })
    }

    /// Whether the visible-after button shows up within the wait window.
    /// A timeout reports `false` instead of failing the caller.
    pub async fn visible_after_button_visible(&self) -> Result<bool> {
        let button = self.page.locator("#visibleAfter").await;
        match expect(button).with_timeout(DYNAMIC_WAIT).to_be_visible().await {
            Ok(()) => Ok(true),
            Err(playwright_rs::Error::AssertionTimeout(_)) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}
