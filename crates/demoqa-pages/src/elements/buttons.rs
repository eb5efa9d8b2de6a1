// Buttons section
//
// Three buttons, three gestures. The enum keeps call sites compile-checked;
// FromStr keeps the invalid-name error for callers driven by external data.

use std::str::FromStr;

use playwright_rs::protocol::{ClickOptions, MouseButton};

use crate::error::{PageError, Result};

use super::ElementsPage;

/// The gesture a Buttons-section button responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Double,
    Right,
    Dynamic,
}

impl FromStr for ButtonKind {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "double" => Ok(ButtonKind::Double),
            "right" => Ok(ButtonKind::Right),
            "dynamic" => Ok(ButtonKind::Dynamic),
            other => Err(PageError::UnknownButton(other.to_string())),
        }
    }
}

impl ElementsPage {
    /// Performs the button's gesture and returns its confirmation message.
    pub async fn click_button(&self, kind: ButtonKind) -> Result<String> {
        let message = match kind {
            ButtonKind::Double => {
                let button = self.page.locator("#doubleClickBtn").await;
                button.dblclick(None).await?;
                self.page.locator("#doubleClickMessage").await
            }
            ButtonKind::Right => {
                let button = self.page.locator("#rightClickBtn").await;
                let right = ClickOptions::builder().button(MouseButton::Right).build();
                button.click(Some(right)).await?;
                self.page.locator("#rightClickMessage").await
            }
            ButtonKind::Dynamic => {
                // The dynamic button's id changes per load; only its exact
                // text is stable.
                let button = self.page.locator(r#"button:text-is("Click Me")"#).await;
                button.click(None).await?;
                self.page.locator("#dynamicClickMessage").await
            }
        };
        Ok(message.inner_text().await?)
    }

    /// String-keyed dispatch for data-driven callers.
    pub async fn click_button_named(&self, name: &str) -> Result<String> {
        self.click_button(name.parse()?).await
    }
}
