// Web Tables section

use playwright_rs::Locator;
use tracing::debug;

use crate::base::PageObject;
use crate::error::{PageError, Result};
use crate::records::RegistrationRecord;

use super::ElementsPage;

impl ElementsPage {
    /// Counts rows carrying any text; the grid pads itself with empty rows
    /// up to its page size.
    pub async fn filled_row_count(&self) -> Result<usize> {
        let rows = self.page.locator(".rt-tr-group").await;
        let total = rows.count().await?;
        let mut filled = 0;
        for index in 0..total {
            let text = rows.nth(index as i32).inner_text().await?;
            if text.chars().any(|c| c.is_ascii_alphanumeric()) {
                filled += 1;
            }
        }
        Ok(filled)
    }

    /// Opens the registration modal.
    pub async fn open_registration(&self) -> Result<()> {
        let add = self.page.locator("#addNewRecordButton").await;
        self.click_with_cleanup(&add).await
    }

    /// Fills the registration modal from a fixture record and submits.
    pub async fn fill_registration(&self, record: &RegistrationRecord) -> Result<()> {
        self.page
            .locator("#firstName")
            .await
            .fill(&record.first_name, None)
            .await?;
        self.page
            .locator("#lastName")
            .await
            .fill(&record.last_name, None)
            .await?;
        self.page
            .locator("#userEmail")
            .await
            .fill(&record.email, None)
            .await?;
        self.page
            .locator("#age")
            .await
            .fill(&record.age, None)
            .await?;
        self.page
            .locator("#salary")
            .await
            .fill(&record.salary, None)
            .await?;
        self.page
            .locator("#department")
            .await
            .fill(&record.department, None)
            .await?;

        self.page.locator("#submit").await.click(None).await?;
        Ok(())
    }

    /// Deletes the row containing `email`.
    pub async fn delete_by_email(&self, email: &str) -> Result<()> {
        let row = self.row_with_text(email).await?;
        debug!(email, "deleting table row");
        row.locator(r#"span[title="Delete"]"#).click(None).await?;
        Ok(())
    }

    /// Opens the row's edit modal and replaces its fields with `record`.
    pub async fn edit_by_email(&self, email: &str, record: &RegistrationRecord) -> Result<()> {
        let row = self.row_with_text(email).await?;
        row.locator(r#"span[title="Edit"]"#).click(None).await?;
        self.fill_registration(record).await
    }

    async fn row_with_text(&self, needle: &str) -> Result<Locator> {
        let rows = self.page.locator(".rt-tr-group").await;
        let total = rows.count().await?;
        for index in 0..total {
            let row = rows.nth(index as i32);
            if row.inner_text().await?.contains(needle) {
                return Ok(row);
            }
        }
        Err(PageError::RowNotFound {
            email: needle.to_string(),
        })
    }
}
