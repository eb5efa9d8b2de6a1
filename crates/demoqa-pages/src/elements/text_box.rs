// Text Box section

use crate::base::PageObject;
use crate::error::Result;
use crate::records::TextBoxEntry;

use super::ElementsPage;

impl ElementsPage {
    /// Fills the four Text Box fields and submits.
    pub async fn fill_text_box(&self, entry: &TextBoxEntry) -> Result<()> {
        self.page
            .locator("#userName")
            .await
            .fill(&entry.full_name, None)
            .await?;
        self.page
            .locator("#userEmail")
            .await
            .fill(&entry.email, None)
            .await?;
        self.page
            .locator("#currentAddress")
            .await
            .fill(&entry.current_address, None)
            .await?;
        self.page
            .locator("#permanentAddress")
            .await
            .fill(&entry.permanent_address, None)
            .await?;

        let submit = self.page.locator("#submit").await;
        self.click_with_cleanup(&submit).await
    }

    pub async fn output_name(&self) -> Result<String> {
        self.output_row("name").await
    }

    pub async fn output_email(&self) -> Result<String> {
        self.output_row("email").await
    }

    pub async fn output_current_address(&self) -> Result<String> {
        self.output_row("currentAddress").await
    }

    pub async fn output_permanent_address(&self) -> Result<String> {
        self.output_row("permanentAddress").await
    }

    // The result panel reuses the input ids inside #output, so the rows must
    // be addressed relative to the panel.
    async fn output_row(&self, id: &str) -> Result<String> {
        let row = self.page.locator(&format!("#output #{id}")).await;
        Ok(row.inner_text().await?)
    }
}
