// Practice Form page object
//
// Fill, submit, then read the confirmation modal back row by row.

use std::path::Path;

use playwright_rs::protocol::SelectOption;
use playwright_rs::{Locator, Page};
use url::Url;

use crate::base::PageObject;
use crate::error::Result;
use crate::nav::{self, MenuItem, menu_item};
use crate::records::PracticeFormRecord;

/// Page object for the Forms group of the practice site.
pub struct PracticeFormPage {
    page: Page,
    base: Url,
}

impl PracticeFormPage {
    pub fn new(page: Page, base: Url) -> Self {
        Self { page, base }
    }

    /// Navigates to a sidebar entry by key and returns its table row.
    pub async fn navigate_to(&self, key: &str) -> Result<&'static MenuItem> {
        let item = menu_item(key)?;
        nav::click_menu_entry(&self.page, item).await?;
        Ok(item)
    }

    /// Fills every text-driven field of the form from a fixture record.
    /// The picture upload takes a filesystem path and stays separate.
    pub async fn fill(&self, record: &PracticeFormRecord) -> Result<()> {
        self.set_student_name(&record.first_name, &record.last_name)
            .await?;
        self.set_email(&record.email).await?;
        self.pick_gender(&record.gender).await?;
        self.set_mobile(&record.mobile).await?;
        self.set_date_of_birth(&record.date_of_birth).await?;
        for subject in &record.subjects {
            self.add_subject(subject).await?;
        }
        for hobby in &record.hobbies {
            self.toggle_hobby(hobby).await?;
        }
        self.set_current_address(&record.current_address).await?;
        self.select_state(&record.state).await?;
        self.select_city(&record.city).await?;
        Ok(())
    }

    pub async fn set_student_name(&self, first: &str, last: &str) -> Result<()> {
        self.page.locator("#firstName").await.fill(first, None).await?;
        self.page.locator("#lastName").await.fill(last, None).await?;
        Ok(())
    }

    pub async fn set_email(&self, email: &str) -> Result<()> {
        self.page.locator("#userEmail").await.fill(email, None).await?;
        Ok(())
    }

    /// Picks a gender by its visible label.
    pub async fn pick_gender(&self, gender: &str) -> Result<()> {
        let label = self.control_label(gender).await;
        self.click_with_cleanup(&label).await
    }

    pub async fn set_mobile(&self, mobile: &str) -> Result<()> {
        self.page.locator("#userNumber").await.fill(mobile, None).await?;
        Ok(())
    }

    pub async fn set_date_of_birth(&self, date: &str) -> Result<()> {
        self.page
            .locator("#dateOfBirthInput")
            .await
            .fill(date, None)
            .await?;
        Ok(())
    }

    /// Types a subject and commits it with Enter.
    pub async fn add_subject(&self, subject: &str) -> Result<()> {
        let input = self.page.locator("#subjectsInput").await;
        input.fill(subject, None).await?;
        input.press("Enter", None).await?;
        Ok(())
    }

    /// Toggles a hobby by its visible label.
    pub async fn toggle_hobby(&self, hobby: &str) -> Result<()> {
        let label = self.control_label(hobby).await;
        self.click_with_cleanup(&label).await
    }

    pub async fn upload_picture(&self, file: &Path) -> Result<()> {
        let input = self.page.locator("#uploadPicture").await;
        input.set_input_files(&file.to_path_buf(), None).await?;
        Ok(())
    }

    pub async fn set_current_address(&self, address: &str) -> Result<()> {
        self.page
            .locator("#currentAddress")
            .await
            .fill(address, None)
            .await?;
        Ok(())
    }

    pub async fn select_state(&self, state: &str) -> Result<()> {
        self.page
            .locator("#state")
            .await
            .select_option(SelectOption::Label(state.to_string()), None)
            .await?;
        Ok(())
    }

    pub async fn select_city(&self, city: &str) -> Result<()> {
        self.page
            .locator("#city")
            .await
            .select_option(SelectOption::Label(city.to_string()), None)
            .await?;
        Ok(())
    }

    pub async fn submit(&self) -> Result<()> {
        let submit = self.page.locator("#submit").await;
        self.click_with_cleanup(&submit).await
    }

    /// Title of the confirmation modal.
    pub async fn modal_title(&self) -> Result<String> {
        let title = self.page.locator("#example-modal-sizes-title-lg").await;
        Ok(title.inner_text().await?)
    }

    /// Value cell of the confirmation row labeled `label`.
    pub async fn submitted_value(&self, label: &str) -> Result<String> {
        let cell = self
            .page
            .locator(&format!(
                r#".modal-content tr:has(td:text-is("{label}")) td:nth-of-type(2)"#
            ))
            .await;
        Ok(cell.inner_text().await?)
    }

    pub async fn close_modal(&self) -> Result<()> {
        let close = self.page.locator("#closeLargeModal").await;
        close.click(None).await?;
        Ok(())
    }

    // Gender and hobby controls share the same label markup.
    async fn control_label(&self, text: &str) -> Locator {
        self.page
            .locator(&format!(r#".custom-control-label:text-is("{text}")"#))
            .await
    }
}

impl PageObject for PracticeFormPage {
    fn page(&self) -> &Page {
        &self.page
    }

    fn base(&self) -> &Url {
        &self.base
    }
}
