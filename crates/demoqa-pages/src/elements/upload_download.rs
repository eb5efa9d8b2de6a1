// Upload and Download section

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use playwright_rs::protocol::Download;
use tracing::info;

use crate::base::PageObject;
use crate::error::{PageError, Result};
use crate::poll;

use super::ElementsPage;

impl ElementsPage {
    /// Uploads a file through the section's file input.
    pub async fn upload(&self, file: &Path) -> Result<()> {
        let input = self.page.locator("#uploadFile").await;
        input.set_input_files(&file.to_path_buf(), None).await?;
        Ok(())
    }

    /// The path the page echoes back after an upload.
    pub async fn uploaded_file_path(&self) -> Result<String> {
        let echoed = self.page.locator("#uploadedFilePath").await;
        Ok(echoed.inner_text().await?)
    }

    /// Clicks the download control and saves the captured download under
    /// `dir`, returning the saved path. The handler is registered before
    /// the click so the event cannot be missed.
    pub async fn download_to(&self, dir: &Path) -> Result<PathBuf> {
        let captured: Arc<Mutex<Option<Download>>> = Arc::new(Mutex::new(None));
        let slot = Arc::clone(&captured);
        self.page
            .on_download(move |download| {
                let slot = Arc::clone(&slot);
                async move {
                    *slot.lock().unwrap() = Some(download);
                    Ok(())
                }
            })
            .await?;

        let button = self.page.locator("#downloadButton").await;
        self.click_with_cleanup(&button).await?;

        let download = poll::poll_for(poll::DOWNLOAD_TIMEOUT_MS, || {
            captured.lock().unwrap().take()
        })
        .await
        .ok_or(PageError::DownloadTimeout {
            waited_ms: poll::DOWNLOAD_TIMEOUT_MS,
        })?;

        let target = dir.join(download.suggested_filename());
        download.save_as(&target).await?;
        info!(path = %target.display(), "download saved");
        Ok(target)
    }
}
