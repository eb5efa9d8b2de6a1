// Upload and Download scenario

mod common;

use common::Suite;
use demoqa_pages::{ElementsPage, PageObject};

#[tokio::test]
async fn uploaded_file_name_is_echoed() {
    let suite = Suite::launch().await;
    let page = suite.new_page().await;
    let elements = ElementsPage::new(page, suite.base.clone());
    elements
        .open("/elements")
        .await
        .expect("Failed to open elements");
    elements
        .navigate_to("UploadDownload")
        .await
        .expect("Failed to navigate");

    let dir = tempfile::tempdir().expect("Failed to create a temp dir");
    let file = dir.path().join("upload_me.txt");
    std::fs::write(&file, b"fixture upload payload").expect("Failed to write the upload file");

    elements.upload(&file).await.expect("Failed to upload");

    let echoed = elements
        .uploaded_file_path()
        .await
        .expect("Failed to read the echoed path");
    assert!(echoed.contains("upload_me.txt"), "got '{echoed}'");

    suite.close().await;
}

#[tokio::test]
async fn download_saves_the_attachment() {
    let suite = Suite::launch().await;
    let page = suite.new_page().await;
    let elements = ElementsPage::new(page, suite.base.clone());
    elements
        .open("/elements")
        .await
        .expect("Failed to open elements");
    elements
        .navigate_to("UploadDownload")
        .await
        .expect("Failed to navigate");

    let dir = tempfile::tempdir().expect("Failed to create a temp dir");
    let saved = elements
        .download_to(dir.path())
        .await
        .expect("Failed to download");

    assert_eq!(
        saved.file_name().and_then(|n| n.to_str()),
        Some("sampleFile.jpeg")
    );
    let metadata = std::fs::metadata(&saved).expect("Saved file must exist");
    assert!(metadata.len() > 0, "the download must not be empty");

    suite.close().await;
}
