// Text Box scenario

mod common;

use common::Suite;
use demoqa_pages::{ElementsPage, PageObject, records};

#[tokio::test]
async fn submitted_values_echo_in_the_output_panel() {
    let suite = Suite::launch().await;
    let page = suite.new_page().await;
    let elements = ElementsPage::new(page, suite.base.clone());
    elements
        .open("/elements")
        .await
        .expect("Failed to open elements");
    elements
        .navigate_to("TextBox")
        .await
        .expect("Failed to navigate");

    let entry = &records().text_box;
    elements
        .fill_text_box(entry)
        .await
        .expect("Failed to fill text box");

    let name = elements.output_name().await.expect("Failed to read name");
    assert!(name.contains(&entry.full_name), "got '{name}'");

    let email = elements.output_email().await.expect("Failed to read email");
    assert!(email.contains(&entry.email), "got '{email}'");

    let current = elements
        .output_current_address()
        .await
        .expect("Failed to read current address");
    assert!(current.contains(&entry.current_address), "got '{current}'");

    let permanent = elements
        .output_permanent_address()
        .await
        .expect("Failed to read permanent address");
    assert!(
        permanent.contains(&entry.permanent_address),
        "got '{permanent}'"
    );

    suite.close().await;
}
