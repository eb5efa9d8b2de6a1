// Sidebar navigation dispatch
//
// Every menu entry must be reachable through the table, and an unknown key
// must fail with the typed lookup error rather than a driver timeout.

mod common;

use std::time::Duration;

use common::Suite;
use demoqa_pages::{ElementsPage, MENU_ITEMS, MenuGroup, PageError, PageObject};

#[tokio::test]
async fn every_elements_entry_is_reachable() {
    let suite = Suite::launch().await;

    for item in MENU_ITEMS.iter().filter(|i| i.group == MenuGroup::Elements) {
        let page = suite.new_page().await;
        let elements = ElementsPage::new(page, suite.base.clone());
        elements
            .open("/elements")
            .await
            .expect("Failed to open elements");

        let navigated = elements
            .navigate_to(item.key)
            .await
            .expect("Failed to navigate");

        // The click kicks off a navigation; give it a beat to land.
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(
            elements.page().url().ends_with(navigated.path),
            "expected url ending in {} for {}, got {}",
            navigated.path,
            item.key,
            elements.page().url()
        );

        elements.page().close().await.expect("Failed to close page");
    }

    suite.close().await;
}

#[tokio::test]
async fn practice_form_entry_is_reachable() {
    let suite = Suite::launch().await;
    let page = suite.new_page().await;
    let elements = ElementsPage::new(page, suite.base.clone());
    elements.open("/forms").await.expect("Failed to open forms");

    let navigated = elements
        .navigate_to("PracticeForm")
        .await
        .expect("Failed to navigate");

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(elements.page().url().ends_with(navigated.path));

    suite.close().await;
}

#[tokio::test]
async fn unknown_menu_key_is_rejected() {
    let suite = Suite::launch().await;
    let page = suite.new_page().await;
    let elements = ElementsPage::new(page, suite.base.clone());
    elements
        .open("/elements")
        .await
        .expect("Failed to open elements");

    let err = elements
        .navigate_to("Accordion")
        .await
        .expect_err("unknown key must not navigate");
    assert!(matches!(err, PageError::UnknownMenuItem(ref key) if key == "Accordion"));

    suite.close().await;
}
