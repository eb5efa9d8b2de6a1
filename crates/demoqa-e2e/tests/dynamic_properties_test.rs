// Dynamic Properties scenario
//
// Everything on the page settles on a timer; the page-object waits are
// wider than the page's own delays, so these assertions are stable.

mod common;

use common::Suite;
use demoqa_pages::{ElementsPage, PageObject};

#[tokio::test]
async fn random_id_text_is_present() {
    let suite = Suite::launch().await;
    let page = suite.new_page().await;
    let elements = ElementsPage::new(page, suite.base.clone());
    elements
        .open("/elements")
        .await
        .expect("Failed to open elements");
    elements
        .navigate_to("DynamicProperties")
        .await
        .expect("Failed to navigate");

    let id = elements
        .random_id_text_id()
        .await
        .expect("Failed to read the random-id text");
    let id = id.expect("the text must be visible and carry an id");
    assert!(!id.is_empty());

    suite.close().await;
}

#[tokio::test]
async fn enable_after_button_becomes_enabled() {
    let suite = Suite::launch().await;
    let page = suite.new_page().await;
    let elements = ElementsPage::new(page, suite.base.clone());
    elements
        .open("/elements")
        .await
        .expect("Failed to open elements");
    elements
        .navigate_to("DynamicProperties")
        .await
        .expect("Failed to navigate");

    assert!(
        elements
            .enable_after_button_enabled()
            .await
            .expect("Failed to await the enable delay"),
        "the button must end up enabled"
    );

    suite.close().await;
}

#[tokio::test]
async fn color_change_shows_up_in_the_class_list() {
    let suite = Suite::launch().await;
    let page = suite.new_page().await;
    let elements = ElementsPage::new(page, suite.base.clone());
    elements
        .open("/elements")
        .await
        .expect("Failed to open elements");
    elements
        .navigate_to("DynamicProperties")
        .await
        .expect("Failed to navigate");

    // The page flips the class on a delay; wait it out before reading.
    tokio::time::sleep(std::time::Duration::from_secs(2)).await;
    let classes = elements
        .color_change_classes()
        .await
        .expect("Failed to read the class list");
    assert!(classes.contains("text-danger"), "got '{classes}'");

    suite.close().await;
}

#[tokio::test]
async fn visible_after_button_appears() {
    let suite = Suite::launch().await;
    let page = suite.new_page().await;
    let elements = ElementsPage::new(page, suite.base.clone());
    elements
        .open("/elements")
        .await
        .expect("Failed to open elements");
    elements
        .navigate_to("DynamicProperties")
        .await
        .expect("Failed to navigate");

    assert!(
        elements
            .visible_after_button_visible()
            .await
            .expect("Failed to await visibility"),
        "the button must show up within the wait window"
    );

    suite.close().await;
}
