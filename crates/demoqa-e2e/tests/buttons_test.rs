// Buttons scenario

mod common;

use common::Suite;
use demoqa_pages::{ButtonKind, ElementsPage, PageError, PageObject};

#[tokio::test]
async fn each_gesture_produces_its_message() {
    let suite = Suite::launch().await;
    let page = suite.new_page().await;
    let elements = ElementsPage::new(page, suite.base.clone());
    elements
        .open("/elements")
        .await
        .expect("Failed to open elements");
    elements
        .navigate_to("Buttons")
        .await
        .expect("Failed to navigate");

    let message = elements
        .click_button(ButtonKind::Double)
        .await
        .expect("Failed to double click");
    assert_eq!(message, "You have done a double click");

    let message = elements
        .click_button(ButtonKind::Right)
        .await
        .expect("Failed to right click");
    assert_eq!(message, "You have done a right click");

    let message = elements
        .click_button(ButtonKind::Dynamic)
        .await
        .expect("Failed to click the dynamic button");
    assert_eq!(message, "You have done a dynamic click");

    suite.close().await;
}

#[tokio::test]
async fn string_dispatch_matches_the_enum() {
    let suite = Suite::launch().await;
    let page = suite.new_page().await;
    let elements = ElementsPage::new(page, suite.base.clone());
    elements
        .open("/elements")
        .await
        .expect("Failed to open elements");
    elements
        .navigate_to("Buttons")
        .await
        .expect("Failed to navigate");

    let message = elements
        .click_button_named("double")
        .await
        .expect("Failed to dispatch by name");
    assert_eq!(message, "You have done a double click");

    let err = elements
        .click_button_named("middle")
        .await
        .expect_err("an unknown name must not click anything");
    assert!(matches!(err, PageError::UnknownButton(ref name) if name == "middle"));

    suite.close().await;
}
