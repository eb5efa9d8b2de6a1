// Check Box scenario
//
// The tree mounts asynchronously; expand_all() is the one wrapper in the
// suite with a retry loop, and these scenarios exercise it both ways.

mod common;

use common::Suite;
use demoqa_pages::{ElementsPage, PageObject};

#[tokio::test]
async fn selecting_nodes_lists_their_subtrees() {
    let suite = Suite::launch().await;
    let page = suite.new_page().await;
    let elements = ElementsPage::new(page, suite.base.clone());
    elements
        .open("/elements")
        .await
        .expect("Failed to open elements");
    elements
        .navigate_to("CheckBox")
        .await
        .expect("Failed to navigate");

    elements.expand_all().await.expect("Failed to expand tree");
    elements
        .select_desktop()
        .await
        .expect("Failed to select desktop");
    elements
        .select_react()
        .await
        .expect("Failed to select react");
    elements
        .select_downloads()
        .await
        .expect("Failed to select downloads");

    let results = elements
        .checkbox_results()
        .await
        .expect("Failed to read results");
    assert!(results.contains("You have selected"), "got '{results}'");
    for node in [
        "desktop", "notes", "commands", "react", "downloads", "wordFile", "excelFile",
    ] {
        assert!(results.contains(node), "'{node}' missing from '{results}'");
    }

    suite.close().await;
}

#[tokio::test]
async fn collapse_hides_the_inner_nodes() {
    let suite = Suite::launch().await;
    let page = suite.new_page().await;
    let elements = ElementsPage::new(page, suite.base.clone());
    elements
        .open("/elements")
        .await
        .expect("Failed to open elements");
    elements
        .navigate_to("CheckBox")
        .await
        .expect("Failed to navigate");

    elements.expand_all().await.expect("Failed to expand tree");
    let desktop = elements
        .page()
        .locator(r#"label[for="tree-node-desktop"]"#)
        .await;
    assert!(
        desktop.is_visible().await.expect("Failed to check state"),
        "desktop node should be visible after expand"
    );

    elements
        .collapse_all()
        .await
        .expect("Failed to collapse tree");
    assert!(
        !desktop.is_visible().await.expect("Failed to check state"),
        "desktop node should be hidden after collapse"
    );

    suite.close().await;
}

#[tokio::test]
async fn results_start_empty() {
    let suite = Suite::launch().await;
    let page = suite.new_page().await;
    let elements = ElementsPage::new(page, suite.base.clone());
    elements
        .open("/elements")
        .await
        .expect("Failed to open elements");
    elements
        .navigate_to("CheckBox")
        .await
        .expect("Failed to navigate");

    let results = elements
        .checkbox_results()
        .await
        .expect("Failed to read results");
    assert!(results.trim().is_empty(), "got '{results}'");

    suite.close().await;
}
