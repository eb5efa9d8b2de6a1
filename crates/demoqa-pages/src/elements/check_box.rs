// Check Box section
//
// The tree mounts asynchronously. Clicking "Expand all" before the mount is
// a silent no-op, so expansion re-clicks until expanded nodes appear.

use std::time::Duration;

use tracing::debug;

use crate::error::{PageError, Result};

use super::ElementsPage;

const EXPAND_ATTEMPTS: usize = 5;
const EXPAND_SETTLE: Duration = Duration::from_millis(300);

impl ElementsPage {
    /// Expands the whole tree, retrying while the tree has not mounted yet.
    pub async fn expand_all(&self) -> Result<()> {
        let expand = self.page.locator(r#"button[title="Expand all"]"#).await;
        let expanded = self.page.locator("li.rct-node-expanded").await;

        for attempt in 1..=EXPAND_ATTEMPTS {
            expand.click(None).await?;
            tokio::time::sleep(EXPAND_SETTLE).await;
            if expanded.count().await? > 0 {
                debug!(attempt, "checkbox tree expanded");
                return Ok(());
            }
        }
        Err(PageError::TreeNotExpanded {
            attempts: EXPAND_ATTEMPTS,
        })
    }

    pub async fn collapse_all(&self) -> Result<()> {
        let collapse = self.page.locator(r#"button[title="Collapse all"]"#).await;
        collapse.click(None).await?;
        Ok(())
    }

    pub async fn select_desktop(&self) -> Result<()> {
        self.toggle_tree_node("desktop").await
    }

    pub async fn select_react(&self) -> Result<()> {
        self.toggle_tree_node("react").await
    }

    pub async fn select_downloads(&self) -> Result<()> {
        self.toggle_tree_node("downloads").await
    }

    async fn toggle_tree_node(&self, node: &str) -> Result<()> {
        let checkbox = self
            .page
            .locator(&format!(r#"label[for="tree-node-{node}"] .rct-checkbox"#))
            .await;
        checkbox.click(None).await?;
        Ok(())
    }

    /// Text of the selection summary under the tree.
    pub async fn checkbox_results(&self) -> Result<String> {
        let results = self.page.locator("#result").await;
        Ok(results.text_content().await?.unwrap_or_default())
    }
}
