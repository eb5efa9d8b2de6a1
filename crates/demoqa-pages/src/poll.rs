// Bounded polling helpers
//
// The driver has no page-open or download-complete future to await, so the
// two places that need one poll driver state on a deadline instead. Both
// loops are bounded and surface their bound in the error.

use std::time::Duration;

use playwright_rs::{BrowserContext, Page};
use tracing::debug;

use crate::error::{PageError, Result};

/// How long to wait for a new tab to appear in the context.
pub(crate) const NEW_TAB_TIMEOUT_MS: u64 = 10_000;

/// How long to wait for a registered download handler to fire.
pub(crate) const DOWNLOAD_TIMEOUT_MS: u64 = 10_000;

const POLL_INTERVAL_MS: u64 = 100;

/// Polls `probe` until it yields a value or the deadline passes.
pub(crate) async fn poll_for<T, F>(deadline_ms: u64, mut probe: F) -> Option<T>
where
    F: FnMut() -> Option<T>,
{
    let start = std::time::Instant::now();
    loop {
        if let Some(value) = probe() {
            return Some(value);
        }
        if start.elapsed() >= Duration::from_millis(deadline_ms) {
            return None;
        }
        tokio::time::sleep(Duration::from_millis(POLL_INTERVAL_MS)).await;
    }
}

/// Waits for the context to hold more pages than `pages_before` and returns
/// the newest one. Call with the page count taken before the click that
/// opens the tab.
pub(crate) async fn wait_for_new_page(
    context: &BrowserContext,
    pages_before: usize,
) -> Result<Page> {
    let start = std::time::Instant::now();
    loop {
        let mut pages = context.pages();
        if pages.len() > pages_before {
            debug!(open = pages.len(), "new tab appeared");
            // Pages are reported in creation order; the tab we raced is last.
            if let Some(page) = pages.pop() {
                return Ok(page);
            }
        }
        if start.elapsed() >= Duration::from_millis(NEW_TAB_TIMEOUT_MS) {
            return Err(PageError::NewTabTimeout {
                waited_ms: NEW_TAB_TIMEOUT_MS,
            });
        }
        tokio::time::sleep(Duration::from_millis(POLL_INTERVAL_MS)).await;
    }
}

/// Waits for a freshly opened tab to navigate away from about:blank.
pub(crate) async fn wait_for_page_ready(page: &Page) -> Result<()> {
    let start = std::time::Instant::now();
    while page.url() == "about:blank" {
        if start.elapsed() >= Duration::from_millis(NEW_TAB_TIMEOUT_MS) {
            return Err(PageError::NewTabTimeout {
                waited_ms: NEW_TAB_TIMEOUT_MS,
            });
        }
        tokio::time::sleep(Duration::from_millis(POLL_INTERVAL_MS)).await;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn poll_for_returns_immediately_on_hit() {
        let value = poll_for(1_000, || Some(42)).await;
        assert_eq!(value, Some(42));
    }

    #[tokio::test]
    async fn poll_for_gives_up_after_deadline() {
        let value: Option<()> = poll_for(250, || None).await;
        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn poll_for_sees_late_value() {
        let mut calls = 0;
        let value = poll_for(2_000, || {
            calls += 1;
            (calls >= 3).then_some("ready")
        })
        .await;
        assert_eq!(value, Some("ready"));
    }
}
