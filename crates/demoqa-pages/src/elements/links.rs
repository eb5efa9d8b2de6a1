// Links section
//
// LINK_ITEMS classifies every anchor on the page: navigation links open a
// new tab, api links fire a background request and report its status in the
// page's response banner. Dispatch is a table lookup; the driver owns the
// waiting.

use playwright_rs::{Page, expect};
use tracing::info;

use crate::base::PageObject;
use crate::error::{PageError, Result};
use crate::poll;

use super::ElementsPage;

/// What clicking a link does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Opens the target in a new tab.
    NewTab { expected_path: &'static str },
    /// Fires a request against `path` and reports its status in the banner.
    Api {
        path: &'static str,
        status: u16,
        status_text: &'static str,
    },
}

/// One anchor on the Links page.
#[derive(Debug, Clone, Copy)]
pub struct LinkItem {
    pub key: &'static str,
    pub id: &'static str,
    pub kind: LinkKind,
}

/// Every link the suite drives.
pub const LINK_ITEMS: &[LinkItem] = &[
    LinkItem {
        key: "Home",
        id: "simpleLink",
        kind: LinkKind::NewTab { expected_path: "/" },
    },
    LinkItem {
        key: "DynamicHome",
        id: "dynamicLink",
        kind: LinkKind::NewTab { expected_path: "/" },
    },
    LinkItem {
        key: "Created",
        id: "created",
        kind: LinkKind::Api {
            path: "/created",
            status: 201,
            status_text: "Created",
        },
    },
    LinkItem {
        key: "NoContent",
        id: "no-content",
        kind: LinkKind::Api {
            path: "/no-content",
            status: 204,
            status_text: "No Content",
        },
    },
    LinkItem {
        key: "Moved",
        id: "moved",
        kind: LinkKind::Api {
            path: "/moved",
            status: 301,
            status_text: "Moved Permanently",
        },
    },
    LinkItem {
        key: "BadRequest",
        id: "bad-request",
        kind: LinkKind::Api {
            path: "/bad-request",
            status: 400,
            status_text: "Bad Request",
        },
    },
    LinkItem {
        key: "Unauthorized",
        id: "unauthorized",
        kind: LinkKind::Api {
            path: "/unauthorized",
            status: 401,
            status_text: "Unauthorized",
        },
    },
    LinkItem {
        key: "Forbidden",
        id: "forbidden",
        kind: LinkKind::Api {
            path: "/forbidden",
            status: 403,
            status_text: "Forbidden",
        },
    },
    LinkItem {
        key: "NotFound",
        id: "invalid-url",
        kind: LinkKind::Api {
            path: "/invalid-url",
            status: 404,
            status_text: "Not Found",
        },
    },
];

/// Looks up a link by key.
pub fn link_item(key: &str) -> Result<&'static LinkItem> {
    LINK_ITEMS
        .iter()
        .find(|item| item.key == key)
        .ok_or_else(|| PageError::UnknownLink(key.to_string()))
}

/// What the click produced.
pub enum LinkOutcome {
    /// The tab the link opened, already navigated off about:blank.
    NewTab(Page),
    /// The status the response banner reported.
    Api {
        status: u16,
        status_text: &'static str,
    },
}

impl std::fmt::Debug for LinkOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkOutcome::NewTab(_) => f.debug_tuple("NewTab").field(&"Page").finish(),
            LinkOutcome::Api {
                status,
                status_text,
            } => f
                .debug_struct("Api")
                .field("status", status)
                .field("status_text", status_text)
                .finish(),
        }
    }
}

impl ElementsPage {
    /// Clicks a link by key and resolves its outcome per the table entry.
    pub async fn click_link(&self, key: &str) -> Result<LinkOutcome> {
        let item = link_item(key)?;
        let anchor = self.page.locator(&format!("#{}", item.id)).await;

        match item.kind {
            LinkKind::NewTab { .. } => {
                let context = self.page.context()?;
                let before = context.pages().len();
                self.click_with_cleanup(&anchor).await?;
                let tab = poll::wait_for_new_page(&context, before).await?;
                poll::wait_for_page_ready(&tab).await?;
                info!(key, url = %tab.url(), "link opened a new tab");
                Ok(LinkOutcome::NewTab(tab))
            }
            LinkKind::Api {
                status,
                status_text,
                ..
            } => {
                self.click_with_cleanup(&anchor).await?;
                let banner = self.page.locator("#linkResponse").await;
                expect(banner.clone())
                    .to_contain_text(&status.to_string())
                    .await?;
                expect(banner).to_contain_text(status_text).await?;
                info!(key, status, "api link responded");
                Ok(LinkOutcome::Api {
                    status,
                    status_text,
                })
            }
        }
    }

    /// Probes the link's target directly and returns the wire status code.
    /// Redirects are not followed, so 3xx statuses come back as-is.
    pub async fn probe_link(&self, key: &str) -> Result<u16> {
        let item = link_item(key)?;
        let path = match item.kind {
            LinkKind::NewTab { expected_path } => expected_path,
            LinkKind::Api { path, .. } => path,
        };
        let target = self.base().join(path)?;
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        let response = client.get(target).send().await?;
        Ok(response.status().as_u16())
    }
}
