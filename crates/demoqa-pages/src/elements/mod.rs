// Elements page object
//
// One struct covering the nine cards of the site's Elements group. The impl
// is split per section; every method chains one or two driver calls except
// the two bounded loops (tree expansion, new-tab wait).

mod broken;
mod buttons;
mod check_box;
mod dynamic;
mod links;
mod radio;
mod text_box;
mod upload_download;
mod web_tables;

pub use broken::{BROKEN_IMAGE, BROKEN_LINK, VALID_IMAGE, VALID_LINK};
pub use buttons::ButtonKind;
pub use links::{LINK_ITEMS, LinkItem, LinkKind, LinkOutcome, link_item};

use playwright_rs::Page;
use url::Url;

use crate::base::PageObject;
use crate::error::Result;
use crate::nav::{self, MenuItem, menu_item};

/// Page object for the Elements group of the practice site.
pub struct ElementsPage {
    page: Page,
    base: Url,
}

impl ElementsPage {
    pub fn new(page: Page, base: Url) -> Self {
        Self { page, base }
    }

    /// Navigates to a sidebar entry by key and returns its table row so the
    /// caller can assert the URL suffix.
    pub async fn navigate_to(&self, key: &str) -> Result<&'static MenuItem> {
        let item = menu_item(key)?;
        nav::click_menu_entry(&self.page, item).await?;
        Ok(item)
    }
}

impl PageObject for ElementsPage {
    fn page(&self) -> &Page {
        &self.page
    }

    fn base(&self) -> &Url {
        &self.base
    }
}
