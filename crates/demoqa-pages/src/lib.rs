//! demoqa-pages: Page objects for the DemoQA practice site.
//!
//! Thin wrappers over the `playwright-rs` driver: declarative locator maps,
//! table-driven navigation and link dispatch, and a handful of bounded waits.
//! All element interaction, auto-waiting and event handling is the driver's.
//!
//! # Example
//!
//! ```ignore
//! use demoqa_pages::{ElementsPage, PageObject};
//! use playwright_rs::Playwright;
//! use url::Url;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let playwright = Playwright::launch().await?;
//!     let browser = playwright.chromium().launch().await?;
//!     let page = browser.new_page().await?;
//!
//!     let base = Url::parse("https://demoqa.com/")?;
//!     let elements = ElementsPage::new(page, base);
//!     elements.open("/elements").await?;
//!
//!     let item = elements.navigate_to("TextBox").await?;
//!     assert!(elements.page().url().ends_with(item.path));
//!
//!     browser.close().await?;
//!     Ok(())
//! }
//! ```

mod base;
mod config;
mod elements;
mod error;
mod forms;
mod logging;
mod nav;
mod overlay;
mod poll;
mod records;

pub use base::PageObject;
pub use config::SuiteConfig;
pub use elements::{
    BROKEN_IMAGE, BROKEN_LINK, ButtonKind, ElementsPage, LINK_ITEMS, LinkItem, LinkKind,
    LinkOutcome, VALID_IMAGE, VALID_LINK, link_item,
};
pub use error::{PageError, Result};
pub use forms::PracticeFormPage;
pub use logging::init_tracing;
pub use nav::{MENU_ITEMS, MenuGroup, MenuItem, menu_item};
pub use overlay::remove_fixed_overlays;
pub use records::{
    PracticeFormRecord, Records, RegistrationRecord, TextBoxEntry, records,
};
