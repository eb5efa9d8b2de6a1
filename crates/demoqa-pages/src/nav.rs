// Sidebar menu navigation
//
// The practice site groups its pages under collapsible sidebar cards. Each
// entry a test may visit has a row in MENU_ITEMS; navigation is a table
// lookup followed by one click on the list item whose label matches exactly.

use playwright_rs::Page;
use tracing::info;

use crate::error::{PageError, Result};

/// Sidebar card an entry lives under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuGroup {
    Elements,
    Forms,
}

/// One sidebar entry: lookup key, visible label, and the path the site
/// navigates to when the entry is clicked.
#[derive(Debug, Clone, Copy)]
pub struct MenuItem {
    pub key: &'static str,
    pub label: &'static str,
    pub path: &'static str,
    pub group: MenuGroup,
}

/// Every sidebar entry the suite drives.
pub const MENU_ITEMS: &[MenuItem] = &[
    MenuItem {
        key: "TextBox",
        label: "Text Box",
        path: "/text-box",
        group: MenuGroup::Elements,
    },
    MenuItem {
        key: "CheckBox",
        label: "Check Box",
        path: "/checkbox",
        group: MenuGroup::Elements,
    },
    MenuItem {
        key: "RadioButton",
        label: "Radio Button",
        path: "/radio-button",
        group: MenuGroup::Elements,
    },
    MenuItem {
        key: "WebTables",
        label: "Web Tables",
        path: "/webtables",
        group: MenuGroup::Elements,
    },
    MenuItem {
        key: "Buttons",
        label: "Buttons",
        path: "/buttons",
        group: MenuGroup::Elements,
    },
    MenuItem {
        key: "Links",
        label: "Links",
        path: "/links",
        group: MenuGroup::Elements,
    },
    MenuItem {
        key: "BrokenLinks",
        label: "Broken Links - Images",
        path: "/broken",
        group: MenuGroup::Elements,
    },
    MenuItem {
        key: "UploadDownload",
        label: "Upload and Download",
        path: "/upload-download",
        group: MenuGroup::Elements,
    },
    MenuItem {
        key: "DynamicProperties",
        label: "Dynamic Properties",
        path: "/dynamic-properties",
        group: MenuGroup::Elements,
    },
    MenuItem {
        key: "PracticeForm",
        label: "Practice Form",
        path: "/practice-form",
        group: MenuGroup::Forms,
    },
];

/// Looks up a menu entry by key.
pub fn menu_item(key: &str) -> Result<&'static MenuItem> {
    MENU_ITEMS
        .iter()
        .find(|item| item.key == key)
        .ok_or_else(|| PageError::UnknownMenuItem(key.to_string()))
}

/// Clicks the sidebar list item whose visible text matches the entry's label
/// exactly. `:text-is()` keeps "Text Box" from also matching entries that
/// merely contain the words.
pub(crate) async fn click_menu_entry(page: &Page, item: &MenuItem) -> Result<()> {
    info!(label = item.label, path = item.path, "navigating via sidebar");
    let entry = page
        .locator(&format!(r#"li:text-is("{}")"#, item.label))
        .await;
    entry.click(None).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_resolves() {
        for item in MENU_ITEMS {
            let found = menu_item(item.key).expect("key in MENU_ITEMS must resolve");
            assert_eq!(found.label, item.label);
        }
    }

    #[test]
    fn unknown_key_is_typed_error() {
        let err = menu_item("NoSuchPage").unwrap_err();
        assert!(matches!(err, PageError::UnknownMenuItem(ref k) if k == "NoSuchPage"));
    }

    #[test]
    fn paths_are_rooted_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for item in MENU_ITEMS {
            assert!(item.path.starts_with('/'), "{} path must be rooted", item.key);
            assert!(seen.insert(item.path), "{} path duplicated", item.key);
        }
    }
}
