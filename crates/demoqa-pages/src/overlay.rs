// Overlay cleanup for the practice site
//
// The site layers a fixed ad banner, a tall footer and leftover modal
// backdrops over the content, which intercept pointer events aimed at the
// controls underneath. Stripping them before interacting keeps clicks landing
// where the locators point.

use playwright_rs::Page;

use crate::error::Result;

const CLEANUP_SCRIPT: &str = r#"
    (() => {
        const selectors = [
            '#fixedban',
            'footer',
            '.modal-backdrop',
            'div[class*="modal-backdrop"]',
        ];
        for (const sel of selectors) {
            for (const el of document.querySelectorAll(sel)) {
                el.remove();
            }
        }
        document.body.classList.remove('modal-open');
        document.body.style.removeProperty('padding-right');
        document.body.style.removeProperty('overflow');
    })()
"#;

/// Removes the site's fixed overlays from the current document.
pub async fn remove_fixed_overlays(page: &Page) -> Result<()> {
    page.evaluate_expression(CLEANUP_SCRIPT).await?;
    Ok(())
}
