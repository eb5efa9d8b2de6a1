// Shared scenario harness
//
// Starts the fixture server (unless DEMOQA_BASE_URL points the suite at an
// external deployment), launches chromium per the suite configuration, and
// opens a context with downloads accepted.

// Note: Functions appear "unused" because each test binary compiles
// separately, but they ARE used across multiple test files.
#![allow(dead_code)]

use demoqa_e2e::fixture::FixtureServer;
use demoqa_pages::SuiteConfig;
use playwright_rs::{
    Browser, BrowserContext, BrowserContextOptions, LaunchOptions, Page, Playwright,
};
use url::Url;

pub fn init_tracing() {
    demoqa_pages::init_tracing();
}

/// One launched browser against one base URL, shared by a test body.
pub struct Suite {
    pub base: Url,
    server: Option<FixtureServer>,
    // Kept alive for the duration of the suite; dropping it tears down the
    // driver connection under the browser.
    playwright: Playwright,
    browser: Browser,
    context: BrowserContext,
}

impl Suite {
    pub async fn launch() -> Self {
        init_tracing();
        let config = SuiteConfig::from_env();

        let (server, base_url) = match &config.base_url {
            Some(url) => (None, url.clone()),
            None => {
                let server = FixtureServer::start().await;
                let url = server.url();
                (Some(server), url)
            }
        };
        let base = Url::parse(&base_url).expect("base URL must parse");

        let playwright = Playwright::launch()
            .await
            .expect("Failed to launch Playwright");

        let mut options = LaunchOptions::default().headless(!config.headed);
        if let Some(slow_mo) = config.slow_mo_ms {
            options = options.slow_mo(slow_mo);
        }
        let browser = playwright
            .chromium()
            .launch_with_options(options)
            .await
            .expect("Failed to launch browser");

        let context = browser
            .new_context_with_options(
                BrowserContextOptions::builder()
                    .accept_downloads(true)
                    .build(),
            )
            .await
            .expect("Failed to create context");

        Suite {
            base,
            server,
            playwright,
            browser,
            context,
        }
    }

    pub fn context(&self) -> &BrowserContext {
        &self.context
    }

    pub async fn new_page(&self) -> Page {
        self.context
            .new_page()
            .await
            .expect("Failed to create page")
    }

    pub async fn close(self) {
        self.browser.close().await.expect("Failed to close browser");
        if let Some(server) = self.server {
            server.shutdown();
        }
    }
}
