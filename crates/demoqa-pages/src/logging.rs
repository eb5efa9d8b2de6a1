// Logging setup shared by examples and the e2e test binaries

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the tracing subscriber once per process.
///
/// Honors `RUST_LOG`; defaults to info for this suite and warn for the
/// driver, which is chatty at debug level.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("demoqa_pages=info,demoqa_e2e=info,playwright_rs=warn")
            });

        // try_init: another harness may have installed a subscriber already
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
