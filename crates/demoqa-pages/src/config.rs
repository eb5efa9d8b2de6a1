// Environment-driven suite configuration

/// Suite configuration resolved from the environment.
///
/// All knobs are optional; the defaults drive a headless browser against the
/// in-process fixture server.
///
/// - `DEMOQA_BASE_URL` — run against an external deployment instead of the
///   fixture server (e.g. `https://demoqa.com`)
/// - `DEMOQA_HEADED` — any non-empty value launches a visible browser window
/// - `DEMOQA_SLOW_MO_MS` — per-action delay in milliseconds, for debugging
#[derive(Debug, Clone, Default)]
pub struct SuiteConfig {
    /// External base URL; `None` means "use the fixture server"
    pub base_url: Option<String>,
    /// Launch the browser with a visible window
    pub headed: bool,
    /// Driver slow-motion delay in milliseconds
    pub slow_mo_ms: Option<f64>,
}

impl SuiteConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        let base_url = std::env::var("DEMOQA_BASE_URL")
            .ok()
            .filter(|v| !v.is_empty());

        let headed = std::env::var("DEMOQA_HEADED")
            .map(|v| !v.is_empty())
            .unwrap_or(false);

        let slow_mo_ms = std::env::var("DEMOQA_SLOW_MO_MS")
            .ok()
            .and_then(|v| v.parse::<f64>().ok());

        Self {
            base_url,
            headed,
            slow_mo_ms,
        }
    }
}
