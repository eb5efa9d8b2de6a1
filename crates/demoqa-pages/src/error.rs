// Error types for the page-object layer

use thiserror::Error;

/// Result type alias for page-object operations
pub type Result<T> = std::result::Result<T, PageError>;

/// Errors that can occur while driving the practice site.
///
/// Driver-level failures (timeouts, closed targets, missing elements) pass
/// through as [`PageError::Driver`]; the remaining variants are the failures
/// this layer owns: unknown table keys and exhausted bounded waits.
#[derive(Debug, Error)]
pub enum PageError {
    /// A navigation key not present in the menu table
    #[error("Page '{0}' not found in the menu table")]
    UnknownMenuItem(String),

    /// A link key not present in the link table
    #[error("Link '{0}' not found in the link table")]
    UnknownLink(String),

    /// A button name with no dispatch entry
    #[error("Invalid button type: '{0}' (expected 'double', 'right' or 'dynamic')")]
    UnknownButton(String),

    /// The checkbox tree stayed collapsed through every expand attempt
    #[error("Checkbox tree did not expand after {attempts} attempts")]
    TreeNotExpanded { attempts: usize },

    /// No table row carried the given email
    #[error("No table row contains '{email}'")]
    RowNotFound { email: String },

    /// No new tab appeared within the polling deadline
    #[error("No new tab opened within {waited_ms}ms")]
    NewTabTimeout { waited_ms: u64 },

    /// The download event never fired within the polling deadline
    #[error("No download captured within {waited_ms}ms")]
    DownloadTimeout { waited_ms: u64 },

    /// An element was missing an attribute the wrapper needs
    #[error("Element '{selector}' has no '{attribute}' attribute")]
    MissingAttribute {
        selector: String,
        attribute: String,
    },

    /// Browser automation driver error
    #[error(transparent)]
    Driver(#[from] playwright_rs::Error),

    /// Wire-level HTTP check failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Base URL or href could not be parsed/joined
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}
