//! demoqa-e2e: fixture web application and end-to-end scenarios.
//!
//! The fixture reproduces the practice site's DOM contracts (element ids,
//! classes, and the small behaviors the scenarios exercise) so the suite
//! runs deterministic and offline. The scenarios live under `tests/` and
//! drive it through the `demoqa-pages` page objects.

pub mod fixture;
