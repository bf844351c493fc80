//! mcm-specs - Headless-Chrome CLI that pulls product spec tables from the
//! McMaster-Carr catalog.
//!
//! Navigates to each configured product page, polls until the document
//! reports ready, and logs the spec table as label/value pairs.

pub mod browser;
pub mod commands;
pub mod config;
pub mod error;
pub mod scrape;

pub use commands::{ProductReport, PullCommand};
pub use config::Config;
pub use error::ScrapeError;
pub use scrape::SpecPair;
