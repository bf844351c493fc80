//! Error taxonomy for the scraper.

use std::path::PathBuf;

/// Errors that can occur while loading config, driving the browser,
/// or pairing scraped cell text.
///
/// None of these are handled locally; they propagate to the single
/// outermost handler in `main`.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to launch browser: {0}")]
    Launch(String),

    #[error("navigation to {url} failed: {reason}")]
    Navigation { url: String, reason: String },

    #[error("script evaluation failed: {0}")]
    Evaluation(String),

    #[error(
        "spec table mismatch: label at index {index} has no matching value \
         ({labels} labels, {values} values)"
    )]
    ValueIndexOutOfRange {
        index: usize,
        labels: usize,
        values: usize,
    },
}
