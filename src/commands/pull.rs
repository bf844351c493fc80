//! Pull command: fetch and log the spec table for every configured
//! product code.

use crate::browser::{wait_page_ready, ChromeSession, PageDriver, Readiness};
use crate::config::Config;
use crate::scrape::{pair_specs, selectors, SpecPair};
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::{info, warn};

/// Everything emitted for one product code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductReport {
    pub code: String,
    pub url: String,
    pub pairs: Vec<SpecPair>,
}

/// Executes the sequential pull over one browser session.
pub struct PullCommand {
    config: Config,
}

impl PullCommand {
    /// Creates a new pull command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Launches a browser session and pulls every configured code.
    pub async fn execute(&self) -> Result<Vec<ProductReport>> {
        let mut session =
            ChromeSession::launch(&self.config).await.context("Failed to launch browser")?;

        let result = self.execute_with_driver(&session).await;

        // Shut the browser down even when the pull failed.
        session.close().await;

        result
    }

    /// Pulls every configured code with a provided driver (for testing).
    ///
    /// Errors are not handled here; they propagate to the outermost handler
    /// in `main`.
    pub async fn execute_with_driver(
        &self,
        driver: &dyn PageDriver,
    ) -> Result<Vec<ProductReport>> {
        let interval = Duration::from_secs(self.config.wait_interval_secs);
        let max_wait = Duration::from_secs(self.config.max_wait_secs);
        let mut reports = Vec::with_capacity(self.config.product_codes.len());

        for code in &self.config.product_codes {
            let url = self.config.product_url(code);
            info!("PULLING INFO FOR: {} [{}]", code, url);

            driver.navigate(&url).await?;

            if wait_page_ready(driver, interval, max_wait).await == Readiness::TimedOut {
                warn!("page for {} never reported complete; scraping current state", code);
            }

            let labels = driver.texts_by_class_fragment(selectors::SPEC_LABEL_CLASS).await?;
            let values = driver.texts_by_class_fragment(selectors::SPEC_VALUE_CLASS).await?;

            let pairs = pair_specs(&labels, &values)
                .with_context(|| format!("Failed to pair spec cells for {}", code))?;

            for pair in &pairs {
                info!("{}: {}", pair.label, pair.value);
            }

            reports.push(ProductReport { code: code.clone(), url, pairs });
        }

        Ok(reports)
    }
}
