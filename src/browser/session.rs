//! Headless Chrome session behind a capability trait.

use crate::config::Config;
use crate::error::ScrapeError;
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::Page;
use futures_util::StreamExt;
use std::path::Path;
use tempfile::TempDir;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Capability handle for the one live page - enables scripted drivers
/// in tests.
#[async_trait]
pub trait PageDriver: Send + Sync {
    /// Loads a URL. Does not wait for the page to finish rendering;
    /// callers poll [`super::wait_page_ready`] for that.
    async fn navigate(&self, url: &str) -> Result<(), ScrapeError>;

    /// Returns the page's `document.readyState`.
    async fn ready_state(&self) -> Result<String, ScrapeError>;

    /// Returns the rendered text of every element whose class attribute
    /// contains `fragment`, in document order.
    async fn texts_by_class_fragment(&self, fragment: &str) -> Result<Vec<String>, ScrapeError>;

    /// Shuts the browser down. Best-effort and idempotent.
    async fn close(&mut self);
}

/// A live Chrome process with a single page, reused for every navigation.
pub struct ChromeSession {
    browser: Option<Browser>,
    page: Page,
    handler_task: JoinHandle<()>,
    // Keep the per-run temp dirs alive for the session's lifetime.
    _profile_dir: TempDir,
    _data_dir: TempDir,
    _cache_dir: TempDir,
}

impl ChromeSession {
    /// Launches headless Chrome with an isolated per-run profile.
    pub async fn launch(config: &Config) -> Result<Self, ScrapeError> {
        let profile_dir = launch_temp_dir("profile")?;
        let data_dir = launch_temp_dir("data")?;
        let cache_dir = launch_temp_dir("cache")?;

        let browser_config =
            build_browser_config(config, profile_dir.path(), data_dir.path(), cache_dir.path())
                .map_err(ScrapeError::Launch)?;

        info!("Launching browser (headless: {})", config.headless);

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| ScrapeError::Launch(e.to_string()))?;

        // Drain CDP events for the lifetime of the session; event errors are
        // protocol noise, not scrape failures.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!("browser handler event error: {e}");
                }
            }
        });

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| ScrapeError::Launch(e.to_string()))?;

        Ok(Self {
            browser: Some(browser),
            page,
            handler_task,
            _profile_dir: profile_dir,
            _data_dir: data_dir,
            _cache_dir: cache_dir,
        })
    }
}

#[async_trait]
impl PageDriver for ChromeSession {
    async fn navigate(&self, url: &str) -> Result<(), ScrapeError> {
        self.page.goto(url).await.map_err(|e| ScrapeError::Navigation {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(())
    }

    async fn ready_state(&self) -> Result<String, ScrapeError> {
        let result = self
            .page
            .evaluate("document.readyState")
            .await
            .map_err(|e| ScrapeError::Evaluation(e.to_string()))?;

        result
            .into_value()
            .map_err(|e| ScrapeError::Evaluation(format!("unexpected readyState value: {e}")))
    }

    async fn texts_by_class_fragment(&self, fragment: &str) -> Result<Vec<String>, ScrapeError> {
        let result = self
            .page
            .evaluate(element_texts_js(fragment))
            .await
            .map_err(|e| ScrapeError::Evaluation(e.to_string()))?;

        result
            .into_value()
            .map_err(|e| ScrapeError::Evaluation(format!("unexpected element text list: {e}")))
    }

    async fn close(&mut self) {
        if let Some(mut browser) = self.browser.take() {
            if let Err(e) = browser.close().await {
                warn!("failed to close browser cleanly: {e}");
            }
            if let Err(e) = browser.wait().await {
                debug!("browser did not exit cleanly: {e}");
            }
            self.handler_task.abort();
        }
    }
}

/// The fixed launch flag set: sandbox off, GPU off, fixed window size,
/// isolated profile/data/cache dirs, JavaScript on, automation detection
/// countermeasures disabled.
fn build_browser_config(
    config: &Config,
    profile_dir: &Path,
    data_dir: &Path,
    cache_dir: &Path,
) -> Result<BrowserConfig, String> {
    let (width, height) = config.window_size;

    let mut builder = BrowserConfig::builder()
        .no_sandbox()
        .window_size(width, height)
        .user_data_dir(profile_dir)
        .arg("--disable-gpu")
        .arg("--disable-dev-shm-usage")
        .arg("--disable-blink-features=AutomationControlled")
        .arg("--enable-javascript")
        .arg(format!("--data-path={}", data_dir.display()))
        .arg(format!("--disk-cache-dir={}", cache_dir.display()));

    if !config.headless {
        builder = builder.with_head();
    }

    builder.build()
}

fn launch_temp_dir(purpose: &str) -> Result<TempDir, ScrapeError> {
    tempfile::tempdir()
        .map_err(|e| ScrapeError::Launch(format!("failed to create {purpose} dir: {e}")))
}

/// In-page query: all elements whose class attribute contains the fragment,
/// mapped to trimmed rendered text.
fn element_texts_js(class_fragment: &str) -> String {
    let fragment = class_fragment.replace('\\', "\\\\").replace('\'', "\\'");
    format!(
        "Array.from(document.querySelectorAll(\"[class*='{fragment}']\"))\
         .map(el => (el.innerText || '').trim())"
    )
}
