//! Bounded readiness poll for a navigated page.

use super::session::PageDriver;
use std::time::Duration;
use tracing::debug;

/// `document.readyState` value for a fully loaded page.
pub const READY_COMPLETE: &str = "complete";

/// Outcome of a readiness wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// The page reported `complete` before the ceiling.
    Complete,
    /// The wait budget elapsed; the page may be partially rendered.
    TimedOut,
}

/// Polls the page's ready state at a fixed interval until it reports
/// `complete` or `max_wait` has elapsed, whichever comes first.
///
/// This never fails: a readiness query error is indistinguishable from a
/// page that is still loading, so it keeps polling until the ceiling. On
/// ceiling the caller gets [`Readiness::TimedOut`] and scrapes whatever is
/// currently rendered.
pub async fn wait_page_ready(
    driver: &dyn PageDriver,
    interval: Duration,
    max_wait: Duration,
) -> Readiness {
    let mut waited = Duration::ZERO;

    loop {
        match driver.ready_state().await {
            Ok(state) if state == READY_COMPLETE => return Readiness::Complete,
            Ok(state) => debug!("page state: {state}"),
            Err(e) => debug!("readiness check failed: {e}"),
        }

        if waited >= max_wait {
            return Readiness::TimedOut;
        }

        tokio::time::sleep(interval).await;
        waited += interval;
    }
}
