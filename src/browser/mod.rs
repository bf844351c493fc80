//! Browser session management: launching headless Chrome over CDP and
//! polling pages for readiness.

pub mod readiness;
pub mod session;

pub use readiness::{wait_page_ready, Readiness};
pub use session::{ChromeSession, PageDriver};
