//! Configuration management with a JSON code list, environment variables,
//! and CLI overrides.

use crate::error::ScrapeError;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Production catalog base URL.
pub const DEFAULT_BASE_URL: &str = "https://www.mcmaster.com";

/// Application configuration with layered loading.
///
/// The product code list comes from the config file; everything else has a
/// default and can be overridden via environment variables or CLI flags.
#[derive(Debug, Clone)]
pub struct Config {
    /// Product codes to pull, in file order
    pub product_codes: Vec<String>,

    /// Catalog base URL
    pub base_url: String,

    /// Seconds between page readiness checks
    pub wait_interval_secs: u64,

    /// Maximum seconds to wait for a page to report complete
    pub max_wait_secs: u64,

    /// Run the browser headless
    pub headless: bool,

    /// Browser window size
    pub window_size: (u32, u32),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            product_codes: Vec::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            wait_interval_secs: 1,
            max_wait_secs: 120,
            headless: true,
            window_size: (1280, 1696),
        }
    }
}

/// On-disk shape of the config file. Only the code list is consumed;
/// unknown keys are ignored.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(rename = "_PRODUCT_CODES")]
    product_codes: Vec<String>,
}

impl Config {
    /// Loads the product code list from a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScrapeError> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|source| ScrapeError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let file: ConfigFile =
            serde_json::from_str(&content).map_err(|source| ScrapeError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self { product_codes: file.product_codes, ..Self::default() })
    }

    /// Loads configuration with fallback to default locations.
    ///
    /// The product code list is the program's entire input, so unlike the
    /// runtime settings there is no default: a config file must exist.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ScrapeError> {
        // 1. Explicit path takes precedence
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        // 2. Try current directory
        let local_config = Path::new("config.json");
        if local_config.exists() {
            debug!("Found config.json in current directory");
            return Self::from_file(local_config);
        }

        // 3. Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("mcm-specs").join("config.json");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        // 4. Surface the read error for the conventional location
        Self::from_file(local_config)
    }

    /// Applies environment variable overrides.
    pub fn with_env(mut self) -> Self {
        if let Ok(base_url) = std::env::var("MCM_BASE_URL") {
            self.base_url = base_url;
        }

        if let Ok(interval) = std::env::var("MCM_WAIT_INTERVAL") {
            if let Ok(secs) = interval.parse() {
                self.wait_interval_secs = secs;
            }
        }

        if let Ok(max_wait) = std::env::var("MCM_MAX_WAIT") {
            if let Ok(secs) = max_wait.parse() {
                self.max_wait_secs = secs;
            }
        }

        self
    }

    /// Builds the catalog URL for a product code.
    pub fn product_url(&self, code: &str) -> String {
        format!("{}/{}/", self.base_url.trim_end_matches('/'), code)
    }
}
