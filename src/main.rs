//! mcm-specs - Headless-Chrome CLI that pulls product spec tables from the
//! McMaster-Carr catalog.

use anyhow::{Context, Result};
use clap::Parser;
use mcm_specs::commands::PullCommand;
use mcm_specs::config::Config;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info, Level};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "mcm-specs",
    version,
    about = "Pull product spec tables from the McMaster-Carr catalog",
    long_about = "Drives a headless Chrome instance to each configured product page and \
                  logs the spec table as label/value pairs."
)]
struct Cli {
    /// Path to the JSON config file holding _PRODUCT_CODES
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Catalog base URL
    #[arg(long, env = "MCM_BASE_URL")]
    base_url: Option<String>,

    /// Seconds between page readiness checks
    #[arg(long)]
    wait_interval: Option<u64>,

    /// Maximum seconds to wait for a page to report complete
    #[arg(long)]
    max_wait: Option<u64>,

    /// Run the browser with a visible window
    #[arg(long)]
    headed: bool,

    /// File receiving a copy of all log output
    #[arg(long, default_value = "output.log")]
    log_file: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, &cli.log_file) {
        eprintln!("Failed to initialize logging: {e:#}");
    }

    // Single outermost handler: log the failure and fall through to the
    // completion line. Exit status is 0 either way.
    if let Err(e) = run(cli).await {
        eprintln!("An error occurred: {e}");
        error!("{e:?}");
    }

    info!("Script complete.");
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_env();

    // Apply CLI overrides
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(secs) = cli.wait_interval {
        config.wait_interval_secs = secs;
    }
    if let Some(secs) = cli.max_wait {
        config.max_wait_secs = secs;
    }
    if cli.headed {
        config.headless = false;
    }

    let cmd = PullCommand::new(config);
    cmd.execute().await?;

    Ok(())
}

/// Duplicates every log entry to stdout and to the log file, level-tagged
/// and timestamp-free.
fn init_logging(verbose: bool, log_file: &Path) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };

    let file = File::create(log_file)
        .with_context(|| format!("Failed to create log file: {}", log_file.display()))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_ansi(false)
                .with_writer(Arc::new(file)),
        )
        .init();

    Ok(())
}
