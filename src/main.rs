//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `urlscope` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Printing each `ScanResult` as JSON on stdout
//!
//! All core functionality is implemented in the library crate.

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use futures::stream::{self, StreamExt};

use urlscope::config::{
    CHECK_TIMEOUT, DEFAULT_MODEL_PATH, MAX_REDIRECTS, SCAN_DEADLINE, WHOIS_WORKERS,
};
use urlscope::initialization::{init_crypto_provider, init_logger_with};
use urlscope::{Config, LogFormat, LogLevel, Scanner};

/// Scan URLs and print a risk verdict for each as JSON.
#[derive(Debug, Parser)]
#[command(name = "urlscope", version, about)]
struct Cli {
    /// URLs to scan (a missing scheme defaults to http)
    #[arg(required = true)]
    urls: Vec<String>,

    /// Log level: error, warn, info, debug, or trace
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,

    /// Log format: plain or json
    #[arg(long, value_enum, default_value = "plain")]
    log_format: LogFormat,

    /// Maximum redirect hops to follow
    #[arg(long, default_value_t = MAX_REDIRECTS)]
    max_redirects: usize,

    /// Per-check network timeout in seconds
    #[arg(long, default_value_t = CHECK_TIMEOUT.as_secs())]
    timeout: u64,

    /// Deadline for a whole scan in seconds
    #[arg(long, default_value_t = SCAN_DEADLINE.as_secs())]
    deadline: u64,

    /// Path to the classifier artifact (JSON)
    #[arg(long, default_value = DEFAULT_MODEL_PATH)]
    model: PathBuf,

    /// Maximum concurrent WHOIS lookups
    #[arg(long, default_value_t = WHOIS_WORKERS)]
    whois_workers: usize,

    /// URLs scanned at once when several are given
    #[arg(long, default_value_t = 4)]
    concurrency: usize,

    /// Print one JSON object per line instead of pretty-printed JSON
    #[arg(long)]
    compact: bool,
}

impl Cli {
    fn to_config(&self) -> Config {
        Config {
            max_redirects: self.max_redirects,
            check_timeout: Duration::from_secs(self.timeout),
            scan_deadline: Duration::from_secs(self.deadline),
            model_path: self.model.clone(),
            whois_workers: self.whois_workers,
            ..Default::default()
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let scanner =
        Scanner::from_config(cli.to_config()).context("Failed to initialize scanner")?;

    let mut results = stream::iter(cli.urls.iter())
        .map(|url| {
            let scanner = scanner.clone();
            async move { (url, scanner.scan(url).await) }
        })
        .buffered(cli.concurrency.max(1));

    let mut failed = 0usize;
    while let Some((url, outcome)) = results.next().await {
        match outcome {
            Ok(result) => {
                let json = if cli.compact {
                    serde_json::to_string(&result)
                } else {
                    serde_json::to_string_pretty(&result)
                }
                .context("Failed to serialize scan result")?;
                println!("{json}");
            }
            Err(e) => {
                log::error!("Failed to scan {url}: {e}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} URL(s) could not be scanned", cli.urls.len());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    // Initialize crypto provider for TLS operations
    init_crypto_provider();

    match run(cli).await {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("urlscope error: {:#}", e);
            process::exit(1);
        }
    }
}
