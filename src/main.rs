//! Main entry point for the bottle CLI application.
//!
//! Optionally downloads the archive, prints the environment diagnostics,
//! then prints the first line of the archive's namesake member between
//! the message banners.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use bottle::{Cli, extract_first_line_with, fetch, report};

/// Application entry point.
///
/// Every step runs to completion before the next one starts; the first
/// error ends the run with a non-zero exit status.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let filename = cli.filename();

    // Fetch first so the directory listing below shows the archive
    if let Some(url) = &cli.url {
        fetch::download(url, Path::new(&filename))
            .await
            .with_context(|| format!("fetching {} from {}", filename, url))?;
    }

    if !cli.is_quiet() {
        print_diagnostics()?;
    }

    let mut stdout = std::io::stdout().lock();
    if !cli.is_very_quiet() {
        report::write_filename(&mut stdout, &filename)?;
    }

    let message = extract_first_line_with(&filename, &cli.extension)
        .await
        .with_context(|| format!("reading the message from {}", filename))?;

    report::write_message(&mut stdout, &message)?;
    Ok(())
}

/// Log to stderr so stdout carries only the report; `RUST_LOG` overrides
/// the default `warn` level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Print the runtime version and the current directory listing.
///
/// These are observational only: a directory that cannot be listed is
/// logged and reported as empty.
fn print_diagnostics() -> Result<()> {
    let entries = report::list_current_dir().unwrap_or_else(|e| {
        warn!("cannot list the current directory: {}", e);
        Vec::new()
    });
    debug!(entries = entries.len(), "listed current directory");

    let mut stdout = std::io::stdout().lock();
    report::write_diagnostics(&mut stdout, &report::runtime_version(), &entries)?;
    Ok(())
}
