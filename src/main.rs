//! treetally: live terminal dashboard for a directory crawl.
//!
//! Thin binary entry point. All logic lives in the `treetally-core`
//! and `treetally-term` crates.

mod cli;

use treetally_core::scanner::validate_root;
use treetally_term::DashboardConfig;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse_or_exit();

    // Stdout belongs to the dashboard, so logs go to stderr and stay quiet
    // unless asked for.
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let root = validate_root(&cli.folder_path)?;
    tracing::info!("treetally starting on {}", root.display());

    let report = treetally_term::run(root, DashboardConfig::for_stdout(), std::io::stdout())?;

    tracing::info!(
        "Done: {} entries in {:?} over {} frames",
        report.summary.counts.total_entries(),
        report.summary.duration,
        report.frames
    );
    Ok(())
}
