//! Shelf-Scraper main entry point
//!
//! This is the command-line interface for the Shelf-Scraper catalog harvester.

use anyhow::Context;
use clap::Parser;
use shelf_scraper::config::{load_config, validate, Config};
use shelf_scraper::crawler::Coordinator;
use shelf_scraper::output::print_run_summary;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Shelf-Scraper: a book catalog harvester
///
/// Shelf-Scraper walks every category of the catalog, follows each listing
/// page, scrapes book details and covers, and writes one CSV per category.
#[derive(Parser, Debug)]
#[command(name = "shelf-scraper")]
#[command(version = "1.0.0")]
#[command(about = "A book catalog harvester", long_about = None)]
struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Directory receiving one folder per category
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Catalog root URL (must end with '/')
    #[arg(long, value_name = "URL")]
    root_url: Option<String>,

    /// Only scrape this category; repeat for several
    #[arg(long = "category", value_name = "NAME")]
    categories: Vec<String>,

    /// Skip cover image downloads
    #[arg(long)]
    no_images: bool,

    /// List the categories that would be scraped and exit
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = resolve_config(&cli)?;
    tracing::info!(
        "Scraping {} into {}",
        config.site.root_url,
        config.output.directory.display()
    );

    let coordinator = Coordinator::new(config)?.with_selection(cli.categories.clone());

    if cli.dry_run {
        handle_dry_run(&coordinator).await
    } else {
        handle_scrape(&coordinator).await
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("shelf_scraper=info,warn"),
            1 => EnvFilter::new("shelf_scraper=debug,info"),
            2 => EnvFilter::new("shelf_scraper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file, if any, and applies command-line overrides
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(dir) = &cli.output_dir {
        config.output.directory = dir.clone();
    }
    if let Some(root_url) = &cli.root_url {
        config.site.root_url = root_url.clone();
    }
    if cli.no_images {
        config.output.download_images = false;
    }

    validate(&config).context("Invalid configuration")?;
    Ok(config)
}

/// Handles the --dry-run mode: lists the categories a run would cover
async fn handle_dry_run(coordinator: &Coordinator) -> anyhow::Result<()> {
    println!("=== Shelf-Scraper Dry Run ===\n");

    let categories = coordinator.list_categories().await?;
    println!("Categories ({}):", categories.len());
    for category in &categories {
        println!("  - {} ({})", category.name, category.listing_url);
    }

    Ok(())
}

/// Handles the main scrape operation
async fn handle_scrape(coordinator: &Coordinator) -> anyhow::Result<()> {
    tracing::info!("Starting scrape");

    let summary = coordinator.run().await.context("Scrape aborted")?;
    print_run_summary(&summary);
    println!(
        "\nScrape finished. {} books downloaded.",
        summary.total_books()
    );

    Ok(())
}
