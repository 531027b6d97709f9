//! blogtruyen-scraper main entry point
//!
//! This is the command-line interface for the listing scraper.

use blogtruyen_scraper::config::{load_config_with_hash, Config};
use blogtruyen_scraper::listing::ListingPage;
use blogtruyen_scraper::{PageRequest, Scraper, SortOrder};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// blogtruyen-scraper: list manga from the blogtruyen catalog
///
/// Fetches a page of the paginated manga listing and prints the detail page
/// links it contains, followed by the total number of listing pages.
#[derive(Parser, Debug)]
#[command(name = "blogtruyen-scraper")]
#[command(version)]
#[command(about = "Scrapes manga links from the blogtruyen listing", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults are used when omitted)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Sort order of the listing
    #[arg(short, long, value_enum, default_value_t = SortOrder::Time)]
    order: SortOrder,

    /// Page to scrape (1-based)
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    page: u32,

    /// Walk the whole listing starting from page 1
    #[arg(long, conflicts_with = "page")]
    all: bool,

    /// Stop the walk after this many pages
    #[arg(long, requires = "all")]
    max_pages: Option<u32>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config_with_hash(path) {
                Ok((cfg, hash)) => {
                    tracing::info!("Configuration loaded successfully (hash: {})", hash);
                    cfg
                }
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => Config::default(),
    };

    let scraper = Scraper::new(&config)?;

    if cli.all {
        handle_listing(&scraper, cli.order, cli.max_pages).await
    } else {
        handle_page(&scraper, PageRequest::new(cli.order, cli.page)?).await
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("blogtruyen_scraper=info,warn"),
            1 => EnvFilter::new("blogtruyen_scraper=debug,info"),
            2 => EnvFilter::new("blogtruyen_scraper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Scrapes and prints a single listing page
async fn handle_page(
    scraper: &Scraper,
    request: PageRequest,
) -> Result<(), Box<dyn std::error::Error>> {
    match scraper.scrape_page(request).await {
        Ok(page) => {
            println!("{}", format_page(&page, false));
            Ok(())
        }
        Err(e) => {
            tracing::error!("Scrape failed: {}", e);
            Err(e.into())
        }
    }
}

/// Walks the listing and prints every page
async fn handle_listing(
    scraper: &Scraper,
    order: SortOrder,
    max_pages: Option<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let pages = match scraper.scrape_listing(order, max_pages).await {
        Ok(pages) => pages,
        Err(e) => {
            tracing::error!("Listing walk failed: {}", e);
            return Err(e.into());
        }
    };

    for page in &pages {
        println!("{}", format_page(page, true));
    }

    let total: usize = pages.iter().map(|p| p.links.len()).sum();
    tracing::info!("Scraped {} pages, {} links", pages.len(), total);

    Ok(())
}

/// Renders a page as `Links:`, one link per line, then `Last page: N`
///
/// During a listing walk the header also names the page number.
fn format_page(page: &ListingPage, walking: bool) -> String {
    let mut out = if walking {
        format!("Links (page {}):\n", page.request.page())
    } else {
        "Links:\n".to_string()
    };
    for link in &page.links {
        out.push_str(link);
        out.push('\n');
    }
    out.push_str(&format!("Last page: {}", page.last_page));
    out
}
