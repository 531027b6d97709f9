//! Listing scraping
//!
//! This module contains the extraction pipeline, including:
//! - HTTP fetching of listing documents
//! - Selector-driven field extraction
//! - Manga link collection and last-page discovery
//! - Page and listing orchestration

mod extract;
mod fetcher;
mod links;
mod pagination;
mod pipeline;

pub use extract::{extract, extract_field, ExtractionSpec, FieldSource, TEXT_ATTRIBUTE};
pub use fetcher::{build_http_client, fetch_document};
pub use links::collect_manga_links;
pub use pagination::{last_page_number, parse_page_count};
pub use pipeline::{ListingPage, Scraper};

use crate::config::Config;
use crate::url::{PageRequest, SortOrder};
use crate::ScrapeError;

/// Scrapes one listing page with a freshly built [`Scraper`]
///
/// # Arguments
///
/// * `config` - The scraper configuration
/// * `order` - The sort order of the listing
/// * `page` - The 1-based page number
///
/// # Returns
///
/// * `Ok(ListingPage)` - Links and last page of the requested page
/// * `Err(ScrapeError)` - Invalid page, or the page could not be fetched
pub async fn scrape_page(
    config: &Config,
    order: SortOrder,
    page: u32,
) -> Result<ListingPage, ScrapeError> {
    let request = PageRequest::new(order, page)?;
    Scraper::new(config)?.scrape_page(request).await
}
