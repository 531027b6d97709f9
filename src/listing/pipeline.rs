//! Listing page scraping
//!
//! A [`Scraper`] owns everything a scrape needs (HTTP client, URL builder and
//! parsed selectors) and performs one linear pass per page: build the URL,
//! fetch, then extract links and the last-page number from the same document.

use super::extract::ExtractionSpec;
use super::fetcher::{build_http_client, fetch_document};
use super::links::collect_manga_links;
use super::pagination::last_page_number;
use crate::config::{validate, Config};
use crate::url::{PageRequest, SortOrder, UrlBuilder};
use crate::ScrapeError;
use reqwest::Client;

/// Result of scraping one listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPage {
    /// The page that was requested
    pub request: PageRequest,
    /// The URL that was fetched
    pub url: String,
    /// Absolute manga detail links, in document order
    pub links: Vec<String>,
    /// Total page count reported by the listing, 0 if unknown
    pub last_page: u32,
}

/// Scrapes listing pages from a single host
#[derive(Debug, Clone)]
pub struct Scraper {
    client: Client,
    urls: UrlBuilder,
    manga_links: ExtractionSpec,
    last_page: ExtractionSpec,
}

impl Scraper {
    /// Creates a scraper from a validated configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Scraper)` - Client built and selectors parsed
    /// * `Err(ScrapeError)` - The configuration is invalid or the client could not be built
    pub fn new(config: &Config) -> Result<Self, ScrapeError> {
        let client = build_http_client(&config.http)?;
        Self::with_client(config, client)
    }

    /// Creates a scraper that reuses an existing HTTP client
    ///
    /// The configuration is validated here, since its fields can be set
    /// directly without going through [`crate::config::load_config`].
    pub fn with_client(config: &Config, client: Client) -> Result<Self, ScrapeError> {
        validate(config)?;
        Ok(Self {
            client,
            urls: UrlBuilder::from_config(&config.site),
            manga_links: ExtractionSpec::new(&config.selectors.manga_links, "href")?,
            last_page: ExtractionSpec::new(&config.selectors.last_page, "href")?,
        })
    }

    pub fn urls(&self) -> &UrlBuilder {
        &self.urls
    }

    /// Scrapes a single listing page
    ///
    /// Transport, status and body failures abort the page and are returned with
    /// the attempted URL. Missing links or pagination never fail the scrape.
    pub async fn scrape_page(&self, request: PageRequest) -> Result<ListingPage, ScrapeError> {
        let url = self.urls.request_url(&request);
        let doc = fetch_document(&self.client, &url).await?;

        let links = collect_manga_links(&doc, &self.manga_links, &self.urls);
        let last_page = last_page_number(&doc, &self.last_page);

        tracing::debug!(
            "Page {} ({}): {} links, last page {}",
            request.page(),
            request.order,
            links.len(),
            last_page
        );

        Ok(ListingPage {
            request,
            url,
            links,
            last_page,
        })
    }

    /// Walks a listing from page 1, one page at a time
    ///
    /// # Stop Conditions
    ///
    /// | Condition | Action |
    /// |-----------|--------|
    /// | First page reports last page 0 | Stop after page 1 |
    /// | Page number exceeds the first page's last page | Stop |
    /// | A page yields no links | Stop, that page is not included |
    /// | `max_pages` pages scraped | Stop |
    /// | Fetch error | Return the error |
    pub async fn scrape_listing(
        &self,
        order: SortOrder,
        max_pages: Option<u32>,
    ) -> Result<Vec<ListingPage>, ScrapeError> {
        let limit = max_pages.unwrap_or(u32::MAX);
        let mut pages: Vec<ListingPage> = Vec::new();
        let mut next = Some(PageRequest::first(order));
        let mut last_page = 0;

        while let Some(request) = next {
            if request.page() > limit {
                break;
            }
            if !pages.is_empty() && request.page() > last_page {
                break;
            }

            let page = self.scrape_page(request).await?;
            if page.links.is_empty() {
                tracing::info!("Page {} has no links, stopping", request.page());
                break;
            }

            if pages.is_empty() {
                last_page = page.last_page;
                tracing::info!("Listing '{}' reports {} pages", order, last_page);
            }

            next = request.next();
            pages.push(page);
        }

        Ok(pages)
    }
}
