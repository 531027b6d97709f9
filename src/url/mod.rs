//! URL construction for the listing service
//!
//! URLs are plain string concatenation of the configured host and path
//! segments. Segments are expected to be encoded already; nothing here parses,
//! re-encodes or normalizes them.

mod order;

pub use order::{PageRequest, SortOrder};

use crate::config::SiteConfig;

/// Builds absolute URLs against a fixed host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    host: String,
    search_template: String,
}

impl UrlBuilder {
    /// Creates a builder from an explicit host and search template
    pub fn new(host: impl Into<String>, search_template: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            search_template: search_template.into(),
        }
    }

    /// Creates a builder from validated site configuration
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(&config.host, &config.search_template)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Joins `segments` with `/` and appends them to the host
    ///
    /// No separator is inserted between the host and the first segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use blogtruyen_scraper::url::UrlBuilder;
    ///
    /// let urls = UrlBuilder::new("https://blogtruyen.vn", "/list?o={order}&p={page}");
    /// assert_eq!(urls.build_url(&["/manga", "one-piece"]), "https://blogtruyen.vn/manga/one-piece");
    /// ```
    pub fn build_url(&self, segments: &[&str]) -> String {
        format!("{}{}", self.host, segments.join("/"))
    }

    /// Builds the paginated search URL for `order` and `page`
    ///
    /// # Examples
    ///
    /// ```
    /// use blogtruyen_scraper::config::SiteConfig;
    /// use blogtruyen_scraper::url::{SortOrder, UrlBuilder};
    ///
    /// let urls = UrlBuilder::from_config(&SiteConfig::default());
    /// assert_eq!(
    ///     urls.listing_url(SortOrder::Time, 2),
    ///     "https://blogtruyen.vn/ajax/Search/AjaxLoadListManga?key=tatca&order=5&p=2"
    /// );
    /// ```
    pub fn listing_url(&self, order: SortOrder, page: u32) -> String {
        let segment = self
            .search_template
            .replace("{order}", &order.ordinal().to_string())
            .replace("{page}", &page.to_string());
        self.build_url(&[&segment])
    }

    /// Builds the search URL for a page request
    pub fn request_url(&self, request: &PageRequest) -> String {
        self.listing_url(request.order, request.page())
    }
}
