use serde::Deserialize;

/// Default listing host
pub const DEFAULT_HOST: &str = "https://blogtruyen.vn";

/// Default paginated search path; `{order}` and `{page}` are substituted per request
pub const DEFAULT_SEARCH_TEMPLATE: &str =
    "/ajax/Search/AjaxLoadListManga?key=tatca&order={order}&p={page}";

/// Default selector for the anchors of listing rows
pub const DEFAULT_MANGA_LINKS_SELECTOR: &str = ".list > p > span > a";

/// Default selector for the last pagination anchor
pub const DEFAULT_LAST_PAGE_SELECTOR: &str = "span.page:last-child > a";

/// Main configuration structure
///
/// Every section falls back to the blogtruyen defaults, so an empty TOML
/// document is a valid configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub selectors: SelectorConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

/// Listing service location
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Scheme and authority, without a trailing slash
    pub host: String,

    /// Search path template containing `{order}` and `{page}`
    #[serde(rename = "search-template")]
    pub search_template: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            search_template: DEFAULT_SEARCH_TEMPLATE.to_string(),
        }
    }
}

/// CSS selectors describing the listing markup
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Anchors whose `href` points at a manga detail page
    #[serde(rename = "manga-links")]
    pub manga_links: String,

    /// Anchor whose `href` embeds the total page count, e.g. `LoadPage(42)`
    #[serde(rename = "last-page")]
    pub last_page: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            manga_links: DEFAULT_MANGA_LINKS_SELECTOR.to_string(),
            last_page: DEFAULT_LAST_PAGE_SELECTOR.to_string(),
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Whole-request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("blogtruyen-scraper/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}
