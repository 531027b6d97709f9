use crate::config::types::{Config, HttpConfig, SelectorConfig, SiteConfig};
use crate::ConfigError;
use scraper::Selector;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_selector_config(&config.selectors)?;
    validate_http_config(&config.http)?;
    Ok(())
}

/// Validates the listing host and search template
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.host)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid host '{}': {}", config.host, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "Host '{}' must use http or https",
            config.host
        )));
    }

    // Segments are appended verbatim, so the host must not end in a separator
    if config.host.ends_with('/') {
        return Err(ConfigError::InvalidUrl(format!(
            "Host '{}' must not end with '/'",
            config.host
        )));
    }

    validate_search_template(&config.search_template)
}

/// Validates that the search template carries both placeholders
fn validate_search_template(template: &str) -> Result<(), ConfigError> {
    for placeholder in ["{order}", "{page}"] {
        if !template.contains(placeholder) {
            return Err(ConfigError::InvalidTemplate(format!(
                "'{}' is missing the {} placeholder",
                template, placeholder
            )));
        }
    }

    if !template.starts_with('/') {
        return Err(ConfigError::InvalidTemplate(format!(
            "'{}' must start with '/'",
            template
        )));
    }

    Ok(())
}

/// Validates that every configured selector parses
fn validate_selector_config(config: &SelectorConfig) -> Result<(), ConfigError> {
    for (name, selector) in [
        ("manga-links", &config.manga_links),
        ("last-page", &config.last_page),
    ] {
        Selector::parse(selector).map_err(|e| {
            ConfigError::InvalidSelector(format!("{} selector '{}': {}", name, selector, e))
        })?;
    }
    Ok(())
}

/// Validates HTTP client configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "timeout-secs must be >= 1".to_string(),
        ));
    }

    if config.connect_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "connect-timeout-secs must be >= 1".to_string(),
        ));
    }

    Ok(())
}
