//! Configuration module
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! All fields default to the blogtruyen constants, so the scraper also runs
//! without any configuration file.
//!
//! # Example
//!
//! ```no_run
//! use blogtruyen_scraper::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scraper.toml")).unwrap();
//! println!("Listing host: {}", config.site.host);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, HttpConfig, SelectorConfig, SiteConfig, DEFAULT_HOST, DEFAULT_LAST_PAGE_SELECTOR,
    DEFAULT_MANGA_LINKS_SELECTOR, DEFAULT_SEARCH_TEMPLATE,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
