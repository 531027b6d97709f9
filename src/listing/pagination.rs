//! Last-page discovery
//!
//! The listing's final pagination anchor carries the page count in its href,
//! e.g. `javascript:LoadListMangaPage(42)`. A count of 0 means the count is
//! unknown; it never refers to an existing page.

use super::extract::{extract, ExtractionSpec};
use scraper::Html;

/// Resolves the total number of listing pages
///
/// Returns 0 when the document has no pagination control (single-page
/// listings) or when the anchor's href carries no parenthesized number.
pub fn last_page_number(doc: &Html, spec: &ExtractionSpec) -> u32 {
    let values = extract(doc, spec);
    let Some(first) = values.first() else {
        tracing::debug!("No pagination control matched '{}'", spec.selector());
        return 0;
    };

    match parse_page_count(first) {
        Some(count) => count,
        None => {
            tracing::warn!("Pagination value '{}' carries no page count", first);
            0
        }
    }
}

/// Finds the first `(...)` group whose contents are a base-10 number
///
/// Groups are tried left to right and surrounding whitespace inside a group
/// is ignored, so `f(x)(9)` gives 9 and `( 3 )` gives 3. A strict reading of
/// only the first group, untrimmed, would return `None` for both.
///
/// # Examples
///
/// ```
/// use blogtruyen_scraper::listing::parse_page_count;
///
/// assert_eq!(parse_page_count("javascript:LoadListMangaPage(42)"), Some(42));
/// assert_eq!(parse_page_count("javascript:LoadListMangaPage"), None);
/// ```
pub fn parse_page_count(text: &str) -> Option<u32> {
    let mut rest = text;
    while let Some(open) = rest.find('(') {
        let after = &rest[open + 1..];
        let close = after.find(')')?;
        if let Ok(count) = after[..close].trim().parse::<u32>() {
            return Some(count);
        }
        rest = &after[close + 1..];
    }
    None
}
