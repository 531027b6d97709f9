//! Manga detail link collection

use super::extract::{extract, ExtractionSpec};
use crate::url::UrlBuilder;
use scraper::Html;

/// Collects manga detail links from a listing document
///
/// Relative hrefs are turned into absolute URLs with
/// [`UrlBuilder::build_url`]; hrefs that are already absolute are kept as is.
/// Document order is preserved and a listing without rows yields an empty
/// vector.
pub fn collect_manga_links(doc: &Html, spec: &ExtractionSpec, urls: &UrlBuilder) -> Vec<String> {
    let links: Vec<String> = extract(doc, spec)
        .into_iter()
        .map(|href| absolutize(&href, urls))
        .collect();

    tracing::debug!("Collected {} manga links", links.len());
    links
}

fn absolutize(href: &str, urls: &UrlBuilder) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        href.to_string()
    } else {
        urls.build_url(&[href])
    }
}
