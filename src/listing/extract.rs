//! Selector-driven field extraction
//!
//! An [`ExtractionSpec`] pairs a CSS selector with the value to read from each
//! matched element: its text, or one of its attributes.
//!
//! Text is read from every match. Attributes are read only from matches that
//! carry them; the others are skipped, so an attribute extraction can return
//! fewer values than there were matches.

use crate::ScrapeError;
use scraper::{ElementRef, Html, Selector};

/// Attribute name that selects text content instead of an attribute
pub const TEXT_ATTRIBUTE: &str = "text";

/// Where a field's value comes from on a matched element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSource {
    /// Concatenated descendant text
    Text,
    /// A named attribute; elements without it are skipped
    Attribute(String),
}

impl FieldSource {
    /// Interprets an attribute name, treating `""` and `"text"` as text
    pub fn from_attribute(attribute: &str) -> Self {
        if attribute.is_empty() || attribute == TEXT_ATTRIBUTE {
            FieldSource::Text
        } else {
            FieldSource::Attribute(attribute.to_string())
        }
    }

    fn read(&self, element: ElementRef<'_>) -> Option<String> {
        match self {
            FieldSource::Text => Some(element.text().collect()),
            FieldSource::Attribute(name) => element.value().attr(name).map(String::from),
        }
    }
}

/// A parsed selector and the field to read from its matches
#[derive(Debug, Clone)]
pub struct ExtractionSpec {
    selector_text: String,
    selector: Selector,
    source: FieldSource,
}

impl ExtractionSpec {
    /// Parses `selector` and pairs it with `attribute`
    ///
    /// # Returns
    ///
    /// * `Ok(ExtractionSpec)` - The selector parsed
    /// * `Err(ScrapeError::Selector)` - The selector is not valid CSS
    pub fn new(selector: &str, attribute: &str) -> Result<Self, ScrapeError> {
        let parsed = Selector::parse(selector).map_err(|e| ScrapeError::Selector {
            selector: selector.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            selector_text: selector.to_string(),
            selector: parsed,
            source: FieldSource::from_attribute(attribute),
        })
    }

    pub fn selector(&self) -> &str {
        &self.selector_text
    }

    pub fn source(&self) -> &FieldSource {
        &self.source
    }
}

/// Extracts one value per qualifying match, in document order
///
/// # Example
///
/// ```
/// use blogtruyen_scraper::listing::{extract, ExtractionSpec};
/// use scraper::Html;
///
/// let doc = Html::parse_document(r#"<a href="/x">X</a><a>Y</a>"#);
/// let hrefs = extract(&doc, &ExtractionSpec::new("a", "href").unwrap());
/// assert_eq!(hrefs, vec!["/x"]);
/// ```
pub fn extract(doc: &Html, spec: &ExtractionSpec) -> Vec<String> {
    doc.select(&spec.selector)
        .filter_map(|element| spec.source.read(element))
        .collect()
}

/// Convenience wrapper that parses the selector on each call
pub fn extract_field(
    doc: &Html,
    selector: &str,
    attribute: &str,
) -> Result<Vec<String>, ScrapeError> {
    let spec = ExtractionSpec::new(selector, attribute)?;
    Ok(extract(doc, &spec))
}
