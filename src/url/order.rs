use crate::ScrapeError;
use std::fmt;

/// Sort order understood by the listing service
///
/// Only the ordinal matters: it is embedded verbatim in the `order` query
/// parameter and interpreted by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum SortOrder {
    #[default]
    Default,
    Name,
    Chapter,
    View,
    Comment,
    Time,
}

impl SortOrder {
    /// All sort orders, in ordinal order
    pub const ALL: [SortOrder; 6] = [
        SortOrder::Default,
        SortOrder::Name,
        SortOrder::Chapter,
        SortOrder::View,
        SortOrder::Comment,
        SortOrder::Time,
    ];

    /// Numeric value sent to the service
    pub fn ordinal(self) -> u8 {
        match self {
            SortOrder::Default => 0,
            SortOrder::Name => 1,
            SortOrder::Chapter => 2,
            SortOrder::View => 3,
            SortOrder::Comment => 4,
            SortOrder::Time => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Default => "default",
            SortOrder::Name => "name",
            SortOrder::Chapter => "chapter",
            SortOrder::View => "view",
            SortOrder::Comment => "comment",
            SortOrder::Time => "time",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single listing page to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    pub order: SortOrder,
    page: u32,
}

impl PageRequest {
    /// Creates a request for `page` (1-based) in the given order
    ///
    /// # Returns
    ///
    /// * `Ok(PageRequest)` - The page number is at least 1
    /// * `Err(ScrapeError::InvalidPage)` - Page 0 was requested
    pub fn new(order: SortOrder, page: u32) -> Result<Self, ScrapeError> {
        if page == 0 {
            return Err(ScrapeError::InvalidPage(page));
        }
        Ok(Self { order, page })
    }

    /// The first page of a listing
    pub fn first(order: SortOrder) -> Self {
        Self { order, page: 1 }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// The following page in the same order, or `None` on overflow
    pub fn next(&self) -> Option<Self> {
        self.page.checked_add(1).map(|page| Self {
            order: self.order,
            page,
        })
    }
}
