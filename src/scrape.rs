use crate::listing::Listing;
use chrono::NaiveDate;
use scraper::{ElementRef, Html};
use std::fmt;

/// Per-item outcome. A skipped item never aborts the page it came from.
#[derive(Debug)]
pub enum ExtractionResult {
    Extracted(Listing),
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// An expected node or attribute is missing from the item markup.
    AttributeLookup { field: &'static str },
    /// The node is there but its value cannot be coerced.
    ValueConversion { field: &'static str },
    Unclassified,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::AttributeLookup { field } => write!(f, "missing {}", field),
            SkipReason::ValueConversion { field } => write!(f, "unparsable {}", field),
            SkipReason::Unclassified => write!(f, "unclassified failure"),
        }
    }
}

/// Extraction rules for one retailer's listing pages.
pub trait SiteScraper {
    fn name(&self) -> &'static str;

    /// Listing URL for a 1-based page number.
    fn page_url(&self, page_number: u32) -> String;

    /// Repeating product blocks on the page; empty means end of catalog.
    fn item_containers<'a>(&self, doc: &'a Html) -> Vec<ElementRef<'a>>;

    fn extract(&self, item: ElementRef<'_>, captured_at: NaiveDate) -> ExtractionResult;

    fn has_next_page(&self, doc: &Html) -> bool;
}
