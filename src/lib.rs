use chrono::NaiveDate;
use scraper::Html;
use tracing::{debug, info, warn};

pub mod bol;
pub mod coolblue;
pub mod mobiel;
pub mod price;
pub mod storage;

mod error;
mod fetch;
mod listing;
mod scrape;
mod utils;

pub use bol::BolScraper;
pub use coolblue::CoolblueScraper;
pub use error::CrawlError;
pub use fetch::{Fetch, HttpFetcher};
pub use listing::Listing;
pub use mobiel::MobielScraper;
pub use scrape::{ExtractionResult, SiteScraper, SkipReason};

enum Traversal {
    Fetching(u32),
    Extracting(u32, Html),
    Terminated,
}

/// Walks a site's listing pages from page 1 until the catalog runs out,
/// accumulating every item that extracts cleanly. Skipped items are logged
/// and dropped; a fetch failure aborts the whole run.
pub fn traverse<S, F>(
    site: &S,
    fetcher: &F,
    captured_at: NaiveDate,
) -> Result<Vec<Listing>, CrawlError>
where
    S: SiteScraper + ?Sized,
    F: Fetch + ?Sized,
{
    let mut listings = Vec::new();
    let mut state = Traversal::Fetching(1);

    // Page number only ever increases; both exits go through Terminated.
    loop {
        state = match state {
            Traversal::Fetching(page) => {
                info!("{}: page {}", site.name(), page);
                let raw = fetcher.fetch(&site.page_url(page))?;
                Traversal::Extracting(page, Html::parse_document(&raw))
            }
            Traversal::Extracting(page, doc) => {
                let items = site.item_containers(&doc);
                if items.is_empty() {
                    debug!("{}: no items on page {}", site.name(), page);
                    Traversal::Terminated
                } else {
                    for item in items {
                        match site.extract(item, captured_at) {
                            ExtractionResult::Extracted(listing) => listings.push(listing),
                            ExtractionResult::Skipped(reason) => {
                                warn!("{}: skipped item on page {}: {}", site.name(), page, reason);
                            }
                        }
                    }
                    if site.has_next_page(&doc) {
                        Traversal::Fetching(page + 1)
                    } else {
                        Traversal::Terminated
                    }
                }
            }
            Traversal::Terminated => break,
        };
    }

    info!("Klaar met {}: {} listings", site.name(), listings.len());
    Ok(listings)
}
