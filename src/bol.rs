use crate::listing::Listing;
use crate::price::{self, PriceRule};
use crate::scrape::{ExtractionResult, SiteScraper, SkipReason};
use crate::utils::{element_text, strip_brand_prefix};
use chrono::NaiveDate;
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};

const BASE_URL: &str = "https://www.bol.com/nl/nl/l/smartphones/4010/?page=";

const E: &str = "Invalid selector";
lazy_static! {
    static ref ITEM: Selector = Selector::parse(r#"div[data-test="product-content"]"#).expect(E);
    static ref PRICE: Selector = Selector::parse("span.promo-price").expect(E);
    static ref PRICE_FRACTION: Selector = Selector::parse("sup.promo-price__fraction").expect(E);
    static ref TITLE: Selector = Selector::parse(r#"a[data-test="product-title"]"#).expect(E);
    static ref BRAND: Selector = Selector::parse(r#"a[data-test="party-link"]"#).expect(E);
    static ref SELLER_NAME: Selector = Selector::parse("span.product-seller__name").expect(E);
    static ref PLAZA_SELLER: Selector =
        Selector::parse(r#"div[data-test="plazaseller-link"]"#).expect(E);
    static ref NEXT_PAGE: Selector = Selector::parse("li.pagination__controls--next").expect(E);
}

#[derive(Debug)]
pub struct BolScraper;

impl SiteScraper for BolScraper {
    fn name(&self) -> &'static str {
        "Bol"
    }

    fn page_url(&self, page_number: u32) -> String {
        format!("{}{}", BASE_URL, page_number)
    }

    fn item_containers<'a>(&self, doc: &'a Html) -> Vec<ElementRef<'a>> {
        doc.select(&ITEM).collect()
    }

    fn extract(&self, item: ElementRef<'_>, captured_at: NaiveDate) -> ExtractionResult {
        // The integer part is the span's own text; the fraction lives in a
        // nested <sup>, so only the first text node counts.
        let Some(price_el) = item.select(&PRICE).next() else {
            return ExtractionResult::Skipped(SkipReason::AttributeLookup { field: "price" });
        };
        let Some(fraction_el) = item.select(&PRICE_FRACTION).next() else {
            return ExtractionResult::Skipped(SkipReason::AttributeLookup {
                field: "price fraction",
            });
        };
        let euros = price_el.text().next().unwrap_or("").trim();
        let fraction = element_text(fraction_el);
        let Some(price) = price::normalize(euros, Some(fraction.as_str()), PriceRule::SplitFraction)
        else {
            return ExtractionResult::Skipped(SkipReason::ValueConversion { field: "price" });
        };

        // No sentinel fallback here: a card without title or brand is skipped.
        let Some(title_el) = item.select(&TITLE).next() else {
            return ExtractionResult::Skipped(SkipReason::AttributeLookup { field: "title" });
        };
        let Some(brand_el) = item.select(&BRAND).next() else {
            return ExtractionResult::Skipped(SkipReason::AttributeLookup { field: "brand" });
        };
        let brand = element_text(brand_el);
        let title = strip_brand_prefix(&element_text(title_el), &brand);

        let marketplace = item.select(&SELLER_NAME).next().is_some()
            || item.select(&PLAZA_SELLER).next().is_some();
        let seller = if marketplace { "Tweedehands op Bol" } else { "Bol" };

        ExtractionResult::Extracted(Listing {
            brand,
            title,
            price,
            seller: seller.to_string(),
            captured_at,
        })
    }

    fn has_next_page(&self, doc: &Html) -> bool {
        doc.select(&NEXT_PAGE).next().is_some()
    }
}
