use crate::listing::Listing;
use crate::price::{self, PriceRule};
use crate::scrape::{ExtractionResult, SiteScraper, SkipReason};
use crate::utils::{element_text, strip_brand_prefix};
use chrono::NaiveDate;
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};

const BASE_URL: &str = "https://www.mobiel.nl/smartphone?page=";

// Styled-components class names; the generated hash suffixes are part of
// the shipped markup.
const E: &str = "Invalid selector";
lazy_static! {
    static ref ITEM: Selector =
        Selector::parse("div.ProductOnlyCard__StyledInteractiveCard-sc-1dljfv1-5").expect(E);
    static ref BRAND: Selector = Selector::parse("span.ProductTitle__Brand-sc-1bzuqdo-2").expect(E);
    static ref TITLE: Selector = Selector::parse("span.ProductTitle__Title-sc-1bzuqdo-3").expect(E);
    static ref PRICES: Selector = Selector::parse("div.Bottom__Prices-sc-s5inlj-3").expect(E);
    static ref SPAN: Selector = Selector::parse("span").expect(E);
    static ref NEXT_PAGE: Selector = Selector::parse(r#"a[rel="next"]"#).expect(E);
}

#[derive(Debug)]
pub struct MobielScraper;

impl SiteScraper for MobielScraper {
    fn name(&self) -> &'static str {
        "Mobiel.nl"
    }

    fn page_url(&self, page_number: u32) -> String {
        format!("{}{}", BASE_URL, page_number)
    }

    fn item_containers<'a>(&self, doc: &'a Html) -> Vec<ElementRef<'a>> {
        doc.select(&ITEM).collect()
    }

    fn extract(&self, item: ElementRef<'_>, captured_at: NaiveDate) -> ExtractionResult {
        // Unlike Bol, missing brand or title falls back to a sentinel
        // instead of skipping the card.
        let brand = item
            .select(&BRAND)
            .next()
            .map(element_text)
            .unwrap_or_else(|| "Unknown Brand".to_string());
        let title = item
            .select(&TITLE)
            .next()
            .map(element_text)
            .unwrap_or_else(|| "Unknown Title".to_string());
        let title = strip_brand_prefix(&title, &brand);

        let Some(price_el) = item
            .select(&PRICES)
            .next()
            .and_then(|prices| prices.select(&SPAN).next())
        else {
            return ExtractionResult::Skipped(SkipReason::AttributeLookup { field: "price" });
        };
        let Some(price) = price::normalize(&element_text(price_el), None, PriceRule::WholeEuros)
        else {
            return ExtractionResult::Skipped(SkipReason::ValueConversion { field: "price" });
        };

        ExtractionResult::Extracted(Listing {
            brand,
            title,
            price,
            seller: "Mobiel.nl".to_string(),
            captured_at,
        })
    }

    fn has_next_page(&self, doc: &Html) -> bool {
        doc.select(&NEXT_PAGE).next().is_some()
    }
}
