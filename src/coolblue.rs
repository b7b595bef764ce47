use crate::listing::Listing;
use crate::price::{self, PriceRule};
use crate::scrape::{ExtractionResult, SiteScraper, SkipReason};
use crate::utils::{element_text, strip_brand_prefix};
use chrono::NaiveDate;
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};

const BASE_URL: &str = "https://www.coolblue.nl/mobiele-telefoons/smartphones?pagina=";

const E: &str = "Invalid selector";
lazy_static! {
    static ref ITEM: Selector =
        Selector::parse("div.product-card__details.js-product-details").expect(E);
    static ref TITLE: Selector = Selector::parse("a.link").expect(E);
    static ref PRICE: Selector =
        Selector::parse("strong.sales-price__current.js-sales-price-current").expect(E);
    static ref NEXT_PAGE: Selector =
        Selector::parse(r#"a[aria-label="Ga naar de volgende pagina"]"#).expect(E);
}

/// Coolblue has no separate brand field; the title's first token stands in.
#[derive(Debug)]
pub struct CoolblueScraper;

impl SiteScraper for CoolblueScraper {
    fn name(&self) -> &'static str {
        "Coolblue"
    }

    fn page_url(&self, page_number: u32) -> String {
        format!("{}{}", BASE_URL, page_number)
    }

    fn item_containers<'a>(&self, doc: &'a Html) -> Vec<ElementRef<'a>> {
        doc.select(&ITEM).collect()
    }

    fn extract(&self, item: ElementRef<'_>, captured_at: NaiveDate) -> ExtractionResult {
        let Some(title_el) = item.select(&TITLE).next() else {
            return ExtractionResult::Skipped(SkipReason::AttributeLookup { field: "title" });
        };
        // Bundle suffixes ("+ hoesje") are not part of the product name.
        let raw_title = element_text(title_el);
        let raw_title = raw_title.split('+').next().unwrap_or("").trim();
        let Some(brand) = raw_title.split_whitespace().next().map(str::to_string) else {
            return ExtractionResult::Skipped(SkipReason::AttributeLookup { field: "brand" });
        };
        let title = strip_brand_prefix(raw_title, &brand);
        if title == "reviews" {
            // Rating card that shares the product-card markup.
            return ExtractionResult::Skipped(SkipReason::Unclassified);
        }

        let Some(price_el) = item.select(&PRICE).next() else {
            return ExtractionResult::Skipped(SkipReason::AttributeLookup { field: "price" });
        };
        let Some(price) = price::normalize(&element_text(price_el), None, PriceRule::CommaDecimal)
        else {
            return ExtractionResult::Skipped(SkipReason::ValueConversion { field: "price" });
        };

        ExtractionResult::Extracted(Listing {
            brand,
            title,
            price,
            seller: "Coolblue".to_string(),
            captured_at,
        })
    }

    fn has_next_page(&self, doc: &Html) -> bool {
        doc.select(&NEXT_PAGE).next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(html: &str) -> Html {
        Html::parse_document(&format!(
            r#"<html><body><div class="product-card__details product-card__custom-breakpoint js-product-details">{}</div></body></html>"#,
            html
        ))
    }

    fn extract_first(doc: &Html) -> ExtractionResult {
        let scraper = CoolblueScraper;
        let items = scraper.item_containers(doc);
        assert_eq!(items.len(), 1);
        scraper.extract(items[0], NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
    }

    #[test]
    fn brand_is_first_title_token() {
        let doc = item(
            r#"
            <a class="link">Apple iPhone 15 128GB + hoesje</a>
            <strong class="sales-price__current js-sales-price-current">1.299,99</strong>
            "#,
        );
        let ExtractionResult::Extracted(listing) = extract_first(&doc) else {
            panic!("expected an extracted listing");
        };
        assert_eq!(listing.brand, "Apple");
        assert_eq!(listing.title, "iPhone 15 128GB");
        assert_eq!(listing.price, 1299.99);
        assert_eq!(listing.seller, "Coolblue");
    }

    #[test]
    fn whole_euro_price_uses_comma_sentinel() {
        let doc = item(
            r#"
            <a class="link">Samsung Galaxy A55</a>
            <strong class="sales-price__current js-sales-price-current">429,-</strong>
            "#,
        );
        let ExtractionResult::Extracted(listing) = extract_first(&doc) else {
            panic!("expected an extracted listing");
        };
        assert_eq!(listing.price, 429.0);
        assert_eq!(listing.title, "Galaxy A55");
    }

    #[test]
    fn review_card_is_skipped() {
        let doc = item(
            r#"
            <a class="link">4.621 reviews</a>
            <strong class="sales-price__current js-sales-price-current">429,-</strong>
            "#,
        );
        let ExtractionResult::Skipped(reason) = extract_first(&doc) else {
            panic!("expected a skip");
        };
        assert_eq!(reason, SkipReason::Unclassified);
    }

    #[test]
    fn missing_price_skips_the_item() {
        let doc = item(r#"<a class="link">Samsung Galaxy A55</a>"#);
        let ExtractionResult::Skipped(reason) = extract_first(&doc) else {
            panic!("expected a skip");
        };
        assert_eq!(reason, SkipReason::AttributeLookup { field: "price" });
    }

    #[test]
    fn price_without_comma_is_a_value_conversion_skip() {
        let doc = item(
            r#"
            <a class="link">Samsung Galaxy A55</a>
            <strong class="sales-price__current js-sales-price-current">429</strong>
            "#,
        );
        let ExtractionResult::Skipped(reason) = extract_first(&doc) else {
            panic!("expected a skip");
        };
        assert_eq!(reason, SkipReason::ValueConversion { field: "price" });
    }

    #[test]
    fn next_page_control_detection() {
        let scraper = CoolblueScraper;
        let with = Html::parse_document(
            r#"<a aria-label="Ga naar de volgende pagina" href="?pagina=2">Volgende</a>"#,
        );
        let without = Html::parse_document(
            r#"<a aria-label="Ga naar de vorige pagina" href="?pagina=1">Vorige</a>"#,
        );
        assert!(scraper.has_next_page(&with));
        assert!(!scraper.has_next_page(&without));
    }

    #[test]
    fn page_url_appends_page_number() {
        assert_eq!(
            CoolblueScraper.page_url(2),
            "https://www.coolblue.nl/mobiele-telefoons/smartphones?pagina=2"
        );
    }
}
