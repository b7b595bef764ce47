use lazy_regex::regex;
use scraper::ElementRef;

/// Collapses runs of whitespace and trims both ends.
pub(crate) fn squish(text: &str) -> String {
    regex!(r"\s+").replace_all(text.trim(), " ").into_owned()
}

pub(crate) fn element_text(el: ElementRef<'_>) -> String {
    squish(&el.text().collect::<String>())
}

/// Titles often repeat the brand as their first token; keep only the rest.
pub(crate) fn strip_brand_prefix(title: &str, brand: &str) -> String {
    match title.strip_prefix(brand) {
        Some(rest) => rest.trim_start().to_string(),
        None => title.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn squish_collapses_inner_whitespace() {
        assert_eq!(squish("  Samsung\n   Galaxy  S24 "), "Samsung Galaxy S24");
    }

    #[test]
    fn brand_prefix_is_stripped() {
        assert_eq!(strip_brand_prefix("Samsung Galaxy S24", "Samsung"), "Galaxy S24");
        assert_eq!(strip_brand_prefix("Galaxy S24", "Samsung"), "Galaxy S24");
        assert_eq!(strip_brand_prefix("Samsung", "Samsung"), "");
    }
}
