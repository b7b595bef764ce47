use crate::error::CrawlError;
use crate::listing::Listing;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

const HEADER: [&str; 5] = ["Brand", "Title", "Price", "Seller", "Date"];

/// Renders listings as CSV with the `Brand,Title,Price,Seller,Date` header.
pub fn to_csv(listings: &[Listing]) -> Result<String, CrawlError> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        if listings.is_empty() {
            // serialize() only emits the header once it sees a record.
            writer.write_record(HEADER)?;
        }
        for listing in listings {
            writer.serialize(listing)?;
        }
        writer.flush()?;
    }
    Ok(String::from_utf8(buf).expect("CSV output is UTF-8"))
}

/// Writes one site's listings to `{date}_{site}_products.csv` under `dir`.
pub fn write_csv(
    dir: &Path,
    site: &str,
    date: NaiveDate,
    listings: &[Listing],
) -> Result<PathBuf, CrawlError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}_{}_products.csv", date, site));
    fs::write(&path, to_csv(listings)?)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn listing(title: &str) -> Listing {
        Listing {
            brand: "Samsung".to_string(),
            title: title.to_string(),
            price: 299.99,
            seller: "Bol".to_string(),
            captured_at: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        }
    }

    #[test]
    fn header_then_one_row_per_listing() {
        let csv = to_csv(&[listing("Galaxy S24")]).unwrap();
        assert_eq!(
            csv,
            "Brand,Title,Price,Seller,Date\nSamsung,Galaxy S24,299.99,Bol,2024-01-15\n"
        );
    }

    #[test]
    fn empty_run_still_gets_a_header() {
        assert_eq!(to_csv(&[]).unwrap(), "Brand,Title,Price,Seller,Date\n");
    }

    #[test]
    fn fields_with_delimiters_are_quoted() {
        let csv = to_csv(&[listing("Galaxy S24, 5G editie")]).unwrap();
        assert!(csv.contains("\"Galaxy S24, 5G editie\""));
    }

    #[test]
    fn file_name_carries_date_and_site() {
        let dir = std::env::temp_dir().join(format!("phone-price-crawler-{}", std::process::id()));
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let path = write_csv(&dir, "bol", date, &[listing("Galaxy S24")]).unwrap();
        assert_eq!(path, dir.join("2024-01-15_bol_products.csv"));
        assert!(fs::read_to_string(&path).unwrap().starts_with("Brand,Title"));
        fs::remove_dir_all(&dir).unwrap();
    }
}
