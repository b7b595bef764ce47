use chrono::NaiveDate;
use serde::Serialize;

/// One normalized smartphone listing, the unit handed to storage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    #[serde(rename = "Brand")]
    pub brand: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "Seller")]
    pub seller: String,
    #[serde(rename = "Date")]
    pub captured_at: NaiveDate,
}
