#[derive(Debug, thiserror::Error)]
pub enum CrawlError {
    #[error("Request error")]
    Fetch(#[from] reqwest::Error),
    #[error("CSV error")]
    Csv(#[from] csv::Error),
    #[error("IO error")]
    Io(#[from] std::io::Error),
}
