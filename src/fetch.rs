use crate::error::CrawlError;

/// Raw-markup retrieval. Separate from parsing so traversal can run
/// against fixture pages in tests.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String, CrawlError>;
}

pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, CrawlError> {
        let client = reqwest::blocking::Client::builder().build()?;
        Ok(HttpFetcher { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, CrawlError> {
        Ok(self.client.get(url).send()?.error_for_status()?.text()?)
    }
}
