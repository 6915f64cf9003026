// transport.rs
use crate::scraper::ScraperError;
use reqwest::blocking::Client;

/// A fetched page: the final status code plus the body text.
#[derive(Debug, Clone)]
pub struct PageResponse {
    pub url: String,
    pub status: u16,
    pub text: String,
}

impl PageResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn error_for_status(self) -> Result<Self, ScraperError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ScraperError::Status {
                status: self.status,
                url: self.url,
            })
        }
    }
}

/// Blocking "get by address". One call, one request; no retries here.
pub trait Transport {
    fn get(&self, url: &str) -> Result<PageResponse, ScraperError>;
}

impl Transport for Client {
    fn get(&self, url: &str) -> Result<PageResponse, ScraperError> {
        let resp = Client::get(self, url)
            .send()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let text = resp
            .text()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(PageResponse {
            url: url.to_string(),
            status,
            text,
        })
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> Result<PageResponse, ScraperError> {
        (**self).get(url)
    }
}
