#[derive(Debug, thiserror::Error)]
pub enum ScraperError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },
    #[error("Invalid page url: {0}")]
    InvalidUrl(String),
    #[error("Config error: {0}")]
    Config(String),
}
