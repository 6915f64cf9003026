pub mod amenities;
pub mod config;
pub mod models;
pub mod numeric;
pub mod page;
mod scraper_error;
pub mod summary;
pub mod transport;

pub use config::ParserConfig;
pub use models::{FieldValue, ListingRecord, FIELD_MAP};
pub use page::FlatPageParser;
pub use scraper_error::ScraperError;
pub use transport::{PageResponse, Transport};
