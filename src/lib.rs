pub mod scraper;


pub use crate::scraper::{
    FieldValue, FlatPageParser, ListingRecord, PageResponse, ParserConfig, ScraperError,
    Transport,
};
