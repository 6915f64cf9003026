// page.rs
use crate::scraper::amenities::parse_amenities;
use crate::scraper::models::{canonical_field, FieldValue, ListingRecord, NO_INFORMATION, NUMERIC_LABELS};
use crate::scraper::numeric::clean_numeric_value;
use crate::scraper::summary::parse_summary_info;
use crate::scraper::{ParserConfig, ScraperError, Transport};
use scraper::Html;
use url::Url;

const TOO_MANY_REQUESTS: u16 = 429;
const PHONE_PREFIX: &str = "+7";
const PHONE_WINDOW: usize = 16;

/// Parses a single flat offer page.
///
/// Each instance is bound to one address. Every `parse_page` call fetches
/// and parses from scratch.
pub struct FlatPageParser<T: Transport> {
    transport: T,
    url: String,
    config: ParserConfig,
    page_html: String,
    document: Option<Html>,
}

impl<T: Transport> FlatPageParser<T> {
    pub fn new(transport: T, url: &str) -> Result<Self, ScraperError> {
        Self::with_config(transport, url, ParserConfig::default())
    }

    pub fn with_config(transport: T, url: &str, config: ParserConfig) -> Result<Self, ScraperError> {
        let url = Url::parse(url).map_err(|e| ScraperError::InvalidUrl(format!("{url}: {e}")))?;

        Ok(Self {
            transport,
            url: url.to_string(),
            config,
            page_html: String::new(),
            document: None,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetches the page once. On 429 it pauses for the configured time and
    /// then judges the same response; there is no second request.
    pub fn load(&mut self) -> Result<(), ScraperError> {
        self.page_html.clear();
        self.document = None;

        tracing::debug!(url = %self.url, "Fetching offer page");
        let resp = self.transport.get(&self.url)?;

        if resp.status == TOO_MANY_REQUESTS {
            tracing::warn!(
                url = %self.url,
                pause = ?self.config.throttle_pause,
                "Rate limited, pausing"
            );
            std::thread::sleep(self.config.throttle_pause);
        }

        let resp = resp.error_for_status().inspect_err(|e| {
            tracing::warn!(url = %self.url, error = %e, "Offer page request failed");
        })?;

        self.document = Some(Html::parse_document(&resp.text));
        self.page_html = resp.text;
        Ok(())
    }

    /// Builds the record from the loaded page. Without a loaded page every
    /// field stays unresolved.
    pub fn extract(&self) -> ListingRecord {
        let mut record = ListingRecord::default();

        let Some(document) = self.document.as_ref() else {
            return record;
        };

        let info = parse_summary_info(document);
        tracing::debug!(url = %self.url, items = info.len(), "Summary items found");

        for (label, raw) in &info {
            let Some(field) = canonical_field(label) else {
                continue;
            };
            if raw == NO_INFORMATION {
                continue;
            }

            let value = if NUMERIC_LABELS.contains(&label.as_str()) {
                FieldValue::from(clean_numeric_value(raw))
            } else {
                FieldValue::Text(raw.clone())
            };
            record.set(field, value);
        }

        record.amenities = parse_amenities(document);
        record.phone = extract_phone(&self.page_html);

        record
    }

    pub fn parse_page(&mut self) -> Result<ListingRecord, ScraperError> {
        self.load()?;
        let record = self.extract();

        tracing::info!(
            url = %self.url,
            amenities = record.amenities.len(),
            has_phone = !record.phone.is_empty(),
            "Parsed offer page"
        );
        Ok(record)
    }
}

/// Takes the first `+7` in the raw page and reads a fixed window after it,
/// cut at the first `"`, with spaces and hyphens removed.
pub fn extract_phone(html: &str) -> String {
    let Some(start) = html.find(PHONE_PREFIX) else {
        return String::new();
    };

    let window: String = html[start..].chars().take(PHONE_WINDOW).collect();
    window
        .split('"')
        .next()
        .unwrap_or_default()
        .chars()
        .filter(|c| *c != ' ' && *c != '-')
        .collect()
}
