// src/tests/utils.rs
use crate::scraper::{PageResponse, ParserConfig, ScraperError, Transport};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::time::Duration;

pub const OFFER_URL: &str = "https://www.cian.ru/sale/flat/300000001/";

/// Serves queued responses in order and counts requests.
pub struct StubTransport {
    responses: RefCell<VecDeque<(u16, String)>>,
    pub calls: Cell<usize>,
}

impl StubTransport {
    pub fn new(responses: Vec<(u16, &str)>) -> Self {
        Self {
            responses: RefCell::new(
                responses
                    .into_iter()
                    .map(|(status, body)| (status, body.to_string()))
                    .collect(),
            ),
            calls: Cell::new(0),
        }
    }

    pub fn ok(body: &str) -> Self {
        Self::new(vec![(200, body)])
    }
}

impl Transport for StubTransport {
    fn get(&self, url: &str) -> Result<PageResponse, ScraperError> {
        self.calls.set(self.calls.get() + 1);
        let (status, text) = self
            .responses
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| ScraperError::Network("no queued response".into()))?;

        Ok(PageResponse {
            url: url.to_string(),
            status,
            text,
        })
    }
}

pub fn no_pause_config() -> ParserConfig {
    ParserConfig {
        throttle_pause: Duration::ZERO,
        ..ParserConfig::default()
    }
}

pub fn summary_item(label: &str, value: &str) -> String {
    format!(
        r#"<div data-name="OfferSummaryInfoItem"><p class="label">{label}</p><p class="value">{value}</p></div>"#
    )
}

pub fn page(body: &str) -> String {
    format!("<!DOCTYPE html><html><head><title>offer</title></head><body>{body}</body></html>")
}
