// summary.rs
use scraper::{ElementRef, Html, Selector};
use std::collections::HashMap;
use std::sync::LazyLock;

static SUMMARY_ITEM: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"div[data-name="OfferSummaryInfoItem"]"#).expect("invalid selector: summary item")
});
static TEXT_PART: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p, span").expect("invalid selector: text part"));

pub(crate) fn elem_text(element: ElementRef) -> String {
    element.text().collect::<String>()
}

/// Collects the label/value pairs from the "О квартире" and "О доме" blocks.
///
/// Each summary item contributes its first two `p`/`span` descendants as
/// label and value. Items with fewer parts or an empty label are skipped;
/// a repeated label keeps the last value.
pub fn parse_summary_info(document: &Html) -> HashMap<String, String> {
    let mut summary = HashMap::new();

    for item in document.select(&SUMMARY_ITEM) {
        let mut parts = item.select(&TEXT_PART);
        let (Some(label), Some(value)) = (parts.next(), parts.next()) else {
            continue;
        };

        let label = elem_text(label).trim().to_string();
        if label.is_empty() {
            continue;
        }
        summary.insert(label, elem_text(value).trim().to_string());
    }

    summary
}
