// src/tests/scraper_tests/summary_tests.rs
use crate::scraper::summary::parse_summary_info;
use crate::tests::utils::{page, summary_item};
use scraper::Html;

#[test]
fn no_marker_gives_empty_map() {
    let doc = Html::parse_document(&page("<div><p>Общая площадь</p><p>45 м²</p></div>"));
    assert!(parse_summary_info(&doc).is_empty());
}

#[test]
fn pairs_are_trimmed() {
    let body = r#"<div data-name="OfferSummaryInfoItem">
        <p>  Общая площадь </p>
        <span>
            45,2 м²
        </span>
    </div>"#;
    let info = parse_summary_info(&Html::parse_document(&page(body)));

    assert_eq!(info.len(), 1);
    assert_eq!(info.get("Общая площадь").map(String::as_str), Some("45,2 м²"));
}

#[test]
fn item_with_one_part_is_skipped() {
    let body = format!(
        r#"<div data-name="OfferSummaryInfoItem"><p>Парковка</p></div>{}"#,
        summary_item("Ремонт", "Евроремонт")
    );
    let info = parse_summary_info(&Html::parse_document(&page(&body)));

    assert_eq!(info.len(), 1);
    assert!(!info.contains_key("Парковка"));
    assert_eq!(info.get("Ремонт").map(String::as_str), Some("Евроремонт"));
}

#[test]
fn empty_label_is_skipped() {
    let body = summary_item("   ", "Центральное");
    assert!(parse_summary_info(&Html::parse_document(&page(&body))).is_empty());
}

#[test]
fn repeated_label_keeps_last_value() {
    let body = format!(
        "{}{}",
        summary_item("Отопление", "Центральное"),
        summary_item("Отопление", "Автономное")
    );
    let info = parse_summary_info(&Html::parse_document(&page(&body)));

    assert_eq!(info.get("Отопление").map(String::as_str), Some("Автономное"));
}

#[test]
fn other_tags_are_not_the_marker() {
    let body = r#"<section data-name="OfferSummaryInfoItem"><p>Ремонт</p><p>Дизайнерский</p></section>"#;
    assert!(parse_summary_info(&Html::parse_document(&page(body))).is_empty());
}
