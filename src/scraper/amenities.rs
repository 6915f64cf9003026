// amenities.rs
use crate::scraper::summary::elem_text;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

const AMENITIES_HEADING: &str = "В квартире есть";

static HEADING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h2").expect("invalid selector: h2"));
static DIV: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div").expect("invalid selector: div"));
static SPAN: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span").expect("invalid selector: span"));

/// One way of picking amenity items out of the section container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AmenityStrategy {
    /// `div` descendants whose class attribute contains the pattern.
    DivClassContains(&'static str),
    /// Every `span` descendant.
    Spans,
}

/// Tried in order; the first strategy that matches anything wins.
pub const AMENITY_STRATEGIES: &[AmenityStrategy] =
    &[AmenityStrategy::DivClassContains("item"), AmenityStrategy::Spans];

impl AmenityStrategy {
    pub fn select<'a>(&self, container: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        match *self {
            AmenityStrategy::DivClassContains(pattern) => container
                .select(&DIV)
                .filter(|div| {
                    div.value()
                        .attr("class")
                        .is_some_and(|class| class.contains(pattern))
                })
                .collect(),
            AmenityStrategy::Spans => container.select(&SPAN).collect(),
        }
    }
}

/// Lists what the "В квартире есть" section says the flat has.
///
/// No heading or no container after it is not an error: the list is empty.
pub fn parse_amenities(document: &Html) -> Vec<String> {
    let Some(container) = find_container(document) else {
        return Vec::new();
    };

    let elements = AMENITY_STRATEGIES
        .iter()
        .map(|strategy| strategy.select(container))
        .find(|found| !found.is_empty())
        .unwrap_or_default();

    elements
        .into_iter()
        .map(|elem| elem_text(elem).trim().to_string())
        .filter(|text| !text.is_empty())
        .collect()
}

fn find_container(document: &Html) -> Option<ElementRef<'_>> {
    let heading = document
        .select(&HEADING)
        .find(|h2| elem_text(*h2).contains(AMENITIES_HEADING))?;

    heading
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sibling| sibling.value().name() == "div")
}
