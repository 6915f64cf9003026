// numeric.rs
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static NUMBER_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\d,.]+").expect("invalid regex: number run"));

/// Pulls the first number out of free text such as `"45,2 м²"` or `"1985"`.
///
/// Only the first run of digits, commas and points is looked at. Commas are
/// treated as decimal separators. Units are dropped, never converted.
/// Returns `None` when there is no run or it does not parse as a float.
pub fn clean_numeric_value(value: &str) -> Option<f64> {
    let run = NUMBER_RUN.find(value)?;
    run.as_str().replace(',', ".").parse::<f64>().ok()
}

/// Same as [`clean_numeric_value`], for values of unknown type. Anything
/// that is not a JSON string yields `None`.
pub fn numeric_from_value(value: &Value) -> Option<f64> {
    value.as_str().and_then(clean_numeric_value)
}
