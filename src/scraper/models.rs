// models.rs
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Source label on the offer page -> canonical record field.
pub const FIELD_MAP: &[(&str, &str)] = &[
    ("Общая площадь", "total_area"),
    ("Жилая площадь", "living_meters"),
    ("Площадь кухни", "kitchen_meters"),
    ("Год постройки", "year_of_construction"),
    ("Ремонт", "finish_type"),
    ("Тип дома", "house_material_type"),
    ("Отопление", "heating_type"),
    ("Парковка", "parking"),
];

/// Labels whose values go through the numeric normalizer.
pub const NUMERIC_LABELS: &[&str] = &[
    "Общая площадь",
    "Жилая площадь",
    "Площадь кухни",
    "Год постройки",
];

/// What the page prints when it has nothing for a field.
pub const NO_INFORMATION: &str = "Нет информации";

pub fn canonical_field(label: &str) -> Option<&'static str> {
    FIELD_MAP
        .iter()
        .find(|(source, _)| *source == label)
        .map(|(_, field)| *field)
}

/// A single field of a [`ListingRecord`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Not found on the page. Serialized as `-1`.
    Unset,
    /// Found, but the number could not be read. Serialized as `null`.
    Null,
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, FieldValue::Unset)
    }
}

impl From<Option<f64>> for FieldValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(FieldValue::Null, FieldValue::Number)
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Unset => serializer.serialize_i64(-1),
            FieldValue::Null => serializer.serialize_none(),
            FieldValue::Number(n) => serializer.serialize_f64(*n),
            FieldValue::Text(s) => serializer.serialize_str(s),
        }
    }
}

/// Flat result of parsing one offer page.
///
/// Every field from [`FIELD_MAP`] is always present; unresolved ones hold
/// [`FieldValue::Unset`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingRecord {
    #[serde(flatten)]
    fields: BTreeMap<&'static str, FieldValue>,
    pub amenities: Vec<String>,
    pub phone: String,
}

impl Default for ListingRecord {
    fn default() -> Self {
        Self {
            fields: FIELD_MAP
                .iter()
                .map(|(_, field)| (*field, FieldValue::Unset))
                .collect(),
            amenities: Vec::new(),
            phone: String::new(),
        }
    }
}

impl ListingRecord {
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Only canonical fields are accepted; returns false for anything else.
    pub fn set(&mut self, field: &str, value: FieldValue) -> bool {
        match self.fields.get_mut(field) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (*k, v))
    }

    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
