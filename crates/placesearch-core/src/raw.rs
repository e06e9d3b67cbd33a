// crates/placesearch-core/src/raw.rs

// ---------------------------------------------------------------------------
// FILE GUARD: only compiled with the 'json' feature.
// ---------------------------------------------------------------------------

//! Lenient conversion of source JSON entries into [`PlaceRecord`]s.
//!
//! Datasets in the wild mix types (`"lat": "41.9"`, `"state": null`,
//! numeric ids), so each array element is read as a [`serde_json::Value`]
//! and coerced field by field instead of failing the whole load.

use crate::model::PlaceRecord;
use log::warn;
use serde_json::{Map, Value};

/// Parses a coordinate given either as a JSON number or a numeric string.
/// Anything else, including non-finite values, reads as `None`.
pub fn parse_opt_f64(v: Option<&Value>) -> Option<f64> {
    let f = match v? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    f.is_finite().then_some(f)
}

fn string_or_empty(obj: &Map<String, Value>, key: &str) -> String {
    match obj.get(key) {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

/// Ids are stable strings; numeric ids are stringified.
fn uid_of(obj: &Map<String, Value>) -> String {
    match obj.get("uid") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Converts one source entry. Returns `None` when the entry is not an
/// object or has no usable (string, non-blank) `term`.
pub fn place_from_value(value: &Value) -> Option<PlaceRecord> {
    let obj = value.as_object()?;
    let term = match obj.get("term") {
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_owned(),
        _ => return None,
    };

    Some(PlaceRecord {
        term,
        uid: uid_of(obj),
        lat: parse_opt_f64(obj.get("lat")).unwrap_or(0.0),
        lng: parse_opt_f64(obj.get("lng")).unwrap_or(0.0),
        kind: string_or_empty(obj, "type"),
        state: string_or_empty(obj, "state"),
    })
}

/// Converts a whole source array, skipping (and logging) unusable entries.
pub fn places_from_values(values: &[Value]) -> Vec<PlaceRecord> {
    let places: Vec<PlaceRecord> = values.iter().filter_map(place_from_value).collect();
    let skipped = values.len() - places.len();
    if skipped > 0 {
        warn!("catalog: skipped {skipped} malformed entries without a usable term");
    }
    places
}
