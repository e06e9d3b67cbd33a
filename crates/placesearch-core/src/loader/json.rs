// crates/placesearch-core/src/loader/json.rs

// ---------------------------------------------------------------------------
// FILE GUARD: This entire file is skipped if 'json' feature is missing.
// ---------------------------------------------------------------------------

use super::common_io;
use crate::error::{PlaceError, Result};
use crate::model::Catalog;
use crate::raw::places_from_values;
use log::info;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl Catalog {
    /// Builds a catalog from a JSON array of place records.
    ///
    /// Individual entries are normalized leniently (see [`crate::raw`]);
    /// only a document that is not an array is rejected.
    ///
    /// ```rust
    /// use placesearch_core::Catalog;
    ///
    /// let catalog = Catalog::from_json_str(
    ///     r#"[{"term": "Rome, Italy", "uid": "r1", "lat": 41.9, "lng": 12.5, "type": "city", "state": null}]"#,
    /// ).unwrap();
    /// assert_eq!(catalog.places()[0].state, "");
    /// ```
    pub fn from_json_str(s: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(s)?)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_value(serde_json::from_reader(reader)?)
    }

    /// Reads a `.json` (or, with `compact`, `.json.gz`) catalog from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = common_io::open_stream(path)?;
        let catalog = Self::from_json_reader(reader)?;
        info!("loaded {} places from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Array(items) => Ok(Catalog::new(places_from_values(&items))),
            other => Err(PlaceError::InvalidData(format!(
                "expected a JSON array of places, found {}",
                kind_of(&other)
            ))),
        }
    }
}
