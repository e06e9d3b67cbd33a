// crates/placesearch-core/src/model.rs
use crate::traits::NameMatch;
use log::warn;
use serde::{Deserialize, Serialize};

/// One searchable place.
///
/// `term` is the display label shown in the dropdown ("Rome, Italy").
/// Coordinates, `kind` and `state` are carried through untouched by the
/// matching logic. `state` is always a string; absent values load as `""`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub term: String,
    pub uid: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub state: String,
}

impl PlaceRecord {
    pub fn new(term: impl Into<String>, uid: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            uid: uid.into(),
            lat: 0.0,
            lng: 0.0,
            kind: String::new(),
            state: String::new(),
        }
    }

    pub fn with_coords(mut self, lat: f64, lng: f64) -> Self {
        self.lat = lat;
        self.lng = lng;
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn state(&self) -> &str {
        &self.state
    }
}

impl NameMatch for PlaceRecord {
    fn name_str(&self) -> &str {
        &self.term
    }
}

/// The static, in-memory set of searchable places.
///
/// Built once and never mutated afterwards; every query shares it read-only.
/// Records with a blank `term` are dropped at construction time.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Catalog {
    places: Vec<PlaceRecord>,
}

impl Catalog {
    pub fn new(places: Vec<PlaceRecord>) -> Self {
        let total = places.len();
        let places: Vec<PlaceRecord> = places
            .into_iter()
            .filter(|p| !p.term.trim().is_empty())
            .collect();
        if places.len() < total {
            warn!(
                "catalog: dropped {} place(s) with an empty term",
                total - places.len()
            );
        }
        Self { places }
    }

    pub fn places(&self) -> &[PlaceRecord] {
        &self.places
    }

    pub fn into_places(self) -> Vec<PlaceRecord> {
        self.places
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlaceRecord> {
        self.places.iter()
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Find a place by its unique id.
    pub fn get(&self, uid: &str) -> Option<&PlaceRecord> {
        self.places.iter().find(|p| p.uid == uid)
    }

    /// First place whose display term equals `name`, ignoring case and accents.
    pub fn find_named(&self, name: &str) -> Option<&PlaceRecord> {
        self.places.iter().find(|p| p.is_named(name))
    }
}

impl FromIterator<PlaceRecord> for Catalog {
    fn from_iter<I: IntoIterator<Item = PlaceRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a PlaceRecord;
    type IntoIter = std::slice::Iter<'a, PlaceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.places.iter()
    }
}
