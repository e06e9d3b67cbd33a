// crates/placesearch-core/src/config.rs

//! Tunables of the search engine.
//!
//! The defaults reproduce the fixed behaviour of the autocomplete control:
//! pages of 10, no results below 3 characters, no vocabulary tokens below
//! 4 characters, unbounded nearest-term correction.

use crate::text::{fold_case, fold_key};
use serde::{Deserialize, Serialize};

/// Number of places returned per page.
pub const PAGE_SIZE: usize = 10;

/// Queries shorter than this (in characters) produce no results.
pub const MIN_QUERY_CHARS: usize = 3;

/// Tokens shorter than this (in characters) never enter the correction index.
pub const MIN_TOKEN_CHARS: usize = 4;

/// How display terms and queries are normalized before substring matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextFold {
    /// Unicode lowercase only.
    #[default]
    Case,
    /// Transliterate to ASCII, then lowercase ("Zürich" == "zurich").
    Accents,
}

impl TextFold {
    pub fn apply(self, s: &str) -> String {
        match self {
            TextFold::Accents => fold_key(s),
            TextFold::Case => fold_case(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub page_size: usize,
    pub fold: TextFold,
    /// Corrections farther than this are ignored. `None` keeps the nearest
    /// vocabulary term whatever its distance.
    pub max_correction_distance: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            fold: TextFold::default(),
            max_correction_distance: None,
        }
    }
}

impl SearchConfig {
    /// Sets the page size; zero is bumped to one.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_fold(mut self, fold: TextFold) -> Self {
        self.fold = fold;
        self
    }

    pub fn with_max_correction_distance(mut self, max: Option<usize>) -> Self {
        self.max_correction_distance = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_autocomplete_constants() {
        let cfg = SearchConfig::default();
        assert_eq!(cfg.page_size, 10);
        assert_eq!(cfg.fold, TextFold::Case);
        assert_eq!(cfg.max_correction_distance, None);
    }

    #[test]
    fn zero_page_size_is_clamped() {
        assert_eq!(SearchConfig::default().with_page_size(0).page_size, 1);
    }

    #[test]
    fn fold_modes_differ_on_diacritics() {
        assert_eq!(TextFold::Accents.apply("Zürich"), "zurich");
        assert_eq!(TextFold::Case.apply("Zürich"), "zürich");
    }
}
