// crates/placesearch-core/src/search.rs

//! # Query Pipeline
//!
//! Maps a raw query and a page number to a page of places:
//!
//! 1. queries under [`MIN_QUERY_CHARS`] characters stop here with no results;
//! 2. the query is split on whitespace/comma runs into sub-terms;
//! 3. each sub-term is corrected to its nearest vocabulary term;
//! 4. a place matches when its term contains the query **or** any
//!    correction, compared case-insensitively;
//! 5. matches are deduplicated by term (first in catalog order wins) and paged.
//!
//! The pipeline borrows everything from its [`crate::SearchEngine`] and keeps
//! no state of its own, so the same inputs always give the same page.

use crate::config::{SearchConfig, MIN_QUERY_CHARS};
use crate::index::TermIndex;
use crate::model::{Catalog, PlaceRecord};
use crate::pager::{Pager, ResultPage};
use crate::text::{char_len, split_query};
use log::debug;
use serde::Serialize;
use std::collections::HashSet;

/// How one sub-term of a query was corrected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubTerm {
    pub raw: String,
    /// `None` when the vocabulary is empty or the nearest term lies beyond
    /// the configured distance cap.
    pub corrected: Option<String>,
    pub distance: Option<usize>,
}

/// The decomposition of a query, as the pipeline sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QueryPlan {
    pub query: String,
    pub folded: String,
    pub sub_terms: Vec<SubTerm>,
}

impl QueryPlan {
    /// Distinct folded corrections, in sub-term order.
    fn folded_corrections(&self, config: &SearchConfig) -> Vec<String> {
        let mut out: Vec<String> = Vec::with_capacity(self.sub_terms.len());
        for corrected in self.sub_terms.iter().filter_map(|s| s.corrected.as_deref()) {
            let folded = config.fold.apply(corrected);
            if !folded.is_empty() && !out.contains(&folded) {
                out.push(folded);
            }
        }
        out
    }
}

/// `true` when `query` is long enough to be searched at all.
#[inline]
pub fn is_searchable(query: &str) -> bool {
    char_len(query) >= MIN_QUERY_CHARS
}

#[derive(Clone, Copy, Debug)]
pub struct QueryPipeline<'a> {
    catalog: &'a Catalog,
    folded_terms: &'a [String],
    index: &'a TermIndex,
    config: &'a SearchConfig,
}

impl<'a> QueryPipeline<'a> {
    /// `folded_terms[i]` must be `config.fold` applied to the term of the
    /// i-th catalog place.
    pub(crate) fn new(
        catalog: &'a Catalog,
        folded_terms: &'a [String],
        index: &'a TermIndex,
        config: &'a SearchConfig,
    ) -> Self {
        debug_assert_eq!(catalog.len(), folded_terms.len());
        Self {
            catalog,
            folded_terms,
            index,
            config,
        }
    }

    pub fn plan(&self, query: &str) -> QueryPlan {
        let sub_terms = split_query(query)
            .map(|raw| {
                let hit = self.index.closest(raw).filter(|c| {
                    self.config
                        .max_correction_distance
                        .map_or(true, |max| c.distance <= max)
                });
                SubTerm {
                    raw: raw.to_owned(),
                    corrected: hit.map(|c| c.term.to_owned()),
                    distance: hit.map(|c| c.distance),
                }
            })
            .collect();

        QueryPlan {
            query: query.to_owned(),
            folded: self.config.fold.apply(query),
            sub_terms,
        }
    }

    /// The full, deduplicated match set for `query` (not paged).
    pub fn matches(&self, query: &str) -> Vec<&'a PlaceRecord> {
        if !is_searchable(query) {
            return Vec::new();
        }

        let plan = self.plan(query);
        let corrections = plan.folded_corrections(self.config);
        debug!(
            "query {:?}: {} sub-term(s), corrections {:?}",
            query,
            plan.sub_terms.len(),
            corrections
        );

        self.collect(|folded| {
            folded.contains(&plan.folded) || corrections.iter().any(|c| folded.contains(c.as_str()))
        })
    }

    /// Substring-only matches, without any correction. Always a subset of
    /// [`QueryPipeline::matches`] for the same query.
    pub fn exact_matches(&self, query: &str) -> Vec<&'a PlaceRecord> {
        if !is_searchable(query) {
            return Vec::new();
        }
        let folded_query = self.config.fold.apply(query);
        self.collect(|folded| folded.contains(&folded_query))
    }

    pub fn page(&self, query: &str, page: usize) -> ResultPage {
        if !is_searchable(query) {
            return ResultPage::empty();
        }
        let all = self.matches(query);
        Pager::new(self.config.page_size).paginate(&all, page)
    }

    fn collect<F>(&self, is_match: F) -> Vec<&'a PlaceRecord>
    where
        F: Fn(&str) -> bool,
    {
        let mut seen: HashSet<&'a str> = HashSet::new();
        self.catalog
            .iter()
            .zip(self.folded_terms)
            .filter(|(_, folded)| is_match(folded))
            .map(|(place, _)| place)
            .filter(|&place| seen.insert(place.term.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{SearchConfig, TextFold};
    use crate::engine::SearchEngine;
    use crate::model::{Catalog, PlaceRecord};

    fn engine(terms: &[&str]) -> SearchEngine {
        SearchEngine::new(Catalog::new(
            terms
                .iter()
                .enumerate()
                .map(|(i, t)| PlaceRecord::new(*t, format!("p{i}")))
                .collect(),
        ))
    }

    fn terms(places: &[&PlaceRecord]) -> Vec<String> {
        places.iter().map(|p| p.term.clone()).collect()
    }

    #[test]
    fn short_queries_are_not_searched() {
        let e = engine(&["Rome, Italy", "Roma Termini"]);
        let p = e.pipeline();
        for q in ["", "R", "Ro", "ab"] {
            assert!(p.matches(q).is_empty(), "{q:?}");
            assert_eq!(p.page(q, 1), crate::pager::ResultPage::empty());
        }
    }

    #[test]
    fn typo_surfaces_place_through_correction() {
        let e = engine(&["Rome, Italy"]);
        let hits = e.pipeline().matches("Rime");
        assert_eq!(terms(&hits), ["Rome, Italy"]);
        assert!(e.pipeline().exact_matches("Rime").is_empty());
    }

    #[test]
    fn default_matching_is_case_insensitive_only() {
        let e = engine(&["Zürich, Switzerland", "東京, Japan", "Straße am Meer"]);
        let p = e.pipeline();
        assert_eq!(terms(&p.exact_matches("ZÜRICH")), ["Zürich, Switzerland"]);
        assert_eq!(terms(&p.exact_matches("straße")), ["Straße am Meer"]);
        assert!(p.exact_matches("zurich").is_empty());
        assert!(p.exact_matches("strasse").is_empty());
        assert!(p.exact_matches("dong").is_empty());
    }

    #[test]
    fn accent_fold_is_opt_in() {
        let catalog = Catalog::new(vec![
            PlaceRecord::new("Zürich, Switzerland", "z"),
            PlaceRecord::new("Köln, Germany", "k"),
        ]);
        let e = SearchEngine::with_config(
            catalog,
            SearchConfig::default().with_fold(TextFold::Accents),
        );
        assert_eq!(terms(&e.pipeline().exact_matches("ZURICH")), ["Zürich, Switzerland"]);
        assert_eq!(terms(&e.pipeline().exact_matches("koln")), ["Köln, Germany"]);
    }

    #[test]
    fn duplicate_terms_keep_first_record() {
        let catalog = Catalog::new(vec![
            PlaceRecord::new("Paris, France", "first"),
            PlaceRecord::new("Paris, France", "second"),
            PlaceRecord::new("Paris, Texas", "tx"),
        ]);
        let e = SearchEngine::new(catalog);
        let hits = e.pipeline().matches("paris");
        let uids: Vec<_> = hits.iter().map(|p| p.uid.as_str()).collect();
        assert_eq!(uids, ["first", "tx"]);
    }

    #[test]
    fn results_follow_catalog_order() {
        let e = engine(&["Lisbon, Portugal", "Porto, Portugal", "Newport, Wales"]);
        assert_eq!(
            terms(&e.pipeline().exact_matches("port")),
            ["Lisbon, Portugal", "Porto, Portugal", "Newport, Wales"]
        );
    }

    #[test]
    fn each_sub_term_is_corrected() {
        let e = engine(&["Rome, Italy", "Florence, Italy", "Berlin, Germany"]);
        let plan = e.pipeline().plan("Flarence, Itly");
        let corrected: Vec<_> = plan
            .sub_terms
            .iter()
            .map(|s| s.corrected.as_deref())
            .collect();
        assert_eq!(corrected, [Some("Florence"), Some("Italy")]);

        let hits = e.pipeline().matches("Flarence, Itly");
        assert_eq!(terms(&hits), ["Rome, Italy", "Florence, Italy"]);
    }

    #[test]
    fn distance_cap_drops_far_corrections() {
        let catalog = Catalog::new(vec![PlaceRecord::new("Rome, Italy", "r1")]);
        let e = SearchEngine::with_config(
            catalog,
            SearchConfig::default().with_max_correction_distance(Some(1)),
        );
        assert_eq!(e.pipeline().matches("Rime").len(), 1);
        assert!(e.pipeline().matches("Oslo").is_empty());
    }

    #[test]
    fn empty_vocabulary_degrades_to_substring() {
        // Only short tokens: nothing enters the index.
        let e = engine(&["Bay of Ely"]);
        assert!(e.index().is_empty());
        assert_eq!(e.pipeline().matches("of E").len(), 1);
        assert!(e.pipeline().matches("Bya").is_empty());
        let plan = e.pipeline().plan("Bya");
        assert_eq!(plan.sub_terms[0].corrected, None);
    }
}
