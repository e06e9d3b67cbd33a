// crates/placesearch-core/src/engine.rs
use crate::common::EngineStats;
use crate::config::SearchConfig;
use crate::index::TermIndex;
use crate::model::Catalog;
use crate::pager::ResultPage;
use crate::search::QueryPipeline;
use crate::traits::PlaceSearch;
use log::info;
use std::sync::Arc;

/// Owns the catalog and its correction index.
///
/// Construct one at startup and share it (`Arc<SearchEngine>`) with every
/// consumer. Nothing inside changes after [`SearchEngine::with_config`]
/// returns, so concurrent queries need no locking.
#[derive(Clone, Debug)]
pub struct SearchEngine {
    catalog: Catalog,
    /// Place terms after `config.fold`, parallel to `catalog`.
    folded_terms: Vec<String>,
    index: TermIndex,
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_config(catalog, SearchConfig::default())
    }

    pub fn with_config(catalog: Catalog, config: SearchConfig) -> Self {
        let index = TermIndex::from_catalog(&catalog);
        let folded_terms = catalog.iter().map(|p| config.fold.apply(&p.term)).collect();
        info!(
            "search engine ready: {} places, {} vocabulary terms (index depth {})",
            catalog.len(),
            index.len(),
            index.depth()
        );
        Self {
            catalog,
            folded_terms,
            index,
            config,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn index(&self) -> &TermIndex {
        &self.index
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn pipeline(&self) -> QueryPipeline<'_> {
        QueryPipeline::new(&self.catalog, &self.folded_terms, &self.index, &self.config)
    }

    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl PlaceSearch for SearchEngine {
    fn stats(&self) -> EngineStats {
        EngineStats {
            places: self.catalog.len(),
            vocabulary: self.index.len(),
            index_depth: self.index.depth(),
        }
    }

    fn query_page(&self, query: &str, page: usize) -> ResultPage {
        self.pipeline().page(query, page)
    }

    fn correct(&self, token: &str) -> String {
        self.index.correct(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PlaceRecord;

    #[test]
    fn engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchEngine>();
        assert_send_sync::<Arc<SearchEngine>>();
    }

    #[test]
    fn stats_reflect_catalog_and_vocabulary() {
        let engine = SearchEngine::new(Catalog::new(vec![
            PlaceRecord::new("Rome, Italy", "r1"),
            PlaceRecord::new("Milan, Italy", "m1"),
        ]));
        let stats = engine.stats();
        assert_eq!(stats.places, 2);
        // Rome, Italy, Milan
        assert_eq!(stats.vocabulary, 3);
        assert!(stats.index_depth >= 1);
    }

    #[test]
    fn empty_catalog_answers_every_query_with_nothing() {
        let engine = SearchEngine::new(Catalog::default());
        for q in ["rome", "a longer query, with commas", "xyz"] {
            let page = engine.query_page(q, 1);
            assert!(page.options.is_empty());
            assert!(!page.has_more);
        }
        assert_eq!(engine.correct("rome"), "rome");
    }

    #[test]
    fn search_returns_first_page() {
        let engine = SearchEngine::new(
            (0..15)
                .map(|i| PlaceRecord::new(format!("Harbour {i:02}"), format!("h{i}")))
                .collect(),
        );
        let first = engine.search("harbour");
        assert_eq!(first.len(), 10);
        assert_eq!(first, engine.query_page("harbour", 1).options);
    }
}
