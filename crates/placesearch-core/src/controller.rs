// crates/placesearch-core/src/controller.rs

//! # Incremental Load Controller
//!
//! The paging protocol an async autocomplete control binds to. Each call
//! carries an opaque `additional` cursor (`{ page }`, starting at 1) and gets
//! back one page plus the cursor for the next call.
//!
//! Debouncing and discarding stale responses belong to the caller. For the
//! latter, [`RequestTracker`] hands out increasing request ids and tells
//! whether a completion is still the latest one.

use crate::engine::SearchEngine;
use crate::model::PlaceRecord;
use crate::traits::PlaceSearch;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Pagination state threaded through successive `load_page` calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Additional {
    pub page: usize,
}

impl Default for Additional {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl Additional {
    pub fn next(self) -> Self {
        Self {
            page: self.page.saturating_add(1),
        }
    }
}

/// A page in the incremental form.
///
/// Serializes as `{ "options": [...], "hasMore": bool, "additional": { "page": n } }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadedPage {
    pub options: Vec<PlaceRecord>,
    pub has_more: bool,
    pub additional: Additional,
}

#[derive(Debug)]
pub struct LoadController<S: PlaceSearch = SearchEngine> {
    source: Arc<S>,
}

impl<S: PlaceSearch> Clone for LoadController<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<S: PlaceSearch> LoadController<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Loads the page named by `additional` for `query`.
    ///
    /// `loaded_so_far` is accepted for the UI's accumulation pattern but not
    /// consulted: every page is computed from the full result set. The
    /// returned cursor always advances by one, even on the last page; the
    /// caller stops asking once `has_more` is false.
    ///
    /// ```rust
    /// use placesearch_core::prelude::*;
    ///
    /// let engine = SearchEngine::new(
    ///     (0..12).map(|i| PlaceRecord::new(format!("Seaport {i}"), i.to_string())).collect(),
    /// );
    /// let controller = LoadController::new(engine.into_shared());
    ///
    /// let first = controller.load_page("port", &[], Additional::default());
    /// assert_eq!(first.options.len(), 10);
    /// assert!(first.has_more);
    ///
    /// let second = controller.load_page("port", &first.options, first.additional);
    /// assert_eq!(second.options.len(), 2);
    /// assert!(!second.has_more);
    /// assert_eq!(second.additional.page, 3);
    /// ```
    pub fn load_page(
        &self,
        query: &str,
        _loaded_so_far: &[PlaceRecord],
        additional: Additional,
    ) -> LoadedPage {
        let page = self.source.query_page(query, additional.page);
        LoadedPage {
            options: page.options,
            has_more: page.has_more,
            additional: additional.next(),
        }
    }

    /// Async form of [`LoadController::load_page`]. Resolves immediately; it
    /// exists so async callers can treat a local source like a remote one.
    pub async fn load_page_async(
        &self,
        query: &str,
        loaded_so_far: &[PlaceRecord],
        additional: Additional,
    ) -> LoadedPage {
        self.load_page(query, loaded_so_far, additional)
    }

    /// One-shot, non-paginated lookup (first page).
    pub fn search(&self, query: &str) -> Vec<PlaceRecord> {
        self.source.search(query)
    }
}

/// Hands out monotonically increasing request ids so a caller can drop
/// completions of superseded queries.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: AtomicU64,
}

impl RequestTracker {
    pub const fn new() -> Self {
        Self {
            latest: AtomicU64::new(0),
        }
    }

    /// Registers a new request; every earlier id becomes stale.
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, id: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == id
    }

    pub fn latest(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }
}
