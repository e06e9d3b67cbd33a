// crates/placesearch-core/src/traits.rs
use crate::common::EngineStats;
use crate::model::PlaceRecord;
use crate::pager::ResultPage;
use crate::text::fold_key;

/// Name-based matching helpers for types that expose a canonical display name.
///
/// This trait centralizes Unicode‑aware, accent-insensitive and case-insensitive
/// comparisons based on [`fold_key`]. Implementors provide a `&str` view of
/// their canonical name via [`NameMatch::name_str`], and get convenient helpers:
/// - [`NameMatch::is_named`] for equality on the folded form
/// - [`NameMatch::name_contains`] for substring match on the folded form
///
/// # Examples
/// ```rust
/// use placesearch_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Łódź").is_named("lodz"));
/// assert!(Place("Zürich").name_contains("zuri"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}

/// The search operations a place source offers to its consumers.
///
/// [`crate::SearchEngine`] is the in-memory implementation. The
/// [`crate::LoadController`] only depends on this trait, so a UI can be bound
/// to any source that honours the same paging contract.
pub trait PlaceSearch {
    fn stats(&self) -> EngineStats;

    /// One page (1-based) of the results for `query`.
    ///
    /// Total over its inputs: short queries, empty catalogs and pages past
    /// the end all yield an empty page with `has_more == false`.
    ///
    /// ```rust
    /// use placesearch_core::prelude::*;
    ///
    /// let engine = SearchEngine::new(Catalog::new(vec![
    ///     PlaceRecord::new("Rome, Italy", "r1"),
    /// ]));
    ///
    /// let page = engine.query_page("Rime", 1);
    /// assert_eq!(page.options[0].term, "Rome, Italy");
    /// assert!(!page.has_more);
    /// ```
    fn query_page(&self, query: &str, page: usize) -> ResultPage;

    /// One-shot lookup for callers that do not paginate: the first page.
    fn search(&self, query: &str) -> Vec<PlaceRecord> {
        self.query_page(query, 1).options
    }

    /// Nearest vocabulary term for `token`, or `token` itself when the
    /// vocabulary is empty.
    fn correct(&self, token: &str) -> String;
}
