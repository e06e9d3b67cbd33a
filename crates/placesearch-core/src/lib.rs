// crates/placesearch-core/src/lib.rs

//! Typo-tolerant, incrementally paginated destination search.
//!
//! A [`Catalog`] of places is loaded once, a BK-tree [`TermIndex`] is built
//! from the words of their display terms, and a [`SearchEngine`] answers
//! autocomplete queries: substring matches united with matches on the
//! nearest vocabulary word of each query term, deduplicated and cut into
//! pages of 10. A [`LoadController`] wraps it in the `{ page }` cursor
//! protocol an async dropdown control expects.
//!
//! ```rust
//! use placesearch_core::prelude::*;
//!
//! let catalog = Catalog::new(vec![
//!     PlaceRecord::new("Rome, Italy", "r1").with_kind("city"),
//!     PlaceRecord::new("Lisbon, Portugal", "l1").with_kind("city"),
//! ]);
//! let controller = LoadController::new(SearchEngine::new(catalog).into_shared());
//!
//! let page = controller.load_page("Rime", &[], Additional::default());
//! assert_eq!(page.options[0].uid, "r1");
//! assert_eq!(page.additional.page, 2);
//! ```

pub mod common;
pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod index;
pub mod loader;
pub mod model;
pub mod pager;
pub mod prelude;
// Shared Raw Input (lenient JSON normalization)
#[cfg(feature = "json")]
#[doc(hidden)]
pub mod raw;
pub mod search;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::EngineStats;
pub use crate::config::{SearchConfig, TextFold, MIN_QUERY_CHARS, MIN_TOKEN_CHARS, PAGE_SIZE};
pub use crate::controller::{Additional, LoadController, LoadedPage, RequestTracker};
pub use crate::engine::SearchEngine;
pub use crate::error::{PlaceError, Result};
pub use crate::index::{Correction, TermIndex};
pub use crate::model::{Catalog, PlaceRecord};
pub use crate::pager::{Pager, ResultPage};
pub use crate::search::{QueryPipeline, QueryPlan, SubTerm};
pub use crate::traits::{NameMatch, PlaceSearch};
