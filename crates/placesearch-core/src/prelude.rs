//! placesearch prelude: bring common types and traits into scope for demos.

pub use crate::common::EngineStats;
pub use crate::config::{SearchConfig, TextFold};
pub use crate::controller::{Additional, LoadController, LoadedPage, RequestTracker};
pub use crate::engine::SearchEngine;
pub use crate::error::{PlaceError, Result};
pub use crate::model::{Catalog, PlaceRecord};
pub use crate::pager::ResultPage;
pub use crate::traits::{NameMatch, PlaceSearch};
