// crates/placesearch-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a built engine.
///
/// Returned by [`crate::PlaceSearch::stats`]. `vocabulary` counts the distinct
/// tokens held by the correction index, `index_depth` is the longest
/// root-to-leaf path of that index (0 when it is empty).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineStats {
    pub places: usize,
    pub vocabulary: usize,
    pub index_depth: usize,
}
