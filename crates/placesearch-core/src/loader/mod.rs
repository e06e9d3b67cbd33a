// crates/placesearch-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates to
//! specific parsers (JSON source vs binary snapshot).

use crate::error::Result;
use crate::model::Catalog;
use std::path::{Path, PathBuf};

pub mod common_io;
#[cfg(feature = "json")]
mod json;
mod snapshot;

pub use snapshot::SNAPSHOT_SUFFIX;

/// `true` for `*.bin` and `*.bin.gz`.
fn is_snapshot_path(path: &Path) -> bool {
    let name = path
        .file_name()
        .map(|f| f.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    let name = name.strip_suffix(".gz").unwrap_or(&name);
    name.ends_with(&format!(".{SNAPSHOT_SUFFIX}"))
}

impl Catalog {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "places.json"
    }

    /// Loads the sample destinations shipped in `data/`.
    pub fn load_default() -> Result<Self> {
        Self::load_from_path(Self::default_data_dir().join(Self::default_dataset_filename()))
    }

    /// Loads a catalog, picking the parser from the file name:
    /// `*.bin[.gz]` is a snapshot, anything else is a JSON source.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if is_snapshot_path(path) {
            return Self::load_snapshot(path);
        }

        #[cfg(feature = "json")]
        {
            Self::load_json(path)
        }

        #[cfg(not(feature = "json"))]
        {
            Err(crate::error::PlaceError::InvalidData(format!(
                "{} is not a snapshot and the 'json' feature is disabled",
                path.display()
            )))
        }
    }
}
