// crates/placesearch-core/src/loader/common_io.rs
use crate::error::{PlaceError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

pub(crate) fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the path
/// ends in `.gz`. Returns a generic reader so callers don't care about the
/// compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        PlaceError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if !is_gzip(path) {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        use flate2::read::GzDecoder;
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(PlaceError::InvalidData(format!(
            "{} is gzip-compressed but the 'compact' feature is disabled",
            path.display()
        )))
    }
}

/// `places.json` -> `places.json.<suffix>`, next to the source.
pub fn get_cache_path(source: &Path, suffix: &str) -> PathBuf {
    let filename = source
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    source.with_file_name(format!("{filename}.{suffix}"))
}
