// crates/placesearch-core/src/loader/snapshot.rs

//! Binary snapshots of a normalized catalog (bincode), plus the
//! "read the cache if fresh, otherwise rebuild and write it" loader.

use super::common_io;
use crate::error::Result;
use crate::model::Catalog;
use bincode::Options;
use log::{debug, warn};
use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression};

/// Extension appended to a source path to name its snapshot.
pub const SNAPSHOT_SUFFIX: &str = "bin";

/// Refuse to decode snapshots claiming more than this many bytes.
const SNAPSHOT_LIMIT: u64 = 256 * 1024 * 1024;

fn snapshot_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(SNAPSHOT_LIMIT)
        .allow_trailing_bytes()
}

impl Catalog {
    /// Decodes a snapshot produced by [`Catalog::to_bytes`].
    ///
    /// Records go through [`Catalog::new`] again, so a hand-made snapshot
    /// cannot smuggle in blank terms.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let decoded: Catalog = snapshot_options().deserialize(data)?;
        Ok(Catalog::new(decoded.into_places()))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(snapshot_options().serialize(self)?)
    }

    /// Writes a snapshot; a `.gz` path is gzip-compressed (needs `compact`).
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        let mut writer = BufWriter::new(File::create(path)?);

        if common_io::is_gzip(path) {
            #[cfg(feature = "compact")]
            {
                let mut encoder = GzEncoder::new(writer, Compression::default());
                encoder.write_all(&bytes)?;
                writer = encoder.finish()?;
            }
            #[cfg(not(feature = "compact"))]
            {
                return Err(crate::error::PlaceError::InvalidData(
                    "Gzip requested but 'compact' disabled".into(),
                ));
            }
        } else {
            writer.write_all(&bytes)?;
        }

        writer.flush()?;
        debug!("wrote snapshot of {} places to {}", self.len(), path.display());
        Ok(())
    }

    pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Self> {
        let mut reader = common_io::open_stream(path.as_ref())?;
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// **Smart Load:** uses `<source>.bin` when it is at least as new as the
    /// source, otherwise parses the JSON source and refreshes the snapshot.
    /// Failing to write the snapshot is logged, not returned.
    #[cfg(feature = "json")]
    pub fn load_via_cache(source: impl AsRef<Path>) -> Result<Self> {
        let source = source.as_ref();
        let cache_path = common_io::get_cache_path(source, SNAPSHOT_SUFFIX);

        if is_cache_fresh(source, &cache_path) {
            match Self::load_snapshot(&cache_path) {
                Ok(catalog) => return Ok(catalog),
                Err(e) => warn!("ignoring unreadable snapshot {}: {e}", cache_path.display()),
            }
        }

        let catalog = Self::load_json(source)?;
        if let Err(e) = catalog.save_as(&cache_path) {
            warn!("could not write snapshot {}: {e}", cache_path.display());
        }
        Ok(catalog)
    }
}

fn is_cache_fresh(source: &Path, cache_path: &Path) -> bool {
    let cache_time = match fs::metadata(cache_path).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    match fs::metadata(source).and_then(|m| m.modified()) {
        Ok(source_time) => source_time <= cache_time,
        // No source to compare against: trust the snapshot.
        Err(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlaceError;
    use crate::model::PlaceRecord;

    fn sample() -> Catalog {
        Catalog::new(vec![
            PlaceRecord::new("Rome, Italy", "r1")
                .with_coords(41.9, 12.5)
                .with_kind("city")
                .with_state("Lazio"),
            PlaceRecord::new("Colosseum, Rome", "c1").with_kind("landmark"),
        ])
    }

    #[test]
    fn bytes_restore_the_same_places() {
        let catalog = sample();
        let restored = Catalog::from_bytes(&catalog.to_bytes().unwrap()).unwrap();
        assert_eq!(restored.places(), catalog.places());
    }

    #[test]
    fn garbage_is_a_bincode_error() {
        let err = Catalog::from_bytes(&[0xff; 3]).err().unwrap();
        assert!(matches!(err, PlaceError::Bincode(_)));
    }

    #[test]
    fn save_and_load_plain_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("places.bin");
        sample().save_as(&path).unwrap();
        assert_eq!(Catalog::load_snapshot(&path).unwrap().len(), 2);
    }

    #[cfg(feature = "compact")]
    #[test]
    fn save_and_load_gzip_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("places.bin.gz");
        sample().save_as(&path).unwrap();
        let restored = Catalog::load_snapshot(&path).unwrap();
        assert_eq!(restored.places(), sample().places());
    }

    #[cfg(feature = "compact")]
    #[test]
    fn gzip_snapshot_ends_with_a_complete_trailer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("places.bin.gz");
        let catalog = sample();
        catalog.save_as(&path).unwrap();

        let raw = fs::read(&path).unwrap();
        let expected = catalog.to_bytes().unwrap();
        // ISIZE: uncompressed length mod 2^32, little-endian.
        let isize_field = u32::from_le_bytes(raw[raw.len() - 4..].try_into().unwrap());
        assert_eq!(isize_field as usize, expected.len());

        let mut decoded = Vec::new();
        flate2::read::GzDecoder::new(&raw[..])
            .read_to_end(&mut decoded)
            .unwrap();
        assert_eq!(decoded, expected);
    }

    #[test]
    fn missing_cache_is_not_fresh() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!is_cache_fresh(
            &dir.path().join("a.json"),
            &dir.path().join("a.json.bin")
        ));
    }
}
