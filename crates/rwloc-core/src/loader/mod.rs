// crates/rwloc-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (file I/O, optional gzip) and turns a JSON
//! array of [`LocationRecord`]s into a [`LocationIndex`].
//!
//! Loading is all-or-nothing: a missing file, malformed JSON, a record with a
//! missing field or an empty table aborts construction, so a caller never
//! holds a half-built index.

use crate::error::{Result, RwLocError};
use crate::index::LocationIndex;
use crate::model::LocationRecord;
use std::io::Read;
use std::path::{Path, PathBuf};

pub(crate) mod common_io;
pub(crate) mod validate;

/// Load-time configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Reject datasets where a code maps to two different parents
    /// (e.g. one district listed under two provinces) or a village code
    /// repeats. Off by default; the query engine itself never relies on it.
    pub validate_hierarchy: bool,
}

impl LoadOptions {
    /// Options with hierarchy validation turned on.
    pub fn strict() -> Self {
        LoadOptions {
            validate_hierarchy: true,
        }
    }
}

impl LocationIndex {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "locations.json"
    }

    /// Loads the dataset bundled with this crate.
    pub fn load_default() -> Result<Self> {
        let path = Self::default_data_dir().join(Self::default_dataset_filename());
        Self::load_from_path(path, &LoadOptions::default())
    }

    /// Loads a JSON dataset from disk. Files ending in `.gz` are decompressed
    /// on the fly (requires the `compact` feature).
    pub fn load_from_path(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self> {
        let reader = common_io::open_stream(path.as_ref())?;
        Self::from_reader(reader, options)
    }

    /// Parses a JSON array of records from any reader.
    /// Read failures (including gzip decoding) surface as [`RwLocError::Io`],
    /// everything else as [`RwLocError::Json`].
    pub fn from_reader<R: Read>(reader: R, options: &LoadOptions) -> Result<Self> {
        let records: Vec<LocationRecord> = serde_json::from_reader(reader).map_err(|e| {
            if e.is_io() {
                RwLocError::Io(e.into())
            } else {
                RwLocError::Json(e)
            }
        })?;
        Self::with_options(records, options)
    }

    pub fn from_json_str(json: &str, options: &LoadOptions) -> Result<Self> {
        let records: Vec<LocationRecord> = serde_json::from_str(json)?;
        Self::with_options(records, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::LocationSearch;
    use std::io::Write;

    const TWO_ROWS: &str = r#"[
      {"id":"1","country_code":"RW","country_name":"RWANDA","province_code":1,"province_name":"KIGALI",
       "district_code":101,"district_name":"Nyarugenge","sector_code":"010101","sector_name":"Gitega",
       "cell_code":1010101,"cell_name":"Akabahizi","village_code":101010102,"village_name":"Gihanga"},
      {"id":"2","country_code":"RW","country_name":"RWANDA","province_code":3,"province_name":"WEST",
       "district_code":301,"district_name":"Karongi","sector_code":"030101","sector_name":"Bwishyura",
       "cell_code":3010101,"cell_name":"Burunga","village_code":301010101,"village_name":"Kiniha"}
    ]"#;

    #[test]
    fn loads_from_json_str() {
        let index = LocationIndex::from_json_str(TWO_ROWS, &LoadOptions::default()).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.provinces().len(), 2);
    }

    #[test]
    fn loads_plain_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(TWO_ROWS.as_bytes()).unwrap();

        let index = LocationIndex::load_from_path(file.path(), &LoadOptions::strict()).unwrap();
        assert!(index.find_village_by_code(301010101).is_some());
    }

    #[cfg(feature = "compact")]
    #[test]
    fn loads_gzipped_file() {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let file = tempfile::Builder::new().suffix(".json.gz").tempfile().unwrap();
        let mut encoder = GzEncoder::new(file.reopen().unwrap(), Compression::default());
        encoder.write_all(TWO_ROWS.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let index = LocationIndex::load_from_path(file.path(), &LoadOptions::default()).unwrap();
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn missing_file_is_not_found() {
        let result =
            LocationIndex::load_from_path("/nonexistent/locations.json", &LoadOptions::default());
        assert!(matches!(result, Err(RwLocError::NotFound(_))));
    }

    #[test]
    fn unreadable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = LocationIndex::load_from_path(dir.path(), &LoadOptions::default());
        assert!(matches!(result, Err(RwLocError::Io(_))));
    }

    #[cfg(feature = "compact")]
    #[test]
    fn corrupt_gzip_is_io_error() {
        let mut file = tempfile::Builder::new().suffix(".json.gz").tempfile().unwrap();
        file.write_all(TWO_ROWS.as_bytes()).unwrap();

        let result = LocationIndex::load_from_path(file.path(), &LoadOptions::default());
        assert!(matches!(result, Err(RwLocError::Io(_))));
    }

    #[test]
    fn malformed_json_fails() {
        let result = LocationIndex::from_json_str("[{\"id\": 1", &LoadOptions::default());
        assert!(matches!(result, Err(RwLocError::Json(_))));
    }

    #[test]
    fn missing_field_fails_whole_load() {
        let broken = TWO_ROWS.replacen(r#""village_name":"Kiniha""#, r#""other":"x""#, 1);
        let result = LocationIndex::from_json_str(&broken, &LoadOptions::default());
        assert!(matches!(result, Err(RwLocError::Json(_))));
    }

    #[test]
    fn empty_array_fails() {
        let result = LocationIndex::from_json_str("[]", &LoadOptions::default());
        assert!(matches!(result, Err(RwLocError::EmptyDataset)));
    }

    #[test]
    fn bundled_dataset_loads() {
        let index = LocationIndex::load_default().unwrap();
        assert!(!index.is_empty());
    }
}
