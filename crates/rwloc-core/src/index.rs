// crates/rwloc-core/src/index.rs
use crate::error::{Result, RwLocError};
use crate::loader::{validate, LoadOptions};
use crate::model::{Cell, District, LocationRecord, Province, Sector, Village};
use std::collections::{BTreeMap, HashSet};
use tracing::info;

/// The location index.
///
/// Holds the flat records exactly as loaded plus one deduplicated, sorted
/// projection per level, all computed once in [`LocationIndex::new`]. After
/// construction nothing is mutated, so an index can be shared across threads
/// (e.g. behind an `Arc`) without locking.
///
/// There is no process-wide default instance: build one at startup with
/// [`LocationIndex::load_default`] or [`LocationIndex::load_from_path`] and
/// pass it to whatever needs it.
#[derive(Clone, Debug)]
pub struct LocationIndex {
    pub(crate) records: Vec<LocationRecord>,
    pub(crate) provinces: Vec<Province>,
    pub(crate) districts: Vec<District>,
    /// Sorted by code, byte-wise.
    pub(crate) sectors: Vec<Sector>,
    pub(crate) cells: Vec<Cell>,
    pub(crate) villages: Vec<Village>,
    /// Distinct `(code, name)` province pairs in first-seen order, for
    /// name lookups that must return the first record's spelling.
    pub(crate) province_names: Vec<Province>,
}

impl LocationIndex {
    /// Build an index from already-parsed records, without hierarchy validation.
    pub fn new(records: Vec<LocationRecord>) -> Result<Self> {
        Self::with_options(records, &LoadOptions::default())
    }

    /// Build an index from already-parsed records.
    ///
    /// Fails on an empty table, and (when `options.validate_hierarchy` is set)
    /// on the first code that maps to two different parents.
    pub fn with_options(records: Vec<LocationRecord>, options: &LoadOptions) -> Result<Self> {
        if records.is_empty() {
            return Err(RwLocError::EmptyDataset);
        }
        if options.validate_hierarchy {
            validate::check_hierarchy(&records)?;
        }

        let index = LocationIndex {
            provinces: project_sorted(&records, |r| r.province_code),
            districts: project_sorted(&records, |r| r.district_code),
            sectors: project_sorted(&records, |r| r.sector_code.as_str()),
            cells: project_sorted(&records, |r| r.cell_code),
            villages: project_sorted(&records, |r| r.village_code),
            province_names: distinct_provinces(&records),
            records,
        };

        info!(
            records = index.records.len(),
            provinces = index.provinces.len(),
            districts = index.districts.len(),
            sectors = index.sectors.len(),
            cells = index.cells.len(),
            villages = index.villages.len(),
            "Built location index"
        );

        Ok(index)
    }

    /// Returns the number of flat records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a successfully built index.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Deduplicate `records` by `key` (first record seen wins) and project each
/// survivor into `T`, ordered ascending by key.
pub(crate) fn project_sorted<'a, K, T, I, F>(records: I, key: F) -> Vec<T>
where
    K: Ord,
    T: From<&'a LocationRecord>,
    I: IntoIterator<Item = &'a LocationRecord>,
    F: Fn(&'a LocationRecord) -> K,
{
    let mut seen: BTreeMap<K, &'a LocationRecord> = BTreeMap::new();
    for record in records {
        seen.entry(key(record)).or_insert(record);
    }
    seen.into_values().map(T::from).collect()
}

fn distinct_provinces(records: &[LocationRecord]) -> Vec<Province> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|r| seen.insert((r.province_code, r.province_name.as_str())))
        .map(Province::from)
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn row(
        province: (u32, &str),
        district: (u32, &str),
        sector: (&str, &str),
        cell: (u32, &str),
        village: (u32, &str),
    ) -> LocationRecord {
        LocationRecord {
            id: village.0.to_string(),
            country_code: "RW".into(),
            country_name: "RWANDA".into(),
            province_code: province.0,
            province_name: province.1.into(),
            district_code: district.0,
            district_name: district.1.into(),
            sector_code: sector.0.into(),
            sector_name: sector.1.into(),
            cell_code: cell.0,
            cell_name: cell.1.into(),
            village_code: village.0,
            village_name: village.1.into(),
        }
    }

    #[test]
    fn empty_dataset_fails_fast() {
        let result = LocationIndex::new(Vec::new());
        assert!(matches!(result, Err(RwLocError::EmptyDataset)));
    }

    #[test]
    fn projections_are_deduplicated_and_sorted() {
        let index = LocationIndex::new(vec![
            row((2, "SOUTH"), (201, "Nyanza"), ("2", "B"), (20, "C2"), (200, "V2")),
            row((1, "KIGALI"), (101, "Nyarugenge"), ("10", "A"), (10, "C1"), (100, "V1")),
            row((1, "KIGALI"), (101, "Nyarugenge"), ("10", "A"), (10, "C1"), (101, "V3")),
        ])
        .unwrap();

        let codes: Vec<u32> = index.provinces.iter().map(|p| p.code).collect();
        assert_eq!(codes, vec![1, 2]);
        assert_eq!(index.districts.len(), 2);
        assert_eq!(index.villages.len(), 3);

        // Byte-wise, "10" < "2".
        let sectors: Vec<&str> = index.sectors.iter().map(|s| s.code.as_str()).collect();
        assert_eq!(sectors, vec!["10", "2"]);
    }

    #[test]
    fn first_seen_name_wins() {
        let index = LocationIndex::new(vec![
            row((1, "KIGALI"), (101, "Nyarugenge"), ("1", "S"), (1, "C"), (1, "V")),
            row((1, "Kigali City"), (101, "NYARUGENGE"), ("1", "S"), (1, "C"), (2, "W")),
        ])
        .unwrap();

        assert_eq!(index.provinces[0].name, "KIGALI");
        assert_eq!(index.districts[0].name, "Nyarugenge");
        assert_eq!(index.province_names.len(), 2);
        assert_eq!(index.province_names[1].name, "Kigali City");
    }

    #[test]
    fn index_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LocationIndex>();
    }
}
