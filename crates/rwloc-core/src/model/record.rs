// crates/rwloc-core/src/model/record.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of the flat dataset: a single village with its full ancestor chain.
///
/// Field names follow the dataset file (`province_code`, `sector_name`, ...).
/// Every field is required, so a record with a missing level fails to
/// deserialize and the whole load is rejected.
///
/// Codes are unique within a level only. District and cell codes are both
/// integers, and sector codes are strings such as `"010101"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub id: String,
    pub country_code: String,
    pub country_name: String,
    pub province_code: u32,
    pub province_name: String,
    pub district_code: u32,
    pub district_name: String,
    pub sector_code: String,
    pub sector_name: String,
    pub cell_code: u32,
    pub cell_name: String,
    pub village_code: u32,
    pub village_name: String,
}

impl LocationRecord {
    /// The five administrative names, province first.
    pub fn names(&self) -> [&str; 5] {
        [
            &self.province_name,
            &self.district_name,
            &self.sector_name,
            &self.cell_name,
            &self.village_name,
        ]
    }

    /// Human-readable path, village first:
    /// `"Gihanga, Akabahizi, Gitega, Nyarugenge, KIGALI"`.
    pub fn format_location(&self) -> String {
        format!(
            "{}, {}, {}, {}, {}",
            self.village_name,
            self.cell_name,
            self.sector_name,
            self.district_name,
            self.province_name
        )
    }
}

impl fmt::Display for LocationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_location())
    }
}
