// crates/rwloc-core/src/common.rs
use crate::model::Level;
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the index.
///
/// Returned by [`LocationSearch::stats`](crate::LocationSearch::stats).
/// Each count is the length of the corresponding unfiltered, deduplicated
/// level listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_provinces: usize,
    pub total_districts: usize,
    pub total_sectors: usize,
    pub total_cells: usize,
    pub total_villages: usize,
}

impl Statistics {
    pub fn count(&self, level: Level) -> usize {
        match level {
            Level::Province => self.total_provinces,
            Level::District => self.total_districts,
            Level::Sector => self.total_sectors,
            Level::Cell => self.total_cells,
            Level::Village => self.total_villages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_totals() {
        let stats = Statistics {
            total_provinces: 5,
            total_districts: 30,
            total_sectors: 416,
            total_cells: 2148,
            total_villages: 14837,
        };
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["totalProvinces"], 5);
        assert_eq!(json["totalVillages"], 14837);
        assert_eq!(stats.count(Level::Sector), 416);
    }
}
