// crates/rwloc-core/src/search.rs
use crate::common::Statistics;
use crate::filter::{LevelFilter, QueryFilter, SearchOptions};
use crate::index::{project_sorted, LocationIndex};
use crate::model::{Cell, District, LocationRecord, Province, Sector, Village};
use crate::text::SearchTerm;
use crate::traits::{LocationSearch, NameMatch};

impl LocationIndex {
    /// Records passing `filter`, or every record when it is empty.
    fn filtered<'a>(
        &'a self,
        filter: LevelFilter<'a>,
    ) -> impl Iterator<Item = &'a LocationRecord> + 'a {
        self.records.iter().filter(move |r| filter.matches(r))
    }
}

impl LocationSearch for LocationIndex {
    fn records(&self) -> &[LocationRecord] {
        &self.records
    }

    fn provinces(&self) -> Vec<Province> {
        self.provinces.clone()
    }

    fn find_province_by_code(&self, code: u32) -> Option<Province> {
        self.provinces
            .binary_search_by_key(&code, |p| p.code)
            .ok()
            .map(|i| self.provinces[i].clone())
    }

    fn find_province_by_name(&self, name: &str) -> Option<Province> {
        self.province_names.iter().find(|p| p.is_named(name)).cloned()
    }

    fn districts(&self, province_code: Option<u32>) -> Vec<District> {
        let filter = LevelFilter {
            province_code,
            ..Default::default()
        };
        if filter.is_empty() {
            return self.districts.clone();
        }
        project_sorted(self.filtered(filter), |r| r.district_code)
    }

    fn find_district_by_code(&self, code: u32) -> Option<District> {
        self.districts
            .binary_search_by_key(&code, |d| d.code)
            .ok()
            .map(|i| self.districts[i].clone())
    }

    fn sectors(&self, district_code: Option<u32>, province_code: Option<u32>) -> Vec<Sector> {
        let filter = LevelFilter {
            province_code,
            district_code,
            ..Default::default()
        };
        if filter.is_empty() {
            return self.sectors.clone();
        }
        project_sorted(self.filtered(filter), |r| r.sector_code.as_str())
    }

    fn find_sector_by_code(&self, code: &str) -> Option<Sector> {
        self.sectors
            .binary_search_by(|s| s.code.as_str().cmp(code))
            .ok()
            .map(|i| self.sectors[i].clone())
    }

    fn cells(
        &self,
        sector_code: Option<&str>,
        district_code: Option<u32>,
        province_code: Option<u32>,
    ) -> Vec<Cell> {
        let filter = LevelFilter {
            province_code,
            district_code,
            sector_code,
            cell_code: None,
        };
        if filter.is_empty() {
            return self.cells.clone();
        }
        project_sorted(self.filtered(filter), |r| r.cell_code)
    }

    fn find_cell_by_code(&self, code: u32) -> Option<Cell> {
        self.cells
            .binary_search_by_key(&code, |c| c.code)
            .ok()
            .map(|i| self.cells[i].clone())
    }

    fn villages(
        &self,
        cell_code: Option<u32>,
        sector_code: Option<&str>,
        district_code: Option<u32>,
        province_code: Option<u32>,
    ) -> Vec<Village> {
        let filter = LevelFilter {
            province_code,
            district_code,
            sector_code,
            cell_code,
        };
        if filter.is_empty() {
            return self.villages.clone();
        }
        project_sorted(self.filtered(filter), |r| r.village_code)
    }

    fn find_village_by_code(&self, code: u32) -> Option<Village> {
        self.villages
            .binary_search_by_key(&code, |v| v.code)
            .ok()
            .map(|i| self.villages[i].clone())
    }

    fn query(&self, filter: &QueryFilter) -> Vec<&LocationRecord> {
        self.records.iter().filter(|r| filter.matches(r)).collect()
    }

    fn search(&self, options: &SearchOptions) -> Vec<&LocationRecord> {
        let term = SearchTerm::new(&options.query, options.case_sensitive);
        let hits = self
            .records
            .iter()
            .filter(|r| r.names().iter().any(|name| term.found_in(name)));
        match options.limit {
            Some(limit) => hits.take(limit).collect(),
            None => hits.collect(),
        }
    }

    fn stats(&self) -> Statistics {
        Statistics {
            total_provinces: self.provinces.len(),
            total_districts: self.districts.len(),
            total_sectors: self.sectors.len(),
            total_cells: self.cells.len(),
            total_villages: self.villages.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::tests::row;
    use crate::model::FullPath;

    fn fixture() -> LocationIndex {
        LocationIndex::new(vec![
            row((2, "SOUTH"), (201, "Nyanza"), ("020101", "Busasamana"), (2010101, "Kibinja"), (201010101, "Gihisi")),
            row((1, "KIGALI"), (101, "Nyarugenge"), ("010101", "Gitega"), (1010101, "Akabahizi"), (101010102, "Gihanga")),
            row((1, "KIGALI"), (101, "Nyarugenge"), ("010101", "Gitega"), (1010101, "Akabahizi"), (101010101, "Iterambere")),
            row((1, "KIGALI"), (101, "Nyarugenge"), ("010102", "Kanyinya"), (1010201, "Nyamweru"), (101020101, "Kagarama")),
            row((1, "KIGALI"), (102, "Gasabo"), ("010201", "Bumbogo"), (1020101, "Kinyaga"), (102010101, "Gasura")),
        ])
        .unwrap()
    }

    #[test]
    fn province_lookups() {
        let index = fixture();
        assert_eq!(index.find_province_by_code(1).unwrap().name, "KIGALI");
        assert!(index.find_province_by_code(0).is_none());
        assert!(index.find_province_by_code(999).is_none());
        assert_eq!(index.find_province_by_name("  south ").unwrap().code, 2);
        assert!(index.find_province_by_name("").is_none());
    }

    #[test]
    fn name_lookup_returns_first_matching_spelling() {
        let index = LocationIndex::new(vec![
            row((1, "KIGALI"), (101, "A"), ("1", "S"), (1, "C"), (1, "V")),
            row((1, "Kigali City"), (101, "A"), ("1", "S"), (1, "C"), (2, "W")),
        ])
        .unwrap();
        assert_eq!(index.find_province_by_name("kigali city").unwrap().name, "Kigali City");
        assert_eq!(index.provinces()[0].name, "KIGALI");
    }

    #[test]
    fn listings_filter_then_dedupe_then_sort() {
        let index = fixture();
        let codes: Vec<u32> = index.districts(Some(1)).iter().map(|d| d.code).collect();
        assert_eq!(codes, vec![101, 102]);

        let sectors = index.sectors(Some(101), Some(1));
        assert_eq!(sectors.len(), 2);
        assert!(sectors.iter().all(|s| s.district_code == 101));

        let villages = index.villages(Some(1010101), None, None, None);
        let codes: Vec<u32> = villages.iter().map(|v| v.code).collect();
        assert_eq!(codes, vec![101010101, 101010102]);
    }

    #[test]
    fn contradictory_filters_yield_empty() {
        let index = fixture();
        assert!(index.sectors(Some(201), Some(1)).is_empty());
        assert!(index.cells(Some("010101"), Some(102), None).is_empty());
        assert!(index.districts(Some(9)).is_empty());
    }

    #[test]
    fn zero_filter_is_a_constraint_not_absence() {
        let index = fixture();
        assert!(index.districts(Some(0)).is_empty());
        assert!(index.cells(Some(""), None, None).is_empty());
        assert_eq!(index.districts(None).len(), 3);
    }

    #[test]
    fn filtered_listing_keeps_first_record_in_scope() {
        // District 101 is (wrongly) listed under two provinces; filtering by
        // province 2 must project from the province-2 record.
        let index = LocationIndex::new(vec![
            row((1, "KIGALI"), (101, "Nyarugenge"), ("1", "S"), (1, "C"), (1, "V")),
            row((2, "SOUTH"), (101, "Nyarugenge"), ("1", "S"), (1, "C"), (2, "W")),
        ])
        .unwrap();
        let districts = index.districts(Some(2));
        assert_eq!(districts.len(), 1);
        assert_eq!(districts[0].province_name, "SOUTH");
        assert_eq!(index.find_district_by_code(101).unwrap().province_code, 1);
    }

    #[test]
    fn sector_codes_sort_lexically() {
        let index = LocationIndex::new(vec![
            row((1, "K"), (1, "D"), ("2", "Two"), (1, "C"), (1, "V")),
            row((1, "K"), (1, "D"), ("10", "Ten"), (2, "C"), (2, "V")),
        ])
        .unwrap();
        let codes: Vec<String> = index.sectors(None, None).into_iter().map(|s| s.code).collect();
        assert_eq!(codes, vec!["10", "2"]);
        assert_eq!(index.find_sector_by_code("2").unwrap().name, "Two");
        assert!(index.find_sector_by_code("02").is_none());
    }

    #[test]
    fn query_ands_codes_and_names() {
        let index = fixture();
        let hits = index.query(&QueryFilter::new().with_province_code(1).with_sector_name("GITEGA"));
        assert_eq!(hits.len(), 2);
        assert!(index
            .query(&QueryFilter::new().with_province_code(2).with_district_code(101))
            .is_empty());
        assert_eq!(index.query(&QueryFilter::new()).len(), index.len());
    }

    #[test]
    fn search_matches_any_name_literally() {
        let index = fixture();
        assert_eq!(index.search(&SearchOptions::new("gihanga")).len(), 1);
        assert_eq!(index.search(&SearchOptions::new("GiHaNgA")).len(), 1);
        // Province name matches every KIGALI row.
        assert_eq!(index.search(&SearchOptions::new("kigali")).len(), 4);
        assert!(index
            .search(&SearchOptions::new("kigali").case_sensitive(true))
            .is_empty());
        assert!(index.search(&SearchOptions::new("Gi.*a")).is_empty());
        assert!(index.search(&SearchOptions::new("(")).is_empty());
    }

    #[test]
    fn search_limit_keeps_dataset_order() {
        let index = fixture();
        let hits = index.search(&SearchOptions::new("kigali").limit(2));
        let ids: Vec<u32> = hits.iter().map(|r| r.village_code).collect();
        assert_eq!(ids, vec![101010102, 101010101]);
        assert!(index.search(&SearchOptions::new("kigali").limit(0)).is_empty());
    }

    #[test]
    fn empty_and_oversized_terms() {
        let index = fixture();
        assert_eq!(index.search(&SearchOptions::new("")).len(), index.len());
        let long = "x".repeat(10_000);
        assert!(index.search(&SearchOptions::new(long)).is_empty());
    }

    #[test]
    fn full_path_is_all_or_nothing() {
        let index = fixture();
        let path = index.full_path(101010102);
        assert!(path.is_found());
        assert_eq!(path.province.unwrap().code, 1);
        assert_eq!(path.district.unwrap().code, 101);
        assert_eq!(path.sector.unwrap().code, "010101");
        assert_eq!(path.cell.unwrap().code, 1010101);
        assert_eq!(path.village.unwrap().name, "Gihanga");

        assert_eq!(index.full_path(42), FullPath::default());
        assert_eq!(index.hierarchy(42), None);
    }

    #[test]
    fn stats_match_listings() {
        let index = fixture();
        let stats = index.stats();
        assert_eq!(stats.total_provinces, index.provinces().len());
        assert_eq!(stats.total_districts, 3);
        assert_eq!(stats.total_sectors, 4);
        assert_eq!(stats.total_cells, 4);
        assert_eq!(stats.total_villages, 5);
    }
}
