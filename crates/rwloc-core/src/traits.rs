// crates/rwloc-core/src/traits.rs
use crate::common::Statistics;
use crate::filter::{QueryFilter, SearchOptions};
use crate::model::{Cell, District, FullPath, LocationRecord, Province, Sector, Village};
use crate::text::normalize;

/// Name-based matching helpers for types that expose a canonical display name.
///
/// Implementors provide a `&str` view of their name via
/// [`NameMatch::name_str`], and get:
/// - [`NameMatch::is_named`]: equality after lowercasing + trimming
/// - [`NameMatch::name_contains`]: substring match on the same normal form
///
/// # Examples
/// ```rust
/// use rwloc_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("KIGALI").is_named(" kigali"));
/// assert!(Place("Nyarugenge").name_contains("RUGEN"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        normalize(self.name_str()) == normalize(q)
    }

    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        normalize(self.name_str()).contains(&normalize(q))
    }
}

/// The read-only query API of the location index.
///
/// Every operation is pure: the same index answers the same call identically,
/// and nothing here performs I/O or can fail. Single-entity lookups return
/// `None` when nothing matches; listings, queries and searches return an
/// empty `Vec` instead.
///
/// Listing arguments are ancestor constraints. `None` means unconstrained;
/// when several are given they are ANDed. Records are filtered first, then
/// deduplicated by code (first record seen wins), then sorted ascending by
/// code.
///
/// # Example
///
/// ```no_run
/// use rwloc_core::{LocationIndex, LocationSearch};
///
/// let index = LocationIndex::load_default().unwrap();
///
/// for district in index.districts(Some(1)) {
///     println!("{} ({})", district.name, district.code);
/// }
///
/// if let Some(village) = index.hierarchy(101010102) {
///     println!("{} is in {}", village.name, village.district_name);
/// }
/// ```
pub trait LocationSearch {
    /// Every flat record, in dataset order.
    fn records(&self) -> &[LocationRecord];

    /// All provinces, ordered by code.
    fn provinces(&self) -> Vec<Province>;
    fn find_province_by_code(&self, code: u32) -> Option<Province>;
    /// Case-insensitive (lowercased + trimmed) match on the province name.
    fn find_province_by_name(&self, name: &str) -> Option<Province>;

    fn districts(&self, province_code: Option<u32>) -> Vec<District>;
    fn find_district_by_code(&self, code: u32) -> Option<District>;

    /// Ordered by code using byte-wise string comparison, so `"10"` sorts
    /// before `"2"`.
    fn sectors(&self, district_code: Option<u32>, province_code: Option<u32>) -> Vec<Sector>;
    fn find_sector_by_code(&self, code: &str) -> Option<Sector>;

    fn cells(
        &self,
        sector_code: Option<&str>,
        district_code: Option<u32>,
        province_code: Option<u32>,
    ) -> Vec<Cell>;
    fn find_cell_by_code(&self, code: u32) -> Option<Cell>;

    fn villages(
        &self,
        cell_code: Option<u32>,
        sector_code: Option<&str>,
        district_code: Option<u32>,
        province_code: Option<u32>,
    ) -> Vec<Village>;
    fn find_village_by_code(&self, code: u32) -> Option<Village>;

    /// Records matching every field present in `filter`, in dataset order.
    fn query(&self, filter: &QueryFilter) -> Vec<&LocationRecord>;

    /// Records where any of the five names contains `options.query` as a
    /// literal substring, in dataset order, truncated to `options.limit`.
    fn search(&self, options: &SearchOptions) -> Vec<&LocationRecord>;

    /// The village with every ancestor's code and name embedded.
    fn hierarchy(&self, village_code: u32) -> Option<Village> {
        self.find_village_by_code(village_code)
    }

    /// Every level of a village's path, rebuilt from the village itself.
    /// An unknown code yields a path with all five levels absent.
    fn full_path(&self, village_code: u32) -> FullPath {
        self.find_village_by_code(village_code)
            .map(FullPath::from_village)
            .unwrap_or_default()
    }

    /// Counts of each unfiltered level listing.
    fn stats(&self) -> Statistics;
}
