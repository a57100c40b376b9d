// crates/rwloc-core/src/model/path.rs
use super::entity::{Cell, District, Province, Sector, Village};
use serde::{Deserialize, Serialize};

/// Complete administrative path of a village, for breadcrumbs.
///
/// Either all five levels are present or none is: a path is only ever built
/// from a resolved [`Village`], and an unknown village yields
/// [`FullPath::default`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullPath {
    pub province: Option<Province>,
    pub district: Option<District>,
    pub sector: Option<Sector>,
    pub cell: Option<Cell>,
    pub village: Option<Village>,
}

impl FullPath {
    /// Rebuilds every ancestor from the fields embedded in `village`.
    pub fn from_village(village: Village) -> Self {
        FullPath {
            province: Some(village.province()),
            district: Some(village.district()),
            sector: Some(village.sector()),
            cell: Some(village.cell()),
            village: Some(village),
        }
    }

    pub fn is_found(&self) -> bool {
        self.village.is_some()
    }
}
