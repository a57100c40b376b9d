// crates/rwloc-core/src/model/entity.rs
//! Denormalized, read-only projections of the flat table, one per level.
//!
//! Each entity embeds the codes and names of all of its ancestors, so a
//! [`Village`] alone is enough to rebuild the whole administrative path.

use super::record::LocationRecord;
use crate::traits::NameMatch;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A province (`1` KIGALI, `2` SOUTH, `3` WEST, `4` NORTH, `5` EAST).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Province {
    pub code: u32,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct District {
    pub code: u32,
    pub name: String,
    pub province_code: u32,
    pub province_name: String,
}

/// A sector. Its code is a string (e.g. `"010101"`), not a number.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sector {
    pub code: String,
    pub name: String,
    pub district_code: u32,
    pub district_name: String,
    pub province_code: u32,
    pub province_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub code: u32,
    pub name: String,
    pub sector_code: String,
    pub sector_name: String,
    pub district_code: u32,
    pub district_name: String,
    pub province_code: u32,
    pub province_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Village {
    pub code: u32,
    pub name: String,
    pub cell_code: u32,
    pub cell_name: String,
    pub sector_code: String,
    pub sector_name: String,
    pub district_code: u32,
    pub district_name: String,
    pub province_code: u32,
    pub province_name: String,
}

// -----------------------------------------------------------------------------
// Projections from the flat table
// -----------------------------------------------------------------------------

impl From<&LocationRecord> for Province {
    fn from(r: &LocationRecord) -> Self {
        Province {
            code: r.province_code,
            name: r.province_name.clone(),
        }
    }
}

impl From<&LocationRecord> for District {
    fn from(r: &LocationRecord) -> Self {
        District {
            code: r.district_code,
            name: r.district_name.clone(),
            province_code: r.province_code,
            province_name: r.province_name.clone(),
        }
    }
}

impl From<&LocationRecord> for Sector {
    fn from(r: &LocationRecord) -> Self {
        Sector {
            code: r.sector_code.clone(),
            name: r.sector_name.clone(),
            district_code: r.district_code,
            district_name: r.district_name.clone(),
            province_code: r.province_code,
            province_name: r.province_name.clone(),
        }
    }
}

impl From<&LocationRecord> for Cell {
    fn from(r: &LocationRecord) -> Self {
        Cell {
            code: r.cell_code,
            name: r.cell_name.clone(),
            sector_code: r.sector_code.clone(),
            sector_name: r.sector_name.clone(),
            district_code: r.district_code,
            district_name: r.district_name.clone(),
            province_code: r.province_code,
            province_name: r.province_name.clone(),
        }
    }
}

impl From<&LocationRecord> for Village {
    fn from(r: &LocationRecord) -> Self {
        Village {
            code: r.village_code,
            name: r.village_name.clone(),
            cell_code: r.cell_code,
            cell_name: r.cell_name.clone(),
            sector_code: r.sector_code.clone(),
            sector_name: r.sector_name.clone(),
            district_code: r.district_code,
            district_name: r.district_name.clone(),
            province_code: r.province_code,
            province_name: r.province_name.clone(),
        }
    }
}

// -----------------------------------------------------------------------------
// Ancestors, rebuilt from the embedded fields (no table lookups)
// -----------------------------------------------------------------------------

impl District {
    pub fn province(&self) -> Province {
        Province {
            code: self.province_code,
            name: self.province_name.clone(),
        }
    }
}

impl Sector {
    pub fn district(&self) -> District {
        District {
            code: self.district_code,
            name: self.district_name.clone(),
            province_code: self.province_code,
            province_name: self.province_name.clone(),
        }
    }

    pub fn province(&self) -> Province {
        self.district().province()
    }
}

impl Cell {
    pub fn sector(&self) -> Sector {
        Sector {
            code: self.sector_code.clone(),
            name: self.sector_name.clone(),
            district_code: self.district_code,
            district_name: self.district_name.clone(),
            province_code: self.province_code,
            province_name: self.province_name.clone(),
        }
    }

    pub fn district(&self) -> District {
        self.sector().district()
    }

    pub fn province(&self) -> Province {
        self.sector().province()
    }
}

impl Village {
    pub fn cell(&self) -> Cell {
        Cell {
            code: self.cell_code,
            name: self.cell_name.clone(),
            sector_code: self.sector_code.clone(),
            sector_name: self.sector_name.clone(),
            district_code: self.district_code,
            district_name: self.district_name.clone(),
            province_code: self.province_code,
            province_name: self.province_name.clone(),
        }
    }

    pub fn sector(&self) -> Sector {
        self.cell().sector()
    }

    pub fn district(&self) -> District {
        self.cell().district()
    }

    pub fn province(&self) -> Province {
        self.cell().province()
    }
}

// -----------------------------------------------------------------------------
// Name matching + display
// -----------------------------------------------------------------------------

impl NameMatch for Province {
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl NameMatch for District {
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl NameMatch for Sector {
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl NameMatch for Cell {
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl NameMatch for Village {
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

impl fmt::Display for District {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}), {}", self.name, self.code, self.province_name)
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}), {}, {}",
            self.name, self.code, self.district_name, self.province_name
        )
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}), {}, {}, {}",
            self.name, self.code, self.sector_name, self.district_name, self.province_name
        )
    }
}

impl fmt::Display for Village {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}), {}, {}, {}, {}",
            self.name,
            self.code,
            self.cell_name,
            self.sector_name,
            self.district_name,
            self.province_name
        )
    }
}
