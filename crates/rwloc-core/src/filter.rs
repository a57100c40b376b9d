// crates/rwloc-core/src/filter.rs
//! Filter and search parameters.
//!
//! Every constraint is an explicit `Option`. `None` means "no constraint";
//! `Some(0)` and `Some("")` are real values that must match exactly.

use crate::model::LocationRecord;
use crate::text::matches_normalized;
use serde::{Deserialize, Serialize};

/// Multi-field filter for [`LocationSearch::query`](crate::LocationSearch::query).
///
/// All present fields are ANDed. Codes match by equality, names match after
/// lowercasing and trimming both sides. An empty filter matches every record.
/// Fields are not checked against each other: a district that lies outside
/// the given province simply matches nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryFilter {
    pub province_code: Option<u32>,
    pub province_name: Option<String>,
    pub district_code: Option<u32>,
    pub district_name: Option<String>,
    pub sector_code: Option<String>,
    pub sector_name: Option<String>,
    pub cell_code: Option<u32>,
    pub cell_name: Option<String>,
    pub village_code: Option<u32>,
    pub village_name: Option<String>,
}

impl QueryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_province_code(mut self, code: u32) -> Self {
        self.province_code = Some(code);
        self
    }

    pub fn with_province_name(mut self, name: impl Into<String>) -> Self {
        self.province_name = Some(name.into());
        self
    }

    pub fn with_district_code(mut self, code: u32) -> Self {
        self.district_code = Some(code);
        self
    }

    pub fn with_district_name(mut self, name: impl Into<String>) -> Self {
        self.district_name = Some(name.into());
        self
    }

    pub fn with_sector_code(mut self, code: impl Into<String>) -> Self {
        self.sector_code = Some(code.into());
        self
    }

    pub fn with_sector_name(mut self, name: impl Into<String>) -> Self {
        self.sector_name = Some(name.into());
        self
    }

    pub fn with_cell_code(mut self, code: u32) -> Self {
        self.cell_code = Some(code);
        self
    }

    pub fn with_cell_name(mut self, name: impl Into<String>) -> Self {
        self.cell_name = Some(name.into());
        self
    }

    pub fn with_village_code(mut self, code: u32) -> Self {
        self.village_code = Some(code);
        self
    }

    pub fn with_village_name(mut self, name: impl Into<String>) -> Self {
        self.village_name = Some(name.into());
        self
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, r: &LocationRecord) -> bool {
        code_ok(self.province_code, r.province_code)
            && name_ok(&self.province_name, &r.province_name)
            && code_ok(self.district_code, r.district_code)
            && name_ok(&self.district_name, &r.district_name)
            && self
                .sector_code
                .as_deref()
                .is_none_or(|code| code == r.sector_code)
            && name_ok(&self.sector_name, &r.sector_name)
            && code_ok(self.cell_code, r.cell_code)
            && name_ok(&self.cell_name, &r.cell_name)
            && code_ok(self.village_code, r.village_code)
            && name_ok(&self.village_name, &r.village_name)
    }
}

#[inline]
fn code_ok(wanted: Option<u32>, actual: u32) -> bool {
    wanted.is_none_or(|code| code == actual)
}

#[inline]
fn name_ok(wanted: &Option<String>, actual: &str) -> bool {
    wanted
        .as_deref()
        .is_none_or(|name| matches_normalized(name, actual))
}

/// Ancestor constraints for the level listings (`districts`, `sectors`, ...).
///
/// Built from the positional arguments of the listing methods; each present
/// code must match the record, and the constraints are ANDed.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct LevelFilter<'a> {
    pub province_code: Option<u32>,
    pub district_code: Option<u32>,
    pub sector_code: Option<&'a str>,
    pub cell_code: Option<u32>,
}

impl LevelFilter<'_> {
    pub fn is_empty(&self) -> bool {
        self.province_code.is_none()
            && self.district_code.is_none()
            && self.sector_code.is_none()
            && self.cell_code.is_none()
    }

    pub fn matches(&self, r: &LocationRecord) -> bool {
        code_ok(self.province_code, r.province_code)
            && code_ok(self.district_code, r.district_code)
            && self.sector_code.is_none_or(|code| code == r.sector_code)
            && code_ok(self.cell_code, r.cell_code)
    }
}

/// Options for [`LocationSearch::search`](crate::LocationSearch::search).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchOptions {
    /// Literal substring looked up in all five name fields.
    pub query: String,
    /// Defaults to `false`: term and names are lowercased before matching.
    pub case_sensitive: bool,
    /// Keep only the first `limit` matches, in dataset order.
    pub limit: Option<usize>,
}

impl SearchOptions {
    pub fn new(query: impl Into<String>) -> Self {
        SearchOptions {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn case_sensitive(mut self, yes: bool) -> Self {
        self.case_sensitive = yes;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}
