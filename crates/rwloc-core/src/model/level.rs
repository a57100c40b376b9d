// crates/rwloc-core/src/model/level.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One level of the administrative hierarchy, outermost first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Province,
    District,
    Sector,
    Cell,
    Village,
}

impl Level {
    pub const ALL: [Level; 5] = [
        Level::Province,
        Level::District,
        Level::Sector,
        Level::Cell,
        Level::Village,
    ];

    /// The enclosing level; `None` for [`Level::Province`].
    pub fn parent(self) -> Option<Level> {
        match self {
            Level::Province => None,
            Level::District => Some(Level::Province),
            Level::Sector => Some(Level::District),
            Level::Cell => Some(Level::Sector),
            Level::Village => Some(Level::Cell),
        }
    }

    /// The directly nested level; `None` for [`Level::Village`].
    pub fn child(self) -> Option<Level> {
        match self {
            Level::Province => Some(Level::District),
            Level::District => Some(Level::Sector),
            Level::Sector => Some(Level::Cell),
            Level::Cell => Some(Level::Village),
            Level::Village => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Province => "province",
            Level::District => "district",
            Level::Sector => "sector",
            Level::Cell => "cell",
            Level::Village => "village",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown administrative level: {0:?}")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = crate::text::normalize(s);
        Level::ALL
            .into_iter()
            .find(|level| level.as_str() == key)
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

/// Province codes run from 1 (KIGALI) to 5 (EAST).
pub fn is_valid_province_code(code: u32) -> bool {
    (1..=5).contains(&code)
}

/// District codes are three digits, the first being the province code.
pub fn is_valid_district_code(code: u32) -> bool {
    (101..=599).contains(&code)
}
