//! rwloc prelude: bring the common types and traits into scope for demos and consumers.

pub use crate::common::Statistics;
pub use crate::error::{Result, RwLocError};
pub use crate::filter::{QueryFilter, SearchOptions};
pub use crate::index::LocationIndex;
pub use crate::loader::LoadOptions;
pub use crate::model::{
    is_valid_district_code, is_valid_province_code, Cell, District, FullPath, Level,
    LocationRecord, Province, Sector, Village,
};
pub use crate::text::{contains_term, matches_normalized, normalize, SearchTerm};
pub use crate::traits::{LocationSearch, NameMatch};
