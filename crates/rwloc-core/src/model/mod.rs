// crates/rwloc-core/src/model/mod.rs
pub mod entity;
pub mod level;
pub mod path;
pub mod record;

pub use entity::{Cell, District, Province, Sector, Village};
pub use level::{is_valid_district_code, is_valid_province_code, Level, ParseLevelError};
pub use path::FullPath;
pub use record::LocationRecord;
