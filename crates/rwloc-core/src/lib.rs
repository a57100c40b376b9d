// crates/rwloc-core/src/lib.rs
//! # rwloc-core
//!
//! Read-only, in-memory index over Rwanda's administrative divisions:
//! `province → district → sector → cell → village`.
//!
//! The index is built once from a flat table of [`LocationRecord`]s (one row
//! per village, carrying its full ancestor chain). All level projections are
//! derived eagerly at construction, so every query afterwards is a pure
//! in-memory scan or map lookup and the index can be shared freely between
//! threads.
//!
//! ```no_run
//! use rwloc_core::prelude::*;
//!
//! let index = LocationIndex::load_default()?;
//!
//! for province in index.provinces() {
//!     println!("{} {}", province.code, province.name);
//! }
//!
//! let path = index.full_path(101010102);
//! if let Some(village) = &path.village {
//!     println!("{village}");
//! }
//! # Ok::<(), rwloc_core::RwLocError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod error;
pub mod filter;
pub mod index;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod search;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::Statistics;
pub use crate::error::{Result, RwLocError};
pub use crate::filter::{QueryFilter, SearchOptions};
pub use crate::index::LocationIndex;
pub use crate::loader::LoadOptions;
pub use crate::model::{
    is_valid_district_code, is_valid_province_code, Cell, District, FullPath, Level,
    LocationRecord, Province, Sector, Village,
};
// Export the Search Trait (Crucial for users!)
pub use crate::traits::{LocationSearch, NameMatch};
