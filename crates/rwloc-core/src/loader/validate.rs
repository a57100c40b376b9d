// crates/rwloc-core/src/loader/validate.rs
use crate::error::{Result, RwLocError};
use crate::model::{Level, LocationRecord};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;
use tracing::warn;

/// Checks that the flat table nests strictly: each district belongs to one
/// province, each sector to one district, each cell to one sector, and each
/// village code appears once. Returns the first violation found.
pub(crate) fn check_hierarchy(records: &[LocationRecord]) -> Result<()> {
    let mut district_parent = HashMap::new();
    let mut sector_parent = HashMap::new();
    let mut cell_parent = HashMap::new();
    let mut village_seen = HashMap::new();

    for r in records {
        same_parent(
            &mut district_parent,
            Level::District,
            r.district_code,
            r.province_code,
        )?;
        same_parent(
            &mut sector_parent,
            Level::Sector,
            r.sector_code.as_str(),
            r.district_code,
        )?;
        same_parent(
            &mut cell_parent,
            Level::Cell,
            r.cell_code,
            r.sector_code.as_str(),
        )?;
        if let Some(first_id) = village_seen.insert(r.village_code, r.id.as_str()) {
            return Err(inconsistent(
                Level::Village,
                r.village_code,
                format!("appears in records {first_id} and {}", r.id),
            ));
        }
    }
    Ok(())
}

fn same_parent<K, P>(seen: &mut HashMap<K, P>, level: Level, code: K, parent: P) -> Result<()>
where
    K: Hash + Eq + Display,
    P: PartialEq + Display,
{
    match seen.entry(code) {
        Entry::Vacant(slot) => {
            slot.insert(parent);
            Ok(())
        }
        Entry::Occupied(slot) if *slot.get() == parent => Ok(()),
        Entry::Occupied(slot) => {
            let parent_level = level.parent().unwrap_or(level);
            Err(inconsistent(
                level,
                slot.key(),
                format!(
                    "belongs to {parent_level} {} and {parent_level} {parent}",
                    slot.get()
                ),
            ))
        }
    }
}

fn inconsistent(level: Level, code: impl Display, detail: String) -> RwLocError {
    let code = code.to_string();
    warn!(%level, %code, %detail, "Dataset hierarchy is inconsistent");
    RwLocError::Inconsistent {
        level,
        code,
        detail,
    }
}
