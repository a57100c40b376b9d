//! Synthetic nationwide-sized dataset shared by the scale tests and benches.
#![allow(dead_code)]

use rwloc_core::LocationRecord;

pub const PROVINCES: u32 = 5;
pub const DISTRICTS_PER_PROVINCE: u32 = 6;
pub const SECTORS_PER_DISTRICT: u32 = 14;
pub const CELLS_PER_SECTOR: u32 = 5;
pub const VILLAGES_PER_CELL: u32 = 7;

const PROVINCE_NAMES: [&str; 5] = ["KIGALI", "SOUTH", "WEST", "NORTH", "EAST"];

/// Builds a fully nested table of
/// 5 × 6 × 14 × 5 × 7 = 14,700 villages, in province-major order.
///
/// Codes follow the real layout: district `p0d`, sector `"ppddss"`,
/// cell `district * 10_000 + sector * 100 + cell`, village `cell * 100 + n`.
pub fn synthetic_records() -> Vec<LocationRecord> {
    let mut records = Vec::new();
    for p in 1..=PROVINCES {
        for d in 1..=DISTRICTS_PER_PROVINCE {
            let district_code = p * 100 + d;
            for s in 1..=SECTORS_PER_DISTRICT {
                let sector_code = format!("{p:02}{d:02}{s:02}");
                for c in 1..=CELLS_PER_SECTOR {
                    let cell_code = district_code * 10_000 + s * 100 + c;
                    for v in 1..=VILLAGES_PER_CELL {
                        let village_code = cell_code * 100 + v;
                        records.push(LocationRecord {
                            id: (records.len() + 1).to_string(),
                            country_code: "RW".into(),
                            country_name: "RWANDA".into(),
                            province_code: p,
                            province_name: PROVINCE_NAMES[(p - 1) as usize].into(),
                            district_code,
                            district_name: format!("District {district_code}"),
                            sector_code: sector_code.clone(),
                            sector_name: format!("Sector {sector_code}"),
                            cell_code,
                            cell_name: format!("Cell {cell_code}"),
                            village_code,
                            village_name: format!("Village {village_code}"),
                        });
                    }
                }
            }
        }
    }
    records
}
