//! Hierarchical navigation example for rwloc
//!
//! Walks the tree top-down with the filtered listings, climbs back up from a
//! village with `full_path`, and runs a multi-field query.

use rwloc_core::prelude::*;

fn main() -> Result<()> {
    println!("=== rwloc Hierarchical Navigation Example ===\n");

    let index = LocationIndex::load_default()?;

    // Example 1: Walk down the tree
    println!("--- Example 1: Province -> village ---");
    for province in index.provinces() {
        println!("{}", province.name);
        for district in index.districts(Some(province.code)) {
            println!("  {}", district.name);
            for sector in index.sectors(Some(district.code), None) {
                println!("    {} [{}]", sector.name, sector.code);
                for cell in index.cells(Some(&sector.code), None, None) {
                    let villages = index.villages(Some(cell.code), None, None, None);
                    let names: Vec<&str> = villages.iter().map(|v| v.name.as_str()).collect();
                    println!("      {}: {}", cell.name, names.join(", "));
                }
            }
        }
    }
    println!();

    // Example 2: Climb up from a village
    println!("--- Example 2: Full path of village 101010102 ---");
    let path = index.full_path(101010102);
    if let (Some(p), Some(d), Some(s), Some(c), Some(v)) =
        (&path.province, &path.district, &path.sector, &path.cell, &path.village)
    {
        println!("{} > {} > {} > {} > {}", p.name, d.name, s.name, c.name, v.name);
    }
    println!("As JSON:\n{}", serde_json::to_string_pretty(&path).unwrap_or_default());
    println!();

    // Example 3: Levels know their neighbours
    println!("--- Example 3: Level chain ---");
    let mut level = Some(Level::Province);
    while let Some(l) = level {
        print!("{l}");
        level = l.child();
        if level.is_some() {
            print!(" -> ");
        }
    }
    println!("\n");

    // Example 4: Multi-field query
    println!("--- Example 4: Query province 1, sector name 'gitega' ---");
    let filter = QueryFilter::new()
        .with_province_code(1)
        .with_sector_name("gitega");
    for record in index.query(&filter) {
        println!("  {}", record.format_location());
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
