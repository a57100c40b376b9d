//! Basic usage example for rwloc
//!
//! This example demonstrates how to:
//! - Load the bundled location dataset
//! - List provinces and districts
//! - Look up entities by code and by name
//! - Search names and read the statistics

use rwloc_core::prelude::*;

fn main() -> Result<()> {
    println!("=== rwloc Basic Usage Example ===\n");

    // Load the index
    println!("Loading location dataset...");
    let index = LocationIndex::load_default()?;
    println!("✓ Index built from {} records\n", index.len());

    // Example 1: All provinces
    println!("--- Example 1: List all provinces ---");
    for province in index.provinces() {
        println!("{:>2}. {}", province.code, province.name);
    }
    println!();

    // Example 2: Province by name, then its districts
    println!("--- Example 2: Find province by name ---");
    if let Some(kigali) = index.find_province_by_name("kigali") {
        println!("Found: {kigali}");
        for district in index.districts(Some(kigali.code)) {
            println!("  - {} ({})", district.name, district.code);
        }
    }
    println!();

    // Example 3: Direct lookups at every level
    println!("--- Example 3: Lookups by code ---");
    if let Some(d) = index.find_district_by_code(101) {
        println!("District 101: {d}");
    }
    if let Some(s) = index.find_sector_by_code("010101") {
        println!("Sector 010101: {s}");
    }
    if let Some(c) = index.find_cell_by_code(1010101) {
        println!("Cell 1010101: {c}");
    }
    if let Some(v) = index.find_village_by_code(101010102) {
        println!("Village 101010102: {v}");
    }
    println!();

    // Example 4: Free-text search
    println!("--- Example 4: Search 'gihanga' ---");
    for record in index.search(&SearchOptions::new("gihanga")) {
        println!("  {record}");
    }
    println!();

    // Example 5: Statistics
    println!("--- Example 5: Statistics ---");
    let stats = index.stats();
    for level in Level::ALL {
        println!("  {:<9} {}", level, stats.count(level));
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
