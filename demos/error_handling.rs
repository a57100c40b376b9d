//! Error handling example for rwloc
//!
//! This example demonstrates load failures and lookups that find nothing.

use rwloc_core::prelude::*;

fn main() -> Result<()> {
    println!("=== rwloc Error Handling Example ===\n");

    // Example 1: Handling load errors
    println!("--- Example 1: Loading with error handling ---");
    match LocationIndex::load_default() {
        Ok(index) => {
            println!("✓ Dataset loaded successfully");
            println!("  Records: {}", index.len());
        }
        Err(e) => {
            eprintln!("✗ Failed to load dataset: {e}");
            return Err(e);
        }
    }
    println!();

    // Example 2: Bad inputs are reported, never half-loaded
    println!("--- Example 2: Rejected datasets ---");
    let options = LoadOptions::default();
    let inputs = [
        (
            "missing file",
            LocationIndex::load_from_path("/no/such/locations.json", &options),
        ),
        ("malformed JSON", LocationIndex::from_json_str("[{", &options)),
        ("empty array", LocationIndex::from_json_str("[]", &options)),
    ];
    for (label, result) in inputs {
        match result {
            Ok(_) => println!("  {label}: unexpectedly loaded"),
            Err(e) => println!("  {label}: {e}"),
        }
    }
    println!();

    let index = LocationIndex::load_default()?;

    // Example 3: Unknown codes
    println!("--- Example 3: Lookups that find nothing ---");
    for code in [0, 6, 99] {
        match index.find_province_by_code(code) {
            Some(p) => println!("  province {code}: {p}"),
            None => println!(
                "  province {code}: not found (valid code: {})",
                is_valid_province_code(code)
            ),
        }
    }
    if index.find_sector_by_code("INVALID").is_none() {
        println!("  sector INVALID: not found");
    }
    let path = index.full_path(123);
    println!("  full_path(123) found anything: {}", path.is_found());
    println!();

    // Example 4: Searches and filters with no hits
    println!("--- Example 4: Empty results ---");
    let hits = index.search(&SearchOptions::new("xyz").limit(10));
    println!("  search 'xyz': {} hits", hits.len());
    let contradictory = index.sectors(Some(101), Some(2));
    println!("  sectors of district 101 in province 2: {}", contradictory.len());

    // Example 5: Parsing user-supplied level names
    println!("\n--- Example 5: Parsing levels ---");
    for input in ["village", "Cell", "planet"] {
        match input.parse::<Level>() {
            Ok(level) => println!("  {input:?} -> {level} (parent: {:?})", level.parent()),
            Err(e) => println!("  {input:?} -> error: {e}"),
        }
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
