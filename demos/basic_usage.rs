//! Basic usage example for geonames-rs
//!
//! This example demonstrates how to:
//! - Search for places by name
//! - Fetch a single record by id
//! - Walk the place hierarchy (parent / children) lazily

use geonames_rs::prelude::*;

fn main() -> Result<()> {
    env_logger::init();
    println!("=== GeoNames-RS Basic Usage Example ===\n");

    let svc = GeoNames::new();

    // Example 1: Search by term
    println!("--- Example 1: Search for a place ---");
    let results = svc.search("Copenhagen")?;
    println!("Matches: {}", results.len());
    for (i, place) in results.iter().take(5).enumerate() {
        println!(
            "{}. {} ({}, {})",
            i + 1,
            place.name,
            place.country_name,
            place.fcode
        );
    }
    println!();

    // Example 2: Fetch a single record
    println!("--- Example 2: Fetch a single record ---");
    let copenhagen = svc.get(2618425)?;
    println!("Name: {}", copenhagen.name);
    println!(
        "Country: {} ({})",
        copenhagen.country_name, copenhagen.country_code
    );
    println!(
        "Coordinates: {}, {}",
        copenhagen.latitude, copenhagen.longitude
    );
    println!("Population: {}", copenhagen.population);
    println!(
        "Timezone: {} (UTC{:+})",
        copenhagen.timezone.name, copenhagen.timezone.gmt_offset
    );
    if let Some(danish) = copenhagen.alternate_name("da") {
        println!("Danish name: {danish}");
    }
    println!();

    // Example 3: Walk up the hierarchy
    println!("--- Example 3: Walk up to the root ---");
    let mut cursor = Some(copenhagen.clone());
    while let Some(place) = cursor {
        println!("- {} ({})", place.name, place.geoname_id);
        cursor = place.parent(&svc)?;
    }
    println!();

    // Example 4: List children
    println!("--- Example 4: Children of a record ---");
    let denmark = svc.get(2623032)?;
    let regions = denmark.children(&svc)?;
    println!("Children of {}: {}", denmark.name, regions.len());
    for (i, region) in regions.iter().take(5).enumerate() {
        println!("{}. {}", i + 1, region.name);
    }
    println!();

    // Example 5: Memoized relations
    println!("--- Example 5: Memoization ---");
    let fresh = svc.get(2618425)?;
    let start = std::time::Instant::now();
    let _ = fresh.parent(&svc)?;
    println!("First parent lookup: {:?}", start.elapsed());
    let start = std::time::Instant::now();
    let _ = fresh.parent(&svc)?;
    println!("Second parent lookup (cached): {:?}", start.elapsed());

    println!("\n=== Example completed successfully ===");
    Ok(())
}
