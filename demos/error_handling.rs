//! Error handling example for geonames-rs
//!
//! This example demonstrates the error kinds: invalid arguments rejected
//! before any network traffic, and service failures surfaced from the
//! round trip.

use geonames_rs::prelude::*;

fn main() -> Result<()> {
    env_logger::init();
    println!("=== GeoNames-RS Error Handling Example ===\n");

    let svc = GeoNames::new();

    // Example 1: Rejecting a zero id
    println!("--- Example 1: Rejecting a zero id ---");
    match svc.get(0) {
        Ok(place) => println!("  Unexpected record: {}", place.name),
        Err(e) => println!("  Rejected locally: {e}"),
    }
    println!();

    // Example 2: Rejecting an empty search term
    println!("--- Example 2: Rejecting an empty search term ---");
    match svc.search("") {
        Ok(results) => println!("  Unexpected results: {}", results.len()),
        Err(e) => println!("  Rejected locally: {e}"),
    }
    println!();

    // Example 3: Classifying failures
    println!("--- Example 3: Classifying failures ---");
    let unreachable = GeoNames::with_base_url("http://localhost:9/")?;
    match unreachable.search("Copenhagen") {
        Ok(results) => println!("  Unexpected results: {}", results.len()),
        Err(e) if e.is_service_error() => println!("  Service failure: {e}"),
        Err(e) => println!("  Input problem: {e}"),
    }
    println!();

    // Example 4: Zero matches are not an error
    println!("--- Example 4: Zero matches ---");
    let results = svc.search("Xyzzyplugh")?;
    println!(
        "  Matches: {} (an empty result collection is a valid outcome)",
        results.len()
    );

    Ok(())
}
