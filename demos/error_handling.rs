//! Error handling example for cityfind-rs
//!
//! Load failures never panic or return `Err`; they end up in the state.

use cityfind_rs::prelude::*;

fn main() {
    println!("=== cityfind Error Handling Example ===\n");

    // Example 1: Missing dataset
    println!("--- Example 1: Missing dataset ---");
    let repo = CityRepository::with_config(
        BundledCities::from_path("does/not/exist/cities.json"),
        NoImages,
        RepositoryConfig::new().failure_message("Cities are unavailable"),
    );
    match repo.load() {
        LoadState::Error { message, cause } => {
            println!("✗ {message}");
            println!("  cause: {cause}");
            println!("  storage problem: {}", cause.is_io_error());
        }
        _ => println!("unexpected state"),
    }
    println!();

    // Example 2: Searching an unloaded repository is simply empty
    println!("--- Example 2: Search after failure ---");
    println!("  matches for \"a\": {}", repo.search("a").len());
    println!();

    // Example 3: A successful load
    println!("--- Example 3: Embedded dataset ---");
    let repo = CityRepository::new(BundledCities::embedded(), NoImages);
    if let LoadState::Success(cities) = repo.load() {
        println!("✓ Loaded {} cities", cities.len());
    }
}
