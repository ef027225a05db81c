//! Basic usage example for cityfind-rs
//!
//! This example demonstrates how to:
//! - Load the bundled city dataset once
//! - Search it by case-insensitive prefix
//! - Observe the load state from a second thread

use cityfind_rs::prelude::*;
use std::sync::Arc;
use std::thread;

fn main() {
    println!("=== cityfind Basic Usage Example ===\n");

    let repo = Arc::new(CityRepository::new(BundledCities::default(), NoImages));
    println!("Initial state idle: {}", repo.state().is_idle());

    // Example 1: Two callers race to load; only one fetch happens.
    println!("--- Example 1: Concurrent load ---");
    let preload = {
        let repo = Arc::clone(&repo);
        thread::spawn(move || repo.load())
    };
    let here = repo.load();
    let there = preload.join().expect("preload thread panicked");
    println!("main thread saw: {}", describe(&here));
    println!("preload thread saw: {}", describe(&there));
    println!();

    // Example 2: Prefix search
    println!("--- Example 2: Prefix search ---");
    for query in ["Al", "al", "london", "london, g", "Sydney", "Z", ""] {
        let matches = repo.search(query);
        println!("{query:?} -> {} match(es)", matches.len());
        for city in matches.iter().take(5) {
            println!("  - {}, {}", city.name, city.country);
        }
    }
    println!();

    // Example 3: Stats
    println!("--- Example 3: Stats ---");
    if let Some(stats) = repo.stats() {
        println!("Cities: {}", stats.cities);
        println!("Countries: {}", stats.countries);
    }
}

fn describe(state: &LoadState<CitySnapshot>) -> String {
    match state {
        LoadState::Idle => "idle".into(),
        LoadState::Loading => "loading".into(),
        LoadState::Success(cities) => format!("loaded {} cities", cities.len()),
        LoadState::Error { message, cause } => format!("error: {message} ({cause})"),
    }
}
