//! Umbrella crate for the cityfind workspace.
//!
//! Re-exports [`cityfind_core`] so the demos in `demos/` can be run from the
//! workspace root with `cargo run --example <name>`.

pub use cityfind_core::*;
