//! cityfind-cli
//! ============
//!
//! Command-line interface for the `cityfind-core` city index.
//!
//! This crate primarily provides a binary (`cityfind`). The library target
//! holds the argument definitions and output formatting so they can be unit
//! tested.
//!
//! Basic usage:
//!
//! ```text
//! cityfind stats
//! cityfind search al
//! cityfind search "london, g" --json
//! cityfind --input ./cities.json.gz list -n 20
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;
pub mod output;
