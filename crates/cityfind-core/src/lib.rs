// crates/cityfind-core/src/lib.rs

//! # cityfind-core
//!
//! An in-memory city index built from a bundled dataset.
//!
//! The crate has two moving parts:
//!
//! - [`CityRepository`]: a load-state cache. The dataset is fetched, mapped
//!   and sorted at most once, then published as an immutable snapshot that
//!   any number of readers share.
//! - [`search`]: a case-insensitive prefix lookup over the sorted snapshot
//!   that locates the matching window with two binary searches.
//!
//! ```no_run
//! use cityfind_core::prelude::*;
//!
//! let repo = CityRepository::new(BundledCities::default(), NoImages);
//! repo.load();
//! for city in repo.search("al").iter() {
//!     println!("{}, {}", city.name, city.country);
//! }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod error;
pub mod images;
pub mod loader; // The public loader
pub mod model;
pub mod prelude;
pub mod repository;
pub mod search;
pub mod state;
pub mod text;
pub mod traits;
// Raw input schema (strict)
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::config::RepositoryConfig;
pub use crate::error::{CityError, Result};
pub use crate::images::{FlagDirectory, NoImages};
pub use crate::loader::{BundledCities, DatasetLocation};
pub use crate::model::{City, CitySnapshot, Coordinates, DatasetStats, ImageHandle};
pub use crate::repository::{CityRepository, Matches};
pub use crate::state::LoadState;
pub use crate::traits::{CitySource, CountryImageSource};
