// crates/cityfind-core/src/model/mod.rs
pub mod convert;

use crate::text::fold_key;
use serde::Serialize;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

/// The published dataset: every city, sorted ascending by
/// [`City::search_key`]. Immutable once built and cheap to clone.
pub type CitySnapshot = Arc<[City]>;

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Handle to the image shown next to a city (its country flag).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum ImageHandle {
    /// An image file on disk.
    Asset(PathBuf),
    /// No image available; the presentation layer draws its own placeholder.
    Placeholder,
}

/// A city entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct City {
    pub id: i64,
    pub name: String,
    /// ISO 3166-1 alpha-2 country code, e.g. `"US"`.
    pub country: String,
    pub image: ImageHandle,
    pub coordinates: Coordinates,
}

impl City {
    /// The key a snapshot is sorted by and queries are matched against:
    /// folded name and folded country code, joined by `", "`.
    ///
    /// ```rust
    /// use cityfind_core::{City, Coordinates, ImageHandle};
    ///
    /// let city = City {
    ///     id: 1,
    ///     name: "Sydney".into(),
    ///     country: "AU".into(),
    ///     image: ImageHandle::Placeholder,
    ///     coordinates: Coordinates::new(-33.87, 151.21),
    /// };
    /// assert_eq!(city.search_key(), "sydney, au");
    /// ```
    pub fn search_key(&self) -> String {
        format!("{}, {}", fold_key(&self.name), fold_key(&self.country))
    }
}

/// Simple aggregate statistics for a loaded snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatasetStats {
    pub cities: usize,
    /// Distinct country codes, compared case-insensitively.
    pub countries: usize,
}

impl DatasetStats {
    pub fn of(cities: &[City]) -> Self {
        let countries: HashSet<String> = cities.iter().map(|c| fold_key(&c.country)).collect();
        Self {
            cities: cities.len(),
            countries: countries.len(),
        }
    }
}
