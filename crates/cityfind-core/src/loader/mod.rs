// crates/cityfind-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (I/O, decompression) and parses the bundled
//! dataset into [`CitiesRaw`] records.

use crate::error::{CityError, Result};
use crate::raw::CitiesRaw;
use crate::traits::CitySource;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod common_io;

/// The dataset compiled into the library.
static EMBEDDED_CITIES: &[u8] = include_bytes!("../../data/cities.json");

/// Where a [`BundledCities`] source reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetLocation {
    /// A JSON file on disk (`.json`, or `.json.gz` with the `compact` feature).
    Path(PathBuf),
    /// JSON bytes baked into the binary.
    Embedded(&'static [u8]),
}

/// The bundled, static city dataset.
///
/// Each [`fetch`](CitySource::fetch) performs one full read and parse; the
/// caching lives in [`CityRepository`](crate::CityRepository).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundledCities {
    location: DatasetLocation,
}

impl BundledCities {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "cities.json"
    }

    /// Read the dataset from any file.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            location: DatasetLocation::Path(path.as_ref().to_path_buf()),
        }
    }

    /// Use the copy of the dataset compiled into the library. Needs no files
    /// at runtime.
    pub fn embedded() -> Self {
        Self::from_bytes(EMBEDDED_CITIES)
    }

    /// Parse JSON bytes with a `'static` lifetime (e.g. from `include_bytes!`).
    pub fn from_bytes(bytes: &'static [u8]) -> Self {
        Self {
            location: DatasetLocation::Embedded(bytes),
        }
    }

    pub fn location(&self) -> &DatasetLocation {
        &self.location
    }
}

impl Default for BundledCities {
    /// `<cityfind-core>/data/cities.json`
    fn default() -> Self {
        Self::from_path(Self::default_data_dir().join(Self::default_dataset_filename()))
    }
}

impl CitySource for BundledCities {
    fn fetch(&self) -> Result<CitiesRaw> {
        let raw = match &self.location {
            DatasetLocation::Path(path) => {
                debug!(path = %path.display(), "reading city dataset");
                parse_reader(common_io::open_stream(path)?)?
            }
            DatasetLocation::Embedded(bytes) => {
                debug!(bytes = bytes.len(), "reading embedded city dataset");
                serde_json::from_slice(bytes).map_err(CityError::Json)?
            }
        };
        Ok(raw)
    }
}

fn parse_reader(reader: impl Read) -> Result<CitiesRaw> {
    serde_json::from_reader(reader).map_err(CityError::Json)
}
