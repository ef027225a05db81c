// crates/cityfind-core/src/raw.rs
use serde::Deserialize;

/// Raw city record as it comes from the bundled JSON.
///
/// ```json
/// { "country": "UA", "name": "Hurzuf", "_id": 707860,
///   "coord": { "lon": 34.283333, "lat": 44.549999 } }
/// ```
///
/// The schema is strict: an unknown field fails the whole parse.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CityRaw {
    #[serde(rename = "_id")]
    pub id: i64,
    pub name: String,
    pub country: String,
    #[serde(rename = "coord")]
    pub coordinates: CoordRaw,
}

/// Raw `coord` object.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoordRaw {
    pub lat: f64,
    pub lon: f64,
}

pub type CitiesRaw = Vec<CityRaw>;
