// crates/cityfind-core/src/model/convert.rs
use crate::model::{City, Coordinates};
use crate::raw::CitiesRaw;
use crate::traits::CountryImageSource;

/// **Raw -> Domain.** Maps every raw record into a [`City`], attaching the
/// flag resolved for its country. Input order is kept.
pub fn from_raw<I>(raw_cities: CitiesRaw, images: &I) -> Vec<City>
where
    I: CountryImageSource + ?Sized,
{
    raw_cities
        .into_iter()
        .map(|c_raw| City {
            image: images.resolve(&c_raw.country),
            id: c_raw.id,
            name: c_raw.name,
            country: c_raw.country,
            coordinates: Coordinates::new(c_raw.coordinates.lat, c_raw.coordinates.lon),
        })
        .collect()
}

/// Sorts ascending by [`City::search_key`].
///
/// The sort is stable: cities with identical keys keep their input order,
/// which the search engine then preserves in its results.
pub fn sort_by_search_key(mut cities: Vec<City>) -> Vec<City> {
    cities.sort_by_cached_key(City::search_key);
    cities
}
