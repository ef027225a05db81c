// crates/cityfind-core/src/traits.rs
use crate::error::Result;
use crate::model::ImageHandle;
use crate::raw::CitiesRaw;
use std::sync::Arc;

/// Where the raw dataset comes from.
///
/// Implementors read and parse the whole dataset in one call. The
/// [`CityRepository`](crate::CityRepository) calls this at most once per
/// successful load, so implementations need not cache anything themselves.
///
/// # Examples
/// ```rust
/// use cityfind_core::raw::{CitiesRaw, CityRaw, CoordRaw};
/// use cityfind_core::{CitySource, Result};
///
/// struct OneCity;
/// impl CitySource for OneCity {
///     fn fetch(&self) -> Result<CitiesRaw> {
///         Ok(vec![CityRaw {
///             id: 1,
///             name: "Cairo".into(),
///             country: "EG".into(),
///             coordinates: CoordRaw { lat: 30.06, lon: 31.25 },
///         }])
///     }
/// }
///
/// assert_eq!(OneCity.fetch().unwrap().len(), 1);
/// ```
pub trait CitySource: Send + Sync {
    fn fetch(&self) -> Result<CitiesRaw>;
}

/// Resolves the image shown for a country code.
///
/// Resolution is infallible: a miss yields the implementor's fallback
/// handle, never an error.
pub trait CountryImageSource: Send + Sync {
    fn resolve(&self, country: &str) -> ImageHandle;
}

impl<T: CitySource + ?Sized> CitySource for Arc<T> {
    fn fetch(&self) -> Result<CitiesRaw> {
        (**self).fetch()
    }
}

impl<T: CountryImageSource + ?Sized> CountryImageSource for Arc<T> {
    fn resolve(&self, country: &str) -> ImageHandle {
        (**self).resolve(country)
    }
}
