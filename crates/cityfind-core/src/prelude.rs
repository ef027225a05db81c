//! cityfind prelude: bring common types and traits into scope for demos.

pub use crate::config::RepositoryConfig;
pub use crate::error::{CityError, Result};
pub use crate::images::{FlagDirectory, NoImages};
pub use crate::loader::{BundledCities, DatasetLocation};
pub use crate::model::{City, CitySnapshot, Coordinates, DatasetStats, ImageHandle};
pub use crate::repository::{CityRepository, Matches};
pub use crate::search::{prefix_range, prefix_search};
pub use crate::state::LoadState;
pub use crate::text::fold_key;
pub use crate::traits::{CitySource, CountryImageSource};
