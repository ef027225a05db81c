// crates/cityfind-core/src/repository.rs
use crate::config::RepositoryConfig;
use crate::error::CityError;
use crate::images::FlagDirectory;
use crate::loader::BundledCities;
use crate::model::convert::{from_raw, sort_by_search_key};
use crate::model::{City, CitySnapshot, DatasetStats};
use crate::search::prefix_range;
use crate::state::LoadState;
use crate::traits::{CitySource, CountryImageSource};
use once_cell::sync::Lazy;
use std::ops::{Deref, Range};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;
use tracing::{debug, error, info, instrument, warn};

// Single in-process repository over the bundled dataset.
static SHARED: Lazy<CityRepository<BundledCities, FlagDirectory>> =
    Lazy::new(|| CityRepository::new(BundledCities::default(), FlagDirectory::default()));

/// Load-state cache for the city dataset.
///
/// Owns one state cell holding a [`LoadState`]. [`load`](Self::load) fetches,
/// maps and sorts the dataset at most once and publishes it as an immutable
/// [`CitySnapshot`]; [`search`](Self::search) reads whatever snapshot is
/// currently published.
///
/// The repository is `Sync`; share it behind an `Arc` (or use
/// [`CityRepository::shared`]) and call `load` from as many threads as you
/// like. Only the caller that moves the cell out of `Idle` (or `Error`)
/// performs the fetch; everyone else gets the current state back.
pub struct CityRepository<S, I> {
    source: S,
    images: I,
    config: RepositoryConfig,
    state: watch::Sender<LoadState<CitySnapshot>>,
}

impl<S: CitySource, I: CountryImageSource> CityRepository<S, I> {
    pub fn new(source: S, images: I) -> Self {
        Self::with_config(source, images, RepositoryConfig::default())
    }

    pub fn with_config(source: S, images: I, config: RepositoryConfig) -> Self {
        let (state, _) = watch::channel(LoadState::Idle);
        Self {
            source,
            images,
            config,
            state,
        }
    }

    /// Loads the dataset unless it is already loading or loaded, and returns
    /// the resulting state.
    ///
    /// - `Loading` / `Success`: returned as-is, no fetch.
    /// - `Idle` / `Error`: the cell moves to `Loading`, the source is fetched,
    ///   records are mapped and sorted, and the cell ends in `Success` or
    ///   `Error`. Failures never escape as `Err`; they are only visible in the
    ///   returned (and published) state.
    #[instrument(level = "info", skip_all)]
    pub fn load(&self) -> LoadState<CitySnapshot> {
        // Check-then-act under the cell's write lock: exactly one caller
        // can observe Idle/Error and claim the fetch.
        let mut claimed = false;
        self.state.send_if_modified(|state| match state {
            LoadState::Loading | LoadState::Success(_) => false,
            LoadState::Idle | LoadState::Error { .. } => {
                *state = LoadState::Loading;
                claimed = true;
                true
            }
        });

        if !claimed {
            debug!("dataset already loading or loaded, skipping fetch");
            return self.state();
        }

        let guard = ClaimGuard {
            state: &self.state,
            message: &self.config.failure_message,
        };
        let started = Instant::now();
        let next = match self.source.fetch() {
            Ok(raw) => {
                let cities = sort_by_search_key(from_raw(raw, &self.images));
                info!(
                    cities = cities.len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "city dataset loaded"
                );
                LoadState::Success(CitySnapshot::from(cities))
            }
            Err(e) => {
                warn!(error = %e, "failed to load city dataset");
                LoadState::Error {
                    message: self.config.failure_message.clone(),
                    cause: Arc::new(e),
                }
            }
        };

        std::mem::forget(guard);
        self.state.send_replace(next.clone());
        next
    }

    /// Cities whose search key starts with `query` (case-insensitive), in
    /// snapshot order. Empty while the dataset is not loaded; never fails.
    pub fn search(&self, query: &str) -> Matches {
        match self.cities() {
            Some(snapshot) => {
                let range = prefix_range(&snapshot[..], query, City::search_key);
                Matches { snapshot, range }
            }
            None => Matches::empty(),
        }
    }

    /// Current state of the cell.
    pub fn state(&self) -> LoadState<CitySnapshot> {
        self.state.borrow().clone()
    }

    /// A receiver that observes every state transition. Presentation layers
    /// can `await` [`watch::Receiver::changed`] on it.
    pub fn subscribe(&self) -> watch::Receiver<LoadState<CitySnapshot>> {
        self.state.subscribe()
    }

    /// The published snapshot, if loaded.
    pub fn cities(&self) -> Option<CitySnapshot> {
        self.state.borrow().data().cloned()
    }

    pub fn stats(&self) -> Option<DatasetStats> {
        self.cities().map(|c| DatasetStats::of(&c))
    }

    /// Waits until the state is `Success` or `Error` and returns it.
    ///
    /// Only meaningful once some caller has started a [`load`](Self::load);
    /// on an `Idle` repository this waits until one does.
    pub async fn wait_settled(&self) -> LoadState<CitySnapshot> {
        let mut rx = self.subscribe();
        let settled = match rx.wait_for(LoadState::is_settled).await {
            Ok(state) => state.clone(),
            // The sender lives in `self`, so it cannot be gone here.
            Err(_) => self.state(),
        };
        settled
    }

    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }
}

/// Publishes `Error` if the claimed fetch unwinds, so the cell never stays
/// `Loading` after a panicking source.
struct ClaimGuard<'a> {
    state: &'a watch::Sender<LoadState<CitySnapshot>>,
    message: &'a str,
}

impl Drop for ClaimGuard<'_> {
    fn drop(&mut self) {
        error!("city source panicked during fetch");
        self.state.send_replace(LoadState::Error {
            message: self.message.to_string(),
            cause: Arc::new(CityError::InvalidData(
                "city source panicked during fetch".to_string(),
            )),
        });
    }
}

impl CityRepository<BundledCities, FlagDirectory> {
    /// Process-wide repository over the bundled dataset and default flag
    /// directory. Created on first use; loading still happens on `load()`.
    pub fn shared() -> &'static Self {
        &SHARED
    }
}

/// A window of matching cities inside a published snapshot.
///
/// Holds the snapshot alive and derefs to `[City]`; no city is copied.
#[derive(Debug, Clone)]
pub struct Matches {
    snapshot: CitySnapshot,
    range: Range<usize>,
}

impl Matches {
    pub fn empty() -> Self {
        Self {
            snapshot: CitySnapshot::from(Vec::new()),
            range: 0..0,
        }
    }

    /// Index window of the matches inside the snapshot.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn as_slice(&self) -> &[City] {
        &self.snapshot[self.range.clone()]
    }
}

impl Deref for Matches {
    type Target = [City];

    fn deref(&self) -> &[City] {
        self.as_slice()
    }
}

impl<'a> IntoIterator for &'a Matches {
    type Item = &'a City;
    type IntoIter = std::slice::Iter<'a, City>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
