// crates/cityfind-core/src/config.rs

/// Text shown to users when the dataset cannot be loaded.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Something went wrong";

/// Settings for a [`CityRepository`](crate::CityRepository).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryConfig {
    /// User-facing message stored in [`LoadState::Error`](crate::LoadState::Error).
    /// The underlying cause is kept alongside it.
    pub failure_message: String,
}

impl RepositoryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failure_message(mut self, message: impl Into<String>) -> Self {
        self.failure_message = message.into();
        self
    }
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            failure_message: DEFAULT_FAILURE_MESSAGE.to_string(),
        }
    }
}
