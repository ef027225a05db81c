// crates/cityfind-core/src/error.rs
use thiserror::Error;

/// Everything that can go wrong while fetching the dataset.
///
/// Searching never fails, so this type only ever surfaces through
/// [`LoadState::Error`](crate::LoadState::Error) or from calling a
/// [`CitySource`](crate::CitySource) directly.
#[derive(Error, Debug)]
pub enum CityError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl CityError {
    /// The dataset could not be read from storage.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_) | Self::NotFound(_))
    }

    /// The dataset was readable but did not match the expected schema.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Json(_) | Self::InvalidData(_))
    }
}

pub type Result<T> = std::result::Result<T, CityError>;
