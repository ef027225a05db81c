// crates/cityfind-core/src/state.rs
use crate::error::CityError;
use std::sync::Arc;

/// Readiness of a lazily loaded value.
///
/// ```text
/// Idle ──load()──▶ Loading ──▶ Success(data)
///                     │
///                     └──────▶ Error { message, cause }
/// ```
///
/// `Success` is final for the lifetime of its owner. `Error` stays until the
/// next explicit `load()`; nothing retries on its own.
#[derive(Debug, Clone)]
pub enum LoadState<T> {
    /// Nothing requested yet.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The loaded value.
    Success(T),
    /// The last attempt failed.
    Error {
        /// User-facing text.
        message: String,
        /// The underlying failure, kept for diagnostics.
        cause: Arc<CityError>,
    },
}

impl<T> LoadState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// `true` once an attempt has finished, successfully or not.
    pub fn is_settled(&self) -> bool {
        self.is_success() || self.is_error()
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> LoadState<U> {
        match self {
            Self::Idle => LoadState::Idle,
            Self::Loading => LoadState::Loading,
            Self::Success(data) => LoadState::Success(f(data)),
            Self::Error { message, cause } => LoadState::Error { message, cause },
        }
    }
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed() -> LoadState<u32> {
        LoadState::Error {
            message: "Something went wrong".into(),
            cause: Arc::new(CityError::InvalidData("bad".into())),
        }
    }

    #[test]
    fn predicates() {
        assert!(LoadState::<u32>::Idle.is_idle());
        assert!(LoadState::<u32>::Loading.is_loading());
        assert!(LoadState::Success(3).is_success());
        assert!(failed().is_error());

        assert!(!LoadState::<u32>::Idle.is_settled());
        assert!(!LoadState::<u32>::Loading.is_settled());
        assert!(LoadState::Success(3).is_settled());
        assert!(failed().is_settled());
    }

    #[test]
    fn data_only_on_success() {
        assert_eq!(LoadState::Success(7).data(), Some(&7));
        assert_eq!(LoadState::<u32>::Loading.data(), None);
        assert_eq!(failed().into_data(), None);
    }

    #[test]
    fn map_keeps_error_payload() {
        assert_eq!(LoadState::Success(2).map(|v| v * 10).into_data(), Some(20));
        match failed().map(|v| v + 1) {
            LoadState::Error { message, cause } => {
                assert_eq!(message, "Something went wrong");
                assert!(cause.is_parse_error());
            }
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[test]
    fn default_is_idle() {
        assert!(LoadState::<()>::default().is_idle());
    }
}
