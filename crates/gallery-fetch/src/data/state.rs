use std::sync::Arc;

use crate::error::FetchError;

/// State of one fetch as seen through an [`ObservableResult`](crate::ObservableResult).
///
/// A fetch starts in `Pending` and settles exactly once:
/// Pending → Success | Failure
///
/// Both settled states are terminal.
#[derive(Debug, Clone, Default)]
pub enum FetchState<T> {
    /// Request issued, nothing published yet.
    #[default]
    Pending,

    /// Response decoded and filtered.
    Success(T),

    /// Transport, status, or decode failure. No items were published.
    Failure(Arc<FetchError>),
}

impl<T> FetchState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Pending)
    }

    pub fn is_settled(&self) -> bool {
        !self.is_pending()
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            FetchState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&FetchError> {
        match self {
            FetchState::Failure(error) => Some(error.as_ref()),
            _ => None,
        }
    }

    /// Consume the state and return the published value, if any.
    pub fn into_success(self) -> Option<T> {
        match self {
            FetchState::Success(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> std::fmt::Display for FetchState<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchState::Pending => write!(f, "Pending"),
            FetchState::Success(_) => write!(f, "Success"),
            FetchState::Failure(e) => write!(f, "Failure: {e}"),
        }
    }
}
