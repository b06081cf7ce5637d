use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur when validating the starting domain.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// One or both bounds are infinite.
    #[error("non-finite domain bound(s)")]
    NonFinite,

    /// The bounds are equal, giving zero width.
    #[error("zero width domain")]
    ZeroWidth,
}

/// Errors that can occur during interval Newton solving.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid domain: {0}")]
    InvalidDomain(#[from] DomainError),

    #[error("derivative evaluation failed")]
    Derivative(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn derivative<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Derivative(Box::new(err))
    }
}
