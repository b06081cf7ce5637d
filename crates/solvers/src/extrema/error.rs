use std::error::Error as StdError;

use thiserror::Error;

use crate::newton;

/// Errors that can occur while finding or ranking critical points.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Solver(#[from] newton::Error),

    #[error("derivative evaluation failed")]
    Derivative(#[source] Box<dyn StdError + Send + Sync>),

    #[error("objective evaluation failed")]
    Objective(#[source] Box<dyn StdError + Send + Sync>),

    #[error("no candidate points to compare")]
    NoCandidates,
}

impl Error {
    pub(crate) fn derivative<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Derivative(Box::new(err))
    }

    pub(crate) fn objective<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Objective(Box::new(err))
    }
}
