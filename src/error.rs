//! Error types

use thiserror::Error;

use crate::presence::Side;

/// Errors raised while building an [OptionPair](crate::OptionPair).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PairError {
    /// The container for one slot was missing altogether.
    ///
    /// An empty container is valid input, only a missing one is rejected.
    #[error("missing {0} container")]
    NullArgument(Side),
}

/// Errors observed when awaiting a [Task](crate::task::Task).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    /// The caller-supplied function panicked on the worker.
    #[error("task panicked: {0}")]
    Panicked(String),

    /// The worker went away without reporting an outcome.
    #[error("task was dropped before completing")]
    Canceled,
}
