use thiserror::Error;

/// Contract violations surfaced by the simulation pipeline. None of these are
/// transient: callers get them synchronously and there is no retry path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("cannot summarize an empty batch of trials")]
    EmptyBatch,

    #[error("malformed probability string: {0:?}")]
    MalformedProbabilityString(String),
}
