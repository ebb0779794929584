use std::time;
use thiserror::Error;

/// Error produced when a search fails.
///
/// Running out of frontier is not an error: strategies return an empty
/// plan in that case.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Step limit exhausted after {0} steps")]
    StepLimitExhausted(usize),

    #[error("Time limit exhausted after {0:?}")]
    TimeLimitExhausted(time::Duration),

    #[error("Negative step cost {cost} leaving state {state}")]
    NegativeStepCost { state: String, cost: String },
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
