use thiserror::Error;

/// Errors from the tracking core.
///
/// The core does no I/O, so malformed input is its only failure mode. An
/// `update` call that returns this error has not mutated tracker state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackError {
    /// Non-finite or negative centroid coordinate, or a bad threshold.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
