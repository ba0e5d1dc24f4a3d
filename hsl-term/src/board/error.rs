//! Board pipeline error kinds.

use crate::digitransit::DigitransitError;
use crate::domain::DomainError;

/// Errors that end a board refresh cycle.
///
/// Every stage of the pipeline returns one of these kinds; the one-shot and
/// loop drivers decide what to do with each.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Input rejected before any request was made
    #[error("{0}")]
    Validation(#[from] DomainError),

    /// Upstream reported that the resource does not exist
    #[error("lookup failed: {0}")]
    Lookup(String),

    /// Network or HTTP failure
    #[error("transport error: {0}")]
    Transport(String),

    /// Response was missing expected fields or could not be parsed
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl From<DigitransitError> for BoardError {
    fn from(err: DigitransitError) -> Self {
        match &err {
            DigitransitError::NotFound => BoardError::Lookup(err.to_string()),
            DigitransitError::Http(_) | DigitransitError::ApiError { .. } => {
                BoardError::Transport(err.to_string())
            }
            DigitransitError::Json { .. }
            | DigitransitError::GraphQl(_)
            | DigitransitError::Conversion(_) => BoardError::MalformedResponse(err.to_string()),
        }
    }
}
