//! Stop resolution: search term to stop ids.

use tracing::debug;

use crate::domain::{SearchTerm, StopId};

use super::error::BoardError;
use super::source::TransitApi;

/// Resolve a free-text search term to matching stop ids.
///
/// The term is validated before any request is made, so a term of three
/// characters or fewer fails with [`BoardError::Validation`] without
/// touching the network. An empty result is a valid "zero results"
/// outcome, not an error.
pub async fn resolve_stops<A: TransitApi>(api: &A, term: &str) -> Result<Vec<StopId>, BoardError> {
    let term = SearchTerm::parse(term)?;
    let stops = api.search_stops(&term).await?;
    debug!(term = %term, stops = ?stops, "resolved search term");
    Ok(stops)
}
