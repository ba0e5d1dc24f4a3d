//! The transit data source the pipeline reads from.

use crate::digitransit::DigitransitClient;
use crate::domain::{SearchTerm, StopId, Timetable};

use super::error::BoardError;

/// Trait for providing stop and timetable data.
///
/// This abstraction allows the pipeline to be tested with mock data.
#[allow(async_fn_in_trait)]
pub trait TransitApi {
    /// Find stop ids matching a search term, in upstream order.
    async fn search_stops(&self, term: &SearchTerm) -> Result<Vec<StopId>, BoardError>;

    /// Get a stop's metadata and upcoming departures.
    async fn timetable(&self, stop: &StopId) -> Result<Timetable, BoardError>;
}

impl TransitApi for DigitransitClient {
    async fn search_stops(&self, term: &SearchTerm) -> Result<Vec<StopId>, BoardError> {
        Ok(DigitransitClient::search_stops(self, term).await?)
    }

    async fn timetable(&self, stop: &StopId) -> Result<Timetable, BoardError> {
        Ok(DigitransitClient::timetable(self, stop).await?)
    }
}
