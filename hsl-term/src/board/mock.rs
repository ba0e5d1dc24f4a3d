//! In-memory transit source for testing without API access.
//!
//! Serves canned search results and timetables, counts requests, and can
//! inject failures and latency.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use crate::domain::{SearchTerm, StopId, Timetable};

use super::error::BoardError;
use super::source::TransitApi;

/// Mock transit source.
///
/// Search terms without canned results resolve to zero stops; stops without
/// a canned timetable fail with [`BoardError::Lookup`].
#[derive(Default)]
pub struct MockTransitApi {
    searches: HashMap<String, Vec<StopId>>,
    timetables: HashMap<StopId, Timetable>,
    timetable_failures: HashMap<StopId, BoardError>,
    search_failures: Mutex<VecDeque<BoardError>>,
    latency: Duration,
    search_calls: Mutex<usize>,
    timetable_calls: Mutex<Vec<StopId>>,
}

impl MockTransitApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `term` to `stops`.
    pub fn with_search(mut self, term: &str, stops: Vec<StopId>) -> Self {
        self.searches.insert(term.to_string(), stops);
        self
    }

    /// Serve `timetable` for its stop id.
    pub fn with_timetable(mut self, timetable: Timetable) -> Self {
        self.timetables.insert(timetable.stop.id.clone(), timetable);
        self
    }

    /// Fail every timetable request for `stop`.
    pub fn with_timetable_failure(mut self, stop: StopId, error: BoardError) -> Self {
        self.timetable_failures.insert(stop, error);
        self
    }

    /// Fail the next search with `error`. Queued failures are used in order.
    pub fn with_search_failure(self, error: BoardError) -> Self {
        self.lock_search_failures().push_back(error);
        self
    }

    /// Delay every timetable response by `latency` (tokio time).
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Number of search requests made.
    pub fn search_calls(&self) -> usize {
        *self.search_calls.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Stops whose timetables were requested, in request order.
    pub fn timetable_calls(&self) -> Vec<StopId> {
        self.timetable_calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Total requests of either kind.
    pub fn total_calls(&self) -> usize {
        self.search_calls() + self.timetable_calls().len()
    }

    fn lock_search_failures(&self) -> std::sync::MutexGuard<'_, VecDeque<BoardError>> {
        self.search_failures
            .lock()
            .unwrap_or_else(|e| e.into_inner())
    }
}

impl TransitApi for MockTransitApi {
    async fn search_stops(&self, term: &SearchTerm) -> Result<Vec<StopId>, BoardError> {
        *self.search_calls.lock().unwrap_or_else(|e| e.into_inner()) += 1;

        if let Some(error) = self.lock_search_failures().pop_front() {
            return Err(error);
        }

        Ok(self.searches.get(term.as_str()).cloned().unwrap_or_default())
    }

    async fn timetable(&self, stop: &StopId) -> Result<Timetable, BoardError> {
        self.timetable_calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(stop.clone());

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if let Some(error) = self.timetable_failures.get(stop) {
            return Err(error.clone());
        }

        self.timetables
            .get(stop)
            .cloned()
            .ok_or_else(|| BoardError::Lookup(format!("no mock timetable for {stop}")))
    }
}
