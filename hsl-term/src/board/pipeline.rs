//! One refresh cycle: search term to renderable boards.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::domain::Timetable;

use super::config::BoardConfig;
use super::error::BoardError;
use super::fetcher::fetch_timetables;
use super::resolver::resolve_stops;
use super::source::TransitApi;

/// One row of a departure board, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRow {
    pub route: String,
    /// Local `HH:MM`.
    pub departure_time: String,
    pub headsign: String,
    /// Countdown such as `~ 4 min`.
    pub eta: String,
}

/// A stop's departure board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Stop name and code.
    pub title: String,
    pub rows: Vec<BoardRow>,
}

impl Board {
    /// Build a board from a timetable, in the timetable's departure order.
    pub fn from_timetable(timetable: &Timetable, tz: &Tz, now: DateTime<Utc>) -> Self {
        let rows = timetable
            .departures
            .iter()
            .map(|departure| BoardRow {
                route: departure.route.clone(),
                departure_time: departure.time.clock(tz),
                headsign: departure.headsign.clone(),
                eta: departure.time.eta(now).to_string(),
            })
            .collect();

        Self {
            title: timetable.stop.title(),
            rows,
        }
    }
}

/// Result of a successful cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The search term matched no stops.
    NoResults,
    /// One board per matched stop, in match order.
    Boards(Vec<Board>),
}

/// Run one cycle: resolve the term, fetch each stop's timetable in order,
/// sort departures by instant and build the boards.
///
/// Nothing is returned until every fetch has completed, so dropping the
/// future part-way never yields a partial set of boards.
pub async fn run_cycle<A: TransitApi>(
    api: &A,
    config: &BoardConfig,
    term: &str,
    now: DateTime<Utc>,
) -> Result<CycleOutcome, BoardError> {
    let stops = resolve_stops(api, term).await?;
    if stops.is_empty() {
        return Ok(CycleOutcome::NoResults);
    }

    let mut timetables = fetch_timetables(api, &stops).await?;

    let boards = timetables
        .iter_mut()
        .map(|timetable| {
            timetable.sort_by_departure();
            Board::from_timetable(timetable, &config.timezone, now)
        })
        .collect();

    Ok(CycleOutcome::Boards(boards))
}
