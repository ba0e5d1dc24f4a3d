//! Departure board pipeline.
//!
//! Turns a free-text stop search into rendered departure boards:
//!
//! 1. [`resolve_stops`] validates the term and finds matching stop ids,
//! 2. [`fetch_timetables`] fetches each stop's departures in order,
//! 3. [`run_cycle`] sorts and normalizes them into [`Board`]s,
//! 4. [`run_loop`] repeats the cycle on a fixed period.

mod config;
mod error;
mod fetcher;
mod mock;
mod pipeline;
mod poll;
mod resolver;
mod source;

pub use config::BoardConfig;
pub use error::BoardError;
pub use fetcher::fetch_timetables;
pub use mock::MockTransitApi;
pub use pipeline::{Board, BoardRow, CycleOutcome, run_cycle};
pub use poll::run_loop;
pub use resolver::resolve_stops;
pub use source::TransitApi;
