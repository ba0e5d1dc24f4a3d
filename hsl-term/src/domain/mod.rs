//! Domain types for the departure board.
//!
//! This module contains the validated values the rest of the crate works
//! with. All types enforce their invariants at construction time, so code
//! that receives these types can trust their validity.

mod departure;
mod error;
mod search;
mod stop;
mod time;

pub use departure::{Departure, Timetable, TimeSource};
pub use error::DomainError;
pub use search::{MIN_SEARCH_CHARS, SearchTerm};
pub use stop::{Stop, StopId};
pub use time::{Eta, ServiceTime};
