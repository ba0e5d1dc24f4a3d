//! Digitransit routing API client.
//!
//! This module provides an HTTP client for the Digitransit GraphQL API,
//! which serves stop and timetable data for Finnish public transport.
//!
//! Key characteristics of Digitransit:
//! - Stops are identified by GTFS ids prefixed with the feed, e.g.
//!   `HSL:1174505`
//! - Departure times are a service day (Unix seconds of its midnight) plus
//!   seconds into that day, which can exceed 24 hours after midnight
//! - Realtime estimates are reported alongside the scheduled times

mod client;
mod convert;
mod error;
mod query;
mod types;

pub use client::{DigitransitClient, DigitransitConfig};
pub use convert::{ConversionError, convert_stop_search, convert_stop_time, convert_timetable};
pub use error::DigitransitError;
pub use query::{STOP_SEARCH, TIMETABLE};
pub use types::{
    GraphQlError, GraphQlRequest, GraphQlResponse, Route, StopMatch, StopSearchData,
    StopSearchVariables, StopTime, StopTimetable, TimetableData, TimetableVariables, Trip,
};
