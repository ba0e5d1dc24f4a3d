//! Digitransit GraphQL request and response DTOs.
//!
//! These types map directly to the JSON exchanged with the routing API.
//! They use `Option` liberally because GraphQL fields are nullable and the
//! server returns `null` rather than omitting them; validation happens in
//! the conversion step.

use serde::{Deserialize, Serialize};

/// Body of a GraphQL POST request.
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<V> {
    pub query: &'static str,
    pub variables: V,
}

/// Variables for the stop search query.
#[derive(Debug, Clone, Serialize)]
pub struct StopSearchVariables<'a> {
    pub name: &'a str,
}

/// Variables for the timetable query.
#[derive(Debug, Clone, Serialize)]
pub struct TimetableVariables<'a> {
    pub id: &'a str,
    pub departures: u16,
}

/// Envelope of every GraphQL response.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    /// Query result. `null` when the query failed as a whole.
    pub data: Option<T>,

    /// Errors reported by the server, possibly alongside partial data.
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

/// A single GraphQL error entry.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// `data` of the stop search query.
#[derive(Debug, Clone, Deserialize)]
pub struct StopSearchData {
    pub stops: Option<Vec<StopMatch>>,
}

/// A stop matching a search term.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopMatch {
    /// GTFS id, e.g. "HSL:1174505".
    pub gtfs_id: Option<String>,

    /// Stop name.
    pub name: Option<String>,

    /// Short code on the stop sign.
    pub code: Option<String>,

    /// Latitude (WGS84).
    pub lat: Option<f64>,

    /// Longitude (WGS84).
    pub lon: Option<f64>,
}

/// `data` of the timetable query.
#[derive(Debug, Clone, Deserialize)]
pub struct TimetableData {
    pub stop: Option<StopTimetable>,
}

/// A stop with its upcoming stop-times.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopTimetable {
    pub gtfs_id: Option<String>,
    pub name: Option<String>,
    pub code: Option<String>,
    pub stoptimes_without_patterns: Option<Vec<StopTime>>,
}

/// One vehicle's visit to the stop.
///
/// All times are seconds since the start of `service_day`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopTime {
    pub scheduled_arrival: Option<i64>,
    pub realtime_arrival: Option<i64>,

    /// Arrival delay in seconds (negative when early).
    pub arrival_delay: Option<i64>,

    pub scheduled_departure: Option<i64>,
    pub realtime_departure: Option<i64>,

    /// Departure delay in seconds (negative when early).
    pub departure_delay: Option<i64>,

    /// Whether the realtime fields carry live data.
    pub realtime: Option<bool>,

    /// SCHEDULED, UPDATED, CANCELED, ADDED or MODIFIED.
    pub realtime_state: Option<String>,

    /// Unix seconds of the service day's midnight.
    pub service_day: Option<i64>,

    pub headsign: Option<String>,
    pub trip: Option<Trip>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Trip {
    pub route: Option<Route>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub short_name: Option<String>,
}
