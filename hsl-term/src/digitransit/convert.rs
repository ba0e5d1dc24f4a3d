//! Conversion from Digitransit DTOs to domain types.
//!
//! This module validates raw GraphQL payloads into the domain model and
//! picks the departure offset to display for each stop-time.

use tracing::warn;

use crate::domain::{Departure, ServiceTime, Stop, StopId, TimeSource, Timetable};

use super::types::{StopSearchData, StopTime, TimetableData};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Missing required field
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Field present but its value is unusable
    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

/// Convert stop search results to stop ids, keeping the API's order.
pub fn convert_stop_search(data: &StopSearchData) -> Result<Vec<StopId>, ConversionError> {
    let stops = data
        .stops
        .as_ref()
        .ok_or(ConversionError::MissingField("stops"))?;

    stops
        .iter()
        .map(|stop| {
            let gtfs_id = stop
                .gtfs_id
                .as_deref()
                .ok_or(ConversionError::MissingField("stops.gtfsId"))?;
            StopId::parse(gtfs_id).map_err(|e| ConversionError::InvalidField {
                field: "stops.gtfsId",
                reason: e.to_string(),
            })
        })
        .collect()
}

/// Convert a timetable response to a [`Timetable`].
///
/// A missing stop, stop name or stop-time list fails the whole conversion.
/// Individual stop-times that cannot be converted are logged and skipped.
pub fn convert_timetable(
    data: &TimetableData,
    requested: &StopId,
) -> Result<Timetable, ConversionError> {
    let stop = data
        .stop
        .as_ref()
        .ok_or(ConversionError::MissingField("stop"))?;

    let name = stop
        .name
        .as_deref()
        .ok_or(ConversionError::MissingField("stop.name"))?;

    // Older schema versions omit gtfsId on the timetable query.
    let id = match stop.gtfs_id.as_deref() {
        Some(gtfs_id) => StopId::parse(gtfs_id).map_err(|e| ConversionError::InvalidField {
            field: "stop.gtfsId",
            reason: e.to_string(),
        })?,
        None => requested.clone(),
    };

    let stop_times = stop
        .stoptimes_without_patterns
        .as_deref()
        .ok_or(ConversionError::MissingField("stop.stoptimesWithoutPatterns"))?;

    let mut departures = Vec::with_capacity(stop_times.len());
    for stop_time in stop_times {
        match convert_stop_time(stop_time) {
            Ok(departure) => departures.push(departure),
            Err(e) => warn!(stop = %id, error = %e, "skipping stop-time"),
        }
    }

    Ok(Timetable::new(
        Stop::new(id, name, stop.code.clone()),
        departures,
    ))
}

/// Convert a single stop-time to a [`Departure`].
pub fn convert_stop_time(stop_time: &StopTime) -> Result<Departure, ConversionError> {
    let route = stop_time
        .trip
        .as_ref()
        .and_then(|trip| trip.route.as_ref())
        .and_then(|route| route.short_name.as_deref())
        .ok_or(ConversionError::MissingField("trip.route.shortName"))?;

    let service_day = stop_time
        .service_day
        .ok_or(ConversionError::MissingField("serviceDay"))?;

    let (offset, source) = departure_offset(stop_time)?;

    let time = ServiceTime::new(service_day, offset).map_err(|e| ConversionError::InvalidField {
        field: "departure time",
        reason: e.to_string(),
    })?;

    // Some on-demand and replacement services have no headsign.
    let headsign = stop_time.headsign.clone().unwrap_or_default();

    Ok(Departure::new(route, headsign, time, source))
}

/// Pick the departure offset to display.
///
/// The realtime offset wins when the stop-time is flagged realtime and the
/// offset is present and non-negative; otherwise the scheduled offset is
/// used.
fn departure_offset(stop_time: &StopTime) -> Result<(i64, TimeSource), ConversionError> {
    if stop_time.realtime == Some(true)
        && let Some(realtime) = stop_time.realtime_departure
        && realtime >= 0
    {
        return Ok((realtime, TimeSource::Realtime));
    }

    let scheduled = stop_time
        .scheduled_departure
        .ok_or(ConversionError::MissingField("scheduledDeparture"))?;
    Ok((scheduled, TimeSource::Scheduled))
}
